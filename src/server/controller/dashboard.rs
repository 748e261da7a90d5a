use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::server::{
    controller::found,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::settings::UpdateGuildSettingsParam,
    service::{authorization::is_authorized, AdminGuildService, GuildSettingsService},
    state::AppState,
    view,
};

/// Form body of the settings update endpoint.
#[derive(Deserialize)]
pub struct UpdateGuildSettingsForm {
    pub prefix: Option<String>,
    pub log_channel: Option<String>,
}

pub async fn index(session: AuthSession) -> Response {
    if session.is_authenticated() {
        return found("/dashboard");
    }

    view::landing::landing_page().into_response()
}

pub async fn dashboard(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Response, AppError> {
    let result = match session.get_token() {
        Ok(Some(token)) => {
            AdminGuildService::new(state.discord.as_ref())
                .admin_guilds(&token)
                .await
        }
        Ok(None) => return Ok(found("/login")),
        Err(e) => Err(e),
    };

    let admin_guilds = match result {
        Ok(guilds) => guilds,
        Err(AppError::AuthErr(AuthError::MalformedToken | AuthError::TokenRejected)) => {
            return Ok((session.clear(), found("/login")).into_response());
        }
        Err(e) => return Err(e),
    };

    let session = session
        .set_admin_guild_ids(&admin_guilds.iter().map(|g| g.id.to_string()).collect())?;

    Ok((session, view::dashboard::dashboard_page(&admin_guilds)).into_response())
}

pub async fn manage_guild(
    State(state): State<AppState>,
    session: AuthSession,
    Path(guild_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let settings = GuildSettingsService::new(state.config_store.as_ref())
        .get(&guild_id)
        .await?;

    let is_admin = is_authorized(&guild_id, &session.get_admin_guild_ids());

    Ok(view::guild::guild_page(&guild_id, &settings, is_admin))
}

/// Replaces a guild's settings.
///
/// The admin check runs before the body is looked at, so an unauthorized request
/// is answered with 403 whatever it carries.
pub async fn update_guild(
    State(state): State<AppState>,
    session: AuthSession,
    Path(guild_id): Path<String>,
    form: Result<Form<UpdateGuildSettingsForm>, FormRejection>,
) -> Result<Response, AppError> {
    AuthGuard::new(&session).require(&[Permission::GuildAdmin(&guild_id)])?;

    let Form(form) = form?;

    GuildSettingsService::new(state.config_store.as_ref())
        .update(UpdateGuildSettingsParam {
            guild_id: guild_id.clone(),
            prefix: form.prefix,
            log_channel: form.log_channel,
        })
        .await?;

    Ok(found(&format!("/dashboard/{}", guild_id)))
}
