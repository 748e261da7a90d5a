use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        auth::{callback, login, logout},
        dashboard::{dashboard, index, manage_guild, update_guild},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/logout", get(logout))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/{guild_id}", get(manage_guild))
        .route("/dashboard/{guild_id}/update", post(update_guild))
}

/// Complete application: routes, state and request tracing.
///
/// Sessions need no layer; handlers read and write them as signed cookies
/// through `AuthSession`.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
