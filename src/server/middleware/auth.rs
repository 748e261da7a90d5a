use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    service::authorization::is_authorized,
};

pub enum Permission<'p> {
    /// Visitor must administer the guild, according to the set cached at the last
    /// dashboard view.
    GuildAdmin(&'p str),
}

pub struct AuthGuard<'a> {
    session: &'a AuthSession,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a AuthSession) -> Self {
        Self { session }
    }

    /// Checks every permission against the session.
    ///
    /// Guild permissions are never recomputed from Discord here; a cached set that
    /// went stale stays authoritative until the visitor views the dashboard again.
    ///
    /// # Returns
    /// - `Ok(())` - All permissions held
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission is missing
    pub fn require(&self, permissions: &[Permission<'_>]) -> Result<(), AppError> {
        let admin_guild_ids = self.session.get_admin_guild_ids();

        for permission in permissions {
            match permission {
                Permission::GuildAdmin(guild_id) => {
                    if !is_authorized(guild_id, &admin_guild_ids) {
                        return Err(AuthError::AccessDenied(guild_id.to_string()).into());
                    }
                }
            }
        }

        Ok(())
    }
}
