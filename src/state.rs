//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AuthService, SessionService};
use crate::infrastructure::persistence::{PgSessionRepository, PgUserRepository};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub session_service: Arc<SessionService<PgSessionRepository>>,
}
