//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::Extension;
use axum::response::IntoResponse;

use crate::application::services::SessionUser;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` greeting the logged-in user by the
/// display name cached on the session at login time.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    first_name: String,
    last_name: String,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// # Authentication
///
/// Reachable only through [`crate::web::middleware::web_auth`], which
/// injects the [`SessionUser`] extension consumed here.
pub async fn dashboard_handler(Extension(user): Extension<SessionUser>) -> impl IntoResponse {
    DashboardTemplate {
        first_name: user.first_name,
        last_name: user.last_name,
    }
}
