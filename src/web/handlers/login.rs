//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, State};
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::web_auth;
use crate::web::routes::{DASHBOARD_PATH, LOGIN_PATH};

/// User-facing message for any infrastructure failure during login.
/// The underlying error is logged server-side and never shown.
const DB_ERROR_MESSAGE: &str = "Database error occurred";

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Accumulated error messages (empty on first load)
/// - The last-entered username, echoed back into the form
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    errors: Vec<String>,
    username: String,
}

/// Credentials submitted by the login form.
///
/// Both fields are required; the messages mirror what the form renders
/// inline when a field is left empty.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Redirects the site root to the login page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Redirect {
    Redirect::to(LOGIN_PATH)
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {
        errors: Vec::new(),
        username: String::new(),
    }
}

/// Processes a login attempt.
///
/// # Endpoint
///
/// `POST /login` (form-encoded `username`, `password`)
///
/// # Flow
///
/// 1. Require both fields; a missing field adds its message and skips the
///    credential check entirely (no database query)
/// 2. Verify credentials via [`crate::application::services::AuthService`]
/// 3. On success, open a session, set the session cookie, and redirect to
///    the dashboard
/// 4. On any failure, re-render the form with the error list and the echoed
///    username (template auto-escaping applies)
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let mut errors = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => field_messages(&e),
    };

    if errors.is_empty() {
        match try_login(&state, &form).await {
            Ok(response) => return response,
            Err(AppError::Unauthorized { message, .. }) => errors.push(message),
            Err(e) => {
                tracing::error!("login failed: {e}");
                errors.push(DB_ERROR_MESSAGE.to_string());
            }
        }
    }

    LoginTemplate {
        errors,
        username: form.username,
    }
    .into_response()
}

/// Verifies credentials, opens a session, and builds the redirect response.
async fn try_login(state: &AppState, form: &LoginForm) -> Result<Response, AppError> {
    let user = state
        .auth_service
        .verify_credentials(&form.username, &form.password)
        .await?;

    let token = state.session_service.open_session(&user).await?;

    tracing::info!(username = %user.username, "login successful");

    let cookie = web_auth::session_cookie(&token, state.session_service.ttl_seconds());
    Ok(([(SET_COOKIE, cookie)], Redirect::to(DASHBOARD_PATH)).into_response())
}

/// Flattens validation errors into display messages, in form-field order.
fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut messages = Vec::new();

    for field in ["username", "password"] {
        if let Some(list) = field_errors.get(field) {
            for error in list.iter() {
                if let Some(message) = &error.message {
                    messages.push(message.to_string());
                }
            }
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_messages_order_and_content() {
        let form = LoginForm {
            username: String::new(),
            password: String::new(),
        };

        let messages = field_messages(&form.validate().unwrap_err());

        assert_eq!(messages, vec!["Username is required", "Password is required"]);
    }

    #[test]
    fn test_missing_password_only() {
        let form = LoginForm {
            username: "ada".to_string(),
            password: String::new(),
        };

        let messages = field_messages(&form.validate().unwrap_err());

        assert_eq!(messages, vec!["Password is required"]);
    }

    #[test]
    fn test_complete_form_is_valid() {
        let form = LoginForm {
            username: "ada".to_string(),
            password: "hunter2".to_string(),
        };

        assert!(form.validate().is_ok());
    }
}
