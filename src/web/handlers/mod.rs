//! HTML template rendering and form handlers.

mod dashboard;
mod health;
mod login;
mod logout;

pub use dashboard::dashboard_handler;
pub use health::health_handler;
pub use login::{LoginForm, index_handler, login_page_handler, login_submit_handler};
pub use logout::logout_handler;
