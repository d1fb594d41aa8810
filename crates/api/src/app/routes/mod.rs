use axum::{routing::get, Router};

pub mod dashboard;
pub mod inventory;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/dashboard", get(dashboard::dashboard))
        .nest("/inventory", inventory::router())
}
