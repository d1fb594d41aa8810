//! HTTP application wiring (axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: shared state handed to handlers (the record store)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String) -> Router {
    let jwt = Arc::new(stocktrack_auth::Hs256JwtValidator::new(
        jwt_secret.into_bytes(),
    ));
    let auth_state = middleware::AuthState { jwt };

    let services = Arc::new(services::AppServices::in_memory());

    // Protected routes: require an authenticated principal.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
