//! HTTP adapter for session endpoints.

mod handlers;
mod routes;

pub use handlers::AuthHandlers;
pub use routes::auth_routes;
