//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module of DTOs, handlers and routes; `router`
//! mounts them under `/api`.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod proposal;
mod router;

pub use error::ErrorResponse;
pub use router::api_router;
