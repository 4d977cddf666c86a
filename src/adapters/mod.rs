//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Identity providers (HS256 access tokens, mock)
//! - `http` - axum REST API
//! - `postgres` - PostgreSQL proposal store
//! - `storage` - In-memory proposal store

pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;

pub use auth::{JwtIdentityProvider, JwtSettings, MockIdentityProvider};
pub use postgres::PostgresProposalRepository;
pub use storage::InMemoryProposalRepository;
