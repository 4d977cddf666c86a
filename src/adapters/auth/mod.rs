//! Authentication adapters.
//!
//! Implementations of the `IdentityProvider` port:
//!
//! - `jwt` - Verifies HS256 access tokens from the hosted auth service
//! - `mock` - Test implementation that needs no external service

mod jwt;
mod mock;

pub use jwt::{AccessClaims, JwtIdentityProvider, JwtSettings};
pub use mock::MockIdentityProvider;
