//! HS256 access-token adapter for the `IdentityProvider` port.
//!
//! The hosted auth service signs access tokens with a shared secret. This
//! adapter verifies them locally:
//!
//! 1. Signature (HS256) against the configured secret
//! 2. Audience and expiry, with a small clock leeway
//! 3. Session revocation, for sessions ended through `sign_out`
//!
//! Revoked sessions are keyed by the `session_id` claim when present, else by
//! the raw token. The revocation set lives in process memory; an entry is
//! dropped once every token it covers has expired.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::IdentityProvider;

/// Settings for token verification.
#[derive(Clone)]
pub struct JwtSettings {
    /// Shared HS256 signing secret.
    pub secret: SecretString,

    /// Expected `aud` claim.
    pub audience: String,

    /// Allowed clock skew in seconds.
    pub leeway_secs: u64,
}

impl JwtSettings {
    pub fn new(secret: SecretString, audience: impl Into<String>) -> Self {
        Self {
            secret,
            audience: audience.into(),
            leeway_secs: 30,
        }
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - the user ID
    pub sub: String,

    /// User's email address
    #[serde(default)]
    pub email: Option<String>,

    /// Provider session identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// Audience
    pub aud: String,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,
}

/// Verifies access tokens and tracks signed-out sessions.
pub struct JwtIdentityProvider {
    settings: JwtSettings,
    /// Revocation key -> latest `exp` seen for it.
    revoked: Arc<RwLock<HashMap<String, i64>>>,
}

impl JwtIdentityProvider {
    pub fn new(settings: JwtSettings) -> Self {
        Self {
            settings,
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn decode_claims(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.settings.audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        validation.leeway = self.settings.leeway_secs;

        let key = DecodingKey::from_secret(self.settings.secret.expose_secret().as_bytes());

        decode::<AccessClaims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }

    fn revocation_key(claims: &AccessClaims, token: &str) -> String {
        claims
            .session_id
            .clone()
            .unwrap_or_else(|| token.to_string())
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn current_user(&self, token: &str) -> Result<Option<AuthenticatedUser>, AuthError> {
        let claims = self.decode_claims(token)?;

        let key = Self::revocation_key(&claims, token);
        if let Some(exp) = self.revoked.write().await.get_mut(&key) {
            // Later tokens of the session keep the entry alive.
            *exp = (*exp).max(claims.exp);
            tracing::debug!("Token belongs to a signed-out session");
            return Ok(None);
        }

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(Some(AuthenticatedUser::new(
            user_id,
            claims.email.unwrap_or_default(),
            claims.session_id,
        )))
    }

    async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        let claims = match self.decode_claims(token) {
            Ok(claims) => claims,
            // Nothing left to end.
            Err(AuthError::TokenExpired) => return Ok(()),
            Err(e) => return Err(e),
        };

        let key = Self::revocation_key(&claims, token);
        tracing::info!(user_id = %claims.sub, "Session signed out");

        let leeway = i64::try_from(self.settings.leeway_secs).unwrap_or(i64::MAX);
        let now = chrono::Utc::now().timestamp();
        let mut revoked = self.revoked.write().await;
        // Tokens past exp + leeway fail decoding, so their entries are dead.
        revoked.retain(|_, exp| exp.saturating_add(leeway) >= now);
        let exp = revoked.entry(key).or_insert(claims.exp);
        *exp = (*exp).max(claims.exp);
        Ok(())
    }
}

impl std::fmt::Debug for JwtIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIdentityProvider")
            .field("audience", &self.settings.audience)
            .field("leeway_secs", &self.settings.leeway_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-signing-secret";
    const AUDIENCE: &str = "proposal-desk";

    fn provider() -> JwtIdentityProvider {
        JwtIdentityProvider::new(JwtSettings::new(
            SecretString::new(SECRET.to_string()),
            AUDIENCE,
        ))
    }

    fn token_with(secret: &str, aud: &str, exp_offset: i64, session_id: Option<&str>) -> String {
        let claims = AccessClaims {
            sub: "user-42".to_string(),
            email: Some("owner@example.com".to_string()),
            session_id: session_id.map(str::to_string),
            aud: aud.to_string(),
            exp: chrono::Utc::now().timestamp() + exp_offset,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_token(session_id: Option<&str>) -> String {
        token_with(SECRET, AUDIENCE, 3600, session_id)
    }

    #[tokio::test]
    async fn valid_token_resolves_user() {
        let user = provider()
            .current_user(&valid_token(Some("sess-1")))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id.as_str(), "user-42");
        assert_eq!(user.email, "owner@example.com");
        assert_eq!(user.session_id.as_deref(), Some("sess-1"));
    }

    #[tokio::test]
    async fn wrong_secret_is_invalid() {
        let token = token_with("other-secret", AUDIENCE, 3600, None);
        let result = provider().current_user(&token).await;
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn wrong_audience_is_invalid() {
        let token = token_with(SECRET, "someone-else", 3600, None);
        let result = provider().current_user(&token).await;
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let token = token_with(SECRET, AUDIENCE, -3600, None);
        let result = provider().current_user(&token).await;
        assert_eq!(result, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        let result = provider().current_user("not-a-jwt").await;
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn sign_out_ends_every_token_of_the_session() {
        let provider = provider();
        let first = valid_token(Some("sess-7"));
        let second = token_with(SECRET, AUDIENCE, 7200, Some("sess-7"));

        provider.sign_out(&first).await.unwrap();

        assert_eq!(provider.current_user(&first).await, Ok(None));
        assert_eq!(provider.current_user(&second).await, Ok(None));
    }

    #[tokio::test]
    async fn sign_out_without_session_claim_revokes_only_that_token() {
        let provider = provider();
        let token = valid_token(None);
        let other = token_with(SECRET, AUDIENCE, 7200, None);

        provider.sign_out(&token).await.unwrap();

        assert_eq!(provider.current_user(&token).await, Ok(None));
        assert!(provider.current_user(&other).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn signing_out_twice_is_fine() {
        let provider = provider();
        let token = valid_token(Some("sess-2"));
        provider.sign_out(&token).await.unwrap();
        assert!(provider.sign_out(&token).await.is_ok());
    }

    #[tokio::test]
    async fn signing_out_an_expired_token_is_a_no_op() {
        let token = token_with(SECRET, AUDIENCE, -3600, None);
        assert!(provider().sign_out(&token).await.is_ok());
    }

    #[tokio::test]
    async fn sign_out_drops_entries_whose_tokens_have_expired() {
        let provider = provider();
        let stale = chrono::Utc::now().timestamp() - 3600;
        provider
            .revoked
            .write()
            .await
            .insert("sess-old".to_string(), stale);

        provider.sign_out(&valid_token(Some("sess-new"))).await.unwrap();

        let revoked = provider.revoked.read().await;
        assert!(!revoked.contains_key("sess-old"));
        assert!(revoked.contains_key("sess-new"));
    }

    #[tokio::test]
    async fn entries_within_leeway_are_kept() {
        let provider = provider();
        let recent = chrono::Utc::now().timestamp() - 5;
        provider
            .revoked
            .write()
            .await
            .insert("sess-recent".to_string(), recent);

        provider.sign_out(&valid_token(Some("sess-new"))).await.unwrap();

        assert!(provider.revoked.read().await.contains_key("sess-recent"));
    }

    #[tokio::test]
    async fn later_token_of_a_revoked_session_extends_its_entry() {
        let provider = provider();
        let first = token_with(SECRET, AUDIENCE, 600, Some("sess-9"));
        let later = token_with(SECRET, AUDIENCE, 7200, Some("sess-9"));

        provider.sign_out(&first).await.unwrap();
        assert_eq!(provider.current_user(&later).await, Ok(None));

        let exp = provider.revoked.read().await["sess-9"];
        assert!(exp >= chrono::Utc::now().timestamp() + 7000);
    }

    #[test]
    fn debug_output_hides_secret() {
        let output = format!("{:?}", provider());
        assert!(!output.contains(SECRET));
        assert!(output.contains(AUDIENCE));
    }

    #[test]
    fn jwt_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtIdentityProvider>();
    }
}
