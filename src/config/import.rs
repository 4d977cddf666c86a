//! Import configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::import::ImportPolicy;

const MAX_PAYLOAD_CEILING: usize = 10 * 1024 * 1024;

/// Settings for `POST /api/proposals/import`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// How strictly pasted JSON is checked
    #[serde(default)]
    pub policy: ImportPolicy,

    /// Largest accepted import text, in bytes
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl ImportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_payload_bytes == 0 || self.max_payload_bytes > MAX_PAYLOAD_CEILING {
            return Err(ValidationError::InvalidPayloadLimit);
        }
        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            policy: ImportPolicy::default(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_max_payload_bytes() -> usize {
    256 * 1024
}
