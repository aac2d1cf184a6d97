//! Pre-flight checks before remote operations.
//!
//! Validates that the API key is present before commands that would
//! otherwise fail on their first remote call.

use crate::error::{Result, SvarError};

/// Run pre-flight checks for a command that talks to the API.
pub fn check() -> Result<()> {
    check_api_key()
}

/// Check if the OpenAI API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(SvarError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(SvarError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}
