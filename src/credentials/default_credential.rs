use crate::connections::errors::ClientError;
use crate::credentials::credential::{AccessToken, TokenCredential};
use async_trait::async_trait;
use log::debug;
use std::env;

/// Environment variable consulted first by [`DefaultCredential`].
pub const TOKEN_ENV_VAR: &str = "FOUNDRY_ACCESS_TOKEN";

#[cfg(feature = "keyring")]
const KEYRING_SERVICE: &str = "foundry_core";
#[cfg(feature = "keyring")]
const KEYRING_USER: &str = "access_token";

/// The process-ambient credential used when the caller supplies none.
///
/// Construction never fails, even on a machine with no identity configured;
/// the chain is only walked when a token is actually requested:
/// 1. the `FOUNDRY_ACCESS_TOKEN` environment variable
/// 2. the OS keyring entry `foundry_core/access_token` (feature `keyring`)
pub struct DefaultCredential;

impl DefaultCredential {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "keyring")]
    fn keyring_token() -> Option<String> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
        entry.get_password().ok()
    }
}

impl Default for DefaultCredential {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenCredential for DefaultCredential {
    async fn get_token(&self, scopes: &[&str]) -> Result<AccessToken, ClientError> {
        debug!("Resolving ambient credential for scopes {:?}", scopes);

        if let Ok(token) = env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                debug!("Using token from {}", TOKEN_ENV_VAR);
                return Ok(AccessToken::new(token));
            }
        }

        // Keyring access hits the platform secret service; keep it off the
        // async worker threads.
        #[cfg(feature = "keyring")]
        {
            let from_keyring = tokio::task::spawn_blocking(Self::keyring_token)
                .await
                .map_err(|e| ClientError::CredentialError(e.to_string()))?;
            if let Some(token) = from_keyring {
                debug!("Using token from OS keyring");
                return Ok(AccessToken::new(token));
            }
        }

        Err(ClientError::CredentialError(format!(
            "no ambient credential found; set {} or store a token in the OS keyring",
            TOKEN_ENV_VAR
        )))
    }
}
