use crate::connections::errors::ClientError;
use async_trait::async_trait;
use std::time::SystemTime;

/// A token minted by a credential, plus its expiry when the source knows it.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_on: Option<SystemTime>,
}

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self {
            token,
            expires_on: None,
        }
    }
}

/// A trait representing anything able to supply authentication tokens on
/// demand (ambient process identity, a fixed token, a test fake, ...).
///
/// The connection layer only stores and forwards implementations of this
/// trait; it never inspects how a token is produced.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    async fn get_token(&self, scopes: &[&str]) -> Result<AccessToken, ClientError>;
}

/// A credential wrapping a fixed, caller-supplied token.
pub struct StaticCredential {
    token: String,
}

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenCredential for StaticCredential {
    async fn get_token(&self, _scopes: &[&str]) -> Result<AccessToken, ClientError> {
        Ok(AccessToken::new(self.token.clone()))
    }
}
