//! Deterministic **in-process stand-ins** for the two seams `FoundryClient`
//! exposes: the project-client factory and the token credential.
//!
//! * `FakeFactory` builds real `ProjectClient` values but tags each one's
//!   endpoint with `#build-N`, so a test can tell *which* connect attempt
//!   produced the handle it is looking at, and can count attempts.
//! * `FakeCredential` hands out a fixed token (or refuses to), letting tests
//!   exercise the deferred credential-failure path without any ambient
//!   identity on the machine running the tests.

#![allow(dead_code)]

use async_trait::async_trait;
use foundry_core::connections::{
    errors::ClientError,
    project_client::{ProjectClient, ProjectClientFactory},
};
use foundry_core::credentials::{AccessToken, TokenCredential};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct FakeFactory {
    builds: Arc<AtomicUsize>,
    /// Attempt index (0-based) from which `build` starts failing.
    fail_from: Option<usize>,
}

impl FakeFactory {
    /// A factory whose every build succeeds.
    pub fn new() -> Self {
        Self {
            builds: Arc::new(AtomicUsize::new(0)),
            fail_from: None,
        }
    }

    /// A factory whose every build fails.
    pub fn failing() -> Self {
        Self {
            builds: Arc::new(AtomicUsize::new(0)),
            fail_from: Some(0),
        }
    }

    /// A factory that succeeds for the first `n` builds, then fails.
    pub fn failing_after(n: usize) -> Self {
        Self {
            builds: Arc::new(AtomicUsize::new(0)),
            fail_from: Some(n),
        }
    }

    /// Shared attempt counter; clone this before boxing the factory.
    pub fn build_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.builds)
    }
}

impl ProjectClientFactory for FakeFactory {
    fn build(
        &self,
        credential: Arc<dyn TokenCredential>,
        endpoint: &str,
    ) -> Result<ProjectClient, ClientError> {
        let attempt = self.builds.fetch_add(1, Ordering::SeqCst);
        if self.fail_from.is_some_and(|n| attempt >= n) {
            return Err(ClientError::ConnectionError(format!(
                "simulated factory failure on attempt {}",
                attempt + 1
            )));
        }
        // Tag the endpoint so tests can identify which attempt built this
        // handle.
        ProjectClient::new(credential, &format!("{}#build-{}", endpoint, attempt + 1))
    }
}

pub struct FakeCredential {
    token: String,
    fail: bool,
}

impl FakeCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            fail: false,
        }
    }

    /// A credential that refuses to mint tokens.
    pub fn broken() -> Self {
        Self {
            token: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl TokenCredential for FakeCredential {
    async fn get_token(&self, _scopes: &[&str]) -> Result<AccessToken, ClientError> {
        if self.fail {
            return Err(ClientError::CredentialError(
                "simulated credential failure".into(),
            ));
        }
        Ok(AccessToken::new(self.token.clone()))
    }
}
