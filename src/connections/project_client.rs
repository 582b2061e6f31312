use crate::connections::errors::ClientError;
use crate::credentials::credential::TokenCredential;
use log::debug;
use std::sync::Arc;

/// OAuth scope requested for Foundry project tokens.
const TOKEN_SCOPE: &str = "https://ai.azure.com/.default";

/// REST api-version spoken by the agent service.
const API_VERSION: &str = "2025-05-01";

/// An opaque handle to a Foundry project, built from an endpoint and a
/// credential. Constructing one performs no network I/O; the credential is
/// first exercised when a request header is minted.
pub struct ProjectClient {
    endpoint: String,
    credential: Arc<dyn TokenCredential>,
}

impl ProjectClient {
    /// Build a handle for `endpoint`. Fails when the endpoint is not an
    /// http(s) URL; reachability and auth are not checked here.
    pub fn new(
        credential: Arc<dyn TokenCredential>,
        endpoint: &str,
    ) -> Result<Self, ClientError> {
        let has_scheme = endpoint
            .strip_prefix("https://")
            .or_else(|| endpoint.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_scheme {
            return Err(ClientError::ConnectionError(format!(
                "invalid endpoint URL '{}'",
                endpoint
            )));
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credential,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// REST URL of a single agent resource under this project.
    pub fn agent_url(&self, agent_id: &str) -> String {
        format!(
            "{}/assistants/{}?api-version={}",
            self.endpoint, agent_id, API_VERSION
        )
    }

    /// Mint an `Authorization` header value for a project request.
    ///
    /// This is the point where a misconfigured credential surfaces; the
    /// handle itself was built without touching it.
    pub async fn authorization_header(&self) -> Result<String, ClientError> {
        debug!("Requesting token for '{}'", self.endpoint);
        let token = self.credential.get_token(&[TOKEN_SCOPE]).await?;
        Ok(format!("Bearer {}", token.token))
    }
}

/// Factory seam for building [`ProjectClient`] handles.
///
/// The connection manager goes through this trait so tests can substitute a
/// fake without a real service; `connect()` is a single synchronous attempt
/// with no retry or timeout layered on top.
pub trait ProjectClientFactory: Send + Sync {
    fn build(
        &self,
        credential: Arc<dyn TokenCredential>,
        endpoint: &str,
    ) -> Result<ProjectClient, ClientError>;
}

/// The real factory: constructs a [`ProjectClient`] directly.
pub struct FoundryProjectFactory;

impl ProjectClientFactory for FoundryProjectFactory {
    fn build(
        &self,
        credential: Arc<dyn TokenCredential>,
        endpoint: &str,
    ) -> Result<ProjectClient, ClientError> {
        ProjectClient::new(credential, endpoint)
    }
}
