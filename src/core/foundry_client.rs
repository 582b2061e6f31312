use crate::connections::errors::ClientError;
use crate::connections::project_client::{
    FoundryProjectFactory, ProjectClient, ProjectClientFactory,
};
use crate::credentials::credential::TokenCredential;
use crate::credentials::default_credential::DefaultCredential;
use crate::storage::profile::Profile;
use crate::storage::store::ProfileStore;
use log::{debug, error, info};
use std::sync::Arc;

/// Project endpoint used when the caller supplies none.
pub const DEFAULT_ENDPOINT: &str =
    "https://magro-agent-resource.services.ai.azure.com/api/projects/magro-agent";

/// Agent identifier used when the caller supplies none.
pub const DEFAULT_AGENT_ID: &str = "asst_5mhh5YN0lkowT6S2Kcw45X8V";

/// Manages one connection to an AI Foundry project.
///
/// The client owns its configuration (endpoint, agent id), a credential
/// capability, and at most one live [`ProjectClient`] handle. The handle is
/// built lazily by `connect()` and dropped by `disconnect()`; there is no
/// pooling and no internal synchronization. Callers that share a
/// `FoundryClient` across tasks must wrap it in their own lock.
pub struct FoundryClient {
    endpoint: String,
    agent_id: String,
    credential: Arc<dyn TokenCredential>,
    factory: Box<dyn ProjectClientFactory>,
    client: Option<ProjectClient>,
}

impl FoundryClient {
    /// Create a client. `None` arguments fall back to the compiled-in
    /// defaults; an absent credential falls back to [`DefaultCredential`]
    /// (which never fails here, only when a token is later requested).
    ///
    /// Fails with a configuration error when the resolved endpoint or agent
    /// id is empty after trimming whitespace. No I/O happens here.
    pub fn new(
        endpoint: Option<String>,
        agent_id: Option<String>,
        credential: Option<Arc<dyn TokenCredential>>,
    ) -> Result<Self, ClientError> {
        Self::with_factory(endpoint, agent_id, credential, Box::new(FoundryProjectFactory))
    }

    /// Like [`FoundryClient::new`] but with an explicit handle factory.
    /// Mainly a seam for tests driving `connect()` against a fake.
    pub fn with_factory(
        endpoint: Option<String>,
        agent_id: Option<String>,
        credential: Option<Arc<dyn TokenCredential>>,
        factory: Box<dyn ProjectClientFactory>,
    ) -> Result<Self, ClientError> {
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let agent_id = agent_id.unwrap_or_else(|| DEFAULT_AGENT_ID.to_string());
        let credential: Arc<dyn TokenCredential> =
            credential.unwrap_or_else(|| Arc::new(DefaultCredential::new()));

        validate_field("endpoint", &endpoint)?;
        validate_field("agent_id", &agent_id)?;

        Ok(Self {
            endpoint,
            agent_id,
            credential,
            factory,
            client: None,
        })
    }

    /// Create a client from a stored [`Profile`], optionally overriding the
    /// ambient credential.
    pub fn from_profile(
        profile: &Profile,
        credential: Option<Arc<dyn TokenCredential>>,
    ) -> Result<Self, ClientError> {
        Self::new(
            Some(profile.endpoint.clone()),
            Some(profile.agent_id.clone()),
            credential,
        )
    }

    /// Load the named profile from `store` and build a client from it. A
    /// missing or unreadable profile surfaces as a configuration error.
    pub fn from_stored_profile(
        store: &ProfileStore,
        name: &str,
        credential: Option<Arc<dyn TokenCredential>>,
    ) -> Result<Self, ClientError> {
        let profile = store.load(name)?;
        Self::from_profile(&profile, credential)
    }

    /// Build the project client handle from the stored endpoint and
    /// credential.
    ///
    /// Calling this while already connected is allowed and replaces the
    /// handle with a freshly built one. On failure the previous handle (if
    /// any) is left untouched and the cause's description is surfaced as a
    /// connection error.
    pub fn connect(&mut self) -> Result<(), ClientError> {
        info!("Connecting to AI Foundry project at '{}'", self.endpoint);
        match self.factory.build(Arc::clone(&self.credential), &self.endpoint) {
            Ok(client) => {
                self.client = Some(client);
                Ok(())
            }
            Err(e) => {
                error!("Connection to '{}' failed: {}", self.endpoint, e);
                // Re-surface everything as a connection error, keeping the
                // cause's description (but not a doubled prefix).
                Err(match e {
                    ClientError::ConnectionError(msg) => ClientError::ConnectionError(msg),
                    other => ClientError::ConnectionError(other.to_string()),
                })
            }
        }
    }

    /// Drop the handle. No-op when not connected; never fails.
    pub fn disconnect(&mut self) {
        if self.client.take().is_some() {
            info!("Disconnected from '{}'", self.endpoint);
        } else {
            debug!("disconnect() called while not connected");
        }
    }

    /// True iff a handle is currently held.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// The current handle, or [`ClientError::NotConnected`] when `connect()`
    /// has not succeeded yet.
    pub fn client(&self) -> Result<&ProjectClient, ClientError> {
        self.client.as_ref().ok_or(ClientError::NotConnected)
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn validate_field(name: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::ConfigError(format!(
            "{} must be a non-empty string",
            name
        )));
    }
    Ok(())
}
