use serde::{Deserialize, Serialize};

/// A user-named connection preset.
///
/// JSON looks like:
/// `{ "name":"prod", "endpoint":"https://...", "agent_id":"asst_..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub endpoint: String,
    pub agent_id: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            agent_id: agent_id.into(),
        }
    }

    /// Returns the unique, human-readable identifier.
    pub fn name(&self) -> &str {
        &self.name
    }
}
