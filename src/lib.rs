pub mod connections;
pub mod core;
pub mod credentials;
pub mod storage;
pub mod utils;

// re‑export ergonomic entry points
pub use crate::connections::errors::ClientError;
pub use crate::core::foundry_client::{FoundryClient, DEFAULT_AGENT_ID, DEFAULT_ENDPOINT};
pub use crate::credentials::{AccessToken, DefaultCredential, StaticCredential, TokenCredential};
