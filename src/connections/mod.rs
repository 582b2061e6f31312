pub mod errors;
pub mod project_client;

// Re-export the modules here for easy import elsewhere.
pub use errors::*;
pub use project_client::*;
