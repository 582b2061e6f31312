pub mod foundry_client;

// Re-export the modules here for easy import elsewhere.
pub use foundry_client::*;
