pub mod credential;
pub mod default_credential;

// Re-export the modules here for easy import elsewhere.
pub use credential::*;
pub use default_credential::*;
