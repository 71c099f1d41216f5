//! Shared error types for the fasal crates.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures while restoring or persisting the signed-in user.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to read stored session: {0}")]
    Restore(String),
    #[error("Failed to persist session: {0}")]
    Persist(String),
}
