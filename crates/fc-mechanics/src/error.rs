//! Error types for the rules engine.
//!
//! Rule computations themselves never fail; these errors only come from
//! loading configuration and snapshots.

/// Errors that can occur while loading rules or character data.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The rules configuration is internally inconsistent.
    #[error("invalid rules config: {0}")]
    InvalidConfig(String),

    /// A rules file could not be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A character, settings, or injury snapshot could not be loaded.
    #[error(transparent)]
    Core(#[from] fc_core::CoreError),
}

/// Convenience result type for rules-engine operations.
pub type MechResult<T> = Result<T, MechError>;
