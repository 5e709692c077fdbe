/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading character data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A JSON snapshot could not be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
