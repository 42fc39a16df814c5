use thiserror::Error;

/// Errors from token-name discovery.
///
/// These signal a precondition violation (the expected tokens are not in
/// the given chain state), not a transient fault: callers should treat
/// them as fatal for the current operation rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("failed to find both reference and user token names under policy {policy}")]
    PairNotFound { policy: String },
}
