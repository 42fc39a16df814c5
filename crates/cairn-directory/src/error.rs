use thiserror::Error;

/// Errors from directory traversal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No scanned node strictly contains the new key. Either the key is
    /// already registered or the scanned UTxO set is not a full directory.
    #[error("no directory node found to insert key {key} on")]
    NoInsertionPoint { key: String },
}
