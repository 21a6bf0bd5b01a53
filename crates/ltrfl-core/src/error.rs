//! Persistence errors

/// Failures loading or saving store state
///
/// Domain operations on the store never fail; only the persistence
/// boundary does.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored state is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("stored state version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

pub type Result<T> = std::result::Result<T, StoreError>;
