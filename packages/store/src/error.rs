use thiserror::Error;

/// Errors raised by the client-side stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A palette id outside the fixed set.
    #[error("unknown color palette: {0}")]
    UnknownPalette(String),

    /// A base mode other than `light`, `dark` or `system`.
    #[error("unknown base theme: {0}")]
    UnknownBaseMode(String),

    /// A login response without a bearer token.
    #[error("session has no token")]
    MissingToken,

    /// The storage backend is unavailable or refused the write, or a value
    /// could not be (de)serialized.
    #[error("storage error: {0}")]
    Storage(String),
}
