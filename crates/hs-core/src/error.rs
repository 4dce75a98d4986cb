//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `HsError` as one variant
//! via `#[from]`.

use thiserror::Error;

use crate::{StationId, TruckId};

#[derive(Debug, Error)]
pub enum HsError {
    #[error("truck {0} not found")]
    TruckNotFound(TruckId),

    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `hs-*` crates.
pub type HsResult<T> = Result<T, HsError>;
