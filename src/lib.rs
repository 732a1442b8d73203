//! # Parcel Tracker - shipment record store
//!
//! Parcel Tracker provides:
//! - A `Parcel` record with a closed `ParcelStatus` lifecycle
//! - SQLite-backed storage with lookup by number and by client
//! - A service layer applying the registration rules on top of the store
//! - Terminal and JSON output for the `parcel-tracker` CLI

pub mod parcel;
pub mod storage;
pub mod service;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use parcel::{Parcel, ParcelStatus};
pub use service::ParcelService;
pub use storage::ParcelStore;

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tracker operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parcel not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Invalid parcel status: {0}")]
    InvalidStatus(String),

    #[error("Parcel {number} cannot advance past {status}")]
    InvalidTransition { number: i64, status: ParcelStatus },

    #[error("Parcel {number} is {status}; only registered parcels can be changed")]
    NotRegistered { number: i64, status: ParcelStatus },
}

impl Error {
    /// True when the error signals a missing parcel rather than a storage failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
