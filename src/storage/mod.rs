//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - parcel(number, client, status, address, created_at)

pub mod schema;
pub mod sqlite;

pub use sqlite::{ParcelStore, StoreStats};
