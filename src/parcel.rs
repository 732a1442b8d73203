//! Parcel types
//!
//! A parcel moves through a linear lifecycle:
//! - `Registered`: accepted, address can still change
//! - `Sent`: handed over for delivery
//! - `Delivered`: final state

use crate::{Error, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Delivery status of a parcel.
///
/// Stored as lowercase text; conversion happens at the storage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    /// Accepted by the tracker, not yet dispatched
    Registered,
    /// Dispatched to the carrier
    Sent,
    /// Handed to the recipient
    Delivered,
}

impl ParcelStatus {
    /// Get the string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::Registered => "registered",
            ParcelStatus::Sent => "sent",
            ParcelStatus::Delivered => "delivered",
        }
    }

    /// Get all statuses in lifecycle order
    pub fn all() -> &'static [ParcelStatus] {
        &[
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ]
    }

    /// The following lifecycle stage, `None` once delivered
    pub fn next(&self) -> Option<ParcelStatus> {
        match self {
            ParcelStatus::Registered => Some(ParcelStatus::Sent),
            ParcelStatus::Sent => Some(ParcelStatus::Delivered),
            ParcelStatus::Delivered => None,
        }
    }
}

impl FromStr for ParcelStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "registered" => Ok(ParcelStatus::Registered),
            "sent" => Ok(ParcelStatus::Sent),
            "delivered" => Ok(ParcelStatus::Delivered),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shipment record.
///
/// `number` is assigned by the store on insert; any value set before
/// `ParcelStore::add` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Store-assigned identifier, 0 until persisted
    pub number: i64,
    /// Owning client
    pub client: i64,
    /// Current lifecycle stage
    pub status: ParcelStatus,
    /// Delivery address
    pub address: String,
    /// Creation time, RFC3339
    pub created_at: String,
}

impl Parcel {
    /// Create a registered parcel stamped with the current UTC time
    pub fn new(client: i64, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: now_rfc3339(),
        }
    }

    /// Same parcel carrying the given store number
    pub fn with_number(mut self, number: i64) -> Self {
        self.number = number;
        self
    }
}

/// Current UTC time in RFC3339 with second precision
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
