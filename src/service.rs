//! Parcel service - lifecycle rules on top of the store
//!
//! The store accepts any write; this layer decides which ones are allowed:
//! status only moves forward one step at a time, and address changes and
//! deletion are limited to registered parcels.

use crate::parcel::{Parcel, ParcelStatus};
use crate::storage::ParcelStore;
use crate::{Error, Result};

/// Business-rule front end for a `ParcelStore`
pub struct ParcelService {
    store: ParcelStore,
}

impl ParcelService {
    pub fn new(store: ParcelStore) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &ParcelStore {
        &self.store
    }

    /// Register a new parcel for a client
    pub fn register(&self, client: i64, address: &str) -> Result<Parcel> {
        let parcel = Parcel::new(client, address);
        let number = self.store.add(&parcel)?;
        tracing::info!("Registered parcel {} for client {}", number, client);
        Ok(parcel.with_number(number))
    }

    /// Look up a single parcel
    pub fn parcel(&self, number: i64) -> Result<Parcel> {
        self.store.get(number)
    }

    /// All parcels belonging to a client
    pub fn client_parcels(&self, client: i64) -> Result<Vec<Parcel>> {
        self.store.get_by_client(client)
    }

    /// Move a parcel one step along its lifecycle and return the new status
    pub fn next_status(&self, number: i64) -> Result<ParcelStatus> {
        let parcel = self.store.get(number)?;

        let Some(next) = parcel.status.next() else {
            tracing::warn!("Parcel {} is already {}", number, parcel.status);
            return Err(Error::InvalidTransition { number, status: parcel.status });
        };

        self.store.set_status(number, next)?;
        tracing::info!("Parcel {} moved from {} to {}", number, parcel.status, next);
        Ok(next)
    }

    /// Change the delivery address of a registered parcel
    pub fn change_address(&self, number: i64, address: &str) -> Result<()> {
        self.require_registered(number)?;
        self.store.set_address(number, address)?;
        tracing::info!("Parcel {} address changed", number);
        Ok(())
    }

    /// Delete a registered parcel
    pub fn delete(&self, number: i64) -> Result<()> {
        self.require_registered(number)?;
        self.store.delete(number)?;
        tracing::info!("Parcel {} deleted", number);
        Ok(())
    }

    fn require_registered(&self, number: i64) -> Result<Parcel> {
        let parcel = self.store.get(number)?;
        if parcel.status != ParcelStatus::Registered {
            tracing::warn!("Rejected change to parcel {} in status {}", number, parcel.status);
            return Err(Error::NotRegistered { number, status: parcel.status });
        }
        Ok(parcel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ParcelService {
        ParcelService::new(ParcelStore::open_in_memory().unwrap())
    }

    #[test]
    fn test_register() {
        let service = service();
        let parcel = service.register(1000, "Moscow, Arbat 1").unwrap();

        assert!(parcel.number > 0);
        assert_eq!(parcel.status, ParcelStatus::Registered);
        assert_eq!(service.parcel(parcel.number).unwrap(), parcel);
    }

    #[test]
    fn test_next_status_walks_lifecycle() {
        let service = service();
        let parcel = service.register(1000, "test").unwrap();

        assert_eq!(service.next_status(parcel.number).unwrap(), ParcelStatus::Sent);
        assert_eq!(service.next_status(parcel.number).unwrap(), ParcelStatus::Delivered);

        let err = service.next_status(parcel.number).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition { status: ParcelStatus::Delivered, .. }
        ));
    }

    #[test]
    fn test_change_address_only_when_registered() {
        let service = service();
        let parcel = service.register(1000, "test").unwrap();

        service.change_address(parcel.number, "new address").unwrap();
        assert_eq!(service.parcel(parcel.number).unwrap().address, "new address");

        service.next_status(parcel.number).unwrap();
        let err = service.change_address(parcel.number, "late address").unwrap_err();
        assert!(matches!(err, Error::NotRegistered { status: ParcelStatus::Sent, .. }));
        assert_eq!(service.parcel(parcel.number).unwrap().address, "new address");
    }

    #[test]
    fn test_delete_only_when_registered() {
        let service = service();
        let kept = service.register(1000, "test").unwrap();
        let removed = service.register(1000, "test").unwrap();

        service.next_status(kept.number).unwrap();
        assert!(matches!(
            service.delete(kept.number).unwrap_err(),
            Error::NotRegistered { .. }
        ));

        service.delete(removed.number).unwrap();
        assert!(service.parcel(removed.number).unwrap_err().is_not_found());
        assert_eq!(service.client_parcels(1000).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_parcel() {
        let service = service();
        assert!(service.next_status(99).unwrap_err().is_not_found());
        assert!(service.delete(99).unwrap_err().is_not_found());
        assert!(service.change_address(99, "x").unwrap_err().is_not_found());
    }
}
