//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::{Result, Error};
use crate::parcel::{Parcel, ParcelStatus};
use super::schema;

const SELECT_PARCEL: &str = "SELECT number, client, status, address, created_at FROM parcel";

/// SQLite-backed storage for parcels
pub struct ParcelStore {
    conn: Connection,
}

impl ParcelStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        tracing::debug!("Opened parcel database {}", path.display());
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    /// Wrap an already opened connection
    pub fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Parcel Operations ==========

    /// Insert a parcel and return the number assigned to it.
    ///
    /// `parcel.number` is ignored.
    pub fn add(&self, parcel: &Parcel) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO parcel (client, status, address, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address,
                parcel.created_at,
            ],
        )?;
        let number = self.conn.last_insert_rowid();
        tracing::debug!("Added parcel {} for client {}", number, parcel.client);
        Ok(number)
    }

    /// Get a parcel by number, `Error::NotFound` if there is none
    pub fn get(&self, number: i64) -> Result<Parcel> {
        self.conn
            .query_row(
                &format!("{} WHERE number = ?1", SELECT_PARCEL),
                [number],
                |row| self.row_to_parcel(row),
            )
            .optional()?
            .ok_or(Error::NotFound(number))
    }

    /// Delete a parcel. Deleting a missing number is not an error.
    pub fn delete(&self, number: i64) -> Result<()> {
        let affected = self.conn.execute("DELETE FROM parcel WHERE number = ?1", [number])?;
        tracing::debug!("Deleted parcel {} ({} rows)", number, affected);
        Ok(())
    }

    /// Replace the delivery address
    pub fn set_address(&self, number: i64, address: &str) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE parcel SET address = ?1 WHERE number = ?2",
            params![address, number],
        )?;
        tracing::debug!("Set address of parcel {} ({} rows)", number, affected);
        Ok(())
    }

    /// Replace the status. Transitions are not validated here.
    pub fn set_status(&self, number: i64, status: ParcelStatus) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2",
            params![status.as_str(), number],
        )?;
        tracing::debug!("Set status of parcel {} to {} ({} rows)", number, status, affected);
        Ok(())
    }

    /// All parcels of a client, ordered by number
    pub fn get_by_client(&self, client: i64) -> Result<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE client = ?1 ORDER BY number", SELECT_PARCEL))?;

        let parcels = stmt
            .query_map([client], |row| self.row_to_parcel(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(parcels)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        let mut stmt = self.conn.prepare("SELECT status, COUNT(*) FROM parcel GROUP BY status")?;
        let mut stats = StoreStats::default();

        let rows = stmt.query_map([], |row| {
            let status: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((status, count as usize))
        })?;

        for row in rows {
            let (status, count) = row?;
            match status.parse::<ParcelStatus>()? {
                ParcelStatus::Registered => stats.registered = count,
                ParcelStatus::Sent => stats.sent = count,
                ParcelStatus::Delivered => stats.delivered = count,
            }
            stats.total += count;
        }

        Ok(stats)
    }

    /// Helper to convert a row to a Parcel
    fn row_to_parcel(&self, row: &rusqlite::Row) -> rusqlite::Result<Parcel> {
        let status_str: String = row.get(2)?;

        let status: ParcelStatus = status_str.parse().map_err(|e: Error| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Parcel {
            number: row.get(0)?,
            client: row.get(1)?,
            status,
            address: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StoreStats {
    pub total: usize,
    pub registered: usize,
    pub sent: usize,
    pub delivered: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Parcels: {}", self.total)?;
        writeln!(f, "  Registered: {}", self.registered)?;
        writeln!(f, "  Sent: {}", self.sent)?;
        writeln!(f, "  Delivered: {}", self.delivered)
    }
}
