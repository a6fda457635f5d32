//! Common repository traits
//!
//! This module defines the generic interface for the storage collaborator.

use crate::entities::Country;
use async_trait::async_trait;

/// Storage seam for country records.
///
/// The directory is written against this trait, so it takes no position on
/// what is behind it (a database table, a keyed map, ...). Whatever the
/// backend, the contract is the same:
///
/// * `get_all` yields records in backend-native order, possibly none.
/// * `get_by_name` returns the first record with that exact, case-sensitive
///   name. Duplicate names are structurally permitted; which duplicate is
///   "first" is backend-defined.
/// * `insert` assigns a fresh, collision-free id and returns the persisted
///   record carrying it.
/// * `replace` and `remove` key off the record's existing id and fail with
///   `sqlx::Error::RowNotFound` when no such row exists.
///
/// If the backend allows concurrent mutation it alone is responsible for the
/// atomicity of a single record's read-modify-write; the directory does no
/// locking of its own.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// Reads every stored record.
    ///
    /// # Returns
    /// * `Ok(Vec<Country>)` - All records, can be empty
    /// * `Err(sqlx::Error)` - Error during reading
    async fn get_all(&self) -> Result<Vec<Country>, sqlx::Error>;

    /// Reads a record by its primary key.
    ///
    /// # Returns
    /// * `Ok(Some(Country))` - Record found
    /// * `Ok(None)` - No record with that id
    /// * `Err(sqlx::Error)` - Error during reading
    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, sqlx::Error>;

    /// Reads the first record matching `name` exactly (case-sensitive).
    ///
    /// # Returns
    /// * `Ok(Some(Country))` - A matching record
    /// * `Ok(None)` - No record with that name
    /// * `Err(sqlx::Error)` - Error during reading
    async fn get_by_name(&self, name: &str) -> Result<Option<Country>, sqlx::Error>;

    /// Persists a new record, assigning its id.
    ///
    /// # Returns
    /// * `Ok(Country)` - The persisted record with the id assigned by the backend
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn insert(&self, country: &Country) -> Result<Country, sqlx::Error>;

    /// Overwrites the stored record with the same id as `country`.
    ///
    /// # Returns
    /// * `Ok(())` - Record overwritten
    /// * `Err(sqlx::Error)` - `RowNotFound` if the id is unknown, or backend error
    async fn replace(&self, country: &Country) -> Result<(), sqlx::Error>;

    /// Deletes the stored record with the same id as `country`. Hard delete,
    /// there is no archived state.
    ///
    /// # Returns
    /// * `Ok(())` - Record removed
    /// * `Err(sqlx::Error)` - `RowNotFound` if the id is unknown, or backend error
    async fn remove(&self, country: &Country) -> Result<(), sqlx::Error>;
}
