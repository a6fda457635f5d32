//! Country directory - CRUD lifecycle over country records
//!
//! The directory owns all decision logic of the service: locating records by
//! id or name, assigning records their persisted identity on create, the
//! replace-not-merge update policy and the hard delete. Storage is delegated
//! to an injected [`CountryStore`], so the same logic runs against MySQL or
//! the in-memory backend.
//!
//! Records reaching the directory have already passed structural validation
//! at the DTO boundary; the only failure the directory itself produces is
//! [`DirectoryError::NotFound`].

use crate::entities::{Country, Currency};
use crate::repositories::CountryStore;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Outcome of a directory operation that can miss. Keeping not-found as an
/// explicit variant (instead of an `Option` threaded through every caller)
/// forces both cases to be handled at each call site.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("country not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

/// Exactly the four mutable fields of a country record.
///
/// An update overwrites all four unconditionally (a replace, not a merge):
/// a field omitted by the client is still written over the stored value.
/// There is deliberately no `id` field here, so an update can never touch a
/// record's identity.
#[derive(Debug, Clone)]
pub struct CountryPatch {
    pub name: String,
    pub capital: String,
    pub currency: Option<Currency>,
    pub population: Option<i64>,
}

pub struct CountryDirectory<S: CountryStore> {
    store: S,
}

impl<S: CountryStore> CountryDirectory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All records in storage order. An empty store yields an empty vec, not
    /// an error; translating "no countries" into a not-found response is the
    /// transport adapter's business.
    pub async fn list(&self) -> Result<Vec<Country>, DirectoryError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Country, DirectoryError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(DirectoryError::NotFound)
    }

    /// First record whose name matches exactly (case-sensitive). With
    /// duplicate names, which record is returned is storage-defined.
    pub async fn find_by_name(&self, name: &str) -> Result<Country, DirectoryError> {
        self.store
            .get_by_name(name)
            .await?
            .ok_or(DirectoryError::NotFound)
    }

    /// Persists a new record and returns it with its assigned id. Duplicate
    /// names are not checked; a valid record always persists.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: Country) -> Result<Country, DirectoryError> {
        debug!("Creating country");
        let created = self.store.insert(&draft).await?;
        info!("Country created with id {}", created.id);
        Ok(created)
    }

    /// Overwrites the four mutable fields of the record at `id` and persists
    /// the result. The stored id is kept as-is. Fails with `NotFound` before
    /// any mutation if no record exists at `id`.
    #[instrument(skip(self, patch), fields(country_id = %id))]
    pub async fn update(&self, id: i32, patch: CountryPatch) -> Result<Country, DirectoryError> {
        debug!("Updating country");
        let mut current = self.find_by_id(id).await?;

        current.name = patch.name;
        current.capital = patch.capital;
        current.currency = patch.currency;
        current.population = patch.population;

        self.store.replace(&current).await?;
        info!("Country {} updated", id);
        Ok(current)
    }

    /// Removes the record at `id` permanently. Fails with `NotFound` if it
    /// does not exist, including when it was already deleted.
    #[instrument(skip(self), fields(country_id = %id))]
    pub async fn delete(&self, id: i32) -> Result<(), DirectoryError> {
        debug!("Deleting country");
        let current = self.find_by_id(id).await.inspect_err(|_| {
            warn!("Delete target not found");
        })?;

        self.store.remove(&current).await?;
        info!("Country {} deleted", id);
        Ok(())
    }
}
