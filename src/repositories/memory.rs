//! MemoryCountryStore - Keyed-map storage for country records
//!
//! Drop-in alternative to the MySQL repository: same contract, backed by a
//! concurrent map instead of a table. Used by the integration tests and
//! usable as a standalone backend for local runs.

use super::CountryStore;
use crate::entities::Country;
use async_trait::async_trait;
use dashmap::DashMap;
use sqlx::Error;
use std::sync::atomic::{AtomicI32, Ordering};

pub struct MemoryCountryStore {
    countries: DashMap<i32, Country>,
    // Monotonic id source, mirrors an AUTO_INCREMENT column
    next_id: AtomicI32,
}

impl MemoryCountryStore {
    pub fn new() -> Self {
        Self {
            countries: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryCountryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountryStore for MemoryCountryStore {
    async fn get_all(&self) -> Result<Vec<Country>, Error> {
        Ok(self
            .countries
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, Error> {
        Ok(self.countries.get(&id).map(|entry| entry.value().clone()))
    }

    /// First match in map iteration order; which duplicate wins is
    /// deliberately unspecified, as with the database backend.
    async fn get_by_name(&self, name: &str) -> Result<Option<Country>, Error> {
        Ok(self
            .countries
            .iter()
            .find(|entry| entry.value().name == name)
            .map(|entry| entry.value().clone()))
    }

    async fn insert(&self, country: &Country) -> Result<Country, Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let persisted = Country {
            id,
            ..country.clone()
        };
        self.countries.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn replace(&self, country: &Country) -> Result<(), Error> {
        if !self.countries.contains_key(&country.id) {
            return Err(Error::RowNotFound);
        }
        self.countries.insert(country.id, country.clone());
        Ok(())
    }

    async fn remove(&self, country: &Country) -> Result<(), Error> {
        self.countries
            .remove(&country.id)
            .map(|_| ())
            .ok_or(Error::RowNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> Country {
        Country {
            id: 0,
            name: name.to_string(),
            capital: "Capital".to_string(),
            currency: None,
            population: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_monotonic_ids() {
        let store = MemoryCountryStore::new();
        let first = store.insert(&draft("Narnia")).await.unwrap();
        let second = store.insert(&draft("Mordor")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn replace_of_unknown_id_is_row_not_found() {
        let store = MemoryCountryStore::new();
        let mut country = draft("Narnia");
        country.id = 99;
        assert!(matches!(
            store.replace(&country).await,
            Err(Error::RowNotFound)
        ));
    }

    #[tokio::test]
    async fn remove_of_unknown_id_is_row_not_found() {
        let store = MemoryCountryStore::new();
        let mut country = draft("Narnia");
        country.id = 99;
        assert!(matches!(
            store.remove(&country).await,
            Err(Error::RowNotFound)
        ));
    }

    #[tokio::test]
    async fn get_by_name_matches_exactly() {
        let store = MemoryCountryStore::new();
        store.insert(&draft("Narnia")).await.unwrap();
        let found = store.get_by_name("Narnia").await.unwrap();
        assert!(found.is_some());
        assert!(store.get_by_name("narnia").await.unwrap().is_none());
    }
}
