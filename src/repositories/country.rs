//! CountryRepository - MySQL-backed storage for country records

use super::CountryStore;
use crate::entities::{Country, Currency};
use async_trait::async_trait;
use sqlx::{Error, FromRow, MySqlPool};
use tracing::{debug, info, instrument};

/// Flat row shape of the `countries` table. The currency sub-value is stored
/// as three nullable columns; a record has a currency only when the code
/// column is set.
#[derive(FromRow)]
struct CountryRow {
    id: i32,
    name: String,
    capital: String,
    currency_code: Option<String>,
    currency_symbol: Option<String>,
    currency_name: Option<String>,
    population: Option<i64>,
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        let currency = match (row.currency_code, row.currency_symbol, row.currency_name) {
            (Some(code), Some(symbol), Some(name)) => Some(Currency { code, symbol, name }),
            _ => None,
        };
        Country {
            id: row.id,
            name: row.name,
            capital: row.capital,
            currency,
            population: row.population,
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, name, capital, currency_code, currency_symbol, currency_name, population \
     FROM countries";

// COUNTRY REPOSITORY
pub struct CountryRepository {
    connection_pool: MySqlPool,
}

impl CountryRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl CountryStore for CountryRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Country>, Error> {
        debug!("Reading all countries");
        let rows: Vec<CountryRow> = sqlx::query_as(SELECT_COLUMNS)
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(rows.into_iter().map(Country::from).collect())
    }

    #[instrument(skip(self), fields(country_id = %id))]
    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, Error> {
        debug!("Reading country by id");
        let row: Option<CountryRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.connection_pool)
                .await?;

        Ok(row.map(Country::from))
    }

    /// First match in storage order. The `countries` table uses a binary
    /// collation, so the comparison is exact and case-sensitive.
    #[instrument(skip(self), fields(name = %name))]
    async fn get_by_name(&self, name: &str) -> Result<Option<Country>, Error> {
        debug!("Reading country by name");
        let row: Option<CountryRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE name = ? LIMIT 1"))
                .bind(name)
                .fetch_optional(&self.connection_pool)
                .await?;

        Ok(row.map(Country::from))
    }

    #[instrument(skip(self, country), fields(name = %country.name))]
    async fn insert(&self, country: &Country) -> Result<Country, Error> {
        debug!("Inserting new country");
        let result = sqlx::query(
            "INSERT INTO countries \
             (name, capital, currency_code, currency_symbol, currency_name, population) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&country.name)
        .bind(&country.capital)
        .bind(country.currency.as_ref().map(|c| c.code.as_str()))
        .bind(country.currency.as_ref().map(|c| c.symbol.as_str()))
        .bind(country.currency.as_ref().map(|c| c.name.as_str()))
        .bind(country.population)
        .execute(&self.connection_pool)
        .await?;

        // AUTO_INCREMENT primary key, ids are monotonic
        let new_id = result.last_insert_id() as i32;
        info!("Country inserted with id {}", new_id);

        Ok(Country {
            id: new_id,
            ..country.clone()
        })
    }

    #[instrument(skip(self, country), fields(country_id = %country.id))]
    async fn replace(&self, country: &Country) -> Result<(), Error> {
        debug!("Replacing country");
        let result = sqlx::query(
            "UPDATE countries \
             SET name = ?, capital = ?, currency_code = ?, currency_symbol = ?, \
                 currency_name = ?, population = ? \
             WHERE id = ?",
        )
        .bind(&country.name)
        .bind(&country.capital)
        .bind(country.currency.as_ref().map(|c| c.code.as_str()))
        .bind(country.currency.as_ref().map(|c| c.symbol.as_str()))
        .bind(country.currency.as_ref().map(|c| c.name.as_str()))
        .bind(country.population)
        .bind(country.id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Country {} replaced", country.id);
        Ok(())
    }

    #[instrument(skip(self, country), fields(country_id = %country.id))]
    async fn remove(&self, country: &Country) -> Result<(), Error> {
        debug!("Removing country");
        let result = sqlx::query("DELETE FROM countries WHERE id = ?")
            .bind(country.id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Country {} removed", country.id);
        Ok(())
    }
}
