//! Country DTOs - Data Transfer Objects per i paesi

use crate::directory::CountryPatch;
use crate::entities::{Country, Currency};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Wire representation of a country record.
///
/// Structural validation happens here, before the record ever reaches the
/// directory: `name` and `capital` must be non-blank and at most 20 chars,
/// `population` must be positive when present. The directory trusts records
/// coming through this type and does not re-validate.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CountryDTO {
    /// Ignored on create (the storage layer assigns the real id) and on
    /// update (the path id wins).
    #[serde(default)]
    pub id: i32,
    #[validate(
        length(min = 1, max = 20),
        custom(function = "not_blank")
    )]
    pub name: String,
    pub currency: Option<Currency>,
    #[validate(
        length(min = 1, max = 20),
        custom(function = "not_blank")
    )]
    pub capital: String,
    #[validate(range(min = 1))]
    pub population: Option<i64>,
}

/// Rejects strings that are non-empty but contain only whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

impl From<Country> for CountryDTO {
    fn from(value: Country) -> Self {
        Self {
            id: value.id,
            name: value.name,
            currency: value.currency,
            capital: value.capital,
            population: value.population,
        }
    }
}

/// A submitted body becomes an unpersisted record: whatever id the client
/// sent is discarded, insert will assign the real one.
impl From<CountryDTO> for Country {
    fn from(value: CountryDTO) -> Self {
        Self {
            id: 0,
            name: value.name,
            capital: value.capital,
            currency: value.currency,
            population: value.population,
        }
    }
}

/// Update bodies only carry the four mutable fields; the id is dropped here
/// so it can never leak into the stored record.
impl From<CountryDTO> for CountryPatch {
    fn from(value: CountryDTO) -> Self {
        Self {
            name: value.name,
            capital: value.capital,
            currency: value.currency,
            population: value.population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CountryDTO {
        CountryDTO {
            id: 0,
            name: "Wakanda".to_string(),
            currency: None,
            capital: "Birnin Zana".to_string(),
            population: Some(6_000_000),
        }
    }

    #[test]
    fn valid_dto_passes_validation() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut dto = valid_dto();
        dto.name = "   ".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_capital_is_rejected() {
        let mut dto = valid_dto();
        dto.capital = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn oversized_name_is_rejected() {
        let mut dto = valid_dto();
        dto.name = "A".repeat(21);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn non_positive_population_is_rejected() {
        let mut dto = valid_dto();
        dto.population = Some(0);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn missing_population_is_allowed() {
        let mut dto = valid_dto();
        dto.population = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn submitted_id_is_discarded_on_conversion() {
        let mut dto = valid_dto();
        dto.id = 42;
        let country = Country::from(dto);
        assert_eq!(country.id, 0);
    }
}
