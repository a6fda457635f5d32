//! Country entity - Record anagrafico di un paese

use super::currency::Currency;
use serde::{Deserialize, Serialize};

/// A persisted country record. `id` is assigned by the storage layer on
/// insert and never changes afterwards; `id == 0` marks a record that has
/// not been persisted yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub capital: String,
    pub currency: Option<Currency>,
    pub population: Option<i64>,
}
