//! Currency entity - Valuta associata a un paese

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub name: String,
}
