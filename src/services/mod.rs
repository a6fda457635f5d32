//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod country;

// Re-exports per facilitare l'import
pub use country::{
    create_country, delete_country, get_country_by_id, get_country_by_name, list_countries,
    update_country,
};

use crate::core::AppState;
use crate::repositories::CountryStore;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root<S: CountryStore + 'static>(
    State(_state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
