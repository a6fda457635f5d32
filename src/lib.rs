//! Country REST library - espone i moduli principali per i test

pub mod core;
pub mod directory;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{Router, routing::get};
use repositories::CountryStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router<S>(state: Arc<AppState<S>>) -> Router
where
    S: CountryStore + 'static,
{
    Router::new()
        .route("/", get(root::<S>))
        .nest("/country", configure_country_routes::<S>())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione dei paesi
fn configure_country_routes<S>() -> Router<Arc<AppState<S>>>
where
    S: CountryStore + 'static,
{
    use services::*;

    Router::new()
        .route("/", get(list_countries::<S>).post(create_country::<S>))
        .route("/name/{name}", get(get_country_by_name::<S>))
        .route(
            "/{id}",
            get(get_country_by_id::<S>)
                .put(update_country::<S>)
                .delete(delete_country::<S>),
        )
}
