//! Country services - Transport adapter over the country directory
//!
//! Thin handlers: decode and validate the wire shape, call one directory
//! operation, map the outcome to a status code. All decision logic lives in
//! the directory.

use crate::core::{AppError, AppState};
use crate::directory::CountryPatch;
use crate::dtos::CountryDTO;
use crate::entities::Country;
use crate::repositories::CountryStore;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_countries<S: CountryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<CountryDTO>>, AppError> {
    debug!("Listing all countries");
    let countries = state.countries.list().await?;

    // Legacy wire contract: an empty collection is reported as 404, not as
    // 200 with an empty array. The directory itself treats empty as a
    // regular result.
    if countries.is_empty() {
        warn!("No countries in store");
        return Err(AppError::not_found("No countries found"));
    }

    info!("Found {} countries", countries.len());
    let countries_dto = countries.into_iter().map(CountryDTO::from).collect();
    Ok(Json(countries_dto))
}

#[instrument(skip(state), fields(name = %name))]
pub async fn get_country_by_name<S: CountryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>, // parametro dalla URL /country/name/{name}
) -> Result<Json<CountryDTO>, AppError> {
    debug!("Fetching country by name");
    let country = state.countries.find_by_name(&name).await?;
    info!("Country found with id {}", country.id);
    Ok(Json(CountryDTO::from(country)))
}

#[instrument(skip(state), fields(country_id = %id))]
pub async fn get_country_by_id<S: CountryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i32>, // parametro dalla URL /country/{id}
) -> Result<Json<CountryDTO>, AppError> {
    debug!("Fetching country by id");
    let country = state.countries.find_by_id(id).await?;
    info!("Country found");
    Ok(Json(CountryDTO::from(country)))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_country<S: CountryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<CountryDTO>,
) -> Result<(StatusCode, Json<CountryDTO>), AppError> {
    debug!("Creating country");
    body.validate()?;

    let created = state.countries.create(Country::from(body)).await?;
    info!("Country created with id {}", created.id);
    Ok((StatusCode::CREATED, Json(CountryDTO::from(created))))
}

#[instrument(skip(state, body), fields(country_id = %id))]
pub async fn update_country<S: CountryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i32>,
    Json(body): Json<CountryDTO>,
) -> Result<Json<CountryDTO>, AppError> {
    debug!("Updating country");
    body.validate()?;

    // The body may carry any id, even a mismatching one: the patch drops it
    // and the path id alone selects the record.
    let updated = state.countries.update(id, CountryPatch::from(body)).await?;
    info!("Country updated");
    Ok(Json(CountryDTO::from(updated)))
}

#[instrument(skip(state), fields(country_id = %id))]
pub async fn delete_country<S: CountryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting country");
    state.countries.delete(id).await?;
    info!("Country deleted");
    Ok(StatusCode::NO_CONTENT)
}
