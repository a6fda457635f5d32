use axum_test::TestServer;
use country_rest::core::AppState;
use country_rest::repositories::MemoryCountryStore;
use std::sync::Arc;

/// Crea un TestServer per i test
///
/// The server runs the full router (routes, validation, error mapping) over
/// the in-memory storage backend, so every test starts from an empty store.
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server() -> TestServer {
    let state = Arc::new(AppState::new(MemoryCountryStore::new()));
    let app = country_rest::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
