//! Application State - Stato globale dell'applicazione

use crate::directory::CountryDirectory;
use crate::repositories::CountryStore;

/// Global state shared by every route: the country directory, generic over
/// the storage backend it was built with.
pub struct AppState<S: CountryStore> {
    /// Directory owning the CRUD logic over country records
    pub countries: CountryDirectory<S>,
}

impl<S: CountryStore> AppState<S> {
    /// Builds the state by wiring the directory to the given storage backend.
    pub fn new(store: S) -> Self {
        Self {
            countries: CountryDirectory::new(store),
        }
    }
}
