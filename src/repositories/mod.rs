//! Repositories module - Implementazioni del layer di storage
//!
//! Questo modulo organizza le implementazioni dello storage in sotto-moduli separati.
//! Ogni implementazione rispetta lo stesso contratto definito in `traits`.

pub mod country;
pub mod memory;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::CountryStore;

// Re-esportazione delle struct dei repository per facilitare l'import
pub use country::CountryRepository;
pub use memory::MemoryCountryStore;
