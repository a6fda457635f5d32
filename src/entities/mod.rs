//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod country;
pub mod currency;

// Re-exports per facilitare l'import
pub use country::Country;
pub use currency::Currency;
