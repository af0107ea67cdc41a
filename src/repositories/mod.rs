//! Repositories module - Coordinatore per i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati.
//! Ogni repository gestisce le operazioni di store per una specifica entità.

pub mod player;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, StoreError, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use player::PlayerRepository;
