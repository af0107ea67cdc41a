//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità (models) che rappresentano i dati
//! conservati nello store dei giocatori.

pub mod enums;
pub mod player;

// Re-exports per facilitare l'import
pub use enums::{Profession, Race};
pub use player::Player;
