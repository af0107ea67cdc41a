//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod player;
pub mod query;

// Re-exports per facilitare l'import
pub use player::{CreatePlayerDTO, PlayerDTO, UpdatePlayerDTO};
pub use query::PlayerListQuery;
