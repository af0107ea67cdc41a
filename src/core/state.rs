//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository e lo stato condiviso tra tutte le route.

use crate::repositories::PlayerRepository;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione dei giocatori
    pub players: PlayerRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState con uno store vuoto.
    pub fn new() -> Self {
        Self {
            players: PlayerRepository::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
