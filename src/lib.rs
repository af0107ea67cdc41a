//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod pipeline;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use crate::services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root))
        .nest("/players", configure_player_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione dei giocatori
fn configure_player_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_players).post(create_player))
        .route("/count", get(count_players))
        .route(
            "/{player_id}",
            get(get_player_by_id)
                .post(update_player)
                .delete(delete_player),
        )
}
