//! Player services - Gestione degli endpoint CRUD dei giocatori

use crate::core::{AppError, AppState};
use crate::dtos::{CreatePlayerDTO, PlayerDTO, PlayerListQuery, UpdatePlayerDTO};
use crate::pipeline::{PlayerFilter, PlayerOrder, filter_players, paginate, sort_players};
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::extract::{Json, Path, Query, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, params))]
pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerListQuery>,
) -> Result<Json<Vec<PlayerDTO>>, AppError> {
    debug!("Listing players");
    // 1. Snapshot completo dello store, in ordine nativo
    // 2. Mappare ogni entità in PlayerDTO
    // 3. Applicare la pipeline: filter → sort → paginate
    let players: Vec<PlayerDTO> = state
        .players
        .read_all()
        .await?
        .into_iter()
        .map(PlayerDTO::from)
        .collect();

    let filter = PlayerFilter::from_query(&params);
    let mut filtered = filter_players(players, &filter);
    sort_players(&mut filtered, PlayerOrder::from_param(params.order.as_deref()));
    let page = paginate(filtered, params.page_number, params.page_size);

    info!("Returning {} players", page.len());
    Ok(Json(page))
}

#[instrument(skip(state, params))]
pub async fn count_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerListQuery>,
) -> Result<Json<usize>, AppError> {
    debug!("Counting players");
    // stesso filtro della lista, senza ordinamento né paginazione
    let players: Vec<PlayerDTO> = state
        .players
        .read_all()
        .await?
        .into_iter()
        .map(PlayerDTO::from)
        .collect();

    let filter = PlayerFilter::from_query(&params);
    let count = filter_players(players, &filter).len();

    info!("Counted {} players", count);
    Ok(Json(count))
}

#[instrument(skip(state), fields(player_id = %player_id))]
pub async fn get_player_by_id(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<Json<PlayerDTO>, AppError> {
    debug!("Fetching player by ID");
    let player = state.players.read(&player_id).await?.ok_or_else(|| {
        warn!("Player not found");
        AppError::not_found("Player not found")
    })?;

    Ok(Json(PlayerDTO::from(player)))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePlayerDTO>,
) -> Result<Json<PlayerDTO>, AppError> {
    debug!("Creating new player");
    // 1. Validare il body (birthday deve essere un timestamp positivo)
    // 2. Persistere: lo store assegna l'id e calcola i campi derivati
    body.validate()?;
    let player = state.players.create(&body).await?;

    info!("Player created with id {}", player.player_id);
    Ok(Json(PlayerDTO::from(player)))
}

#[instrument(skip(state, body), fields(player_id = %player_id))]
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    Json(body): Json<UpdatePlayerDTO>,
) -> Result<Json<PlayerDTO>, AppError> {
    debug!("Updating player");
    // l'id vale quello del path: un eventuale id nel body viene ignorato
    let player = state.players.update(&player_id, &body).await?;

    info!("Player updated");
    Ok(Json(PlayerDTO::from(player)))
}

#[instrument(skip(state), fields(player_id = %player_id))]
pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<String, AppError> {
    debug!("Deleting player");
    state.players.delete(&player_id).await?;

    info!("Player deleted");
    Ok(format!("Player with id {player_id} deleted!"))
}
