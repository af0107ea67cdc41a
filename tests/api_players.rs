//! Integration tests per gli endpoint dei giocatori
//!
//! Test per:
//! - GET /players (filtri, ordinamento, paginazione)
//! - GET /players/count
//! - GET /players/{player_id}
//! - POST /players
//! - POST /players/{player_id}
//! - DELETE /players/{player_id}

mod common;

use axum::http::StatusCode;
use common::{create_test_server, create_test_state, seed_roster};
use players_server::dtos::PlayerDTO;
use serde_json::json;

#[tokio::test]
async fn root_responds_ok() {
    let server = create_test_server(create_test_state());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Server is running!");
}

#[tokio::test]
async fn list_players_is_empty_on_fresh_store() {
    let server = create_test_server(create_test_state());

    let response = server.get("/players").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<PlayerDTO>>().is_empty());
}

#[tokio::test]
async fn list_players_paginates_with_default_page_size_three() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    // pagina 0: i primi tre id in ordine (default: sort ID, size 3)
    let page0: Vec<PlayerDTO> = server.get("/players").await.json();
    let ids0: Vec<i64> = page0.iter().map(|p| p.id).collect();
    assert_eq!(ids0, vec![1, 2, 3]);

    // pagina 1: i due rimanenti
    let page1: Vec<PlayerDTO> = server
        .get("/players")
        .add_query_param("pageNumber", 1)
        .await
        .json();
    let ids1: Vec<i64> = page1.iter().map(|p| p.id).collect();
    assert_eq!(ids1, vec![4, 5]);

    // pagina 2: oltre la fine, lista vuota
    let page2: Vec<PlayerDTO> = server
        .get("/players")
        .add_query_param("pageNumber", 2)
        .await
        .json();
    assert!(page2.is_empty());
}

#[tokio::test]
async fn list_players_filters_by_case_insensitive_name() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let players: Vec<PlayerDTO> = server
        .get("/players")
        .add_query_param("name", "ARAG")
        .await
        .json();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Aragorn");
}

#[tokio::test]
async fn list_players_combines_filters_with_logical_and() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    // due HUMAN nel roster, ma solo uno è bannato
    let players: Vec<PlayerDTO> = server
        .get("/players")
        .add_query_param("race", "HUMAN")
        .add_query_param("banned", true)
        .await
        .json();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Saruman");
}

#[tokio::test]
async fn invalid_race_filter_degrades_to_no_filter() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let response = server
        .get("/players")
        .add_query_param("race", "INVALID_ENUM")
        .add_query_param("pageSize", 10)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<PlayerDTO>>().len(), 5);
}

#[tokio::test]
async fn list_players_sorts_by_name() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let players: Vec<PlayerDTO> = server
        .get("/players")
        .add_query_param("order", "NAME")
        .add_query_param("pageSize", 10)
        .await
        .json();

    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Aragorn", "Frodo", "Gimli", "Legolas", "Saruman"]);
}

#[tokio::test]
async fn unknown_order_key_falls_back_to_id_order() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let response = server
        .get("/players")
        .add_query_param("order", "SHOE_SIZE")
        .add_query_param("pageSize", 10)
        .await;

    response.assert_status_ok();
    let ids: Vec<i64> = response
        .json::<Vec<PlayerDTO>>()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn birthday_bounds_are_inclusive() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let players: Vec<PlayerDTO> = server
        .get("/players")
        .add_query_param("after", 25_000)
        .add_query_param("before", 100_000)
        .add_query_param("pageSize", 10)
        .await
        .json();

    let mut names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Aragorn", "Gimli", "Legolas"]);
}

#[tokio::test]
async fn count_honors_the_same_filters_as_list() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let total: usize = server.get("/players/count").await.json();
    assert_eq!(total, 5);

    let rogues: usize = server
        .get("/players/count")
        .add_query_param("profession", "ROGUE")
        .await
        .json();
    assert_eq!(rogues, 2);
}

#[tokio::test]
async fn get_player_by_id_returns_the_record_or_404() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let player: PlayerDTO = server.get("/players/3").await.json();
    assert_eq!(player.id, 3);
    assert_eq!(player.name, "Legolas");

    let missing = server.get("/players/99").await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_player_assigns_id_and_derived_fields() {
    let server = create_test_server(create_test_state());

    let response = server
        .post("/players")
        .json(&json!({
            "name": "Boromir",
            "title": "Captain",
            "race": "HUMAN",
            "profession": "WARRIOR",
            "birthday": 42_000,
            "experience": 100
        }))
        .await;

    response.assert_status_ok();
    let created: PlayerDTO = response.json();
    assert_eq!(created.id, 1);
    assert_eq!(created.birthday, 42_000);
    assert_eq!(created.level, 1);
    assert_eq!(created.until_next_level, 200);
    assert!(!created.banned);

    // il record è stato davvero persistito
    let fetched: PlayerDTO = server.get("/players/1").await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_player_with_non_positive_birthday_is_rejected() {
    let server = create_test_server(create_test_state());

    let response = server
        .post("/players")
        .json(&json!({
            "name": "Sauron",
            "title": "Dark Lord",
            "race": "HUMAN",
            "profession": "WARLOCK",
            "birthday": 0
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // il record non deve essere stato persistito
    let count: usize = server.get("/players/count").await.json();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn update_player_overwrites_mutable_fields_and_keeps_path_id() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    // l'id nel body viene ignorato: vale quello del path
    let response = server
        .post("/players/2")
        .json(&json!({
            "id": 999,
            "name": "Gimli son of Gloin",
            "title": "Elf-friend",
            "race": "DWARF",
            "profession": "WARRIOR",
            "birthday": 60_000,
            "banned": true,
            "experience": 300
        }))
        .await;

    response.assert_status_ok();
    let updated: PlayerDTO = response.json();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.name, "Gimli son of Gloin");
    assert!(updated.banned);
    // i campi derivati seguono la nuova esperienza
    assert_eq!(updated.level, 2);

    let fetched: PlayerDTO = server.get("/players/2").await.json();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_missing_player_returns_404() {
    let server = create_test_server(create_test_state());

    let response = server
        .post("/players/42")
        .json(&json!({
            "name": "Nobody",
            "title": "",
            "race": "TROLL",
            "profession": "DRUID",
            "birthday": 1
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_player_returns_confirmation_then_404() {
    let state = create_test_state();
    seed_roster(&state).await;
    let server = create_test_server(state);

    let response = server.delete("/players/4").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Player with id 4 deleted!");

    server.get("/players/4").await.assert_status(StatusCode::NOT_FOUND);
    server.delete("/players/4").await.assert_status(StatusCode::NOT_FOUND);

    let count: usize = server.get("/players/count").await.json();
    assert_eq!(count, 4);
}
