use axum_test::TestServer;
use players_server::core::AppState;
use players_server::dtos::CreatePlayerDTO;
use players_server::entities::{Profession, Race};
use players_server::repositories::Create;
use std::sync::Arc;

/// Crea un AppState vuoto per i test
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::new())
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = players_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Popola lo store con cinque giocatori noti (id 1..=5).
///
/// Il roster copre razze, professioni ed esperienze diverse così i test
/// possono esercitare ogni ramo di filtro e ordinamento.
pub async fn seed_roster(state: &AppState) {
    let roster = [
        ("Aragorn", "King", Race::Human, Profession::Paladin, 100_000, false, 100),
        ("Gimli", "Lockbearer", Race::Dwarf, Profession::Warrior, 50_000, false, 250),
        ("Legolas", "Prince", Race::Elf, Profession::Rogue, 25_000, false, 300),
        ("Saruman", "The White", Race::Human, Profession::Warlock, 10_000, true, 3_000),
        ("Frodo", "Ring Bearer", Race::Hobbit, Profession::Rogue, 200_000, false, 0),
    ];

    for (name, title, race, profession, birthday, banned, experience) in roster {
        state
            .players
            .create(&CreatePlayerDTO {
                name: name.to_string(),
                title: title.to_string(),
                race,
                profession,
                birthday,
                banned,
                experience,
            })
            .await
            .expect("Failed to seed player");
    }
}
