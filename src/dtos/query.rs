//! Query DTOs - Data Transfer Objects per i query parameters

use serde::{Deserialize, Serialize};

/// DTO per i query parameters di GET /players e GET /players/count.
///
/// Tutti i campi sono opzionali: un filtro assente non esclude nulla.
/// `race`, `profession` e `order` restano stringhe grezze perché il parsing
/// è lenient (valori sconosciuti degradano a "nessun filtro" / ordinamento
/// di default, mai un errore).
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub banned: Option<bool>,
    /// Limite inferiore (incluso) sul birthday, epoch millis.
    #[serde(default)]
    pub after: Option<i64>,
    /// Limite superiore (incluso) sul birthday, epoch millis.
    #[serde(default)]
    pub before: Option<i64>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub experience_after: Option<i32>,
    #[serde(default)]
    pub experience_before: Option<i32>,
    #[serde(default)]
    pub level_after: Option<i32>,
    #[serde(default)]
    pub level_before: Option<i32>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub page_number: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}
