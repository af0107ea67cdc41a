//! Player DTOs - Data Transfer Objects per i giocatori

use crate::entities::{Player, Profession, Race};
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client; birthday viaggia come epoch millis
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDTO {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: i64,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl From<Player> for PlayerDTO {
    fn from(value: Player) -> Self {
        Self {
            id: value.player_id,
            name: value.name,
            title: value.title,
            race: value.race,
            profession: value.profession,
            birthday: value.birthday.timestamp_millis(),
            banned: value.banned,
            experience: value.experience,
            level: value.level,
            until_next_level: value.until_next_level,
        }
    }
}

/// DTO per creare un nuovo giocatore (senza id, campi derivati calcolati dal server)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDTO {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[validate(range(min = 1, message = "Birthday must be a positive timestamp"))]
    pub birthday: i64,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub experience: i32,
}

/// DTO per l'update completo di un giocatore esistente.
///
/// L'id arriva sempre dal path, mai dal body; level e untilNextLevel
/// vengono ricalcolati dal server a partire da experience.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerDTO {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: i64,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub experience: i32,
}
