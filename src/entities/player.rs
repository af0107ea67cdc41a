//! Player entity - Entità giocatore con derivazione del livello

use super::{Profession, Race};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub player_id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    // level e until_next_level sono derivati da experience, mai impostati dal client
    pub level: i32,
    pub until_next_level: i32,
}

impl Player {
    /// Current level for a given experience total.
    pub fn level_for_experience(experience: i32) -> i32 {
        let exp = i64::from(experience.max(0));
        let root = ((2500 + 200 * exp) as f64).sqrt();
        ((root as i64 - 50) / 100) as i32
    }

    /// Experience still missing to reach the next level.
    pub fn until_next_level(level: i32, experience: i32) -> i32 {
        50 * (level + 1) * (level + 2) - experience.max(0)
    }

    /// Recompute the derived fields from the current experience.
    pub fn recompute_derived(&mut self) {
        self.level = Self::level_for_experience(self.experience);
        self.until_next_level = Self::until_next_level(self.level, self.experience);
    }
}
