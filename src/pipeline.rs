//! Query pipeline - filtro, ordinamento e paginazione dei giocatori
//!
//! Le tre fasi sono pure e lavorano in memoria sull'intero insieme dei
//! record: filter → sort → paginate. Ogni criterio assente è un pass-through
//! e i valori enum non riconosciuti degradano in silenzio (nessun errore
//! visibile al client).

use crate::dtos::{PlayerDTO, PlayerListQuery};
use crate::entities::{Profession, Race};

/// Page number used when the client does not send one.
pub const DEFAULT_PAGE_NUMBER: usize = 0;
/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Criteri di filtro già parsati, derivati dai query parameters.
#[derive(Debug, Default)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub banned: Option<bool>,
    pub birthday_after: Option<i64>,
    pub birthday_before: Option<i64>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience_after: Option<i32>,
    pub experience_before: Option<i32>,
    pub level_after: Option<i32>,
    pub level_before: Option<i32>,
}

impl PlayerFilter {
    /// Builds the filter from raw query parameters.
    ///
    /// Race and profession values that do not name a known variant become
    /// `None`: "no filter on this field", never an error.
    pub fn from_query(query: &PlayerListQuery) -> PlayerFilter {
        PlayerFilter {
            name: query.name.clone(),
            title: query.title.clone(),
            banned: query.banned,
            birthday_after: query.after,
            birthday_before: query.before,
            race: query.race.as_deref().and_then(Race::from_param),
            profession: query.profession.as_deref().and_then(Profession::from_param),
            experience_after: query.experience_after,
            experience_before: query.experience_before,
            level_after: query.level_after,
            level_before: query.level_before,
        }
    }

    /// True when the player satisfies every present criterion (logical AND).
    fn matches(&self, player: &PlayerDTO) -> bool {
        self.by_name(player)
            && self.by_title(player)
            && self.by_banned(player)
            && self.by_birthday(player)
            && self.by_race(player)
            && self.by_profession(player)
            && self.by_experience(player)
            && self.by_level(player)
    }

    fn by_name(&self, player: &PlayerDTO) -> bool {
        match &self.name {
            None => true,
            Some(name) => player.name.to_lowercase().contains(&name.to_lowercase()),
        }
    }

    fn by_title(&self, player: &PlayerDTO) -> bool {
        match &self.title {
            None => true,
            Some(title) => player.title.to_lowercase().contains(&title.to_lowercase()),
        }
    }

    fn by_banned(&self, player: &PlayerDTO) -> bool {
        match self.banned {
            None => true,
            Some(banned) => player.banned == banned,
        }
    }

    fn by_race(&self, player: &PlayerDTO) -> bool {
        match self.race {
            None => true,
            Some(race) => player.race == race,
        }
    }

    fn by_profession(&self, player: &PlayerDTO) -> bool {
        match self.profession {
            None => true,
            Some(profession) => player.profession == profession,
        }
    }

    // tutti i limiti sono inclusivi
    fn by_birthday(&self, player: &PlayerDTO) -> bool {
        self.birthday_after.is_none_or(|after| player.birthday >= after)
            && self.birthday_before.is_none_or(|before| player.birthday <= before)
    }

    fn by_experience(&self, player: &PlayerDTO) -> bool {
        self.experience_after.is_none_or(|after| player.experience >= after)
            && self.experience_before.is_none_or(|before| player.experience <= before)
    }

    fn by_level(&self, player: &PlayerDTO) -> bool {
        self.level_after.is_none_or(|after| player.level >= after)
            && self.level_before.is_none_or(|before| player.level <= before)
    }
}

/// Keeps only the players matching every present criterion.
pub fn filter_players(players: Vec<PlayerDTO>, filter: &PlayerFilter) -> Vec<PlayerDTO> {
    players
        .into_iter()
        .filter(|player| filter.matches(player))
        .collect()
}

/// Chiavi di ordinamento supportate, tutte ascendenti.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOrder {
    Id,
    Name,
    Birthday,
    Experience,
    Level,
}

impl PlayerOrder {
    /// Parses the `order` query parameter.
    ///
    /// Absent or unrecognized keys fall back to [`PlayerOrder::Id`]; the
    /// fallback must never surface as an error.
    pub fn from_param(value: Option<&str>) -> PlayerOrder {
        match value {
            Some("ID") => PlayerOrder::Id,
            Some("NAME") => PlayerOrder::Name,
            Some("BIRTHDAY") => PlayerOrder::Birthday,
            Some("EXPERIENCE") => PlayerOrder::Experience,
            Some("LEVEL") => PlayerOrder::Level,
            _ => PlayerOrder::Id,
        }
    }
}

/// Sorts the players in place by the requested key.
pub fn sort_players(players: &mut [PlayerDTO], order: PlayerOrder) {
    match order {
        PlayerOrder::Id => players.sort_unstable_by_key(|player| player.id),
        PlayerOrder::Name => players.sort_unstable_by(|a, b| a.name.cmp(&b.name)),
        PlayerOrder::Birthday => players.sort_unstable_by_key(|player| player.birthday),
        PlayerOrder::Experience => players.sort_unstable_by_key(|player| player.experience),
        PlayerOrder::Level => players.sort_unstable_by_key(|player| player.level),
    }
}

/// Returns the requested page of the sequence.
///
/// Zero-based page number (default 0) and page size (default 3); an offset
/// at or past the end yields an empty page, a short tail is returned as-is.
pub fn paginate(
    players: Vec<PlayerDTO>,
    page_number: Option<usize>,
    page_size: Option<usize>,
) -> Vec<PlayerDTO> {
    let page_number = page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let start_index = page_number.saturating_mul(page_size);

    players
        .into_iter()
        .skip(start_index)
        .take(page_size)
        .collect()
}
