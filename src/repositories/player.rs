//! PlayerRepository - Repository per la gestione dei giocatori
//!
//! Lo store è una mappa concorrente in-process: tiene il posto del database
//! esterno e possiede per intero le proprie garanzie di consistenza. I
//! service vi accedono solo tramite i trait CRUD e la scansione completa.

use super::{Create, Delete, Read, ReadAll, StoreError, Update};
use crate::dtos::{CreatePlayerDTO, UpdatePlayerDTO};
use crate::entities::Player;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

pub struct PlayerRepository {
    players: DashMap<i64, Player>,
    next_id: AtomicI64,
}

impl PlayerRepository {
    pub fn new() -> PlayerRepository {
        Self {
            players: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn birthday_from_millis(millis: i64) -> Result<DateTime<Utc>, StoreError> {
        DateTime::from_timestamp_millis(millis).ok_or(StoreError::InvalidBirthday(millis))
    }
}

impl Default for PlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Create<Player, CreatePlayerDTO> for PlayerRepository {
    async fn create(&self, data: &CreatePlayerDTO) -> Result<Player, StoreError> {
        let birthday = Self::birthday_from_millis(data.birthday)?;
        let player_id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let mut player = Player {
            player_id,
            name: data.name.clone(),
            title: data.title.clone(),
            race: data.race,
            profession: data.profession,
            birthday,
            banned: data.banned,
            experience: data.experience,
            level: 0,
            until_next_level: 0,
        };
        player.recompute_derived();

        self.players.insert(player_id, player.clone());
        Ok(player)
    }
}

impl Read<Player, i64> for PlayerRepository {
    async fn read(&self, id: &i64) -> Result<Option<Player>, StoreError> {
        Ok(self.players.get(id).map(|entry| entry.clone()))
    }
}

impl ReadAll<Player> for PlayerRepository {
    async fn read_all(&self) -> Result<Vec<Player>, StoreError> {
        // snapshot completo: la pipeline lavora su dati posseduti, mai
        // su riferimenti dentro la mappa
        Ok(self
            .players
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}

impl Update<Player, UpdatePlayerDTO, i64> for PlayerRepository {
    async fn update(&self, id: &i64, data: &UpdatePlayerDTO) -> Result<Player, StoreError> {
        let birthday = Self::birthday_from_millis(data.birthday)?;

        let mut entry = self
            .players
            .get_mut(id)
            .ok_or(StoreError::NotFound(*id))?;

        // l'id resta quello assegnato alla creazione; tutti i campi
        // mutabili vengono sovrascritti e i derivati ricalcolati
        let player = entry.value_mut();
        player.name = data.name.clone();
        player.title = data.title.clone();
        player.race = data.race;
        player.profession = data.profession;
        player.birthday = birthday;
        player.banned = data.banned;
        player.experience = data.experience;
        player.recompute_derived();

        Ok(player.clone())
    }
}

impl Delete<i64> for PlayerRepository {
    async fn delete(&self, id: &i64) -> Result<(), StoreError> {
        self.players
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(*id))
    }
}
