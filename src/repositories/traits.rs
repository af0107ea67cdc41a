//! Common repository traits
//!
//! This module defines generic interfaces for store operations.

use thiserror::Error;

/// Errors surfaced by the player store.
///
/// The store is an external collaborator as far as the request pipeline is
/// concerned: handlers only translate these into HTTP statuses.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("record with id {0} not found")]
    NotFound(i64),
    #[error("value {0} is not a representable timestamp")]
    InvalidBirthday(i64),
}

/// Trait for creating new entities in the store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the store)
/// * `CreateData` - Payload for creation (without ID, assigned automatically)
pub trait Create<Entity, CreateData> {
    /// Creates a new entity in the store
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the store
    /// * `Err(StoreError)` - Error during insertion
    async fn create(&self, data: &CreateData) -> Result<Entity, StoreError>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity from the store by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(StoreError)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, StoreError>;
}

/// Trait for reading the whole collection with a full scan
///
/// # Type Parameters
/// * `Entity` - Type of the entities to read
pub trait ReadAll<Entity> {
    /// Reads every entity from the store, in storage-native order
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - Snapshot of the whole collection (can be empty)
    /// * `Err(StoreError)` - Error during reading
    async fn read_all(&self) -> Result<Vec<Entity>, StoreError>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateData` - Payload carrying the new field values
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateData, Id> {
    /// Updates an existing entity in the store
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(StoreError)` - Error during update (e.g. entity not found)
    async fn update(&self, id: &Id, data: &UpdateData) -> Result<Entity, StoreError>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the store
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(StoreError)` - Error during deletion (e.g. entity not found)
    async fn delete(&self, id: &Id) -> Result<(), StoreError>;
}
