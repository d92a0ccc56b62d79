//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser storage, a file, memory, etc.

use std::rc::Rc;

use crate::domain::{DomainResult, Entity};

/// String-keyed, string-valued durable storage
///
/// Mirrors the browser `localStorage` contract. Calls are synchronous and
/// the store is only touched from the UI thread, so no `Send`/`Sync` bound.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    fn remove(&self, key: &str) -> DomainResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No record had the id; storage untouched
    NotFound,
    /// The confirmation capability said no; storage untouched
    Declined,
}

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Every mutation is a read-modify-write of
/// the whole stored collection.
pub trait Repository<T: Entity> {
    /// Input accepted by `create`
    type Draft;

    /// Create a new entity
    fn create(&self, draft: Self::Draft) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all entities in stored order
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace an existing entity
    fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    fn delete(&self, id: &T::Id) -> DomainResult<DeleteOutcome>;
}

/// Extension for repositories that support text search
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Search entities by text query
    fn search(&self, query: &str) -> DomainResult<Vec<T>>;
}
