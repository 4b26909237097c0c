use std::collections::HashMap;

use crate::errors::{Error, Result};
use crate::model::{Amenity, Entity, Place, Review, User};

/// Generic keyed in-memory store for one entity kind
///
/// Knows nothing about cross-entity relationships; that is the ops layer's
/// job. Insertion order is preserved for listing, and `list()` returns a
/// cloned snapshot, so later mutation never alters a sequence a caller
/// already holds.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity + Clone> {
    items: HashMap<String, T>,
    /// Ids in insertion order; kept in lockstep with `items`
    order: Vec<String>,
}

impl<T: Entity + Clone> Repository<T> {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Store an entity under its own id
    ///
    /// Ids are generated at model construction, so a collision here means a
    /// caller bug rather than bad input.
    ///
    /// # Errors
    /// * `DuplicateId` - an entity with this id is already stored
    pub fn add(&mut self, entity: T) -> Result<()> {
        let id = entity.id().to_string();
        if self.items.contains_key(&id) {
            return Err(Error::DuplicateId { id });
        }
        self.order.push(id.clone());
        self.items.insert(id, entity);
        Ok(())
    }

    /// Get an entity by id; absence is a normal result, not an error
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// Whether an entity with this id is stored
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Iterate stored entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Snapshot of all stored entities in insertion order
    pub fn list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply a fallible mutation to the entity under `id`
    ///
    /// The mutation runs against a clone; only if it succeeds is the clone
    /// committed and the update timestamp refreshed. A failed mutation
    /// leaves the stored entity exactly as it was.
    ///
    /// # Errors
    /// * the kind-specific not-found error - no entity under `id`
    /// * whatever the mutation itself returns
    pub fn update<F>(&mut self, id: &str, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let current = self.items.get(id).ok_or_else(|| T::not_found(id))?;
        let mut next = current.clone();
        mutate(&mut next)?;
        next.touch();
        self.items.insert(id.to_string(), next.clone());
        Ok(next)
    }

    /// Remove the entity under `id`
    ///
    /// # Errors
    /// * the kind-specific not-found error - no entity under `id`
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if self.items.remove(id).is_none() {
            return Err(T::not_found(id));
        }
        self.order.retain(|stored| stored != id);
        Ok(())
    }
}

impl<T: Entity + Clone> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store composing one repository per entity kind
///
/// Plain owned data, no globals, no interior locking. Not thread-safe by
/// itself; an embedding layer serving concurrent callers wraps the owning
/// facade in a mutual-exclusion boundary (see `SharedFacade`).
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) users: Repository<User>,
    pub(crate) places: Repository<Place>,
    pub(crate) amenities: Repository<Amenity>,
    pub(crate) reviews: Repository<Review>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all users in insertion order
    pub fn users(&self) -> Vec<User> {
        self.users.list()
    }

    /// Snapshot of all places in insertion order
    pub fn places(&self) -> Vec<Place> {
        self.places.list()
    }

    /// Snapshot of all amenities in insertion order
    pub fn amenities(&self) -> Vec<Amenity> {
        self.amenities.list()
    }

    /// Snapshot of all reviews in insertion order
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.list()
    }
}
