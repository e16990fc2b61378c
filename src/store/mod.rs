//! The key-value store frames are registered into.
//!
//! The frame engine treats a store as an opaque sink: it builds a frame,
//! calls [`KeyValueStore::put`] with a [`Key`] it never looks inside, and
//! hands the frame back to the caller. Distribution and persistence are the
//! store's business.
//!
//! [`MemoryStore`] is a single-process store that keeps frames in insertion
//! order, which is enough for tests and the command line front-end.

use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::frame::DataFrame;

/// Identity of a value in a store: a name and the index of the node that
/// owns it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    name: String,
    home: usize,
}

impl Key {
    pub fn new(name: &str, home: usize) -> Key {
        Key {
            name: name.to_string(),
            home,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home(&self) -> usize {
        self.home
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.home)
    }
}

/// What the frame engine needs from a store.
pub trait KeyValueStore {
    /// Register `frame` under `key`, replacing any previous value.
    fn put(&self, key: Key, frame: Arc<DataFrame>);

    fn get(&self, key: &Key) -> Option<Arc<DataFrame>>;
}

/// An in-memory store.
///
/// Frames are shared through an [`Arc`], so a frame handed out by a builder
/// and the one kept in the store are the same allocation.
#[derive(Default)]
pub struct MemoryStore {
    frames: RwLock<IndexMap<Key, Arc<DataFrame>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            frames: RwLock::new(IndexMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn keys(&self) -> Vec<Key> {
        //! All keys, in the order they were first registered.

        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn remove(&self, key: &Key) -> Option<Arc<DataFrame>> {
        self.frames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .shift_remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&self, key: Key, frame: Arc<DataFrame>) {
        log::debug!(
            "store: registering {} ({} x {})",
            key,
            frame.nrows(),
            frame.ncols()
        );
        self.frames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, frame);
    }

    fn get(&self, key: &Key) -> Option<Arc<DataFrame>> {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(Arc::clone)
    }
}
