// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Persistence of option overrides across runs.
//!
//! A registry doesn't store anything itself; it talks to a
//! [`PersistenceBridge`]. Stored overrides are applied with
//! [`crate::OptionRegistry::apply_overrides`] once all options are defined,
//! and every value transition is written through with
//! [`PersistenceBridge::save_override`]. Persistence is best effort: failures
//! become warnings and the in-memory values stay authoritative.

mod error;
mod file;

pub use error::PersistError;
pub use file::FileStore;

use std::{cell::RefCell, rc::Rc};

use indexmap::IndexMap;

use crate::Value;

/// Something that can load and save option overrides, keyed by
/// fully-qualified option keys. Loading and saving may block.
pub trait PersistenceBridge {
    /// Get all previously-stored overrides, in a deterministic order.
    fn load_overrides(&mut self) -> Result<IndexMap<String, Value>, PersistError>;

    /// Store a single value.
    fn save_override(&mut self, key: &str, value: &Value) -> Result<(), PersistError>;
}

/// An in-memory store. Clones share the same storage, so a clone kept by the
/// caller can observe (or pre-populate) what a registry stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Rc<RefCell<IndexMap<String, Value>>>);

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    pub fn insert<V: Into<Value>>(&self, key: &str, value: V) {
        self.0.borrow_mut().insert(key.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A copy of everything stored.
    pub fn snapshot(&self) -> IndexMap<String, Value> {
        self.0.borrow().clone()
    }
}

impl PersistenceBridge for MemoryStore {
    fn load_overrides(&mut self) -> Result<IndexMap<String, Value>, PersistError> {
        Ok(self.snapshot())
    }

    fn save_override(&mut self, key: &str, value: &Value) -> Result<(), PersistError> {
        self.0.borrow_mut().insert(key.to_string(), value.clone());
        Ok(())
    }
}
