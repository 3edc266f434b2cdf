// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The index from trailing-segment shorthands to fully-qualified keys.

use std::collections::HashMap;

use crate::key::KeyPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shorthand {
    /// Only one key ends with this shorthand, so it can be used for lookups.
    Unique(String),

    /// More than one key ends with this shorthand. The keys are kept so that
    /// errors can list them.
    Ambiguous(Vec<String>),
}

#[derive(Debug, Default)]
pub(crate) struct ShorthandIndex(HashMap<String, Shorthand>);

impl ShorthandIndex {
    /// Register all of the shorthands of a newly-defined key. Any shorthand
    /// that was unique to another key becomes ambiguous for both.
    pub(crate) fn insert(&mut self, key: &KeyPath) {
        let full = key.as_str();
        for shorthand in key.shorthands() {
            match self.0.get_mut(&shorthand) {
                None => {
                    self.0.insert(shorthand, Shorthand::Unique(full.to_string()));
                }
                Some(entry) => {
                    let keys = match entry {
                        Shorthand::Unique(other) => vec![other.clone(), full.to_string()],
                        Shorthand::Ambiguous(others) => {
                            let mut keys = std::mem::take(others);
                            keys.push(full.to_string());
                            keys
                        }
                    };
                    *entry = Shorthand::Ambiguous(keys);
                }
            }
        }
    }

    pub(crate) fn get(&self, shorthand: &str) -> Option<&Shorthand> {
        self.0.get(shorthand)
    }
}
