// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Change propagation. Whenever an option's value actually changes, its
//! callback is invoked and the new value is written through to the attached
//! store. Neither may corrupt the registry: their failures (including
//! panicking callbacks) are turned into warnings.

use std::panic::{catch_unwind, AssertUnwindSafe};

use indexmap::IndexMap;
use log::{trace, warn};

use crate::{persist::PersistenceBridge, OptionRecord, OptionWarning, Value};

/// What happened as a result of setting (or resetting) values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetOutcome {
    /// The number of options whose value changed.
    pub changed: usize,

    /// Non-fatal problems encountered along the way.
    pub warnings: Vec<OptionWarning>,
}

impl SetOutcome {
    /// Did any value change?
    pub fn changed(&self) -> bool {
        self.changed > 0
    }

    pub(crate) fn merge(&mut self, other: SetOutcome) {
        self.changed += other.changed;
        self.warnings.extend(other.warnings);
    }
}

#[derive(Default)]
pub(crate) struct ChangeDispatcher {
    pub(crate) persistence: Option<Box<dyn PersistenceBridge>>,

    /// The values in use before the last reset of all options.
    pub(crate) undo_last_reset: IndexMap<String, Value>,
}

impl ChangeDispatcher {
    /// Move `record` to `new`. Nothing happens if the value is unchanged.
    /// Admission must already have been checked.
    pub(crate) fn transition(
        &mut self,
        record: &mut OptionRecord,
        new: Value,
        write_through: bool,
    ) -> SetOutcome {
        let mut outcome = SetOutcome::default();
        if record.value == new {
            trace!("{} is already {new}", record.key);
            return outcome;
        }

        trace!("{}: {} -> {new}", record.key, record.value);
        record.value = new;
        outcome.changed = 1;
        let key = record.key.as_str();

        if let Some(callback) = record.callback.as_mut() {
            let value = &record.value;
            let message = match catch_unwind(AssertUnwindSafe(|| callback(value))) {
                Ok(Ok(())) => None,
                Ok(Err(e)) => Some(e.to_string()),
                Err(panic) => Some(
                    panic
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "the callback panicked".to_string()),
                ),
            };
            if let Some(message) = message {
                outcome.warnings.push(OptionWarning::Callback {
                    key: key.to_string(),
                    message,
                });
            }
        }

        if write_through {
            if let Some(store) = self.persistence.as_mut() {
                if let Err(e) = store.save_override(key, &record.value) {
                    outcome.warnings.push(OptionWarning::Save {
                        key: key.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        for w in &outcome.warnings {
            warn!("{w}");
        }
        outcome
    }
}
