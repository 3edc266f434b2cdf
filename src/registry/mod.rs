// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The option registry of a single module.
//!
//! A module creates an [`OptionRegistry`] and declares its options with
//! [`OptionRegistry::define`]. Keys define the (sub)menu structure, e.g.
//! `compile.submenu.option` or `runtime.sub.subsub.opt`; if the first segment
//! is neither `compile` nor `runtime`, `compile` is assumed. Values are then
//! read with [`OptionRegistry::get`], using either the full key or any
//! trailing part of it that is unique, e.g. `get("tiling")` for
//! `compile.span.tiling`.

mod dispatch;
mod shorthand;
pub(crate) mod tree;

pub use dispatch::SetOutcome;

use dispatch::ChangeDispatcher;
use shorthand::{Shorthand, ShorthandIndex};
use tree::PathTree;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    key::{segments_contain, KeyPath, Section},
    menu::{MenuAction, MenuBuilder, MenuDescriptor},
    persist::PersistenceBridge,
    OptionRecord, OptionSpec, OptionWarning, OptionsError, Value,
};

pub struct OptionRegistry {
    name: String,
    namespace: Option<String>,
    records: IndexMap<String, OptionRecord>,
    pub(crate) tree: PathTree,
    shorthands: ShorthandIndex,
    dispatcher: ChangeDispatcher,
}

impl OptionRegistry {
    /// Create an empty registry. The name is used in menu prompts and to
    /// identify the registry inside an [`crate::OptionNamespace`].
    pub fn new<S: Into<String>>(name: S) -> OptionRegistry {
        OptionRegistry {
            name: name.into(),
            namespace: None,
            records: IndexMap::new(),
            tree: PathTree::default(),
            shorthands: ShorthandIndex::default(),
            dispatcher: ChangeDispatcher::default(),
        }
    }

    /// Label this registry with a namespace (e.g. the name of the object that
    /// owns it). The label appears in menu prompts.
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Attach a store. Every value transition from now on is written through
    /// to it; call [`OptionRegistry::apply_overrides`] after all options are
    /// defined to pick up previously-stored values.
    pub fn with_persistence<P: PersistenceBridge + 'static>(mut self, store: P) -> Self {
        self.attach_persistence(Box::new(store));
        self
    }

    pub fn attach_persistence(&mut self, store: Box<dyn PersistenceBridge>) {
        self.dispatcher.persistence = Some(store);
    }

    /// Detach the store (if any), returning it.
    pub fn detach_persistence(&mut self) -> Option<Box<dyn PersistenceBridge>> {
        self.dispatcher.persistence.take()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Compose a label with the namespace in braces, e.g.
    /// `"options for: {ns} name"`.
    pub fn label(&self, prepend: Option<&str>, append: Option<&str>) -> String {
        let mut parts = vec![];
        if let Some(p) = prepend {
            parts.push(p.to_string());
        }
        if let Some(ns) = &self.namespace {
            parts.push(format!("{{{ns}}}"));
        }
        if let Some(a) = append {
            parts.push(a.to_string());
        }
        parts.join(" ")
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Declare an option. Its value starts at its default.
    pub fn define(&mut self, spec: OptionSpec) -> Result<(), OptionsError> {
        let key = KeyPath::parse(&spec.key)?;
        if self.records.contains_key(key.as_str()) {
            return Err(OptionsError::DuplicateKey(key.to_string()));
        }
        self.tree.check(&key)?;

        debug!("{}: defining {key} = {}", self.name, spec.default);
        self.tree.insert(&key);
        self.shorthands.insert(&key);
        self.records
            .insert(key.as_str().to_string(), OptionRecord::new(key, spec));
        Ok(())
    }

    /// Declare a group of options with plain defaults, in the given order,
    /// e.g. `define_group("compile.constraint", [("min", ...), ("max", ...)])`.
    /// Definition stops at the first error; options defined before it remain.
    pub fn define_group<I, N, V>(&mut self, prefix: &str, entries: I) -> Result<(), OptionsError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<Value>,
    {
        for (name, default) in entries {
            self.define(OptionSpec::new(
                format!("{prefix}.{}", name.as_ref()),
                default,
            ))?;
        }
        Ok(())
    }

    /// Get the index of the record that `key` refers to. Exact keys take
    /// precedence over shorthands.
    fn resolve_index(&self, key: &str) -> Result<usize, OptionsError> {
        if let Some(i) = self.records.get_index_of(key) {
            return Ok(i);
        }
        match self.shorthands.get(key) {
            Some(Shorthand::Unique(full)) => {
                trace!("{}: '{key}' resolved to {full}", self.name);
                self.records
                    .get_index_of(full.as_str())
                    .ok_or_else(|| OptionsError::UnknownKey(key.to_string()))
            }
            Some(Shorthand::Ambiguous(candidates)) => Err(OptionsError::AmbiguousKey {
                key: key.to_string(),
                candidates: candidates.clone(),
            }),
            None => Err(OptionsError::UnknownKey(key.to_string())),
        }
    }

    /// Get the fully-qualified key that `key` (a full key or a shorthand)
    /// refers to.
    pub fn resolve(&self, key: &str) -> Result<&str, OptionsError> {
        let i = self.resolve_index(key)?;
        Ok(self.records[i].key())
    }

    /// Get the current value of an option.
    pub fn get(&self, key: &str) -> Result<Value, OptionsError> {
        let i = self.resolve_index(key)?;
        Ok(self.records[i].value.clone())
    }

    /// Get read-only access to the record of an option.
    pub fn record(&self, key: &str) -> Result<&OptionRecord, OptionsError> {
        let i = self.resolve_index(key)?;
        Ok(&self.records[i])
    }

    pub(crate) fn record_exact(&self, full_key: &str) -> Option<&OptionRecord> {
        self.records.get(full_key)
    }

    /// All records, in order of definition.
    pub fn records(&self) -> impl Iterator<Item = &OptionRecord> {
        self.records.values()
    }

    /// The number of options in each section.
    pub fn count(&self, section: Section) -> usize {
        self.records
            .values()
            .filter(|r| r.section() == section)
            .count()
    }

    /// All option keys that contain `pattern` as a run of whole segments.
    pub fn find_keys(&self, pattern: &str) -> Vec<&str> {
        self.records
            .values()
            .filter(|r| r.key.contains_segments(pattern))
            .map(|r| r.key())
            .collect()
    }

    /// All group keys that contain `pattern` as a run of whole segments.
    pub fn find_groups(&self, pattern: &str) -> Vec<&str> {
        self.tree
            .group_keys()
            .filter(|k| segments_contain(k, pattern))
            .collect()
    }

    /// Hide (or show) all options and groups matching `pattern` (see
    /// [`OptionRegistry::find_keys`]). Returns the number of entries affected.
    pub fn set_hidden(&mut self, pattern: &str, hidden: bool) -> usize {
        self.update_flags(pattern, |r| r.hidden = hidden, |g| g.hidden = hidden)
    }

    /// Enable (or disable) all options and groups matching `pattern`. Returns
    /// the number of entries affected.
    pub fn set_enabled(&mut self, pattern: &str, enabled: bool) -> usize {
        self.update_flags(pattern, |r| r.enabled = enabled, |g| g.enabled = enabled)
    }

    fn update_flags<R, G>(&mut self, pattern: &str, mut on_record: R, mut on_group: G) -> usize
    where
        R: FnMut(&mut OptionRecord),
        G: FnMut(&mut tree::GroupNode),
    {
        let mut n = 0;
        for record in self
            .records
            .values_mut()
            .filter(|r| r.key.contains_segments(pattern))
        {
            on_record(record);
            n += 1;
        }
        let groups: Vec<String> = self
            .find_groups(pattern)
            .into_iter()
            .map(|k| k.to_string())
            .collect();
        for key in groups {
            if let Some(g) = self.tree.group_mut(&key) {
                on_group(g);
                n += 1;
            }
        }
        n
    }

    /// Set the value of an option. Callbacks fire and the value is written
    /// through to the store only if the value actually changes.
    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) -> Result<SetOutcome, OptionsError> {
        let value = value.into();
        let i = self.resolve_index(key)?;
        let record = &mut self.records[i];
        if !record.admits(&value) {
            return Err(OptionsError::InvalidValue {
                key: record.key().to_string(),
                value,
                allowed: record.allowed_description(),
            });
        }
        let value = record.canonical(value);
        Ok(self.dispatcher.transition(record, value, true))
    }

    /// Like [`OptionRegistry::set`], but the value is parsed from text
    /// according to the option's declared types.
    pub fn set_str(&mut self, key: &str, text: &str) -> Result<SetOutcome, OptionsError> {
        let value = self.record(key)?.parse_value(text);
        self.set(key, value)
    }

    /// Replace the choices of an option. If `select` is given, the option is
    /// set to it; otherwise the current value is kept if it is still
    /// admissible, and the first new choice is selected if not.
    pub fn set_choices<I, V>(
        &mut self,
        key: &str,
        choices: I,
        select: Option<Value>,
    ) -> Result<SetOutcome, OptionsError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let i = self.resolve_index(key)?;
        let record = &mut self.records[i];
        let old_choices = std::mem::replace(
            &mut record.choices,
            choices.into_iter().map(Into::into).collect(),
        );
        let full = record.key().to_string();

        let new = match select {
            Some(v) => Some(v),
            None if record.admits(&record.value) => None,
            None => Some(
                record
                    .choices
                    .first()
                    .cloned()
                    .unwrap_or_else(|| record.default.clone()),
            ),
        };
        match new {
            Some(v) => match self.set(&full, v) {
                Ok(outcome) => Ok(outcome),
                Err(e) => {
                    // Leave everything as it was.
                    self.records[i].choices = old_choices;
                    Err(e)
                }
            },
            None => Ok(SetOutcome::default()),
        }
    }

    /// Set every option back to its default. The previous values are kept so
    /// that the reset can be undone with [`OptionRegistry::undo_reset`].
    pub fn reset_all(&mut self) -> SetOutcome {
        debug!("{}: resetting all options to defaults", self.name);
        let mut outcome = SetOutcome::default();
        let mut undo = IndexMap::with_capacity(self.records.len());
        for record in self.records.values_mut() {
            undo.insert(record.key().to_string(), record.value.clone());
            let default = record.default.clone();
            outcome.merge(self.dispatcher.transition(record, default, true));
        }
        self.dispatcher.undo_last_reset = undo;
        outcome
    }

    /// Set one option back to its default.
    pub fn reset_one(&mut self, key: &str) -> Result<SetOutcome, OptionsError> {
        let i = self.resolve_index(key)?;
        let record = &mut self.records[i];
        let default = record.default.clone();
        Ok(self.dispatcher.transition(record, default, true))
    }

    /// Restore the values that were in use before the last
    /// [`OptionRegistry::reset_all`]. Does nothing if there was no reset, or
    /// if it has already been undone.
    pub fn undo_reset(&mut self) -> SetOutcome {
        let undo = std::mem::take(&mut self.dispatcher.undo_last_reset);
        if undo.is_empty() {
            debug!("{}: no reset to undo", self.name);
        }
        let mut outcome = SetOutcome::default();
        for (key, value) in undo {
            match self.records.get_mut(&key) {
                Some(record) if record.admits(&value) => {
                    outcome.merge(self.dispatcher.transition(record, value, true));
                }
                Some(record) => outcome.warnings.push(OptionWarning::StaleOverride {
                    message: format!(
                        "the value before the reset ({value}) is no longer valid; {}",
                        record.allowed_description()
                    ),
                    key,
                }),
                None => (),
            }
        }
        outcome
    }

    /// Apply the overrides held by the attached store, in the order the store
    /// returns them. Overrides that no longer match an option (or are no
    /// longer valid for it) are skipped with a warning, as is a store that
    /// can't be read. Applied overrides are not written back.
    pub fn apply_overrides(&mut self) -> SetOutcome {
        let mut outcome = SetOutcome::default();
        let overrides = match self.dispatcher.persistence.as_mut() {
            None => return outcome,
            Some(store) => match store.load_overrides() {
                Ok(o) => o,
                Err(e) => {
                    let w = OptionWarning::Load(e.to_string());
                    log::warn!("{w}");
                    outcome.warnings.push(w);
                    return outcome;
                }
            },
        };

        debug!("{}: applying {} stored override(s)", self.name, overrides.len());
        for (key, value) in overrides {
            let record = match self.resolve_index(&key) {
                Ok(i) => &mut self.records[i],
                Err(e) => {
                    let w = OptionWarning::StaleOverride {
                        key,
                        message: e.to_string(),
                    };
                    log::warn!("{w}");
                    outcome.warnings.push(w);
                    continue;
                }
            };
            if !record.admits(&value) {
                let w = OptionWarning::StaleOverride {
                    message: format!(
                        "{value} is not valid; {}",
                        record.allowed_description()
                    ),
                    key,
                };
                log::warn!("{w}");
                outcome.warnings.push(w);
                continue;
            }
            let value = record.canonical(value);
            outcome.merge(self.dispatcher.transition(record, value, false));
        }
        outcome
    }

    /// Describe the options of a section as a menu.
    pub fn build_menu(&self, section: Section, include_reset: bool) -> MenuDescriptor {
        MenuBuilder::new(self).build(section, include_reset)
    }

    /// Like [`OptionRegistry::build_menu`], with the section given by name.
    pub fn build_menu_for(
        &self,
        section: &str,
        include_reset: bool,
    ) -> Result<MenuDescriptor, OptionsError> {
        let section: Section = section
            .parse()
            .map_err(|_| OptionsError::UnknownSection(section.to_string()))?;
        Ok(self.build_menu(section, include_reset))
    }

    /// Carry out an action requested through a menu entry.
    pub fn activate(&mut self, action: MenuAction) -> SetOutcome {
        match action {
            MenuAction::ResetAll => self.reset_all(),
            MenuAction::UndoReset => self.undo_reset(),
        }
    }

    /// A one-line summary, e.g. `ionosphere {iono1} (nc=3, nr=1)`.
    pub fn summary(&self) -> String {
        format!(
            "{} (nc={}, nr={})",
            self.label(None, Some(&self.name)),
            self.count(Section::Compile),
            self.count(Section::Runtime)
        )
    }

    /// One line per option with its current value. Overridden options also
    /// show their default. If `full`, the choices and documentation are
    /// included too.
    pub fn value_report(&self, full: bool) -> Vec<String> {
        let mut lines = vec![];
        for r in self.records.values() {
            let mut line = format!("{} = {}", r.key(), r.value);
            if r.is_overridden() {
                line.push_str(&format!("    (default = {})", r.default));
            }
            if full {
                if !r.choices.is_empty() {
                    let choices: Vec<String> = r.choices.iter().map(|c| c.to_string()).collect();
                    line.push_str(&format!("    choices: [{}]", choices.join(", ")));
                }
                if let Some(t) = r.custom_type {
                    line.push_str(&format!("    custom: {t}"));
                }
                if let Some(doc) = &r.doc {
                    line.push_str(&format!("    ({doc})"));
                }
            }
            lines.push(line);
        }
        lines
    }
}

impl std::fmt::Debug for OptionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionRegistry")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("records", &self.records)
            .field("persistence", &self.dispatcher.persistence.is_some())
            .finish()
    }
}
