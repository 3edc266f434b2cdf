// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Several registries presented as one.
//!
//! A program built out of many modules ends up with one registry per module.
//! An [`OptionNamespace`] borrows them for the duration of an interaction so
//! that they can share a single menu and a single reset. Options are addressed
//! either as `registry:key` or with a key that only one registry knows about.

#[cfg(test)]
mod tests;

use log::debug;

use crate::{
    constants::{NAMESPACE_SEPARATOR, ROOT_MENU_PREPEND},
    key::Section,
    menu::{reset_entries, MenuAction, MenuDescriptor, MenuGroup, MenuNode},
    OptionRegistry, OptionsError, SetOutcome, Value,
};

pub struct OptionNamespace<'a> {
    name: String,
    registries: Vec<&'a mut OptionRegistry>,
}

impl<'a> OptionNamespace<'a> {
    pub fn new<S: Into<String>>(name: S) -> OptionNamespace<'a> {
        OptionNamespace {
            name: name.into(),
            registries: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a registry. Registry names must be unique within a namespace.
    pub fn add(&mut self, registry: &'a mut OptionRegistry) -> Result<(), OptionsError> {
        if self.registries.iter().any(|r| r.name() == registry.name()) {
            return Err(OptionsError::DuplicateRegistry(registry.name().to_string()));
        }
        debug!("{}: adding registry '{}'", self.name, registry.name());
        self.registries.push(registry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    pub fn registry_names(&self) -> impl Iterator<Item = &str> {
        self.registries.iter().map(|r| r.name())
    }

    /// Find the registry that `key` belongs to, and the key to use with it.
    fn locate(&self, key: &str) -> Result<(usize, String), OptionsError> {
        if let Some((reg, rest)) = key.split_once(NAMESPACE_SEPARATOR) {
            return match self.registries.iter().position(|r| r.name() == reg) {
                Some(i) => Ok((i, rest.to_string())),
                None => Err(OptionsError::UnknownKey(key.to_string())),
            };
        }

        let mut found = vec![];
        let mut ambiguous = vec![];
        for (i, r) in self.registries.iter().enumerate() {
            match r.resolve(key) {
                Ok(full) => found.push((i, full.to_string())),
                Err(OptionsError::AmbiguousKey { candidates, .. }) => ambiguous.extend(
                    candidates
                        .into_iter()
                        .map(|c| format!("{}{NAMESPACE_SEPARATOR}{c}", r.name())),
                ),
                Err(_) => (),
            }
        }

        if found.len() == 1 && ambiguous.is_empty() {
            return Ok(found.swap_remove(0));
        }
        if found.is_empty() && ambiguous.is_empty() {
            return Err(OptionsError::UnknownKey(key.to_string()));
        }
        let mut candidates: Vec<String> = found
            .into_iter()
            .map(|(i, full)| {
                format!(
                    "{}{NAMESPACE_SEPARATOR}{full}",
                    self.registries[i].name()
                )
            })
            .collect();
        candidates.extend(ambiguous);
        Err(OptionsError::AmbiguousKey {
            key: key.to_string(),
            candidates,
        })
    }

    /// Get the registry with the given name.
    pub fn registry(&self, name: &str) -> Option<&OptionRegistry> {
        self.registries
            .iter()
            .find(|r| r.name() == name)
            .map(|r| &**r)
    }

    pub fn get(&self, key: &str) -> Result<Value, OptionsError> {
        let (i, key) = self.locate(key)?;
        self.registries[i].get(&key)
    }

    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) -> Result<SetOutcome, OptionsError> {
        let (i, key) = self.locate(key)?;
        self.registries[i].set(&key, value)
    }

    pub fn set_str(&mut self, key: &str, text: &str) -> Result<SetOutcome, OptionsError> {
        let (i, key) = self.locate(key)?;
        self.registries[i].set_str(&key, text)
    }

    /// Reset every option of every registry to its default.
    pub fn reset_all(&mut self) -> SetOutcome {
        let mut outcome = SetOutcome::default();
        for r in self.registries.iter_mut() {
            outcome.merge(r.reset_all());
        }
        outcome
    }

    /// Undo the last reset of every registry.
    pub fn undo_reset(&mut self) -> SetOutcome {
        let mut outcome = SetOutcome::default();
        for r in self.registries.iter_mut() {
            outcome.merge(r.undo_reset());
        }
        outcome
    }

    pub fn activate(&mut self, action: MenuAction) -> SetOutcome {
        match action {
            MenuAction::ResetAll => self.reset_all(),
            MenuAction::UndoReset => self.undo_reset(),
        }
    }

    /// One menu with a submenu per registry (registries without options in
    /// `section` are left out). Reset entries, if requested, act on all
    /// registries at once.
    pub fn build_menu(&self, section: Section, include_reset: bool) -> MenuDescriptor {
        let mut children = vec![];
        for r in &self.registries {
            let menu = r.build_menu(section, false);
            if menu.is_empty() {
                continue;
            }
            let mut root = menu.root;
            root.prompt = r.label(None, Some(r.name()));
            root.key = r.name().to_string();
            children.push(MenuNode::Group(root));
        }
        if include_reset {
            children.extend(reset_entries(&self.name));
        }

        MenuDescriptor {
            section,
            root: MenuGroup {
                key: self.name.clone(),
                prompt: format!("{ROOT_MENU_PREPEND} {}", self.name),
                summary: String::new(),
                hidden: false,
                enabled: true,
                children,
            },
        }
    }
}
