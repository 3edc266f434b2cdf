// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Framework-agnostic menu descriptions of a registry's options.
//!
//! A [`MenuDescriptor`] mirrors the path tree of one section: groups become
//! submenus and options become leaves, both in the order they were first
//! defined. Nothing here renders anything; descriptors are plain data (and
//! serialisable, so that an external UI can be fed JSON). Menu entries that
//! trigger an action carry a [`MenuAction`], which the UI hands back to
//! [`crate::OptionRegistry::activate`] (or [`crate::OptionNamespace::activate`]).

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{RESET_DOC, RESET_PROMPT, ROOT_MENU_PREPEND, UNDO_RESET_DOC, UNDO_RESET_PROMPT},
    key::Section,
    registry::tree::{Node, NodeId},
    value::ScalarType,
    OptionRegistry, Value,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuDescriptor {
    pub section: Section,
    pub root: MenuGroup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuNode {
    Group(MenuGroup),
    Leaf(MenuLeaf),
    Action(MenuEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuGroup {
    pub key: String,
    pub prompt: String,
    /// The current values of the options directly in this group, e.g.
    /// `(solve,4,-)`.
    pub summary: String,
    pub hidden: bool,
    pub enabled: bool,
    pub children: Vec<MenuNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLeaf {
    pub key: String,
    pub prompt: String,
    pub doc: Option<String>,
    pub value: Value,
    pub default: Value,
    /// The current value first, then the declared choices.
    pub choices: Vec<Value>,
    pub custom_type: Option<ScalarType>,
    pub overridden: bool,
    pub hidden: bool,
    pub enabled: bool,
}

/// A synthetic menu entry that triggers an action when activated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub prompt: String,
    pub doc: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Reset all options to their defaults.
    #[strum(serialize = "reset_all")]
    ResetAll,

    /// Undo the last reset.
    #[strum(serialize = "undo_reset")]
    UndoReset,
}

impl MenuDescriptor {
    /// Is there nothing to show?
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// The keys of all option leaves, depth first.
    pub fn leaf_keys(&self) -> Vec<&str> {
        let mut keys = vec![];
        self.root.collect_leaf_keys(&mut keys);
        keys
    }

    /// A plain-text rendering, one line per entry, indented by depth.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![];
        self.root.push_lines(0, &mut lines);
        lines
    }
}

impl MenuGroup {
    fn collect_leaf_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                MenuNode::Group(g) => g.collect_leaf_keys(keys),
                MenuNode::Leaf(l) => keys.push(&l.key),
                MenuNode::Action(_) => (),
            }
        }
    }

    fn push_lines(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let mut line = format!("{indent}{} {}", self.prompt, self.summary);
        push_flags(&mut line, self.hidden, self.enabled);
        lines.push(line);
        for child in &self.children {
            match child {
                MenuNode::Group(g) => g.push_lines(depth + 1, lines),
                MenuNode::Leaf(l) => {
                    let mut line = format!("{indent}  {}: {}", l.prompt, l.value);
                    if l.overridden {
                        line.push_str(&format!(" (default: {})", l.default));
                    }
                    push_flags(&mut line, l.hidden, l.enabled);
                    lines.push(line);
                }
                MenuNode::Action(a) => lines.push(format!("{indent}  [{}]", a.prompt)),
            }
        }
    }
}

fn push_flags(line: &mut String, hidden: bool, enabled: bool) {
    if hidden {
        line.push_str(" [hidden]");
    }
    if !enabled {
        line.push_str(" [disabled]");
    }
}

/// The synthetic reset entries appended to a menu.
pub(crate) fn reset_entries(owner: &str) -> [MenuNode; 2] {
    [
        MenuNode::Action(MenuEntry {
            action: MenuAction::ResetAll,
            prompt: format!("{owner}: {RESET_PROMPT}"),
            doc: RESET_DOC.to_string(),
        }),
        MenuNode::Action(MenuEntry {
            action: MenuAction::UndoReset,
            prompt: format!("{owner}: {UNDO_RESET_PROMPT}"),
            doc: UNDO_RESET_DOC.to_string(),
        }),
    ]
}

/// Walks a registry's path tree to produce [`MenuDescriptor`]s.
pub(crate) struct MenuBuilder<'a> {
    registry: &'a OptionRegistry,
}

impl<'a> MenuBuilder<'a> {
    pub(crate) fn new(registry: &'a OptionRegistry) -> MenuBuilder<'a> {
        MenuBuilder { registry }
    }

    pub(crate) fn build(&self, section: Section, include_reset: bool) -> MenuDescriptor {
        let prompt = self
            .registry
            .label(Some(ROOT_MENU_PREPEND), Some(self.registry.name()));
        let mut root = match self.registry.tree.section_root(section) {
            Some(id) => self.group(id),
            // No options in this section; the menu is empty.
            None => MenuGroup {
                key: section.to_string(),
                prompt: String::new(),
                summary: "()".to_string(),
                hidden: false,
                enabled: true,
                children: vec![],
            },
        };
        root.prompt = prompt;
        if include_reset {
            root.children
                .extend(reset_entries(self.registry.name()));
        }
        MenuDescriptor { section, root }
    }

    fn group(&self, id: NodeId) -> MenuGroup {
        let g = match self.registry.tree.node(id) {
            Node::Group(g) => g,
            Node::Leaf { .. } => unreachable!("only groups are walked"),
        };

        let mut children = Vec::with_capacity(g.children.len());
        let mut summary = vec![];
        for &child in g.children.values() {
            match self.registry.tree.node(child) {
                Node::Group(_) => children.push(MenuNode::Group(self.group(child))),
                Node::Leaf { key } => {
                    if let Some(leaf) = self.leaf(key) {
                        summary.push(leaf.value.summary());
                        children.push(MenuNode::Leaf(leaf));
                    }
                }
            }
        }

        MenuGroup {
            key: g.key.clone(),
            prompt: g.name.clone(),
            summary: format!("({})", summary.join(",")),
            hidden: g.hidden,
            enabled: g.enabled,
            children,
        }
    }

    fn leaf(&self, key: &str) -> Option<MenuLeaf> {
        let r = self.registry.record_exact(key)?;
        Some(MenuLeaf {
            key: r.key().to_string(),
            prompt: r.prompt().to_string(),
            doc: r.doc().map(|d| d.to_string()),
            value: r.value().clone(),
            default: r.default().clone(),
            choices: r.menu_choices(),
            custom_type: r.custom_type(),
            overridden: r.is_overridden(),
            hidden: r.is_hidden(),
            enabled: r.is_enabled(),
        })
    }
}
