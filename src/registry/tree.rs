// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The path tree: root → section → (nested) groups → options. Children are
//! kept in the order they were first defined.

use indexmap::IndexMap;

use crate::{
    key::{KeyPath, Section},
    OptionsError,
};

pub(crate) type NodeId = usize;

#[derive(Debug)]
pub(crate) enum Node {
    Group(GroupNode),

    /// An option. The key indexes the registry's records.
    Leaf { key: String },
}

#[derive(Debug)]
pub(crate) struct GroupNode {
    /// e.g. `compile.span`
    pub(crate) key: String,
    /// The last segment of the key.
    pub(crate) name: String,
    pub(crate) children: IndexMap<String, NodeId>,
    pub(crate) hidden: bool,
    pub(crate) enabled: bool,
}

#[derive(Debug, Default)]
pub(crate) struct PathTree {
    nodes: Vec<Node>,
    sections: IndexMap<Section, NodeId>,
    /// All group keys (sections included), in order of creation.
    groups: IndexMap<String, NodeId>,
}

impl PathTree {
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn section_root(&self, section: Section) -> Option<NodeId> {
        self.sections.get(&section).copied()
    }

    pub(crate) fn group_keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|k| k.as_str())
    }

    pub(crate) fn group_mut(&mut self, key: &str) -> Option<&mut GroupNode> {
        let id = *self.groups.get(key)?;
        match &mut self.nodes[id] {
            Node::Group(g) => Some(g),
            Node::Leaf { .. } => None,
        }
    }

    /// Check that `key` can be inserted without clashing with an existing
    /// option or group. Nothing is modified.
    pub(crate) fn check(&self, key: &KeyPath) -> Result<(), OptionsError> {
        let mut current = match self.section_root(key.section()) {
            Some(id) => id,
            // A new section can't clash with anything.
            None => return Ok(()),
        };
        let num_segments = key.segments().len();
        for (i, segment) in key.segments().iter().enumerate() {
            let children = match &self.nodes[current] {
                Node::Group(g) => &g.children,
                Node::Leaf { .. } => unreachable!("leaves have no children"),
            };
            let child = match children.get(segment) {
                Some(&c) => c,
                None => return Ok(()),
            };
            match (&self.nodes[child], i + 1 == num_segments) {
                (Node::Group(g), true) => {
                    return Err(OptionsError::PathConflict {
                        key: key.to_string(),
                        existing: format!("group '{}'", g.key),
                    })
                }
                (Node::Group(_), false) => current = child,
                (Node::Leaf { key: existing }, true) => {
                    return Err(OptionsError::DuplicateKey(existing.clone()))
                }
                (Node::Leaf { key: existing }, false) => {
                    return Err(OptionsError::PathConflict {
                        key: key.to_string(),
                        existing: format!("option '{existing}'"),
                    })
                }
            }
        }
        Ok(())
    }

    /// Insert a leaf for `key`, creating any groups that don't exist yet and
    /// reusing those that do. [`PathTree::check`] must have succeeded first.
    pub(crate) fn insert(&mut self, key: &KeyPath) {
        let section = key.section();
        let mut current = match self.section_root(section) {
            Some(id) => id,
            None => {
                let name = section.to_string();
                let id = self.push_group(name.clone(), name);
                self.sections.insert(section, id);
                id
            }
        };

        let group_keys = key.group_keys();
        let segments = key.segments();
        let group_names = &segments[..segments.len() - 1];
        // group_keys[0] is the section; the rest line up with group_names.
        for (name, group_key) in group_names.iter().zip(group_keys.iter().skip(1)) {
            let existing = self.children(current).get(name).copied();
            current = match existing {
                Some(id) => id,
                None => {
                    let id = self.push_group(group_key.clone(), name.clone());
                    self.children_mut(current).insert(name.clone(), id);
                    id
                }
            };
        }

        let id = self.nodes.len();
        self.nodes.push(Node::Leaf {
            key: key.as_str().to_string(),
        });
        self.children_mut(current).insert(key.name().to_string(), id);
    }

    fn push_group(&mut self, key: String, name: String) -> NodeId {
        let id = self.nodes.len();
        self.groups.insert(key.clone(), id);
        self.nodes.push(Node::Group(GroupNode {
            key,
            name,
            children: IndexMap::new(),
            hidden: false,
            enabled: true,
        }));
        id
    }

    fn children(&self, id: NodeId) -> &IndexMap<String, NodeId> {
        match &self.nodes[id] {
            Node::Group(g) => &g.children,
            Node::Leaf { .. } => unreachable!("leaves have no children"),
        }
    }

    fn children_mut(&mut self, id: NodeId) -> &mut IndexMap<String, NodeId> {
        match &mut self.nodes[id] {
            Node::Group(g) => &mut g.children,
            Node::Leaf { .. } => unreachable!("leaves have no children"),
        }
    }
}
