// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Hierarchical option keys.
//!
//! A key like `runtime.gain.amplitude` is split on [`KEY_DELIMITER`] into
//! segments. The first segment is the [`Section`]; if it is neither `compile`
//! nor `runtime`, the key is treated as if it were prefixed with `compile`.
//! The remaining segments define the (sub)menu structure, nested to any depth,
//! and the last one names the option itself.

mod error;

pub use error::KeyError;

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use vec1::Vec1;

use crate::constants::{KEY_DELIMITER, KEY_DELIMITER_STR, NAMESPACE_SEPARATOR};

lazy_static::lazy_static! {
    pub(crate) static ref SECTIONS_COMMA_SEPARATED: String = Section::iter().join(", ");
}

/// The top-level grouping of options.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Section {
    /// Options that rule how the measurement-equation tree is built.
    #[strum(serialize = "compile")]
    #[serde(rename = "compile")]
    Compile,

    /// Options that rule how an already-built tree is executed.
    #[strum(serialize = "runtime")]
    #[serde(rename = "runtime")]
    Runtime,
}

impl Section {
    /// Get the section named by the first segment of a key, if any.
    fn from_segment(s: &str) -> Option<Section> {
        Section::from_str(s).ok()
    }
}

/// A parsed, validated option key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    section: Section,

    /// The segments after the section. The last one is the option name.
    segments: Vec1<String>,

    /// The fully-qualified key, e.g. `compile.span.tiling`.
    full: String,
}

impl KeyPath {
    pub fn parse(key: &str) -> Result<KeyPath, KeyError> {
        if key.is_empty() {
            return Err(KeyError::Empty);
        }
        if !key.is_ascii() {
            return Err(KeyError::NotAscii(key.to_string()));
        }
        if key.chars().any(|c| c.is_whitespace() || c == NAMESPACE_SEPARATOR) {
            return Err(KeyError::ForbiddenCharacter(key.to_string()));
        }

        let mut split = key.split(KEY_DELIMITER).peekable();
        // `split` always yields at least one item.
        let section = match split.peek().copied().and_then(Section::from_segment) {
            Some(s) => {
                split.next();
                s
            }
            None => Section::Compile,
        };

        let mut segments = vec![];
        for segment in split {
            if segment.is_empty() {
                return Err(KeyError::EmptySegment(key.to_string()));
            }
            segments.push(segment.to_string());
        }
        let segments =
            Vec1::try_from_vec(segments).map_err(|_| KeyError::SectionOnly(key.to_string()))?;

        let full = std::iter::once(section.to_string())
            .chain(segments.iter().cloned())
            .join(KEY_DELIMITER_STR);
        Ok(KeyPath {
            section,
            segments,
            full,
        })
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// The segments after the section.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment of the key, i.e. the name of the option.
    pub fn name(&self) -> &str {
        self.segments.last()
    }

    /// The fully-qualified key.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The keys of the groups that this key is nested in, outermost first,
    /// e.g. `compile`, `compile.span` for `compile.span.tiling`.
    pub fn group_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.segments.len());
        let mut key = self.section.to_string();
        keys.push(key.clone());
        for segment in &self.segments[..self.segments.len() - 1] {
            key.push(KEY_DELIMITER);
            key.push_str(segment);
            keys.push(key.clone());
        }
        keys
    }

    /// All proper trailing-segment suffixes of the full key, shortest first.
    /// For `compile.a.x`, these are `x` and `a.x`.
    pub fn shorthands(&self) -> impl Iterator<Item = String> + '_ {
        let n = self.segments.len();
        (1..=n).map(move |len| self.segments[n - len..].join(KEY_DELIMITER_STR))
    }

    /// Does this key contain `pattern` as a run of whole segments? The section
    /// counts as a segment.
    pub fn contains_segments(&self, pattern: &str) -> bool {
        segments_contain(&self.full, pattern)
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full)
    }
}

/// Does the dotted string `haystack` contain the dotted string `pattern` as a
/// contiguous run of whole segments? Partial segments never match, so `ti`
/// does not match `compile.span.tiling`.
pub(crate) fn segments_contain(haystack: &str, pattern: &str) -> bool {
    let pattern: Vec<&str> = pattern.split(KEY_DELIMITER).collect();
    if pattern.iter().any(|s| s.is_empty()) {
        return false;
    }
    let haystack: Vec<&str> = haystack.split(KEY_DELIMITER).collect();
    haystack
        .windows(pattern.len())
        .any(|window| window == pattern.as_slice())
}
