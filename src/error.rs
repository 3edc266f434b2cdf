// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors and warnings surrounding option registries.

use thiserror::Error;

use crate::{key::KeyError, key::SECTIONS_COMMA_SEPARATED, Value};

/// Errors that are fatal to the registry call that produced them. The registry
/// itself is left unchanged.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Option '{0}' has already been defined")]
    DuplicateKey(String),

    #[error("No option matches '{0}'")]
    UnknownKey(String),

    #[error("'{key}' is ambiguous; it matches these options: {}", .candidates.join(", "))]
    AmbiguousKey {
        key: String,
        candidates: Vec<String>,
    },

    #[error("Value '{value}' is not valid for option '{key}'; {allowed}")]
    InvalidValue {
        key: String,
        value: Value,
        allowed: String,
    },

    #[error(transparent)]
    InvalidKey(#[from] KeyError),

    #[error("Cannot define option '{key}'; it clashes with the existing {existing}")]
    PathConflict { key: String, existing: String },

    #[error("Unknown section '{0}'; valid sections are: {}", *SECTIONS_COMMA_SEPARATED)]
    UnknownSection(String),

    #[error("A registry named '{0}' is already part of this namespace")]
    DuplicateRegistry(String),
}

/// The error a callback may return when it can't handle a new value. This is
/// never fatal; the value transition that triggered the callback stands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CallbackError(String);

impl CallbackError {
    pub fn new<T: std::fmt::Display>(msg: T) -> CallbackError {
        CallbackError(msg.to_string())
    }
}

impl From<&str> for CallbackError {
    fn from(s: &str) -> Self {
        CallbackError(s.to_string())
    }
}

impl From<String> for CallbackError {
    fn from(s: String) -> Self {
        CallbackError(s)
    }
}

/// Problems that don't stop an operation, but should be reported to whoever
/// asked for it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionWarning {
    #[error("The callback of option '{key}' failed: {message}")]
    Callback { key: String, message: String },

    #[error("Couldn't persist option '{key}': {message}")]
    Save { key: String, message: String },

    #[error("Couldn't load stored option overrides; continuing with defaults: {0}")]
    Load(String),

    #[error("Ignoring the stored value of '{key}': {message}")]
    StaleOverride { key: String, message: String },
}
