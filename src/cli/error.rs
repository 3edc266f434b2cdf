// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all meqopts-related errors. This should be the *only* error
//! enum that is publicly visible from the CLI.

use thiserror::Error;

use crate::{
    formats::FILE_FORMATS_COMMA_SEPARATED, DefinitionsError, OptionsError, PersistError,
};

/// The *only* publicly visible error from meqopts. Each error message should
/// include a hint, unless it's "generic".
#[derive(Error, Debug)]
pub enum MeqOptsError {
    /// An option couldn't be found, or didn't accept a value.
    #[error("{0}\n\nRun 'meqopts show --full <DEFINITIONS>' to list the options and their allowed values.")]
    Lookup(String),

    /// An error in a definitions file.
    #[error("{0}\n\nOption keys are ASCII, '.'-separated, and start with 'compile' or 'runtime' ('compile' is assumed otherwise). Supported definitions formats: {}", *FILE_FORMATS_COMMA_SEPARATED)]
    Definitions(String),

    /// An error surrounding an option store.
    #[error("{0}\n\nOption stores are files with one table per registry. Supported formats: {}", *FILE_FORMATS_COMMA_SEPARATED)]
    Store(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<OptionsError> for MeqOptsError {
    fn from(e: OptionsError) -> Self {
        let s = e.to_string();
        match e {
            OptionsError::UnknownKey(_)
            | OptionsError::AmbiguousKey { .. }
            | OptionsError::InvalidValue { .. }
            | OptionsError::UnknownSection(_) => Self::Lookup(s),
            OptionsError::DuplicateKey(_)
            | OptionsError::InvalidKey(_)
            | OptionsError::PathConflict { .. }
            | OptionsError::DuplicateRegistry(_) => Self::Definitions(s),
        }
    }
}

impl From<DefinitionsError> for MeqOptsError {
    fn from(e: DefinitionsError) -> Self {
        let s = e.to_string();
        match e {
            DefinitionsError::UnrecognisedExtension(_)
            | DefinitionsError::Decode { .. }
            | DefinitionsError::NoName(_)
            | DefinitionsError::Options(_) => Self::Definitions(s),
            DefinitionsError::IO(e) => Self::from(e),
        }
    }
}

impl From<PersistError> for MeqOptsError {
    fn from(e: PersistError) -> Self {
        let s = e.to_string();
        match e {
            PersistError::UnrecognisedExtension(_)
            | PersistError::Decode { .. }
            | PersistError::Encode { .. }
            | PersistError::Other(_) => Self::Store(s),
            PersistError::IO(e) => Self::from(e),
        }
    }
}

// Library errors.

impl From<std::io::Error> for MeqOptsError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<serde_json::Error> for MeqOptsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
