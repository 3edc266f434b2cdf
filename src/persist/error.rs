// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::formats::FILE_FORMATS_COMMA_SEPARATED;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Option store '{}' doesn't have a recognised file extension! Valid extensions are: {}", .0.display(), *FILE_FORMATS_COMMA_SEPARATED)]
    UnrecognisedExtension(PathBuf),

    #[error("Couldn't decode the option store '{}': {err}", .path.display())]
    Decode { path: PathBuf, err: String },

    #[error("Couldn't encode the option store '{}': {err}", .path.display())]
    Encode { path: PathBuf, err: String },

    /// For stores that aren't files.
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
