// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::{formats::FILE_FORMATS_COMMA_SEPARATED, OptionsError};

/// Errors associated with reading option definitions files.
#[derive(Error, Debug)]
pub enum DefinitionsError {
    #[error("Definitions file '{}' doesn't have a recognised file extension! Valid extensions are: {}", .0.display(), *FILE_FORMATS_COMMA_SEPARATED)]
    UnrecognisedExtension(PathBuf),

    #[error("Couldn't read the definitions file '{}': {err}", .path.display())]
    Decode { path: PathBuf, err: String },

    #[error("Definitions file '{}' has no name", .0.display())]
    NoName(PathBuf),

    #[error("Bad option definition: {0}")]
    Options(#[from] OptionsError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
