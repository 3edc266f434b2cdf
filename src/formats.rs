// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The file formats used for option definitions and stored overrides.

use std::{path::Path, str::FromStr};

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

lazy_static::lazy_static! {
    pub(crate) static ref FILE_FORMATS_COMMA_SEPARATED: String = FileFormat::iter().join(", ");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum FileFormat {
    #[strum(serialize = "toml")]
    Toml,

    #[strum(serialize = "json")]
    Json,

    #[strum(to_string = "yaml", serialize = "yml")]
    Yaml,
}

impl FileFormat {
    /// Determine the format of a file from its extension (case insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<FileFormat> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| FileFormat::from_str(&e).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(FileFormat::from_path("a/b.toml"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_path("b.JSON"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path("b.yml"), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path("b.yaml"), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path("b.tdlconf"), None);
        assert_eq!(FileFormat::from_path("b"), None);
        assert_eq!(FILE_FORMATS_COMMA_SEPARATED.as_str(), "toml, json, yaml");
    }
}
