// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A file-backed option store. A single file can be shared by several
//! registries; each registry's overrides live in their own table, named by
//! the store's scope (usually the registry's name), e.g. in toml:
//!
//! ```toml
//! [ionosphere]
//! "compile.tec.tiling" = 4
//! "runtime.solver.num_iter" = 10
//! ```

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, trace};
use tempfile::NamedTempFile;

use super::{PersistError, PersistenceBridge};
use crate::{formats::FileFormat, Value};

type StoreContents = IndexMap<String, IndexMap<String, Value>>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    scope: String,
    format: FileFormat,
}

impl FileStore {
    /// The format of the file is determined by its extension (toml, json or
    /// yaml). The file doesn't need to exist yet.
    pub fn new<P: AsRef<Path>, S: Into<String>>(path: P, scope: S) -> Result<Self, PersistError> {
        let path = path.as_ref().to_path_buf();
        let format = FileFormat::from_path(&path)
            .ok_or_else(|| PersistError::UnrecognisedExtension(path.clone()))?;
        Ok(FileStore {
            path,
            scope: scope.into(),
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    fn read_all(&self) -> Result<StoreContents, PersistError> {
        if !self.path.exists() {
            debug!(
                "Option store {} doesn't exist yet; no stored overrides",
                self.path.display()
            );
            return Ok(StoreContents::new());
        }

        let mut contents = String::new();
        File::open(&self.path)?.read_to_string(&mut contents)?;
        if contents.trim().is_empty() {
            return Ok(StoreContents::new());
        }
        let decode_err = |err: String| PersistError::Decode {
            path: self.path.clone(),
            err,
        };
        match self.format {
            FileFormat::Toml => toml::from_str(&contents).map_err(|e| decode_err(e.to_string())),
            FileFormat::Json => {
                serde_json::from_str(&contents).map_err(|e| decode_err(e.to_string()))
            }
            FileFormat::Yaml => {
                serde_yaml::from_str(&contents).map_err(|e| decode_err(e.to_string()))
            }
        }
    }

    fn write_all(&self, store: &StoreContents) -> Result<(), PersistError> {
        let encode_err = |err: String| PersistError::Encode {
            path: self.path.clone(),
            err,
        };
        let s = match self.format {
            FileFormat::Toml => toml::to_string(store).map_err(|e| encode_err(e.to_string()))?,
            FileFormat::Json => {
                serde_json::to_string_pretty(store).map_err(|e| encode_err(e.to_string()))?
            }
            FileFormat::Yaml => {
                serde_yaml::to_string(store).map_err(|e| encode_err(e.to_string()))?
            }
        };
        // Written beside the store, then renamed over it; a failed write
        // leaves the old contents in place.
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut f = BufWriter::new(tmp.as_file_mut());
            f.write_all(s.as_bytes())?;
            f.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PersistenceBridge for FileStore {
    fn load_overrides(&mut self) -> Result<IndexMap<String, Value>, PersistError> {
        let mut store = self.read_all()?;
        let overrides = store.remove(&self.scope).unwrap_or_default();
        debug!(
            "Loaded {} stored override(s) for '{}' from {}",
            overrides.len(),
            self.scope,
            self.path.display()
        );
        Ok(overrides)
    }

    fn save_override(&mut self, key: &str, value: &Value) -> Result<(), PersistError> {
        trace!(
            "Storing {key} = {value} for '{}' in {}",
            self.scope,
            self.path.display()
        );
        let mut store = self.read_all()?;
        let table = store
            .entry(self.scope.clone())
            .or_insert_with(IndexMap::new);
        if value.is_unset() && self.format == FileFormat::Toml {
            // toml has no null. Without an entry, the option keeps its default.
            table.shift_remove(key);
        } else {
            table.insert(key.to_string(), value.clone());
        }
        self.write_all(&store)
    }
}
