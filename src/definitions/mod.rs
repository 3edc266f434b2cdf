// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Declarative option definitions.
//!
//! Options are normally defined in code, but they can also be declared in a
//! toml, json or yaml file. This is what `meqopts` works with, e.g.
//!
//! ```toml
//! name = "ionosphere"
//!
//! [[options]]
//! key = "compile.span.tiling"
//! default = 4
//! choices = [1, 2, 4, 8]
//! custom_type = "int"
//! doc = "The number of timeslots per solution tile"
//! ```
//!
//! Options are defined in the order they appear in the file.

mod error;

pub use error::DefinitionsError;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    formats::FileFormat, key::KeyPath, value::ScalarType, OptionRegistry, OptionSpec,
    OptionsError, Value,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinitions {
    /// The name of the registry.
    pub name: String,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub key: String,

    /// A missing default means the option is declared without a value.
    #[serde(default)]
    pub default: Value,

    #[serde(default)]
    pub choices: Vec<Value>,

    #[serde(default)]
    pub custom_type: Option<ScalarType>,

    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(default)]
    pub doc: Option<String>,

    #[serde(default)]
    pub hidden: bool,
}

impl OptionDefinitions {
    /// Read definitions from a file. The format is determined by the file's
    /// extension.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<OptionDefinitions, DefinitionsError> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)
            .ok_or_else(|| DefinitionsError::UnrecognisedExtension(path.to_path_buf()))?;
        debug!("Reading option definitions from {} ({format})", path.display());

        let mut buf = BufReader::new(File::open(path)?);
        let decode_err = |err: String| DefinitionsError::Decode {
            path: path.to_path_buf(),
            err,
        };
        let defs: OptionDefinitions = match format {
            FileFormat::Toml => {
                let mut contents = String::new();
                buf.read_to_string(&mut contents)?;
                toml::from_str(&contents).map_err(|e| decode_err(e.to_string()))?
            }
            FileFormat::Json => {
                serde_json::from_reader(buf).map_err(|e| decode_err(e.to_string()))?
            }
            FileFormat::Yaml => {
                serde_yaml::from_reader(buf).map_err(|e| decode_err(e.to_string()))?
            }
        };
        if defs.name.trim().is_empty() {
            return Err(DefinitionsError::NoName(path.to_path_buf()));
        }
        Ok(defs)
    }

    /// Define all of the options in a new registry.
    pub fn into_registry(self) -> Result<OptionRegistry, DefinitionsError> {
        let mut registry = OptionRegistry::new(self.name);
        if let Some(ns) = self.namespace {
            registry = registry.with_namespace(ns);
        }

        let mut hidden = vec![];
        for def in self.options {
            let mut spec = OptionSpec::new(def.key.as_str(), def.default).choices(def.choices);
            if let Some(t) = def.custom_type {
                spec = spec.custom_type(t);
            }
            if let Some(p) = def.prompt {
                spec = spec.prompt(p);
            }
            if let Some(d) = def.doc {
                spec = spec.doc(d);
            }
            registry.define(spec)?;
            if def.hidden {
                let key = KeyPath::parse(&def.key).map_err(OptionsError::from)?;
                hidden.push(key.as_str().to_string());
            }
        }
        for key in hidden {
            registry.set_hidden(&key, true);
        }

        debug!("Defined {}", registry.summary());
        Ok(registry)
    }
}
