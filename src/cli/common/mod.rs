// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Every `meqopts` subcommand
//! works on the registry described by a definitions file, optionally backed by
//! an option store, so those arguments are shared between them.

mod printers;

pub(super) use printers::{display_warnings, InfoPrinter, Warn};

use std::path::PathBuf;

use clap::Args;
use log::debug;

use super::MeqOptsError;
use crate::{FileStore, OptionDefinitions, OptionRegistry};

lazy_static::lazy_static! {
    static ref DEFINITIONS_HELP: String =
        format!("The file declaring the options. Supported formats: {}", *crate::formats::FILE_FORMATS_COMMA_SEPARATED);

    static ref STORE_HELP: String =
        format!("The file that overrides are loaded from and written to. It is created if it doesn't exist. Supported formats: {}", *crate::formats::FILE_FORMATS_COMMA_SEPARATED);
}

#[derive(Args, Debug, Clone, Default)]
pub(super) struct DefinitionArgs {
    #[clap(name = "DEFINITIONS", parse(from_os_str), help = DEFINITIONS_HELP.as_str())]
    pub(super) definitions: PathBuf,

    #[clap(short, long, parse(from_os_str), help = STORE_HELP.as_str())]
    pub(super) store: Option<PathBuf>,
}

impl DefinitionArgs {
    /// Define the options and apply any stored overrides.
    pub(super) fn load(&self) -> Result<OptionRegistry, MeqOptsError> {
        let mut registry = OptionDefinitions::read_file(&self.definitions)?.into_registry()?;
        if let Some(store) = &self.store {
            debug!("Using option store {}", store.display());
            let store = FileStore::new(store, registry.name())?;
            registry.attach_persistence(Box::new(store));
            let outcome = registry.apply_overrides();
            if outcome.changed() {
                debug!("{} stored override(s) applied", outcome.changed);
            }
            if !outcome.warnings.is_empty() {
                format!(
                    "{} stored override(s) couldn't be applied",
                    outcome.warnings.len()
                )
                .warn();
            }
        }
        Ok(registry)
    }

    /// Complain if there's no store to keep a change in.
    pub(super) fn warn_if_ephemeral(&self) {
        if self.store.is_none() {
            "No option store was given (--store); this change won't be kept".warn();
        }
    }
}
