// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to reset options to their defaults.

use clap::Parser;
use log::info;

use super::{common::DefinitionArgs, MeqOptsError};

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct ResetArgs {
    #[clap(flatten)]
    defs: DefinitionArgs,

    /// The option to reset. If not given, all options are reset.
    #[clap(name = "KEY")]
    key: Option<String>,
}

impl ResetArgs {
    pub(super) fn run(&self) -> Result<(), MeqOptsError> {
        let mut registry = self.defs.load()?;
        let outcome = match &self.key {
            Some(key) => registry.reset_one(key)?,
            None => registry.reset_all(),
        };
        info!("{} option(s) reset to their defaults", outcome.changed);
        if outcome.changed() {
            self.defs.warn_if_ephemeral();
        }
        Ok(())
    }
}
