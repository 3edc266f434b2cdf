// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to change the value of an option.

use clap::Parser;
use log::info;

use super::{common::DefinitionArgs, MeqOptsError};

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct SetArgs {
    #[clap(flatten)]
    defs: DefinitionArgs,

    /// The option's key, or any unique trailing part of it (e.g. "tiling").
    #[clap(name = "KEY")]
    key: String,

    /// The new value. It is interpreted according to the option's default,
    /// choices and custom type, e.g. "4", "0.5", "true", "solve" or "None".
    #[clap(name = "VALUE", allow_hyphen_values = true)]
    value: String,
}

impl SetArgs {
    pub(super) fn run(&self) -> Result<(), MeqOptsError> {
        let mut registry = self.defs.load()?;
        let outcome = registry.set_str(&self.key, &self.value)?;
        let record = registry.record(&self.key)?;
        if outcome.changed() {
            info!("{} = {}", record.key(), record.value());
            self.defs.warn_if_ephemeral();
        } else {
            info!("{} is already {}", record.key(), record.value());
        }
        Ok(())
    }
}
