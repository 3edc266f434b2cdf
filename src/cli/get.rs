// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to print the value of an option.

use clap::Parser;
use log::debug;

use super::{common::DefinitionArgs, MeqOptsError};

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct GetArgs {
    #[clap(flatten)]
    defs: DefinitionArgs,

    /// The option's key, or any unique trailing part of it (e.g. "tiling").
    #[clap(name = "KEY")]
    key: String,
}

impl GetArgs {
    pub(super) fn run(&self) -> Result<(), MeqOptsError> {
        let registry = self.defs.load()?;
        let key = registry.resolve(&self.key)?;
        debug!("'{}' is {key}", self.key);
        println!("{}", registry.get(key)?);
        Ok(())
    }
}
