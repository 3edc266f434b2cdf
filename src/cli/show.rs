// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to summarise a registry's options.

use clap::Parser;

use super::{
    common::{DefinitionArgs, InfoPrinter},
    MeqOptsError,
};

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct ShowArgs {
    #[clap(flatten)]
    defs: DefinitionArgs,

    /// Also show each option's choices, custom type and documentation.
    #[clap(long)]
    full: bool,
}

impl ShowArgs {
    pub(super) fn run(&self) -> Result<(), MeqOptsError> {
        let registry = self.defs.load()?;
        let mut printer = InfoPrinter::new(registry.summary().into());
        if let Some(store) = &self.defs.store {
            printer.push_line(format!("Option store: {}", store.display()).into());
        }
        let report = registry.value_report(self.full);
        if report.is_empty() {
            printer.push_line("No options are defined".into());
        } else {
            printer.push_block(report.into_iter().map(|l| l.into()).collect());
        }
        printer.display();
        Ok(())
    }
}
