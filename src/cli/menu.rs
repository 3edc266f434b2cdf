// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to print the menu of a section of options.

use clap::Parser;

use super::{common::DefinitionArgs, MeqOptsError};

lazy_static::lazy_static! {
    static ref SECTION_HELP: String =
        format!("The section to describe. Valid sections are: {}", *crate::key::SECTIONS_COMMA_SEPARATED);
}

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct MenuArgs {
    #[clap(flatten)]
    defs: DefinitionArgs,

    #[clap(long, default_value = "compile", help = SECTION_HELP.as_str())]
    section: String,

    /// Append the entries that reset all options (and undo the last reset).
    #[clap(long)]
    reset_entry: bool,

    /// Print the menu descriptor as json instead of text.
    #[clap(long)]
    json: bool,
}

impl MenuArgs {
    pub(super) fn run(&self) -> Result<(), MeqOptsError> {
        let registry = self.defs.load()?;
        let menu = registry.build_menu_for(&self.section, self.reset_entry)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&menu)?);
        } else {
            for line in menu.lines() {
                println!("{line}");
            }
        }
        Ok(())
    }
}
