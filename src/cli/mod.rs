// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `meqopts`
//! subcommands are contained in modules.
//!
//! Only 3 things should be public in this module: `MeqOpts`, `MeqOpts::run`,
//! and `MeqOptsError`.

mod common;
mod error;
mod get;
mod menu;
mod reset;
mod set;
mod show;

pub use error::MeqOptsError;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::{debug, info};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = r#"Inspect and change the options of measurement-equation tree modules.
Options are declared in a definitions file (toml, json or yaml); overrides are
kept in an option store."#
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct MeqOpts {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(about = "Print the menu of one section of options, as text or json.")]
    Menu(menu::MenuArgs),

    #[clap(about = "Print the current value of an option.")]
    Get(get::GetArgs),

    #[clap(about = "Change the value of an option.")]
    Set(set::SetArgs),

    #[clap(about = "Reset one option, or all options, to the default value(s).")]
    Reset(reset::ResetArgs),

    #[clap(about = "Summarise the options and their current values.")]
    Show(show::ShowArgs),
}

impl MeqOpts {
    pub fn run(self) -> Result<(), MeqOptsError> {
        let GlobalArgs { verbosity } = self.global_opts;
        setup_logging(verbosity)
            .map_err(|e| MeqOptsError::Generic(format!("Failed to initialise logging: {e}")))?;

        let sub_command = match &self.command {
            Command::Menu(_) => "menu",
            Command::Get(_) => "get",
            Command::Set(_) => "set",
            Command::Reset(_) => "reset",
            Command::Show(_) => "show",
        };
        debug!("meqopts {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        let result = match self.command {
            Command::Menu(args) => args.run(),
            Command::Get(args) => args.run(),
            Command::Set(args) => args.run(),
            Command::Reset(args) => args.run(),
            Command::Show(args) => args.run(),
        };
        common::display_warnings();
        result?;

        info!("meqopts {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stderr`, leaving `stdout`
/// to the values and menus that subcommands print. `env_logger` automatically
/// only uses colours and fancy symbols if we're on a tty (e.g. a terminal);
/// piped output will be formatted sensibly. Source code lines are displayed in
/// log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write debug-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            debug!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => debug!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        debug!("            git head ref: {}", hr);
    }
    debug!("            {}", BUILT_TIME_UTC);
    debug!("         with compiler {}", RUSTC_VERSION);
}
