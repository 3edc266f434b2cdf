// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod errors;
mod get_set;
mod menu;

use std::{
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;

fn meqopts() -> Command {
    Command::cargo_bin("meqopts").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// Write the definitions of an "ionosphere" module into `tmp_dir`.
fn get_ionosphere_definitions(tmp_dir: &Path) -> PathBuf {
    let file = tmp_dir.join("ionosphere.toml");
    std::fs::write(
        &file,
        indoc! {r#"
            name = "ionosphere"

            [[options]]
            key = "compile.span.tiling"
            choices = [1, 2, 4, 8]
            custom_type = "int"
            doc = "The number of timeslots per solution tile"

            [[options]]
            key = "compile.solve.mode"
            default = "solve"
            choices = ["solve", "simulate"]

            [[options]]
            key = "runtime.gain.amplitude"
            default = 1.0
            choices = [0.5, 1.0, 2.0]

            [[options]]
            key = "runtime.solver.num_iter"
            default = 10
        "#},
    )
    .unwrap();
    file
}
