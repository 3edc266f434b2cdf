// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests that bad input is reported properly.

use tempfile::TempDir;

use crate::{get_cmd_output, get_ionosphere_definitions, meqopts};

#[test]
fn test_invalid_value() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();

    let cmd = meqopts().args(["set", &defs, "amplitude", "3.0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("Value '3.0' is not valid for option 'runtime.gain.amplitude'"),
        "{stderr}"
    );
    assert!(stderr.contains("meqopts show --full"), "{stderr}");
}

#[test]
fn test_unknown_key() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();

    let cmd = meqopts().args(["get", &defs, "iling"]).ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.is_empty());
    assert!(stderr.contains("No option matches 'iling'"), "{stderr}");
}

#[test]
fn test_unknown_section() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();

    let cmd = meqopts()
        .args(["menu", &defs, "--section", "later"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Unknown section 'later'"), "{stderr}");
}

#[test]
fn test_bad_definitions() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = tmp_dir.path().join("bad.toml");
    std::fs::write(
        &defs,
        "name = \"bad\"\n\n[[options]]\nkey = \"compile\"\n",
    )
    .unwrap();

    let cmd = meqopts()
        .args(["show", &defs.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Bad option definition"), "{stderr}");
    assert!(stderr.contains("Option keys are ASCII"), "{stderr}");
}
