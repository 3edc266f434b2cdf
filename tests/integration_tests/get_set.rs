// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of getting, setting and resetting values through an option store.

use tempfile::TempDir;

use crate::{get_cmd_output, get_ionosphere_definitions, meqopts};

#[test]
fn test_get_default() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path());

    let cmd = meqopts()
        .args(["get", &defs.display().to_string(), "amplitude"])
        .ok();
    assert!(cmd.is_ok(), "get failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "1.0\n");

    let cmd = meqopts()
        .args(["get", &defs.display().to_string(), "span.tiling"])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "None\n");
}

#[test]
fn test_set_persists_between_runs() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();
    let store = tmp_dir.path().join("store.toml").display().to_string();

    #[rustfmt::skip]
    let cmd = meqopts()
        .args(["set", &defs, "amplitude", "2.0", "--store", &store])
        .ok();
    assert!(cmd.is_ok(), "set failed: {}", cmd.err().unwrap());

    #[rustfmt::skip]
    let cmd = meqopts()
        .args(["set", &defs, "tiling", "16", "--store", &store])
        .ok();
    assert!(cmd.is_ok(), "set failed: {}", cmd.err().unwrap());

    let contents = std::fs::read_to_string(&store).unwrap();
    assert!(contents.contains("[ionosphere]"), "{contents}");
    assert!(contents.contains("runtime.gain.amplitude"), "{contents}");

    let cmd = meqopts()
        .args(["get", &defs, "amplitude", "--store", &store])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "2.0\n");
    let cmd = meqopts()
        .args(["get", &defs, "tiling", "--store", &store])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "16\n");

    // Without the store, the defaults are back.
    let cmd = meqopts().args(["get", &defs, "amplitude"]).ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "1.0\n");

    // Reset one, then everything.
    let cmd = meqopts()
        .args(["reset", &defs, "tiling", "--store", &store])
        .ok();
    assert!(cmd.is_ok(), "reset failed: {}", cmd.err().unwrap());
    let cmd = meqopts()
        .args(["get", &defs, "tiling", "--store", &store])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "None\n");
    let cmd = meqopts()
        .args(["get", &defs, "amplitude", "--store", &store])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "2.0\n");

    let cmd = meqopts().args(["reset", &defs, "--store", &store]).ok();
    assert!(cmd.is_ok(), "reset failed: {}", cmd.err().unwrap());
    let cmd = meqopts()
        .args(["get", &defs, "amplitude", "--store", &store])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout, "1.0\n");
}

#[test]
fn test_set_without_store_warns() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();

    let cmd = meqopts().args(["set", &defs, "mode", "simulate"]).ok();
    assert!(cmd.is_ok(), "set failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.is_empty(), "stdout wasn't empty: {stdout}");
    assert!(stderr.contains("won't be kept"), "{stderr}");
}

#[test]
fn test_show() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();

    let cmd = meqopts().args(["show", &defs, "--full"]).ok();
    assert!(cmd.is_ok(), "show failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("ionosphere (nc=2, nr=2)"), "{stderr}");
    assert!(
        stderr.contains("compile.solve.mode = solve    choices: [solve, simulate]"),
        "{stderr}"
    );
}
