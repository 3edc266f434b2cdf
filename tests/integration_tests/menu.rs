// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of menu output.

use tempfile::TempDir;

use crate::{get_cmd_output, get_ionosphere_definitions, meqopts};

#[test]
fn test_text_menu() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();

    let cmd = meqopts().args(["menu", &defs, "--reset-entry"]).ok();
    assert!(cmd.is_ok(), "menu failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "options for: ionosphere ()",
            "  span (-)",
            "    tiling: None",
            "  solve (str)",
            "    mode: solve",
            "  [ionosphere: reset to defaults (!)]",
            "  [ionosphere: undo last reset]",
        ]
    );
}

#[test]
fn test_json_menu() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let defs = get_ionosphere_definitions(tmp_dir.path()).display().to_string();

    let cmd = meqopts()
        .args(["menu", &defs, "--section", "runtime", "--json"])
        .ok();
    assert!(cmd.is_ok(), "menu failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let menu: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(menu["section"], "runtime");
    let children = menu["root"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["key"], "runtime.gain");
    assert_eq!(children[0]["children"][0]["choices"][1], 0.5);
    assert_eq!(children[1]["summary"], "(10)");
}
