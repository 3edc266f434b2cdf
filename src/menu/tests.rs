// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::*;
use crate::OptionSpec;

fn get_registry() -> OptionRegistry {
    let mut r = OptionRegistry::new("ionosphere");
    r.define(OptionSpec::new("compile.span.tiling", None::<i64>).choices([1, 2, 4]))
        .unwrap();
    r.define(OptionSpec::new("compile.solve.mode", "solve").choices(["solve", "simulate"]))
        .unwrap();
    r.define(OptionSpec::new("compile.span.size", 4)).unwrap();
    r.define(OptionSpec::new("compile.verbose", false)).unwrap();
    r.define(OptionSpec::new("runtime.gain.amplitude", 1.0).choices([0.5, 1.0, 2.0]))
        .unwrap();
    r
}

fn group(node: &MenuNode) -> &MenuGroup {
    match node {
        MenuNode::Group(g) => g,
        _ => panic!("expected a group, got {node:?}"),
    }
}

fn leaf(node: &MenuNode) -> &MenuLeaf {
    match node {
        MenuNode::Leaf(l) => l,
        _ => panic!("expected a leaf, got {node:?}"),
    }
}

#[test]
fn menu_follows_definition_order() {
    let r = get_registry();
    let menu = r.build_menu(Section::Compile, false);
    assert_eq!(menu.section, Section::Compile);
    assert_eq!(menu.root.prompt, "options for: ionosphere");
    assert_eq!(menu.root.children.len(), 3);

    let span = group(&menu.root.children[0]);
    assert_eq!(span.key, "compile.span");
    assert_eq!(span.prompt, "span");
    // "size" was defined after "solve.mode", but it still belongs to "span".
    assert_eq!(span.children.len(), 2);
    assert_eq!(leaf(&span.children[0]).key, "compile.span.tiling");
    assert_eq!(leaf(&span.children[1]).key, "compile.span.size");

    let solve = group(&menu.root.children[1]);
    assert_eq!(solve.key, "compile.solve");
    assert_eq!(leaf(&menu.root.children[2]).key, "compile.verbose");

    assert_eq!(
        menu.leaf_keys(),
        [
            "compile.span.tiling",
            "compile.span.size",
            "compile.solve.mode",
            "compile.verbose"
        ]
    );
}

#[test]
fn group_summaries_show_direct_values() {
    let mut r = get_registry();
    let menu = r.build_menu(Section::Compile, false);
    assert_eq!(group(&menu.root.children[0]).summary, "(-,4)");
    assert_eq!(group(&menu.root.children[1]).summary, "(str)");
    assert_eq!(menu.root.summary, "(false)");

    r.set("tiling", 2).unwrap();
    let menu = r.build_menu(Section::Compile, false);
    assert_eq!(group(&menu.root.children[0]).summary, "(2,4)");
}

#[test]
fn leaves_carry_record_state() {
    let mut r = get_registry();
    r.set("amplitude", 2.0).unwrap();
    let menu = r.build_menu(Section::Runtime, false);
    let gain = group(&menu.root.children[0]);
    let amp = leaf(&gain.children[0]);
    assert_eq!(amp.prompt, "amplitude");
    assert_eq!(amp.value, Value::Float(2.0));
    assert_eq!(amp.default, Value::Float(1.0));
    assert!(amp.overridden);
    assert_eq!(amp.choices, [2.0, 0.5, 1.0].map(Value::from));
    assert!(amp.enabled);
    assert!(!amp.hidden);
}

#[test]
fn reset_entries_are_appended() {
    let r = get_registry();
    let menu = r.build_menu(Section::Compile, true);
    let n = menu.root.children.len();
    match (&menu.root.children[n - 2], &menu.root.children[n - 1]) {
        (MenuNode::Action(reset), MenuNode::Action(undo)) => {
            assert_eq!(reset.action, MenuAction::ResetAll);
            assert_eq!(reset.prompt, "ionosphere: reset to defaults (!)");
            assert_eq!(undo.action, MenuAction::UndoReset);
        }
        other => panic!("expected two actions, got {other:?}"),
    }
    // The actions aren't options.
    assert_eq!(menu.leaf_keys().len(), 4);
}

#[test]
fn empty_section_gives_empty_menu() {
    let mut r = OptionRegistry::new("empty");
    let menu = r.build_menu(Section::Runtime, false);
    assert!(menu.is_empty());

    r.define(OptionSpec::new("tiling", 1)).unwrap();
    assert!(r.build_menu(Section::Runtime, false).is_empty());
    assert!(!r.build_menu(Section::Compile, false).is_empty());
}

#[test]
fn namespace_appears_in_root_prompt() {
    let r = OptionRegistry::new("solver").with_namespace("iono1");
    let menu = r.build_menu(Section::Compile, false);
    assert_eq!(menu.root.prompt, "options for: {iono1} solver");
}

#[test]
fn flags_are_reflected() {
    let mut r = get_registry();
    // The group and both of its options.
    assert_eq!(r.set_hidden("span", true), 3);
    assert_eq!(r.set_enabled("verbose", false), 1);
    let menu = r.build_menu(Section::Compile, false);
    assert!(group(&menu.root.children[0]).hidden);
    assert!(!leaf(&menu.root.children[2]).enabled);

    let lines = menu.lines();
    assert_eq!(lines[0], "options for: ionosphere (false)");
    assert_eq!(lines[1], "  span (-,4) [hidden]");
    assert!(lines.iter().any(|l| l.ends_with("verbose: false [disabled]")));
}

#[test]
fn descriptors_serialise_to_json() {
    let r = get_registry();
    let menu = r.build_menu(Section::Runtime, true);
    let json = serde_json::to_value(&menu).unwrap();
    assert_eq!(json["section"], "runtime");
    let children = json["root"]["children"].as_array().unwrap();
    assert_eq!(children[0]["kind"], "group");
    assert_eq!(children[0]["children"][0]["kind"], "leaf");
    assert_eq!(children[0]["children"][0]["value"], 1.0);
    assert_eq!(children[1]["kind"], "action");
    assert_eq!(children[1]["action"], "reset_all");
}
