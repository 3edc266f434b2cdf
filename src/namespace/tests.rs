// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::*;
use crate::OptionSpec;

fn get_registries() -> (OptionRegistry, OptionRegistry) {
    let mut iono = OptionRegistry::new("ionosphere");
    iono.define(OptionSpec::new("compile.span.tiling", 4).choices([1, 2, 4]))
        .unwrap();
    iono.define(OptionSpec::new("runtime.solver.num_iter", 10))
        .unwrap();

    let mut beam = OptionRegistry::new("beam").with_namespace("station");
    beam.define(OptionSpec::new("compile.model.tiling", 1))
        .unwrap();
    beam.define(OptionSpec::new("compile.model.kind", "gauss"))
        .unwrap();
    (iono, beam)
}

#[test]
fn test_duplicate_registries() {
    let (mut iono, _) = get_registries();
    let mut other = OptionRegistry::new("ionosphere");
    let mut ns = OptionNamespace::new("sim");
    ns.add(&mut iono).unwrap();
    let result = ns.add(&mut other);
    assert!(matches!(result, Err(OptionsError::DuplicateRegistry(n)) if n == "ionosphere"));
    assert_eq!(ns.len(), 1);
}

#[test]
fn test_lookup_across_registries() {
    let (mut iono, mut beam) = get_registries();
    let mut ns = OptionNamespace::new("sim");
    ns.add(&mut iono).unwrap();
    ns.add(&mut beam).unwrap();
    assert_eq!(ns.registry_names().collect::<Vec<_>>(), ["ionosphere", "beam"]);

    // Unique across the namespace.
    assert_eq!(ns.get("num_iter").unwrap(), Value::Int(10));
    assert_eq!(ns.get("kind").unwrap(), Value::from("gauss"));

    // Known to both registries.
    match ns.get("tiling") {
        Err(OptionsError::AmbiguousKey { candidates, .. }) => assert_eq!(
            candidates,
            ["ionosphere:compile.span.tiling", "beam:compile.model.tiling"]
        ),
        other => panic!("expected an ambiguity, got {other:?}"),
    }
    assert_eq!(ns.get("ionosphere:tiling").unwrap(), Value::Int(4));
    assert_eq!(ns.get("beam:tiling").unwrap(), Value::Int(1));
    assert!(matches!(
        ns.get("nothing:tiling"),
        Err(OptionsError::UnknownKey(_))
    ));
    assert!(matches!(ns.get("size"), Err(OptionsError::UnknownKey(_))));

    ns.set("beam:tiling", 2).unwrap();
    ns.set_str("num_iter", "20").unwrap();
    assert!(ns.set("ionosphere:tiling", 3).is_err());
    drop(ns);
    assert_eq!(beam.get("tiling").unwrap(), Value::Int(2));
    assert_eq!(iono.get("num_iter").unwrap(), Value::Int(20));
}

#[test]
fn test_namespace_reset() {
    let (mut iono, mut beam) = get_registries();
    let mut ns = OptionNamespace::new("sim");
    ns.add(&mut iono).unwrap();
    ns.add(&mut beam).unwrap();
    ns.set("span.tiling", 2).unwrap();
    ns.set("kind", "airy").unwrap();

    assert_eq!(ns.activate(MenuAction::ResetAll).changed, 2);
    assert_eq!(ns.get("ionosphere:tiling").unwrap(), Value::Int(4));
    assert_eq!(ns.get("kind").unwrap(), Value::from("gauss"));

    assert_eq!(ns.activate(MenuAction::UndoReset).changed, 2);
    assert_eq!(ns.get("kind").unwrap(), Value::from("airy"));
}

#[test]
fn test_namespace_menu() {
    let (mut iono, mut beam) = get_registries();
    let mut ns = OptionNamespace::new("sim");
    ns.add(&mut iono).unwrap();
    ns.add(&mut beam).unwrap();

    let menu = ns.build_menu(Section::Compile, true);
    assert_eq!(menu.root.prompt, "options for: sim");
    let prompts: Vec<&str> = menu
        .root
        .children
        .iter()
        .map(|c| match c {
            MenuNode::Group(g) => g.prompt.as_str(),
            MenuNode::Action(a) => a.prompt.as_str(),
            MenuNode::Leaf(l) => l.prompt.as_str(),
        })
        .collect();
    assert_eq!(
        prompts,
        [
            "ionosphere",
            "{station} beam",
            "sim: reset to defaults (!)",
            "sim: undo last reset"
        ]
    );
    assert_eq!(
        menu.leaf_keys(),
        [
            "compile.span.tiling",
            "compile.model.tiling",
            "compile.model.kind"
        ]
    );

    // beam has no runtime options.
    let menu = ns.build_menu(Section::Runtime, false);
    assert_eq!(menu.root.children.len(), 1);
    assert_eq!(menu.leaf_keys(), ["runtime.solver.num_iter"]);
}
