// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use meqtree_options::{OptionRegistry, OptionSpec, Section};

/// A registry with `n` groups of 4 options each.
fn get_registry(n: usize) -> OptionRegistry {
    let mut r = OptionRegistry::new("bench");
    for i in 0..n {
        r.define_group(
            &format!("compile.group{i}"),
            [("tiling", 1), ("size", 2), ("iter", 3), ("order", 4)],
        )
        .unwrap();
    }
    r
}

fn define(c: &mut Criterion) {
    c.bench_function("define 1000 options", |b| b.iter(|| get_registry(250)));
}

fn lookup(c: &mut Criterion) {
    let mut r = get_registry(250);
    c.bench_function("get by full key", |b| {
        b.iter(|| r.get(black_box("compile.group123.size")).unwrap())
    });
    c.bench_function("get by shorthand", |b| {
        b.iter(|| r.get(black_box("group123.size")).unwrap())
    });
    c.bench_function("set by shorthand", |b| {
        let mut v = 0;
        b.iter(|| {
            v ^= 1;
            r.set(black_box("group123.iter"), v).unwrap()
        })
    });
}

fn menu(c: &mut Criterion) {
    let r = get_registry(250);
    c.bench_function("build 1000-option menu", |b| {
        b.iter(|| r.build_menu(Section::Compile, true))
    });
}

criterion_group!(benches, define, lookup, menu);
criterion_main!(benches);
