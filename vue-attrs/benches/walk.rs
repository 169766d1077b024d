//! Walk and resolution cost on large composition graphs.
//!
//! - a chain of N components, each extending the next
//! - N components that all mix in each other (dense cycle)

use divan::{Bencher, black_box};
use vue_attrs::memory::ComponentArena;
use vue_attrs::{ComponentDetails, ComponentId, Grammar, Visit, walk_components};

fn main() {
    divan::main();
}

fn chain(len: usize) -> (ComponentArena, ComponentId) {
    let mut arena = ComponentArena::new();
    let ids: Vec<_> = (0..len)
        .map(|i| arena.add_component(&format!("Chain{i}")))
        .collect();
    for (i, pair) in ids.windows(2).enumerate() {
        arena
            .component_mut(pair[0])
            .unwrap()
            .prop(&format!("prop{i}"))
            .extends(pair[1]);
    }
    if let Some(&last) = ids.last() {
        arena.component_mut(last).unwrap().prop("deepestProp");
    }
    (arena, ids[0])
}

fn dense(len: usize) -> (ComponentArena, ComponentId) {
    let mut arena = ComponentArena::new();
    let ids: Vec<_> = (0..len)
        .map(|i| arena.add_component(&format!("Dense{i}")))
        .collect();
    for &from in &ids {
        let decl = arena.component_mut(from).unwrap();
        for &to in &ids {
            decl.mixin(to);
        }
    }
    (arena, ids[0])
}

#[divan::bench(args = [10, 100, 1000])]
fn walk_chain(bencher: Bencher, len: usize) {
    let (arena, root) = chain(len);
    bencher.bench(|| {
        let mut count = 0usize;
        walk_components(&arena, Some(root), |_| {
            count += 1;
            Visit::Continue
        });
        black_box(count)
    });
}

#[divan::bench(args = [10, 50, 100])]
fn walk_dense_cycle(bencher: Bencher, len: usize) {
    let (arena, root) = dense(len);
    bencher.bench(|| {
        let mut count = 0usize;
        walk_components(&arena, Some(root), |_| {
            count += 1;
            Visit::Continue
        });
        black_box(count)
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn resolve_deepest_prop(bencher: Bencher, len: usize) {
    let (arena, root) = chain(len);
    let grammar = Grammar::default();
    let details = ComponentDetails::new(&arena, &grammar);
    bencher.bench(|| black_box(details.resolve_attribute(Some(root), ":deepest-prop", true)));
}

#[divan::bench(args = [10, 100, 1000])]
fn list_markup_attributes(bencher: Bencher, len: usize) {
    let (arena, root) = chain(len);
    let grammar = Grammar::default();
    let details = ComponentDetails::new(&arena, &grammar);
    bencher.bench(|| black_box(details.attributes(Some(root), true, true)));
}
