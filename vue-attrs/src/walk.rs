//! Breadth-first walk over the component composition graph.
//!
//! The graph's nodes are component definitions; its edges are the union of
//! every [`ComponentLink`] relation. Mixins may include each other, so the
//! graph can have cycles.
//!
//! # Traversal order
//!
//! - **Breadth-first.** Nodes are expanded in the order they were reached.
//! - At each node, relations are explored in [`ComponentLink::ALL`] order, and
//!   within a relation, references are followed in declaration order.
//! - The root is expanded but never handed to the visitor.
//!
//! # Traversal control
//!
//! | Result            | Effect                                   |
//! |-------------------|------------------------------------------|
//! | `Visit::Continue` | Keep walking.                            |
//! | `Visit::Stop`     | Terminate the entire walk immediately.   |
//!
//! # Cycle handling
//!
//! A component is marked visited when it is first reached, before the
//! visitor sees it. Reaching it again through any relation is ignored, so
//! every reachable component is visited exactly once and the walk always
//! terminates.

use alloc::collections::VecDeque;

use indexmap::IndexSet;

use crate::component::ComponentId;
use crate::link::{ComponentIndex, ComponentLink};

/// Visitor answer controlling a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep walking.
    Continue,
    /// Stop the whole walk. No further callbacks are made.
    Stop,
}

/// Outcome of [`walk_components`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Every reachable component was visited.
    Completed,
    /// The walk was terminated by [`Visit::Stop`].
    Stopped,
}

impl WalkStatus {
    /// Whether the walk ended early.
    pub fn is_stopped(self) -> bool {
        self == WalkStatus::Stopped
    }
}

/// Handles below this index are kept in the bitmask; larger ones go to a
/// hash set so a single sparse handle cannot blow up the mask.
const DENSE_LIMIT: usize = 1 << 16;

/// Set of components already reached.
///
/// Dense handles (arena indices) are stored as a bitmask over handle
/// indices. Handles at or above an internal limit are hashed instead, so
/// indexes that derive handles from hashes or pointers stay cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    bits: Vec<u64>,
    sparse: IndexSet<ComponentId>,
    count: usize,
}

impl VisitedSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `component`; returns `false` if it was already present.
    pub fn insert(&mut self, component: ComponentId) -> bool {
        let index = component.index() as usize;
        if index >= DENSE_LIMIT {
            let inserted = self.sparse.insert(component);
            self.count += usize::from(inserted);
            return inserted;
        }
        let word = index / 64;
        let bit = index % 64;
        if word >= self.bits.len() {
            self.bits.resize(word + 1, 0);
        }
        if self.bits[word] & (1u64 << bit) != 0 {
            return false;
        }
        self.bits[word] |= 1u64 << bit;
        self.count += 1;
        true
    }

    /// Whether `component` is in the set.
    pub fn contains(&self, component: ComponentId) -> bool {
        let index = component.index() as usize;
        if index >= DENSE_LIMIT {
            return self.sparse.contains(&component);
        }
        self.bits
            .get(index / 64)
            .is_some_and(|word| word & (1u64 << (index % 64)) != 0)
    }

    /// Number of components in the set.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Walk every component reachable from `root`, calling `visitor` once per
/// component.
///
/// `root` may be `None` (the component under the cursor could not be
/// determined); global mixins are still reachable in that case.
///
/// See the [module docs](self) for ordering and stop semantics.
pub fn walk_components<I, F>(index: &I, root: Option<ComponentId>, mut visitor: F) -> WalkStatus
where
    I: ComponentIndex + ?Sized,
    F: FnMut(ComponentId) -> Visit,
{
    let mut visited = VisitedSet::new();
    let mut queue: VecDeque<Option<ComponentId>> = VecDeque::new();
    queue.push_back(root);
    if let Some(root) = root {
        visited.insert(root);
    }

    while let Some(current) = queue.pop_front() {
        for link in ComponentLink::ALL {
            for reference in link.related_references(index, current) {
                let Some(related) = link.resolve(index, &reference) else {
                    trace!("{link} reference from {current:?} is stale, skipping");
                    continue;
                };
                if !visited.insert(related) {
                    continue;
                }
                trace!("{link}: {current:?} -> {related}");
                queue.push_back(Some(related));

                if visitor(related) == Visit::Stop {
                    trace!("walk stopped at {related}");
                    return WalkStatus::Stopped;
                }
            }
        }
    }

    WalkStatus::Completed
}
