//! Priority-ordered composite.
//!
//! A [`PrioritySelector`] owns behaviors keyed by integer priority and
//! evaluates them from the lowest key to the highest until one proposes.
//! This is the proposal-returning counterpart of a classic selector node
//! (short-circuited logical OR over the children).

use std::collections::BTreeMap;

use crate::Behavior;

/// Priority key. Lower values are evaluated first.
pub type Priority = u32;

/// The proposal chosen by a [`PrioritySelector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<O> {
    /// Key of the behavior that produced the proposal.
    pub priority: Priority,
    /// The proposal itself.
    pub output: O,
}

/// Evaluates behaviors in ascending priority order until one proposes.
///
/// # Semantics
///
/// - Children are visited in ascending key order, never insertion order
/// - The first `Some` proposal **stops evaluation** and is returned
/// - If every child declines (or there are none), the selector declines
///
/// Inserting at an occupied key replaces the previous behavior, so each key
/// holds at most one strategy at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioritySelector<B> {
    children: BTreeMap<Priority, B>,
}

impl<B> Default for PrioritySelector<B> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }
}

impl<B> PrioritySelector<B> {
    /// Creates an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `behavior` at `priority`, returning the behavior it replaced.
    pub fn insert(&mut self, priority: Priority, behavior: B) -> Option<B> {
        self.children.insert(priority, behavior)
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, priority: Priority, behavior: B) -> Self {
        self.children.insert(priority, behavior);
        self
    }

    pub fn remove(&mut self, priority: Priority) -> Option<B> {
        self.children.remove(&priority)
    }

    pub fn get(&self, priority: Priority) -> Option<&B> {
        self.children.get(&priority)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates `(priority, behavior)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &B)> {
        self.children.iter().map(|(priority, behavior)| (*priority, behavior))
    }

    /// Returns the first proposal in ascending priority order.
    pub fn select<C>(&self, ctx: &mut C) -> Option<Selection<B::Output>>
    where
        B: Behavior<C>,
    {
        self.children.iter().find_map(|(priority, behavior)| {
            behavior.propose(ctx).map(|output| Selection {
                priority: *priority,
                output,
            })
        })
    }
}

impl<B> FromIterator<(Priority, B)> for PrioritySelector<B> {
    fn from_iter<T: IntoIterator<Item = (Priority, B)>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}
