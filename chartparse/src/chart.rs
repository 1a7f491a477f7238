#![deny(warnings)]

use crate::edge::Edge;
use rustc_hash::FxHashSet;
use std::ops::Index;
use std::rc::Rc;
use std::slice;

/// Edges ending at one input position, in insertion order, without repeats.
#[derive(Clone, Default)]
pub struct EdgeSet {
    order: Vec<Rc<Edge>>,
    dedup: FxHashSet<Rc<Edge>>,
}

impl EdgeSet {
    /// Store `edge` unless an equal one is already here.
    /// Returns the shared edge only when it was new.
    pub fn insert(&mut self, edge: Edge) -> Option<Rc<Edge>> {
        if self.dedup.contains(&edge) {
            return None;
        }
        let edge = Rc::new(edge);
        self.order.push(edge.clone());
        self.dedup.insert(edge.clone());
        Some(edge)
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.dedup.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Rc<Edge>> {
        self.order.iter()
    }
}

impl Index<usize> for EdgeSet {
    type Output = Rc<Edge>;
    fn index(&self, idx: usize) -> &Rc<Edge> {
        &self.order[idx]
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Rc<Edge>;
    type IntoIter = slice::Iter<'a, Rc<Edge>>;
    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// The chart: slot `k` holds every edge ending at input position `k`.
/// A parse over `n` words has `n + 1` slots.
#[derive(Clone)]
pub struct Chart {
    slots: Vec<EdgeSet>,
}

impl Chart {
    pub fn new(num_words: usize) -> Chart {
        Chart { slots: vec![EdgeSet::default(); num_words + 1] }
    }

    /// Number of slots, one more than the words parsed.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert into the slot of `edge.end`. None if it was already there.
    pub fn insert(&mut self, edge: Edge) -> Option<Rc<Edge>> {
        let end = edge.end;
        self.slots[end].insert(edge)
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.slots.get(edge.end).is_some_and(|slot| slot.contains(edge))
    }

    pub fn slots(&self) -> slice::Iter<'_, EdgeSet> {
        self.slots.iter()
    }

    /// Total number of edges across all slots.
    pub fn num_edges(&self) -> usize {
        self.slots.iter().map(EdgeSet::len).sum()
    }

    /// Complete derivations of `start_symbol` spanning the whole input.
    pub fn complete_parses(&self, start_symbol: &str) -> Vec<Rc<Edge>> {
        match self.slots.last() {
            None => Vec::new(),
            Some(last) => last.iter()
                .filter(|edge| edge.start == 0 && edge.lhs == start_symbol &&
                               edge.is_complete())
                .cloned()
                .collect(),
        }
    }
}

impl Index<usize> for Chart {
    type Output = EdgeSet;
    fn index(&self, idx: usize) -> &EdgeSet {
        &self.slots[idx]
    }
}

///////////////////////////////////////////////////////////////////////////////
