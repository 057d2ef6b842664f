// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Per-source priority queues of the nodes of a [`PowerGraph`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::{Edge, EnergySource, Node, PowerGraph};

/// A node together with its index in the graph, ordered so that the best
/// candidate for selection is the greatest.
///
/// Lower clean scores rank higher, then higher power outputs, then lower
/// indices.
#[derive(Debug)]
struct Ranked<'a, N> {
    index: usize,
    node: &'a N,
}

impl<N: Node> Ord for Ranked<'_, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .clean_score()
            .cmp(&self.node.clean_score())
            .then_with(|| self.node.power_output().cmp(&other.node.power_output()))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl<N: Node> PartialOrd for Ranked<'_, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> PartialEq for Ranked<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Node> Eq for Ranked<'_, N> {}

/// The nodes of a graph grouped by energy source, each group in a priority
/// queue that yields the cleanest, then largest, node first.
///
/// Popping is destructive, so a set of stacks serves a single selection.
#[derive(Debug)]
pub struct CategoryStacks<'a, N: Node> {
    stacks: HashMap<EnergySource, BinaryHeap<Ranked<'a, N>>>,
}

impl<'a, N: Node> CategoryStacks<'a, N> {
    /// Pushes every node of `graph` onto the stack of its energy source.
    pub fn populate<E: Edge>(graph: &'a PowerGraph<N, E>) -> Self {
        let mut stacks: HashMap<EnergySource, BinaryHeap<Ranked<'a, N>>> = HashMap::new();
        for (index, node) in graph.nodes().enumerate() {
            stacks
                .entry(node.energy_source())
                .or_default()
                .push(Ranked { index, node });
        }
        Self { stacks }
    }

    /// Returns the energy sources that have at least one node left, sorted.
    pub fn sources(&self) -> Vec<&EnergySource> {
        let mut sources = self
            .stacks
            .iter()
            .filter(|(_, stack)| !stack.is_empty())
            .map(|(source, _)| source)
            .collect::<Vec<_>>();
        sources.sort();
        sources
    }

    /// Returns the number of nodes left for the given source.
    pub fn len(&self, source: &EnergySource) -> usize {
        self.stacks.get(source).map_or(0, |stack| stack.len())
    }

    /// Returns `true` if no nodes are left for any source.
    pub fn is_empty(&self) -> bool {
        self.stacks.values().all(|stack| stack.is_empty())
    }

    /// Returns the index and the node that the next `pop` for the given
    /// source would return, without removing it.
    pub fn peek(&self, source: &EnergySource) -> Option<(usize, &'a N)> {
        self.stacks
            .get(source)
            .and_then(|stack| stack.peek())
            .map(|r| (r.index, r.node))
    }

    /// Removes and returns the index and the node of the best remaining node
    /// for the given source.
    pub fn pop(&mut self, source: &EnergySource) -> Option<(usize, &'a N)> {
        self.stacks
            .get_mut(source)
            .and_then(|stack| stack.pop())
            .map(|r| (r.index, r.node))
    }
}
