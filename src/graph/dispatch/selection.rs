// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The result of selecting nodes to meet a demand, and the greedy
//! cleanest-first selector that produces it from [`CategoryStacks`].

use std::collections::BTreeMap;

use crate::{EnergySource, Node};

use super::CategoryStacks;

/// The number of selected nodes and their combined power, for one energy
/// source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SourceBreakdown {
    pub count: usize,
    pub power: u64,
}

/// The nodes picked to meet a demand, in the order they were picked.
#[derive(Debug)]
pub struct Selection<'a, N: Node> {
    entries: Vec<(usize, &'a N)>,
    demand: u64,
    total_power: u64,
}

impl<'a, N: Node> Selection<'a, N> {
    /// Creates an empty selection whose running total starts at
    /// `initial_power`.
    pub(crate) fn new(demand: u64, initial_power: u64) -> Self {
        Self {
            entries: Vec::new(),
            demand,
            total_power: initial_power,
        }
    }

    pub(crate) fn push(&mut self, index: usize, node: &'a N) {
        self.total_power = self.total_power.saturating_add(node.power_output());
        self.entries.push((index, node));
    }

    /// Returns the selected nodes in selection order.
    pub fn nodes(&self) -> impl Iterator<Item = &'a N> + '_ {
        self.entries.iter().map(|(_, node)| *node)
    }

    /// Returns the graph indices of the selected nodes in selection order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(index, _)| *index)
    }

    /// Returns the node at the given position of the selection.
    pub fn get(&self, position: usize) -> Option<&'a N> {
        self.entries.get(position).map(|(_, node)| *node)
    }

    /// Returns the number of selected nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no nodes were selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the demand the selection was made for.
    pub fn demand(&self) -> u64 {
        self.demand
    }

    /// Returns the achieved power, including any starting total.
    pub fn total_power(&self) -> u64 {
        self.total_power
    }

    /// Returns `true` if the achieved power meets the demand.
    pub fn is_satisfied(&self) -> bool {
        self.total_power >= self.demand
    }

    /// Returns how much power is missing to meet the demand.
    pub fn shortfall(&self) -> u64 {
        self.demand.saturating_sub(self.total_power)
    }

    /// Returns the number of selected nodes and their power per energy
    /// source.
    pub fn breakdown(&self) -> BTreeMap<EnergySource, SourceBreakdown> {
        let mut breakdown: BTreeMap<EnergySource, SourceBreakdown> = BTreeMap::new();
        for node in self.nodes() {
            let entry = breakdown.entry(node.energy_source()).or_default();
            entry.count += 1;
            entry.power = entry.power.saturating_add(node.power_output());
        }
        breakdown
    }
}

/// Greedy cleanest-first selection.
impl<'a, N: Node> CategoryStacks<'a, N> {
    /// Pops nodes source by source, in the order given by `priority`, until
    /// the running total reaches `demand`.
    ///
    /// The running total starts at `initial_power`.  Sources that are not in
    /// `priority` are never consulted.  If all listed sources are exhausted
    /// first, the returned selection has a shortfall instead of failing.
    pub fn select(
        &mut self,
        priority: &[EnergySource],
        demand: u64,
        initial_power: u64,
    ) -> Selection<'a, N> {
        let mut selection = Selection::new(demand, initial_power);

        for source in priority {
            while !selection.is_satisfied() {
                let Some((index, node)) = self.pop(source) else {
                    break;
                };
                tracing::debug!(
                    "Selected {}:{} with {} power.",
                    source,
                    node.name(),
                    node.power_output()
                );
                selection.push(index, node);
            }
            if selection.is_satisfied() {
                break;
            }
        }

        tracing::debug!(
            "Selected {} nodes with {} power for a demand of {}.",
            selection.len(),
            selection.total_power(),
            demand
        );

        selection
    }
}
