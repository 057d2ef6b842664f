// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Baseline selection rules, that rank all eligible nodes of a graph in a
//! single list instead of going source by source.

use crate::{Edge, EnergySource, Node, PowerGraph};

use super::Selection;

impl<N, E> PowerGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the nodes whose energy source is in `priority`, with their
    /// indices, in index order.
    fn eligible_nodes(&self, priority: &[EnergySource]) -> Vec<(usize, &N)> {
        self.nodes()
            .enumerate()
            .filter(|(_, node)| priority.contains(&node.energy_source()))
            .collect()
    }

    /// Takes eligible nodes in descending order of power output until the
    /// demand is met.  Equal outputs keep index order.
    pub(super) fn select_largest_first(
        &self,
        priority: &[EnergySource],
        demand: u64,
        initial_power: u64,
    ) -> Selection<'_, N> {
        let mut ranked = self.eligible_nodes(priority);
        ranked.sort_by(|(_, a), (_, b)| b.power_output().cmp(&a.power_output()));

        Self::take_until_met(ranked, demand, initial_power)
    }

    /// Takes eligible nodes in ascending order of
    /// `alpha * clean + beta * line_cost` until the demand is met.
    ///
    /// `clean` is the clean score divided by the largest absolute clean score
    /// among the eligible nodes, and `line_cost` is the summed weight of the
    /// lines touching a node divided by the largest such sum.  A zero
    /// divisor makes the term zero.  Equal scores keep index order.
    pub(super) fn select_weighted(
        &self,
        priority: &[EnergySource],
        alpha: f64,
        beta: f64,
        demand: u64,
        initial_power: u64,
    ) -> Selection<'_, N> {
        let eligible = self.eligible_nodes(priority);

        let max_clean = eligible
            .iter()
            .map(|(_, node)| f64::from(node.clean_score()).abs())
            .fold(0.0, f64::max);
        let line_costs = eligible
            .iter()
            .map(|(index, _)| self.incident_weight(*index))
            .collect::<Vec<_>>();
        let max_line_cost = line_costs.iter().copied().fold(0.0, f64::max);

        let normalize = |value: f64, max: f64| if max > 0.0 { value / max } else { 0.0 };

        let mut scored = eligible
            .into_iter()
            .zip(line_costs)
            .map(|((index, node), line_cost)| {
                let score = alpha * normalize(f64::from(node.clean_score()), max_clean)
                    + beta * normalize(line_cost, max_line_cost);
                (score, (index, node))
            })
            .collect::<Vec<_>>();
        scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        Self::take_until_met(
            scored.into_iter().map(|(_, entry)| entry),
            demand,
            initial_power,
        )
    }

    fn take_until_met<'a>(
        ranked: impl IntoIterator<Item = (usize, &'a N)>,
        demand: u64,
        initial_power: u64,
    ) -> Selection<'a, N> {
        let mut selection = Selection::new(demand, initial_power);
        for (index, node) in ranked {
            if selection.is_satisfied() {
                break;
            }
            selection.push(index, node);
        }
        selection
    }
}
