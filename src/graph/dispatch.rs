// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for selecting nodes to meet a power demand, and for connecting
//! the selected nodes at minimum cost.

mod category_stacks;
mod selection;
mod spanning_forest;
mod strategies;

pub use category_stacks::CategoryStacks;
pub use selection::{Selection, SourceBreakdown};
pub use spanning_forest::{SpanningEdge, SpanningForest};

use std::collections::BTreeSet;

use crate::config::validate_loss_factor;
use crate::{DispatchConfig, Edge, Error, Node, PowerGraph, SelectionStrategy};

/// The outcome of a dispatch: the selected nodes and the spanning forest
/// connecting them.
#[derive(Debug)]
pub struct Dispatch<'a, N: Node> {
    selection: Selection<'a, N>,
    forest: SpanningForest,
}

impl<'a, N: Node> Dispatch<'a, N> {
    /// Returns the selected nodes.
    pub fn selection(&self) -> &Selection<'a, N> {
        &self.selection
    }

    /// Returns the spanning forest over the selected nodes.
    pub fn forest(&self) -> &SpanningForest {
        &self.forest
    }

    /// Splits the dispatch into its selection and spanning forest.
    pub fn into_parts(self) -> (Selection<'a, N>, SpanningForest) {
        (self.selection, self.forest)
    }
}

impl<N, E> PowerGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the nodes of the graph grouped by energy source, ready for a
    /// cleanest-first selection.
    pub fn category_stacks(&self) -> CategoryStacks<'_, N> {
        CategoryStacks::populate(self)
    }

    /// Selects nodes until `initial_power` plus their combined output meets
    /// `demand`, using the strategy and priority list from `config`.
    ///
    /// Not meeting the demand is not an error; check
    /// [`Selection::is_satisfied`] on the result.
    pub fn select_nodes(
        &self,
        demand: u64,
        initial_power: u64,
        config: &DispatchConfig,
    ) -> Result<Selection<'_, N>, Error> {
        config.validate()?;
        self.check_unprioritized_sources(config)?;

        Ok(self.run_selection(demand, initial_power, config))
    }

    /// Returns the minimum spanning forest over the selected nodes, using
    /// only the lines between them, with every line cost raised by
    /// `loss_factor` times itself.
    ///
    /// The `selection` must have been made from this graph.
    ///
    /// Returns an error if `loss_factor` is negative or not finite, or if
    /// `selection` holds nodes that are not part of this graph.
    pub fn spanning_forest(
        &self,
        selection: &Selection<'_, N>,
        loss_factor: f64,
    ) -> Result<SpanningForest, Error> {
        validate_loss_factor(loss_factor)?;
        self.check_selection(selection)?;
        Ok(self.build_spanning_forest(selection, loss_factor))
    }

    /// Selects nodes to meet `demand` and connects them with a minimum
    /// spanning forest.
    ///
    /// Returns an error if the configuration is invalid, or if `demand` is
    /// negative.  A zero demand gives an empty selection and forest.
    pub fn dispatch(&self, demand: i64, config: &DispatchConfig) -> Result<Dispatch<'_, N>, Error> {
        config.validate()?;
        let demand = u64::try_from(demand).map_err(|_| {
            Error::invalid_demand(format!("Demand must not be negative, got {demand}."))
        })?;
        self.check_unprioritized_sources(config)?;

        if demand == 0 {
            tracing::debug!("Zero demand, nothing to dispatch.");
            return Ok(Dispatch {
                selection: Selection::new(0, 0),
                forest: SpanningForest::default(),
            });
        }

        let selection = self.run_selection(demand, 0, config);
        if !selection.is_satisfied() {
            tracing::warn!(
                "Available power {} falls short of the demand {} by {}.",
                selection.total_power(),
                demand,
                selection.shortfall()
            );
        }

        let forest = self.build_spanning_forest(&selection, config.loss_factor);
        if !forest.is_connected() {
            tracing::debug!(
                "Selected nodes form {} disconnected groups.",
                forest.component_count()
            );
        }

        Ok(Dispatch { selection, forest })
    }

    fn run_selection(
        &self,
        demand: u64,
        initial_power: u64,
        config: &DispatchConfig,
    ) -> Selection<'_, N> {
        match config.strategy {
            SelectionStrategy::CleanestFirst => {
                self.category_stacks()
                    .select(&config.priority, demand, initial_power)
            }
            SelectionStrategy::LargestFirst => {
                self.select_largest_first(&config.priority, demand, initial_power)
            }
            SelectionStrategy::Weighted { alpha, beta } => {
                self.select_weighted(&config.priority, alpha, beta, demand, initial_power)
            }
        }
    }

    /// Checks that every selected node is the node stored at its index in
    /// this graph.
    fn check_selection(&self, selection: &Selection<'_, N>) -> Result<(), Error> {
        for (index, node) in selection.indices().zip(selection.nodes()) {
            let owned = self.node(index).is_ok_and(|own| std::ptr::eq(own, node));
            if !owned {
                return Err(Error::invalid_selection(format!(
                    "Selected node {} at index {index} is not part of this graph.",
                    node.name()
                )));
            }
        }
        Ok(())
    }

    /// Checks for nodes whose energy source is missing from the priority
    /// list.  These can never be selected.
    fn check_unprioritized_sources(&self, config: &DispatchConfig) -> Result<(), Error> {
        let missing = self
            .nodes()
            .map(|node| node.energy_source())
            .filter(|source| !config.priority.contains(source))
            .collect::<BTreeSet<_>>();
        if missing.is_empty() {
            return Ok(());
        }

        let labels = missing
            .iter()
            .map(|source| source.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if !config.allow_unprioritized_sources {
            return Err(Error::invalid_config(format!(
                "Energy sources missing from the priority list: {labels}."
            )));
        }
        tracing::warn!("Nodes of these energy sources will not be selected: {labels}.");

        Ok(())
    }
}
