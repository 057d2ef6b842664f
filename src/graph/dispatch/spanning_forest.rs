// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Kruskal's algorithm over the subgraph induced by a [`Selection`].

use std::collections::HashMap;

use crate::{Edge, Node, PowerGraph, UnionFind};

use super::Selection;

/// A line accepted into a spanning forest.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningEdge {
    /// Index of the line among the edges of the graph.
    pub edge: usize,
    /// Position of the first endpoint in the selection.
    pub source: usize,
    /// Position of the second endpoint in the selection.
    pub destination: usize,
    /// Cost of the line as given in the graph.
    pub base_weight: f64,
    /// Cost of the line including the loss surcharge.
    pub weight: f64,
}

/// A minimum spanning forest over the selected nodes.
///
/// When the selected nodes are not all connected through lines between
/// them, this has one tree per connected group, reflected by
/// `component_count`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningForest {
    edges: Vec<SpanningEdge>,
    total_cost: f64,
    component_count: usize,
    isolated: Vec<usize>,
}

impl SpanningForest {
    /// Returns the accepted lines, in the order Kruskal accepted them, which
    /// is ascending surcharged cost.
    pub fn edges(&self) -> &[SpanningEdge] {
        &self.edges
    }

    /// Returns the sum of the surcharged costs of the accepted lines.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Returns the number of trees in the forest, counting every selected
    /// node that no accepted line touches as a tree of its own.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns `true` if all selected nodes are joined into one tree.
    pub fn is_connected(&self) -> bool {
        self.component_count <= 1
    }

    /// Returns the selection positions of the nodes that no accepted line
    /// touches.
    pub fn isolated(&self) -> &[usize] {
        &self.isolated
    }
}

impl<N, E> PowerGraph<N, E>
where
    N: Node,
    E: Edge,
{
    pub(super) fn build_spanning_forest(
        &self,
        selection: &Selection<'_, N>,
        loss_factor: f64,
    ) -> SpanningForest {
        let positions = selection
            .indices()
            .enumerate()
            .map(|(position, index)| (index, position))
            .collect::<HashMap<_, _>>();

        let mut candidates = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(edge, e)| {
                let source = *positions.get(&e.source())?;
                let destination = *positions.get(&e.destination())?;
                let base_weight = e.weight();
                Some(SpanningEdge {
                    edge,
                    source,
                    destination,
                    base_weight,
                    weight: base_weight + base_weight * loss_factor,
                })
            })
            .collect::<Vec<_>>();
        // Stable, so equal costs keep the order of the graph's edges.
        candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut uf = UnionFind::new(selection.len());
        let mut edges = vec![];
        let mut total_cost = 0.0;
        for candidate in candidates {
            if uf.union(candidate.source, candidate.destination) {
                total_cost += candidate.weight;
                edges.push(candidate);
            }
        }

        let mut touched = vec![false; selection.len()];
        for edge in &edges {
            touched[edge.source] = true;
            touched[edge.destination] = true;
        }
        let isolated = touched
            .iter()
            .enumerate()
            .filter(|(_, touched)| !**touched)
            .map(|(position, _)| position)
            .collect::<Vec<_>>();

        let forest = SpanningForest {
            edges,
            total_cost,
            component_count: uf.component_count(),
            isolated,
        };

        tracing::debug!(
            "Spanning forest over {} nodes: {} edges, {} components, total cost {:.2}.",
            selection.len(),
            forest.edges.len(),
            forest.component_count,
            forest.total_cost
        );

        forest
    }
}
