// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving nodes and edges from a [`PowerGraph`].

use petgraph::graph::NodeIndex;

use crate::iterators::{Edges, Neighbors, Nodes};
use crate::{Edge, Error, Node, PowerGraph};

/// `Node` and `Edge` retrieval.
impl<N, E> PowerGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the node at the given `index`, if it exists.
    pub fn node(&self, index: usize) -> Result<&N, Error> {
        self.graph
            .node_weight(NodeIndex::new(index))
            .ok_or_else(|| Error::node_not_found(format!("Node with index {} not found.", index)))
    }

    /// Returns the index of the node with the given `name`, if it exists.
    pub fn index_of(&self, name: &str) -> Result<usize, Error> {
        self.node_names
            .get(name)
            .map(|i| i.index())
            .ok_or_else(|| Error::node_not_found(format!("Node with name {} not found.", name)))
    }

    /// Returns an iterator over the nodes in the graph.
    pub fn nodes(&self) -> Nodes<N> {
        Nodes {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the edges in the graph.
    pub fn edges(&self) -> Edges<E> {
        Edges {
            iter: self.edges.iter(),
        }
    }

    /// Returns an iterator over the neighbors of the node at the given
    /// `index`.
    ///
    /// Returns an error if the given `index` does not exist.
    pub fn neighbors(&self, index: usize) -> Result<Neighbors<N>, Error> {
        self.node(index)?;
        Ok(Neighbors {
            graph: &self.graph,
            iter: self.graph.neighbors(NodeIndex::new(index)),
        })
    }

    /// Returns the summed base weight of all edges touching the node at the
    /// given `index`.
    pub(crate) fn incident_weight(&self, index: usize) -> f64 {
        self.graph
            .edges(NodeIndex::new(index))
            .map(|e| self.edges[*e.weight()].weight())
            .sum()
    }
}
