// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`PowerGraph`] instances from given nodes and edges.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::{Edge, Error, Node};

use super::{NodeNameMap, PowerGraph};

/// `PowerGraph` instantiation.
impl<N, E> PowerGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`PowerGraph`] from the given nodes and edges.
    ///
    /// Nodes are indexed in iteration order, and edges refer to them by
    /// those indices.
    ///
    /// Returns an error if a node name is empty or repeated, if an edge
    /// refers to a node index that doesn't exist, or if an edge weight is
    /// negative or not finite.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, EdgeIterator: IntoIterator<Item = E>>(
        nodes: NodeIterator,
        edges: EdgeIterator,
    ) -> Result<Self, Error> {
        let (graph, node_names) = Self::create_graph(nodes)?;

        let mut pg = Self {
            graph,
            node_names,
            edges: Vec::new(),
        };
        pg.add_edges(edges)?;

        tracing::debug!(
            "Created power graph with {} nodes and {} edges.",
            pg.graph.node_count(),
            pg.edges.len()
        );

        Ok(pg)
    }

    fn create_graph(
        nodes: impl IntoIterator<Item = N>,
    ) -> Result<(UnGraph<N, usize>, NodeNameMap), Error> {
        let mut graph = UnGraph::default();
        let mut names = NodeNameMap::new();

        for node in nodes {
            let name = node.name().to_string();

            if name.is_empty() {
                return Err(Error::invalid_node(format!(
                    "Node at index {} has an empty name.",
                    graph.node_count()
                )));
            }
            if names.contains_key(&name) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate node name found: {name}"
                )));
            }

            let idx = graph.add_node(node);
            names.insert(name, idx);
        }

        Ok((graph, names))
    }

    fn add_edges(&mut self, edges: impl IntoIterator<Item = E>) -> Result<(), Error> {
        let node_count = self.graph.node_count();

        for edge in edges {
            let (u, v, weight) = (edge.source(), edge.destination(), edge.weight());

            for index in [u, v] {
                if index >= node_count {
                    return Err(Error::invalid_edge(format!(
                        "Edge:({u}, {v}) Can't find a node with index {index}"
                    )));
                }
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::invalid_edge(format!(
                    "Edge:({u}, {v}) Weight must be finite and non-negative, got {weight}."
                )));
            }

            self.graph
                .add_edge(NodeIndex::new(u), NodeIndex::new(v), self.edges.len());
            self.edges.push(edge);
        }

        Ok(())
    }
}
