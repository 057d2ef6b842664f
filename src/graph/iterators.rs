// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over nodes and edges in a `PowerGraph`.

use petgraph::graph::UnGraph;

use crate::{Edge, Node};

/// An iterator over the nodes in a `PowerGraph`, in index order.
pub struct Nodes<'a, N>
where
    N: Node,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<N>>,
}

impl<'a, N> Iterator for Nodes<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the edges in a `PowerGraph`, in insertion order.
pub struct Edges<'a, E>
where
    E: Edge,
{
    pub(crate) iter: std::slice::Iter<'a, E>,
}

impl<'a, E> Iterator for Edges<'a, E>
where
    E: Edge,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// An iterator over the neighbors of a node in a `PowerGraph`.
///
/// A neighbor connected by several lines is yielded once per line.
pub struct Neighbors<'a, N>
where
    N: Node,
{
    pub(crate) graph: &'a UnGraph<N, usize>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, usize>,
}

impl<'a, N> Iterator for Neighbors<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
