// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the generation nodes of a power network, and
//! the transmission lines between them.

mod creation;
mod dispatch;
pub mod iterators;
mod retrieval;

#[cfg(test)]
mod test_utils;

pub use dispatch::{
    CategoryStacks, Dispatch, Selection, SourceBreakdown, SpanningEdge, SpanningForest,
};

use crate::{Edge, Node};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// `NodeNameMap` stores the `NodeIndex` for every node name, so that nodes
/// can be retrieved by name.
pub(crate) type NodeNameMap = HashMap<String, NodeIndex>;

/// A graph representation of the generation nodes of a power network and the
/// transmission lines between them.
///
/// Nodes are addressed by their position in the sequence they were passed
/// in.  The weight of every `petgraph` edge is the position of the
/// corresponding `Edge` in `edges`, so that parallel lines are kept apart.
pub struct PowerGraph<N, E>
where
    N: Node,
    E: Edge,
{
    graph: UnGraph<N, usize>,
    node_names: NodeNameMap,
    edges: Vec<E>,
}
