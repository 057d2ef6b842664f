// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Clean Power Dispatch

This is a library for representing the generation nodes of a power network
and the transmission lines between them as a graph, and for dispatching on
it: picking nodes to meet a power demand, cleanest sources first, and
connecting the picked nodes at minimum cost.

## The `Node` and `Edge` traits

The main struct is [`PowerGraph`], instances of which can be created by
passing an iterator of nodes and the edges between them to the
[`try_new`][PowerGraph::try_new] method.

The library doesn't know about the node and edge types of its users and
instead uses traits to interact with them.  To be usable with this library,
the node and edge types must implement the [`Node`] and [`Edge`] traits,
respectively.  Check out the documentation for these traits for sample
implementations.

## Validation

The [`try_new`][PowerGraph::try_new] method checks that:

- Every node has a non-empty name, and no two nodes share a name.
- All edges point to existing node indices.
- All edge weights are finite and non-negative.

If any of the checks fail, the method will return an [`Error`], and a
[`PowerGraph`] instance otherwise.

## Dispatching

[`dispatch`][PowerGraph::dispatch] runs both steps with a
[`DispatchConfig`]:

- **Selection.**  Nodes are grouped into [`CategoryStacks`] by energy source.
  The sources are drained in the configured priority order, each yielding
  its lowest clean score first and, among equal scores, its largest power
  output first, until the demand is met.  Sources missing from the priority
  list are never drawn from.  Two baseline rules are available through
  [`SelectionStrategy`] as well.
- **Connection.**  A [`SpanningForest`] is built with Kruskal's algorithm
  over the lines whose endpoints were both selected, each line cost raised
  by the loss factor.  If the selected nodes can't all be reached through
  those lines, the forest says so through its component count.

Both steps are also available on their own, through
[`select_nodes`][PowerGraph::select_nodes] and
[`spanning_forest`][PowerGraph::spanning_forest].
*/

mod config;
pub use config::{DispatchConfig, SelectionStrategy, DEFAULT_LOSS_FACTOR};

mod energy_source;
pub use energy_source::EnergySource;

mod graph;
pub use graph::{
    iterators, CategoryStacks, Dispatch, PowerGraph, Selection, SourceBreakdown, SpanningEdge,
    SpanningForest,
};

mod graph_traits;
pub use graph_traits::{Edge, Node};

mod union_find;
pub use union_find::UnionFind;

mod error;
pub use error::Error;
