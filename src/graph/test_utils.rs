// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `graph` module.
//!
//! - the `TestNode` and `TestEdge` types, which implement the `Node` and
//!   `Edge` traits respectively.
//! - the `PowerGraphBuilder`, which can build power graphs for use in tests
//!   without spelling out names and indices.
//! - `sample_network`, a small eleven node network used across tests.
//! - `random_network`, which generates seeded networks for checking
//!   properties over many graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Edge, EnergySource, Error, Node, PowerGraph};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestNode(String, EnergySource, i32, u64);

impl TestNode {
    pub(crate) fn new(name: &str, source: EnergySource, clean_score: i32, power: u64) -> Self {
        TestNode(name.to_string(), source, clean_score, power)
    }
}

impl Node for TestNode {
    fn name(&self) -> &str {
        &self.0
    }

    fn energy_source(&self) -> EnergySource {
        self.1.clone()
    }

    fn clean_score(&self) -> i32 {
        self.2
    }

    fn power_output(&self) -> u64 {
        self.3
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestEdge(usize, usize, f64);

impl TestEdge {
    pub(crate) fn new(source: usize, destination: usize, weight: f64) -> Self {
        TestEdge(source, destination, weight)
    }
}

impl Edge for TestEdge {
    fn source(&self) -> usize {
        self.0
    }

    fn destination(&self) -> usize {
        self.1
    }

    fn weight(&self) -> f64 {
        self.2
    }
}

/// Represents a node added to the `PowerGraphBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub(crate) struct NodeHandle(usize);

impl NodeHandle {
    /// Returns the index of the node in the graph.
    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

/// A builder for creating power graphs easily, for use in tests.
///
/// Nodes get generated names `N0`, `N1`, ... and, unless added through
/// `add_node`, the clean score of their source: Solar 0, Wind 1, Coal 3.
pub(crate) struct PowerGraphBuilder {
    nodes: Vec<TestNode>,
    edges: Vec<TestEdge>,
}

impl PowerGraphBuilder {
    /// Creates a new `PowerGraphBuilder`.
    pub(crate) fn new() -> Self {
        PowerGraphBuilder {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node to the graph and returns its handle.
    pub(crate) fn add_node(
        &mut self,
        source: EnergySource,
        clean_score: i32,
        power: u64,
    ) -> NodeHandle {
        let index = self.nodes.len();
        self.nodes.push(TestNode::new(
            &format!("N{index}"),
            source,
            clean_score,
            power,
        ));
        NodeHandle(index)
    }

    /// Adds a solar node to the graph and returns its handle.
    pub(crate) fn solar(&mut self, power: u64) -> NodeHandle {
        self.add_node(EnergySource::Solar, 0, power)
    }

    /// Adds a wind node to the graph and returns its handle.
    pub(crate) fn wind(&mut self, power: u64) -> NodeHandle {
        self.add_node(EnergySource::Wind, 1, power)
    }

    /// Adds a coal node to the graph and returns its handle.
    pub(crate) fn coal(&mut self, power: u64) -> NodeHandle {
        self.add_node(EnergySource::Coal, 3, power)
    }

    /// Connects two nodes in the graph with a line of the given cost.
    pub(crate) fn connect(&mut self, from: NodeHandle, to: NodeHandle, weight: f64) -> &mut Self {
        self.edges.push(TestEdge::new(from.0, to.0, weight));
        self
    }

    /// Builds and returns the power graph from the nodes and edges added to
    /// the builder.
    pub(crate) fn build(&self) -> Result<PowerGraph<TestNode, TestEdge>, Error> {
        PowerGraph::try_new(self.nodes.clone(), self.edges.clone())
    }
}

/// Returns an eleven node network with named nodes `A` to `K`.
pub(crate) fn sample_network() -> (Vec<TestNode>, Vec<TestEdge>) {
    let nodes = vec![
        TestNode::new("A", EnergySource::Solar, 0, 40),
        TestNode::new("B", EnergySource::Wind, 1, 80),
        TestNode::new("C", EnergySource::Coal, 5, 150),
        TestNode::new("D", EnergySource::Solar, 0, 90),
        TestNode::new("E", EnergySource::Wind, 1, 120),
        TestNode::new("F", EnergySource::Coal, 5, 200),
        TestNode::new("G", EnergySource::Solar, 0, 80),
        TestNode::new("H", EnergySource::Wind, 1, 15),
        TestNode::new("I", EnergySource::Wind, 1, 30),
        TestNode::new("J", EnergySource::Wind, 1, 50),
        TestNode::new("K", EnergySource::Coal, 5, 20),
    ];
    let edges = vec![
        TestEdge::new(0, 1, 10.0),
        TestEdge::new(1, 2, 20.0),
        TestEdge::new(0, 3, 15.0),
        TestEdge::new(3, 2, 25.0),
        TestEdge::new(1, 5, 25.0),
        TestEdge::new(4, 7, 25.0),
        TestEdge::new(2, 10, 35.0),
        TestEdge::new(1, 4, 55.0),
        TestEdge::new(2, 8, 25.0),
        TestEdge::new(10, 9, 25.0),
        TestEdge::new(2, 5, 25.0),
    ];

    (nodes, edges)
}

/// Returns a random network of up to twelve nodes, the same for the same
/// `seed`.
///
/// Clean scores, outputs and weights are drawn from small ranges, so ties
/// are common.  Some nodes have a source outside the default priority
/// list, and edges can be parallel or self-loops.
pub(crate) fn random_network(seed: u64) -> (Vec<TestNode>, Vec<TestEdge>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let sources = [
        EnergySource::Solar,
        EnergySource::Wind,
        EnergySource::Hydro,
        EnergySource::Coal,
        EnergySource::Other("Geothermal".to_string()),
    ];

    let node_count = rng.gen_range(0..=12_usize);
    let nodes = (0..node_count)
        .map(|index| {
            let source = sources[rng.gen_range(0..sources.len())].clone();
            let clean_score = rng.gen_range(-1..4_i32);
            let power = rng.gen_range(0..8_u64) * 10;
            TestNode::new(&format!("R{index}"), source, clean_score, power)
        })
        .collect::<Vec<_>>();

    let edge_count = if node_count == 0 {
        0
    } else {
        rng.gen_range(0..=2 * node_count)
    };
    let edges = (0..edge_count)
        .map(|_| {
            let source = rng.gen_range(0..node_count);
            let destination = rng.gen_range(0..node_count);
            let weight = f64::from(rng.gen_range(0..6_u8)) * 2.5;
            TestEdge::new(source, destination, weight)
        })
        .collect::<Vec<_>>();

    (nodes, edges)
}
