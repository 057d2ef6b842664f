// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent a generation node and a transmission line.

use crate::energy_source::EnergySource;

/**
This trait needs to be implemented by the type that represents a generation
node.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation for a plant record:</summary>

```ignore
struct Plant {
    name: String,
    source: String,
    clean_score: i32,
    capacity_kw: u64,
}

impl clean_power_dispatch::Node for Plant {
    fn name(&self) -> &str {
        &self.name
    }

    fn energy_source(&self) -> clean_power_dispatch::EnergySource {
        self.source.as_str().into()
    }

    fn clean_score(&self) -> i32 {
        self.clean_score
    }

    fn power_output(&self) -> u64 {
        self.capacity_kw
    }
}
```

</details>
*/
pub trait Node {
    /// Returns the name of the node.  Names must be unique within a graph.
    fn name(&self) -> &str;
    /// Returns the energy source of the node.
    fn energy_source(&self) -> EnergySource;
    /// Returns the clean score of the node.  Lower is cleaner.
    fn clean_score(&self) -> i32;
    /// Returns the power the node can contribute.
    fn power_output(&self) -> u64;
}

/**
This trait needs to be implemented by the type that represents a
transmission line between two nodes.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation for a line record:</summary>

```ignore
struct Line {
    from: usize,
    to: usize,
    cost: f64,
}

impl clean_power_dispatch::Edge for Line {
    fn source(&self) -> usize {
        self.from
    }

    fn destination(&self) -> usize {
        self.to
    }

    fn weight(&self) -> f64 {
        self.cost
    }
}
```

</details>
*/
pub trait Edge {
    /// Returns the index of the first endpoint in the node sequence.
    fn source(&self) -> usize;
    /// Returns the index of the second endpoint in the node sequence.
    fn destination(&self) -> usize;
    /// Returns the base cost of the line, before any loss surcharge.
    fn weight(&self) -> f64;
}
