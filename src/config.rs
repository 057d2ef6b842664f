// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for dispatching on a
//! `PowerGraph`.

use std::collections::HashSet;

use crate::{EnergySource, Error};

/// The loss factor applied to line costs unless configured otherwise.
pub const DEFAULT_LOSS_FACTOR: f64 = 0.02;

/// The rule used to pick nodes until the demand is met.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SelectionStrategy {
    /// Exhaust the sources in priority order, cleanest and then largest
    /// node first within each source.
    #[default]
    CleanestFirst,
    /// Take the nodes with the largest power output first, ignoring the
    /// order of the priority list.  Only sources on the list are drawn
    /// from.
    LargestFirst,
    /// Take nodes in ascending order of a weighted sum of their normalized
    /// clean score and normalized incident line cost.
    Weighted { alpha: f64, beta: f64 },
}

/// Configuration options for dispatching on a `PowerGraph`.
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// The energy sources to draw from, in the order they are consulted.
    /// Nodes of sources not in this list are never selected.
    pub priority: Vec<EnergySource>,

    /// The fractional surcharge added to every line cost to account for
    /// transmission losses.
    pub loss_factor: f64,

    /// The rule used to pick nodes.
    pub strategy: SelectionStrategy,

    /// Whether to allow nodes whose source is missing from `priority`.  When
    /// this is `false`, dispatching on such a graph fails instead of leaving
    /// those nodes out with a warning.
    pub allow_unprioritized_sources: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            priority: EnergySource::default_priority(),
            loss_factor: DEFAULT_LOSS_FACTOR,
            strategy: SelectionStrategy::default(),
            allow_unprioritized_sources: true,
        }
    }
}

impl DispatchConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.priority.is_empty() {
            return Err(Error::invalid_config("Priority list is empty."));
        }
        let mut seen = HashSet::new();
        for source in &self.priority {
            if !seen.insert(source) {
                return Err(Error::invalid_config(format!(
                    "Energy source {source} appears more than once in the priority list."
                )));
            }
        }
        validate_loss_factor(self.loss_factor)?;
        if let SelectionStrategy::Weighted { alpha, beta } = self.strategy {
            if !alpha.is_finite() || !beta.is_finite() {
                return Err(Error::invalid_config(format!(
                    "Weighted strategy needs finite weights, got alpha={alpha}, beta={beta}."
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_loss_factor(loss_factor: f64) -> Result<(), Error> {
    if !loss_factor.is_finite() || loss_factor < 0.0 {
        return Err(Error::invalid_config(format!(
            "Loss factor must be finite and non-negative, got {loss_factor}."
        )));
    }
    Ok(())
}
