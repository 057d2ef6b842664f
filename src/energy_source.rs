// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `EnergySource` enum, which represents the
//! category of a generation node.

use std::fmt::Display;

/// Represents the energy source of a generation node.
///
/// The set of sources is open: labels other than the well-known ones are
/// kept verbatim in [`EnergySource::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnergySource {
    Solar,
    Wind,
    Hydro,
    Coal,
    Other(String),
}

impl EnergySource {
    /// Returns the default priority order used for selection, cleanest
    /// first.
    pub fn default_priority() -> Vec<EnergySource> {
        vec![
            EnergySource::Solar,
            EnergySource::Wind,
            EnergySource::Hydro,
            EnergySource::Coal,
        ]
    }
}

impl From<&str> for EnergySource {
    fn from(label: &str) -> Self {
        let known = [
            EnergySource::Solar,
            EnergySource::Wind,
            EnergySource::Hydro,
            EnergySource::Coal,
        ];
        known
            .into_iter()
            .find(|source| source.to_string().eq_ignore_ascii_case(label))
            .unwrap_or_else(|| EnergySource::Other(label.to_string()))
    }
}

impl Display for EnergySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnergySource::Solar => write!(f, "Solar"),
            EnergySource::Wind => write!(f, "Wind"),
            EnergySource::Hydro => write!(f, "Hydro"),
            EnergySource::Coal => write!(f, "Coal"),
            EnergySource::Other(label) => write!(f, "{}", label),
        }
    }
}
