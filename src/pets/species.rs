use serde::Serialize;
use std::fmt;

/// How youth raises a species' energy above its base level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnergyCurve {
    /// `min(1.0, base * (1 + boost * age_factor))`
    CappedBoost(f64),
    /// `base * (1 + age_factor)`, no cap
    Doubling,
}

/// Fixed behaviour constants for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTraits {
    pub base_energy: f64,
    /// Age in months at which the youth bonus reaches zero
    pub horizon_months: f64,
    pub curve: EnergyCurve,
    pub sociability: f64,
    pub noise: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
    Bird,
}

struct SpeciesEntry {
    name: &'static str,
    species: Species,
    traits: SpeciesTraits,
}

/// Dispatch table, one row per `Species` variant in declaration order.
/// A new species is one variant above plus one row here.
static SPECIES_TABLE: &[SpeciesEntry] = &[
    SpeciesEntry {
        name: "Dog",
        species: Species::Dog,
        traits: SpeciesTraits {
            base_energy: 0.8,
            horizon_months: 12.0 * 15.0,
            curve: EnergyCurve::CappedBoost(0.25),
            sociability: 0.9,
            noise: 0.8,
        },
    },
    SpeciesEntry {
        name: "Cat",
        species: Species::Cat,
        traits: SpeciesTraits {
            base_energy: 0.6,
            horizon_months: 12.0 * 15.0,
            curve: EnergyCurve::CappedBoost(0.25),
            sociability: 0.5,
            noise: 0.4,
        },
    },
    SpeciesEntry {
        name: "Rabbit",
        species: Species::Rabbit,
        traits: SpeciesTraits {
            base_energy: 0.4,
            horizon_months: 12.0 * 10.0,
            curve: EnergyCurve::Doubling,
            sociability: 0.3,
            noise: 0.1,
        },
    },
    SpeciesEntry {
        name: "Bird",
        species: Species::Bird,
        traits: SpeciesTraits {
            base_energy: 0.5,
            horizon_months: 12.0 * 8.0,
            curve: EnergyCurve::Doubling,
            sociability: 0.6,
            noise: 0.9,
        },
    },
];

impl Species {
    /// Look up a species by its exact data-file name ("Dog", "Cat", ...)
    pub fn from_name(name: &str) -> Option<Species> {
        SPECIES_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.species)
    }

    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    pub fn traits(&self) -> &'static SpeciesTraits {
        &self.entry().traits
    }

    /// Energy for an animal of this species at the given age.
    pub fn energy(&self, age_months: u32) -> f64 {
        let traits = self.traits();
        let age_factor = (1.0 - age_months as f64 / traits.horizon_months).max(0.0);
        match traits.curve {
            EnergyCurve::CappedBoost(boost) => {
                (traits.base_energy * (1.0 + boost * age_factor)).min(1.0)
            }
            EnergyCurve::Doubling => traits.base_energy * (1.0 + age_factor),
        }
    }

    pub fn sociability(&self) -> f64 {
        self.traits().sociability
    }

    pub fn noise(&self) -> f64 {
        self.traits().noise
    }

    /// All species known to the dispatch table, in table order
    pub fn all() -> impl Iterator<Item = Species> {
        SPECIES_TABLE.iter().map(|entry| entry.species)
    }

    fn entry(&self) -> &'static SpeciesEntry {
        // Rows are in variant order
        &SPECIES_TABLE[*self as usize]
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
