use serde::{Deserialize, Serialize};

/// Relative weight of each sub-score in the overall compatibility score.
///
/// Weights must be non-negative and sum to 1.0; see
/// [`validate_weights`](super::validate_weights).
///
/// Example YAML:
/// ```yaml
/// weights:
///   size: 0.25
///   energy: 0.25
///   social: 0.20
///   noise: 0.15
///   age: 0.15
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeightVector {
    pub size: f64,
    pub energy: f64,
    pub social: f64,
    pub noise: f64,
    pub age: f64,
}

/// Allowed drift of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl WeightVector {
    pub fn sum(&self) -> f64 {
        self.size + self.energy + self.social + self.noise + self.age
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            size: 0.25,
            energy: 0.25,
            social: 0.20,
            noise: 0.15,
            age: 0.15,
        }
    }
}
