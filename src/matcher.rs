use std::path::Path;

use crate::pets::{load_pets, AnimalRecord, LoadError};
use crate::scoring::{find_matches, MatchResult, UserProfile, WeightVector};

/// A loaded shelter plus the weights used to rank it.
///
/// The record set is read-only after construction, so one matcher can answer
/// any number of questionnaire runs.
#[derive(Debug, Clone)]
pub struct PetMatcher {
    pets: Vec<AnimalRecord>,
    weights: WeightVector,
}

impl PetMatcher {
    pub fn new(pets: Vec<AnimalRecord>, weights: WeightVector) -> Self {
        Self { pets, weights }
    }

    /// Load the shelter data file. Bad rows are skipped with a warning.
    pub fn from_path(path: &Path, weights: WeightVector) -> Result<Self, LoadError> {
        let report = load_pets(path)?;
        if !report.skipped.is_empty() {
            tracing::debug!("Skipped {} unusable rows", report.skipped.len());
        }
        Ok(Self::new(report.pets, weights))
    }

    pub fn pets(&self) -> &[AnimalRecord] {
        &self.pets
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Best `top_n` pets for this profile, highest score first
    pub fn find_matches(&self, profile: &UserProfile, top_n: usize) -> Vec<MatchResult<'_>> {
        let matches = find_matches(profile, &self.pets, &self.weights, top_n);
        tracing::debug!(
            "Scored {} pets, returning {} matches",
            self.pets.len(),
            matches.len()
        );
        matches
    }
}
