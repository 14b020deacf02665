use std::cmp::Ordering;

use super::engine::{calculate_score, ScoreResult};
use super::profile::UserProfile;
use super::weights::WeightVector;
use crate::pets::AnimalRecord;

/// Number of matches shown when nothing else is configured
pub const DEFAULT_TOP_N: usize = 3;

/// A pet paired with its compatibility score
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub pet: &'a AnimalRecord,
    pub score: f64,
    pub result: ScoreResult,
}

/// Score every pet and return the best `top_n`, highest score first.
///
/// Pets with equal scores keep their input order.
pub fn find_matches<'a>(
    profile: &UserProfile,
    pets: &'a [AnimalRecord],
    weights: &WeightVector,
    top_n: usize,
) -> Vec<MatchResult<'a>> {
    let mut matches: Vec<MatchResult<'a>> = pets
        .iter()
        .map(|pet| {
            let result = calculate_score(profile, pet, weights);
            MatchResult {
                pet,
                score: result.score,
                result,
            }
        })
        .collect();

    // Stable sort: ties keep input order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches.truncate(top_n);

    matches
}
