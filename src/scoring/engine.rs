use super::profile::UserProfile;
use super::weights::WeightVector;
use crate::pets::{AnimalRecord, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub label: &'static str, // e.g. "Size", "Energy"
    pub value: f64,          // Raw sub-score, nominally 0..=1
    pub weight: f64,
    pub contribution: f64, // value * weight
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: Vec<SubScore>,
}

/// Coarse age bucket used by the age sub-score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCategory {
    Young = 1,
    Adult = 2,
    Senior = 3,
}

impl AgeCategory {
    /// Under 2 years is young, under 8 adult, otherwise senior
    pub fn from_age_months(age_months: u32) -> Self {
        let age_years = age_months as f64 / 12.0;
        if age_years < 2.0 {
            AgeCategory::Young
        } else if age_years < 8.0 {
            AgeCategory::Adult
        } else {
            AgeCategory::Senior
        }
    }
}

/// Rescale a 1..=3 answer onto the trait axis: 1 -> 1.0, 2 -> 2/3, 3 -> 1/3
pub fn desire_axis(answer: u8) -> f64 {
    (4.0 - answer as f64) / 3.0
}

/// 1.0 when the preferred size matches, 0.5 less per step, 0 for unknown sizes
pub fn size_score(preference: u8, size: &Size) -> f64 {
    match size.ordinal() {
        Some(ordinal) => 1.0 - (preference as f64 - ordinal as f64).abs() / 2.0,
        None => 0.0,
    }
}

/// Closeness of a desire to a trait; not clamped
pub fn trait_score(desire: f64, trait_value: f64) -> f64 {
    1.0 - (desire - trait_value).abs()
}

pub fn age_score(time_available: u8, category: AgeCategory) -> f64 {
    1.0 - (time_available as f64 - category as u8 as f64).abs() / 2.0
}

/// Score one pet against a user profile.
///
/// The result is the weighted sum of five sub-scores. Neither the sub-scores
/// nor the total are clamped.
pub fn calculate_score(
    profile: &UserProfile,
    pet: &AnimalRecord,
    weights: &WeightVector,
) -> ScoreResult {
    let user_energy = desire_axis(profile.energy_level);
    let user_social = desire_axis(profile.social_preference);
    let user_noise = desire_axis(profile.noise_tolerance);

    let parts = [
        ("Size", size_score(profile.size_preference, &pet.size), weights.size),
        ("Energy", trait_score(user_energy, pet.energy()), weights.energy),
        ("Social", trait_score(user_social, pet.sociability()), weights.social),
        ("Noise", trait_score(user_noise, pet.noise()), weights.noise),
        (
            "Age",
            age_score(
                profile.time_available,
                AgeCategory::from_age_months(pet.age_months),
            ),
            weights.age,
        ),
    ];

    let breakdown: Vec<SubScore> = parts
        .into_iter()
        .map(|(label, value, weight)| SubScore {
            label,
            value,
            weight,
            contribution: value * weight,
        })
        .collect();

    let score: f64 = breakdown.iter().map(|part| part.contribution).sum();

    ScoreResult { score, breakdown }
}
