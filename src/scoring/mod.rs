pub mod engine;
pub mod profile;
pub mod ranking;
pub mod validation;
pub mod weights;

pub use engine::{calculate_score, AgeCategory, ScoreResult, SubScore};
pub use profile::{InvalidInput, UserProfile, MINIMUM_ADOPTER_AGE};
pub use ranking::{find_matches, MatchResult, DEFAULT_TOP_N};
pub use validation::validate_weights;
pub use weights::WeightVector;
