use serde::Serialize;
use thiserror::Error;

/// Youngest adopter the shelter accepts
pub const MINIMUM_ADOPTER_AGE: u32 = 18;

/// Why a questionnaire answer was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Please enter a valid number.")]
    NotANumber,

    #[error("Sorry, you must be 18 or older to adopt a pet.")]
    Underage,

    #[error("Please enter a number between 1 and 3.")]
    OutOfRange,
}

/// A validated set of questionnaire answers.
///
/// Every preference is on a 1..=3 scale where 1 is the strongest ("very
/// active", "large", "more than 4 hours") and 3 the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    /// Eligibility gate only, not scored
    pub age: u32,
    /// Collected for the record, not scored
    pub living_situation: u8,
    pub energy_level: u8,
    pub social_preference: u8,
    pub noise_tolerance: u8,
    /// 1 = Large, 2 = Medium, 3 = Small
    pub size_preference: u8,
    /// 1 = more than 4h/day, 2 = 2-4h, 3 = under 2h
    pub time_available: u8,
}

impl UserProfile {
    /// Check every field against the questionnaire rules
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_age(self.age)?;
        for answer in [
            self.living_situation,
            self.energy_level,
            self.social_preference,
            self.noise_tolerance,
            self.size_preference,
            self.time_available,
        ] {
            check_choice(answer)?;
        }
        Ok(())
    }
}

pub fn check_age(age: u32) -> Result<u32, InvalidInput> {
    if age < MINIMUM_ADOPTER_AGE {
        return Err(InvalidInput::Underage);
    }
    Ok(age)
}

pub fn check_choice(answer: u8) -> Result<u8, InvalidInput> {
    if !(1..=3).contains(&answer) {
        return Err(InvalidInput::OutOfRange);
    }
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced() -> UserProfile {
        UserProfile {
            age: 30,
            living_situation: 2,
            energy_level: 2,
            social_preference: 2,
            noise_tolerance: 2,
            size_preference: 2,
            time_available: 2,
        }
    }

    #[test]
    fn test_valid_profile() {
        assert_eq!(balanced().validate(), Ok(()));
    }

    #[test]
    fn test_underage_rejected() {
        let profile = UserProfile { age: 17, ..balanced() };
        assert_eq!(profile.validate(), Err(InvalidInput::Underage));
    }

    #[test]
    fn test_exactly_eighteen_allowed() {
        let profile = UserProfile { age: 18, ..balanced() };
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_choice_out_of_range() {
        let profile = UserProfile { noise_tolerance: 4, ..balanced() };
        assert_eq!(profile.validate(), Err(InvalidInput::OutOfRange));
        let profile = UserProfile { time_available: 0, ..balanced() };
        assert_eq!(profile.validate(), Err(InvalidInput::OutOfRange));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InvalidInput::NotANumber.to_string(), "Please enter a valid number.");
        assert_eq!(
            InvalidInput::OutOfRange.to_string(),
            "Please enter a number between 1 and 3."
        );
    }
}
