use std::num::{IntErrorKind, ParseIntError};

use crate::scoring::profile::{check_age, check_choice};
use crate::scoring::{InvalidInput, MINIMUM_ADOPTER_AGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKey {
    Age,
    LivingSituation,
    EnergyLevel,
    SocialPreference,
    NoiseTolerance,
    SizePreference,
    TimeAvailable,
}

pub struct Question {
    pub key: QuestionKey,
    pub text: &'static str,
}

/// Asked in this order
pub const QUESTIONS: [Question; 7] = [
    Question {
        key: QuestionKey::Age,
        text: "What is your age? ",
    },
    Question {
        key: QuestionKey::LivingSituation,
        text: "\nWhat is your living situation?\n1. Apartment\n2. House\n3. Rural property\nEnter number (1-3): ",
    },
    Question {
        key: QuestionKey::EnergyLevel,
        text: "\nHow would you describe your energy level?\n1. Very active\n2. Moderately active\n3. Relatively calm\nEnter number (1-3): ",
    },
    Question {
        key: QuestionKey::SocialPreference,
        text: "\nWhat's your social preference?\n1. Very social/extroverted\n2. Balanced\n3. Quiet/introverted\nEnter number (1-3): ",
    },
    Question {
        key: QuestionKey::NoiseTolerance,
        text: "\nWhat's your tolerance for pet noise?\n1. High - Don't mind frequent noise\n2. Medium - Occasional noise is fine\n3. Low - Prefer quiet pets\nEnter number (1-3): ",
    },
    Question {
        key: QuestionKey::SizePreference,
        text: "\nWhat size pet do you prefer?\n1. Large\n2. Medium\n3. Small\nEnter number (1-3): ",
    },
    Question {
        key: QuestionKey::TimeAvailable,
        text: "\nHow many hours per day can you spend with your pet?\n1. More than 4 hours\n2. 2-4 hours\n3. Less than 2 hours\nEnter number (1-3): ",
    },
];

/// A validated answer, typed by the kind of question it answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Age(u32),
    /// One of the numbered options, 1..=3
    Choice(u8),
}

/// Parse and validate one raw answer for the given question.
///
/// Integers too large for the target type saturate instead of being
/// rejected, so a huge age still reads as an adult.
pub fn parse_answer(key: QuestionKey, input: &str) -> Result<Answer, InvalidInput> {
    let value: i64 = input.trim().parse::<i64>().or_else(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(InvalidInput::NotANumber),
    })?;

    match key {
        QuestionKey::Age => {
            if value < i64::from(MINIMUM_ADOPTER_AGE) {
                return Err(InvalidInput::Underage);
            }
            let age = u32::try_from(value).unwrap_or(u32::MAX);
            check_age(age).map(Answer::Age)
        }
        _ => {
            let answer = u8::try_from(value).map_err(|_| InvalidInput::OutOfRange)?;
            check_choice(answer).map(Answer::Choice)
        }
    }
}
