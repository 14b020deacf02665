use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use super::questions::{parse_answer, Answer, Question, QuestionKey, QUESTIONS};
use crate::scoring::UserProfile;

const WELCOME: &str = "\n=== Welcome to Adoptify: Your Perfect Pet Matchmaker! === \n";

/// Print a message and read one line. Returns None at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask one question until a valid answer is given
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &Question) -> Result<Answer> {
    loop {
        let Some(line) = prompt(input, output, question.text)? else {
            bail!("Input closed before the questionnaire was finished");
        };

        match parse_answer(question.key, &line) {
            Ok(answer) => return Ok(answer),
            Err(e) => {
                writeln!(output, "{}", e).context("Failed to write prompt")?;
            }
        }
    }
}

/// Run the full questionnaire over the given input and output.
///
/// Invalid answers are re-asked with no attempt limit; only I/O failure or
/// end of input ends the loop early.
pub fn run_questionnaire<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<UserProfile> {
    writeln!(output, "{}", WELCOME).context("Failed to write prompt")?;

    let mut profile = UserProfile {
        age: 0,
        living_situation: 0,
        energy_level: 0,
        social_preference: 0,
        noise_tolerance: 0,
        size_preference: 0,
        time_available: 0,
    };

    for question in &QUESTIONS {
        match (question.key, ask(input, output, question)?) {
            (QuestionKey::Age, Answer::Age(age)) => profile.age = age,
            (QuestionKey::LivingSituation, Answer::Choice(c)) => profile.living_situation = c,
            (QuestionKey::EnergyLevel, Answer::Choice(c)) => profile.energy_level = c,
            (QuestionKey::SocialPreference, Answer::Choice(c)) => profile.social_preference = c,
            (QuestionKey::NoiseTolerance, Answer::Choice(c)) => profile.noise_tolerance = c,
            (QuestionKey::SizePreference, Answer::Choice(c)) => profile.size_preference = c,
            (QuestionKey::TimeAvailable, Answer::Choice(c)) => profile.time_available = c,
            (key, answer) => bail!("Answer {:?} does not fit question {:?}", answer, key),
        }
    }

    tracing::debug!("Questionnaire complete: {:?}", profile);
    Ok(profile)
}

/// Run the questionnaire on the terminal
pub fn run_questionnaire_stdio() -> Result<UserProfile> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_questionnaire(&mut input, &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answers: &str) -> (Result<UserProfile>, String) {
        let mut input = Cursor::new(answers.to_string());
        let mut output = Vec::new();
        let result = run_questionnaire(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_all_valid_answers() {
        let (result, output) = run("30\n2\n1\n2\n3\n3\n2\n");
        let profile = result.unwrap();
        assert_eq!(
            profile,
            UserProfile {
                age: 30,
                living_situation: 2,
                energy_level: 1,
                social_preference: 2,
                noise_tolerance: 3,
                size_preference: 3,
                time_available: 2,
            }
        );
        assert!(profile.validate().is_ok());
        assert!(output.contains("Welcome to Adoptify"));
        assert!(output.contains("What is your age?"));
        assert!(output.contains("How many hours per day"));
    }

    #[test]
    fn test_underage_is_reprompted() {
        let (result, output) = run("16\n21\n1\n1\n1\n1\n1\n1\n");
        assert_eq!(result.unwrap().age, 21);
        assert!(output.contains("Sorry, you must be 18 or older to adopt a pet."));
        assert_eq!(output.matches("What is your age?").count(), 2);
    }

    #[test]
    fn test_out_of_range_is_reprompted() {
        let (result, output) = run("30\n5\n0\n2\n1\n1\n1\n1\n1\n");
        assert_eq!(result.unwrap().living_situation, 2);
        assert_eq!(output.matches("Please enter a number between 1 and 3.").count(), 2);
    }

    #[test]
    fn test_non_numeric_is_reprompted() {
        let (result, output) = run("thirty\n30\n1\nmedium\n2\n1\n1\n1\n1\n");
        let profile = result.unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.energy_level, 2);
        assert_eq!(output.matches("Please enter a valid number.").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_error() {
        let (result, _) = run("30\n1\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Input closed"));
    }

    #[test]
    fn test_huge_age_accepted_as_adult() {
        let (result, output) = run("5000000000\n1\n1\n1\n1\n1\n1\n");
        assert_eq!(result.unwrap().age, u32::MAX);
        assert!(!output.contains("18 or older"));
    }

    #[test]
    fn test_crlf_answers_accepted() {
        let (result, _) = run("30\r\n1\r\n2\r\n3\r\n1\r\n2\r\n3\r\n");
        assert_eq!(result.unwrap().time_available, 3);
    }
}
