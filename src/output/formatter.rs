use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::pets::{AnimalRecord, PetSummary};
use crate::scoring::{MatchResult, ScoreResult};

pub const NO_MATCHES: &str =
    "Sorry, no matching pets were found. Please try adjusting your preferences.";

/// Width of the line printed between matches
const SEPARATOR_WIDTH: usize = 50;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Separator width, narrowed to the terminal when it is smaller
fn separator_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| (w as usize).min(SEPARATOR_WIDTH))
        .unwrap_or(SEPARATOR_WIDTH)
}

/// Score as a percentage with one decimal, e.g. 0.7317 -> "73.2%"
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// "2 years, 3 months"
pub fn format_pet_age(age_months: u32) -> String {
    format!("{} years, {} months", age_months / 12, age_months % 12)
}

pub fn format_fee(fee: u32) -> String {
    format!("${}", fee)
}

/// Multi-line description of one pet, without rank or score
pub fn format_pet_detail(pet: &AnimalRecord) -> String {
    format!(
        "Type: {}\nBreed: {}\nAge: {}\nSize: {}\nGender: {}\nColor: {}\nTime in Shelter: {} days\nAdoption Fee: {}",
        pet.species,
        pet.breed,
        format_pet_age(pet.age_months),
        pet.size,
        pet.gender.label(),
        pet.color,
        pet.days_in_shelter,
        format_fee(pet.adoption_fee)
    )
}

/// One line per sub-score: value, weight and weighted contribution
pub fn format_breakdown(result: &ScoreResult) -> String {
    result
        .breakdown
        .iter()
        .map(|part| {
            format!(
                "  {:<7} {:>6.3} x {:.2} = {:.3}",
                part.label, part.value, part.weight, part.contribution
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_match_header(rank: usize, score: f64, use_colors: bool) -> String {
    let header = format!(
        "Match #{} (Compatibility Score: {})",
        rank,
        format_percent(score)
    );
    if use_colors {
        header.bold().to_string()
    } else {
        header
    }
}

/// Render ranked matches for the terminal.
///
/// Rank is 1-based. With `verbose`, each match also lists its sub-scores.
pub fn format_match_results(matches: &[MatchResult], use_colors: bool, verbose: bool) -> String {
    if matches.is_empty() {
        return format!("\n{}", NO_MATCHES);
    }

    let separator = "-".repeat(separator_width());
    let title = "=== Your Top Pet Matches ===";

    let mut out = String::new();
    out.push('\n');
    if use_colors {
        out.push_str(&title.cyan().bold().to_string());
    } else {
        out.push_str(title);
    }
    out.push_str("\n\n");

    for (idx, m) in matches.iter().enumerate() {
        out.push_str(&format_match_header(idx + 1, m.score, use_colors));
        out.push('\n');
        out.push_str(&format_pet_detail(m.pet));
        out.push('\n');
        if verbose {
            out.push_str("Score breakdown:\n");
            out.push_str(&format_breakdown(&m.result));
            out.push('\n');
        }
        if use_colors {
            out.push_str(&separator.dimmed().to_string());
        } else {
            out.push_str(&separator);
        }
        out.push('\n');
    }

    out
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    rank: usize,
    score: f64,
    pet: PetSummary<'a>,
}

/// Render ranked matches as a JSON array for scripting
pub fn format_json(matches: &[MatchResult]) -> serde_json::Result<String> {
    let entries: Vec<JsonMatch> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| JsonMatch {
            rank: idx + 1,
            score: m.score,
            pet: m.pet.summary(),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
