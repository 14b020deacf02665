pub mod config;
pub mod matcher;
pub mod output;
pub mod pets;
pub mod questionnaire;
pub mod scoring;

pub use matcher::PetMatcher;
