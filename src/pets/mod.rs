pub mod error;
pub mod loader;
pub mod species;
pub mod types;

pub use error::{LoadError, RecordError};
pub use loader::{load_pets, read_pets, LoadReport, SkippedRow};
pub use species::{EnergyCurve, Species, SpeciesTraits};
pub use types::{AnimalRecord, Gender, PetRow, PetSummary, Size};
