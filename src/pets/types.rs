use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::error::RecordError;
use super::species::Species;

/// A named data row: column header -> raw field value
pub type PetRow<'a> = HashMap<&'a str, &'a str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Pet size. Unrecognised sizes are kept verbatim and score zero on size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
    Other(String),
}

impl Size {
    pub fn parse(s: &str) -> Size {
        match s {
            "Small" => Size::Small,
            "Medium" => Size::Medium,
            "Large" => Size::Large,
            other => Size::Other(other.to_string()),
        }
    }

    /// Ordinal on the questionnaire's size scale (1 = Large, 3 = Small)
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Size::Small => Some(3),
            Size::Medium => Some(2),
            Size::Large => Some(1),
            Size::Other(_) => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => write!(f, "Small"),
            Size::Medium => write!(f, "Medium"),
            Size::Large => write!(f, "Large"),
            Size::Other(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for Size {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One shelter animal. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalRecord {
    pub id: String,
    pub species: Species,
    pub breed: String,
    pub gender: Gender,
    pub age_months: u32,
    pub color: String,
    pub size: Size,
    pub days_in_shelter: u32,
    pub adoption_fee: u32,
}

impl AnimalRecord {
    /// Build a record from a named row. Extra columns are ignored.
    pub fn from_row(row: &PetRow<'_>) -> Result<Self, RecordError> {
        let species_name = field(row, "PetType")?;
        let species = Species::from_name(species_name)
            .ok_or_else(|| RecordError::UnknownSpecies(species_name.to_string()))?;

        let gender_raw = field(row, "Gender")?;
        let gender = Gender::parse(gender_raw).ok_or_else(|| RecordError::MalformedField {
            field: "Gender",
            value: gender_raw.to_string(),
        })?;

        Ok(AnimalRecord {
            id: field(row, "PetID")?.to_string(),
            species,
            breed: field(row, "Breed")?.to_string(),
            gender,
            age_months: count(row, "AgeMonths")?,
            color: field(row, "Color")?.to_string(),
            size: Size::parse(field(row, "Size")?),
            days_in_shelter: count(row, "TimeInShelterDays")?,
            adoption_fee: count(row, "AdoptionFee")?,
        })
    }

    pub fn energy(&self) -> f64 {
        self.species.energy(self.age_months)
    }

    pub fn sociability(&self) -> f64 {
        self.species.sociability()
    }

    pub fn noise(&self) -> f64 {
        self.species.noise()
    }

    /// Whole years and remaining months, e.g. (2, 3) for 27 months
    pub fn age_parts(&self) -> (u32, u32) {
        (self.age_months / 12, self.age_months % 12)
    }

    /// Fresh serializable view of the record with its derived traits
    pub fn summary(&self) -> PetSummary<'_> {
        PetSummary {
            id: &self.id,
            species: self.species,
            breed: &self.breed,
            gender: self.gender,
            age_months: self.age_months,
            color: &self.color,
            size: &self.size,
            days_in_shelter: self.days_in_shelter,
            adoption_fee: self.adoption_fee,
            energy: self.energy(),
            sociability: self.sociability(),
            noise: self.noise(),
        }
    }
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gender = match self.gender {
            Gender::Male => "M",
            Gender::Female => "F",
        };
        write!(
            f,
            "{} - {} ({}, {} months)",
            self.species, self.breed, gender, self.age_months
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetSummary<'a> {
    pub id: &'a str,
    pub species: Species,
    pub breed: &'a str,
    pub gender: Gender,
    pub age_months: u32,
    pub color: &'a str,
    pub size: &'a Size,
    pub days_in_shelter: u32,
    pub adoption_fee: u32,
    pub energy: f64,
    pub sociability: f64,
    pub noise: f64,
}

fn field<'a>(row: &PetRow<'a>, name: &'static str) -> Result<&'a str, RecordError> {
    row.get(name)
        .copied()
        .map(str::trim)
        .ok_or(RecordError::MissingField(name))
}

fn count(row: &PetRow<'_>, name: &'static str) -> Result<u32, RecordError> {
    let raw = field(row, name)?;
    raw.parse().map_err(|_| RecordError::MalformedField {
        field: name,
        value: raw.to_string(),
    })
}
