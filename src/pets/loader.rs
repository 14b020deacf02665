use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::error::{LoadError, RecordError};
use super::types::AnimalRecord;

/// Field separator used by the shelter data file
pub const DELIMITER: u8 = b';';

/// A data row that was skipped during load
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub error: RecordError,
}

/// Outcome of loading a data file: the usable records plus what was dropped
#[derive(Debug, Default)]
pub struct LoadReport {
    pub pets: Vec<AnimalRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Load pet records from a `;`-delimited file with a header row.
///
/// Rows that fail to parse are skipped with a warning; only problems with the
/// file itself are returned as errors.
pub fn load_pets(path: &Path) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::DataSourceMissing(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    read_pets(file, path)
}

/// Same as [`load_pets`] but over any reader. `source` is only used in error
/// messages.
///
/// Fields may be quoted; a quoted field can contain the delimiter. Short rows
/// are kept and surface as a missing field on the record.
pub fn read_pets<R: Read>(reader: R, source: &Path) -> Result<LoadReport, LoadError> {
    let csv_error = |e: csv::Error| LoadError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').to_string())
        .collect();
    if columns.iter().all(|name| name.is_empty()) {
        return Err(LoadError::EmptySource(source.to_path_buf()));
    }

    let mut report = LoadReport::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(csv_error(e)),
            Err(e) => {
                let line = e.position().map_or(0, |pos| pos.line() as usize);
                tracing::warn!("line {}: {}", line, e);
                report.skipped.push(SkippedRow {
                    line,
                    error: RecordError::Unreadable(e.to_string()),
                });
                continue;
            }
        };
        let line_no = record.position().map_or(0, |pos| pos.line() as usize);

        let row: HashMap<&str, &str> = columns
            .iter()
            .map(String::as_str)
            .zip(record.iter())
            .collect();

        match AnimalRecord::from_row(&row) {
            Ok(pet) => report.pets.push(pet),
            Err(error) => {
                tracing::warn!("line {}: {}", line_no, error);
                report.skipped.push(SkippedRow {
                    line: line_no,
                    error,
                });
            }
        }
    }

    tracing::debug!(
        "Loaded {} pets from {} ({} skipped)",
        report.pets.len(),
        source.display(),
        report.skipped.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pets::Species;
    use std::env;
    use std::io::Cursor;

    const HEADER: &str =
        "PetID;PetType;Breed;Gender;AgeMonths;Color;Size;TimeInShelterDays;AdoptionFee;AdoptionLikelihood";

    fn read(body: &str) -> Result<LoadReport, LoadError> {
        read_pets(Cursor::new(body.to_string()), Path::new("test.csv"))
    }

    #[test]
    fn test_reads_all_valid_rows() {
        let data = format!(
            "{}\n500;Dog;Labrador;M;24;Black;Large;30;200;0.8\n501;Cat;Siamese;F;6;White;Small;12;80;0.4\n",
            HEADER
        );
        let report = read(&data).unwrap();
        assert_eq!(report.pets.len(), 2);
        assert!(report.skipped.is_empty());
        assert_eq!(report.pets[0].id, "500");
        assert_eq!(report.pets[1].species, Species::Cat);
    }

    #[test]
    fn test_unknown_species_row_is_skipped() {
        let data = format!("{}\n502;Hamster;Dwarf;F;6;Grey;Small;5;20;0.3\n", HEADER);
        let report = read(&data).unwrap();
        assert!(report.pets.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
        assert_eq!(
            report.skipped[0].error,
            RecordError::UnknownSpecies("Hamster".to_string())
        );
    }

    #[test]
    fn test_one_bad_row_among_good_rows() {
        let data = format!(
            "{}\n\
             1;Dog;Poodle;M;12;White;Medium;10;150;0.5\n\
             2;Dragon;Welsh;F;400;Red;Large;1;9999;0.1\n\
             3;Rabbit;Rex;F;8;Brown;Small;40;50;0.6\n\
             4;Bird;Parakeet;M;3;Green;Small;2;30;0.7\n",
            HEADER
        );
        let report = read(&data).unwrap();
        assert_eq!(report.pets.len(), 3);
        assert_eq!(report.skipped.len(), 1);
        let ids: Vec<&str> = report.pets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_malformed_integer_row_is_skipped() {
        let data = format!(
            "{}\n1;Dog;Poodle;M;twelve;White;Medium;10;150;0.5\n2;Cat;Tabby;F;30;Orange;Medium;3;90;0.5\n",
            HEADER
        );
        let report = read(&data).unwrap();
        assert_eq!(report.pets.len(), 1);
        assert!(matches!(
            report.skipped[0].error,
            RecordError::MalformedField { field: "AgeMonths", .. }
        ));
    }

    #[test]
    fn test_short_row_reports_missing_field() {
        let data = format!("{}\n1;Dog;Poodle;M;12\n", HEADER);
        let report = read(&data).unwrap();
        assert!(report.pets.is_empty());
        assert_eq!(report.skipped[0].error, RecordError::MissingField("Color"));
    }

    #[test]
    fn test_blank_lines_and_crlf_ignored() {
        let data = format!(
            "\r\n{}\r\n\r\n1;Dog;Poodle;M;12;White;Medium;10;150;0.5\r\n\r\n",
            HEADER
        );
        let report = read(&data).unwrap();
        assert_eq!(report.pets.len(), 1);
        assert_eq!(report.pets[0].adoption_fee, 150);
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let data = format!("\u{feff}{}\n1;Dog;Poodle;M;12;White;Medium;10;150;0.5\n", HEADER);
        let report = read(&data).unwrap();
        assert_eq!(report.pets.len(), 1);
        assert_eq!(report.pets[0].id, "1");
    }

    #[test]
    fn test_column_order_follows_header() {
        let data = "AdoptionFee;PetType;PetID;Breed;Gender;AgeMonths;Color;Size;TimeInShelterDays\n\
                    75;Cat;9;Tabby;F;30;Orange;Medium;3\n";
        let report = read(data).unwrap();
        assert_eq!(report.pets.len(), 1);
        assert_eq!(report.pets[0].id, "9");
        assert_eq!(report.pets[0].adoption_fee, 75);
    }

    #[test]
    fn test_quoted_fields_are_unquoted() {
        let data = format!(
            "{}\n\
             1;Dog;\"Golden Retriever\";M;\"24\";Gold;Large;10;150;0.5\n\
             2;Dog;\"Mix; Lab\";F;36;Black;Medium;20;120;0.6\n",
            HEADER
        );
        let report = read(&data).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(report.pets.len(), 2);
        assert_eq!(report.pets[0].breed, "Golden Retriever");
        assert_eq!(report.pets[0].age_months, 24);
        assert_eq!(report.pets[1].breed, "Mix; Lab");
        assert_eq!(report.pets[1].age_months, 36);
        assert_eq!(report.pets[1].color, "Black");
    }

    #[test]
    fn test_skipped_row_reports_source_line() {
        let data = format!(
            "{}\n1;Dog;Poodle;M;12;White;Medium;10;150;0.5\n2;Hamster;Dwarf;F;6;Grey;Small;5;20;0.3\n",
            HEADER
        );
        let report = read(&data).unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
    }

    #[test]
    fn test_header_only_yields_no_pets() {
        let report = read(HEADER).unwrap();
        assert!(report.pets.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_empty_source_is_error() {
        assert!(matches!(read(""), Err(LoadError::EmptySource(_))));
        assert!(matches!(read("\n\n"), Err(LoadError::EmptySource(_))));
    }

    #[test]
    fn test_missing_file_is_data_source_missing() {
        let path = env::temp_dir().join("adoptify_test_missing.csv");
        let _ = std::fs::remove_file(&path);

        let result = load_pets(&path);
        assert!(matches!(result, Err(LoadError::DataSourceMissing(ref p)) if *p == path));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Could not find the pet database file"));
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join("adoptify_test_load.csv");
        let data = format!("{}\n1;Dog;Poodle;M;12;White;Medium;10;150;0.5\n", HEADER);
        std::fs::write(&path, data).unwrap();

        let report = load_pets(&path).unwrap();
        assert_eq!(report.pets.len(), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_bundled_data_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/pet_adoption_data.csv");
        let report = load_pets(&path).unwrap();
        assert!(!report.pets.is_empty());
        assert!(report.skipped.is_empty());
    }
}
