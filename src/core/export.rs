// PawFinder - core/export.rs
//
// CSV and JSON export of the currently visible pets.
// Core layer: writes to any Write trait object.

use crate::core::model::Pet;
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export format, chosen from the destination file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick a format from the extension of `path` (`.json` or CSV otherwise).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

fn check_limit(pets: &[&Pet]) -> Result<(), ExportError> {
    if pets.len() > constants::MAX_EXPORT_PETS {
        return Err(ExportError::TooManyPets {
            count: pets.len(),
            max: constants::MAX_EXPORT_PETS,
        });
    }
    Ok(())
}

/// Export pets to CSV format.
///
/// Writes: id, name, type, breed, breed_label, age, gender, location, temperament
pub fn export_csv<W: Write>(
    pets: &[&Pet],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(pets)?;

    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "type",
            "breed",
            "breed_label",
            "age",
            "gender",
            "location",
            "temperament",
        ])
        .map_err(csv_err)?;

    for pet in pets {
        csv_writer
            .write_record([
                pet.id.as_str(),
                pet.name.as_str(),
                pet.pet_type.as_str(),
                pet.breed.as_str(),
                pet.breed_label.as_str(),
                pet.age.as_str(),
                pet.gender.as_str(),
                pet.location.as_str(),
                pet.temperament.as_str(),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(pets.len())
}

/// Export pets to JSON format (array of objects, listing field names).
pub fn export_json<W: Write>(
    pets: &[&Pet],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(pets)?;
    serde_json::to_writer_pretty(writer, pets).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(pets.len())
}

/// Export in the given format.
pub fn export<W: Write>(
    format: ExportFormat,
    pets: &[&Pet],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(pets, writer, export_path),
        ExportFormat::Json => export_json(pets, writer, export_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_pet(id: &str, name: &str) -> Pet {
        Pet {
            id: id.to_string(),
            name: name.to_string(),
            pet_type: "dog".to_string(),
            breed: "lab".to_string(),
            breed_label: "Labrador, Retriever".to_string(),
            age: "young".to_string(),
            gender: "male".to_string(),
            location: "ny".to_string(),
            temperament: "calm".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_csv_export() {
        let pets = [make_pet("max", "Max"), make_pet("rex", "Rex")];
        let refs: Vec<&Pet> = pets.iter().collect();
        let mut buf = Vec::new();
        let count = export_csv(&refs, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,name,type,breed,breed_label"));
        assert!(output.contains("max,Max,dog"));
        // Embedded comma is quoted.
        assert!(output.contains("\"Labrador, Retriever\""));
    }

    #[test]
    fn test_json_export_uses_listing_field_names() {
        let pets = [make_pet("max", "Max")];
        let refs: Vec<&Pet> = pets.iter().collect();
        let mut buf = Vec::new();
        let count = export_json(&refs, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["type"], "dog");
        assert_eq!(value[0]["breedLabel"], "Labrador, Retriever");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("x.JSON")),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("x.csv")),
            ExportFormat::Csv
        );
        assert_eq!(ExportFormat::from_path(&PathBuf::from("x")), ExportFormat::Csv);
    }

    #[test]
    fn test_empty_export_writes_header_only() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
