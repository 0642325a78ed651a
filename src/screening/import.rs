//! CSV intake for screening many households in one pass.

use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::answers::HouseholdAnswers;

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read household export: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid household CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Household answers tagged with the CSV line they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedHousehold {
    pub line: u64,
    pub label: Option<String>,
    pub answers: HouseholdAnswers,
}

pub struct HouseholdCsvImporter;

impl HouseholdCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedHousehold>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedHousehold>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut households = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: HouseholdRow = record.deserialize(Some(&headers))?;
            households.push(row.into_imported(line));
        }

        Ok(households)
    }
}

#[derive(Debug, Deserialize)]
struct HouseholdRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    label: Option<String>,
    state: String,
    household_size: u32,
    annual_income: f64,
    age: u32,
    #[serde(deserialize_with = "flexible_bool")]
    is_pregnant: bool,
    #[serde(deserialize_with = "flexible_bool")]
    has_children_under_5: bool,
    #[serde(deserialize_with = "flexible_bool")]
    has_children_under_18: bool,
    #[serde(deserialize_with = "flexible_bool")]
    has_disability: bool,
    #[serde(deserialize_with = "flexible_bool")]
    is_employed: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    is_student: bool,
}

impl HouseholdRow {
    fn into_imported(self, line: u64) -> ImportedHousehold {
        ImportedHousehold {
            line,
            label: self.label,
            answers: HouseholdAnswers {
                state: self.state.to_ascii_uppercase(),
                household_size: self.household_size,
                annual_income: self.annual_income,
                age: self.age,
                is_pregnant: self.is_pregnant,
                has_children_under_5: self.has_children_under_5,
                has_children_under_18: self.has_children_under_18,
                has_disability: self.has_disability,
                is_employed: self.is_employed,
                is_student: self.is_student,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("expected yes/no, true/false or 1/0, found '{raw}'"))
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}
