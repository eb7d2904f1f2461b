use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::AppError;

/// Placeholder rendered when the record carries no student name.
pub const UNKNOWN_NAME: &str = "이름 미상";

/// A structured school record (생기부) as exported to JSON.
///
/// Only the fields the interview reads are modelled; everything else is ignored.
/// Every field is optional and defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_info: StudentInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub awards: Vec<Award>,
    /// Free-text entries. Non-string entries are kept but never read.
    #[serde(default, deserialize_with = "null_as_default")]
    pub academic_records: Vec<Value>,
    /// Reading activity text — either a string or a list of strings.
    #[serde(default, alias = "reading_activities")]
    pub reading: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentInfo {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Award {
    #[serde(default, deserialize_with = "null_as_default")]
    pub award_name: String,
}

/// Exporters write `null` for empty sections; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StudentRecord {
    /// Reads and parses a record from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AppError::RecordNotFound {
                path: path.to_path_buf(),
            },
            _ => AppError::RecordRead {
                path: path.to_path_buf(),
                source,
            },
        })?;

        serde_json::from_str(&raw).map_err(|source| AppError::RecordParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        self.student_info
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }

    pub fn award_names(&self) -> Vec<&str> {
        self.awards.iter().map(|a| a.award_name.as_str()).collect()
    }

    /// The string entries of `academic_records`, in document order.
    pub fn academic_texts(&self) -> impl Iterator<Item = &str> {
        self.academic_records.iter().filter_map(Value::as_str)
    }

    /// The reading field flattened to text; empty when absent.
    pub fn reading_text(&self) -> String {
        match &self.reading {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => String::new(),
        }
    }
}
