use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::enrollment::{normalize_document_key, DocumentRecord};

#[derive(Debug)]
pub(crate) struct RosterRow {
    pub(crate) enrollment_id: String,
    pub(crate) student: String,
    pub(crate) modality: Option<String>,
    pub(crate) plan: Option<String>,
    pub(crate) records: Vec<DocumentRecord>,
    pub(crate) unrecognized: Vec<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RosterRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<RawRosterRow>() {
        let raw = record?;
        let (records, unrecognized) = parse_documents(raw.documents.as_deref().unwrap_or(""));

        rows.push(RosterRow {
            enrollment_id: raw.enrollment_id,
            student: raw.student.unwrap_or_default(),
            modality: raw.modality,
            plan: raw.plan,
            records,
            unrecognized,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRosterRow {
    #[serde(rename = "Enrollment ID")]
    enrollment_id: String,
    #[serde(rename = "Student", default, deserialize_with = "empty_string_as_none")]
    student: Option<String>,
    #[serde(rename = "Modality", default, deserialize_with = "empty_string_as_none")]
    modality: Option<String>,
    #[serde(rename = "Plan", default, deserialize_with = "empty_string_as_none")]
    plan: Option<String>,
    #[serde(rename = "Documents", default, deserialize_with = "empty_string_as_none")]
    documents: Option<String>,
}

/// `key=file` entries separated by `;`. A bare key is flagged present without a file.
fn parse_documents(cell: &str) -> (Vec<DocumentRecord>, Vec<String>) {
    let mut records = Vec::new();
    let mut unrecognized = Vec::new();

    for entry in cell.split(';').map(str::trim).filter(|entry| !entry.is_empty()) {
        let (key, file_reference) = match entry.split_once('=') {
            Some((key, file)) => (key.trim(), Some(file.trim().to_string())),
            None => (entry, None),
        };

        match normalize_document_key(key) {
            Some(code) => records.push(DocumentRecord {
                code: Some(code),
                is_present: true,
                file_reference: file_reference.filter(|file| !file.is_empty()),
            }),
            None => unrecognized.push(key.to_string()),
        }
    }

    (records, unrecognized)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
