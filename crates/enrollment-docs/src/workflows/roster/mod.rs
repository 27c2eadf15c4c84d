mod parser;

use crate::workflows::enrollment::{
    assess, normalize_modality, normalize_plan, CompletenessReport, DocumentRecord, ModalityId,
    PlanId,
};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read enrollment roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid enrollment roster CSV: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One enrollment row with identifiers already normalized.
#[derive(Debug, Clone)]
pub struct RosterEnrollment {
    pub enrollment_id: String,
    pub student: String,
    pub modality: ModalityId,
    pub plan: PlanId,
    pub records: Vec<DocumentRecord>,
    pub unrecognized_documents: Vec<String>,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEnrollment>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEnrollment>, RosterImportError> {
        let rows = parser::parse_rows(reader)?;

        let enrollments: Vec<RosterEnrollment> = rows
            .into_iter()
            .map(|row| RosterEnrollment {
                enrollment_id: row.enrollment_id,
                student: row.student,
                modality: row
                    .modality
                    .as_deref()
                    .map(normalize_modality)
                    .unwrap_or(ModalityId::UNRECOGNIZED),
                plan: row
                    .plan
                    .as_deref()
                    .map(normalize_plan)
                    .unwrap_or(PlanId::UNRECOGNIZED),
                records: row.records,
                unrecognized_documents: row.unrecognized,
            })
            .collect();

        info!(enrollments = enrollments.len(), "imported enrollment roster");
        Ok(enrollments)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterOutcome {
    pub enrollment_id: String,
    pub student: String,
    pub report: CompletenessReport,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unrecognized_documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub complete: usize,
    pub pending: usize,
    pub fallback: usize,
    pub outcomes: Vec<RosterOutcome>,
}

/// Evaluate every enrollment independently.
pub fn evaluate_roster(enrollments: &[RosterEnrollment]) -> RosterSummary {
    let outcomes: Vec<RosterOutcome> = enrollments
        .iter()
        .map(|enrollment| RosterOutcome {
            enrollment_id: enrollment.enrollment_id.clone(),
            student: enrollment.student.clone(),
            report: assess(enrollment.modality, enrollment.plan, &enrollment.records),
            unrecognized_documents: enrollment.unrecognized_documents.clone(),
        })
        .collect();

    let complete = outcomes
        .iter()
        .filter(|outcome| outcome.report.is_complete)
        .count();
    let fallback = outcomes
        .iter()
        .filter(|outcome| outcome.report.used_fallback)
        .count();

    RosterSummary {
        total: outcomes.len(),
        complete,
        pending: outcomes.len() - complete,
        fallback,
        outcomes,
    }
}
