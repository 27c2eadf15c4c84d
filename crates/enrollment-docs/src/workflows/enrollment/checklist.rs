use serde::{Deserialize, Serialize};

use super::domain::{CompletenessVerdict, DocumentCode, DocumentRecord, RequirementRule};
use super::evaluation::evaluate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("upload for {0:?} carried an empty file reference")]
    EmptyFileReference(DocumentCode),
    #[error("document {0:?} is not tracked by this checklist")]
    DocumentNotTracked(DocumentCode),
}

/// Live document records for one enrollment, as edited by upload screens.
///
/// Records are created absent, flipped on upload or removal, and never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChecklist {
    records: Vec<DocumentRecord>,
}

impl DocumentChecklist {
    pub fn initialize(rule: &RequirementRule) -> Self {
        Self {
            records: rule
                .required_codes()
                .into_iter()
                .map(DocumentRecord::absent)
                .collect(),
        }
    }

    pub fn from_records(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn record_upload(
        &mut self,
        code: DocumentCode,
        file_reference: impl Into<String>,
    ) -> Result<(), ChecklistError> {
        let file_reference = file_reference.into();
        if file_reference.trim().is_empty() {
            return Err(ChecklistError::EmptyFileReference(code));
        }

        let vacant = self
            .records
            .iter_mut()
            .find(|record| record.code == Some(code) && !record.counts_as_present());

        match vacant {
            Some(record) => {
                record.is_present = true;
                record.file_reference = Some(file_reference);
            }
            None => self
                .records
                .push(DocumentRecord::uploaded(code, file_reference)),
        }

        Ok(())
    }

    pub fn remove_upload(&mut self, code: DocumentCode) -> Result<(), ChecklistError> {
        let mut tracked = false;
        for record in self
            .records
            .iter_mut()
            .filter(|record| record.code == Some(code))
        {
            record.is_present = false;
            record.file_reference = None;
            tracked = true;
        }

        if tracked {
            Ok(())
        } else {
            Err(ChecklistError::DocumentNotTracked(code))
        }
    }

    pub fn evaluate(&self, rule: &RequirementRule) -> CompletenessVerdict {
        evaluate(rule, &self.records)
    }
}
