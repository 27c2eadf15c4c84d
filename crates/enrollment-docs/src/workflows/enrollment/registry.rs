use std::borrow::Cow;

use serde::Serialize;

use super::domain::DocumentCode;

const DOCUMENT_LABELS: &[(DocumentCode, &str)] = &[
    (DocumentCode::NationalId, "National ID (DNI)"),
    (DocumentCode::TaxId, "Tax ID (CUIL)"),
    (DocumentCode::MedicalRecord, "Medical record"),
    (DocumentCode::BirthCertificate, "Birth certificate"),
    (DocumentCode::PartialTranscript, "Partial transcript"),
    (
        DocumentCode::PrimaryLevelCertificate,
        "Primary-level completion certificate",
    ),
    (DocumentCode::TransferRequest, "Transfer request"),
    (DocumentCode::Photo, "Photo"),
];

/// Display label for a document code, falling back to its stable key.
pub fn label(code: DocumentCode) -> &'static str {
    DOCUMENT_LABELS
        .iter()
        .find(|(registered, _)| *registered == code)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| code.as_key())
}

/// Label for a raw key; unregistered keys are returned as given.
pub fn label_for_key(key: &str) -> Cow<'_, str> {
    match DocumentCode::from_key(key.trim()) {
        Some(code) => Cow::Borrowed(label(code)),
        None => Cow::Borrowed(key),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentRegistryEntry {
    pub code: DocumentCode,
    pub id: u8,
    pub label: &'static str,
}

pub struct DocumentRegistry;

impl DocumentRegistry {
    pub fn entries() -> Vec<DocumentRegistryEntry> {
        DocumentCode::ordered()
            .into_iter()
            .map(|code| DocumentRegistryEntry {
                code,
                id: code.id(),
                label: label(code),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_registered_label() {
        for code in DocumentCode::ordered() {
            assert_ne!(label(code), code.as_key(), "{code:?} missing a label");
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key_itself() {
        assert_eq!(label_for_key("vaccination_card"), "vaccination_card");
        assert_eq!(label_for_key("photo"), "Photo");
    }

    #[test]
    fn entries_follow_stable_ids() {
        let ids: Vec<u8> = DocumentRegistry::entries()
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
