use serde::{Deserialize, Serialize};

/// Supporting document types tracked for an enrollment.
///
/// Ids and keys are stable across the system and are never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCode {
    NationalId,
    TaxId,
    MedicalRecord,
    BirthCertificate,
    PartialTranscript,
    PrimaryLevelCertificate,
    TransferRequest,
    Photo,
}

impl DocumentCode {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::NationalId,
            Self::TaxId,
            Self::MedicalRecord,
            Self::BirthCertificate,
            Self::PartialTranscript,
            Self::PrimaryLevelCertificate,
            Self::TransferRequest,
            Self::Photo,
        ]
    }

    pub const fn id(self) -> u8 {
        match self {
            Self::NationalId => 1,
            Self::TaxId => 2,
            Self::MedicalRecord => 3,
            Self::BirthCertificate => 4,
            Self::PartialTranscript => 5,
            Self::PrimaryLevelCertificate => 6,
            Self::TransferRequest => 7,
            Self::Photo => 8,
        }
    }

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::TaxId => "tax_id",
            Self::MedicalRecord => "medical_record",
            Self::BirthCertificate => "birth_certificate",
            Self::PartialTranscript => "partial_transcript",
            Self::PrimaryLevelCertificate => "primary_level_certificate",
            Self::TransferRequest => "transfer_request",
            Self::Photo => "photo",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|code| code.as_key() == key)
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|code| i64::from(code.id()) == id)
    }
}

/// Instructional format of an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    InPerson,
    Blended,
}

impl Modality {
    pub const fn ordered() -> [Self; 2] {
        [Self::InPerson, Self::Blended]
    }

    pub const fn id(self) -> ModalityId {
        match self {
            Self::InPerson => ModalityId(1),
            Self::Blended => ModalityId(2),
        }
    }

    pub fn from_id(id: ModalityId) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|modality| modality.id() == id)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InPerson => "In-person",
            Self::Blended => "Blended",
        }
    }
}

/// Raw modality identifier as supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalityId(pub i64);

impl ModalityId {
    pub const UNRECOGNIZED: ModalityId = ModalityId(0);
}

/// Raw plan/year identifier. Only meaningful together with a [`ModalityId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(pub i64);

impl PlanId {
    pub const UNRECOGNIZED: PlanId = PlanId(0);
}

/// Per-enrollment record of one submitted (or expected) document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub code: Option<DocumentCode>,
    #[serde(default)]
    pub is_present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_reference: Option<String>,
}

impl DocumentRecord {
    pub fn absent(code: DocumentCode) -> Self {
        Self {
            code: Some(code),
            is_present: false,
            file_reference: None,
        }
    }

    pub fn uploaded(code: DocumentCode, file_reference: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            is_present: true,
            file_reference: Some(file_reference.into()),
        }
    }

    /// Presence means a retrievable file, not just a flagged record.
    pub fn counts_as_present(&self) -> bool {
        self.code.is_some()
            && self.is_present
            && self
                .file_reference
                .as_deref()
                .is_some_and(|reference| !reference.trim().is_empty())
    }
}

/// Why a resolution fell back to the basic-set-only policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    UnknownModality,
    UnknownPlan,
}

impl FallbackReason {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnknownModality => "unrecognized modality",
            Self::UnknownPlan => "unrecognized plan for modality",
        }
    }
}

/// Documents required for one (modality, plan) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRule {
    pub basic_set: Vec<DocumentCode>,
    pub alternative_group: Vec<DocumentCode>,
    pub used_fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
}

impl RequirementRule {
    pub(crate) fn matched(basic_set: &[DocumentCode], alternative_group: &[DocumentCode]) -> Self {
        Self {
            basic_set: basic_set.to_vec(),
            alternative_group: alternative_group.to_vec(),
            used_fallback: false,
            fallback_reason: None,
        }
    }

    pub(crate) fn fallback(basic_set: &[DocumentCode], reason: FallbackReason) -> Self {
        Self {
            basic_set: basic_set.to_vec(),
            alternative_group: Vec::new(),
            used_fallback: true,
            fallback_reason: Some(reason),
        }
    }

    /// Basic set followed by the alternative group, without repeats.
    pub fn required_codes(&self) -> Vec<DocumentCode> {
        let mut codes = Vec::with_capacity(self.basic_set.len() + self.alternative_group.len());
        for code in self.basic_set.iter().chain(&self.alternative_group) {
            if !codes.contains(code) {
                codes.push(*code);
            }
        }
        codes
    }

    pub fn requires_alternative(&self) -> bool {
        !self.alternative_group.is_empty()
    }
}

/// Derived present/missing summary for one enrollment. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessVerdict {
    pub required: Vec<DocumentCode>,
    pub presented: Vec<DocumentCode>,
    pub missing: Vec<DocumentCode>,
    pub is_complete: bool,
    pub requires_alternative: bool,
}

impl CompletenessVerdict {
    pub fn status(&self) -> DocumentationStatus {
        if self.is_complete {
            DocumentationStatus::Complete
        } else {
            DocumentationStatus::Pending
        }
    }
}

/// Documentation state that downstream enrollment transitions gate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationStatus {
    Pending,
    Complete,
}

impl DocumentationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Complete => "Complete",
        }
    }
}
