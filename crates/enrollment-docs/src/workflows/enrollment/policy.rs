use tracing::warn;

use super::domain::{DocumentCode, FallbackReason, Modality, ModalityId, PlanId, RequirementRule};

/// Documents required under every modality and plan.
pub const BASIC_SET: [DocumentCode; 5] = [
    DocumentCode::NationalId,
    DocumentCode::TaxId,
    DocumentCode::BirthCertificate,
    DocumentCode::MedicalRecord,
    DocumentCode::Photo,
];

/// One row of the requirement table.
#[derive(Debug, Clone, Copy)]
pub struct PolicyEntry {
    pub modality: Modality,
    pub plan: PlanId,
    pub plan_label: &'static str,
    /// At least one member must be present. A single member is a plain mandatory document.
    pub alternatives: &'static [DocumentCode],
}

const STANDARD_POLICY: &[PolicyEntry] = &[
    PolicyEntry {
        modality: Modality::InPerson,
        plan: PlanId(1),
        plan_label: "1st year",
        alternatives: &[
            DocumentCode::PrimaryLevelCertificate,
            DocumentCode::TransferRequest,
        ],
    },
    PolicyEntry {
        modality: Modality::InPerson,
        plan: PlanId(2),
        plan_label: "2nd year",
        alternatives: &[DocumentCode::PartialTranscript, DocumentCode::TransferRequest],
    },
    PolicyEntry {
        modality: Modality::InPerson,
        plan: PlanId(3),
        plan_label: "3rd year",
        alternatives: &[DocumentCode::PartialTranscript, DocumentCode::TransferRequest],
    },
    PolicyEntry {
        modality: Modality::Blended,
        plan: PlanId(1),
        plan_label: "Plan A",
        alternatives: &[DocumentCode::PrimaryLevelCertificate],
    },
    PolicyEntry {
        modality: Modality::Blended,
        plan: PlanId(2),
        plan_label: "Plan B",
        alternatives: &[DocumentCode::PartialTranscript],
    },
    PolicyEntry {
        modality: Modality::Blended,
        plan: PlanId(3),
        plan_label: "Plan C",
        alternatives: &[DocumentCode::PartialTranscript],
    },
];

/// Table-driven resolver mapping (modality, plan) to required documents.
#[derive(Debug, Clone, Copy)]
pub struct RequirementPolicy {
    entries: &'static [PolicyEntry],
}

impl Default for RequirementPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl RequirementPolicy {
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_POLICY,
        }
    }

    pub fn entries(&self) -> &'static [PolicyEntry] {
        self.entries
    }

    pub fn entries_for(&self, modality: Modality) -> Vec<&'static PolicyEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.modality == modality)
            .collect()
    }

    fn lookup(&self, modality: Modality, plan: PlanId) -> Option<&'static PolicyEntry> {
        self.entries
            .iter()
            .find(|entry| entry.modality == modality && entry.plan == plan)
    }

    pub fn plan_label(&self, modality: ModalityId, plan: PlanId) -> Option<&'static str> {
        let modality = Modality::from_id(modality)?;
        self.lookup(modality, plan).map(|entry| entry.plan_label)
    }

    /// Resolve the rule for a pair. Unmapped pairs degrade to the basic set only.
    pub fn resolve(&self, modality: ModalityId, plan: PlanId) -> RequirementRule {
        let Some(known) = Modality::from_id(modality) else {
            warn!(
                modality = modality.0,
                plan = plan.0,
                reason = FallbackReason::UnknownModality.label(),
                "requirement policy fell back to basic set"
            );
            return RequirementRule::fallback(&BASIC_SET, FallbackReason::UnknownModality);
        };

        match self.lookup(known, plan) {
            Some(entry) => RequirementRule::matched(&BASIC_SET, entry.alternatives),
            None => {
                warn!(
                    modality = modality.0,
                    plan = plan.0,
                    reason = FallbackReason::UnknownPlan.label(),
                    "requirement policy fell back to basic set"
                );
                RequirementRule::fallback(&BASIC_SET, FallbackReason::UnknownPlan)
            }
        }
    }
}

/// Resolve against the standard policy table.
pub fn resolve(modality: ModalityId, plan: PlanId) -> RequirementRule {
    RequirementPolicy::standard().resolve(modality, plan)
}
