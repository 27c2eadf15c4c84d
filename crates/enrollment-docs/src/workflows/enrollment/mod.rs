//! Document requirement and completeness resolution for enrollments.
//!
//! The registry, policy resolver and evaluator are pure functions over immutable input.
//! Labels are only attached in [`report`], and loosely-typed caller input is normalized in
//! [`normalizer`] before it reaches the policy table.

pub mod checklist;
pub mod domain;
pub mod evaluation;
pub mod normalizer;
pub mod policy;
pub mod registry;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use checklist::{ChecklistError, DocumentChecklist};
pub use domain::{
    CompletenessVerdict, DocumentCode, DocumentRecord, DocumentationStatus, FallbackReason,
    Modality, ModalityId, PlanId, RequirementRule,
};
pub use evaluation::evaluate;
pub use normalizer::{normalize_document_key, normalize_modality, normalize_plan, LooseIdentifier};
pub use policy::{resolve, PolicyEntry, RequirementPolicy, BASIC_SET};
pub use registry::{label, label_for_key, DocumentRegistry, DocumentRegistryEntry};
pub use report::{assess, render_receipt, CompletenessReport, DocumentLine};
pub use router::enrollment_router;
