use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    CompletenessVerdict, DocumentCode, DocumentRecord, DocumentationStatus, Modality, ModalityId,
    PlanId, RequirementRule,
};
use super::evaluation::evaluate;
use super::policy::{resolve, RequirementPolicy};
use super::registry::label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLine {
    pub code: DocumentCode,
    pub label: &'static str,
}

impl From<DocumentCode> for DocumentLine {
    fn from(code: DocumentCode) -> Self {
        Self {
            code,
            label: label(code),
        }
    }
}

fn lines(codes: &[DocumentCode]) -> Vec<DocumentLine> {
    codes.iter().copied().map(DocumentLine::from).collect()
}

/// Labelled view of a verdict for receipts, notices and checklist badges.
#[derive(Debug, Clone, Serialize)]
pub struct CompletenessReport {
    pub modality: ModalityId,
    pub modality_label: &'static str,
    pub plan: PlanId,
    pub plan_label: &'static str,
    pub used_fallback: bool,
    pub status: DocumentationStatus,
    pub status_label: &'static str,
    pub is_complete: bool,
    pub required: Vec<DocumentLine>,
    pub presented: Vec<DocumentLine>,
    pub missing: Vec<DocumentLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_note: Option<String>,
}

impl CompletenessReport {
    pub fn build(
        modality: ModalityId,
        plan: PlanId,
        rule: &RequirementRule,
        verdict: &CompletenessVerdict,
    ) -> Self {
        let modality_label = Modality::from_id(modality)
            .map(Modality::label)
            .unwrap_or("Unrecognized modality");
        let plan_label = RequirementPolicy::standard()
            .plan_label(modality, plan)
            .unwrap_or("Unrecognized plan");

        let alternative_unmet = rule.alternative_group.len() > 1
            && rule
                .alternative_group
                .iter()
                .all(|code| verdict.missing.contains(code));
        let alternative_note = alternative_unmet.then(|| {
            let options: Vec<&str> = rule.alternative_group.iter().map(|c| label(*c)).collect();
            format!("Any one of: {}", options.join(", "))
        });

        let status = verdict.status();

        Self {
            modality,
            modality_label,
            plan,
            plan_label,
            used_fallback: rule.used_fallback,
            status,
            status_label: status.label(),
            is_complete: verdict.is_complete,
            required: lines(&verdict.required),
            presented: lines(&verdict.presented),
            missing: lines(&verdict.missing),
            alternative_note,
        }
    }
}

/// Resolve, evaluate and label in one pass.
pub fn assess(
    modality: ModalityId,
    plan: PlanId,
    records: &[DocumentRecord],
) -> CompletenessReport {
    let rule = resolve(modality, plan);
    let verdict = evaluate(&rule, records);
    CompletenessReport::build(modality, plan, &rule, &verdict)
}

/// Plain-text receipt with required / presented / missing sections.
pub fn render_receipt(
    report: &CompletenessReport,
    institution: &str,
    issued_on: NaiveDate,
) -> String {
    Receipt {
        report,
        institution,
        issued_on,
    }
    .to_string()
}

struct Receipt<'a> {
    report: &'a CompletenessReport,
    institution: &'a str,
    issued_on: NaiveDate,
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "{}", self.institution)?;
        writeln!(f, "Enrollment documentation receipt ({})", self.issued_on)?;
        writeln!(
            f,
            "Modality: {} | Plan: {}",
            report.modality_label, report.plan_label
        )?;
        if report.used_fallback {
            writeln!(
                f,
                "Note: modality or plan not recognized; only basic documents apply"
            )?;
        }
        writeln!(f, "Status: {}", report.status_label)?;

        write_section(f, "Required documents", &report.required)?;
        write_section(f, "Presented documents", &report.presented)?;
        write_section(f, "Missing documents", &report.missing)?;

        if let Some(note) = &report.alternative_note {
            writeln!(f, "({note})")?;
        }
        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, entries: &[DocumentLine]) -> fmt::Result {
    writeln!(f, "\n{title}")?;
    if entries.is_empty() {
        return writeln!(f, "- none");
    }
    for entry in entries {
        writeln!(f, "- {}", entry.label)?;
    }
    Ok(())
}
