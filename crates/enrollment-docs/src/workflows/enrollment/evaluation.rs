use std::collections::BTreeSet;

use tracing::debug;

use super::domain::{CompletenessVerdict, DocumentCode, DocumentRecord, RequirementRule};

/// Cross-reference a rule with an enrollment's document records.
///
/// A code counts as presented when any of its records holds a retrievable file, so
/// re-uploads never double count. Records without a code or file are ignored.
pub fn evaluate(rule: &RequirementRule, records: &[DocumentRecord]) -> CompletenessVerdict {
    let on_file: BTreeSet<DocumentCode> = records
        .iter()
        .filter(|record| record.counts_as_present())
        .filter_map(|record| record.code)
        .collect();

    let required = rule.required_codes();

    let mut missing = Vec::new();
    for code in &rule.basic_set {
        if !on_file.contains(code) && !missing.contains(code) {
            missing.push(*code);
        }
    }
    let basic_satisfied = missing.is_empty();

    let alternative_satisfied = rule.alternative_group.is_empty()
        || rule
            .alternative_group
            .iter()
            .any(|code| on_file.contains(code));

    if !alternative_satisfied {
        // Every acceptable alternative is reported, not an arbitrary pick.
        for code in &rule.alternative_group {
            if !missing.contains(code) {
                missing.push(*code);
            }
        }
    }

    let presented: Vec<DocumentCode> = required
        .iter()
        .copied()
        .filter(|code| on_file.contains(code))
        .collect();

    let is_complete = basic_satisfied && alternative_satisfied;

    debug!(
        required = required.len(),
        presented = presented.len(),
        missing = missing.len(),
        is_complete,
        "evaluated document completeness"
    );

    CompletenessVerdict {
        required,
        presented,
        missing,
        is_complete,
        requires_alternative: rule.requires_alternative(),
    }
}
