use super::common::*;
use crate::workflows::enrollment::domain::{
    DocumentCode, DocumentRecord, Modality, RequirementRule,
};
use crate::workflows::enrollment::evaluation::evaluate;
use crate::workflows::enrollment::policy::{resolve, BASIC_SET};
use crate::workflows::enrollment::{ModalityId, PlanId};

#[test]
fn basic_set_alone_completes_a_fallback_rule() {
    let rule = resolve(ModalityId(9), PlanId(1));

    let verdict = evaluate(&rule, &basic_records());

    assert!(verdict.is_complete);
    assert!(verdict.missing.is_empty());
    assert!(!verdict.requires_alternative);
    assert_eq!(verdict.presented, BASIC_SET.to_vec());
}

#[test]
fn unsatisfied_alternative_reports_every_option() {
    let rule = rule_for(Modality::InPerson, 1);

    let verdict = evaluate(&rule, &basic_records());

    assert!(!verdict.is_complete);
    assert!(verdict.requires_alternative);
    assert_eq!(
        verdict.missing,
        vec![
            DocumentCode::PrimaryLevelCertificate,
            DocumentCode::TransferRequest
        ]
    );
}

#[test]
fn either_alternative_satisfies_the_slot() {
    let rule = rule_for(Modality::InPerson, 3);

    for alternative in [DocumentCode::PartialTranscript, DocumentCode::TransferRequest] {
        let verdict = evaluate(&rule, &records_with(&[alternative]));
        assert!(verdict.is_complete, "{alternative:?} should satisfy the slot");
        assert!(verdict.missing.is_empty());
        assert!(verdict.presented.contains(&alternative));
    }
}

#[test]
fn flagged_record_without_file_is_not_present() {
    let rule = rule_for(Modality::Blended, 2);
    let mut records = basic_records();
    records.push(flagged_without_file(DocumentCode::PartialTranscript));

    let verdict = evaluate(&rule, &records);

    assert!(!verdict.is_complete);
    assert!(!verdict.presented.contains(&DocumentCode::PartialTranscript));
    assert_eq!(verdict.missing, vec![DocumentCode::PartialTranscript]);
}

#[test]
fn blank_file_reference_is_not_present() {
    let rule = rule_for(Modality::Blended, 2);
    let mut records = basic_records();
    records[0].file_reference = Some("   ".to_string());

    let verdict = evaluate(&rule, &records);

    assert!(verdict.missing.contains(&DocumentCode::NationalId));
    assert!(!verdict.presented.contains(&DocumentCode::NationalId));
}

#[test]
fn duplicate_records_count_once() {
    let rule = rule_for(Modality::InPerson, 2);
    let mut records = records_with(&[DocumentCode::PartialTranscript]);
    records.push(DocumentRecord::absent(DocumentCode::Photo));
    records.push(uploaded(DocumentCode::Photo));
    records.push(flagged_without_file(DocumentCode::TaxId));

    let verdict = evaluate(&rule, &records);

    let photo_count = verdict
        .presented
        .iter()
        .filter(|code| **code == DocumentCode::Photo)
        .count();
    assert_eq!(photo_count, 1);
    assert!(!verdict.missing.contains(&DocumentCode::Photo));
    assert!(!verdict.missing.contains(&DocumentCode::TaxId));
    assert!(verdict.is_complete);
}

#[test]
fn empty_records_report_the_whole_basic_set_missing() {
    let rule = rule_for(Modality::Blended, 1);

    let verdict = evaluate(&rule, &[]);

    assert!(!verdict.is_complete);
    assert!(verdict.presented.is_empty());
    let mut expected = BASIC_SET.to_vec();
    expected.push(DocumentCode::PrimaryLevelCertificate);
    assert_eq!(verdict.missing, expected);
}

#[test]
fn records_without_code_are_ignored() {
    let rule = rule_for(Modality::Blended, 3);
    let mut records = records_with(&[DocumentCode::PartialTranscript]);
    records.push(DocumentRecord {
        code: None,
        is_present: true,
        file_reference: Some("uploads/orphan.pdf".to_string()),
    });

    let verdict = evaluate(&rule, &records);

    assert!(verdict.is_complete);
    assert_eq!(verdict.presented.len(), 6);
}

#[test]
fn documents_outside_the_rule_are_not_presented() {
    let rule = rule_for(Modality::Blended, 1);
    let records = records_with(&[
        DocumentCode::PrimaryLevelCertificate,
        DocumentCode::TransferRequest,
    ]);

    let verdict = evaluate(&rule, &records);

    assert!(verdict.is_complete);
    assert!(!verdict.presented.contains(&DocumentCode::TransferRequest));
}

#[test]
fn evaluation_is_idempotent() {
    let rule = rule_for(Modality::InPerson, 1);
    let records = records_with(&[DocumentCode::TransferRequest]);

    let first = evaluate(&rule, &records);
    let second = evaluate(&rule, &records);

    assert_eq!(first, second);
    assert_eq!(records.len(), 6);
}

#[test]
fn required_lists_basic_set_then_alternatives() {
    let rule = rule_for(Modality::InPerson, 2);

    let verdict = evaluate(&rule, &basic_records());

    let mut expected = BASIC_SET.to_vec();
    expected.extend([DocumentCode::PartialTranscript, DocumentCode::TransferRequest]);
    assert_eq!(verdict.required, expected);
}

#[test]
fn required_never_repeats_a_code() {
    let rule = RequirementRule::matched(
        &BASIC_SET,
        &[DocumentCode::Photo, DocumentCode::TransferRequest],
    );

    let verdict = evaluate(&rule, &[]);

    let mut expected = BASIC_SET.to_vec();
    expected.push(DocumentCode::TransferRequest);
    assert_eq!(verdict.required, expected);
    assert_eq!(verdict.missing, verdict.required);
}
