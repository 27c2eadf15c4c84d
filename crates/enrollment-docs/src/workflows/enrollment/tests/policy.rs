use super::common::*;
use crate::workflows::enrollment::domain::{
    DocumentCode, FallbackReason, Modality, ModalityId, PlanId,
};
use crate::workflows::enrollment::policy::{resolve, RequirementPolicy, BASIC_SET};

#[test]
fn every_table_entry_shares_the_same_basic_set() {
    let policy = RequirementPolicy::standard();
    assert_eq!(policy.entries().len(), 6);

    for entry in policy.entries() {
        let rule = policy.resolve(entry.modality.id(), entry.plan);
        assert_eq!(rule.basic_set, BASIC_SET.to_vec());
        assert_eq!(rule.basic_set.len(), 5);
        assert!(!rule.used_fallback, "{:?} should match", entry.plan_label);
        assert!(rule.fallback_reason.is_none());
    }
}

#[test]
fn first_year_in_person_accepts_primary_certificate_or_transfer() {
    let rule = rule_for(Modality::InPerson, 1);

    assert_eq!(
        rule.alternative_group,
        vec![
            DocumentCode::PrimaryLevelCertificate,
            DocumentCode::TransferRequest
        ]
    );
}

#[test]
fn later_in_person_years_accept_transcript_or_transfer() {
    for year in [2, 3] {
        let rule = rule_for(Modality::InPerson, year);
        assert_eq!(
            rule.alternative_group,
            vec![DocumentCode::PartialTranscript, DocumentCode::TransferRequest],
            "year {year}"
        );
    }
}

#[test]
fn blended_plans_require_a_single_document() {
    let plan_a = rule_for(Modality::Blended, 1);
    assert_eq!(
        plan_a.alternative_group,
        vec![DocumentCode::PrimaryLevelCertificate]
    );

    for plan in [2, 3] {
        let rule = rule_for(Modality::Blended, plan);
        assert_eq!(rule.alternative_group, vec![DocumentCode::PartialTranscript]);
    }
}

#[test]
fn same_raw_plan_means_different_things_per_modality() {
    let policy = RequirementPolicy::standard();

    assert_eq!(policy.plan_label(IN_PERSON, PlanId(1)), Some("1st year"));
    assert_eq!(policy.plan_label(BLENDED, PlanId(1)), Some("Plan A"));
    assert_ne!(
        resolve(IN_PERSON, PlanId(1)).alternative_group,
        resolve(BLENDED, PlanId(1)).alternative_group
    );
}

#[test]
fn unknown_modality_falls_back_to_basic_set() {
    for plan in [1, 2, 9] {
        let rule = resolve(ModalityId(7), PlanId(plan));

        assert!(rule.used_fallback);
        assert_eq!(rule.fallback_reason, Some(FallbackReason::UnknownModality));
        assert!(rule.alternative_group.is_empty());
        assert_eq!(rule.basic_set, BASIC_SET.to_vec());
    }
}

#[test]
fn unknown_plan_under_known_modality_falls_back() {
    for modality in [IN_PERSON, BLENDED] {
        let rule = resolve(modality, PlanId(4));

        assert!(rule.used_fallback);
        assert_eq!(rule.fallback_reason, Some(FallbackReason::UnknownPlan));
        assert!(rule.alternative_group.is_empty());
    }
}

#[test]
fn entries_for_modality_are_grouped() {
    let policy = RequirementPolicy::standard();
    let labels: Vec<&str> = policy
        .entries_for(Modality::Blended)
        .iter()
        .map(|entry| entry.plan_label)
        .collect();

    assert_eq!(labels, vec!["Plan A", "Plan B", "Plan C"]);
}
