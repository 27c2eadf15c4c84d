use axum::response::Response;
use serde_json::Value;

use crate::workflows::enrollment::domain::{
    DocumentCode, DocumentRecord, Modality, ModalityId, PlanId, RequirementRule,
};
use crate::workflows::enrollment::policy::{resolve, BASIC_SET};

pub(super) const IN_PERSON: ModalityId = ModalityId(1);
pub(super) const BLENDED: ModalityId = ModalityId(2);

pub(super) fn rule_for(modality: Modality, plan: i64) -> RequirementRule {
    resolve(modality.id(), PlanId(plan))
}

pub(super) fn uploaded(code: DocumentCode) -> DocumentRecord {
    DocumentRecord::uploaded(code, format!("uploads/enr-0042/{}.pdf", code.as_key()))
}

pub(super) fn basic_records() -> Vec<DocumentRecord> {
    BASIC_SET.iter().copied().map(uploaded).collect()
}

pub(super) fn records_with(extra: &[DocumentCode]) -> Vec<DocumentRecord> {
    let mut records = basic_records();
    records.extend(extra.iter().copied().map(uploaded));
    records
}

pub(super) fn flagged_without_file(code: DocumentCode) -> DocumentRecord {
    DocumentRecord {
        code: Some(code),
        is_present: true,
        file_reference: None,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
