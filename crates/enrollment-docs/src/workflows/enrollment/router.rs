use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{DocumentCode, DocumentRecord, ModalityId, PlanId, RequirementRule};
use super::normalizer::{normalize_document_key, LooseIdentifier};
use super::policy::RequirementPolicy;
use super::registry::{DocumentRegistry, DocumentRegistryEntry};
use super::report::{assess, DocumentLine};

/// Router builder exposing the requirement and completeness endpoints.
pub fn enrollment_router() -> Router {
    Router::new()
        .route("/api/v1/enrollment/documents", get(documents_handler))
        .route("/api/v1/enrollment/requirements", post(requirements_handler))
        .route("/api/v1/enrollment/completeness", post(completeness_handler))
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequirementsRequest {
    pub modality: LooseIdentifier,
    pub plan: LooseIdentifier,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequirementsResponse {
    pub modality: ModalityId,
    pub plan: PlanId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_label: Option<&'static str>,
    pub rule: RequirementRule,
    pub basic_set: Vec<DocumentLine>,
    pub alternative_group: Vec<DocumentLine>,
}

/// Document record as posted by checklist screens. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentRecordPayload {
    #[serde(default)]
    pub code: Option<LooseIdentifier>,
    #[serde(default)]
    pub is_present: Option<bool>,
    #[serde(default)]
    pub file_reference: Option<String>,
}

impl DocumentRecordPayload {
    pub fn into_record(self) -> DocumentRecord {
        let code = self.code.and_then(|code| match code {
            LooseIdentifier::Number(id) => DocumentCode::from_id(id),
            LooseIdentifier::Text(raw) => normalize_document_key(&raw),
        });

        DocumentRecord {
            code,
            is_present: self.is_present.unwrap_or(false),
            file_reference: self.file_reference,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletenessRequest {
    pub modality: LooseIdentifier,
    pub plan: LooseIdentifier,
    #[serde(default)]
    pub records: Option<Vec<DocumentRecordPayload>>,
}

pub(crate) async fn documents_handler() -> Json<Vec<DocumentRegistryEntry>> {
    Json(DocumentRegistry::entries())
}

pub(crate) async fn requirements_handler(Json(request): Json<RequirementsRequest>) -> Response {
    let modality = request.modality.to_modality();
    let plan = request.plan.to_plan();
    let policy = RequirementPolicy::standard();
    let rule = policy.resolve(modality, plan);

    let body = RequirementsResponse {
        modality,
        plan,
        plan_label: policy.plan_label(modality, plan),
        basic_set: rule.basic_set.iter().copied().map(DocumentLine::from).collect(),
        alternative_group: rule
            .alternative_group
            .iter()
            .copied()
            .map(DocumentLine::from)
            .collect(),
        rule,
    };

    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn completeness_handler(Json(request): Json<CompletenessRequest>) -> Response {
    let records: Vec<DocumentRecord> = request
        .records
        .unwrap_or_default()
        .into_iter()
        .map(DocumentRecordPayload::into_record)
        .collect();

    let report = assess(request.modality.to_modality(), request.plan.to_plan(), &records);
    (StatusCode::OK, Json(report)).into_response()
}
