//! Boundary adapter turning loosely-typed caller input into canonical identifiers.
//!
//! Upstream forms and exports pass modality and plan either as integers or as free text
//! ("1er año", "Plan A", "semipresencial"). All of that matching lives here so the policy
//! table only ever sees [`ModalityId`] and [`PlanId`].

use serde::{Deserialize, Serialize};

use super::domain::{DocumentCode, Modality, ModalityId, PlanId};

/// Identifier sent either as a number or as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseIdentifier {
    Number(i64),
    Text(String),
}

impl LooseIdentifier {
    pub fn to_modality(&self) -> ModalityId {
        match self {
            Self::Number(value) => ModalityId(*value),
            Self::Text(raw) => normalize_modality(raw),
        }
    }

    pub fn to_plan(&self) -> PlanId {
        match self {
            Self::Number(value) => PlanId(*value),
            Self::Text(raw) => normalize_plan(raw),
        }
    }
}

impl From<i64> for LooseIdentifier {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LooseIdentifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn strip_invisible(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "")
}

/// Raw numeric id, signs included. Parsed before folding so "-1" never reads as 1.
fn numeric_id(raw: &str) -> Option<i64> {
    strip_invisible(raw).trim().parse::<i64>().ok()
}

pub(crate) fn fold(value: &str) -> String {
    let cleaned = strip_invisible(value);
    let folded: String = cleaned
        .chars()
        .map(|ch| match ch {
            'á' | 'à' | 'Á' | 'À' => 'a',
            'é' | 'è' | 'É' | 'È' => 'e',
            'í' | 'ì' | 'Í' | 'Ì' => 'i',
            'ó' | 'ò' | 'Ó' | 'Ò' => 'o',
            'ú' | 'ù' | 'ü' | 'Ú' | 'Ù' | 'Ü' => 'u',
            'ñ' | 'Ñ' => 'n',
            '-' | '_' | '/' | '.' | '°' | 'º' => ' ',
            other => other,
        })
        .collect();
    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

pub fn normalize_modality(raw: &str) -> ModalityId {
    if let Some(id) = numeric_id(raw) {
        return ModalityId(id);
    }
    let folded = fold(raw);

    let modality = match folded.as_str() {
        "presencial" | "in person" | "inperson" | "on site" | "onsite" | "classroom" => {
            Some(Modality::InPerson)
        }
        "semipresencial" | "semi presencial" | "blended" | "hybrid" | "hibrido"
        | "bimodal" => Some(Modality::Blended),
        _ => None,
    };

    modality
        .map(Modality::id)
        .unwrap_or(ModalityId::UNRECOGNIZED)
}

pub fn normalize_plan(raw: &str) -> PlanId {
    if let Some(id) = numeric_id(raw) {
        return PlanId(id);
    }
    let folded = fold(raw);

    let stripped = folded
        .trim_start_matches("plan ")
        .trim_start_matches("year ")
        .trim_end_matches(" ano")
        .trim_end_matches(" year")
        .trim();

    let plan = match stripped {
        "a" | "1er" | "1ro" | "1" | "primer" | "primero" | "first" | "1st" => Some(1),
        "b" | "2do" | "2" | "segundo" | "second" | "2nd" => Some(2),
        "c" | "3er" | "3ro" | "3" | "tercer" | "tercero" | "third" | "3rd" => Some(3),
        _ => None,
    };

    plan.map(PlanId).unwrap_or(PlanId::UNRECOGNIZED)
}

pub fn normalize_document_key(raw: &str) -> Option<DocumentCode> {
    if let Some(id) = numeric_id(raw) {
        return DocumentCode::from_id(id);
    }
    let folded = fold(raw);
    if let Some(code) = DocumentCode::from_key(&folded.replace(' ', "_")) {
        return Some(code);
    }

    let code = match folded.as_str() {
        "dni" | "national id" | "id card" => DocumentCode::NationalId,
        "cuil" | "cuit" | "tax id" => DocumentCode::TaxId,
        "ficha medica" | "apto medico" | "medical" | "medical record" => {
            DocumentCode::MedicalRecord
        }
        "partida" | "partida de nacimiento" | "birth certificate" => {
            DocumentCode::BirthCertificate
        }
        "analitico" | "analitico parcial" | "transcript" | "partial transcript" => {
            DocumentCode::PartialTranscript
        }
        "certificado primario" | "certificado de primaria" | "certificado nivel primario"
        | "primary certificate" => DocumentCode::PrimaryLevelCertificate,
        "pase" | "solicitud de pase" | "transfer" | "transfer request" => {
            DocumentCode::TransferRequest
        }
        "foto" | "foto 4x4" | "fotografia" | "photo" => DocumentCode::Photo,
        _ => return None,
    };
    Some(code)
}
