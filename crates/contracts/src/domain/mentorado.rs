//! Mentee (mentorado) contracts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access-entitlement period for a mentee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vigencia {
    pub inicio: NaiveDate,
    pub fim: Option<NaiveDate>,
    pub ativa: bool,
}

/// One mentee as listed by the backend.
///
/// `ativo` is computed server-side; the frontend renders it as-is and
/// never re-derives activity from other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentorado {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub ativo: bool,
    #[serde(rename = "criadoEm")]
    pub criado_em: DateTime<Utc>,
}

/// Per-row enrichment payload fetched separately from the list page
/// (avatar plus current vigência).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentoradoResumo {
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    pub vigencia: Option<Vigencia>,
}
