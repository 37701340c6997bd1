//! Saved job-posting links (vagas) tied to a mentee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored job-posting URL. URLs are normalized on the client before
/// submission and always carry a scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VagaLink {
    pub id: Uuid,
    pub url: String,
    #[serde(rename = "criadoEm")]
    pub criado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovaVagaRequest {
    pub url: String,
}
