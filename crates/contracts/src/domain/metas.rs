//! Target (meta) contracts: per-indicator goal values used by the backend
//! when classifying weekly cells.

use serde::{Deserialize, Serialize};

use super::ssi::Unidade;

/// A saved target for one metric. `valor_meta` may be fractional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaIndicador {
    pub metrica: String,
    pub unidade: Unidade,
    #[serde(rename = "valorMeta")]
    pub valor_meta: f64,
}

/// Batch upsert payload. `recalcular` asks the backend to re-run the
/// classification of historical weeks against the new targets; the
/// frontend forwards it verbatim and does not interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetasLoteRequest {
    pub itens: Vec<MetaIndicador>,
    pub recalcular: bool,
}
