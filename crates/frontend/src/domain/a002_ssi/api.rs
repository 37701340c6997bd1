use contracts::domain::metas::{MetaIndicador, MetasLoteRequest};
use contracts::domain::ssi::{ItemClassificacao, LinhaClassificada, LinhaSsi};
use web_sys::AbortSignal;

use crate::shared::api_utils::ApiClient;
use crate::shared::error::ApiError;

/// Fetch the skeleton table: one row per indicator with its current
/// 12-week vector (width normalized by the grid model, not here).
pub async fn buscar_esqueleto(
    cliente: &ApiClient,
    sinal: Option<&AbortSignal>,
) -> Result<Vec<LinhaSsi>, ApiError> {
    cliente.get_json("/api/ssi/tabela", sinal).await
}

/// Batch-classify the full matrix. The backend maps each cell against
/// the saved metas and returns a three-tier status per week.
pub async fn classificar(
    cliente: &ApiClient,
    itens: &[ItemClassificacao],
    sinal: Option<&AbortSignal>,
) -> Result<Vec<LinhaClassificada>, ApiError> {
    cliente.post_json("/api/ssi/classificar", &itens, sinal).await
}

pub async fn listar_metas(
    cliente: &ApiClient,
    sinal: Option<&AbortSignal>,
) -> Result<Vec<MetaIndicador>, ApiError> {
    cliente.get_json("/api/ssi/metas", sinal).await
}

/// Batch upsert; single pass/fail for the whole batch.
pub async fn salvar_metas(
    cliente: &ApiClient,
    lote: &MetasLoteRequest,
    sinal: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    cliente.post_sem_corpo("/api/ssi/metas", lote, sinal).await
}
