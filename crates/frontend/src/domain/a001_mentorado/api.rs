use contracts::domain::mentorado::{Mentorado, MentoradoResumo};
use contracts::shared::pagination::{Pagina, ParamsPagina};
use uuid::Uuid;
use web_sys::AbortSignal;

use crate::shared::api_utils::ApiClient;
use crate::shared::concurrency::map_com_concorrencia;
use crate::shared::error::ApiError;

/// How many enrichment requests run at once for a page of rows.
const LIMITE_ENRIQUECIMENTO: usize = 4;

pub async fn listar(
    cliente: &ApiClient,
    params: ParamsPagina,
    sinal: Option<&AbortSignal>,
) -> Result<Pagina<Mentorado>, ApiError> {
    let path = format!(
        "/api/mentorados?pagina={}&tamanho={}",
        params.pagina, params.tamanho
    );
    cliente.get_json(&path, sinal).await
}

pub async fn buscar_resumo(
    cliente: &ApiClient,
    id: Uuid,
    sinal: Option<&AbortSignal>,
) -> Result<MentoradoResumo, ApiError> {
    cliente
        .get_json(&format!("/api/mentorados/{id}/resumo"), sinal)
        .await
}

/// Enrich a page of rows with avatar/vigência data, at most
/// [`LIMITE_ENRIQUECIMENTO`] requests in flight. A failed enrichment
/// falls back to an empty resumo so one bad row does not sink the page.
pub async fn enriquecer(
    cliente: &ApiClient,
    mentorados: &[Mentorado],
    sinal: Option<&AbortSignal>,
) -> Vec<MentoradoResumo> {
    let ids: Vec<Uuid> = mentorados.iter().map(|m| m.id).collect();
    map_com_concorrencia(ids, LIMITE_ENRIQUECIMENTO, |id| async move {
        match buscar_resumo(cliente, id, sinal).await {
            Ok(resumo) => resumo,
            Err(e) => {
                log::warn!("resumo do mentorado {id} indisponível: {e}");
                MentoradoResumo::default()
            }
        }
    })
    .await
}
