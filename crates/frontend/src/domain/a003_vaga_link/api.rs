use contracts::domain::vagas::{NovaVagaRequest, VagaLink};
use contracts::shared::pagination::{Pagina, ParamsPagina};
use web_sys::AbortSignal;

use crate::shared::api_utils::ApiClient;
use crate::shared::error::ApiError;

pub async fn listar(
    cliente: &ApiClient,
    params: ParamsPagina,
    sinal: Option<&AbortSignal>,
) -> Result<Pagina<VagaLink>, ApiError> {
    let caminho = format!("/api/vagas?pagina={}&tamanho={}", params.pagina, params.tamanho);
    cliente.get_json(&caminho, sinal).await
}

/// Create a saved link. `url` must already be normalized (scheme present,
/// host contains a dot).
pub async fn criar(
    cliente: &ApiClient,
    url: String,
    sinal: Option<&AbortSignal>,
) -> Result<VagaLink, ApiError> {
    cliente
        .post_json("/api/vagas", &NovaVagaRequest { url }, sinal)
        .await
}
