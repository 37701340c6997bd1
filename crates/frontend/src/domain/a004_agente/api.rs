use contracts::domain::agentes::{Agente, ChatRequest, ChatResponse};
use web_sys::AbortSignal;

use crate::shared::api_utils::ApiClient;
use crate::shared::error::ApiError;

pub async fn listar(
    cliente: &ApiClient,
    sinal: Option<&AbortSignal>,
) -> Result<Vec<Agente>, ApiError> {
    cliente.get_json("/api/agentes", sinal).await
}

/// Send the full transcript; the reply comes back as a single message.
pub async fn enviar(
    cliente: &ApiClient,
    pedido: &ChatRequest,
    sinal: Option<&AbortSignal>,
) -> Result<ChatResponse, ApiError> {
    cliente.post_json("/api/agentes/chat", pedido, sinal).await
}
