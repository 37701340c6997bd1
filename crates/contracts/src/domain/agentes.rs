//! AI agent chat contracts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A configurable AI agent the mentee can chat with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agente {
    pub id: Uuid,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PapelMensagem {
    #[serde(rename = "USUARIO")]
    Usuario,
    #[serde(rename = "AGENTE")]
    Agente,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MensagemChat {
    pub papel: PapelMensagem,
    pub conteudo: String,
}

/// Request carrying the full transcript; the backend owns the
/// conversation-window policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "agenteId")]
    pub agente_id: Uuid,
    pub mensagens: Vec<MensagemChat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub resposta: String,
}
