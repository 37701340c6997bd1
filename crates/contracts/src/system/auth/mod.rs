use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub usuario: UsuarioInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioInfo {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}
