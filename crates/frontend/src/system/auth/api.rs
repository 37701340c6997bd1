use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_utils::ApiClient;
use crate::shared::error::ApiError;

/// Authenticate with email and password. Anonymous call; the resulting
/// token is installed into the session by the caller.
pub async fn login(email: String, senha: String) -> Result<LoginResponse, ApiError> {
    let pedido = LoginRequest { email, senha };
    ApiClient::com_token(None)
        .post_json("/api/system/auth/login", &pedido, None)
        .await
}
