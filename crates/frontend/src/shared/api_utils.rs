//! API client for frontend-backend communication.
//!
//! The client is an explicit value constructed from the current session
//! (token passed in, never global mutable headers). The bearer header is
//! attached only when a valid token exists; requests accept an optional
//! `AbortSignal` so pages can cancel on unmount.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortSignal;

use super::error::{mensagem_do_corpo, ApiError};

/// Get the base URL for API requests.
///
/// Constructed from the current window location, using port 3000 for the
/// backend server. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Typed HTTP client bound to one session snapshot.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// Build a client carrying `token` as bearer credential. Pass `None`
    /// for anonymous calls (login) or when the stored token is expired.
    pub fn com_token(token: Option<String>) -> Self {
        Self { token }
    }

    fn preparar(&self, builder: RequestBuilder, sinal: Option<&AbortSignal>) -> RequestBuilder {
        let builder = builder.abort_signal(sinal);
        match &self.token {
            Some(t) => builder.header("Authorization", &format!("Bearer {t}")),
            None => builder,
        }
    }

    pub async fn get_json<T>(&self, path: &str, sinal: Option<&AbortSignal>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .preparar(Request::get(&api_url(path)), sinal)
            .send()
            .await
            .map_err(|e| ApiError::Transporte(e.to_string()))?;
        Self::ler_json(response).await
    }

    pub async fn post_json<B, T>(
        &self,
        path: &str,
        corpo: &B,
        sinal: Option<&AbortSignal>,
    ) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .preparar(Request::post(&api_url(path)), sinal)
            .json(corpo)
            .map_err(|e| ApiError::Transporte(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transporte(e.to_string()))?;
        Self::ler_json(response).await
    }

    /// POST whose success response body is ignored (batch upserts return
    /// a bare 2xx).
    pub async fn post_sem_corpo<B>(
        &self,
        path: &str,
        corpo: &B,
        sinal: Option<&AbortSignal>,
    ) -> Result<(), ApiError>
    where
        B: Serialize,
    {
        let response = self
            .preparar(Request::post(&api_url(path)), sinal)
            .json(corpo)
            .map_err(|e| ApiError::Transporte(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transporte(e.to_string()))?;
        if !response.ok() {
            return Err(Self::erro_servidor(response).await);
        }
        Ok(())
    }

    async fn ler_json<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if !response.ok() {
            return Err(Self::erro_servidor(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transporte(format!("resposta inválida: {e}")))
    }

    async fn erro_servidor(response: Response) -> ApiError {
        let status = response.status();
        let corpo = response.text().await.unwrap_or_default();
        ApiError::Servidor(mensagem_do_corpo(status, &corpo))
    }
}
