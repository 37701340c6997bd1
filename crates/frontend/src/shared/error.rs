//! Error taxonomy for API calls.
//!
//! Three failure families exist: transport failures, server-reported
//! validation errors carried in the response body, and purely client-side
//! validation. All collapse to one displayable string shown inline next to
//! the control that triggered the request; none are fatal to the page and
//! no retry is attempted.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a usable response (DNS, connection, CORS,
    /// serialization of the request itself).
    Transporte(String),
    /// Non-2xx response; message extracted from the body when present,
    /// otherwise the HTTP status.
    Servidor(String),
    /// Rejected before any request was sent.
    Validacao(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transporte(m) => write!(f, "Falha de comunicação: {m}"),
            ApiError::Servidor(m) => write!(f, "{m}"),
            ApiError::Validacao(m) => write!(f, "{m}"),
        }
    }
}

/// Extract a displayable message from an error response body.
///
/// The backend reports validation errors as `{"message": "..."}` or
/// `{"message": ["...", "..."]}`; anything else falls back to the HTTP
/// status line.
pub fn mensagem_do_corpo(status: u16, corpo: &str) -> String {
    if let Ok(valor) = serde_json::from_str::<serde_json::Value>(corpo) {
        match valor.get("message") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(serde_json::Value::Array(itens)) => {
                let partes: Vec<&str> = itens.iter().filter_map(|v| v.as_str()).collect();
                if !partes.is_empty() {
                    return partes.join("; ");
                }
            }
            _ => {}
        }
    }
    format!("Erro HTTP {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mensagem_string() {
        assert_eq!(
            mensagem_do_corpo(400, r#"{"message":"email inválido"}"#),
            "email inválido"
        );
    }

    #[test]
    fn test_mensagem_array() {
        assert_eq!(
            mensagem_do_corpo(422, r#"{"message":["campo a","campo b"]}"#),
            "campo a; campo b"
        );
    }

    #[test]
    fn test_corpo_irreconhecivel() {
        assert_eq!(mensagem_do_corpo(500, "<html>oops</html>"), "Erro HTTP 500");
        assert_eq!(mensagem_do_corpo(404, r#"{"message":""}"#), "Erro HTTP 404");
        assert_eq!(mensagem_do_corpo(422, r#"{"message":[]}"#), "Erro HTTP 422");
    }

    #[test]
    fn test_display() {
        let e = ApiError::Transporte("timeout".into());
        assert_eq!(e.to_string(), "Falha de comunicação: timeout");
        let e = ApiError::Servidor("meta inválida".into());
        assert_eq!(e.to_string(), "meta inválida");
        let e = ApiError::Validacao("Informe a URL da vaga".into());
        assert_eq!(e.to_string(), "Informe a URL da vaga");
    }
}
