//! Unsigned JWT payload inspection.
//!
//! The client never verifies signatures (that is the server's job); it
//! only decodes the payload segment to read `exp` and identity claims.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Decode the payload segment of a JWT without verification.
/// `None` for anything that is not a three-segment base64url token.
pub fn decodificar_claims(token: &str) -> Option<Value> {
    let mut segmentos = token.split('.');
    let _cabecalho = segmentos.next()?;
    let payload = segmentos.next()?;
    segmentos.next()?;

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether the `exp` claim lies at or before `agora`. A missing or
/// malformed `exp` counts as not expired.
pub fn expirado(claims: &Value, agora: DateTime<Utc>) -> bool {
    match claims.get("exp").and_then(Value::as_i64) {
        Some(exp) => exp <= agora.timestamp(),
        None => false,
    }
}

/// Pure refresh function of (token, clock): the token itself when still
/// usable, `None` when undecodable or expired. There is no refresh-token
/// flow; `None` means the user goes back through login.
pub fn token_valido(token: &str, agora: DateTime<Utc>) -> Option<&str> {
    let claims = decodificar_claims(token)?;
    if expirado(&claims, agora) {
        None
    } else {
        Some(token)
    }
}

/// Extract the user identity from the claims by trying `candidatos` in
/// order and returning the first non-empty value. Numeric ids are
/// stringified. Centralizes the backend's inconsistent id field naming
/// in one place.
pub fn extrair_sujeito(claims: &Value, candidatos: &[&str]) -> Option<String> {
    for chave in candidatos {
        match claims.get(*chave) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Candidate identity claims in backend priority order.
pub const CANDIDATOS_SUJEITO: &[&str] = &["sub", "userId", "usuarioId", "id"];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token_com_payload(payload: &str) -> String {
        let cabecalho = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let corpo = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{cabecalho}.{corpo}.assinatura-falsa")
    }

    #[test]
    fn test_decodifica_payload_sem_verificar() {
        let token = token_com_payload(r#"{"sub":"u-1","exp":1700000000}"#);
        let claims = decodificar_claims(&token).unwrap();
        assert_eq!(claims["sub"], "u-1");
    }

    #[test]
    fn test_rejeita_token_malformado() {
        assert!(decodificar_claims("apenas-um-segmento").is_none());
        assert!(decodificar_claims("a.b").is_none());
        assert!(decodificar_claims("a.%%%.c").is_none());
    }

    #[test]
    fn test_expiracao() {
        let token = token_com_payload(r#"{"exp":1700000000}"#);
        let claims = decodificar_claims(&token).unwrap();

        let antes = Utc.timestamp_opt(1699999999, 0).unwrap();
        let depois = Utc.timestamp_opt(1700000001, 0).unwrap();
        assert!(!expirado(&claims, antes));
        assert!(expirado(&claims, depois));
    }

    #[test]
    fn test_sem_exp_nao_expira() {
        let token = token_com_payload(r#"{"sub":"x"}"#);
        let claims = decodificar_claims(&token).unwrap();
        assert!(!expirado(&claims, Utc::now()));
    }

    #[test]
    fn test_token_valido() {
        let token = token_com_payload(r#"{"exp":4102444800}"#); // year 2100
        let agora = Utc.timestamp_opt(1700000000, 0).unwrap();
        assert_eq!(token_valido(&token, agora), Some(token.as_str()));

        let vencido = token_com_payload(r#"{"exp":1000}"#);
        assert_eq!(token_valido(&vencido, agora), None);
        assert_eq!(token_valido("lixo", agora), None);
    }

    #[test]
    fn test_extrair_sujeito_ordem_dos_candidatos() {
        let claims: Value =
            serde_json::from_str(r#"{"sub":"","userId":"u-7","id":"ignorado"}"#).unwrap();
        assert_eq!(
            extrair_sujeito(&claims, CANDIDATOS_SUJEITO),
            Some("u-7".to_string())
        );
    }

    #[test]
    fn test_extrair_sujeito_numerico() {
        let claims: Value = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(
            extrair_sujeito(&claims, CANDIDATOS_SUJEITO),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_extrair_sujeito_ausente() {
        let claims: Value = serde_json::from_str(r#"{"outro":"x"}"#).unwrap();
        assert_eq!(extrair_sujeito(&claims, CANDIDATOS_SUJEITO), None);
    }
}
