//! URL normalization for user-pasted job-posting links.

use super::error::ApiError;

/// Normalize a pasted URL: trim, prepend `https://` when no `http(s)://`
/// prefix is present, then require at least one `.` after the scheme.
/// Rejections are client-side validation errors; no request is sent.
pub fn normalizar_url(entrada: &str) -> Result<String, ApiError> {
    let texto = entrada.trim();
    if texto.is_empty() {
        return Err(ApiError::Validacao("Informe a URL da vaga".to_string()));
    }

    let com_esquema = if texto.starts_with("http://") || texto.starts_with("https://") {
        texto.to_string()
    } else {
        format!("https://{texto}")
    };

    let depois_do_esquema = com_esquema
        .split_once("://")
        .map(|(_, resto)| resto)
        .unwrap_or("");
    if !depois_do_esquema.contains('.') {
        return Err(ApiError::Validacao(
            "URL inválida: informe um endereço completo".to_string(),
        ));
    }

    Ok(com_esquema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixa_esquema() {
        assert_eq!(
            normalizar_url("example.com/job/1").unwrap(),
            "https://example.com/job/1"
        );
    }

    #[test]
    fn test_esquema_existente_intacto() {
        assert_eq!(normalizar_url("https://x.com").unwrap(), "https://x.com");
        assert_eq!(
            normalizar_url("http://jobs.acme.dev/42").unwrap(),
            "http://jobs.acme.dev/42"
        );
    }

    #[test]
    fn test_rejeita_sem_ponto() {
        assert!(matches!(
            normalizar_url("nodothere"),
            Err(ApiError::Validacao(_))
        ));
        assert!(matches!(
            normalizar_url("https://localhost"),
            Err(ApiError::Validacao(_))
        ));
    }

    #[test]
    fn test_rejeita_vazio() {
        assert!(matches!(normalizar_url(""), Err(ApiError::Validacao(_))));
        assert!(matches!(normalizar_url("   "), Err(ApiError::Validacao(_))));
    }
}
