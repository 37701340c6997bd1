//! Session state for the whole app.
//!
//! The session is an explicit value provided via context; API clients are
//! constructed from it per call, so there is no global mutable auth
//! header anywhere. Local expiry detection simply drops the session,
//! which routes the user back to the login page.

use chrono::Utc;
use contracts::system::auth::{LoginResponse, UsuarioInfo};
use leptos::prelude::*;

use super::{jwt, storage};
use crate::shared::api_utils::ApiClient;

#[derive(Clone, Debug, Default)]
pub struct Sessao {
    pub token: Option<String>,
    pub usuario: Option<UsuarioInfo>,
}

/// Handle on the session signals, provided via context.
#[derive(Clone, Copy)]
pub struct SessaoService {
    pub estado: ReadSignal<Sessao>,
    escrever: WriteSignal<Sessao>,
}

impl SessaoService {
    /// Build an API client from the current session snapshot. A token
    /// that expired since the last call is dropped on the spot (session
    /// cleared, login page takes over) and the client goes out anonymous.
    pub fn cliente(&self) -> ApiClient {
        let sessao = self.estado.get_untracked();
        match sessao.token.as_deref() {
            Some(token) => {
                if jwt::token_valido(token, Utc::now()).is_some() {
                    ApiClient::com_token(Some(token.to_string()))
                } else {
                    log::warn!("token expirado detectado localmente; encerrando sessão");
                    self.sair();
                    ApiClient::com_token(None)
                }
            }
            None => ApiClient::com_token(None),
        }
    }

    /// Install a fresh session after a successful login.
    pub fn entrar(&self, resposta: LoginResponse) {
        storage::salvar_token(&resposta.access_token);
        self.escrever.set(Sessao {
            token: Some(resposta.access_token),
            usuario: Some(resposta.usuario),
        });
    }

    pub fn sair(&self) {
        storage::limpar_token();
        self.escrever.set(Sessao::default());
    }

    /// Reactive: true while a token is present.
    pub fn autenticado(&self) -> bool {
        self.estado.with(|s| s.token.is_some())
    }

    /// Display name for the header, from the login response or, after a
    /// reload, from the token claims.
    pub fn nome_exibicao(&self) -> String {
        self.estado.with(|s| {
            if let Some(usuario) = &s.usuario {
                return usuario.nome.clone();
            }
            s.token
                .as_deref()
                .and_then(jwt::decodificar_claims)
                .and_then(|claims| jwt::extrair_sujeito(&claims, &["nome", "name", "email"]))
                .unwrap_or_else(|| "—".to_string())
        })
    }
}

/// Session context provider. Restores the persisted token on mount,
/// discarding it when the local expiry check fails.
#[component]
pub fn SessaoProvider(children: ChildrenFn) -> impl IntoView {
    let inicial = match storage::ler_token() {
        Some(token) if jwt::token_valido(&token, Utc::now()).is_some() => {
            if let Some(sujeito) = jwt::decodificar_claims(&token)
                .and_then(|claims| jwt::extrair_sujeito(&claims, jwt::CANDIDATOS_SUJEITO))
            {
                log::info!("sessão restaurada para {sujeito}");
            }
            Sessao {
                token: Some(token),
                usuario: None,
            }
        }
        Some(_) => {
            storage::limpar_token();
            Sessao::default()
        }
        None => Sessao::default(),
    };

    let (estado, escrever) = signal(inicial);
    provide_context(SessaoService { estado, escrever });

    children()
}

/// Hook to access the session service.
pub fn use_sessao() -> SessaoService {
    use_context::<SessaoService>().expect("SessaoProvider not found in component tree")
}
