//! Chat page: pick a configured agent, exchange messages. The full
//! transcript goes with every request; the backend owns the
//! conversation-window policy.

use contracts::domain::agentes::{Agente, ChatRequest, MensagemChat, PapelMensagem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::a004_agente::api;
use crate::shared::icons::icon;
use crate::shared::lifetime::EscopoPagina;
use crate::system::auth::context::use_sessao;

#[component]
#[allow(non_snake_case)]
pub fn AgenteChat() -> impl IntoView {
    let sessao = use_sessao();
    let escopo = StoredValue::new_local(EscopoPagina::montar());

    let (agentes, set_agentes) = signal::<Vec<Agente>>(Vec::new());
    let (agente_id, set_agente_id) = signal::<Option<Uuid>>(None);
    let (mensagens, set_mensagens) = signal::<Vec<MensagemChat>>(Vec::new());
    let (texto, set_texto) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_sending, set_is_sending) = signal(false);

    let carregar = move || {
        set_error.set(None);
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::listar(&cliente, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(lista) => {
                    set_agente_id.set(lista.first().map(|a| a.id));
                    set_agentes.set(lista);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let enviar = move |_: ()| {
        if is_sending.get_untracked() {
            return;
        }
        let conteudo = texto.get_untracked().trim().to_string();
        if conteudo.is_empty() {
            return;
        }
        let Some(id) = agente_id.get_untracked() else {
            return;
        };

        set_error.set(None);
        set_texto.set(String::new());
        set_mensagens.update(|m| {
            m.push(MensagemChat {
                papel: PapelMensagem::Usuario,
                conteudo,
            })
        });

        set_is_sending.set(true);
        let pedido = ChatRequest {
            agente_id: id,
            mensagens: mensagens.get_untracked(),
        };
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::enviar(&cliente, &pedido, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(resposta) => set_mensagens.update(|m| {
                    m.push(MensagemChat {
                        papel: PapelMensagem::Agente,
                        conteudo: resposta.resposta,
                    })
                }),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_sending.set(false);
        });
    };

    carregar();

    view! {
        <div class="page chat">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Agentes"</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="chat__agent-select"
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse::<Uuid>() {
                                set_agente_id.set(Some(id));
                                // A new agent starts a fresh conversation.
                                set_mensagens.set(Vec::new());
                            }
                        }
                    >
                        {move || agentes.get().into_iter().map(|agente| {
                            view! {
                                <option value=agente.id.to_string()>{agente.nome}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="chat__transcript">
                {move || mensagens.get().into_iter().map(|mensagem| {
                    let de_usuario = mensagem.papel == PapelMensagem::Usuario;
                    view! {
                        <div
                            class="chat__message"
                            class:chat__message--usuario=de_usuario
                            class:chat__message--agente=!de_usuario
                        >
                            {mensagem.conteudo}
                        </div>
                    }
                }).collect_view()}
                {move || is_sending.get().then(|| view! {
                    <div class="chat__message chat__message--agente chat__message--pending">
                        "..."
                    </div>
                })}
            </div>

            <div class="chat__composer">
                <input
                    type="text"
                    class="chat__input"
                    placeholder="Escreva sua mensagem"
                    prop:value=texto
                    on:input=move |ev| set_texto.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            enviar(());
                        }
                    }
                />
                <button
                    class="button button--primary"
                    on:click=move |_| enviar(())
                    disabled=is_sending
                >
                    {icon("send")}
                    "Enviar"
                </button>
            </div>
        </div>
    }
}
