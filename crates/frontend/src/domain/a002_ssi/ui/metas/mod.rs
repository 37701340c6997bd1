use contracts::domain::ssi::catalogo;
use contracts::domain::ssi::Unidade;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_ssi::api;
use crate::domain::a002_ssi::metas::{hidratar, modelo_inicial, montar_lote, LinhaMeta};
use crate::shared::lifetime::EscopoPagina;
use crate::system::auth::context::use_sessao;

#[component]
#[allow(non_snake_case)]
pub fn MetasEditor() -> impl IntoView {
    let sessao = use_sessao();
    let escopo = StoredValue::new_local(EscopoPagina::montar());

    let linhas = RwSignal::new(modelo_inicial());
    let (recalcular, set_recalcular) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved_message, set_saved_message) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let carregar = move || {
        set_error.set(None);
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::listar_metas(&cliente, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(salvas) => linhas.update(|l| hidratar(l, salvas)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let salvar_tudo = move |_| {
        if is_saving.get_untracked() {
            return;
        }
        set_error.set(None);
        set_saved_message.set(None);

        // Blank rows are dropped from the payload; an all-blank form is
        // refused here, before any request goes out.
        let lote = match linhas.with_untracked(|l| montar_lote(l, recalcular.get_untracked())) {
            Ok(lote) => lote,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_saving.set(true);
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::salvar_metas(&cliente, &lote, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(()) => set_saved_message.set(Some("Metas salvas".to_string())),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    carregar();

    let linhas_do_grupo = move |grupo: &'static str| -> Vec<(usize, LinhaMeta)> {
        linhas.with(|todas| {
            todas
                .iter()
                .enumerate()
                .filter(|(_, l)| l.definicao.grupo == grupo)
                .map(|(i, l)| (i, l.clone()))
                .collect()
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Metas por indicador"</h1>
                </div>
                <div class="header__actions">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=recalcular
                            on:change=move |ev| set_recalcular.set(event_target_checked(&ev))
                        />
                        "Recalcular histórico"
                    </label>
                    <button
                        class="button button--primary"
                        on:click=salvar_tudo
                        disabled=is_saving
                    >
                        {move || if is_saving.get() { "Salvando..." } else { "Salvar tudo" }}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || saved_message.get().map(|m| view! {
                <div class="warning-box warning-box--success">
                    <span class="warning-box__text">{m}</span>
                </div>
            })}

            <div class="metas-form">
                {catalogo::grupos().into_iter().map(|grupo| {
                    view! {
                        <section class="metas-form__group">
                            <h2 class="metas-form__group-title">{grupo}</h2>
                            {move || linhas_do_grupo(grupo).into_iter().map(|(i, linha)| {
                                view! {
                                    <div class="metas-form__row">
                                        <label class="metas-form__label">
                                            {linha.definicao.nome}
                                        </label>
                                        <input
                                            type="text"
                                            class="metas-form__input"
                                            prop:value=linha.valor_texto.clone()
                                            on:change=move |ev| linhas.update(|todas| {
                                                if let Some(l) = todas.get_mut(i) {
                                                    l.valor_texto = event_target_value(&ev);
                                                }
                                            })
                                        />
                                        <select
                                            class="metas-form__select"
                                            prop:value=linha.unidade.as_str()
                                            on:change=move |ev| linhas.update(|todas| {
                                                if let (Some(l), Some(unidade)) = (
                                                    todas.get_mut(i),
                                                    Unidade::from_str_opt(&event_target_value(&ev)),
                                                ) {
                                                    l.unidade = unidade;
                                                }
                                            })
                                        >
                                            <option value="NUMERO">"Número"</option>
                                            <option value="PERCENTUAL">"Percentual"</option>
                                        </select>
                                    </div>
                                }
                            }).collect_view()}
                        </section>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
