use contracts::domain::vagas::VagaLink;
use contracts::shared::pagination::ParamsPagina;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_vaga_link::api;
use crate::shared::icons::icon;
use crate::shared::lifetime::EscopoPagina;
use crate::shared::url_utils::normalizar_url;
use crate::system::auth::context::use_sessao;

const TAMANHO_PAGINA: u32 = 10;

#[component]
#[allow(non_snake_case)]
pub fn VagaLinkList() -> impl IntoView {
    let sessao = use_sessao();
    let escopo = StoredValue::new_local(EscopoPagina::montar());

    let (items, set_items) = signal::<Vec<VagaLink>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (pagina, set_pagina) = signal(1u32);
    let (total, set_total) = signal(0u64);

    let (show_modal, set_show_modal) = signal(false);
    let (url_input, set_url_input) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let fetch = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        let params = ParamsPagina::new(pagina.get_untracked(), TAMANHO_PAGINA);
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::listar(&cliente, params, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(pagina_atual) => {
                    set_total.set(pagina_atual.total);
                    set_items.set(pagina_atual.itens);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    let salvar = move |_| {
        if is_saving.get_untracked() {
            return;
        }
        set_form_error.set(None);

        // Scheme is prepended client-side; a host without a dot never
        // reaches the backend.
        let url = match normalizar_url(&url_input.get_untracked()) {
            Ok(url) => url,
            Err(e) => {
                set_form_error.set(Some(e.to_string()));
                return;
            }
        };

        set_is_saving.set(true);
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::criar(&cliente, url, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(_) => {
                    set_url_input.set(String::new());
                    set_show_modal.set(false);
                    fetch();
                }
                Err(e) => set_form_error.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    let mudar_pagina = move |delta: i64| {
        let atual = pagina.get_untracked() as i64;
        let ultima =
            ParamsPagina::new(1, TAMANHO_PAGINA).total_paginas(total.get_untracked()) as i64;
        let nova = (atual + delta).clamp(1, ultima.max(1));
        if nova != atual {
            set_pagina.set(nova as u32);
            fetch();
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Vagas salvas"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_form_error.set(None);
                            set_show_modal.set(true);
                        }
                    >
                        {icon("plus")}
                        "Nova vaga"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Atualizar"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"URL"</th>
                            <th class="table__header-cell">"Salva em"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|vaga| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <a href=vaga.url.clone() target="_blank" rel="noopener">
                                            {vaga.url.clone()}
                                        </a>
                                    </td>
                                    <td class="table__cell">
                                        {vaga.criado_em.format("%d/%m/%Y %H:%M").to_string()}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="pagination">
                <button
                    class="button button--secondary"
                    on:click=move |_| mudar_pagina(-1)
                    disabled=move || is_loading.get() || pagina.get() <= 1
                >
                    "Anterior"
                </button>
                <span class="pagination__info">
                    {move || format!("{} vagas", total.get())}
                </span>
                <button
                    class="button button--secondary"
                    on:click=move |_| mudar_pagina(1)
                    disabled=move || {
                        let ultima = ParamsPagina::new(1, TAMANHO_PAGINA).total_paginas(total.get());
                        is_loading.get() || pagina.get() >= ultima
                    }
                >
                    "Próxima"
                </button>
            </div>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay" on:click=move |_| set_show_modal.set(false)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h2 class="modal__title">"Nova vaga"</h2>
                        {move || form_error.get().map(|e| view! {
                            <div class="error-message">{e}</div>
                        })}
                        <input
                            type="text"
                            id="vaga-url"
                            class="modal__input"
                            placeholder="empresa.com/vagas/123"
                            prop:value=url_input
                            on:input=move |ev| set_url_input.set(event_target_value(&ev))
                        />
                        <div class="modal__actions">
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_show_modal.set(false)
                            >
                                "Cancelar"
                            </button>
                            <button
                                class="button button--primary"
                                on:click=salvar
                                disabled=is_saving
                            >
                                {move || if is_saving.get() { "Salvando..." } else { "Salvar" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
