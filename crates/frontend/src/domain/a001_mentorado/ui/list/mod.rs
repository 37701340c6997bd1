use contracts::domain::mentorado::{Mentorado, MentoradoResumo};
use contracts::shared::pagination::ParamsPagina;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_mentorado::api;
use crate::shared::icons::icon;
use crate::shared::lifetime::EscopoPagina;
use crate::system::auth::context::use_sessao;

const TAMANHO_PAGINA: u32 = 20;

#[derive(Clone, Debug)]
pub struct MentoradoRow {
    pub nome: String,
    pub email: String,
    pub ativo: bool,
    pub avatar_url: Option<String>,
    pub vigencia: String,
    pub criado_em: String,
}

impl MentoradoRow {
    fn montar(mentorado: Mentorado, resumo: MentoradoResumo) -> Self {
        let vigencia = match &resumo.vigencia {
            Some(v) => {
                let fim = v
                    .fim
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| "em aberto".to_string());
                format!("{} – {}", v.inicio.format("%d/%m/%Y"), fim)
            }
            None => "-".to_string(),
        };
        Self {
            nome: mentorado.nome,
            email: mentorado.email,
            ativo: mentorado.ativo,
            avatar_url: resumo.avatar_url,
            vigencia,
            criado_em: mentorado.criado_em.format("%d/%m/%Y").to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MentoradoList() -> impl IntoView {
    let sessao = use_sessao();
    let escopo = StoredValue::new_local(EscopoPagina::montar());

    let (items, set_items) = signal::<Vec<MentoradoRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (pagina, set_pagina) = signal(1u32);
    let (total, set_total) = signal(0u64);

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
                    // Avatar/vigência come from the bounded fan-out,
                    // one enrichment request per row.
                    let resumos =
                        api::enriquecer(&cliente, &pagina_atual.itens, Some(&sinal)).await;
                    if !escopo.esta_viva() {
                        return;
                    }
                    let rows: Vec<MentoradoRow> = pagina_atual
                        .itens
                        .into_iter()
                        .zip(resumos)
                        .map(|(m, r)| MentoradoRow::montar(m, r))
                        .collect();
                    set_total.set(pagina_atual.total);
                    set_items.set(rows);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
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
                    <h1 class="header__title">"Mentorados"</h1>
                </div>
                <div class="header__actions">
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
                            <th class="table__header-cell"></th>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"E-mail"</th>
                            <th class="table__header-cell">"Situação"</th>
                            <th class="table__header-cell">"Vigência"</th>
                            <th class="table__header-cell">"Cadastro"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--avatar">
                                        {match row.avatar_url {
                                            Some(url) => view! {
                                                <img class="avatar" src=url alt="" />
                                            }.into_any(),
                                            None => view! {
                                                <span class="avatar avatar--placeholder"></span>
                                            }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">{row.nome}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">
                                        <span
                                            class="badge"
                                            class:badge--ativo=row.ativo
                                            class:badge--inativo=!row.ativo
                                        >
                                            {if row.ativo { "Ativo" } else { "Inativo" }}
                                        </span>
                                    </td>
                                    <td class="table__cell">{row.vigencia}</td>
                                    <td class="table__cell">{row.criado_em}</td>
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
                    {move || {
                        let ultima = ParamsPagina::new(1, TAMANHO_PAGINA)
                            .total_paginas(total.get())
                            .max(1);
                        format!("Página {} de {} ({} mentorados)", pagina.get(), ultima, total.get())
                    }}
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
        </div>
    }
}
