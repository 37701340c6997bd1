use contracts::domain::ssi::{StatusSemana, Unidade, SEMANAS_POR_CICLO};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_ssi::api;
use crate::domain::a002_ssi::grade::GradeSsi;
use crate::shared::lifetime::EscopoPagina;
use crate::shared::numeric::formatar_decimal;
use crate::system::auth::context::use_sessao;

fn classe_celula(status: Option<StatusSemana>) -> &'static str {
    match status {
        Some(StatusSemana::Otimo) => "ssi-grid__cell ssi-grid__cell--otimo",
        Some(StatusSemana::Bom) => "ssi-grid__cell ssi-grid__cell--bom",
        Some(StatusSemana::Ruim) => "ssi-grid__cell ssi-grid__cell--ruim",
        None => "ssi-grid__cell",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SsiTabela() -> impl IntoView {
    let sessao = use_sessao();
    let escopo = StoredValue::new_local(EscopoPagina::montar());

    let grade = RwSignal::new(GradeSsi::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (is_classifying, set_is_classifying) = signal(false);

    let fetch = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::buscar_esqueleto(&cliente, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(linhas) => grade.set(GradeSsi::do_esqueleto(linhas)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    let classificar = move |_| {
        // Single classify request in flight; repeat clicks are no-ops.
        if is_classifying.get_untracked() {
            return;
        }
        set_is_classifying.set(true);
        set_error.set(None);
        let cliente = sessao.cliente();
        let escopo = escopo.get_value();
        let itens = grade.with_untracked(|g| g.itens_para_classificar());
        spawn_local(async move {
            let sinal = escopo.sinal();
            let resultado = api::classificar(&cliente, &itens, Some(&sinal)).await;
            if !escopo.esta_viva() {
                return;
            }
            match resultado {
                Ok(linhas) => grade.update(|g| g.aplicar_classificacao(linhas)),
                // The grid itself was not touched on this path, so a failure
                // needs no rollback; values stay editable.
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_classifying.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Indicadores SSI"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=classificar
                        disabled=move || is_classifying.get() || is_loading.get()
                    >
                        {move || if is_classifying.get() { "Classificando..." } else { "Classificar" }}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="ssi-layout">
                <div class="table">
                    <table class="table__data ssi-grid">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Indicador"</th>
                                {(1..=SEMANAS_POR_CICLO).map(|s| view! {
                                    <th class="table__header-cell">{format!("S{s}")}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || grade.get().linhas.into_iter().enumerate().map(|(i, linha)| {
                                let selecionada = grade.get().selecionada;
                                let sufixo = match linha.unidade {
                                    Unidade::Percentual => "%",
                                    Unidade::Numero => "",
                                };
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=selecionada == Some(i)
                                        on:click=move |_| grade.update(|g| g.selecionar(i))
                                    >
                                        <td class="table__cell ssi-grid__name">
                                            {linha.nome.clone()}{sufixo}
                                        </td>
                                        {linha.semanas.iter().zip(linha.status_semanal.iter()).enumerate().map(|(j, (valor, status))| {
                                            let texto = formatar_decimal(*valor);
                                            let rotulo = status.map(|s| s.rotulo()).unwrap_or("");
                                            view! {
                                                <td class=classe_celula(*status) title=rotulo>
                                                    <input
                                                        type="text"
                                                        class="ssi-grid__input"
                                                        prop:value=texto
                                                        on:change=move |ev| grade.update(|g| {
                                                            g.editar_celula(i, j, &event_target_value(&ev))
                                                        })
                                                    />
                                                </td>
                                            }
                                        }).collect_view()}
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <PainelTextos grade=grade />
            </div>
        </div>
    }
}

/// Side panel with the qualitative texts of the selected indicator.
#[component]
#[allow(non_snake_case)]
fn PainelTextos(grade: RwSignal<GradeSsi>) -> impl IntoView {
    let lista = |titulo: &'static str, itens: Vec<String>| {
        view! {
            <div class="ssi-panel__section">
                <h3 class="ssi-panel__section-title">{titulo}</h3>
                <ul class="ssi-panel__list">
                    {itens.into_iter().map(|item| view! {
                        <li class="ssi-panel__item">{item}</li>
                    }).collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <div class="ssi-panel">
            {move || grade.with(|g| match g.linha_selecionada() {
                Some(linha) => view! {
                    <div class="ssi-panel__body">
                        <h2 class="ssi-panel__title">{linha.nome.clone()}</h2>
                        <p class="ssi-panel__meta">{linha.meta.clone()}</p>
                        {lista("Pontos positivos", linha.textos.positivo.clone())}
                        {lista("Pontos de atenção", linha.textos.negativo.clone())}
                        {lista("Plano de ação", linha.textos.plano_de_acao.clone())}
                    </div>
                }.into_any(),
                None => view! {
                    <div class="ssi-panel__empty">
                        "Selecione um indicador para ver as orientações"
                    </div>
                }.into_any(),
            })}
        </div>
    }
}
