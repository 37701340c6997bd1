//! Application top bar: brand, active page title, session info, logout.

use leptos::prelude::*;

use super::nav::use_nav;
use crate::shared::icons::icon;
use crate::system::auth::context::use_sessao;

#[component]
pub fn TopHeader() -> impl IntoView {
    let nav = use_nav();
    let sessao = use_sessao();

    let logout = move |_| {
        sessao.sair();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Mentoria"</span>
                <span class="top-header__subtitle">
                    {move || nav.rota.get().titulo()}
                </span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">{move || sessao.nome_exibicao()}</span>
                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
