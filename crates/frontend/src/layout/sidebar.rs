use leptos::prelude::*;

use super::nav::{use_nav, Rota};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {Rota::TODAS
                    .into_iter()
                    .map(|rota| {
                        view! {
                            <li class="sidebar__item">
                                <button
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || nav.rota.get() == rota
                                    on:click=move |_| nav.ir_para(rota)
                                >
                                    {icon(rota.icone())}
                                    <span class="sidebar__label">{rota.titulo()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
