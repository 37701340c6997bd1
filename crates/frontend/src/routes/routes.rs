use leptos::prelude::*;

use crate::domain::a001_mentorado::ui::list::MentoradoList;
use crate::domain::a002_ssi::ui::metas::MetasEditor;
use crate::domain::a002_ssi::ui::tabela::SsiTabela;
use crate::domain::a003_vaga_link::ui::list::VagaLinkList;
use crate::domain::a004_agente::ui::chat::AgenteChat;
use crate::layout::nav::{use_nav, NavService, Rota};
use crate::layout::Shell;
use crate::system::auth::context::use_sessao;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let nav = use_nav();

    view! {
        <Shell
            center=move || {
                match nav.rota.get() {
                    Rota::Mentorados => view! { <MentoradoList /> }.into_any(),
                    Rota::GradeSsi => view! { <SsiTabela /> }.into_any(),
                    Rota::Metas => view! { <MetasEditor /> }.into_any(),
                    Rota::Vagas => view! { <VagaLinkList /> }.into_any(),
                    Rota::Chat => view! { <AgenteChat /> }.into_any(),
                }
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let sessao = use_sessao();
    provide_context(NavService::new());

    view! {
        <Show
            when=move || sessao.autenticado()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
