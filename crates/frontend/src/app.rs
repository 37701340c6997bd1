use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessaoProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessaoProvider>
            <AppRoutes />
        </SessaoProvider>
    }
}
