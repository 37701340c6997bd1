pub mod nav;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Sidebar />

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
