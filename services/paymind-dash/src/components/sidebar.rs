// services/paymind-dash/src/components/sidebar.rs
//
// PayMind Dashboard - Authenticated navigation
//

use leptos::*;
use leptos_router::A;
use paykit::format::short_address;
use paykit::router::Route;

use crate::state::AppState;

#[component]
pub fn Sidebar(state: AppState, on_logout: Callback<()>) -> impl IntoView {
    let wallet = move || {
        state
            .profile
            .with(|p| p.as_ref().map(|p| short_address(&p.wallet)).unwrap_or_default())
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="header-icon">"◈"</span>
                <span class="sidebar-title">"PayMind"</span>
            </div>

            <nav class="sidebar-nav">
                {Route::SIDEBAR
                    .into_iter()
                    .map(|route| view! {
                        <A href=route.path() active_class="active" class="sidebar-link">
                            {route.label()}
                        </A>
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <Show when=move || state.is_mock.get() fallback=|| ()>
                    <span class="mode-badge">"DEMO"</span>
                </Show>
                <span class="sidebar-wallet mono">{wallet}</span>
                <button class="btn btn-ghost" on:click=move |_| on_logout.call(())>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
