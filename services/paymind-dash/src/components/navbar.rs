// services/paymind-dash/src/components/navbar.rs
//
// PayMind Dashboard - Public top bar
//

use leptos::*;
use leptos_router::A;

#[component]
pub fn Navbar(on_connect: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"◈"</span>
                <h1 class="header-title">"PayMind"</h1>
                <span class="header-subtitle">"AI-Powered USDC Payments"</span>
            </div>

            <nav class="header-actions">
                <A href="/login" class="btn btn-ghost">"Sign In"</A>
                <button class="btn btn-primary" on:click=move |_| on_connect.call(())>
                    "Connect Wallet"
                </button>
            </nav>
        </header>
    }
}
