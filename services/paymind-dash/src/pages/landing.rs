// services/paymind-dash/src/pages/landing.rs
//
// PayMind Dashboard - Public landing page
//

use leptos::*;
use leptos_router::use_navigate;
use paykit::pages::login::connect_wallet;

use crate::components::{Card, Navbar};
use crate::state::AppState;

const FEATURES: [(&str, &str); 3] = [
    ("AI Payment Commands", "Describe a payment in plain English and let the assistant schedule it."),
    ("Conditional Transfers", "Release USDC only when a contract is signed or a date arrives."),
    ("Real Estate Ready", "Rent, deposits and insurance handled on one dashboard."),
];

#[component]
pub fn Landing(state: AppState) -> impl IntoView {
    let navigate = use_navigate();

    let on_connect = Callback::new(move |_: ()| {
        if let Some(Some(route)) = state.with_store(connect_wallet) {
            navigate(route.path(), Default::default());
        }
    });

    view! {
        <div class="paymind-app landing">
            <Navbar on_connect=on_connect />

            <main class="hero">
                <h2 class="hero-title">"Payments that understand you"</h2>
                <p class="hero-subtitle">
                    "Automate USDC payments with natural-language commands."
                </p>
                <button class="btn btn-primary btn-large" on:click=move |_| on_connect.call(())>
                    "Connect Wallet"
                </button>

                <div class="feature-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| view! {
                            <Card title=title class="feature">
                                <p>{body}</p>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}
