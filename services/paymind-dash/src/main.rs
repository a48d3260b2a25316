// services/paymind-dash/src/main.rs
//
// PayMind Dashboard - AI-driven USDC payments in the browser
//
// Build with: trunk serve (PAYMIND_API_URL / PAYMIND_OFFLINE are read at compile time)

mod app;
mod components;
mod pages;
mod state;
mod storage;

use leptos::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("PayMind dashboard starting...");

    mount_to_body(|| {
        view! { <app::App /> }
    });
}
