// services/paymind-dash/src/pages/dashboard.rs
//
// PayMind Dashboard - Overview: stat tiles, recent payments, send-payment modal
//

use leptos::*;
use leptos_router::A;
use paykit::pages::dashboard::{
    self, load_recent, load_stats, refresh_stats, welcome_title, Loaded, PaymentDraft,
    PaymentModal, MIN_PAYMENT_AMOUNT,
};
use paykit::router::Route;
use paykit::types::{DashboardStats, Transaction};

use crate::components::{Card, StatTile, TransactionTable};
use crate::state::AppState;

#[component]
pub fn DashboardPage(state: AppState) -> impl IntoView {
    let stats = create_rw_signal(None::<Loaded<DashboardStats>>);
    let recent = create_rw_signal(None::<Loaded<Vec<Transaction>>>);
    let modal = create_rw_signal(PaymentModal::default());
    let draft = create_rw_signal(PaymentDraft::default());

    // Both fetches start on mount and land independently
    let backend = state.backend.get_value();
    spawn_local(async move {
        let loaded = load_stats(backend.as_ref()).await;
        stats.set(Some(loaded));
    });
    let backend = state.backend.get_value();
    let limit = state.recent_limit();
    spawn_local(async move {
        let loaded = load_recent(backend.as_ref(), limit).await;
        recent.set(Some(loaded));
    });

    let cards = move || {
        stats.with(|s| s.as_ref().map(|l| dashboard::stat_cards(&l.value)).unwrap_or_default())
    };
    let recent_rows = Signal::derive(move || {
        recent.with(|r| r.as_ref().map(|l| l.value.clone()).unwrap_or_default())
    });
    let showing_fallback = move || {
        stats.with(|s| s.as_ref().is_some_and(|l| l.is_fallback()))
            || recent.with(|r| r.as_ref().is_some_and(|l| l.is_fallback()))
    };

    let on_submit = Callback::new(move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        modal.update(|m| started = m.begin_submit());
        if !started {
            return;
        }

        let backend = state.backend.get_value();
        let current = draft.get_untracked();
        spawn_local(async move {
            let outcome = dashboard::submit_payment(backend.as_ref(), &current).await;
            let mut refresh = false;
            modal.update(|m| refresh = m.finish(&outcome));
            if refresh {
                if let Some(fresh) = refresh_stats(backend.as_ref()).await {
                    stats.set(Some(Loaded::live(fresh)));
                }
            }
        });
    });

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <h2 class="page-title">
                    {move || state.profile.with(|p| welcome_title(&p.clone().unwrap_or_default()))}
                </h2>
                <Show when=showing_fallback fallback=|| ()>
                    <span class="mode-badge">"Offline data"</span>
                </Show>
                <button class="btn btn-primary" on:click=move |_| modal.update(|m| m.open())>
                    "Send Payment"
                </button>
            </div>

            <div class="stats-grid">
                <Show
                    when=move || stats.with(|s| s.is_some())
                    fallback=|| view! { <p class="loading">"Loading stats..."</p> }
                >
                    <For
                        each=cards
                        key=|card| card.title
                        children=|card| view! { <StatTile card=card /> }
                    />
                </Show>
            </div>

            <div class="dashboard-grid">
                <Card title="Recent Transactions" class="recent-panel">
                    <Show
                        when=move || recent.with(|r| r.is_some())
                        fallback=|| view! { <p class="loading">"Loading..."</p> }
                    >
                        <TransactionTable rows=recent_rows />
                    </Show>
                </Card>

                <Card title="Order Status" class="order-panel">
                    <ul class="order-steps">
                        <li class="step done">"Contract signed"</li>
                        <li class="step done">"Deposit received"</li>
                        <li class="step active">"Awaiting inspection"</li>
                        <li class="step">"Final transfer"</li>
                    </ul>
                </Card>

                <Card title="Quick Actions" class="actions-panel">
                    <div class="quick-actions">
                        <A href=Route::Chat.path() class="btn btn-ghost">"Ask the AI assistant"</A>
                        <A href=Route::Transactions.path() class="btn btn-ghost">"View all transactions"</A>
                    </div>
                </Card>
            </div>

            <Show when=move || modal.with(|m| m.open) fallback=|| ()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <Show
                            when=move || !modal.with(|m| m.succeeded)
                            fallback=move || view! {
                                <div class="modal-success">
                                    <h3>"Payment sent"</h3>
                                    <p>"Your USDC transfer has been submitted."</p>
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| modal.update(|m| m.acknowledge())
                                    >
                                        "Done"
                                    </button>
                                </div>
                            }
                        >
                            <PaymentForm draft=draft modal=modal on_submit=on_submit />
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PaymentForm(
    draft: RwSignal<PaymentDraft>,
    modal: RwSignal<PaymentModal>,
    on_submit: Callback<ev::SubmitEvent>,
) -> impl IntoView {
    let submitting = move || modal.with(|m| m.submitting);

    view! {
        <form class="payment-form" on:submit=move |ev: ev::SubmitEvent| on_submit.call(ev)>
            <h3>"Send USDC"</h3>

            <label for="recipient">"Recipient"</label>
            <input
                id="recipient"
                type="text"
                class="mono"
                prop:value=move || draft.with(|d| d.recipient.clone())
                on:input=move |ev| draft.update(|d| d.recipient = event_target_value(&ev))
            />

            <label for="amount">"Amount (USDC)"</label>
            <input
                id="amount"
                type="number"
                step="0.01"
                min=MIN_PAYMENT_AMOUNT.to_string()
                prop:value=move || draft.with(|d| d.amount.clone())
                on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
            />

            <label for="note">"Note"</label>
            <input
                id="note"
                type="text"
                placeholder="Optional"
                prop:value=move || draft.with(|d| d.note.clone())
                on:input=move |ev| draft.update(|d| d.note = event_target_value(&ev))
            />

            {move || modal.with(|m| m.error.clone()).map(|e| view! {
                <p class="form-error">{e}</p>
            })}

            <div class="modal-actions">
                <button
                    type="button"
                    class="btn btn-ghost"
                    disabled=submitting
                    on:click=move |_| modal.update(|m| m.cancel())
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </form>
    }
}
