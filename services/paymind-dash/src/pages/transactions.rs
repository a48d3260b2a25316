// services/paymind-dash/src/pages/transactions.rs
//
// PayMind Dashboard - Filterable transaction history
//

use leptos::*;
use paykit::pages::transactions::{Filter, TransactionsModel, EMPTY_MESSAGE};
use paykit::types::{TransactionStatus, TransactionType};

use crate::components::{Card, StatusBadge, TransactionTable};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let model = create_rw_signal(TransactionsModel::from_fixtures());

    let rows = Signal::derive(move || model.with(|m| m.visible().to_vec()));
    let summary = move || model.with(|m| m.summary());

    view! {
        <div class="page transactions">
            <div class="page-header">
                <h2 class="page-title">"Transactions"</h2>
            </div>

            <div class="filter-bar">
                <select on:change=move |ev| {
                    match event_target_value(&ev).parse::<Filter<TransactionStatus>>() {
                        Ok(f) => model.update(|m| m.set_status_filter(f)),
                        Err(e) => log::warn!("Ignoring status filter: {}", e),
                    }
                }>
                    {Filter::options(&TransactionStatus::ALL)
                        .into_iter()
                        .map(|f| view! {
                            <option value=f.to_string()>{filter_label(&f, "All Statuses")}</option>
                        })
                        .collect_view()}
                </select>

                <select on:change=move |ev| {
                    match event_target_value(&ev).parse::<Filter<TransactionType>>() {
                        Ok(f) => model.update(|m| m.set_type_filter(f)),
                        Err(e) => log::warn!("Ignoring type filter: {}", e),
                    }
                }>
                    {Filter::options(&TransactionType::ALL)
                        .into_iter()
                        .map(|f| view! {
                            <option value=f.to_string()>{filter_label(&f, "All Types")}</option>
                        })
                        .collect_view()}
                </select>

                <span class="filter-summary">{summary}</span>
            </div>

            <Card class="tx-panel">
                <TransactionTable rows=rows empty_message=EMPTY_MESSAGE />
            </Card>

            <div class="status-summary">
                {TransactionStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <div class="status-tile">
                            <StatusBadge status=status />
                            <span class="status-count">
                                {move || model.with(|m| m.counts().get(status))}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn filter_label<T: std::fmt::Display>(filter: &Filter<T>, all: &'static str) -> String {
    match filter {
        Filter::All => all.to_string(),
        Filter::Only(value) => value.to_string(),
    }
}
