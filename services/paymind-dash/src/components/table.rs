// services/paymind-dash/src/components/table.rs
//
// PayMind Dashboard - Transaction table
//

use leptos::*;
use paykit::format::format_usdc;
use paykit::types::{Transaction, TransactionStatus};

#[component]
pub fn TransactionTable(
    #[prop(into)] rows: Signal<Vec<Transaction>>,
    #[prop(optional)] empty_message: Option<&'static str>,
) -> impl IntoView {
    let is_empty = move || rows.with(|r| r.is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=move || view! {
                <p class="table-empty">{empty_message.unwrap_or("No transactions yet")}</p>
            }
        >
            <table class="tx-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Date"</th>
                        <th>"Type"</th>
                        <th>"Recipient"</th>
                        <th class="num">"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|tx| tx.id.clone()
                        children=move |tx: Transaction| {
                            view! {
                                <tr>
                                    <td class="mono">{tx.id.clone()}</td>
                                    <td>{tx.date.clone()}</td>
                                    <td>{tx.kind.to_string()}</td>
                                    <td class="mono">{tx.recipient.clone()}</td>
                                    <td class="num">{format_usdc(tx.amount)}</td>
                                    <td><StatusBadge status=tx.status /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[component]
pub fn StatusBadge(status: TransactionStatus) -> impl IntoView {
    let (class, icon) = match status {
        TransactionStatus::Completed => ("badge badge-completed", "✓"),
        TransactionStatus::Pending => ("badge badge-pending", "○"),
        TransactionStatus::Failed => ("badge badge-failed", "✗"),
    };

    view! {
        <span class=class>{icon}" "{status.to_string()}</span>
    }
}
