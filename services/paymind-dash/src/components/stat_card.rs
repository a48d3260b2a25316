// services/paymind-dash/src/components/stat_card.rs
//
// PayMind Dashboard - Summary stat tile
//

use leptos::*;
use paykit::pages::dashboard::{StatCard, Trend};

#[component]
pub fn StatTile(card: StatCard) -> impl IntoView {
    let trend_class = match card.trend {
        Trend::Positive => "stat-note trend-up",
        Trend::Neutral => "stat-note",
        Trend::Negative => "stat-note trend-down",
    };

    view! {
        <div class="stat-card">
            <span class="stat-title">{card.title}</span>
            <span class="stat-value">{card.value}</span>
            <span class=trend_class>{card.note}</span>
        </div>
    }
}
