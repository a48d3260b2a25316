// services/paymind-dash/src/components/card.rs
//
// PayMind Dashboard - Panel container
//

use leptos::*;

#[component]
pub fn Card(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("panel {}", class)>
            {title.map(|t| view! { <h2 class="panel-title">{t}</h2> })}
            {children()}
        </section>
    }
}
