// services/paymind-dash/src/pages/profile.rs
//
// PayMind Dashboard - Profile settings
//

use leptos::*;
use leptos_router::use_navigate;
use paykit::format::format_usdc;
use paykit::pages::profile;
use paykit::types::SUPPORTED_LANGUAGES;

use crate::components::Card;
use crate::state::AppState;

#[component]
pub fn ProfilePage(state: AppState) -> impl IntoView {
    let navigate = use_navigate();
    let error = create_rw_signal(None::<String>);

    let current = move || state.profile.get().unwrap_or_default();

    let record = move |result: Option<paykit::Result<paykit::types::UserProfile>>| match result {
        Some(Err(e)) => error.set(Some(e.to_string())),
        _ => error.set(None),
    };

    let on_disconnect = move |_| match state.with_store(profile::disconnect) {
        Some(Ok(route)) => navigate(route.path(), Default::default()),
        Some(Err(e)) => error.set(Some(e.to_string())),
        None => {}
    };

    view! {
        <div class="page profile">
            <div class="page-header">
                <h2 class="page-title">"Profile"</h2>
            </div>

            <Card title="Account" class="profile-card">
                <dl class="profile-fields">
                    <dt>"Name"</dt>
                    <dd>{move || current().name}</dd>
                    <dt>"Email"</dt>
                    <dd>{move || current().email}</dd>
                    <dt>"Wallet"</dt>
                    <dd class="mono">{move || current().wallet}</dd>
                    <dt>"Balance"</dt>
                    <dd>{move || format_usdc(current().balance)}</dd>
                </dl>
            </Card>

            <Card title="Preferences" class="profile-card">
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || current().notifications
                        on:change=move |_| record(state.with_store(profile::toggle_notifications))
                    />
                    " Payment notifications"
                </label>

                <label for="language">"Language"</label>
                <select
                    id="language"
                    on:change=move |ev| {
                        let language = event_target_value(&ev);
                        record(state.with_store(|store| profile::change_language(store, &language)))
                    }
                >
                    {SUPPORTED_LANGUAGES
                        .into_iter()
                        .map(|lang| view! {
                            <option value=lang selected=move || current().language == lang>
                                {lang}
                            </option>
                        })
                        .collect_view()}
                </select>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </Card>

            <Card title="Wallet" class="profile-card">
                <button class="btn btn-danger" on:click=on_disconnect>
                    "Disconnect Wallet"
                </button>
            </Card>
        </div>
    }
}
