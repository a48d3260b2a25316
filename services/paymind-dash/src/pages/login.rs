// services/paymind-dash/src/pages/login.rs
//
// PayMind Dashboard - E-mail sign-in
//

use leptos::*;
use leptos_router::{use_navigate, A};
use paykit::pages::login::LoginForm;

use crate::components::Card;
use crate::state::AppState;

#[component]
pub fn LoginPage(state: AppState) -> impl IntoView {
    let form = create_rw_signal(LoginForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = form.get_untracked();
        let next = state.with_store(|store| current.submit(store)).flatten();
        form.set(current);
        if let Some(route) = next {
            navigate(route.path(), Default::default());
        }
    };

    view! {
        <div class="paymind-app login">
            <Card title="Sign in to PayMind" class="login-card">
                <form on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error.clone()).map(|e| view! {
                        <p class="form-error">{e}</p>
                    })}
                    <button type="submit" class="btn btn-primary">"Sign In"</button>
                </form>
                <A href="/" class="back-link">"← Back"</A>
            </Card>
        </div>
    }
}
