// services/paymind-dash/src/app.rs
//
// PayMind Dashboard - Main Application Component and routes
//

use leptos::*;
use leptos_router::{use_location, use_navigate, Redirect, Route, Router, Routes};
use paykit::config::ClientConfig;
use paykit::router::{self, Resolution};

use crate::components::Sidebar;
use crate::pages::{ChatPage, DashboardPage, Landing, LoginPage, ProfilePage, TransactionsPage};
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(ClientConfig::from_build_env());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=move || view! { <Landing state=state /> } />
                <Route path="/login" view=move || view! { <LoginPage state=state /> } />
                <Route
                    path="/dashboard"
                    view=move || view! { <Protected state=state><DashboardPage state=state /></Protected> }
                />
                <Route
                    path="/chat"
                    view=move || view! { <Protected state=state><ChatPage state=state /></Protected> }
                />
                <Route
                    path="/transactions"
                    view=move || view! { <Protected state=state><TransactionsPage /></Protected> }
                />
                <Route
                    path="/profile"
                    view=move || view! { <Protected state=state><ProfilePage state=state /></Protected> }
                />
                <Route path="/*any" view=|| view! { <Redirect path=router::Route::Landing.path() /> } />
            </Routes>
        </Router>
    }
}

/// Authenticated layout. Re-checks the session whenever the path or the
/// profile changes and redirects to the login page once it is gone.
#[component]
fn Protected(state: AppState, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |_: ()| {
        state.logout();
        navigate(router::Route::Login.path(), Default::default());
    });

    // Re-renders only when the gate decision itself flips
    let resolution = create_memo(move |_| state.resolve(&location.pathname.get()));

    move || {
        match resolution.get() {
            Resolution::Render(_) => view! {
                <div class="paymind-app layout">
                    <Sidebar state=state on_logout=on_logout />
                    <main class="content">{children()}</main>
                </div>
            }
            .into_view(),
            Resolution::Redirect(target) => {
                log::debug!("Redirecting to {}", target.path());
                view! { <Redirect path=target.path() /> }.into_view()
            }
        }
    }
}
