// services/paymind-dash/src/state.rs
//
// PayMind Dashboard - Shared application state
//

use std::rc::Rc;

use leptos::*;
use paykit::api::{ApiClient, DashboardBackend};
use paykit::chat::{responder_for, ChatResponder};
use paykit::config::ClientConfig;
use paykit::mock::MockBackend;
use paykit::router::{resolve, Resolution};
use paykit::session::AppStore;
use paykit::storage::ProfileStore;
use paykit::types::UserProfile;

use crate::storage::LocalStorage;

/// Handed to every page. All fields are signals or stored values, so the
/// struct is Copy and can move into closures freely.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<ClientConfig>,

    // Persisted session; `profile` mirrors it for rendering
    store: StoredValue<AppStore<LocalStorage>>,
    pub profile: RwSignal<Option<UserProfile>>,

    pub backend: StoredValue<Rc<dyn DashboardBackend>>,
    pub responder: StoredValue<Rc<dyn ChatResponder>>,

    // Data source mode
    pub is_mock: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        let store = AppStore::new(ProfileStore::with_key(LocalStorage, &config.storage_key));
        let profile = store.current().cloned();

        let backend: Rc<dyn DashboardBackend> = if config.offline {
            Rc::new(MockBackend::new())
        } else {
            Rc::new(ApiClient::from_config(&config))
        };
        let responder: Rc<dyn ChatResponder> = Rc::from(responder_for(&config));

        log::info!(
            "Backend {} (chat: {})",
            if config.offline { "offline fixtures" } else { config.api_base_url.as_str() },
            responder.name()
        );

        Self {
            is_mock: create_rw_signal(config.offline),
            config: store_value(config),
            store: store_value(store),
            profile: create_rw_signal(profile),
            backend: store_value(backend),
            responder: store_value(responder),
        }
    }

    /// Run `f` against the session store and re-publish the current profile.
    /// None only if the store has been disposed.
    pub fn with_store<O>(&self, f: impl FnOnce(&mut AppStore<LocalStorage>) -> O) -> Option<O> {
        let profile = self.profile;
        self.store.try_update_value(|store| {
            let out = f(store);
            profile.set(store.current().cloned());
            out
        })
    }

    /// Gate decision for `path`. Reads the profile signal so callers inside
    /// a reactive closure re-run on sign-in and sign-out.
    pub fn resolve(&self, path: &str) -> Resolution {
        self.profile.with(|_| ());
        self.store.with_value(|store| resolve(path, store))
    }

    pub fn logout(&self) {
        if let Some(Err(e)) = self.with_store(|store| store.logout()) {
            log::warn!("Logout failed to clear storage: {}", e);
        }
    }

    pub fn recent_limit(&self) -> usize {
        self.config.with_value(|c| c.recent_limit)
    }
}
