// paykit/src/pages/login.rs
//
// Login form and the landing page's one-click wallet connect.
//

use crate::router::Route;
use crate::session::AppStore;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub error: Option<String>,
}

impl LoginForm {
    /// Sign in with the typed address. Returns where to go next on success.
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut AppStore<S>) -> Option<Route> {
        match store.login(&self.email) {
            Ok(_) => {
                self.error = None;
                Some(Route::Dashboard)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Landing-page "Connect Wallet": sign in with the demo profile.
pub fn connect_wallet<S: KeyValueStore>(store: &mut AppStore<S>) -> Option<Route> {
    match store.connect_wallet() {
        Ok(_) => Some(Route::Dashboard),
        Err(e) => {
            tracing::warn!("Wallet connect failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::SessionGuard;
    use crate::storage::{MemoryStore, ProfileStore};
    use crate::types::DEMO_WALLET;

    fn store() -> AppStore<MemoryStore> {
        AppStore::new(ProfileStore::new(MemoryStore::new()))
    }

    #[test]
    fn test_login_routes_to_dashboard() {
        let mut store = store();
        let mut form = LoginForm {
            email: "erin@paymind.io".to_string(),
            error: None,
        };
        assert_eq!(form.submit(&mut store), Some(Route::Dashboard));
        assert_eq!(store.profile().name, "Erin");
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_bad_email_sets_error() {
        let mut store = store();
        let mut form = LoginForm {
            email: "erin".to_string(),
            error: None,
        };
        assert_eq!(form.submit(&mut store), None);
        assert!(form.error.is_some());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_connect_wallet_uses_demo_profile() {
        let mut store = store();
        assert_eq!(connect_wallet(&mut store), Some(Route::Dashboard));
        assert_eq!(store.profile().wallet, DEMO_WALLET);
    }
}
