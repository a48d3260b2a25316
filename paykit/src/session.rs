// paykit/src/session.rs
//
// Application-state store holding the current profile. Page containers get
// it by reference instead of re-reading storage on their own.
//

use tracing::{info, warn};

use crate::errors::Result;
use crate::router::SessionGuard;
use crate::storage::{KeyValueStore, ProfileStore};
use crate::types::UserProfile;

#[derive(Debug, Clone)]
pub struct AppStore<S> {
    profiles: ProfileStore<S>,
    current: Option<UserProfile>,
}

impl<S: KeyValueStore> AppStore<S> {
    pub fn new(profiles: ProfileStore<S>) -> Self {
        let current = profiles.stored();
        Self { profiles, current }
    }

    /// The signed-in profile, or the default record when nobody is.
    pub fn profile(&self) -> UserProfile {
        self.current.clone().unwrap_or_default()
    }

    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Session state as last read or written, without touching storage.
    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Re-read the persisted record, picking up changes made elsewhere.
    pub fn reload(&mut self) {
        self.current = self.profiles.stored();
    }

    /// Sign in with an e-mail address, persisting a fresh profile.
    pub fn login(&mut self, email: &str) -> Result<UserProfile> {
        let profile = UserProfile::for_email(email)?;
        self.replace(profile.clone())?;
        info!("Signed in as {}", profile.email);
        Ok(profile)
    }

    /// Sign in with the fixed demo wallet profile.
    pub fn connect_wallet(&mut self) -> Result<UserProfile> {
        let profile = UserProfile::default();
        self.replace(profile.clone())?;
        info!("Connected demo wallet {}", profile.wallet);
        Ok(profile)
    }

    /// Read-modify-write of the whole record.
    pub fn update<F>(&mut self, change: F) -> Result<UserProfile>
    where
        F: FnOnce(&mut UserProfile),
    {
        let mut profile = self.profiles.load();
        change(&mut profile);
        self.replace(profile.clone())?;
        Ok(profile)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        self.profiles.clear()?;
        info!("Session cleared");
        Ok(())
    }

    fn replace(&mut self, profile: UserProfile) -> Result<()> {
        // The in-memory copy wins even if persisting fails, so the UI keeps
        // showing what the user just chose.
        self.current = Some(profile.clone());
        if let Err(e) = self.profiles.save(&profile) {
            warn!("Failed to persist profile: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

impl<S: KeyValueStore> SessionGuard for AppStore<S> {
    /// Presence of a stored profile is taken as a valid session. Nothing is
    /// verified against the backend.
    fn is_authenticated(&self) -> bool {
        self.profiles.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> AppStore<MemoryStore> {
        AppStore::new(ProfileStore::new(MemoryStore::new()))
    }

    #[test]
    fn test_new_store_is_signed_out() {
        let app = store();
        assert!(!app.is_authenticated());
        assert!(app.current().is_none());
        assert_eq!(app.profile(), UserProfile::default());
    }

    #[test]
    fn test_login_persists_profile() {
        let backend = MemoryStore::new();
        let mut app = AppStore::new(ProfileStore::new(backend.clone()));
        let profile = app.login("dana@example.com").unwrap();
        assert_eq!(profile.name, "Dana");
        assert!(app.is_authenticated());

        // A second store over the same backend sees the same session.
        let other = AppStore::new(ProfileStore::new(backend));
        assert_eq!(other.current(), Some(&profile));
    }

    #[test]
    fn test_invalid_login_keeps_session_closed() {
        let mut app = store();
        assert!(app.login("nobody").is_err());
        assert!(!app.is_authenticated());
    }

    #[test]
    fn test_update_and_logout() {
        let mut app = store();
        app.connect_wallet().unwrap();
        let updated = app.update(|p| p.language = "German".to_string()).unwrap();
        assert_eq!(updated.language, "German");
        assert_eq!(app.profile().language, "German");

        app.logout().unwrap();
        assert!(!app.is_authenticated());
        assert!(app.current().is_none());
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let backend = MemoryStore::new();
        let mut app = AppStore::new(ProfileStore::new(backend.clone()));
        assert!(!app.is_signed_in());

        let mut other = AppStore::new(ProfileStore::new(backend));
        other.connect_wallet().unwrap();
        assert!(!app.is_signed_in());

        app.reload();
        assert!(app.is_signed_in());

        other.logout().unwrap();
        assert!(app.is_signed_in());
        app.reload();
        assert!(!app.is_signed_in());
    }
}
