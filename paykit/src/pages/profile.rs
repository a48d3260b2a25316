// paykit/src/pages/profile.rs
//
// Profile settings - every change is an immediate read-modify-write of the
// persisted record.
//

use crate::errors::{PayMindError, Result};
use crate::router::Route;
use crate::session::AppStore;
use crate::storage::KeyValueStore;
use crate::types::{UserProfile, SUPPORTED_LANGUAGES};

pub fn toggle_notifications<S: KeyValueStore>(store: &mut AppStore<S>) -> Result<UserProfile> {
    store.update(|profile| profile.notifications = !profile.notifications)
}

pub fn change_language<S: KeyValueStore>(store: &mut AppStore<S>, language: &str) -> Result<UserProfile> {
    if !SUPPORTED_LANGUAGES.contains(&language) {
        return Err(PayMindError::ValidationError(format!(
            "unsupported language: {}",
            language
        )));
    }
    store.update(|profile| profile.language = language.to_string())
}

/// Language after `current` in the supported list, wrapping around.
pub fn next_language(current: &str) -> &'static str {
    let idx = SUPPORTED_LANGUAGES
        .iter()
        .position(|l| *l == current)
        .map(|i| i + 1)
        .unwrap_or(0);
    SUPPORTED_LANGUAGES[idx % SUPPORTED_LANGUAGES.len()]
}

/// Forget the session. The caller navigates to the returned route.
pub fn disconnect<S: KeyValueStore>(store: &mut AppStore<S>) -> Result<Route> {
    store.logout()?;
    Ok(Route::Login)
}
