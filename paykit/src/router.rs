// paykit/src/router.rs
//
// Route table and the client-side authentication gate.
//

/// Anything that can say whether a session is open. The local store's
/// presence check is one implementation; a token-validating guard can
/// replace it without touching the routes.
pub trait SessionGuard {
    fn is_authenticated(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Dashboard,
    Chat,
    Transactions,
    Profile,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Landing,
        Route::Login,
        Route::Dashboard,
        Route::Chat,
        Route::Transactions,
        Route::Profile,
    ];

    /// Entries shown in the authenticated layout's sidebar.
    pub const SIDEBAR: [Route; 4] = [
        Route::Dashboard,
        Route::Chat,
        Route::Transactions,
        Route::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Chat => "/chat",
            Route::Transactions => "/transactions",
            Route::Profile => "/profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Chat => "AI Assistant",
            Route::Transactions => "Transactions",
            Route::Profile => "Profile",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let trimmed = path.trim_end_matches('/');
        let normalised = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|route| route.path() == normalised)
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Landing | Route::Login)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

/// Map a path to what should be shown: unknown paths go to the landing page,
/// protected ones to login when the guard is closed.
pub fn resolve<G: SessionGuard + ?Sized>(path: &str, guard: &G) -> Resolution {
    match Route::from_path(path) {
        None => Resolution::Redirect(Route::Landing),
        Some(route) if route.is_protected() && !guard.is_authenticated() => {
            Resolution::Redirect(Route::Login)
        }
        Some(route) => Resolution::Render(route),
    }
}
