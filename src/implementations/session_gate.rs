use log::{debug, error, info, warn};

use crate::errors::AuthError;
use crate::implementations::config::AdminCredentials;
use crate::traits::SessionStore;

/// Key the flag is persisted under
pub const SESSION_FLAG_KEY: &str = "adminAuthenticated";

/// Client-side admin gate.
///
/// This is advisory UI state only: it decides whether admin commands are
/// offered, while the backend remains responsible for authorising the
/// requests those commands send. There is no expiry, hashing or lockout.
pub struct SessionGate<S: SessionStore> {
    store: S,
    credentials: Option<AdminCredentials>,
    authenticated: bool,
}

impl<S: SessionStore> SessionGate<S> {
    /// Open the gate over a store, reading the persisted flag once
    pub fn open(store: S, credentials: Option<AdminCredentials>) -> Self {
        let authenticated = match store.get(SESSION_FLAG_KEY) {
            Ok(Some(value)) => value == "true",
            Ok(None) => false,
            Err(e) => {
                warn!("Could not read session flag, starting signed out: {}", e);
                false
            }
        };
        debug!("Session gate opened, authenticated = {}", authenticated);
        Self {
            store,
            credentials,
            authenticated,
        }
    }

    /// Succeeds only for the exact configured pair; comparison is case-sensitive
    pub fn login(&mut self, login_id: &str, password: &str) -> Result<(), AuthError> {
        let credentials = self.credentials.as_ref().ok_or(AuthError::NotConfigured)?;

        if login_id.is_empty()
            || password.is_empty()
            || login_id != credentials.login_id
            || password != credentials.password
        {
            warn!("Admin login rejected for {:?}", login_id);
            return Err(AuthError::InvalidCredentials);
        }

        self.store
            .set(SESSION_FLAG_KEY, "true")
            .map_err(|e| AuthError::Persist(e.to_string()))?;
        self.authenticated = true;
        info!("Admin {} signed in", login_id);
        Ok(())
    }

    /// Clear both the persisted flag and in-memory state; safe to repeat.
    ///
    /// If the flag cannot be removed it is overwritten with `"false"`, which
    /// the next `open` reads as signed out.
    pub fn logout(&mut self) {
        self.authenticated = false;
        if let Err(e) = self.store.remove(SESSION_FLAG_KEY) {
            warn!("Failed to remove session flag, overwriting it: {}", e);
            if let Err(e) = self.store.set(SESSION_FLAG_KEY, "false") {
                error!("Failed to clear persisted session flag: {}", e);
            }
        }
        info!("Admin signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
