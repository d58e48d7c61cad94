//! Admin Session
//!
//! Explicit credential object for authenticated admin calls. The admin page
//! is the single owner of the session lifecycle: login from the gate form,
//! restore from session storage on reload, logout from the console header.
//! API functions that mutate data take an `&AdminSession` instead of reading
//! an ambient token.

use leptos::*;

const SESSION_STORAGE_KEY: &str = "pawhaven_admin_token";

/// Opaque admin credential attached to mutation requests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSession {
    token: String,
}

impl AdminSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    /// Value for the `admin_token` request header
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Reactive session slot owned by the admin page
#[derive(Clone, Copy)]
pub struct SessionState {
    session: RwSignal<Option<AdminSession>>,
}

impl SessionState {
    /// Create the session slot, restoring a previously saved token if any
    pub fn restore() -> Self {
        let saved = read_saved_token();
        Self {
            session: create_rw_signal(saved.map(AdminSession::new)),
        }
    }

    pub fn login(&self, token: &str) {
        write_saved_token(Some(token));
        self.session.set(Some(AdminSession::new(token)));
    }

    pub fn logout(&self) {
        write_saved_token(None);
        self.session.set(None);
    }

    /// Current credentials, if logged in
    pub fn current(&self) -> Option<AdminSession> {
        self.session.get()
    }
}

fn read_saved_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.session_storage().ok()??;
    storage.get_item(SESSION_STORAGE_KEY).ok()?
}

fn write_saved_token(token: Option<&str>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = match token {
                Some(token) => storage.set_item(SESSION_STORAGE_KEY, token),
                None => storage.remove_item(SESSION_STORAGE_KEY),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_exposes_the_raw_token() {
        let session = AdminSession::new("tok-123");
        assert_eq!(session.token(), "tok-123");
    }
}
