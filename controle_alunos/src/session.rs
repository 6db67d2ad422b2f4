//! Login state shared by every screen.
//!
//! The token lives in a signal provided as context and is mirrored to the
//! browser's local storage under [`TOKEN_KEY`] so it survives reloads.

use leptos::logging::warn;
use leptos::prelude::*;

pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Copy, Debug)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            token: RwSignal::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Reloads the token from local storage. Browser only.
    pub fn restore(&self) -> Option<String> {
        let token = local_storage()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty());
        self.token.set(token.clone());
        token
    }

    pub fn sign_in(&self, token: String) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, &token).is_err() {
                    warn!("Could not persist session token");
                }
            }
            None => warn!("Local storage unavailable, session will not survive a reload"),
        }
        self.token.set(Some(token));
    }

    pub fn sign_out(&self) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(TOKEN_KEY).is_err() {
                warn!("Could not remove session token from local storage");
            }
        }
        self.token.set(None);
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

pub fn provide_session() -> Session {
    let session = Session::new();
    provide_context(session);
    session
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}
