//! Session State Store
//!
//! The token/user pair persisted in localStorage, mirrored into a
//! reactive store for guards and header state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    /// Seed from whatever localStorage holds right now.
    pub fn load() -> Self {
        match read_session() {
            Some((token, user)) => SessionState {
                token: Some(token),
                user: Some(user),
            },
            None => SessionState::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Persist a fresh login and mirror it into the store.
pub fn store_login(store: &SessionStore, token: String, user: User) {
    write_session(&token, &user);
    store.token().set(Some(token));
    store.user().set(Some(user));
}

/// Drop the persisted session and clear the store.
pub fn store_logout(store: &SessionStore) {
    clear_session();
    store.token().set(None);
    store.user().set(None);
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Both keys must be present and the user must parse, otherwise the
/// session counts as absent.
pub fn read_session() -> Option<(String, User)> {
    let storage = storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let user_json = storage.get_item(USER_KEY).ok()??;
    let user = serde_json::from_str(&user_json).ok()?;
    Some((token, user))
}

pub fn stored_token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok()?
}

fn write_session(token: &str, user: &User) {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, token);
    if let Ok(json) = serde_json::to_string(user) {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

fn clear_session() {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.remove_item(TOKEN_KEY);
    let _ = storage.remove_item(USER_KEY);
}
