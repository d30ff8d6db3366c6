//! Connection State Provider
//!
//! Single source of truth for reaching the backend: API base URL and
//! bearer token, persisted in browser storage, with compile-time
//! defaults. Provided app-wide as a reactive store so every module
//! reads the same descriptor instead of poking at storage directly.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Browser storage key for the API base URL.
pub const API_URL_KEY: &str = "qms.api_url";
/// Browser storage key for the bearer token.
pub const TOKEN_KEY: &str = "qms.token";

const DEFAULT_BACKEND_BASE: &str = "http://localhost:8000";

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ConnectionState {
    /// Full API base, always ending in `/api`.
    pub api_url: String,
    pub token: String,
    pub auth_disabled: bool,
}

impl ConnectionState {
    /// Build the descriptor from persisted values, falling back to the
    /// compile-time backend base plus the fixed `/api` suffix.
    pub fn from_stored(stored_url: Option<String>, stored_token: Option<String>) -> Self {
        Self {
            api_url: resolve_api_url(stored_url),
            token: stored_token.unwrap_or_default(),
            auth_disabled: auth_disabled(),
        }
    }

    /// Read the descriptor out of browser storage.
    pub fn resolve() -> Self {
        Self::from_stored(read_key(API_URL_KEY), read_key(TOKEN_KEY))
    }

    /// Ready to fetch: URL present, and a usable token unless auth is off.
    pub fn is_ready(&self) -> bool {
        !self.api_url.is_empty() && (self.auth_disabled || !self.token.trim().is_empty())
    }

    /// `Authorization` header value, if one should be sent at all.
    pub fn bearer_header(&self) -> Option<String> {
        if self.auth_disabled {
            return None;
        }
        let token = self.token.trim();
        if token.is_empty() {
            None
        } else {
            Some(format!("Bearer {token}"))
        }
    }
}

fn resolve_api_url(stored: Option<String>) -> String {
    match stored {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => {
            let base = option_env!("QMS_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_BASE);
            with_api_suffix(base)
        }
    }
}

/// Normalize a backend base into the API root (`…/api`).
pub fn with_api_suffix(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api")
    }
}

pub fn auth_disabled() -> bool {
    matches!(
        option_env!("QMS_DISABLE_AUTH"),
        Some("1") | Some("true") | Some("TRUE") | Some("yes")
    )
}

/// Auto-login credentials baked in at build time, if any.
pub fn auto_login_credentials() -> Option<(&'static str, &'static str)> {
    match (
        option_env!("QMS_AUTO_LOGIN_USERNAME"),
        option_env!("QMS_AUTO_LOGIN_PASSWORD"),
    ) {
        (Some(user), Some(pass)) if !user.is_empty() => Some((user, pass)),
        _ => None,
    }
}

pub type ConnectionStore = Store<ConnectionState>;

/// Get the connection store from context.
pub fn use_connection() -> ConnectionStore {
    expect_context::<ConnectionStore>()
}

/// Plain copy of the current descriptor for use inside async calls.
pub fn snapshot(store: &ConnectionStore) -> ConnectionState {
    ConnectionState {
        api_url: store.api_url().get_untracked(),
        token: store.token().get_untracked(),
        auth_disabled: store.auth_disabled().get_untracked(),
    }
}

/// Reactive variant of [`snapshot`] for effects keyed on the connection.
pub fn watch(store: &ConnectionStore) -> ConnectionState {
    ConnectionState {
        api_url: store.api_url().get(),
        token: store.token().get(),
        auth_disabled: store.auth_disabled().get(),
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_key(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Persist the descriptor and update the store in one step.
pub fn save_connection(store: &ConnectionStore, api_url: &str, token: &str) {
    let api_url = with_api_suffix(api_url);
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, &api_url);
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    store.api_url().set(api_url);
    store.token().set(token.to_string());
}

/// Persist just the token (used after a successful login).
pub fn save_token(store: &ConnectionStore, token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    store.token().set(token.to_string());
}

/// Mirror credential changes made in other tabs into this one.
///
/// Known keys update their field directly; anything else (including a
/// storage clear, where the key is null) forces a full re-read.
pub fn install_storage_listener(store: ConnectionStore) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        match ev.key().as_deref() {
            Some(API_URL_KEY) => store.api_url().set(resolve_api_url(ev.new_value())),
            Some(TOKEN_KEY) => store.token().set(ev.new_value().unwrap_or_default()),
            _ => {
                let fresh = ConnectionState::resolve();
                store.api_url().set(fresh.api_url);
                store.token().set(fresh.token);
            }
        }
    });
    let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(api_url: &str, token: &str, auth_disabled: bool) -> ConnectionState {
        ConnectionState {
            api_url: api_url.to_string(),
            token: token.to_string(),
            auth_disabled,
        }
    }

    #[test]
    fn ready_requires_url_and_token() {
        assert!(state("http://qms.local/api", "abc", false).is_ready());
        assert!(!state("", "abc", false).is_ready());
        assert!(!state("http://qms.local/api", "", false).is_ready());
    }

    #[test]
    fn whitespace_token_is_not_ready() {
        assert!(!state("http://qms.local/api", "   ", false).is_ready());
    }

    #[test]
    fn auth_disabled_skips_token_check() {
        assert!(state("http://qms.local/api", "", true).is_ready());
        assert!(!state("", "", true).is_ready());
    }

    #[test]
    fn bearer_header_trims_and_omits() {
        assert_eq!(
            state("u", " tok ", false).bearer_header(),
            Some("Bearer tok".to_string())
        );
        assert_eq!(state("u", "  ", false).bearer_header(), None);
        assert_eq!(state("u", "tok", true).bearer_header(), None);
    }

    #[test]
    fn api_suffix_is_appended_once() {
        assert_eq!(with_api_suffix("http://qms.local"), "http://qms.local/api");
        assert_eq!(with_api_suffix("http://qms.local/"), "http://qms.local/api");
        assert_eq!(with_api_suffix("http://qms.local/api"), "http://qms.local/api");
        assert_eq!(with_api_suffix("  "), "");
    }

    #[test]
    fn stored_url_wins_over_default() {
        let resolved = ConnectionState::from_stored(Some("http://other/api".into()), None);
        assert_eq!(resolved.api_url, "http://other/api");
        assert_eq!(resolved.token, "");
    }
}
