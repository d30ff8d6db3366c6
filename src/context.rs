//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::user::User;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the active module from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the active module from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Authenticated session user (None until `/auth/me` resolves) - read
    pub session_user: ReadSignal<Option<User>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        session_user: ReadSignal<Option<User>>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            session_user,
        }
    }

    /// Trigger a reload after a successful write. Every mutation goes
    /// through here: state converges by refetching, never by patching
    /// local copies.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
