//! Connection Panel Component
//!
//! Edit the persisted API URL and bearer token, or obtain a token by
//! logging in. This is the only place credentials are written.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::input_value;
use crate::connection::{self, use_connection, ConnectionStateStoreFields};

#[component]
pub fn ConnectionPanel() -> impl IntoView {
    let conn = use_connection();

    let (api_url, set_api_url) = signal(conn.api_url().get_untracked());
    let (token, set_token) = signal(conn.token().get_untracked());
    let (saved, set_saved) = signal(false);

    // Login form state
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (logging_in, set_logging_in) = signal(false);
    let (login_error, set_login_error) = signal(String::new());

    let ready = move || connection::watch(&conn).is_ready();

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        connection::save_connection(&conn, &api_url.get(), &token.get());
        set_api_url.set(conn.api_url().get_untracked());
        set_saved.set(true);
    };

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_login_error.set("Username and password are required".to_string());
            return;
        }
        // Log in against the URL as currently entered, token ignored.
        let mut snapshot = connection::snapshot(&conn);
        snapshot.api_url = connection::with_api_suffix(&api_url.get());
        snapshot.auth_disabled = true;
        set_logging_in.set(true);
        spawn_local(async move {
            match api::login(&snapshot, user.trim(), &pass).await {
                Ok(token_resp) => {
                    set_login_error.set(String::new());
                    connection::save_connection(&conn, &snapshot.api_url, &token_resp.access_token);
                    set_token.set(token_resp.access_token);
                    set_password.set(String::new());
                }
                Err(err) => set_login_error.set(err.to_string()),
            }
            set_logging_in.set(false);
        });
    };

    view! {
        <div class="connection-panel">
            <h2>"Backend Connection"</h2>

            {move || if ready() {
                view! { <p class="connection-state ok">"Connected"</p> }.into_any()
            } else {
                view! {
                    <p class="connection-state missing">
                        "Connection required: set the API URL and a token to load data."
                    </p>
                }.into_any()
            }}

            <form class="connection-form" on:submit=save>
                <label class="editor-label">"API URL"</label>
                <input
                    type="text"
                    placeholder="http://localhost:8000"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(input_value(&ev))
                />
                <label class="editor-label">"Bearer token"</label>
                <input
                    type="password"
                    placeholder="paste a token, or log in below"
                    prop:value=move || token.get()
                    on:input=move |ev| set_token.set(input_value(&ev))
                />
                <button type="submit">"Save connection"</button>
                {move || saved.get().then(|| view! { <span class="save-note">"Saved"</span> })}
            </form>

            <form class="connection-form" on:submit=login>
                <label class="editor-label">"Log in for a token"</label>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(input_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(input_value(&ev))
                />
                <button type="submit" prop:disabled=move || logging_in.get()>
                    {move || if logging_in.get() { "Logging in..." } else { "Log in" }}
                </button>
                {move || (!login_error.get().is_empty()).then(|| view! {
                    <p class="error-text">{login_error.get()}</p>
                })}
            </form>
        </div>
    }
}
