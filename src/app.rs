//! QMS Portal App
//!
//! Shell component: connection store setup, one-shot auto-login, section
//! navigation, and the connection gate every module sits behind.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    AdminModule, AuditsModule, CalibrationModule, CapasModule, ComplaintsModule, ConnectionPanel,
    DashboardModule, DeploymentGuideModule, DocumentsModule, DofModule, NotificationsModule,
    RisksModule,
};
use crate::connection::{self, ConnectionState};
use crate::context::AppContext;
use crate::models::user::User;

/// Section selection; plain state, not a router.
#[derive(Clone, Copy, PartialEq)]
enum Section {
    Dashboard,
    Documents,
    Complaints,
    Capas,
    Audits,
    Risks,
    Calibration,
    Dof,
    Admin,
    Notifications,
    Guide,
    Connection,
}

const SECTIONS: &[(Section, &str)] = &[
    (Section::Dashboard, "Dashboard"),
    (Section::Documents, "Documents"),
    (Section::Complaints, "Complaints"),
    (Section::Capas, "CAPA"),
    (Section::Audits, "Audits"),
    (Section::Risks, "Risks"),
    (Section::Calibration, "Calibration"),
    (Section::Dof, "DÖF"),
    (Section::Admin, "Admin"),
    (Section::Notifications, "Notifications"),
    (Section::Guide, "Deployment"),
    (Section::Connection, "Connection"),
];

#[component]
pub fn App() -> impl IntoView {
    // Connection store: resolved once from storage, then kept in sync
    // with other tabs by the storage listener.
    let conn = Store::new(ConnectionState::resolve());
    provide_context(conn);
    connection::install_storage_listener(conn);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (session_user, set_session_user) = signal::<Option<User>>(None);
    let (section, set_section) = signal(Section::Dashboard);

    provide_context(AppContext::new((reload_trigger, set_reload_trigger), session_user));

    // One-shot auto-login when credentials are baked in and no token is
    // stored yet.
    Effect::new(move |previous: Option<()>| {
        if previous.is_some() {
            return;
        }
        let snapshot = connection::snapshot(&conn);
        if snapshot.auth_disabled || !snapshot.token.trim().is_empty() {
            return;
        }
        let Some((username, password)) = connection::auto_login_credentials() else {
            return;
        };
        spawn_local(async move {
            let mut login_conn = snapshot.clone();
            login_conn.auth_disabled = true;
            match api::login(&login_conn, username, password).await {
                Ok(token) => connection::save_token(&conn, &token.access_token),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[APP] Auto-login failed: {err}").into());
                }
            }
        });
    });

    // Resolve the session user whenever the connection becomes usable.
    Effect::new(move |_| {
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() || snapshot.auth_disabled {
            set_session_user.set(None);
            return;
        }
        spawn_local(async move {
            match api::current_user(&snapshot).await {
                Ok(user) => set_session_user.set(Some(user)),
                Err(_) => set_session_user.set(None),
            }
        });
    });

    let ready = move || connection::watch(&conn).is_ready();

    view! {
        <div class="app-layout">
            <nav class="section-nav">
                <span class="app-title">"QMS Portal"</span>
                {SECTIONS.iter().map(|(target, label)| {
                    let target = *target;
                    view! {
                        <button
                            class=move || if section.get() == target { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| set_section.set(target)
                        >{*label}</button>
                    }
                }).collect_view()}
                <span class="session-user">
                    {move || session_user.get().map(|user| user.full_name).unwrap_or_default()}
                </span>
            </nav>

            <main class="main-content">
                {move || {
                    // Every module refuses to fetch while not ready; the
                    // gate just makes that state obvious.
                    if !ready() && section.get() != Section::Connection {
                        return view! {
                            <div class="connection-gate">
                                <p class="connection-state missing">
                                    "Backend connection required. Configure the API URL and token."
                                </p>
                                <ConnectionPanel />
                            </div>
                        }.into_any();
                    }
                    match section.get() {
                        Section::Dashboard => view! { <DashboardModule /> }.into_any(),
                        Section::Documents => view! { <DocumentsModule /> }.into_any(),
                        Section::Complaints => view! { <ComplaintsModule /> }.into_any(),
                        Section::Capas => view! { <CapasModule /> }.into_any(),
                        Section::Audits => view! { <AuditsModule /> }.into_any(),
                        Section::Risks => view! { <RisksModule /> }.into_any(),
                        Section::Calibration => view! { <CalibrationModule /> }.into_any(),
                        Section::Dof => view! { <DofModule /> }.into_any(),
                        Section::Admin => view! { <AdminModule /> }.into_any(),
                        Section::Notifications => view! { <NotificationsModule /> }.into_any(),
                        Section::Guide => view! { <DeploymentGuideModule /> }.into_any(),
                        Section::Connection => view! { <ConnectionPanel /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
