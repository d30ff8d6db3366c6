//! Dashboard Module
//!
//! Summary cards per module plus the current user's work items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::fmt_date;
use crate::models::dashboard::{DashboardOverview, DashboardSection};

#[component]
fn SectionCard(title: &'static str, section: DashboardSection) -> impl IntoView {
    view! {
        <div class="dashboard-card">
            <h3>{title}</h3>
            <div class="card-counts">
                <span class="count-total">{format!("{} total", section.total)}</span>
                <span class="count-open">{format!("{} open", section.open)}</span>
                <span class="count-pending">{format!("{} pending", section.pending)}</span>
            </div>
            {(!section.items.is_empty()).then(|| view! {
                <ul class="work-item-list">
                    {section.items.iter().map(|item| view! {
                        <li class="work-item">
                            <span class="work-item-title">{item.title.clone()}</span>
                            {item.status.clone().map(|status| view! {
                                <span class="work-item-status">{status}</span>
                            })}
                            <span class="work-item-due">{fmt_date(item.due_date.as_ref())}</span>
                        </li>
                    }).collect_view()}
                </ul>
            })}
        </div>
    }
}

#[component]
pub fn DashboardModule() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (overview, set_overview) = signal::<Option<DashboardOverview>>(None);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_overview.set(None);
            return;
        }
        spawn_local(async move {
            match api::dashboard_overview(&snapshot).await {
                Ok(loaded) => {
                    set_error.set(String::new());
                    set_overview.set(Some(loaded));
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    view! {
        <div class="module dashboard-module">
            <h1>"Overview"</h1>
            {move || (!error.get().is_empty()).then(|| view! {
                <p class="error-text">{error.get()}</p>
            })}
            {move || match overview.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(overview) => view! {
                    <div class="dashboard-grid">
                        <SectionCard title="Documents" section=overview.documents.clone() />
                        <SectionCard title="Complaints" section=overview.complaints.clone() />
                        <SectionCard title="CAPA" section=overview.capas.clone() />
                        <SectionCard title="DÖF" section=overview.dof.clone() />
                    </div>
                    <p class="notification-count">
                        {format!("{} unread notifications", overview.notifications)}
                    </p>
                }.into_any(),
            }}
        </div>
    }
}
