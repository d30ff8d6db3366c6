//! Notifications Module

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::fmt_datetime;
use crate::models::dashboard::Notification;

#[component]
pub fn NotificationsModule() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (notifications, set_notifications) = signal(Vec::<Notification>::new());
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_notifications.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_notifications(&snapshot).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_notifications.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let mark_read = move |notification_id: String| {
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            match api::mark_notification_read(&snapshot, &notification_id).await {
                Ok(()) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="module notifications-module">
            <div class="module-header">
                <h1>"Notifications"</h1>
            </div>
            <div class="module-body">
                {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
                <ul class="notification-list">
                    <For
                        each=move || notifications.get()
                        key=|n| (n.id.clone(), n.is_read)
                        children=move |notification| {
                            let id = notification.id.clone();
                            let unread = !notification.is_read;
                            view! {
                                <li class=if unread { "notification unread" } else { "notification" }>
                                    <span class=format!("notification-kind kind-{}", notification.kind)>
                                        {notification.kind.clone()}
                                    </span>
                                    <span class="notification-title">{notification.title.clone()}</span>
                                    <span class="notification-message">{notification.message.clone()}</span>
                                    <span class="notification-time">{fmt_datetime(&notification.created_at)}</span>
                                    {unread.then(|| view! {
                                        <button on:click=move |_| mark_read(id.clone())>"Mark read"</button>
                                    })}
                                </li>
                            }
                        }
                    />
                </ul>
                {move || notifications.get().is_empty().then(|| view! {
                    <p class="empty-message">"No notifications"</p>
                })}
            </div>
        </div>
    }
}
