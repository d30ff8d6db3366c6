//! Administration Module
//!
//! Role CRUD with permission lists, and user role/department edits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::form::{input_value, optional};
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::models::user::{RoleCreate, RoleUpdate, UserListItem, UserRole, UserUpdate};
use crate::parse::split_comma_list;

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Roles,
    Users,
}

#[component]
pub fn AdminModule() -> impl IntoView {
    let (tab, set_tab) = signal(AdminTab::Roles);

    view! {
        <div class="module admin-module">
            <div class="module-header">
                <h1>"Administration"</h1>
                <div class="tab-bar">
                    <button
                        class=move || if tab.get() == AdminTab::Roles { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(AdminTab::Roles)
                    >"Roles"</button>
                    <button
                        class=move || if tab.get() == AdminTab::Users { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(AdminTab::Users)
                    >"Users"</button>
                </div>
            </div>
            {move || match tab.get() {
                AdminTab::Roles => view! { <RoleList /> }.into_any(),
                AdminTab::Users => view! { <UserList /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn RoleList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (roles, set_roles) = signal(Vec::<UserRole>::new());
    let (error, set_error) = signal(String::new());

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (permissions, set_permissions) = signal(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_roles.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_roles(&snapshot).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_roles.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        if name_value.is_empty() {
            set_error.set("Role name is required".to_string());
            return;
        }
        let payload = RoleCreate {
            name: name_value,
            description: optional(&description.get()),
            permissions: split_comma_list(&permissions.get()),
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_role(&snapshot, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_permissions.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    let save_permissions = move |role_name: String, raw: String| {
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            let payload = RoleUpdate {
                description: None,
                permissions: Some(split_comma_list(&raw)),
            };
            match api::update_role(&snapshot, &role_name, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    let delete_role = move |role_name: String| {
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            match api::delete_role(&snapshot, &role_name).await {
                Ok(()) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="module-body">
            <form class="record-form inline" on:submit=submit>
                <input type="text" placeholder="Role name *"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(input_value(&ev)) />
                <input type="text" placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(input_value(&ev)) />
                <input type="text" placeholder="Permissions (comma separated)"
                    prop:value=move || permissions.get()
                    on:input=move |ev| set_permissions.set(input_value(&ev)) />
                <button type="submit" prop:disabled=move || saving.get()>"Create role"</button>
            </form>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Description"</th><th>"Permissions"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || roles.get()
                        key=|role| (role.name.clone(), role.updated_at)
                        children=move |role| {
                            let edit_name = role.name.clone();
                            let delete_name = role.name.clone();
                            view! {
                                <tr>
                                    <td>{role.name.clone()}</td>
                                    <td>{role.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        <input type="text"
                                            prop:value=role.permissions.join(", ")
                                            on:change=move |ev| {
                                                save_permissions(edit_name.clone(), input_value(&ev));
                                            }
                                        />
                                    </td>
                                    <td>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| delete_role(delete_name.clone()))
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn UserList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (users, set_users) = signal(Vec::<UserListItem>::new());
    let (roles, set_roles) = signal(Vec::<UserRole>::new());
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_users.set(Vec::new());
            set_roles.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_users(&snapshot).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_users.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
            if let Ok(loaded) = api::list_roles(&snapshot).await {
                set_roles.set(loaded);
            }
        });
    });

    let apply_update = move |user_id: String, payload: UserUpdate| {
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            match api::update_user(&snapshot, &user_id, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="module-body">
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Full name"</th>
                        <th>"Department"</th>
                        <th>"Roles"</th>
                        <th>"Active"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| user.id.clone()
                        children=move |user| {
                            let roles_id = user.id.clone();
                            let dept_id = user.id.clone();
                            let active_id = user.id.clone();
                            let is_active = user.is_active;
                            view! {
                                <tr>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.full_name.clone()}</td>
                                    <td>
                                        <input type="text"
                                            prop:value=user.department.clone()
                                            on:change=move |ev| {
                                                apply_update(dept_id.clone(), UserUpdate {
                                                    department: Some(input_value(&ev)),
                                                    ..Default::default()
                                                });
                                            }
                                        />
                                    </td>
                                    <td>
                                        <input type="text"
                                            prop:value=user.roles.join(", ")
                                            placeholder="roles, comma separated"
                                            on:change=move |ev| {
                                                apply_update(roles_id.clone(), UserUpdate {
                                                    roles: Some(split_comma_list(&input_value(&ev))),
                                                    ..Default::default()
                                                });
                                            }
                                        />
                                    </td>
                                    <td>
                                        <button on:click=move |_| {
                                            apply_update(active_id.clone(), UserUpdate {
                                                is_active: Some(!is_active),
                                                ..Default::default()
                                            });
                                        }>
                                            {if is_active { "Deactivate" } else { "Activate" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <p class="hint-text">
                {move || format!("{} roles defined", roles.get().len())}
            </p>
        </div>
    }
}
