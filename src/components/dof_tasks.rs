//! DÖF Tasks Module
//!
//! Paged task list with department/status filters, creation, status
//! moves, the closure request/decision pair and the summary report.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::{input_value, optional, select_value, textarea_value};
use crate::components::status_badge::StatusBadge;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_date, parse_date_input};
use crate::models::dof::*;
use crate::parse::split_comma_list;

const DOF_STATUSES: &[&str] = &["open", "in_progress", "pending_closure", "closed", "cancelled"];
const PAGE_SIZE: i64 = 20;

#[derive(Clone, Copy, PartialEq)]
enum DofTab {
    Tasks,
    Report,
}

#[component]
pub fn DofModule() -> impl IntoView {
    let (tab, set_tab) = signal(DofTab::Tasks);

    view! {
        <div class="module dof-module">
            <div class="module-header">
                <h1>"DÖF Tasks"</h1>
                <div class="tab-bar">
                    <button
                        class=move || if tab.get() == DofTab::Tasks { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(DofTab::Tasks)
                    >"Tasks"</button>
                    <button
                        class=move || if tab.get() == DofTab::Report { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(DofTab::Report)
                    >"Summary"</button>
                </div>
            </div>
            {move || match tab.get() {
                DofTab::Tasks => view! { <DofTaskListView /> }.into_any(),
                DofTab::Report => view! { <DofSummaryView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DofTaskListView() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (tasks, set_tasks) = signal(Vec::<DofTask>::new());
    let (total, set_total) = signal(0i64);
    let (page, set_page) = signal(1i64);
    let (departments, set_departments) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let (department_filter, set_department_filter) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let (selected, set_selected) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_tasks.set(Vec::new());
            set_departments.set(Vec::new());
            return;
        }
        let department = department_filter.get();
        let status = status_filter.get();
        let search_text = search.get();
        let current_page = page.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_dof_tasks(&snapshot, &department, &status, &search_text, current_page, PAGE_SIZE).await {
                Ok(listing) => {
                    set_error.set(String::new());
                    set_total.set(listing.total);
                    set_tasks.set(listing.items);
                }
                Err(err) => set_error.set(err.to_string()),
            }
            if let Ok(names) = api::dof_departments(&snapshot).await {
                set_departments.set(names);
            }
            set_loading.set(false);
        });
    });

    let page_count = move || {
        let total = total.get();
        if total == 0 {
            1
        } else {
            (total + PAGE_SIZE - 1) / PAGE_SIZE
        }
    };

    view! {
        <div class="module-body">
            <div class="filter-row">
                <select on:change=move |ev| {
                    set_department_filter.set(select_value(&ev));
                    set_page.set(1);
                }>
                    <option value="">"All departments"</option>
                    <For
                        each=move || departments.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let value = name.clone();
                            view! { <option value=value>{name.clone()}</option> }
                        }
                    />
                </select>
                <select on:change=move |ev| {
                    set_status_filter.set(select_value(&ev));
                    set_page.set(1);
                }>
                    <option value="">"All statuses"</option>
                    {DOF_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
                <input type="text" placeholder="Search"
                    prop:value=move || search.get()
                    on:change=move |ev| {
                        set_search.set(input_value(&ev));
                        set_page.set(1);
                    } />
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close form" } else { "New task" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || show_form.get().then(|| view! { <NewDofTaskForm departments=departments /> })}
            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th>"Title"</th>
                        <th>"Department"</th>
                        <th>"Responsible"</th>
                        <th>"Due"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || tasks.get()
                        key=|task| (task.id.clone(), task.updated_at)
                        children=move |task| {
                            let id = task.id.clone();
                            view! {
                                <tr class="data-row" on:click=move |_| set_selected.set(Some(id.clone()))>
                                    <td>{task.dof_no.clone()}</td>
                                    <td>{task.title.clone()}</td>
                                    <td>{task.department.clone()}</td>
                                    <td>{task.responsible_person.clone()}</td>
                                    <td>{fmt_date(Some(&task.due_date))}</td>
                                    <td><StatusBadge status=task.status.clone() /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="pager-row">
                <button
                    prop:disabled={move || page.get() <= 1}
                    on:click=move |_| set_page.update(|p| *p -= 1)
                >"Previous"</button>
                <span>{move || format!("Page {} / {} ({} tasks)", page.get(), page_count(), total.get())}</span>
                <button
                    prop:disabled={move || page.get() >= page_count()}
                    on:click=move |_| set_page.update(|p| *p += 1)
                >"Next"</button>
            </div>

            {move || selected.get().map(|dof_id| view! {
                <DofTaskDetail dof_id=dof_id on_close=Callback::new(move |_| set_selected.set(None)) />
            })}
        </div>
    }
}

#[component]
fn NewDofTaskForm(departments: ReadSignal<Vec<String>>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (responsible, set_responsible) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (team, set_team) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        let department_value = department.get();
        let responsible_value = responsible.get().trim().to_string();
        if title_value.is_empty() || department_value.is_empty() || responsible_value.is_empty() {
            set_form_error.set("Title, department and responsible person are required".to_string());
            return;
        }
        let Some(due) = parse_date_input(&due_date.get()) else {
            set_form_error.set("A due date is required".to_string());
            return;
        };
        let team_members = split_comma_list(&team.get());
        let payload = DofTaskCreate {
            title: title_value,
            description: optional(&description.get()),
            department: department_value,
            responsible_person: responsible_value,
            due_date: due,
            team_members: if team_members.is_empty() { None } else { Some(team_members) },
            initial_improvement_report_date: None,
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_dof_task(&snapshot, &payload).await {
                Ok(_) => {
                    set_form_error.set(String::new());
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_responsible.set(String::new());
                    set_due_date.set(String::new());
                    set_team.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_form_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <div class="form-row">
                <input type="text" placeholder="Title *"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(input_value(&ev)) />
                <select on:change=move |ev| set_department.set(select_value(&ev))>
                    <option value="">"Select department *"</option>
                    <For
                        each=move || departments.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let value = name.clone();
                            view! { <option value=value>{name.clone()}</option> }
                        }
                    />
                </select>
                <input type="text" placeholder="Responsible person *"
                    prop:value=move || responsible.get()
                    on:input=move |ev| set_responsible.set(input_value(&ev)) />
                <label>"Due date"
                    <input type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(input_value(&ev)) />
                </label>
            </div>
            <textarea placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(textarea_value(&ev)) />
            <input type="text" placeholder="Team members (comma separated)"
                prop:value=move || team.get()
                on:input=move |ev| set_team.set(input_value(&ev)) />
            {move || (!form_error.get().is_empty()).then(|| view! {
                <p class="error-text">{form_error.get()}</p>
            })}
            <button type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Create task" }}
            </button>
        </form>
    }
}

#[component]
fn DofTaskDetail(dof_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<DofTask>>(None);
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let (next_status, set_next_status) = signal(String::from("in_progress"));
    let (closure_note, set_closure_note) = signal(String::new());
    let (due_edit, set_due_edit) = signal(String::new());

    let id_for_load = dof_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_dof_task(&snapshot, &id).await {
                Ok(task) => {
                    set_due_edit.set(crate::format::date_input_value(Some(&task.due_date)));
                    set_error.set(String::new());
                    set_detail.set(Some(task));
                }
                Err(err) => {
                    set_detail.set(None);
                    set_error.set(err.to_string());
                }
            }
        });
    });

    let finish = move |result: Result<(), String>| {
        match result {
            Ok(()) => {
                set_error.set(String::new());
                ctx.reload();
            }
            Err(err) => set_error.set(err),
        }
        set_saving.set(false);
    };

    let id_for_status = dof_id.clone();
    let change_status = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_status.clone();
        let payload = DofStatusUpdate {
            status: next_status.get(),
            note: None,
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::set_dof_status(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_due = dof_id.clone();
    let save_due_date = move |_| {
        let Some(due) = parse_date_input(&due_edit.get()) else {
            set_error.set("A valid due date is required".to_string());
            return;
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_due.clone();
        let payload = DofTaskUpdate {
            due_date: Some(due),
            ..Default::default()
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::update_dof_task(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_request = dof_id.clone();
    let request_closure = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_request.clone();
        let note = closure_note.get();
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::request_dof_closure(&snapshot, &id, optional(&note).as_deref())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_decide = dof_id.clone();
    let decide_closure = move |approve: bool| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_decide.clone();
        let note = closure_note.get();
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::decide_dof_closure(&snapshot, &id, approve, optional(&note).as_deref())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|t| format!("{} — {}", t.dof_no, t.title)).unwrap_or_else(|| "DÖF task".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(task) => view! {
                    <div class="detail-body">
                        <dl class="detail-grid">
                            <dt>"Status"</dt><dd><StatusBadge status=task.status.clone() /></dd>
                            <dt>"Department"</dt><dd>{task.department.clone()}</dd>
                            <dt>"Responsible"</dt><dd>{task.responsible_person.clone()}</dd>
                            <dt>"Due"</dt><dd>{fmt_date(Some(&task.due_date))}</dd>
                            <dt>"Closed"</dt><dd>{fmt_date(task.closed_at.as_ref())}</dd>
                            <dt>"Team"</dt><dd>{task.team_members.join(", ")}</dd>
                        </dl>
                        {task.description.clone().map(|text| view! {
                            <p class="description-text">{text}</p>
                        })}

                        <div class="workflow-step">
                            <span class="editor-label">"Status"</span>
                            <select on:change=move |ev| set_next_status.set(select_value(&ev))>
                                {DOF_STATUSES.iter().map(|s| view! {
                                    <option value=*s selected=*s == "in_progress">{*s}</option>
                                }).collect_view()}
                            </select>
                            <button prop:disabled=move || saving.get() on:click=change_status.clone()>
                                "Change status"
                            </button>
                        </div>

                        <div class="workflow-step">
                            <span class="editor-label">"Due date"</span>
                            <input type="date"
                                prop:value=move || due_edit.get()
                                on:input=move |ev| set_due_edit.set(input_value(&ev)) />
                            <button prop:disabled=move || saving.get() on:click=save_due_date.clone()>
                                "Update due date"
                            </button>
                        </div>

                        <div class="workflow-step">
                            <span class="editor-label">"Closure"</span>
                            <input type="text" placeholder="Closure note"
                                prop:value=move || closure_note.get()
                                on:input=move |ev| set_closure_note.set(input_value(&ev)) />
                            <button prop:disabled=move || saving.get() on:click=request_closure.clone()>
                                "Request closure"
                            </button>
                            <button prop:disabled=move || saving.get() on:click={
                                let decide = decide_closure.clone();
                                move |_| decide(true)
                            }>"Approve"</button>
                            <button prop:disabled=move || saving.get() on:click={
                                let decide = decide_closure.clone();
                                move |_| decide(false)
                            }>"Reject"</button>
                        </div>

                        {(!task.status_history.is_empty()).then(|| view! {
                            <div class="history-section">
                                <span class="editor-label">"History"</span>
                                <ul class="revision-list">
                                    {task.status_history.iter().map(|entry| view! {
                                        <li>{format!(
                                            "{} — {} by {}",
                                            fmt_date(Some(&entry.changed_at)),
                                            entry.status,
                                            entry.changed_by,
                                        )}</li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        })}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DofSummaryView() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (report, set_report) = signal::<Option<DofSummaryReport>>(None);
    let (error, set_error) = signal(String::new());
    let (department, set_department) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_report.set(None);
            return;
        }
        let dept = department.get();
        spawn_local(async move {
            match api::dof_summary_report(&snapshot, &dept, "").await {
                Ok(loaded) => {
                    set_error.set(String::new());
                    set_report.set(Some(loaded));
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    view! {
        <div class="module-body">
            <div class="filter-row">
                <input type="text" placeholder="Department filter"
                    prop:value=move || department.get()
                    on:change=move |ev| set_department.set(input_value(&ev)) />
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match report.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(report) => {
                    let mut status_counts: Vec<(String, i64)> =
                        report.status_counts.clone().into_iter().collect();
                    status_counts.sort();
                    view! {
                        <p class="report-total">
                            {format!("{} tasks, {} overdue", report.total, report.overdue)}
                        </p>
                        <div class="report-grid">
                            <div class="report-block">
                                <span class="editor-label">"By status"</span>
                                <table class="data-table compact">
                                    <tbody>
                                        {status_counts.into_iter().map(|(status, count)| view! {
                                            <tr><td>{status}</td><td>{count}</td></tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                            <div class="report-block">
                                <span class="editor-label">"By department"</span>
                                <table class="data-table compact">
                                    <tbody>
                                        {report.department_counts.iter().map(|row| view! {
                                            <tr><td>{row.department.clone()}</td><td>{row.count}</td></tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                            <div class="report-block">
                                <span class="editor-label">"Monthly"</span>
                                <table class="data-table compact">
                                    <tbody>
                                        {report.monthly_trends.iter().map(|row| view! {
                                            <tr><td>{row.label.clone()}</td><td>{row.count}</td></tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                        {(!report.upcoming_deadlines.is_empty()).then(|| view! {
                            <div class="report-block">
                                <span class="editor-label">"Upcoming deadlines"</span>
                                <table class="data-table compact">
                                    <thead>
                                        <tr><th>"No"</th><th>"Title"</th><th>"Due"</th><th>"Responsible"</th></tr>
                                    </thead>
                                    <tbody>
                                        {report.upcoming_deadlines.iter().map(|row| view! {
                                            <tr>
                                                <td>{row.dof_no.clone()}</td>
                                                <td>{row.title.clone()}</td>
                                                <td>{fmt_date(Some(&row.due_date))}</td>
                                                <td>{row.responsible_person.clone()}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        })}
                    }.into_any()
                }
            }}
        </div>
    }
}
