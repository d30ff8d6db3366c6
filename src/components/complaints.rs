//! Complaints Module
//!
//! Complaint intake, assignment/investigation/finalization workflow,
//! category administration and the category breakdown report.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::{input_value, optional, picked_file, select_value, textarea_value};
use crate::components::status_badge::StatusBadge;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_date, fmt_datetime};
use crate::models::complaint::*;
use crate::parse::split_comma_list;

const COMPLAINT_TYPES: &[&str] = &["product", "service", "delivery", "billing", "other"];
const PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];
const COMPLAINT_STATUSES: &[&str] = &["open", "investigating", "resolved", "closed"];

#[derive(Clone, Copy, PartialEq)]
enum ComplaintTab {
    Register,
    Categories,
    Report,
}

#[component]
pub fn ComplaintsModule() -> impl IntoView {
    let (tab, set_tab) = signal(ComplaintTab::Register);

    let tab_button = move |target: ComplaintTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == target { "tab-btn active" } else { "tab-btn" }
                on:click=move |_| set_tab.set(target)
            >{label}</button>
        }
    };

    view! {
        <div class="module complaints-module">
            <div class="module-header">
                <h1>"Complaints"</h1>
                <div class="tab-bar">
                    {tab_button(ComplaintTab::Register, "Register")}
                    {tab_button(ComplaintTab::Categories, "Categories")}
                    {tab_button(ComplaintTab::Report, "Report")}
                </div>
            </div>
            {move || match tab.get() {
                ComplaintTab::Register => view! { <ComplaintList /> }.into_any(),
                ComplaintTab::Categories => view! { <CategoryList /> }.into_any(),
                ComplaintTab::Report => view! { <CategoryReportView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ComplaintList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (complaints, set_complaints) = signal(Vec::<Complaint>::new());
    let (categories, set_categories) = signal(Vec::<ComplaintCategory>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let (status_filter, set_status_filter) = signal(String::new());
    let (priority_filter, set_priority_filter) = signal(String::new());
    let (category_filter, set_category_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let (selected, set_selected) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_complaints.set(Vec::new());
            set_categories.set(Vec::new());
            return;
        }
        let status = status_filter.get();
        let priority = priority_filter.get();
        let category = category_filter.get();
        let search_text = search.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_complaints(&snapshot, &status, &priority, &category, &search_text).await
            {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_complaints.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
            if let Ok(loaded) = api::list_complaint_categories(&snapshot).await {
                set_categories.set(loaded);
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="module-body">
            <div class="filter-row">
                <select on:change=move |ev| set_status_filter.set(select_value(&ev))>
                    <option value="">"All statuses"</option>
                    {COMPLAINT_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| set_priority_filter.set(select_value(&ev))>
                    <option value="">"All priorities"</option>
                    {PRIORITIES.iter().map(|p| view! { <option value=*p>{*p}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| set_category_filter.set(select_value(&ev))>
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.id.clone()
                        children=move |category| view! {
                            <option value=category.id.clone()>{category.name.clone()}</option>
                        }
                    />
                </select>
                <input type="text" placeholder="Search"
                    prop:value=move || search.get()
                    on:change=move |ev| set_search.set(input_value(&ev)) />
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close form" } else { "New complaint" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || show_form.get().then(|| view! { <NewComplaintForm categories=categories /> })}
            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th>"Customer"</th>
                        <th>"Type"</th>
                        <th>"Priority"</th>
                        <th>"Department"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || complaints.get()
                        key=|row| (row.id.clone(), row.updated_at)
                        children=move |row| {
                            let id = row.id.clone();
                            view! {
                                <tr class="data-row" on:click=move |_| set_selected.set(Some(id.clone()))>
                                    <td>{row.complaint_no.clone()}</td>
                                    <td>{row.customer_name.clone()}</td>
                                    <td>{row.complaint_type.clone()}</td>
                                    <td>{row.priority.clone()}</td>
                                    <td>{row.department.clone()}</td>
                                    <td><StatusBadge status=row.status.clone() /></td>
                                    <td>{fmt_date(Some(&row.complaint_date))}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || complaints.get().is_empty().then(|| view! {
                <p class="empty-message">"No complaints match the current filters"</p>
            })}

            {move || selected.get().map(|complaint_id| view! {
                <ComplaintDetail
                    complaint_id=complaint_id
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn NewComplaintForm(categories: ReadSignal<Vec<ComplaintCategory>>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (customer_name, set_customer_name) = signal(String::new());
    let (customer_contact, set_customer_contact) = signal(String::new());
    let (complaint_type, set_complaint_type) = signal(String::from("product"));
    let (priority, set_priority) = signal(String::from("medium"));
    let (department, set_department) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (assigned_to, set_assigned_to) = signal(String::new());
    let (team, set_team) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = customer_name.get().trim().to_string();
        let contact = customer_contact.get().trim().to_string();
        let dept = department.get().trim().to_string();
        let desc = description.get().trim().to_string();
        if name.is_empty() || contact.is_empty() || dept.is_empty() || desc.is_empty() {
            set_form_error.set("Customer, contact, department and description are required".to_string());
            return;
        }
        let team_members = split_comma_list(&team.get());
        let payload = ComplaintCreate {
            customer_name: name,
            customer_contact: contact,
            complaint_type: complaint_type.get(),
            priority: priority.get(),
            description: desc,
            department: dept,
            assigned_to: optional(&assigned_to.get()),
            team_leader: None,
            solution_team: if team_members.is_empty() { None } else { Some(team_members) },
            initial_response: None,
            category_id: optional(&category_id.get()),
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_complaint(&snapshot, &payload).await {
                Ok(_) => {
                    set_form_error.set(String::new());
                    set_customer_name.set(String::new());
                    set_customer_contact.set(String::new());
                    set_department.set(String::new());
                    set_description.set(String::new());
                    set_assigned_to.set(String::new());
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
                <input type="text" placeholder="Customer name *"
                    prop:value=move || customer_name.get()
                    on:input=move |ev| set_customer_name.set(input_value(&ev)) />
                <input type="text" placeholder="Customer contact *"
                    prop:value=move || customer_contact.get()
                    on:input=move |ev| set_customer_contact.set(input_value(&ev)) />
                <select on:change=move |ev| set_complaint_type.set(select_value(&ev))>
                    {COMPLAINT_TYPES.iter().map(|t| view! {
                        <option value=*t selected=*t == "product">{*t}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| set_priority.set(select_value(&ev))>
                    {PRIORITIES.iter().map(|p| view! {
                        <option value=*p selected=*p == "medium">{*p}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form-row">
                <input type="text" placeholder="Department *"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(input_value(&ev)) />
                <input type="text" placeholder="Assigned to"
                    prop:value=move || assigned_to.get()
                    on:input=move |ev| set_assigned_to.set(input_value(&ev)) />
                <input type="text" placeholder="Solution team (comma separated)"
                    prop:value=move || team.get()
                    on:input=move |ev| set_team.set(input_value(&ev)) />
                <select on:change=move |ev| set_category_id.set(select_value(&ev))>
                    <option value="">"No category"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.id.clone()
                        children=move |category| view! {
                            <option value=category.id.clone()>{category.name.clone()}</option>
                        }
                    />
                </select>
            </div>
            <textarea placeholder="Description *"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(textarea_value(&ev)) />
            {move || (!form_error.get().is_empty()).then(|| view! {
                <p class="error-text">{form_error.get()}</p>
            })}
            <button type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Create complaint" }}
            </button>
        </form>
    }
}

#[component]
fn ComplaintDetail(complaint_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<Complaint>>(None);
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Workflow drafts
    let (assigned_to, set_assigned_to) = signal(String::new());
    let (team_leader, set_team_leader) = signal(String::new());
    let (investigation, set_investigation) = signal(String::new());
    let (final_report, set_final_report) = signal(String::new());
    let (mark_resolved, set_mark_resolved) = signal(true);
    let (next_status, set_next_status) = signal(String::from("investigating"));

    let id_for_load = complaint_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_complaint(&snapshot, &id).await {
                Ok(row) => {
                    set_assigned_to.set(row.assigned_to.clone().unwrap_or_default());
                    set_team_leader.set(row.team_leader.clone().unwrap_or_default());
                    set_error.set(String::new());
                    set_detail.set(Some(row));
                }
                Err(err) => {
                    set_detail.set(None);
                    set_error.set(err.to_string());
                }
            }
        });
    });

    // One shared finish handler: every mutation reloads, never patches.
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

    let id_for_assign = complaint_id.clone();
    let save_assignment = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_assign.clone();
        let payload = ComplaintAssignmentUpdate {
            assigned_to: optional(&assigned_to.get()),
            team_leader: optional(&team_leader.get()),
            solution_team: None,
            initial_response: None,
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::update_assignment(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_invest = complaint_id.clone();
    let save_investigation = move |_| {
        let report = investigation.get().trim().to_string();
        if report.is_empty() {
            set_error.set("Investigation report text is required".to_string());
            return;
        }
        let snapshot = connection::snapshot(&conn);
        let id = id_for_invest.clone();
        let payload = ComplaintInvestigationUpdate {
            investigation_report: report,
            related_task_ids: None,
            file_attachments: None,
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::update_investigation(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_final = complaint_id.clone();
    let save_finalization = move |_| {
        let report = final_report.get().trim().to_string();
        if report.is_empty() {
            set_error.set("Final report text is required".to_string());
            return;
        }
        let snapshot = connection::snapshot(&conn);
        let id = id_for_final.clone();
        let payload = ComplaintFinalizationUpdate {
            final_report: report,
            final_response: None,
            file_attachments: None,
            mark_resolved: mark_resolved.get(),
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::finalize_complaint(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_status = complaint_id.clone();
    let change_status = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_status.clone();
        let payload = ComplaintStatusUpdate {
            status: next_status.get(),
            comment: None,
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::set_complaint_status(&snapshot, &id, &payload)
                    .await
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_attach = complaint_id.clone();
    let attach = move |ev: web_sys::Event| {
        let Some(file) = picked_file(&ev) else { return };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_attach.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match api::upload_file(&snapshot, &file, "complaint", Some(&id)).await {
                Ok(uploaded) => api::add_complaint_attachments(&snapshot, &id, vec![uploaded.file_id])
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            finish(result);
        });
    };

    let id_for_dof = complaint_id.clone();
    let spawn_dof = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_dof.clone();
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::create_complaint_dof(&snapshot, &id, &ComplaintDofCreate::default())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_capa = complaint_id.clone();
    let spawn_capa = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_capa.clone();
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::create_complaint_capa(&snapshot, &id, &ComplaintCapaCreate::default())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|c| format!("{} — {}", c.complaint_no, c.customer_name)).unwrap_or_else(|| "Complaint".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(row) => view! {
                    <div class="detail-body">
                        <dl class="detail-grid">
                            <dt>"Status"</dt><dd><StatusBadge status=row.status.clone() /></dd>
                            <dt>"Priority"</dt><dd>{row.priority.clone()}</dd>
                            <dt>"Department"</dt><dd>{row.department.clone()}</dd>
                            <dt>"Category"</dt><dd>{row.category_name.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Received"</dt><dd>{fmt_datetime(&row.complaint_date)}</dd>
                            <dt>"Resolved"</dt><dd>{fmt_date(row.resolution_date.as_ref())}</dd>
                            <dt>"Attachments"</dt><dd>{row.file_attachments.len()}</dd>
                            <dt>"Linked CAPAs"</dt><dd>{row.related_capa_ids.join(", ")}</dd>
                        </dl>
                        <p class="description-text">{row.description.clone()}</p>

                        {row.investigation_report.clone().map(|report| view! {
                            <div class="report-block">
                                <span class="editor-label">"Investigation report"</span>
                                <p class="description-text">{report}</p>
                            </div>
                        })}
                        {row.final_report.clone().map(|report| view! {
                            <div class="report-block">
                                <span class="editor-label">"Final report"</span>
                                <p class="description-text">{report}</p>
                            </div>
                        })}

                        <div class="workflow-section">
                            <div class="workflow-step">
                                <span class="editor-label">"Assignment"</span>
                                <input type="text" placeholder="Assigned to"
                                    prop:value=move || assigned_to.get()
                                    on:input=move |ev| set_assigned_to.set(input_value(&ev)) />
                                <input type="text" placeholder="Team leader"
                                    prop:value=move || team_leader.get()
                                    on:input=move |ev| set_team_leader.set(input_value(&ev)) />
                                <button prop:disabled=move || saving.get() on:click=save_assignment.clone()>
                                    "Save assignment"
                                </button>
                            </div>

                            <div class="workflow-step">
                                <span class="editor-label">"Investigation"</span>
                                <textarea placeholder="Investigation report"
                                    prop:value=move || investigation.get()
                                    on:input=move |ev| set_investigation.set(textarea_value(&ev)) />
                                <button prop:disabled=move || saving.get() on:click=save_investigation.clone()>
                                    "Submit investigation"
                                </button>
                            </div>

                            <div class="workflow-step">
                                <span class="editor-label">"Finalize"</span>
                                <textarea placeholder="Final report"
                                    prop:value=move || final_report.get()
                                    on:input=move |ev| set_final_report.set(textarea_value(&ev)) />
                                <label class="checkbox-label">
                                    <input type="checkbox"
                                        prop:checked=move || mark_resolved.get()
                                        on:change=move |ev| set_mark_resolved.set(crate::components::form::checkbox_checked(&ev)) />
                                    "Mark resolved"
                                </label>
                                <button prop:disabled=move || saving.get() on:click=save_finalization.clone()>
                                    "Finalize"
                                </button>
                            </div>

                            <div class="workflow-step">
                                <span class="editor-label">"Status"</span>
                                <select on:change=move |ev| set_next_status.set(select_value(&ev))>
                                    {COMPLAINT_STATUSES.iter().map(|s| view! {
                                        <option value=*s selected=*s == "investigating">{*s}</option>
                                    }).collect_view()}
                                </select>
                                <button prop:disabled=move || saving.get() on:click=change_status.clone()>
                                    "Change status"
                                </button>
                            </div>

                            <div class="workflow-step">
                                <span class="editor-label">"Linked records"</span>
                                <button prop:disabled=move || saving.get() on:click=spawn_dof.clone()>
                                    "Create DÖF task"
                                </button>
                                <button prop:disabled=move || saving.get() on:click=spawn_capa.clone()>
                                    "Create CAPA"
                                </button>
                                <label>"Attach file"
                                    <input type="file" on:change=attach.clone() prop:disabled=move || saving.get() />
                                </label>
                            </div>
                        </div>

                        {(!row.status_history.is_empty()).then(|| view! {
                            <div class="history-section">
                                <span class="editor-label">"Status history"</span>
                                <ul class="revision-list">
                                    {row.status_history.iter().map(|entry| view! {
                                        <li>
                                            {format!(
                                                "{} — {} by {}",
                                                fmt_datetime(&entry.changed_at),
                                                entry.status,
                                                entry.changed_by,
                                            )}
                                        </li>
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
fn CategoryList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (categories, set_categories) = signal(Vec::<ComplaintCategory>::new());
    let (error, set_error) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_categories.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_complaint_categories(&snapshot).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_categories.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        if name_value.is_empty() {
            set_error.set("Category name is required".to_string());
            return;
        }
        let payload = ComplaintCategoryCreate {
            name: name_value,
            description: optional(&description.get()),
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_complaint_category(&snapshot, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    set_name.set(String::new());
                    set_description.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    let toggle_active = move |category_id: String, is_active: bool| {
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            let payload = ComplaintCategoryUpdate {
                is_active: Some(!is_active),
                ..Default::default()
            };
            match api::update_complaint_category(&snapshot, &category_id, &payload).await {
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
            <form class="record-form inline" on:submit=submit>
                <input type="text" placeholder="Category name *"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(input_value(&ev)) />
                <input type="text" placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(input_value(&ev)) />
                <button type="submit" prop:disabled=move || saving.get()>"Add category"</button>
            </form>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Description"</th><th>"Active"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || categories.get()
                        key=|category| (category.id.clone(), category.updated_at)
                        children=move |category| {
                            let id = category.id.clone();
                            let is_active = category.is_active;
                            view! {
                                <tr>
                                    <td>{category.name.clone()}</td>
                                    <td>{category.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{if is_active { "yes" } else { "no" }}</td>
                                    <td>
                                        <button on:click=move |_| toggle_active(id.clone(), is_active)>
                                            {if is_active { "Deactivate" } else { "Activate" }}
                                        </button>
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
fn CategoryReportView() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (report, set_report) = signal::<Option<CategoryReport>>(None);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_report.set(None);
            return;
        }
        spawn_local(async move {
            match api::complaint_category_report(&snapshot).await {
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
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match report.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(report) => view! {
                    <p class="report-total">{format!("{} complaints", report.total)}</p>
                    <table class="data-table">
                        <thead>
                            <tr><th>"Category"</th><th>"Count"</th><th>"By status"</th><th>"By priority"</th></tr>
                        </thead>
                        <tbody>
                            {report.categories.iter().map(|row| {
                                let mut statuses: Vec<String> = row.status_counts.iter()
                                    .map(|(status, count)| format!("{status}: {count}"))
                                    .collect();
                                statuses.sort();
                                let mut priorities: Vec<String> = row.priority_counts.iter()
                                    .map(|(priority, count)| format!("{priority}: {count}"))
                                    .collect();
                                priorities.sort();
                                view! {
                                    <tr>
                                        <td>{row.category_name.clone()}</td>
                                        <td>{row.count}</td>
                                        <td>{statuses.join(", ")}</td>
                                        <td>{priorities.join(", ")}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </div>
    }
}
