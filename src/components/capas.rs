//! CAPA Module
//!
//! CAPA register with corrective/preventive action tracking and the
//! two-step closure workflow. Due dates are passed through as entered;
//! overdue marking is the server's job.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::{input_value, optional, select_value, textarea_value};
use crate::components::status_badge::StatusBadge;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_date, parse_date_input};
use crate::models::capa::*;
use crate::parse::split_comma_list;

const CAPA_SOURCES: &[&str] = &[
    "internal_audit",
    "customer_complaint",
    "management_review",
    "risk_assessment",
    "other",
];
const CAPA_STATUSES: &[&str] = &[
    "open",
    "investigating",
    "implementing",
    "pending_closure",
    "closed",
    "cancelled",
];
const ACTION_STATUSES: &[&str] = &["open", "in_progress", "completed", "overdue"];

#[component]
pub fn CapasModule() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (capas, set_capas) = signal(Vec::<Capa>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let (status_filter, set_status_filter) = signal(String::new());
    let (department_filter, set_department_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let (selected, set_selected) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_capas.set(Vec::new());
            return;
        }
        let status = status_filter.get();
        let department = department_filter.get();
        let search_text = search.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_capas(&snapshot, &status, &department, &search_text).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_capas.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="module capas-module">
            <div class="module-header">
                <h1>"CAPA"</h1>
            </div>
            <div class="module-body">
                <div class="filter-row">
                    <select on:change=move |ev| set_status_filter.set(select_value(&ev))>
                        <option value="">"All statuses"</option>
                        {CAPA_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                    </select>
                    <input type="text" placeholder="Department"
                        prop:value=move || department_filter.get()
                        on:change=move |ev| set_department_filter.set(input_value(&ev)) />
                    <input type="text" placeholder="Search"
                        prop:value=move || search.get()
                        on:change=move |ev| set_search.set(input_value(&ev)) />
                    <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                        {move || if show_form.get() { "Close form" } else { "New CAPA" }}
                    </button>
                </div>

                {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
                {move || show_form.get().then(|| view! { <NewCapaForm /> })}
                {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"No"</th>
                            <th>"Title"</th>
                            <th>"Source"</th>
                            <th>"Department"</th>
                            <th>"Target"</th>
                            <th>"Actions"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || capas.get()
                            key=|capa| (capa.id.clone(), capa.updated_at)
                            children=move |capa| {
                                let id = capa.id.clone();
                                let action_count =
                                    capa.corrective_actions.len() + capa.preventive_actions.len();
                                view! {
                                    <tr class="data-row" on:click=move |_| set_selected.set(Some(id.clone()))>
                                        <td>{capa.capa_no.clone()}</td>
                                        <td>{capa.title.clone()}</td>
                                        <td>{capa.source.clone()}</td>
                                        <td>{capa.department.clone()}</td>
                                        <td>{fmt_date(capa.target_date.as_ref())}</td>
                                        <td>{action_count}</td>
                                        <td><StatusBadge status=capa.status.clone() /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                {move || capas.get().is_empty().then(|| view! {
                    <p class="empty-message">"No CAPA records match the current filters"</p>
                })}

                {move || selected.get().map(|capa_id| view! {
                    <CapaDetail capa_id=capa_id on_close=Callback::new(move |_| set_selected.set(None)) />
                })}
            </div>
        </div>
    }
}

#[component]
fn NewCapaForm() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (source, set_source) = signal(String::from("internal_audit"));
    let (department, set_department) = signal(String::new());
    let (team_leader, set_team_leader) = signal(String::new());
    let (target_date, set_target_date) = signal(String::new());
    let (nonconformity, set_nonconformity) = signal(String::new());
    let (team, set_team) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        let department_value = department.get().trim().to_string();
        let leader_value = team_leader.get().trim().to_string();
        let nonconformity_value = nonconformity.get().trim().to_string();
        if title_value.is_empty()
            || department_value.is_empty()
            || leader_value.is_empty()
            || nonconformity_value.is_empty()
        {
            set_form_error
                .set("Title, department, team leader and nonconformity are required".to_string());
            return;
        }
        let team_members = split_comma_list(&team.get());
        let payload = CapaCreate {
            title: title_value,
            source: source.get(),
            department: department_value,
            team_leader: leader_value,
            target_date: parse_date_input(&target_date.get()),
            nonconformity_description: nonconformity_value,
            team_members: if team_members.is_empty() { None } else { Some(team_members) },
            linked_risk_ids: None,
            linked_audit_finding_ids: None,
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_capa(&snapshot, &payload).await {
                Ok(_) => {
                    set_form_error.set(String::new());
                    set_title.set(String::new());
                    set_department.set(String::new());
                    set_team_leader.set(String::new());
                    set_target_date.set(String::new());
                    set_nonconformity.set(String::new());
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
                <select on:change=move |ev| set_source.set(select_value(&ev))>
                    {CAPA_SOURCES.iter().map(|s| view! {
                        <option value=*s selected=*s == "internal_audit">{*s}</option>
                    }).collect_view()}
                </select>
                <input type="text" placeholder="Department *"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(input_value(&ev)) />
                <input type="text" placeholder="Team leader *"
                    prop:value=move || team_leader.get()
                    on:input=move |ev| set_team_leader.set(input_value(&ev)) />
                <label>"Target date"
                    <input type="date"
                        prop:value=move || target_date.get()
                        on:input=move |ev| set_target_date.set(input_value(&ev)) />
                </label>
            </div>
            <textarea placeholder="Nonconformity description *"
                prop:value=move || nonconformity.get()
                on:input=move |ev| set_nonconformity.set(textarea_value(&ev)) />
            <input type="text" placeholder="Team members (comma separated)"
                prop:value=move || team.get()
                on:input=move |ev| set_team.set(input_value(&ev)) />
            {move || (!form_error.get().is_empty()).then(|| view! {
                <p class="error-text">{form_error.get()}</p>
            })}
            <button type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Create CAPA" }}
            </button>
        </form>
    }
}

#[component]
fn ActionTable(
    title: &'static str,
    actions: Vec<CapaAction>,
    #[prop(into)] on_complete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="action-table">
            <span class="editor-label">{title}</span>
            {if actions.is_empty() {
                view! { <p class="empty-message">"None yet"</p> }.into_any()
            } else {
                view! {
                    <table class="data-table compact">
                        <thead>
                            <tr><th>"Action"</th><th>"Responsible"</th><th>"Due"</th><th>"Status"</th><th>"Completed"</th><th></th></tr>
                        </thead>
                        <tbody>
                            {actions.iter().map(|action| {
                                let action_id = action.id.clone();
                                let is_open = action.status != "completed";
                                view! {
                                    <tr>
                                        <td>{action.action_description.clone()}</td>
                                        <td>{action.responsible_person.clone()}</td>
                                        <td>{fmt_date(Some(&action.due_date))}</td>
                                        <td>{action.status.clone()}</td>
                                        <td>{fmt_date(action.completion_date.as_ref())}</td>
                                        <td>
                                            {is_open.then(|| view! {
                                                <button on:click=move |_| on_complete.run(action_id.clone())>
                                                    "Complete"
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn CapaDetail(capa_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<Capa>>(None);
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Analysis fields
    let (root_cause, set_root_cause) = signal(String::new());
    let (immediate_action, set_immediate_action) = signal(String::new());

    // New action draft; a past due date is accepted as-is.
    let (action_description, set_action_description) = signal(String::new());
    let (action_responsible, set_action_responsible) = signal(String::new());
    let (action_due, set_action_due) = signal(String::new());
    let (action_type, set_action_type) = signal(String::from("corrective"));
    let (action_status, set_action_status) = signal(String::from("open"));

    let (closure_note, set_closure_note) = signal(String::new());

    let id_for_load = capa_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_capa(&snapshot, &id).await {
                Ok(capa) => {
                    set_root_cause.set(capa.root_cause_analysis.clone().unwrap_or_default());
                    set_immediate_action.set(capa.immediate_action.clone().unwrap_or_default());
                    set_error.set(String::new());
                    set_detail.set(Some(capa));
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

    let id_for_analysis = capa_id.clone();
    let save_analysis = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_analysis.clone();
        let payload = CapaUpdate {
            root_cause_analysis: optional(&root_cause.get()),
            immediate_action: optional(&immediate_action.get()),
            ..Default::default()
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::update_capa(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_action = capa_id.clone();
    let add_action = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let description = action_description.get().trim().to_string();
        let responsible = action_responsible.get().trim().to_string();
        if description.is_empty() || responsible.is_empty() {
            set_error.set("Action description and responsible person are required".to_string());
            return;
        }
        let Some(due_date) = parse_date_input(&action_due.get()) else {
            set_error.set("A due date is required".to_string());
            return;
        };
        let payload = CapaActionCreate {
            action_description: description,
            responsible_person: responsible,
            due_date,
            action_type: action_type.get(),
            status: action_status.get(),
            evidence: None,
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_action.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::add_capa_action(&snapshot, &id, &payload)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            if result.is_ok() {
                set_action_description.set(String::new());
                set_action_responsible.set(String::new());
                set_action_due.set(String::new());
            }
            finish(result);
        });
    };

    let id_for_complete = capa_id.clone();
    let complete_action = Callback::new(move |action_id: String| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_complete.clone();
        set_saving.set(true);
        spawn_local(async move {
            let payload = CapaActionUpdate {
                status: Some("completed".to_string()),
                completion_date: Some(chrono::Utc::now()),
                ..Default::default()
            };
            finish(
                api::update_capa_action(&snapshot, &id, &action_id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    });

    let id_for_request = capa_id.clone();
    let request_closure = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_request.clone();
        let note = closure_note.get();
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::request_capa_closure(&snapshot, &id, optional(&note).as_deref())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_decide = capa_id.clone();
    let decide_closure = move |approve: bool| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_decide.clone();
        let note = closure_note.get();
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::decide_capa_closure(&snapshot, &id, approve, optional(&note).as_deref())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let decide_approve = decide_closure.clone();
    let decide_reject = decide_closure;

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|c| format!("{} — {}", c.capa_no, c.title)).unwrap_or_else(|| "CAPA".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(capa) => view! {
                    <div class="detail-body">
                        <dl class="detail-grid">
                            <dt>"Status"</dt><dd><StatusBadge status=capa.status.clone() /></dd>
                            <dt>"Source"</dt><dd>{capa.source.clone()}</dd>
                            <dt>"Department"</dt><dd>{capa.department.clone()}</dd>
                            <dt>"Team leader"</dt><dd>{capa.team_leader.clone()}</dd>
                            <dt>"Initiated"</dt><dd>{fmt_date(Some(&capa.initiated_date))}</dd>
                            <dt>"Target"</dt><dd>{fmt_date(capa.target_date.as_ref())}</dd>
                            <dt>"Team"</dt><dd>{capa.team_members.join(", ")}</dd>
                        </dl>
                        <p class="description-text">{capa.nonconformity_description.clone()}</p>

                        <div class="workflow-step">
                            <span class="editor-label">"Analysis"</span>
                            <textarea placeholder="Root cause analysis"
                                prop:value=move || root_cause.get()
                                on:input=move |ev| set_root_cause.set(textarea_value(&ev)) />
                            <textarea placeholder="Immediate action"
                                prop:value=move || immediate_action.get()
                                on:input=move |ev| set_immediate_action.set(textarea_value(&ev)) />
                            <button prop:disabled=move || saving.get() on:click=save_analysis.clone()>
                                "Save analysis"
                            </button>
                        </div>

                        <ActionTable
                            title="Corrective actions"
                            actions=capa.corrective_actions.clone()
                            on_complete=complete_action
                        />
                        <ActionTable
                            title="Preventive actions"
                            actions=capa.preventive_actions.clone()
                            on_complete=complete_action
                        />

                        <form class="record-form inline" on:submit=add_action.clone()>
                            <input type="text" placeholder="Action description *"
                                prop:value=move || action_description.get()
                                on:input=move |ev| set_action_description.set(input_value(&ev)) />
                            <input type="text" placeholder="Responsible *"
                                prop:value=move || action_responsible.get()
                                on:input=move |ev| set_action_responsible.set(input_value(&ev)) />
                            <input type="date"
                                prop:value=move || action_due.get()
                                on:input=move |ev| set_action_due.set(input_value(&ev)) />
                            <select on:change=move |ev| set_action_type.set(select_value(&ev))>
                                <option value="corrective" selected=true>"corrective"</option>
                                <option value="preventive">"preventive"</option>
                            </select>
                            <select on:change=move |ev| set_action_status.set(select_value(&ev))>
                                {ACTION_STATUSES.iter().map(|s| view! {
                                    <option value=*s selected=*s == "open">{*s}</option>
                                }).collect_view()}
                            </select>
                            <button type="submit" prop:disabled=move || saving.get()>"Add action"</button>
                        </form>

                        <div class="workflow-step">
                            <span class="editor-label">"Closure"</span>
                            <input type="text" placeholder="Closure note"
                                prop:value=move || closure_note.get()
                                on:input=move |ev| set_closure_note.set(input_value(&ev)) />
                            <button prop:disabled=move || saving.get() on:click=request_closure.clone()>
                                "Request closure"
                            </button>
                            <button prop:disabled=move || saving.get() on:click={
                                let decide = decide_approve.clone();
                                move |_| decide(true)
                            }>
                                "Approve closure"
                            </button>
                            <button prop:disabled=move || saving.get() on:click={
                                let decide = decide_reject.clone();
                                move |_| decide(false)
                            }>
                                "Reject closure"
                            </button>
                            {capa.closure_request_note.clone().map(|note| view! {
                                <p class="hint-text">{format!("Request note: {note}")}</p>
                            })}
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
