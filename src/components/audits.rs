//! Audits Module
//!
//! Audit planning, status transitions, findings, and the reusable
//! question bank feeding new-audit checklists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::form::{input_value, optional, select_value, textarea_value};
use crate::components::status_badge::StatusBadge;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_date, parse_date_input};
use crate::models::audit::*;
use crate::parse::split_comma_list;

const AUDIT_STATUSES: &[&str] = &["planned", "in_progress", "completed", "cancelled"];
const FINDING_TYPES: &[&str] = &["observation", "minor", "major", "critical"];
const FINDING_STATUSES: &[&str] = &["open", "in_progress", "closed"];

#[derive(Clone, Copy, PartialEq)]
enum AuditTab {
    Audits,
    Questions,
}

#[component]
pub fn AuditsModule() -> impl IntoView {
    let (tab, set_tab) = signal(AuditTab::Audits);

    view! {
        <div class="module audits-module">
            <div class="module-header">
                <h1>"Audits"</h1>
                <div class="tab-bar">
                    <button
                        class=move || if tab.get() == AuditTab::Audits { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(AuditTab::Audits)
                    >"Audits"</button>
                    <button
                        class=move || if tab.get() == AuditTab::Questions { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(AuditTab::Questions)
                    >"Question bank"</button>
                </div>
            </div>
            {move || match tab.get() {
                AuditTab::Audits => view! { <AuditList /> }.into_any(),
                AuditTab::Questions => view! { <QuestionBank /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AuditList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (audits, set_audits) = signal(Vec::<Audit>::new());
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
            set_audits.set(Vec::new());
            return;
        }
        let status = status_filter.get();
        let department = department_filter.get();
        let search_text = search.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_audits(&snapshot, &status, "", &department, &search_text).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_audits.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="module-body">
            <div class="filter-row">
                <select on:change=move |ev| set_status_filter.set(select_value(&ev))>
                    <option value="">"All statuses"</option>
                    {AUDIT_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
                <input type="text" placeholder="Department"
                    prop:value=move || department_filter.get()
                    on:change=move |ev| set_department_filter.set(input_value(&ev)) />
                <input type="text" placeholder="Search"
                    prop:value=move || search.get()
                    on:change=move |ev| set_search.set(input_value(&ev)) />
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close form" } else { "New audit" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || show_form.get().then(|| view! { <NewAuditForm /> })}
            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Type"</th>
                        <th>"Scope"</th>
                        <th>"Department"</th>
                        <th>"Window"</th>
                        <th>"Findings"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || audits.get()
                        key=|audit| (audit.id.clone(), audit.updated_at)
                        children=move |audit| {
                            let id = audit.id.clone();
                            view! {
                                <tr class="data-row" on:click=move |_| set_selected.set(Some(id.clone()))>
                                    <td>{audit.audit_code.clone()}</td>
                                    <td>{audit.audit_type.clone()}</td>
                                    <td>{audit.scope.clone()}</td>
                                    <td>{audit.department.clone()}</td>
                                    <td>{format!(
                                        "{} – {}",
                                        fmt_date(Some(&audit.start_date)),
                                        fmt_date(Some(&audit.end_date)),
                                    )}</td>
                                    <td>{audit.findings.len()}</td>
                                    <td><StatusBadge status=audit.status.clone() /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || audits.get().is_empty().then(|| view! {
                <p class="empty-message">"No audits match the current filters"</p>
            })}

            {move || selected.get().map(|audit_id| view! {
                <AuditDetail audit_id=audit_id on_close=Callback::new(move |_| set_selected.set(None)) />
            })}
        </div>
    }
}

#[component]
fn NewAuditForm() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (audit_type, set_audit_type) = signal(String::from("internal"));
    let (scope, set_scope) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (lead_auditor, set_lead_auditor) = signal(String::new());
    let (objectives, set_objectives) = signal(String::new());
    let (team, set_team) = signal(String::new());

    // Question-bank picks become the initial checklist.
    let (questions, set_questions) = signal(Vec::<AuditQuestion>::new());
    let (picked, set_picked) = signal(Vec::<String>::new());

    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    Effect::new(move |_| {
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_questions.set(Vec::new());
            return;
        }
        spawn_local(async move {
            if let Ok(loaded) = api::list_audit_questions(&snapshot, "", "").await {
                set_questions.set(loaded);
            }
        });
    });

    let toggle_pick = move |question_id: String| {
        set_picked.update(|list| {
            if let Some(pos) = list.iter().position(|id| *id == question_id) {
                list.remove(pos);
            } else {
                list.push(question_id);
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let scope_value = scope.get().trim().to_string();
        let department_value = department.get().trim().to_string();
        let lead_value = lead_auditor.get().trim().to_string();
        if scope_value.is_empty() || department_value.is_empty() || lead_value.is_empty() {
            set_form_error.set("Scope, department and lead auditor are required".to_string());
            return;
        }
        let (Some(start), Some(end)) = (
            parse_date_input(&start_date.get()),
            parse_date_input(&end_date.get()),
        ) else {
            set_form_error.set("Start and end dates are required".to_string());
            return;
        };
        let picked_ids = picked.get();
        let checklist: Vec<AuditChecklistItem> = questions
            .get()
            .into_iter()
            .filter(|question| picked_ids.contains(&question.id))
            .map(|question| AuditChecklistItem {
                id: String::new(),
                question_id: Some(question.id),
                question: Some(question.question),
                response: None,
                status: "pending".to_string(),
                note: None,
            })
            .collect();
        let audit_team: Vec<AuditTeamMember> = split_comma_list(&team.get())
            .into_iter()
            .map(|user_id| AuditTeamMember {
                user_id,
                role: "auditor".to_string(),
                full_name: None,
            })
            .collect();
        let payload = AuditCreate {
            audit_type: audit_type.get(),
            scope: scope_value,
            department: department_value,
            start_date: start,
            end_date: end,
            lead_auditor: lead_value,
            audit_team: if audit_team.is_empty() { None } else { Some(audit_team) },
            auditee_representative: None,
            objectives: optional(&objectives.get()),
            checklist: if checklist.is_empty() { None } else { Some(checklist) },
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_audit(&snapshot, &payload).await {
                Ok(_) => {
                    set_form_error.set(String::new());
                    set_scope.set(String::new());
                    set_department.set(String::new());
                    set_lead_auditor.set(String::new());
                    set_objectives.set(String::new());
                    set_team.set(String::new());
                    set_picked.set(Vec::new());
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
                <select on:change=move |ev| set_audit_type.set(select_value(&ev))>
                    <option value="internal" selected=true>"internal"</option>
                    <option value="external">"external"</option>
                    <option value="supplier">"supplier"</option>
                </select>
                <input type="text" placeholder="Scope *"
                    prop:value=move || scope.get()
                    on:input=move |ev| set_scope.set(input_value(&ev)) />
                <input type="text" placeholder="Department *"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(input_value(&ev)) />
                <input type="text" placeholder="Lead auditor *"
                    prop:value=move || lead_auditor.get()
                    on:input=move |ev| set_lead_auditor.set(input_value(&ev)) />
            </div>
            <div class="form-row">
                <label>"Start"
                    <input type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| set_start_date.set(input_value(&ev)) />
                </label>
                <label>"End"
                    <input type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| set_end_date.set(input_value(&ev)) />
                </label>
                <input type="text" placeholder="Audit team (comma separated)"
                    prop:value=move || team.get()
                    on:input=move |ev| set_team.set(input_value(&ev)) />
            </div>
            <textarea placeholder="Objectives"
                prop:value=move || objectives.get()
                on:input=move |ev| set_objectives.set(textarea_value(&ev)) />

            {move || (!questions.get().is_empty()).then(|| view! {
                <div class="question-picker">
                    <span class="editor-label">
                        {move || format!("Checklist questions ({} picked)", picked.get().len())}
                    </span>
                    <For
                        each=move || questions.get()
                        key=|question| question.id.clone()
                        children=move |question| {
                            let id = question.id.clone();
                            let check_id = id.clone();
                            let is_picked = move || picked.get().contains(&check_id);
                            view! {
                                <label class="checkbox-label">
                                    <input type="checkbox"
                                        prop:checked=is_picked
                                        on:change=move |_| toggle_pick(id.clone()) />
                                    {question.question.clone()}
                                </label>
                            }
                        }
                    />
                </div>
            })}

            {move || (!form_error.get().is_empty()).then(|| view! {
                <p class="error-text">{form_error.get()}</p>
            })}
            <button type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Plan audit" }}
            </button>
        </form>
    }
}

#[component]
fn AuditDetail(audit_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<Audit>>(None);
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let (next_status, set_next_status) = signal(String::from("in_progress"));
    let (status_note, set_status_note) = signal(String::new());
    let (objectives_edit, set_objectives_edit) = signal(String::new());

    let (finding_type, set_finding_type) = signal(String::from("observation"));
    let (finding_description, set_finding_description) = signal(String::new());
    let (finding_reference, set_finding_reference) = signal(String::new());

    let id_for_load = audit_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_audit(&snapshot, &id).await {
                Ok(audit) => {
                    set_objectives_edit.set(audit.objectives.clone().unwrap_or_default());
                    set_error.set(String::new());
                    set_detail.set(Some(audit));
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

    let id_for_status = audit_id.clone();
    let change_status = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_status.clone();
        let payload = AuditStatusUpdate {
            status: next_status.get(),
            note: optional(&status_note.get()),
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::set_audit_status(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_objectives = audit_id.clone();
    let save_objectives = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_objectives.clone();
        let payload = AuditUpdate {
            objectives: optional(&objectives_edit.get()),
            ..Default::default()
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::update_audit(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_finding = audit_id.clone();
    let add_finding = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let description = finding_description.get().trim().to_string();
        if description.is_empty() {
            set_error.set("Finding description is required".to_string());
            return;
        }
        let payload = AuditFindingCreate {
            finding_type: finding_type.get(),
            description,
            requirement_reference: optional(&finding_reference.get()),
            related_capa_id: None,
            corrective_action: None,
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_finding.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::add_audit_finding(&snapshot, &id, &payload)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            if result.is_ok() {
                set_finding_description.set(String::new());
                set_finding_reference.set(String::new());
            }
            finish(result);
        });
    };

    let id_for_finding_status = audit_id.clone();
    let close_finding = move |finding_id: String| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_finding_status.clone();
        set_saving.set(true);
        spawn_local(async move {
            let payload = AuditFindingUpdate {
                status: Some("closed".to_string()),
                ..Default::default()
            };
            finish(
                api::update_audit_finding(&snapshot, &id, &finding_id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|a| format!("{} — {}", a.audit_code, a.scope)).unwrap_or_else(|| "Audit".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(audit) => view! {
                    <div class="detail-body">
                        <dl class="detail-grid">
                            <dt>"Status"</dt><dd><StatusBadge status=audit.status.clone() /></dd>
                            <dt>"Lead auditor"</dt><dd>{audit.lead_auditor.clone()}</dd>
                            <dt>"Window"</dt>
                            <dd>{format!(
                                "{} – {}",
                                fmt_date(Some(&audit.start_date)),
                                fmt_date(Some(&audit.end_date)),
                            )}</dd>
                            <dt>"Team"</dt>
                            <dd>{audit.audit_team.iter().map(|m| m.user_id.clone()).collect::<Vec<_>>().join(", ")}</dd>
                            <dt>"Objectives"</dt>
                            <dd>{audit.objectives.clone().unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>

                        {(!audit.checklist.is_empty()).then(|| view! {
                            <div class="checklist-section">
                                <span class="editor-label">"Checklist"</span>
                                <table class="data-table compact">
                                    <thead>
                                        <tr><th>"Question"</th><th>"Status"</th><th>"Note"</th></tr>
                                    </thead>
                                    <tbody>
                                        {audit.checklist.iter().map(|item| view! {
                                            <tr>
                                                <td>{item.question.clone().unwrap_or_default()}</td>
                                                <td>{item.status.clone()}</td>
                                                <td>{item.note.clone().unwrap_or_default()}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        })}

                        <div class="workflow-step">
                            <span class="editor-label">"Objectives"</span>
                            <textarea placeholder="Objectives"
                                prop:value=move || objectives_edit.get()
                                on:input=move |ev| set_objectives_edit.set(textarea_value(&ev)) />
                            <button prop:disabled=move || saving.get() on:click=save_objectives.clone()>
                                "Save objectives"
                            </button>
                        </div>

                        <div class="workflow-step">
                            <span class="editor-label">"Status"</span>
                            <select on:change=move |ev| set_next_status.set(select_value(&ev))>
                                {AUDIT_STATUSES.iter().map(|s| view! {
                                    <option value=*s selected=*s == "in_progress">{*s}</option>
                                }).collect_view()}
                            </select>
                            <input type="text" placeholder="Note"
                                prop:value=move || status_note.get()
                                on:input=move |ev| set_status_note.set(input_value(&ev)) />
                            <button prop:disabled=move || saving.get() on:click=change_status.clone()>
                                "Change status"
                            </button>
                        </div>

                        <div class="finding-section">
                            <span class="editor-label">{format!("Findings ({})", audit.findings.len())}</span>
                            <table class="data-table compact">
                                <thead>
                                    <tr><th>"Type"</th><th>"Description"</th><th>"Reference"</th><th>"Status"</th><th></th></tr>
                                </thead>
                                <tbody>
                                    {audit.findings.iter().map(|finding| {
                                        let finding_id = finding.id.clone();
                                        let is_open = finding.status != "closed";
                                        let close = close_finding.clone();
                                        view! {
                                            <tr>
                                                <td>{finding.finding_type.clone()}</td>
                                                <td>{finding.description.clone()}</td>
                                                <td>{finding.requirement_reference.clone().unwrap_or_default()}</td>
                                                <td>{finding.status.clone()}</td>
                                                <td>
                                                    {is_open.then(|| view! {
                                                        <button on:click=move |_| close(finding_id.clone())>
                                                            "Close"
                                                        </button>
                                                    })}
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>

                            <form class="record-form inline" on:submit=add_finding.clone()>
                                <select on:change=move |ev| set_finding_type.set(select_value(&ev))>
                                    {FINDING_TYPES.iter().map(|t| view! {
                                        <option value=*t selected=*t == "observation">{*t}</option>
                                    }).collect_view()}
                                </select>
                                <input type="text" placeholder="Description *"
                                    prop:value=move || finding_description.get()
                                    on:input=move |ev| set_finding_description.set(input_value(&ev)) />
                                <input type="text" placeholder="Requirement reference"
                                    prop:value=move || finding_reference.get()
                                    on:input=move |ev| set_finding_reference.set(input_value(&ev)) />
                                <button type="submit" prop:disabled=move || saving.get()>"Add finding"</button>
                            </form>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn QuestionBank() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (questions, set_questions) = signal(Vec::<AuditQuestion>::new());
    let (error, set_error) = signal(String::new());

    let (question, set_question) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (reference, set_reference) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_questions.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_audit_questions(&snapshot, "", "").await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_questions.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let question_text = question.get().trim().to_string();
        if question_text.is_empty() {
            set_error.set("Question text is required".to_string());
            return;
        }
        let tag_list = split_comma_list(&tags.get());
        let payload = AuditQuestionCreate {
            question: question_text,
            category: optional(&category.get()),
            requirement_reference: optional(&reference.get()),
            tags: if tag_list.is_empty() { None } else { Some(tag_list) },
            is_active: true,
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_audit_question(&snapshot, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    set_question.set(String::new());
                    set_category.set(String::new());
                    set_reference.set(String::new());
                    set_tags.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    let toggle_active = move |question_id: String, is_active: bool| {
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            let payload = AuditQuestionUpdate {
                is_active: Some(!is_active),
                ..Default::default()
            };
            match api::update_audit_question(&snapshot, &question_id, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    let delete_question = move |question_id: String| {
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            match api::delete_audit_question(&snapshot, &question_id).await {
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
                <input type="text" placeholder="Question *"
                    prop:value=move || question.get()
                    on:input=move |ev| set_question.set(input_value(&ev)) />
                <input type="text" placeholder="Category"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(input_value(&ev)) />
                <input type="text" placeholder="Requirement reference"
                    prop:value=move || reference.get()
                    on:input=move |ev| set_reference.set(input_value(&ev)) />
                <input type="text" placeholder="Tags (comma separated)"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(input_value(&ev)) />
                <button type="submit" prop:disabled=move || saving.get()>"Add question"</button>
            </form>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            <table class="data-table">
                <thead>
                    <tr><th>"Question"</th><th>"Category"</th><th>"Reference"</th><th>"Tags"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || questions.get()
                        key=|q| (q.id.clone(), q.updated_at)
                        children=move |q| {
                            let id = q.id.clone();
                            let toggle_id = q.id.clone();
                            let is_active = q.is_active;
                            view! {
                                <tr>
                                    <td>{q.question.clone()}</td>
                                    <td>{q.category.clone().unwrap_or_default()}</td>
                                    <td>{q.requirement_reference.clone().unwrap_or_default()}</td>
                                    <td>{q.tags.join(", ")}</td>
                                    <td>
                                        <button on:click=move |_| toggle_active(toggle_id.clone(), is_active)>
                                            {if is_active { "Deactivate" } else { "Activate" }}
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| delete_question(id.clone()))
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
