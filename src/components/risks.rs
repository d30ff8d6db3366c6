//! Risk Register Module
//!
//! List/detail over `/risks` with revision history, comparison, matrix
//! and settings tabs. All scoring is server-side; this module only
//! submits clamped inputs and renders what comes back.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::{input_value, optional, select_value, textarea_value};
use crate::components::risk_compare::RevisionCompare;
use crate::components::risk_matrix::RiskMatrixView;
use crate::components::risk_settings::RiskSettingsView;
use crate::components::status_badge::StatusBadge;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_date, fmt_datetime, fmt_opt_score, fmt_score, parse_date_input};
use crate::models::risk::{RiskAssessment, RiskCreate, RiskFactor, RiskRevision, RiskUpdate};
use crate::parse::{parse_optional_number, parse_scale, parse_weight, split_comma_list};

const RISK_STATUSES: &[&str] = &["identified", "assessed", "mitigating", "monitoring", "closed"];

#[derive(Clone, Copy, PartialEq)]
enum RiskTab {
    Register,
    Matrix,
    Settings,
}

#[component]
pub fn RisksModule() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (tab, set_tab) = signal(RiskTab::Register);

    // List state
    let (risks, set_risks) = signal(Vec::<RiskAssessment>::new());
    let (loading, set_loading) = signal(false);
    let (list_error, set_list_error) = signal(String::new());

    // Filters
    let (status_filter, set_status_filter) = signal(String::new());
    let (category_filter, set_category_filter) = signal(String::new());
    let (owner_filter, set_owner_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let (selected, set_selected) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);

    // Load the register whenever filters, connection or trigger change.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_risks.set(Vec::new());
            return;
        }
        let status = status_filter.get();
        let category = category_filter.get();
        let owner = owner_filter.get();
        let search_text = search.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_risks(&snapshot, &status, &category, &owner, &search_text).await {
                Ok(rows) => {
                    set_list_error.set(String::new());
                    set_risks.set(rows);
                }
                Err(err) => set_list_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="module risks-module">
            <div class="module-header">
                <h1>"Risk Register"</h1>
                <div class="tab-bar">
                    <button
                        class=move || if tab.get() == RiskTab::Register { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(RiskTab::Register)
                    >"Register"</button>
                    <button
                        class=move || if tab.get() == RiskTab::Matrix { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(RiskTab::Matrix)
                    >"Matrix & Trend"</button>
                    <button
                        class=move || if tab.get() == RiskTab::Settings { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_tab.set(RiskTab::Settings)
                    >"Settings"</button>
                </div>
            </div>

            {move || match tab.get() {
                RiskTab::Matrix => view! { <RiskMatrixView /> }.into_any(),
                RiskTab::Settings => view! { <RiskSettingsView /> }.into_any(),
                RiskTab::Register => view! {
                    <div class="module-body">
                        <div class="filter-row">
                            <select on:change=move |ev| set_status_filter.set(select_value(&ev))>
                                <option value="">"All statuses"</option>
                                {RISK_STATUSES.iter().map(|s| view! {
                                    <option value=*s>{*s}</option>
                                }).collect_view()}
                            </select>
                            <input
                                type="text"
                                placeholder="Category"
                                prop:value=move || category_filter.get()
                                on:change=move |ev| set_category_filter.set(input_value(&ev))
                            />
                            <input
                                type="text"
                                placeholder="Owner"
                                prop:value=move || owner_filter.get()
                                on:change=move |ev| set_owner_filter.set(input_value(&ev))
                            />
                            <input
                                type="text"
                                placeholder="Search code / title / process"
                                prop:value=move || search.get()
                                on:change=move |ev| set_search.set(input_value(&ev))
                            />
                            <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                                {move || if show_form.get() { "Close form" } else { "New risk" }}
                            </button>
                        </div>

                        {move || (!list_error.get().is_empty()).then(|| view! {
                            <p class="error-text">{list_error.get()}</p>
                        })}
                        {move || show_form.get().then(|| view! { <NewRiskForm /> })}
                        {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Code"</th>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Owner"</th>
                                    <th>"Inherent"</th>
                                    <th>"Residual"</th>
                                    <th>"Status"</th>
                                    <th>"Updated"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || risks.get()
                                    key=|risk| (risk.id.clone(), risk.updated_at)
                                    children=move |risk| {
                                        let id = risk.id.clone();
                                        let is_selected = {
                                            let id = id.clone();
                                            move || selected.get().as_deref() == Some(id.as_str())
                                        };
                                        view! {
                                            <tr
                                                class=move || if is_selected() { "data-row selected" } else { "data-row" }
                                                on:click=move |_| set_selected.set(Some(id.clone()))
                                            >
                                                <td>{risk.risk_code.clone()}</td>
                                                <td>{risk.title.clone()}</td>
                                                <td>{risk.category.clone()}</td>
                                                <td>{risk.owner.clone()}</td>
                                                <td>{format!("{} ({})", fmt_score(risk.risk_score.inherent), risk.risk_score.inherent_level)}</td>
                                                <td>{format!("{} ({})", fmt_score(risk.risk_score.residual), risk.risk_score.residual_level)}</td>
                                                <td><StatusBadge status=risk.status.clone() /></td>
                                                <td>{fmt_date(Some(&risk.updated_at))}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        {move || risks.get().is_empty().then(|| view! {
                            <p class="empty-message">"No risks match the current filters"</p>
                        })}

                        {move || selected.get().map(|risk_id| view! {
                            <RiskDetail risk_id=risk_id on_close=Callback::new(move |_| set_selected.set(None)) />
                        })}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Create form. Likelihood and impact are clamped into [1,5] before
/// submit; controls effectiveness is only checked for being numeric.
#[component]
fn NewRiskForm() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (process, set_process) = signal(String::new());
    let (owner, set_owner) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(String::from("identified"));
    let (likelihood, set_likelihood) = signal(String::from("3"));
    let (impact, set_impact) = signal(String::from("3"));
    let (detection, set_detection) = signal(String::new());
    let (controls, set_controls) = signal(String::new());
    let (linked_capas, set_linked_capas) = signal(String::new());
    let (linked_findings, set_linked_findings) = signal(String::new());
    let (review_date, set_review_date) = signal(String::new());

    // Factor draft list plus its three entry fields
    let (factors, set_factors) = signal(Vec::<RiskFactor>::new());
    let (factor_name, set_factor_name) = signal(String::new());
    let (factor_value, set_factor_value) = signal(String::new());
    let (factor_weight, set_factor_weight) = signal(String::new());

    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    let add_factor = move |_| {
        let name = factor_name.get().trim().to_string();
        if name.is_empty() {
            set_form_error.set("Factor name is required".to_string());
            return;
        }
        let value = match factor_value.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_form_error.set("Factor value must be numeric".to_string());
                return;
            }
        };
        let weight = match parse_weight(&factor_weight.get()) {
            Ok(w) => w,
            Err(err) => {
                set_form_error.set(err);
                return;
            }
        };
        set_form_error.set(String::new());
        set_factors.update(|list| list.push(RiskFactor { name, value, weight }));
        set_factor_name.set(String::new());
        set_factor_value.set(String::new());
        set_factor_weight.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        let category_value = category.get().trim().to_string();
        let owner_value = owner.get().trim().to_string();
        if title_value.is_empty() || category_value.is_empty() || owner_value.is_empty() {
            set_form_error.set("Title, category and owner are required".to_string());
            return;
        }
        let likelihood_value = match parse_scale(&likelihood.get()) {
            Ok(v) => v,
            Err(err) => {
                set_form_error.set(err);
                return;
            }
        };
        let impact_value = match parse_scale(&impact.get()) {
            Ok(v) => v,
            Err(err) => {
                set_form_error.set(err);
                return;
            }
        };
        let detection_value = match parse_optional_number(&detection.get()) {
            Ok(v) => v,
            Err(err) => {
                set_form_error.set(err);
                return;
            }
        };
        // Numeric check only; the [0,1] range is left to the server.
        let controls_value = match parse_optional_number(&controls.get()) {
            Ok(v) => v,
            Err(err) => {
                set_form_error.set(err);
                return;
            }
        };
        let payload = RiskCreate {
            title: title_value,
            category: category_value,
            process: optional(&process.get()),
            owner: owner_value,
            description: optional(&description.get()),
            status: status.get(),
            likelihood: likelihood_value,
            impact: impact_value,
            detection: detection_value,
            controls_effectiveness: controls_value,
            custom_factors: factors.get(),
            linked_capa_ids: split_comma_list(&linked_capas.get()),
            linked_audit_finding_ids: split_comma_list(&linked_findings.get()),
            next_review_date: parse_date_input(&review_date.get()),
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_risk(&snapshot, &payload).await {
                Ok(_) => {
                    set_form_error.set(String::new());
                    set_title.set(String::new());
                    set_category.set(String::new());
                    set_process.set(String::new());
                    set_owner.set(String::new());
                    set_description.set(String::new());
                    set_likelihood.set("3".to_string());
                    set_impact.set("3".to_string());
                    set_detection.set(String::new());
                    set_controls.set(String::new());
                    set_linked_capas.set(String::new());
                    set_linked_findings.set(String::new());
                    set_review_date.set(String::new());
                    set_factors.set(Vec::new());
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
                <input type="text" placeholder="Category *"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(input_value(&ev)) />
                <input type="text" placeholder="Process"
                    prop:value=move || process.get()
                    on:input=move |ev| set_process.set(input_value(&ev)) />
                <input type="text" placeholder="Owner *"
                    prop:value=move || owner.get()
                    on:input=move |ev| set_owner.set(input_value(&ev)) />
            </div>
            <textarea placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(textarea_value(&ev)) />
            <div class="form-row">
                <select on:change=move |ev| set_status.set(select_value(&ev))>
                    {RISK_STATUSES.iter().map(|s| view! {
                        <option value=*s selected=*s == "identified">{*s}</option>
                    }).collect_view()}
                </select>
                <label>"Likelihood (1-5)"
                    <input type="number" min="1" max="5" step="0.5"
                        prop:value=move || likelihood.get()
                        on:input=move |ev| set_likelihood.set(input_value(&ev)) />
                </label>
                <label>"Impact (1-5)"
                    <input type="number" min="1" max="5" step="0.5"
                        prop:value=move || impact.get()
                        on:input=move |ev| set_impact.set(input_value(&ev)) />
                </label>
                <label>"Detection"
                    <input type="number" step="0.5"
                        prop:value=move || detection.get()
                        on:input=move |ev| set_detection.set(input_value(&ev)) />
                </label>
                <label>"Controls effectiveness"
                    <input type="number" step="0.05"
                        prop:value=move || controls.get()
                        on:input=move |ev| set_controls.set(input_value(&ev)) />
                </label>
            </div>
            <div class="form-row">
                <input type="text" placeholder="Linked CAPA ids (comma separated)"
                    prop:value=move || linked_capas.get()
                    on:input=move |ev| set_linked_capas.set(input_value(&ev)) />
                <input type="text" placeholder="Linked finding ids (comma separated)"
                    prop:value=move || linked_findings.get()
                    on:input=move |ev| set_linked_findings.set(input_value(&ev)) />
                <label>"Next review"
                    <input type="date"
                        prop:value=move || review_date.get()
                        on:input=move |ev| set_review_date.set(input_value(&ev)) />
                </label>
            </div>

            <div class="factor-editor">
                <span class="editor-label">"Custom factors"</span>
                <div class="form-row">
                    <input type="text" placeholder="Name"
                        prop:value=move || factor_name.get()
                        on:input=move |ev| set_factor_name.set(input_value(&ev)) />
                    <input type="text" placeholder="Value"
                        prop:value=move || factor_value.get()
                        on:input=move |ev| set_factor_value.set(input_value(&ev)) />
                    <input type="text" placeholder="Weight (default 1)"
                        prop:value=move || factor_weight.get()
                        on:input=move |ev| set_factor_weight.set(input_value(&ev)) />
                    <button type="button" on:click=add_factor>"Add factor"</button>
                </div>
                <For
                    each={move || factors.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(i, f)| (*i, f.name.clone())
                    children=move |(index, factor)| {
                        view! {
                            <div class="factor-row">
                                <span>{factor.name.clone()}</span>
                                <span>{fmt_score(factor.value)}</span>
                                <span>{format!("w={}", fmt_score(factor.weight))}</span>
                                <button type="button" on:click=move |_| {
                                    set_factors.update(|list| { list.remove(index); });
                                }>"×"</button>
                            </div>
                        }
                    }
                />
            </div>

            {move || (!form_error.get().is_empty()).then(|| view! {
                <p class="error-text">{form_error.get()}</p>
            })}
            <button type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Create risk" }}
            </button>
        </form>
    }
}

/// Detail pane: current assessment, re-assessment form, revision
/// history with comparison, and the rendered executive report.
#[component]
fn RiskDetail(risk_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<RiskAssessment>>(None);
    let (revisions, set_revisions) = signal(Vec::<RiskRevision>::new());
    let (detail_error, set_detail_error) = signal(String::new());

    // Re-assessment form
    let (status, set_status) = signal(String::new());
    let (likelihood, set_likelihood) = signal(String::new());
    let (impact, set_impact) = signal(String::new());
    let (controls, set_controls) = signal(String::new());
    let (revision_note, set_revision_note) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (save_error, set_save_error) = signal(String::new());

    let (report_html, set_report_html) = signal(String::new());

    let id_for_load = risk_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_risk(&snapshot, &id, true).await {
                Ok(risk) => {
                    set_status.set(risk.status.clone());
                    set_likelihood.set(fmt_score(risk.likelihood));
                    set_impact.set(fmt_score(risk.impact));
                    set_controls.set(
                        risk.controls_effectiveness
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    );
                    set_detail_error.set(String::new());
                    set_detail.set(Some(risk));
                }
                Err(err) => {
                    set_detail.set(None);
                    set_detail_error.set(err.to_string());
                    return;
                }
            }
            // Revision list comes from its own endpoint, already sorted.
            match api::list_risk_revisions(&snapshot, &id).await {
                Ok(rows) => set_revisions.set(rows),
                Err(_) => set_revisions.set(Vec::new()),
            }
        });
    });

    let id_for_save = risk_id.clone();
    let save_assessment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let likelihood_value = match parse_scale(&likelihood.get()) {
            Ok(v) => v,
            Err(err) => {
                set_save_error.set(err);
                return;
            }
        };
        let impact_value = match parse_scale(&impact.get()) {
            Ok(v) => v,
            Err(err) => {
                set_save_error.set(err);
                return;
            }
        };
        let controls_value = match parse_optional_number(&controls.get()) {
            Ok(v) => v,
            Err(err) => {
                set_save_error.set(err);
                return;
            }
        };
        let payload = RiskUpdate {
            status: Some(status.get()),
            likelihood: Some(likelihood_value),
            impact: Some(impact_value),
            controls_effectiveness: controls_value,
            revision_note: optional(&revision_note.get()),
            ..Default::default()
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_save.clone();
        set_saving.set(true);
        spawn_local(async move {
            match api::update_risk(&snapshot, &id, &payload).await {
                Ok(_) => {
                    set_save_error.set(String::new());
                    set_revision_note.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_save_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    let id_for_report = risk_id.clone();
    let generate_report = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_report.clone();
        spawn_local(async move {
            match api::risk_custom_report(&snapshot, &id).await {
                Ok(report) => set_report_html.set(report.body),
                Err(err) => set_detail_error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|r| format!("{} — {}", r.risk_code, r.title)).unwrap_or_else(|| "Risk".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            {move || (!detail_error.get().is_empty()).then(|| view! {
                <p class="error-text">{detail_error.get()}</p>
            })}

            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(risk) => {
                    let revisions = revisions.get();
                    let risk_id = risk.id.clone();
                    view! {
                        <div class="detail-body">
                            <dl class="detail-grid">
                                <dt>"Owner"</dt><dd>{risk.owner.clone()}</dd>
                                <dt>"Category"</dt><dd>{risk.category.clone()}</dd>
                                <dt>"Process"</dt><dd>{risk.process.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                <dt>"Inherent score"</dt>
                                <dd>{format!("{} ({})", fmt_score(risk.risk_score.inherent), risk.risk_score.inherent_level)}</dd>
                                <dt>"Residual score"</dt>
                                <dd>{format!("{} ({})", fmt_score(risk.risk_score.residual), risk.risk_score.residual_level)}</dd>
                                <dt>"Detection"</dt><dd>{fmt_opt_score(risk.detection)}</dd>
                                <dt>"Next review"</dt><dd>{fmt_date(risk.next_review_date.as_ref())}</dd>
                                <dt>"Last reviewed"</dt><dd>{fmt_date(risk.last_reviewed_at.as_ref())}</dd>
                            </dl>

                            {(!risk.custom_factors.is_empty()).then(|| view! {
                                <div class="factor-list">
                                    <span class="editor-label">"Factors"</span>
                                    {risk.custom_factors.iter().map(|f| view! {
                                        <span class="factor-chip">
                                            {format!("{}: {} (w={})", f.name, fmt_score(f.value), fmt_score(f.weight))}
                                        </span>
                                    }).collect_view()}
                                </div>
                            })}

                            <form class="record-form" on:submit=save_assessment.clone()>
                                <span class="editor-label">"Re-assess"</span>
                                <div class="form-row">
                                    <select on:change=move |ev| set_status.set(select_value(&ev))>
                                        {RISK_STATUSES.iter().map(|s| {
                                            let current = status.get_untracked();
                                            view! { <option value=*s selected=*s == current>{*s}</option> }
                                        }).collect_view()}
                                    </select>
                                    <label>"Likelihood"
                                        <input type="number" min="1" max="5" step="0.5"
                                            prop:value=move || likelihood.get()
                                            on:input=move |ev| set_likelihood.set(input_value(&ev)) />
                                    </label>
                                    <label>"Impact"
                                        <input type="number" min="1" max="5" step="0.5"
                                            prop:value=move || impact.get()
                                            on:input=move |ev| set_impact.set(input_value(&ev)) />
                                    </label>
                                    <label>"Controls effectiveness"
                                        <input type="number" step="0.05"
                                            prop:value=move || controls.get()
                                            on:input=move |ev| set_controls.set(input_value(&ev)) />
                                    </label>
                                    <input type="text" placeholder="Revision note"
                                        prop:value=move || revision_note.get()
                                        on:input=move |ev| set_revision_note.set(input_value(&ev)) />
                                    <button type="submit" prop:disabled=move || saving.get()>
                                        {move || if saving.get() { "Saving..." } else { "Save assessment" }}
                                    </button>
                                </div>
                                {move || (!save_error.get().is_empty()).then(|| view! {
                                    <p class="error-text">{save_error.get()}</p>
                                })}
                            </form>

                            <div class="revision-section">
                                <span class="editor-label">
                                    {format!("Revisions ({})", revisions.len())}
                                </span>
                                <ul class="revision-list">
                                    {revisions.iter().map(|rev| view! {
                                        <li>
                                            {format!(
                                                "#{} — {} by {}{}",
                                                rev.revision_no,
                                                fmt_datetime(&rev.changed_at),
                                                rev.changed_by,
                                                rev.note.as_deref().map(|n| format!(" ({n})")).unwrap_or_default(),
                                            )}
                                        </li>
                                    }).collect_view()}
                                </ul>
                                <RevisionCompare risk_id=risk_id.clone() revisions=revisions.clone() />
                            </div>

                            {(!risk.trend.is_empty()).then(|| view! {
                                <div class="trend-section">
                                    <span class="editor-label">"Score trend"</span>
                                    <table class="data-table compact">
                                        <thead>
                                            <tr><th>"Recorded"</th><th>"Inherent"</th><th>"Residual"</th><th>"Status"</th></tr>
                                        </thead>
                                        <tbody>
                                            {risk.trend.iter().map(|point| view! {
                                                <tr>
                                                    <td>{fmt_datetime(&point.recorded_at)}</td>
                                                    <td>{fmt_score(point.inherent_score)}</td>
                                                    <td>{fmt_score(point.residual_score)}</td>
                                                    <td>{point.status.clone()}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            })}

                            <div class="report-section">
                                <button on:click=generate_report.clone()>"Executive report"</button>
                                {move || (!report_html.get().is_empty()).then(|| view! {
                                    <div class="report-body" inner_html=report_html.get()></div>
                                })}
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
