//! Revision Compare Component
//!
//! Side-by-side comparison of two risk revisions. The diff itself comes
//! from the server; this component only picks revision numbers and
//! renders the from/to table. Offered once two revisions exist, with
//! the two most recent pre-selected.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::select_value;
use crate::connection::{self, use_connection};
use crate::models::risk::{RiskCompareResponse, RiskRevision};

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[component]
pub fn RevisionCompare(risk_id: String, revisions: Vec<RiskRevision>) -> impl IntoView {
    let conn = use_connection();

    if revisions.len() < 2 {
        return view! {
            <p class="hint-text">"Comparison becomes available once at least two revisions exist."</p>
        }
        .into_any();
    }

    // Pre-select the two most recent revisions as base/target.
    let mut numbers: Vec<i64> = revisions.iter().map(|rev| rev.revision_no).collect();
    numbers.sort_unstable();
    let default_target = numbers[numbers.len() - 1];
    let default_base = numbers[numbers.len() - 2];

    let (base, set_base) = signal(default_base.to_string());
    let (target, set_target) = signal(default_target.to_string());
    let (result, set_result) = signal::<Option<RiskCompareResponse>>(None);
    let (comparing, set_comparing) = signal(false);
    let (error, set_error) = signal(String::new());

    let options = numbers.clone();
    let base_options = options.clone();
    let target_options = options;

    let compare = move |_| {
        // Whatever is selected is sent as-is; a missing revision comes
        // back as a server error, not a local check.
        let rev_a: i64 = match base.get().parse() {
            Ok(v) => v,
            Err(_) => return,
        };
        let rev_b: i64 = match target.get().parse() {
            Ok(v) => v,
            Err(_) => return,
        };
        let snapshot = connection::snapshot(&conn);
        let id = risk_id.clone();
        set_comparing.set(true);
        spawn_local(async move {
            match api::compare_risk_revisions(&snapshot, &id, rev_a, rev_b).await {
                Ok(diff) => {
                    set_error.set(String::new());
                    set_result.set(Some(diff));
                }
                Err(err) => {
                    set_result.set(None);
                    set_error.set(err.to_string());
                }
            }
            set_comparing.set(false);
        });
    };

    view! {
        <div class="revision-compare">
            <div class="form-row">
                <label>"Base"
                    <select on:change=move |ev| set_base.set(select_value(&ev))>
                        {base_options.iter().map(|no| view! {
                            <option value=no.to_string() selected=*no == default_base>
                                {format!("#{no}")}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label>"Target"
                    <select on:change=move |ev| set_target.set(select_value(&ev))>
                        {target_options.iter().map(|no| view! {
                            <option value=no.to_string() selected=*no == default_target>
                                {format!("#{no}")}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <button prop:disabled=move || comparing.get() on:click=compare>
                    {move || if comparing.get() { "Comparing..." } else { "Compare" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! {
                <p class="error-text">{error.get()}</p>
            })}

            {move || result.get().map(|diff| {
                if diff.diff.is_empty() {
                    return view! {
                        <p class="hint-text">
                            {format!("Revisions #{} and #{} are identical.", diff.base_revision, diff.target_revision)}
                        </p>
                    }.into_any();
                }
                view! {
                    <table class="data-table compact diff-table">
                        <thead>
                            <tr>
                                <th>"Field"</th>
                                <th>{format!("From #{}", diff.base_revision)}</th>
                                <th>{format!("To #{}", diff.target_revision)}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {diff.diff.iter().map(|(field, change)| view! {
                                <tr>
                                    <td>{field.clone()}</td>
                                    <td class="diff-from">{render_value(&change.from)}</td>
                                    <td class="diff-to">{render_value(&change.to)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            })}
        </div>
    }
    .into_any()
}
