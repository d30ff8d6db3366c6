//! Risk Settings View
//!
//! Edit the scoring formulas and level thresholds. The matrix level
//! grid and palette are shown read-only; they rarely change and the
//! backend validates whatever is sent back.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::input_value;
use crate::connection::{self, use_connection};
use crate::models::risk::RiskSettings;
use crate::parse::parse_optional_number;

#[component]
pub fn RiskSettingsView() -> impl IntoView {
    let conn = use_connection();

    let (settings, set_settings) = signal::<Option<RiskSettings>>(None);
    let (formula, set_formula) = signal(String::new());
    let (residual_formula, set_residual_formula) = signal(String::new());
    let (thresholds, set_thresholds) = signal(Vec::<(String, String)>::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(String::new());
    let (saved, set_saved) = signal(false);

    Effect::new(move |_| {
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_settings.set(None);
            return;
        }
        spawn_local(async move {
            match api::get_risk_settings(&snapshot).await {
                Ok(loaded) => {
                    set_formula.set(loaded.formula.clone());
                    set_residual_formula.set(loaded.residual_formula.clone().unwrap_or_default());
                    set_thresholds.set(
                        loaded
                            .thresholds
                            .iter()
                            .map(|(level, value)| (level.clone(), value.to_string()))
                            .collect(),
                    );
                    set_error.set(String::new());
                    set_settings.set(Some(loaded));
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut payload) = settings.get() else {
            return;
        };
        payload.formula = formula.get().trim().to_string();
        payload.residual_formula = {
            let text = residual_formula.get().trim().to_string();
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        };
        for (level, raw) in thresholds.get() {
            match parse_optional_number(&raw) {
                Ok(Some(value)) => {
                    payload.thresholds.insert(level, value);
                }
                Ok(None) => {}
                Err(err) => {
                    set_error.set(err);
                    return;
                }
            }
        }
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::update_risk_settings(&snapshot, &payload).await {
                Ok(updated) => {
                    set_error.set(String::new());
                    set_saved.set(true);
                    set_settings.set(Some(updated));
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="settings-view">
            {move || (!error.get().is_empty()).then(|| view! {
                <p class="error-text">{error.get()}</p>
            })}

            {move || settings.get().map(|current| view! {
                <form class="record-form" on:submit=save.clone()>
                    <label class="editor-label">"Inherent formula"</label>
                    <input type="text"
                        prop:value=move || formula.get()
                        on:input=move |ev| set_formula.set(input_value(&ev)) />
                    <label class="editor-label">"Residual formula"</label>
                    <input type="text"
                        prop:value=move || residual_formula.get()
                        on:input=move |ev| set_residual_formula.set(input_value(&ev)) />

                    <span class="editor-label">"Level thresholds"</span>
                    <div class="form-row">
                        <For
                            each={move || thresholds.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(_, (level, _))| level.clone()
                            children=move |(index, (level, value))| {
                                view! {
                                    <label>{level.clone()}
                                        <input type="number" step="0.5"
                                            prop:value=value.clone()
                                            on:change=move |ev| {
                                                let raw = input_value(&ev);
                                                set_thresholds.update(|list| {
                                                    if let Some(entry) = list.get_mut(index) {
                                                        entry.1 = raw.clone();
                                                    }
                                                });
                                            }
                                        />
                                    </label>
                                }
                            }
                        />
                    </div>

                    <span class="editor-label">"Matrix levels"</span>
                    <table class="data-table compact">
                        <tbody>
                            {current.matrix.iter().rev().map(|row| view! {
                                <tr>
                                    {row.iter().map(|level| {
                                        let color = current
                                            .palette
                                            .get(level)
                                            .cloned()
                                            .unwrap_or_else(|| "#cccccc".to_string());
                                        view! {
                                            <td style=format!("background-color: {color};")>{level.clone()}</td>
                                        }
                                    }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>

                    <button type="submit" prop:disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save settings" }}
                    </button>
                    {move || saved.get().then(|| view! { <span class="save-note">"Saved"</span> })}
                </form>
            })}
        </div>
    }
}
