//! Risk Matrix & Trend View
//!
//! Renders the precomputed 5×5 likelihood-by-impact matrix and the
//! portfolio score trend. No scoring arithmetic happens here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_datetime, fmt_score};
use crate::models::risk::{RiskMatrixSummary, RiskTrendPoint};

#[component]
pub fn RiskMatrixView() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (summary, set_summary) = signal::<Option<RiskMatrixSummary>>(None);
    let (trend, set_trend) = signal(Vec::<RiskTrendPoint>::new());
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_summary.set(None);
            set_trend.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::risk_matrix(&snapshot).await {
                Ok(matrix) => {
                    set_error.set(String::new());
                    set_summary.set(Some(matrix));
                }
                Err(err) => set_error.set(err.to_string()),
            }
            match api::risk_trends(&snapshot, None, 20).await {
                Ok(points) => set_trend.set(points.points),
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    view! {
        <div class="matrix-view">
            {move || (!error.get().is_empty()).then(|| view! {
                <p class="error-text">{error.get()}</p>
            })}

            {move || match summary.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(summary) => view! {
                    <table class="risk-matrix">
                        <tbody>
                            // Highest likelihood row on top.
                            {summary.matrix.iter().rev().map(|row| view! {
                                <tr>
                                    {row.iter().map(|cell| view! {
                                        <td
                                            class="matrix-cell"
                                            style=format!("background-color: {};", cell.color)
                                            title=format!("L{} × I{}: {}", cell.row, cell.col, cell.label)
                                        >
                                            <span class="matrix-count">{cell.count}</span>
                                            <span class="matrix-label">{cell.label.clone()}</span>
                                        </td>
                                    }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}

            <div class="trend-section">
                <span class="editor-label">"Recent score trend"</span>
                {move || if trend.get().is_empty() {
                    view! { <p class="empty-message">"No trend points recorded yet"</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table compact">
                            <thead>
                                <tr><th>"Recorded"</th><th>"Inherent"</th><th>"Residual"</th><th>"Status"</th></tr>
                            </thead>
                            <tbody>
                                {trend.get().iter().map(|point| view! {
                                    <tr>
                                        <td>{fmt_datetime(&point.recorded_at)}</td>
                                        <td>{fmt_score(point.inherent_score)}</td>
                                        <td>{fmt_score(point.residual_score)}</td>
                                        <td>{point.status.clone()}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
