//! Status Badge Component

use leptos::prelude::*;

/// Colored pill for record statuses. The status string doubles as a CSS
/// class suffix (underscores swapped for dashes).
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!("status-badge status-{}", status.replace('_', "-"));
    let label = status.replace('_', " ");
    view! { <span class=class>{label}</span> }
}
