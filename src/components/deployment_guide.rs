//! Deployment Guide Module
//!
//! Read-only rendering of the server-parsed deployment document.
//! Code blocks are re-highlighted locally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::connection::{self, use_connection};
use crate::markdown;
use crate::models::meta::{DeploymentGuide, GuideBlock};

fn render_block(block: &GuideBlock) -> AnyView {
    match block.kind.as_str() {
        "code" => {
            let language = block.language.clone().unwrap_or_default();
            let code = block.lines.clone().unwrap_or_default().join("\n");
            let html = markdown::highlight_snippet(&language, &code);
            view! { <div class="guide-code" inner_html=html></div> }.into_any()
        }
        "unordered_list" | "ordered_list" => {
            let items = block.items.clone().unwrap_or_default();
            view! {
                <ul class="guide-list">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            }
            .into_any()
        }
        _ => {
            let text = block.text.clone().unwrap_or_default();
            view! { <p class="guide-paragraph">{text}</p> }.into_any()
        }
    }
}

#[component]
pub fn DeploymentGuideModule() -> impl IntoView {
    let conn = use_connection();

    let (guide, set_guide) = signal::<Option<DeploymentGuide>>(None);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_guide.set(None);
            return;
        }
        spawn_local(async move {
            match api::deployment_guide(&snapshot).await {
                Ok(loaded) => {
                    set_error.set(String::new());
                    set_guide.set(Some(loaded));
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    view! {
        <div class="module guide-module">
            <div class="module-header">
                <h1>{move || guide.get().map(|g| g.title).unwrap_or_else(|| "Deployment Guide".to_string())}</h1>
            </div>
            <div class="module-body">
                {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
                {move || match guide.get() {
                    None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    Some(guide) => view! {
                        <div class="guide-body">
                            {guide.sections.iter().map(|section| view! {
                                <section class="guide-section">
                                    <h2>{section.title.clone()}</h2>
                                    {section.body.clone().map(|body| view! {
                                        <p class="guide-paragraph">{body}</p>
                                    })}
                                    {section.blocks.iter().map(render_block).collect_view()}
                                    {section.subsections.iter().map(|sub| view! {
                                        <section class="guide-subsection">
                                            <h3>{sub.title.clone()}</h3>
                                            {sub.body.clone().map(|body| view! {
                                                <p class="guide-paragraph">{body}</p>
                                            })}
                                            {sub.blocks.iter().map(render_block).collect_view()}
                                        </section>
                                    }).collect_view()}
                                </section>
                            }).collect_view()}
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
