//! Documents Module
//!
//! Folder tree, controlled document list, approval queue and the status
//! report. Document state changes flow through the approval queue; this
//! module never mutates status directly.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::{checkbox_checked, input_value, optional, picked_file, select_value, textarea_value};
use crate::components::status_badge::StatusBadge;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_date, fmt_datetime, parse_date_input};
use crate::markdown;
use crate::models::document::*;
use crate::parse::split_comma_list;

const DOCUMENT_TYPES: &[&str] = &["SOP", "Specification", "Procedure", "Policy"];
const DOCUMENT_STATUSES: &[&str] = &["draft", "review", "approved", "archived", "retired"];
const PRINCIPAL_TYPES: &[&str] = &["user", "role", "department", "group"];

#[derive(Clone, Copy, PartialEq)]
enum DocTab {
    Documents,
    Folders,
    Approvals,
    Report,
}

#[component]
pub fn DocumentsModule() -> impl IntoView {
    let (tab, set_tab) = signal(DocTab::Documents);

    let tab_button = move |target: DocTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == target { "tab-btn active" } else { "tab-btn" }
                on:click=move |_| set_tab.set(target)
            >{label}</button>
        }
    };

    view! {
        <div class="module documents-module">
            <div class="module-header">
                <h1>"Documents"</h1>
                <div class="tab-bar">
                    {tab_button(DocTab::Documents, "Register")}
                    {tab_button(DocTab::Folders, "Folders")}
                    {tab_button(DocTab::Approvals, "Approvals")}
                    {tab_button(DocTab::Report, "Report")}
                </div>
            </div>
            {move || match tab.get() {
                DocTab::Documents => view! { <DocumentList /> }.into_any(),
                DocTab::Folders => view! { <FolderList /> }.into_any(),
                DocTab::Approvals => view! { <ApprovalQueue /> }.into_any(),
                DocTab::Report => view! { <DocumentReport /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DocumentList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (documents, set_documents) = signal(Vec::<Document>::new());
    let (folders, set_folders) = signal(Vec::<DocumentFolder>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let (status_filter, set_status_filter) = signal(String::new());
    let (type_filter, set_type_filter) = signal(String::new());
    let (folder_filter, set_folder_filter) = signal(String::new());
    let (search_input, set_search_input) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let (selected, set_selected) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);

    // Debounce free-text search so each keystroke does not hit the API.
    Effect::new(move |_| {
        let text = search_input.get();
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if search_input.get_untracked() == text {
                set_search.set(text);
            }
        });
    });

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_documents.set(Vec::new());
            set_folders.set(Vec::new());
            return;
        }
        let status = status_filter.get();
        let doc_type = type_filter.get();
        let folder = folder_filter.get();
        let search_text = search.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_documents(&snapshot, &status, &doc_type, "", &folder, &search_text).await
            {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_documents.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
            if let Ok(loaded) = api::list_document_folders(&snapshot).await {
                set_folders.set(loaded);
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="module-body">
            <div class="filter-row">
                <select on:change=move |ev| set_status_filter.set(select_value(&ev))>
                    <option value="">"All statuses"</option>
                    {DOCUMENT_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| set_type_filter.set(select_value(&ev))>
                    <option value="">"All types"</option>
                    {DOCUMENT_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| set_folder_filter.set(select_value(&ev))>
                    <option value="">"All folders"</option>
                    <For
                        each=move || folders.get()
                        key=|folder| folder.id.clone()
                        children=move |folder| view! {
                            <option value=folder.id.clone()>{folder.name.clone()}</option>
                        }
                    />
                </select>
                <input
                    type="text"
                    placeholder="Search title or code"
                    prop:value=move || search_input.get()
                    on:input=move |ev| set_search_input.set(input_value(&ev))
                />
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close form" } else { "New document" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || show_form.get().then(|| view! { <NewDocumentForm folders=folders /> })}
            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Title"</th>
                        <th>"Type"</th>
                        <th>"Version"</th>
                        <th>"Status"</th>
                        <th>"Updated"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || documents.get()
                        key=|doc| (doc.id.clone(), doc.updated_at)
                        children=move |doc| {
                            let id = doc.id.clone();
                            view! {
                                <tr class="data-row" on:click=move |_| set_selected.set(Some(id.clone()))>
                                    <td>{doc.code.clone()}</td>
                                    <td>{doc.title.clone()}</td>
                                    <td>{doc.document_type.clone()}</td>
                                    <td>{doc.version.clone()}</td>
                                    <td><StatusBadge status=doc.status.clone() /></td>
                                    <td>{fmt_date(Some(&doc.updated_at))}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || documents.get().is_empty().then(|| view! {
                <p class="empty-message">"No documents match the current filters"</p>
            })}

            {move || selected.get().map(|document_id| view! {
                <DocumentDetail
                    document_id=document_id
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn NewDocumentForm(folders: ReadSignal<Vec<DocumentFolder>>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (folder_id, set_folder_id) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (doc_type, set_doc_type) = signal(String::from("SOP"));
    let (department, set_department) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (review_date, set_review_date) = signal(String::new());
    let (expiry_date, set_expiry_date) = signal(String::new());

    // Distribution: one principal type plus a comma list of ids.
    let (dist_type, set_dist_type) = signal(String::from("user"));
    let (dist_ids, set_dist_ids) = signal(String::new());
    let (dist_required, set_dist_required) = signal(true);

    // Single approval stage; approvers as a comma list.
    let (approvers, set_approvers) = signal(String::new());
    let (approval_type, set_approval_type) = signal(String::from("all"));

    let (file_id, set_file_id) = signal(String::new());
    let (uploading, set_uploading) = signal(false);

    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    let upload = move |ev: web_sys::Event| {
        let Some(file) = picked_file(&ev) else { return };
        let snapshot = connection::snapshot(&conn);
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_file(&snapshot, &file, "document", None).await {
                Ok(uploaded) => {
                    set_form_error.set(String::new());
                    set_file_id.set(uploaded.file_id);
                }
                Err(err) => set_form_error.set(err.to_string()),
            }
            set_uploading.set(false);
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let folder = folder_id.get();
        let title_value = title.get().trim().to_string();
        if folder.is_empty() || title_value.is_empty() {
            set_form_error.set("Folder and title are required".to_string());
            return;
        }
        let distribution_list: Vec<DocumentDistribution> = split_comma_list(&dist_ids.get())
            .into_iter()
            .map(|principal_id| DocumentDistribution {
                principal_type: dist_type.get(),
                principal_id,
                required_to_read: dist_required.get(),
            })
            .collect();
        let approver_ids = split_comma_list(&approvers.get());
        let approval_matrix = if approver_ids.is_empty() {
            Vec::new()
        } else {
            vec![DocumentApprovalStage {
                stage: 1,
                approvers: approver_ids,
                approval_type: approval_type.get(),
                deadline: None,
                status: "pending".to_string(),
                decided_by: None,
                decided_at: None,
                comment: None,
                decisions: Vec::new(),
            }]
        };
        let payload = DocumentCreate {
            folder_id: folder,
            title: title_value,
            document_type: doc_type.get(),
            department: optional(&department.get()),
            description: optional(&description.get()),
            tags: split_comma_list(&tags.get()),
            distribution_list,
            approval_matrix,
            file_id: optional(&file_id.get()),
            review_date: parse_date_input(&review_date.get()),
            expiry_date: parse_date_input(&expiry_date.get()),
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_document(&snapshot, &payload).await {
                Ok(_) => {
                    set_form_error.set(String::new());
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_tags.set(String::new());
                    set_dist_ids.set(String::new());
                    set_approvers.set(String::new());
                    set_file_id.set(String::new());
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
                <select on:change=move |ev| set_folder_id.set(select_value(&ev))>
                    <option value="">"Select folder *"</option>
                    <For
                        each=move || folders.get()
                        key=|folder| folder.id.clone()
                        children=move |folder| view! {
                            <option value=folder.id.clone()>{folder.name.clone()}</option>
                        }
                    />
                </select>
                <input type="text" placeholder="Title *"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(input_value(&ev)) />
                <select on:change=move |ev| set_doc_type.set(select_value(&ev))>
                    {DOCUMENT_TYPES.iter().map(|t| view! {
                        <option value=*t selected=*t == "SOP">{*t}</option>
                    }).collect_view()}
                </select>
                <input type="text" placeholder="Department"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(input_value(&ev)) />
            </div>
            <textarea placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(textarea_value(&ev)) />
            <div class="form-row">
                <input type="text" placeholder="Tags (comma separated)"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(input_value(&ev)) />
                <label>"Review date"
                    <input type="date"
                        prop:value=move || review_date.get()
                        on:input=move |ev| set_review_date.set(input_value(&ev)) />
                </label>
                <label>"Expiry date"
                    <input type="date"
                        prop:value=move || expiry_date.get()
                        on:input=move |ev| set_expiry_date.set(input_value(&ev)) />
                </label>
            </div>
            <div class="form-row">
                <select on:change=move |ev| set_dist_type.set(select_value(&ev))>
                    {PRINCIPAL_TYPES.iter().map(|p| view! {
                        <option value=*p selected=*p == "user">{*p}</option>
                    }).collect_view()}
                </select>
                <input type="text" placeholder="Distribution principals (comma separated)"
                    prop:value=move || dist_ids.get()
                    on:input=move |ev| set_dist_ids.set(input_value(&ev)) />
                <label class="checkbox-label">
                    <input type="checkbox"
                        prop:checked=move || dist_required.get()
                        on:change=move |ev| set_dist_required.set(checkbox_checked(&ev)) />
                    "Required to read"
                </label>
            </div>
            <div class="form-row">
                <input type="text" placeholder="Stage 1 approvers (comma separated)"
                    prop:value=move || approvers.get()
                    on:input=move |ev| set_approvers.set(input_value(&ev)) />
                <select on:change=move |ev| set_approval_type.set(select_value(&ev))>
                    <option value="all" selected=true>"all must approve"</option>
                    <option value="any">"any may approve"</option>
                </select>
                <label>"File"
                    <input type="file" on:change=upload prop:disabled=move || uploading.get() />
                </label>
                {move || (!file_id.get().is_empty()).then(|| view! {
                    <span class="save-note">"File attached"</span>
                })}
            </div>
            {move || (!form_error.get().is_empty()).then(|| view! {
                <p class="error-text">{form_error.get()}</p>
            })}
            <button type="submit" prop:disabled=move || saving.get() || uploading.get()>
                {move || if saving.get() { "Saving..." } else { "Create document" }}
            </button>
        </form>
    }
}

#[component]
fn DocumentDetail(document_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<Document>>(None);
    let (preview, set_preview) = signal::<Option<DocumentPreview>>(None);
    let (file_meta, set_file_meta) = signal::<Option<FileMetadata>>(None);
    let (receipts, set_receipts) = signal(Vec::<DocumentReadReceipt>::new());
    let (error, set_error) = signal(String::new());
    let (acknowledging, set_acknowledging) = signal(false);

    // Metadata edit draft, pre-filled from the loaded document.
    let (title_edit, set_title_edit) = signal(String::new());
    let (description_edit, set_description_edit) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let id_for_load = document_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_document(&snapshot, &id).await {
                Ok(doc) => {
                    set_title_edit.set(doc.title.clone());
                    set_description_edit.set(doc.description.clone().unwrap_or_default());
                    set_error.set(String::new());
                    set_detail.set(Some(doc));
                }
                Err(err) => {
                    set_detail.set(None);
                    set_error.set(err.to_string());
                    return;
                }
            }
            // Preview and file metadata are best-effort extras.
            match api::get_document_preview(&snapshot, &id).await {
                Ok(loaded) => set_preview.set(Some(loaded)),
                Err(_) => set_preview.set(None),
            }
            match api::get_document_file(&snapshot, &id).await {
                Ok(meta) => set_file_meta.set(Some(meta)),
                Err(_) => set_file_meta.set(None),
            }
            match api::list_read_receipts(&snapshot, &id).await {
                Ok(rows) => set_receipts.set(rows),
                Err(_) => set_receipts.set(Vec::new()),
            }
        });
    });

    let id_for_save = document_id.clone();
    let save_metadata = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title_edit.get().trim().to_string();
        if title.is_empty() {
            set_error.set("Title cannot be empty".to_string());
            return;
        }
        let payload = DocumentUpdate {
            title: Some(title),
            description: optional(&description_edit.get()),
            ..Default::default()
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_save.clone();
        set_saving.set(true);
        spawn_local(async move {
            match api::update_document(&snapshot, &id, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    let id_for_ack = document_id.clone();
    let acknowledge = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_ack.clone();
        set_acknowledging.set(true);
        spawn_local(async move {
            match api::acknowledge_document(&snapshot, &id, None).await {
                Ok(_) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_acknowledging.set(false);
        });
    };

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|d| format!("{} — {}", d.code, d.title)).unwrap_or_else(|| "Document".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(doc) => view! {
                    <div class="detail-body">
                        <dl class="detail-grid">
                            <dt>"Type"</dt><dd>{doc.document_type.clone()}</dd>
                            <dt>"Department"</dt><dd>{doc.department.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Version"</dt><dd>{doc.version.clone()}</dd>
                            <dt>"Status"</dt><dd><StatusBadge status=doc.status.clone() /></dd>
                            <dt>"Review"</dt><dd>{fmt_date(doc.review_date.as_ref())}</dd>
                            <dt>"Expiry"</dt><dd>{fmt_date(doc.expiry_date.as_ref())}</dd>
                            <dt>"Published"</dt><dd>{fmt_date(doc.published_at.as_ref())}</dd>
                            <dt>"Tags"</dt><dd>{doc.tags.join(", ")}</dd>
                        </dl>

                        <form class="record-form inline" on:submit=save_metadata.clone()>
                            <input type="text" placeholder="Title"
                                prop:value=move || title_edit.get()
                                on:input=move |ev| set_title_edit.set(input_value(&ev)) />
                            <input type="text" placeholder="Description"
                                prop:value=move || description_edit.get()
                                on:input=move |ev| set_description_edit.set(input_value(&ev)) />
                            <button type="submit" prop:disabled=move || saving.get()>"Save metadata"</button>
                        </form>

                        {(!doc.approval_matrix.is_empty()).then(|| view! {
                            <div class="stage-list">
                                <span class="editor-label">"Approval stages"</span>
                                {doc.approval_matrix.iter().map(|stage| view! {
                                    <div class="stage-row">
                                        {format!(
                                            "Stage {} ({}) — {}: {}",
                                            stage.stage,
                                            stage.approval_type,
                                            stage.status,
                                            stage.approvers.join(", "),
                                        )}
                                    </div>
                                }).collect_view()}
                            </div>
                        })}

                        {move || file_meta.get().map(|meta| view! {
                            <p class="file-meta">
                                <a href=meta.download_url.clone() target="_blank">
                                    {format!("{} ({} bytes)", meta.original_filename, meta.file_size)}
                                </a>
                            </p>
                        })}

                        {move || preview.get().map(|preview| match preview.kind.as_str() {
                            "html" => view! {
                                <div class="preview-body" inner_html=preview.content.clone().unwrap_or_default()></div>
                            }.into_any(),
                            "text" => view! {
                                <div class="preview-body"
                                    inner_html=markdown::parse_markdown(&preview.content.clone().unwrap_or_default())>
                                </div>
                            }.into_any(),
                            "slides" => view! {
                                <div class="preview-slides">
                                    {preview.slides.clone().unwrap_or_default().into_iter().map(|slide| view! {
                                        <img class="preview-slide" src=slide />
                                    }).collect_view()}
                                </div>
                            }.into_any(),
                            _ => view! {
                                <p class="hint-text">"No inline preview for this file type."</p>
                            }.into_any(),
                        })}

                        <div class="receipt-section">
                            <span class="editor-label">"Read receipts"</span>
                            <table class="data-table compact">
                                <thead>
                                    <tr><th>"User"</th><th>"Required"</th><th>"Status"</th><th>"Read at"</th></tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || receipts.get()
                                        key=|receipt| receipt.user_id.clone()
                                        children=move |receipt| view! {
                                            <tr>
                                                <td>{receipt.user_id.clone()}</td>
                                                <td>{if receipt.required { "yes" } else { "no" }}</td>
                                                <td>{receipt.status.clone()}</td>
                                                <td>{receipt.read_at.map(|ts| fmt_datetime(&ts)).unwrap_or_else(|| "-".to_string())}</td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                            <button prop:disabled=move || acknowledging.get() on:click=acknowledge.clone()>
                                {move || if acknowledging.get() { "Recording..." } else { "Acknowledge read" }}
                            </button>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn FolderList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (folders, set_folders) = signal(Vec::<DocumentFolder>::new());
    let (error, set_error) = signal(String::new());

    let (name, set_name) = signal(String::new());
    let (prefix, set_prefix) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_folders.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_document_folders(&snapshot).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_folders.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let rename_folder = move |folder_id: String, raw: String| {
        let name = raw.trim().to_string();
        if name.is_empty() {
            return;
        }
        let snapshot = connection::snapshot(&conn);
        spawn_local(async move {
            let payload = DocumentFolderUpdate {
                name: Some(name),
                ..Default::default()
            };
            match api::update_document_folder(&snapshot, &folder_id, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        if name_value.is_empty() {
            set_error.set("Folder name is required".to_string());
            return;
        }
        let payload = DocumentFolderCreate {
            name: name_value,
            code_prefix: optional(&prefix.get()),
            department: optional(&department.get()),
            description: None,
            parent_id: None,
            permissions: Vec::new(),
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_document_folder(&snapshot, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    set_name.set(String::new());
                    set_prefix.set(String::new());
                    set_department.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="module-body">
            <form class="record-form inline" on:submit=submit>
                <input type="text" placeholder="Folder name *"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(input_value(&ev)) />
                <input type="text" placeholder="Code prefix"
                    prop:value=move || prefix.get()
                    on:input=move |ev| set_prefix.set(input_value(&ev)) />
                <input type="text" placeholder="Department"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(input_value(&ev)) />
                <button type="submit" prop:disabled=move || saving.get()>"Create folder"</button>
            </form>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Prefix"</th><th>"Department"</th><th>"Code pattern"</th><th>"Capabilities"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || folders.get()
                        key=|folder| folder.id.clone()
                        children=move |folder| {
                            let folder_id = folder.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        <input type="text"
                                            prop:value=folder.name.clone()
                                            on:change=move |ev| {
                                                rename_folder(folder_id.clone(), input_value(&ev));
                                            }
                                        />
                                    </td>
                                    <td>{folder.code_prefix.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{folder.department.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{folder.auto_code_pattern.clone()}</td>
                                    <td>{folder.current_user_capabilities.join(", ")}</td>
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
fn ApprovalQueue() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (tasks, set_tasks) = signal(Vec::<DocumentApprovalTask>::new());
    let (error, set_error) = signal(String::new());
    let (comment, set_comment) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_tasks.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::pending_approvals(&snapshot).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_tasks.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let decide = move |document_id: String, stage: i32, decision: &'static str| {
        let snapshot = connection::snapshot(&conn);
        let note = comment.get();
        spawn_local(async move {
            let payload = ApprovalDecision {
                stage,
                decision: decision.to_string(),
                comment: if note.trim().is_empty() { None } else { Some(note) },
            };
            match api::decide_approval(&snapshot, &document_id, &payload).await {
                Ok(_) => {
                    set_error.set(String::new());
                    set_comment.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="module-body">
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            <input type="text" placeholder="Decision comment"
                prop:value=move || comment.get()
                on:input=move |ev| set_comment.set(input_value(&ev)) />
            <table class="data-table">
                <thead>
                    <tr><th>"Code"</th><th>"Title"</th><th>"Stage"</th><th>"Deadline"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || tasks.get()
                        key=|task| (task.document_id.clone(), task.stage)
                        children=move |task| {
                            let approve_id = task.document_id.clone();
                            let reject_id = task.document_id.clone();
                            let stage = task.stage;
                            view! {
                                <tr>
                                    <td>{task.document_code.clone()}</td>
                                    <td>{task.title.clone()}</td>
                                    <td>{format!("{} ({})", task.stage, task.approval_type)}</td>
                                    <td>{fmt_date(task.deadline.as_ref())}</td>
                                    <td>
                                        <button class="confirm-btn"
                                            on:click=move |_| decide(approve_id.clone(), stage, "approved")>
                                            "Approve"
                                        </button>
                                        <button class="cancel-btn"
                                            on:click=move |_| decide(reject_id.clone(), stage, "rejected")>
                                            "Reject"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || tasks.get().is_empty().then(|| view! {
                <p class="empty-message">"Nothing waiting for your approval"</p>
            })}
        </div>
    }
}

#[component]
fn DocumentReport() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (report, set_report) = signal::<Option<DocumentStatusReport>>(None);
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
            match api::document_status_report(&snapshot, &dept, "", "").await {
                Ok(loaded) => {
                    set_error.set(String::new());
                    set_report.set(Some(loaded));
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let export_url = move || api::document_status_report_export_url(&connection::snapshot(&conn));

    let count_table = |title: &'static str, counts: Vec<(String, i64)>| {
        view! {
            <div class="report-block">
                <span class="editor-label">{title}</span>
                <table class="data-table compact">
                    <tbody>
                        {counts.into_iter().map(|(key, count)| view! {
                            <tr><td>{key}</td><td>{count}</td></tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
    };

    view! {
        <div class="module-body">
            <div class="filter-row">
                <input type="text" placeholder="Department filter"
                    prop:value=move || department.get()
                    on:change=move |ev| set_department.set(input_value(&ev)) />
                <a class="export-link" href=export_url target="_blank">"Export spreadsheet"</a>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match report.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(report) => {
                    let mut status_counts: Vec<(String, i64)> = report.status_counts.clone().into_iter().collect();
                    status_counts.sort();
                    let mut department_counts: Vec<(String, i64)> = report.department_counts.clone().into_iter().collect();
                    department_counts.sort();
                    let mut type_counts: Vec<(String, i64)> = report.type_counts.clone().into_iter().collect();
                    type_counts.sort();
                    view! {
                        <p class="report-total">{format!("{} documents", report.total)}</p>
                        <div class="report-grid">
                            {count_table("By status", status_counts)}
                            {count_table("By department", department_counts)}
                            {count_table("By type", type_counts)}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
