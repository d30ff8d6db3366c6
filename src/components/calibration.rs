//! Calibration Module
//!
//! Device inventory, calibration work orders with measurements and
//! costs, the due-date scheduler trigger, and the summary report.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::form::{checkbox_checked, input_value, optional, select_value};
use crate::components::status_badge::StatusBadge;
use crate::connection::{self, use_connection};
use crate::context::AppContext;
use crate::format::{fmt_date, fmt_score, parse_date_input};
use crate::models::calibration::*;
use crate::parse::parse_optional_number;

const DEVICE_STATUSES: &[&str] = &["active", "maintenance", "retired", "lost"];
const WORK_ORDER_STATUSES: &[&str] = &["planned", "in_progress", "completed", "cancelled"];

#[derive(Clone, Copy, PartialEq)]
enum CalTab {
    Devices,
    WorkOrders,
    Summary,
}

#[component]
pub fn CalibrationModule() -> impl IntoView {
    let (tab, set_tab) = signal(CalTab::Devices);

    let tab_button = move |target: CalTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == target { "tab-btn active" } else { "tab-btn" }
                on:click=move |_| set_tab.set(target)
            >{label}</button>
        }
    };

    view! {
        <div class="module calibration-module">
            <div class="module-header">
                <h1>"Calibration"</h1>
                <div class="tab-bar">
                    {tab_button(CalTab::Devices, "Devices")}
                    {tab_button(CalTab::WorkOrders, "Work orders")}
                    {tab_button(CalTab::Summary, "Summary")}
                </div>
            </div>
            {move || match tab.get() {
                CalTab::Devices => view! { <DeviceList /> }.into_any(),
                CalTab::WorkOrders => view! { <WorkOrderList /> }.into_any(),
                CalTab::Summary => view! { <CalibrationSummaryView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DeviceList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (devices, set_devices) = signal(Vec::<CalibrationDevice>::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let (status_filter, set_status_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (selected, set_selected) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_devices.set(Vec::new());
            return;
        }
        let status = status_filter.get();
        let search_text = search.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_devices(&snapshot, &status, "", "", &search_text).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_devices.set(rows);
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
                    {DEVICE_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
                <input type="text" placeholder="Search"
                    prop:value=move || search.get()
                    on:change=move |ev| set_search.set(input_value(&ev)) />
                <button on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close form" } else { "New device" }}
                </button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || show_form.get().then(|| view! { <NewDeviceForm /> })}
            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Department"</th>
                        <th>"Last calibrated"</th>
                        <th>"Next due"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || devices.get()
                        key=|device| (device.id.clone(), device.updated_at)
                        children=move |device| {
                            let id = device.id.clone();
                            view! {
                                <tr class="data-row" on:click=move |_| set_selected.set(Some(id.clone()))>
                                    <td>{device.device_code.clone()}</td>
                                    <td>{device.name.clone()}</td>
                                    <td>{device.category.clone()}</td>
                                    <td>{device.department.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{fmt_date(device.last_calibrated_at.as_ref())}</td>
                                    <td>{fmt_date(device.next_due_date.as_ref())}</td>
                                    <td><StatusBadge status=device.status.clone() /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || selected.get().map(|device_id| view! {
                <DeviceDetail device_id=device_id on_close=Callback::new(move |_| set_selected.set(None)) />
            })}
        </div>
    }
}

#[component]
fn NewDeviceForm() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (responsible, set_responsible) = signal(String::new());
    let (serial, set_serial) = signal(String::new());
    let (interval, set_interval) = signal(String::from("365"));
    let (last_calibrated, set_last_calibrated) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        let category_value = category.get().trim().to_string();
        if name_value.is_empty() || category_value.is_empty() {
            set_form_error.set("Name and category are required".to_string());
            return;
        }
        let interval_days = match interval.get().trim().parse::<i64>() {
            Ok(days) if days > 0 => days,
            _ => {
                set_form_error.set("Calibration interval must be a positive number of days".to_string());
                return;
            }
        };
        let payload = DeviceCreate {
            name: name_value,
            category: category_value,
            location: None,
            manufacturer: None,
            model: None,
            serial_number: optional(&serial.get()),
            department: optional(&department.get()),
            responsible_person: optional(&responsible.get()),
            calibration_interval_days: interval_days,
            notice_days: None,
            last_calibrated_at: parse_date_input(&last_calibrated.get()),
            next_due_date: None,
            notes: None,
        };
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_device(&snapshot, &payload).await {
                Ok(_) => {
                    set_form_error.set(String::new());
                    set_name.set(String::new());
                    set_category.set(String::new());
                    set_department.set(String::new());
                    set_responsible.set(String::new());
                    set_serial.set(String::new());
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
                <input type="text" placeholder="Name *"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(input_value(&ev)) />
                <input type="text" placeholder="Category *"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(input_value(&ev)) />
                <input type="text" placeholder="Serial number"
                    prop:value=move || serial.get()
                    on:input=move |ev| set_serial.set(input_value(&ev)) />
                <input type="text" placeholder="Department"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(input_value(&ev)) />
                <input type="text" placeholder="Responsible person"
                    prop:value=move || responsible.get()
                    on:input=move |ev| set_responsible.set(input_value(&ev)) />
            </div>
            <div class="form-row">
                <label>"Interval (days)"
                    <input type="number" min="1"
                        prop:value=move || interval.get()
                        on:input=move |ev| set_interval.set(input_value(&ev)) />
                </label>
                <label>"Last calibrated"
                    <input type="date"
                        prop:value=move || last_calibrated.get()
                        on:input=move |ev| set_last_calibrated.set(input_value(&ev)) />
                </label>
            </div>
            {move || (!form_error.get().is_empty()).then(|| view! {
                <p class="error-text">{form_error.get()}</p>
            })}
            <button type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Register device" }}
            </button>
        </form>
    }
}

#[component]
fn DeviceDetail(device_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<CalibrationDevice>>(None);
    let (orders, set_orders) = signal(Vec::<CalibrationWorkOrder>::new());
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let (next_status, set_next_status) = signal(String::from("maintenance"));
    let (status_note, set_status_note) = signal(String::new());
    let (planned_date, set_planned_date) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());

    let id_for_load = device_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_device(&snapshot, &id).await {
                Ok(device) => {
                    set_error.set(String::new());
                    set_detail.set(Some(device));
                }
                Err(err) => {
                    set_detail.set(None);
                    set_error.set(err.to_string());
                    return;
                }
            }
            if let Ok(rows) = api::list_work_orders(&snapshot, &id, "").await {
                set_orders.set(rows);
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

    let id_for_status = device_id.clone();
    let change_status = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_status.clone();
        let payload = DeviceUpdate {
            status: Some(next_status.get()),
            status_note: optional(&status_note.get()),
            ..Default::default()
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::update_device(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_order = device_id.clone();
    let create_order = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(planned), Some(due)) = (
            parse_date_input(&planned_date.get()),
            parse_date_input(&due_date.get()),
        ) else {
            set_error.set("Planned and due dates are required".to_string());
            return;
        };
        let payload = WorkOrderCreate {
            planned_date: planned,
            due_date: due,
            assigned_to: None,
            notes: None,
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_order.clone();
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::create_work_order(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|d| format!("{} — {}", d.device_code, d.name)).unwrap_or_else(|| "Device".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(device) => view! {
                    <div class="detail-body">
                        <dl class="detail-grid">
                            <dt>"Status"</dt><dd><StatusBadge status=device.status.clone() /></dd>
                            <dt>"Category"</dt><dd>{device.category.clone()}</dd>
                            <dt>"Serial"</dt><dd>{device.serial_number.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Responsible"</dt><dd>{device.responsible_person.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Interval"</dt><dd>{format!("{} days", device.calibration_interval_days)}</dd>
                            <dt>"Next due"</dt><dd>{fmt_date(device.next_due_date.as_ref())}</dd>
                        </dl>

                        <div class="workflow-step">
                            <span class="editor-label">"Status"</span>
                            <select on:change=move |ev| set_next_status.set(select_value(&ev))>
                                {DEVICE_STATUSES.iter().map(|s| view! {
                                    <option value=*s selected=*s == "maintenance">{*s}</option>
                                }).collect_view()}
                            </select>
                            <input type="text" placeholder="Note"
                                prop:value=move || status_note.get()
                                on:input=move |ev| set_status_note.set(input_value(&ev)) />
                            <button prop:disabled=move || saving.get() on:click=change_status.clone()>
                                "Change status"
                            </button>
                        </div>

                        <div class="order-section">
                            <span class="editor-label">{format!("Work orders ({})", orders.get_untracked().len())}</span>
                            <table class="data-table compact">
                                <thead>
                                    <tr><th>"No"</th><th>"Planned"</th><th>"Due"</th><th>"Status"</th><th>"Result"</th></tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || orders.get()
                                        key=|order| (order.id.clone(), order.updated_at)
                                        children=move |order| view! {
                                            <tr>
                                                <td>{order.work_order_no.clone()}</td>
                                                <td>{fmt_date(Some(&order.planned_date))}</td>
                                                <td>{fmt_date(Some(&order.due_date))}</td>
                                                <td>{order.status.clone()}</td>
                                                <td>{order.result.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                            <form class="record-form inline" on:submit=create_order.clone()>
                                <label>"Planned"
                                    <input type="date"
                                        prop:value=move || planned_date.get()
                                        on:input=move |ev| set_planned_date.set(input_value(&ev)) />
                                </label>
                                <label>"Due"
                                    <input type="date"
                                        prop:value=move || due_date.get()
                                        on:input=move |ev| set_due_date.set(input_value(&ev)) />
                                </label>
                                <button type="submit" prop:disabled=move || saving.get()>"Plan work order"</button>
                            </form>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn WorkOrderList() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (orders, set_orders) = signal(Vec::<CalibrationWorkOrder>::new());
    let (error, set_error) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (selected, set_selected) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_orders.set(Vec::new());
            return;
        }
        let status = status_filter.get();
        spawn_local(async move {
            match api::list_work_orders(&snapshot, "", &status).await {
                Ok(rows) => {
                    set_error.set(String::new());
                    set_orders.set(rows);
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    let run_scheduler = move |_| {
        let snapshot = connection::snapshot(&conn);
        set_saving.set(true);
        spawn_local(async move {
            match api::run_work_order_scheduler(&snapshot).await {
                Ok(_) => {
                    set_error.set(String::new());
                    ctx.reload();
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="module-body">
            <div class="filter-row">
                <select on:change=move |ev| set_status_filter.set(select_value(&ev))>
                    <option value="">"All statuses"</option>
                    {WORK_ORDER_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
                <button prop:disabled=move || saving.get() on:click=run_scheduler>
                    "Run due-date scheduler"
                </button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th>"Device"</th>
                        <th>"Planned"</th>
                        <th>"Due"</th>
                        <th>"Measurements"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| (order.id.clone(), order.updated_at)
                        children=move |order| {
                            let id = order.id.clone();
                            view! {
                                <tr class="data-row" on:click=move |_| set_selected.set(Some(id.clone()))>
                                    <td>{order.work_order_no.clone()}</td>
                                    <td>{order.device_id.clone()}</td>
                                    <td>{fmt_date(Some(&order.planned_date))}</td>
                                    <td>{fmt_date(Some(&order.due_date))}</td>
                                    <td>{order.measurement_records.len()}</td>
                                    <td><StatusBadge status=order.status.clone() /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || selected.get().map(|order_id| view! {
                <WorkOrderDetail order_id=order_id on_close=Callback::new(move |_| set_selected.set(None)) />
            })}
        </div>
    }
}

#[component]
fn WorkOrderDetail(order_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (detail, set_detail) = signal::<Option<CalibrationWorkOrder>>(None);
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let (next_status, set_next_status) = signal(String::from("in_progress"));

    // Measurement draft
    let (parameter, set_parameter) = signal(String::new());
    let (nominal, set_nominal) = signal(String::new());
    let (observed, set_observed) = signal(String::new());
    let (tolerance, set_tolerance) = signal(String::new());
    let (pass_status, set_pass_status) = signal(true);

    // Cost draft
    let (cost_description, set_cost_description) = signal(String::new());
    let (amount, set_amount) = signal(String::new());

    let id_for_load = order_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_detail.set(None);
            return;
        }
        let id = id_for_load.clone();
        spawn_local(async move {
            match api::get_work_order(&snapshot, &id).await {
                Ok(order) => {
                    set_error.set(String::new());
                    set_detail.set(Some(order));
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

    let id_for_status = order_id.clone();
    let change_status = move |_| {
        let snapshot = connection::snapshot(&conn);
        let id = id_for_status.clone();
        let payload = WorkOrderUpdate {
            status: Some(next_status.get()),
            ..Default::default()
        };
        set_saving.set(true);
        spawn_local(async move {
            finish(
                api::update_work_order(&snapshot, &id, &payload)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            );
        });
    };

    let id_for_measure = order_id.clone();
    let add_measurement = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let parameter_value = parameter.get().trim().to_string();
        if parameter_value.is_empty() {
            set_error.set("Measurement parameter is required".to_string());
            return;
        }
        let (Ok(Some(nominal_value)), Ok(Some(observed_value))) = (
            parse_optional_number(&nominal.get()),
            parse_optional_number(&observed.get()),
        ) else {
            set_error.set("Nominal and observed must be numeric".to_string());
            return;
        };
        let tolerance_value = match parse_optional_number(&tolerance.get()) {
            Ok(value) => value,
            Err(err) => {
                set_error.set(err);
                return;
            }
        };
        let payload = MeasurementCreate {
            parameter: parameter_value,
            nominal: nominal_value,
            tolerance: tolerance_value,
            observed: observed_value,
            pass_status: pass_status.get(),
            note: None,
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_measure.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::add_measurement(&snapshot, &id, &payload)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            if result.is_ok() {
                set_parameter.set(String::new());
                set_nominal.set(String::new());
                set_observed.set(String::new());
                set_tolerance.set(String::new());
            }
            finish(result);
        });
    };

    let id_for_cost = order_id.clone();
    let add_cost = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let description = cost_description.get().trim().to_string();
        if description.is_empty() {
            set_error.set("Cost description is required".to_string());
            return;
        }
        let Ok(Some(amount_value)) = parse_optional_number(&amount.get()) else {
            set_error.set("Amount must be numeric".to_string());
            return;
        };
        let payload = CostCreate {
            description,
            amount: amount_value,
            currency: None,
            supplier: None,
            reference: None,
            note: None,
        };
        let snapshot = connection::snapshot(&conn);
        let id = id_for_cost.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::add_cost(&snapshot, &id, &payload)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            if result.is_ok() {
                set_cost_description.set(String::new());
                set_amount.set(String::new());
            }
            finish(result);
        });
    };

    view! {
        <div class="detail-pane">
            <div class="detail-header">
                <h2>{move || detail.get().map(|o| o.work_order_no).unwrap_or_else(|| "Work order".to_string())}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match detail.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(order) => view! {
                    <div class="detail-body">
                        <dl class="detail-grid">
                            <dt>"Status"</dt><dd><StatusBadge status=order.status.clone() /></dd>
                            <dt>"Planned"</dt><dd>{fmt_date(Some(&order.planned_date))}</dd>
                            <dt>"Due"</dt><dd>{fmt_date(Some(&order.due_date))}</dd>
                            <dt>"Assigned"</dt><dd>{order.assigned_to.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Completed"</dt><dd>{fmt_date(order.completed_at.as_ref())}</dd>
                        </dl>

                        <div class="workflow-step">
                            <span class="editor-label">"Status"</span>
                            <select on:change=move |ev| set_next_status.set(select_value(&ev))>
                                {WORK_ORDER_STATUSES.iter().map(|s| view! {
                                    <option value=*s selected=*s == "in_progress">{*s}</option>
                                }).collect_view()}
                            </select>
                            <button prop:disabled=move || saving.get() on:click=change_status.clone()>
                                "Change status"
                            </button>
                        </div>

                        <div class="measurement-section">
                            <span class="editor-label">"Measurements"</span>
                            <table class="data-table compact">
                                <thead>
                                    <tr><th>"Parameter"</th><th>"Nominal"</th><th>"Observed"</th><th>"Tolerance"</th><th>"Pass"</th></tr>
                                </thead>
                                <tbody>
                                    {order.measurement_records.iter().map(|record| view! {
                                        <tr>
                                            <td>{record.parameter.clone()}</td>
                                            <td>{fmt_score(record.nominal)}</td>
                                            <td>{fmt_score(record.observed)}</td>
                                            <td>{record.tolerance.map(fmt_score).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{if record.pass_status { "pass" } else { "fail" }}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                            <form class="record-form inline" on:submit=add_measurement.clone()>
                                <input type="text" placeholder="Parameter *"
                                    prop:value=move || parameter.get()
                                    on:input=move |ev| set_parameter.set(input_value(&ev)) />
                                <input type="text" placeholder="Nominal *"
                                    prop:value=move || nominal.get()
                                    on:input=move |ev| set_nominal.set(input_value(&ev)) />
                                <input type="text" placeholder="Observed *"
                                    prop:value=move || observed.get()
                                    on:input=move |ev| set_observed.set(input_value(&ev)) />
                                <input type="text" placeholder="Tolerance"
                                    prop:value=move || tolerance.get()
                                    on:input=move |ev| set_tolerance.set(input_value(&ev)) />
                                <label class="checkbox-label">
                                    <input type="checkbox"
                                        prop:checked=move || pass_status.get()
                                        on:change=move |ev| set_pass_status.set(checkbox_checked(&ev)) />
                                    "Pass"
                                </label>
                                <button type="submit" prop:disabled=move || saving.get()>"Record"</button>
                            </form>
                        </div>

                        <div class="cost-section">
                            <span class="editor-label">"Costs"</span>
                            <table class="data-table compact">
                                <tbody>
                                    {order.cost_entries.iter().map(|entry| view! {
                                        <tr>
                                            <td>{entry.description.clone()}</td>
                                            <td>{format!("{} {}", fmt_score(entry.amount), entry.currency)}</td>
                                            <td>{fmt_date(Some(&entry.incurred_at))}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                            <form class="record-form inline" on:submit=add_cost.clone()>
                                <input type="text" placeholder="Description *"
                                    prop:value=move || cost_description.get()
                                    on:input=move |ev| set_cost_description.set(input_value(&ev)) />
                                <input type="text" placeholder="Amount *"
                                    prop:value=move || amount.get()
                                    on:input=move |ev| set_amount.set(input_value(&ev)) />
                                <button type="submit" prop:disabled=move || saving.get()>"Add cost"</button>
                            </form>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CalibrationSummaryView() -> impl IntoView {
    let conn = use_connection();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (summary, set_summary) = signal::<Option<CalibrationSummary>>(None);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let snapshot = connection::watch(&conn);
        if !snapshot.is_ready() {
            set_summary.set(None);
            return;
        }
        spawn_local(async move {
            match api::calibration_summary(&snapshot).await {
                Ok(loaded) => {
                    set_error.set(String::new());
                    set_summary.set(Some(loaded));
                }
                Err(err) => set_error.set(err.to_string()),
            }
        });
    });

    view! {
        <div class="module-body">
            {move || (!error.get().is_empty()).then(|| view! { <p class="error-text">{error.get()}</p> })}
            {move || match summary.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(summary) => view! {
                    <div class="dashboard-grid">
                        <div class="dashboard-card">
                            <h3>"Devices"</h3>
                            <p>{format!("{} total, {} active", summary.total_devices, summary.active_devices)}</p>
                            <p>{format!("{} overdue, {} upcoming", summary.overdue_devices, summary.upcoming_devices)}</p>
                        </div>
                        <div class="dashboard-card">
                            <h3>"Work orders"</h3>
                            <p>{format!("{} total, {} open", summary.total_work_orders, summary.open_work_orders)}</p>
                        </div>
                        <div class="dashboard-card">
                            <h3>"Costs"</h3>
                            <p>{format!("{} {}", fmt_score(summary.cost_total), summary.currency)}</p>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
