// ============================================================================
// REPORTS - Generación simulada de informes y exportaciones
// ============================================================================

use gloo_timers::callback::Timeout;
use log::info;
use serde::Serialize;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::{mock_data, notify};

// (id, label, description)
const REPORT_TYPES: [(&str, &str, &str); 5] = [
    ("temperature", "Temperature Logs", "Detailed temperature data for compliance"),
    ("compliance", "Compliance Bundle", "Complete GDP compliance package"),
    ("utilization", "Fleet Utilization", "Container usage statistics"),
    ("billing", "Billing Summary", "Cost breakdown and invoicing details"),
    ("maintenance", "Maintenance Reports", "Service history and schedules"),
];

// (file name, date, size)
const RECENT_REPORTS: [(&str, &str, &str); 4] = [
    ("Temperature_Log_OC-2401.pdf", "2025-11-28", "1.2 MB"),
    ("Compliance_Bundle_Nov.zip", "2025-11-27", "4.8 MB"),
    ("Fleet_Utilization_Q4.xlsx", "2025-11-25", "856 KB"),
    ("Billing_Summary_Nov.pdf", "2025-11-24", "342 KB"),
];

/// Payload logged when a generation run starts; stands in for the real
/// export request body.
#[derive(Debug, Serialize)]
struct ReportRequest {
    report_type: String,
    container: String,
    date_range: String,
}

#[function_component(Reports)]
pub fn reports() -> Html {
    let report_type = use_state(|| "temperature".to_string());
    let selected_container = use_state(|| "all".to_string());
    let date_range = use_state(|| "last-30-days".to_string());
    let is_generating = use_state(|| false);

    let on_generate = {
        let report_type = report_type.clone();
        let selected_container = selected_container.clone();
        let date_range = date_range.clone();
        let is_generating = is_generating.clone();
        Callback::from(move |_: MouseEvent| {
            let request = ReportRequest {
                report_type: (*report_type).clone(),
                container: (*selected_container).clone(),
                date_range: (*date_range).clone(),
            };
            if let Ok(payload) = serde_json::to_string(&request) {
                info!("📄 Generando informe: {}", payload);
            }

            is_generating.set(true);
            let is_generating = is_generating.clone();
            Timeout::new(CONFIG.action_latency_ms, move || {
                is_generating.set(false);
                notify::alert("Report generated successfully! Download starting...");
            })
            .forget();
        })
    };

    let on_container_change = {
        let selected_container = selected_container.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                selected_container.set(select.value());
            }
        })
    };
    let on_range_change = {
        let date_range = date_range.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                date_range.set(select.value());
            }
        })
    };

    let type_cards = REPORT_TYPES
        .iter()
        .map(|(id, label, description)| {
            let selected = *report_type == *id;
            let onclick = {
                let report_type = report_type.clone();
                let id = (*id).to_string();
                Callback::from(move |_: MouseEvent| report_type.set(id.clone()))
            };
            html! {
                <button
                    type="button"
                    key={*id}
                    class={classes!("report-type-card", selected.then_some("selected"))}
                    {onclick}
                >
                    <span class="report-icon">{ "📄" }</span>
                    <div>
                        <p>{ *label }</p>
                        <p class="cell-sub">{ *description }</p>
                    </div>
                </button>
            }
        })
        .collect::<Html>();

    let container_options = mock_data::containers()
        .iter()
        .map(|c| {
            html! {
                <option value={c.id.clone()} selected={*selected_container == c.id}>
                    { format!("{} - {} → {}", c.id, c.origin, c.destination) }
                </option>
            }
        })
        .collect::<Html>();

    let recent = RECENT_REPORTS
        .iter()
        .map(|(name, date, size)| {
            html! {
                <div class="report-file" key={*name}>
                    <div class="file-meta">
                        <span class="file-icon">{ "📄" }</span>
                        <div>
                            <p>{ *name }</p>
                            <p class="cell-sub">{ format!("📅 {} • {}", date, size) }</p>
                        </div>
                    </div>
                    <button type="button" class="link-button">{ "Download" }</button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="reports-page">
            <div class="page-heading">
                <div>
                    <h2>{ "Reports & Documents" }</h2>
                    <p>{ "Generate compliance reports and export shipment data" }</p>
                </div>
            </div>

            <div class="reports-grid">
                <div class="reports-main">
                    <div class="card">
                        <div class="card-body">
                            <h3>{ "Select Report Type" }</h3>
                            <div class="report-type-grid">{ type_cards }</div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-body">
                            <h3>{ "🔽 Report Filters" }</h3>

                            <div class="form-group">
                                <label>{ "Container Selection" }</label>
                                <select onchange={on_container_change}>
                                    <option value="all" selected={*selected_container == "all"}>
                                        { "All Containers" }
                                    </option>
                                    { container_options }
                                </select>
                            </div>

                            <div class="form-group">
                                <label>{ "Date Range" }</label>
                                <div class="field-row">
                                    <select onchange={on_range_change}>
                                        <option value="last-7-days" selected={*date_range == "last-7-days"}>{ "Last 7 Days" }</option>
                                        <option value="last-30-days" selected={*date_range == "last-30-days"}>{ "Last 30 Days" }</option>
                                        <option value="last-90-days" selected={*date_range == "last-90-days"}>{ "Last 90 Days" }</option>
                                        <option value="custom" selected={*date_range == "custom"}>{ "Custom Range" }</option>
                                    </select>
                                    if *date_range == "custom" {
                                        <div class="date-pair">
                                            <input type="date" />
                                            <span>{ "to" }</span>
                                            <input type="date" />
                                        </div>
                                    }
                                </div>
                            </div>

                            if *report_type == "temperature" {
                                <div class="form-group">
                                    <label>{ "Data Granularity" }</label>
                                    <select>
                                        <option>{ "Every 5 minutes" }</option>
                                        <option>{ "Every 15 minutes" }</option>
                                        <option>{ "Hourly" }</option>
                                        <option>{ "Daily Average" }</option>
                                    </select>
                                </div>
                            }

                            if *report_type == "compliance" {
                                <div class="bundle-note">
                                    <p>{ "This bundle includes:" }</p>
                                    <ul>
                                        <li>{ "• Temperature log PDF" }</li>
                                        <li>{ "• Sensor calibration certificate" }</li>
                                        <li>{ "• Lease agreement" }</li>
                                        <li>{ "• Maintenance records" }</li>
                                        <li>{ "• Pro forma invoice" }</li>
                                    </ul>
                                </div>
                            }
                        </div>
                    </div>

                    <button
                        type="button"
                        class="btn-primary btn-generate"
                        disabled={*is_generating}
                        onclick={on_generate}
                    >
                        if *is_generating {
                            <span class="spinner" />
                            { "Generating Report..." }
                        } else {
                            { "⬇ Generate Report" }
                        }
                    </button>
                </div>

                <div class="reports-sidebar">
                    <div class="card">
                        <div class="card-body">
                            <h3>{ "Recent Reports" }</h3>
                            <div class="report-files">{ recent }</div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-body">
                            <h3>{ "Export Formats" }</h3>
                            <label class="checkbox-row"><input type="checkbox" checked={true} />{ "PDF" }</label>
                            <label class="checkbox-row"><input type="checkbox" />{ "CSV" }</label>
                            <label class="checkbox-row"><input type="checkbox" />{ "Excel (XLSX)" }</label>
                            <label class="checkbox-row"><input type="checkbox" />{ "JSON" }</label>
                        </div>
                    </div>

                    <div class="card highlighted">
                        <div class="card-body">
                            <h3>{ "Quick Actions" }</h3>
                            <button type="button" class="link-button">{ "Schedule Automated Reports" }</button>
                            <button type="button" class="link-button">{ "Email Report to Team" }</button>
                            <button type="button" class="link-button">{ "View Report Templates" }</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
