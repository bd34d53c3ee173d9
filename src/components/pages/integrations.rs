// ============================================================================
// SETTINGS - Conectores externos: estado, configuración y actividad
// ============================================================================

use chrono::DateTime;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::status_chip::{ChipTone, StatusChip};
use crate::config::CONFIG;
use crate::models::IntegrationStatus;
use crate::services::{mock_data, notify};
use crate::utils::{capitalize, format_datetime};

const ENDPOINT_URL: &str = "https://api.databricks.com/v2/";
const SECRET_VALUE: &str = "dapi4f8a2b9c6d1e3f7a5b8c0d2e";
const MASKED_SECRET: &str = "••••••••••••••••••••••••";

// (timestamp, level, message)
const ACTIVITY_LOG: [(&str, &str, &str); 4] = [
    ("2025-11-28 11:30:00", "INFO", "Databricks sync completed successfully"),
    ("2025-11-28 11:25:00", "INFO", "Power BI data refresh initiated"),
    ("2025-11-27 15:30:00", "ERROR", "SAP ERP connection failed: Authentication error"),
    ("2025-11-27 15:00:00", "INFO", "Databricks sync completed successfully"),
];

/// Splits an RFC 3339 stamp into a display date and a clock time.
/// Unparseable stamps come back verbatim with an empty clock.
fn sync_parts(timestamp: &str) -> (String, String) {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => (
            parsed.format("%b %-d, %Y").to_string(),
            parsed.format("%H:%M:%S").to_string(),
        ),
        Err(_) => (timestamp.to_string(), String::new()),
    }
}

fn dot_class(status: IntegrationStatus) -> &'static str {
    match status {
        IntegrationStatus::Connected => "dot-ok",
        IntegrationStatus::Error => "dot-error",
        IntegrationStatus::Disconnected => "dot-idle",
    }
}

fn status_icon(status: IntegrationStatus) -> &'static str {
    match status {
        IntegrationStatus::Connected => "✅",
        IntegrationStatus::Error => "❌",
        IntegrationStatus::Disconnected => "⚠️",
    }
}

#[function_component(Integrations)]
pub fn integrations() -> Html {
    let connectors = mock_data::integrations();

    let show_config = use_state(|| false);
    let testing = use_state(|| false);
    let reveal_secret = use_state(|| false);
    let selected_id = use_state(|| connectors.first().map(|i| i.id.clone()).unwrap_or_default());

    let selected = connectors.iter().find(|i| i.id == *selected_id);

    let close_config = {
        let show_config = show_config.clone();
        Callback::from(move |_: MouseEvent| show_config.set(false))
    };

    let on_test = {
        let testing = testing.clone();
        Callback::from(move |_: MouseEvent| {
            testing.set(true);
            let testing = testing.clone();
            Timeout::new(CONFIG.action_latency_ms, move || {
                testing.set(false);
                notify::alert("Connection test successful!");
            })
            .forget();
        })
    };

    let toggle_secret = {
        let reveal_secret = reveal_secret.clone();
        Callback::from(move |_: MouseEvent| reveal_secret.set(!*reveal_secret))
    };

    let cards = connectors
        .iter()
        .map(|integration| {
            let select = {
                let selected_id = selected_id.clone();
                let id = integration.id.clone();
                Callback::from(move |_: MouseEvent| selected_id.set(id.clone()))
            };
            let configure = {
                let selected_id = selected_id.clone();
                let show_config = show_config.clone();
                let id = integration.id.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    selected_id.set(id.clone());
                    show_config.set(true);
                })
            };
            html! {
                <div class="integration-card" key={integration.id.clone()} onclick={select}>
                    <div class="integration-head">
                        <div class="integration-title">
                            <span class="integration-logo">{ integration.logo.clone() }</span>
                            <div>
                                <h3>{ integration.name.clone() }</h3>
                                <StatusChip
                                    label={capitalize(integration.status.as_str())}
                                    tone={ChipTone::from(integration.status)}
                                />
                            </div>
                        </div>
                        <span class={classes!("conn-dot", dot_class(integration.status))}></span>
                    </div>
                    <div class="integration-facts">
                        <div class="fact-row">
                            <span class="metric-label">{ "Last Sync" }</span>
                            <span>{ format_datetime(&integration.last_sync) }</span>
                        </div>
                        <div class="fact-row">
                            <span class="metric-label">{ "Status" }</span>
                            <span>{ integration.status.as_str() }</span>
                        </div>
                    </div>
                    <button type="button" class="btn-muted" onclick={configure}>
                        { "Configure" }
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    let detail = if let Some(integration) = selected {
        let (sync_date, sync_time) = sync_parts(&integration.last_sync);
        html! {
            <div class="card">
                <div class="detail-head">
                    <div class="integration-title">
                        <span class="integration-logo">{ integration.logo.clone() }</span>
                        <div>
                            <h3>{ integration.name.clone() }</h3>
                            <p class="cell-sub">{ format!("Integration ID: {}", integration.id) }</p>
                        </div>
                    </div>
                    <StatusChip
                        label={capitalize(integration.status.as_str())}
                        tone={ChipTone::from(integration.status)}
                    />
                </div>
                <div class="card-body">
                    <div class="sync-summary">
                        <div class="sync-fact">
                            <p class="sync-fact-title">
                                <span>{ status_icon(integration.status) }</span>
                                { "Connection Status" }
                            </p>
                            <p>{ capitalize(integration.status.as_str()) }</p>
                        </div>
                        <div class="sync-fact">
                            <p class="metric-label">{ "Last Successful Sync" }</p>
                            <p>{ sync_date }</p>
                            <p class="cell-sub">{ sync_time }</p>
                        </div>
                        <div class="sync-fact">
                            <p class="metric-label">{ "Sync Frequency" }</p>
                            <p>{ "Every 5 minutes" }</p>
                        </div>
                    </div>

                    if integration.status == IntegrationStatus::Error {
                        <div class="error-panel">
                            <span class="error-icon">{ "❌" }</span>
                            <div>
                                <p class="error-title">{ "Connection Error" }</p>
                                <p class="cell-sub">
                                    { "Unable to authenticate with SAP ERP. Please check your \
                                       credentials and try again." }
                                </p>
                                <button type="button" class="link-button">
                                    { "View Error Log" }
                                </button>
                            </div>
                        </div>
                    }

                    <div class="settings-form">
                        <h4>{ "Integration Settings" }</h4>
                        <div class="form-group">
                            <label>{ "Endpoint URL" }</label>
                            <input type="text" value={ENDPOINT_URL} />
                        </div>
                        <div class="form-group">
                            <label>{ "API Key / Secret" }</label>
                            <div class="key-value">
                                <input
                                    type={if *reveal_secret { "text" } else { "password" }}
                                    value={if *reveal_secret { SECRET_VALUE } else { MASKED_SECRET }}
                                />
                                <button type="button" class="btn-outline" onclick={toggle_secret}>
                                    { if *reveal_secret { "Hide" } else { "Reveal" } }
                                </button>
                            </div>
                        </div>
                        <div class="form-group">
                            <label>{ "Sync Options" }</label>
                            <div class="check-list">
                                <label class="check-row">
                                    <input type="checkbox" checked={true} />
                                    <span>{ "Enable automatic sync" }</span>
                                </label>
                                <label class="check-row">
                                    <input type="checkbox" checked={true} />
                                    <span>{ "Send error notifications" }</span>
                                </label>
                                <label class="check-row">
                                    <input type="checkbox" />
                                    <span>{ "Retry failed requests" }</span>
                                </label>
                            </div>
                        </div>
                    </div>

                    <div class="detail-actions">
                        <button
                            type="button"
                            class="btn-outline"
                            disabled={*testing}
                            onclick={on_test}
                        >
                            if *testing {
                                <span class="spinner"></span>
                                { "Testing..." }
                            } else {
                                { "🔄 Test Connection" }
                            }
                        </button>
                        <button type="button" class="btn-primary">{ "Save Configuration" }</button>
                        <button type="button" class="btn-outline">{ "Cancel" }</button>
                    </div>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="card empty-search">
                <p>{ "No integrations configured" }</p>
            </div>
        }
    };

    let log_lines = ACTIVITY_LOG
        .iter()
        .map(|(timestamp, level, message)| {
            let level_class = if *level == "ERROR" { "log-error" } else { "log-info" };
            html! {
                <div class="log-line">
                    <span class="log-time">{ *timestamp }</span>
                    <span class={level_class}>{ format!("[{}]", level) }</span>
                    <span>{ *message }</span>
                </div>
            }
        })
        .collect::<Html>();

    let config_modal = match (selected, *show_config) {
        (Some(integration), true) => html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>{ format!("Configure {}", integration.name) }</h3>
                    </div>
                    <div class="modal-body">
                        <p class="cell-sub">
                            { format!("Configuration modal for {} integration.", integration.name) }
                        </p>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn-outline" onclick={close_config}>
                            { "Close" }
                        </button>
                    </div>
                </div>
            </div>
        },
        _ => Html::default(),
    };

    html! {
        <div class="settings-page">
            <div class="page-heading">
                <div>
                    <h2>{ "Settings & Integrations" }</h2>
                    <p>{ "Configure system integrations and external data sources" }</p>
                </div>
            </div>

            <div class="integrations-grid">
                { cards }
                <div class="integration-card add-card">
                    <span class="integration-logo">{ "➕" }</span>
                    <h3>{ "Add Integration" }</h3>
                    <p class="cell-sub">{ "Connect a new service or data source" }</p>
                </div>
            </div>

            { detail }

            <div class="card">
                <div class="card-header">
                    <h3>{ "Recent Activity Log" }</h3>
                </div>
                <div class="card-body">
                    <div class="log-lines mono">{ log_lines }</div>
                </div>
            </div>

            { config_modal }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_parts_splits_date_and_clock() {
        let (date, time) = sync_parts("2025-11-28T11:30:00Z");
        assert_eq!(date, "Nov 28, 2025");
        assert_eq!(time, "11:30:00");
    }

    #[test]
    fn sync_parts_passes_through_unparseable_stamps() {
        let (date, time) = sync_parts("yesterday");
        assert_eq!(date, "yesterday");
        assert_eq!(time, "");
    }
}
