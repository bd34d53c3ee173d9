// ============================================================================
// CONTAINER DETAIL - Telemetría, progreso de ruta y ficha del contenedor
// ============================================================================

use yew::prelude::*;

use crate::components::sensor_chart::SensorChart;
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::context::use_session;
use crate::models::TemperatureReading;
use crate::routing::Route;
use crate::services::mock_data;
use crate::utils::{capitalize, format_date, format_datetime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeRange {
    Day,
    TwoDays,
    Week,
}

impl TimeRange {
    const ALL: [TimeRange; 3] = [TimeRange::Day, TimeRange::TwoDays, TimeRange::Week];

    fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::TwoDays => "48h",
            TimeRange::Week => "7d",
        }
    }

    fn duration_ms(&self) -> f64 {
        let hours = match self {
            TimeRange::Day => 24.0,
            TimeRange::TwoDays => 48.0,
            TimeRange::Week => 7.0 * 24.0,
        };
        hours * 60.0 * 60.0 * 1000.0
    }
}

/// Keeps the readings inside the selected window, measured back from the
/// newest sample.
fn slice_range(data: &[TemperatureReading], range: TimeRange) -> Vec<TemperatureReading> {
    let newest = data.iter().map(|r| r.timestamp).fold(f64::MIN, f64::max);
    let cutoff = newest - range.duration_ms();
    data.iter()
        .filter(|r| r.timestamp >= cutoff)
        .cloned()
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ContainerDetailProps {
    pub container_id: String,
}

#[function_component(ContainerDetail)]
pub fn container_detail(props: &ContainerDetailProps) -> Html {
    let context = use_session();
    let time_range = use_state(|| TimeRange::Day);

    let back_to_list = {
        let navigate = context.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Containers))
    };

    let container = match mock_data::container_by_id(&props.container_id) {
        Some(container) => container,
        None => {
            return html! {
                <div class="card empty-search">
                    <p>{ "Container not found" }</p>
                    <button type="button" class="link-button" onclick={back_to_list}>
                        { "Back to Container List" }
                    </button>
                </div>
            };
        }
    };

    let series = mock_data::temperature_series(&container.id);
    let visible_series = slice_range(&series, *time_range);
    let container_alerts = mock_data::alerts_for_container(&container.id);
    let thresholds = container.container_type.thresholds();

    let range_buttons = TimeRange::ALL
        .iter()
        .map(|&range| {
            let onclick = {
                let time_range = time_range.clone();
                Callback::from(move |_: MouseEvent| time_range.set(range))
            };
            html! {
                <button
                    type="button"
                    class={classes!("btn-range", (*time_range == range).then_some("active"))}
                    {onclick}
                >
                    { range.label() }
                </button>
            }
        })
        .collect::<Html>();

    let current_index = container
        .route
        .iter()
        .position(|airport| container.current_location.contains(airport.as_str()));

    let journey = container
        .route
        .iter()
        .enumerate()
        .map(|(index, airport)| {
            let is_origin = index == 0;
            let is_destination = index == container.route.len() - 1;
            let is_current = container.current_location.contains(airport.as_str());
            let is_passed = current_index.map(|ci| index < ci).unwrap_or(false);

            let node_class = if is_current {
                "node-current"
            } else if is_origin || is_passed {
                "node-passed"
            } else {
                "node-pending"
            };

            html! {
                <div class="journey-stop" key={airport.clone()}>
                    <div class={classes!("journey-node", node_class)}>{ "📍" }</div>
                    <div class="journey-meta">
                        <p class="mono">{ airport.clone() }</p>
                        if is_origin {
                            <p class="journey-hint">{ "Origin" }</p>
                        }
                        if is_destination {
                            <p class="journey-hint">{ "Destination" }</p>
                        }
                        if is_current {
                            <p class="journey-hint accent">{ "Current" }</p>
                        }
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let alert_history = (!container_alerts.is_empty()).then(|| {
        let items = container_alerts
            .iter()
            .map(|alert| {
                html! {
                    <div
                        class={classes!("history-item", alert.severity.as_str())}
                        key={alert.id.clone()}
                    >
                        <span class="history-icon">{ alert.kind.icon() }</span>
                        <div class="history-body">
                            <div class="history-head">
                                <span>{ capitalize(alert.kind.as_str()) }</span>
                                <StatusChip
                                    label={capitalize(alert.severity.as_str())}
                                    tone={ChipTone::from(alert.severity)}
                                />
                            </div>
                            <p>{ alert.message.clone() }</p>
                            <p class="history-time">{ format_datetime(&alert.timestamp) }</p>
                        </div>
                    </div>
                }
            })
            .collect::<Html>();

        html! {
            <div class="card">
                <div class="card-header stacked">
                    <h3>{ "⚠️ Alert History" }</h3>
                    <p>{ format!("{} alerts recorded for this container", container_alerts.len()) }</p>
                </div>
                <div class="card-body history-list">{ items }</div>
            </div>
        }
    });

    html! {
        <div class="container-detail-page">
            <div class="page-heading">
                <div class="heading-left">
                    <button type="button" class="btn-ghost" onclick={back_to_list.clone()}>
                        { "←" }
                    </button>
                    <div>
                        <div class="heading-title">
                            <h1 class="mono">{ container.id.clone() }</h1>
                            <StatusChip
                                label={capitalize(container.status.as_str())}
                                tone={ChipTone::from(container.status)}
                            />
                            <span class="badge badge-outline">{ container.container_type.as_str() }</span>
                        </div>
                        <p class="heading-sub">
                            { format!("AWB: {} • {} → {}", container.awb, container.origin, container.destination) }
                        </p>
                    </div>
                </div>
                <div class="heading-actions">
                    <button type="button" class="btn-outline">{ "⬇ Export Data" }</button>
                    <button type="button" class="btn-primary">{ "Edit Details" }</button>
                </div>
            </div>

            <div class="detail-grid">
                <div class="detail-main">
                    <div class="card">
                        <div class="card-header">
                            <div>
                                <h3>{ "Temperature Monitoring" }</h3>
                                <p>{ "Real-time sensor data • Updates every 5 minutes" }</p>
                            </div>
                            <div class="range-toggle">{ range_buttons }</div>
                        </div>
                        <div class="card-body">
                            <SensorChart data={visible_series} thresholds={Some(thresholds)} />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header stacked">
                            <h3>{ "Journey Progress" }</h3>
                            <p>{ format!("Current route: {} → {}", container.origin, container.destination) }</p>
                        </div>
                        <div class="card-body journey-track">{ journey }</div>
                    </div>

                    { for alert_history }
                </div>

                <div class="detail-sidebar">
                    <div class="card">
                        <div class="card-header stacked">
                            <h3>{ "Key Metrics" }</h3>
                        </div>
                        <div class="card-body metrics">
                            <div class="metric">
                                <span class="metric-icon">{ "🌡️" }</span>
                                <div>
                                    <p class="metric-label">{ "Current Temperature" }</p>
                                    <p class={classes!("metric-value", container.temperature_deviates().then_some("temp-alert"))}>
                                        { format!("{}°C", container.temperature) }
                                    </p>
                                    <p class="metric-label">{ format!("Set Point: {}°C", container.set_point) }</p>
                                </div>
                            </div>
                            <div class="metric">
                                <span class="metric-icon">{ "🔋" }</span>
                                <div>
                                    <p class="metric-label">{ "Battery Level" }</p>
                                    <span class="battery-bar wide">
                                        <span class="battery-fill" style={format!("width: {}%", container.battery)} />
                                    </span>
                                    <p class={classes!(
                                        "metric-value",
                                        (container.battery < 30).then_some("battery-critical"),
                                        (30..50).contains(&container.battery).then_some("battery-low"),
                                    )}>
                                        { format!("{}%", container.battery) }
                                    </p>
                                </div>
                            </div>
                            <div class="metric">
                                <span class="metric-icon">{ "📍" }</span>
                                <div>
                                    <p class="metric-label">{ "Current Location" }</p>
                                    <p class="metric-value">{ container.current_location.clone() }</p>
                                    <p class="metric-label">
                                        { format!("Last seen: {}", format_datetime(&container.last_seen)) }
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header stacked">
                            <h3>{ "Container Details" }</h3>
                        </div>
                        <div class="card-body details">
                            <div class="detail-field">
                                <p class="metric-label">{ "Container Type" }</p>
                                <p>{ container.container_type.as_str() }</p>
                            </div>
                            <div class="detail-field">
                                <p class="metric-label">{ "Air Waybill" }</p>
                                <p class="mono">{ container.awb.clone() }</p>
                            </div>
                            <div class="detail-field">
                                <p class="metric-label">{ "Route" }</p>
                                <p>{ format!("{} → {}", container.origin, container.destination) }</p>
                            </div>
                            <div class="detail-field">
                                <p class="metric-label">{ "📅 Lease Start Date" }</p>
                                <p>{ format_date(&container.lease_start) }</p>
                            </div>
                            <div class="detail-field">
                                <p class="metric-label">{ "📅 Next Maintenance" }</p>
                                <p>{ format_date(&container.next_maintenance) }</p>
                            </div>
                        </div>
                    </div>

                    <div class="card highlighted">
                        <div class="card-header stacked">
                            <h3>{ "Quick Actions" }</h3>
                        </div>
                        <div class="card-body actions">
                            <button type="button" class="btn-outline">{ "⬇ Download Temperature Log" }</button>
                            <button type="button" class="btn-outline">{ "📄 Generate Compliance Report" }</button>
                            <button type="button" class="btn-outline">{ "📞 Contact Support" }</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(hours: usize) -> Vec<TemperatureReading> {
        let hour_ms = 60.0 * 60.0 * 1000.0;
        (0..=hours)
            .map(|h| TemperatureReading {
                timestamp: h as f64 * hour_ms,
                internal: 5.0,
                set_point: 5.0,
                ambient: 23.0,
            })
            .collect()
    }

    #[test]
    fn day_range_keeps_a_full_day_of_samples() {
        let data = series(72);
        let sliced = slice_range(&data, TimeRange::Day);
        assert_eq!(sliced.len(), 25);
        assert_eq!(sliced.first().map(|r| r.timestamp), Some(48.0 * 3_600_000.0));
    }

    #[test]
    fn wider_ranges_keep_more_history() {
        let data = series(72);
        assert_eq!(slice_range(&data, TimeRange::TwoDays).len(), 49);
        assert_eq!(slice_range(&data, TimeRange::Week).len(), 73);
    }

    #[test]
    fn short_series_survives_any_range() {
        let data = series(4);
        for range in TimeRange::ALL {
            assert_eq!(slice_range(&data, range).len(), data.len());
        }
    }
}
