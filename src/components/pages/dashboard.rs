// ============================================================================
// DASHBOARD - Resumen operativo: KPIs, mapa, alertas y actividad reciente
// ============================================================================

use yew::prelude::*;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::kpi_tile::{KpiTile, TileVariant, Trend};
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::context::use_session;
use crate::models::{AlertSeverity, Container};
use crate::routing::Route;
use crate::services::mock_data;
use crate::utils::{capitalize, format_datetime};

// (container id, marker class, location, top, left)
const MAP_MARKERS: [(&str, &str, &str, &str, &str); 5] = [
    ("OC-2403", "marker-ok", "Dubai", "30%", "55%"),
    ("OC-2401", "marker-warning", "In Transit", "35%", "35%"),
    ("OC-2404", "marker-critical", "In Transit", "55%", "25%"),
    ("OC-2402", "marker-ok", "Singapore", "50%", "75%"),
    ("OC-2405", "marker-ok", "Tokyo", "25%", "85%"),
];

fn activity_columns() -> Vec<Column<Container>> {
    vec![
        Column::new("id", "Container ID", |c: &Container| {
            CellValue::from(c.id.as_str())
        })
        .with_render(|c| html! { <span class="mono accent">{ c.id.clone() }</span> }),
        Column::new("type", "Type", |c: &Container| {
            CellValue::from(c.container_type.as_str())
        })
        .with_render(|c| {
            html! { <span class="badge badge-outline">{ c.container_type.as_str() }</span> }
        }),
        Column::new("route", "Route", |c: &Container| {
            CellValue::from(format!("{} → {}", c.origin, c.destination))
        })
        .with_render(|c| {
            html! {
                <span class="route-cell">
                    { c.origin.clone() }
                    <span class="route-arrow">{ "→" }</span>
                    { c.destination.clone() }
                </span>
            }
        }),
        Column::new("location", "Location", |c: &Container| {
            CellValue::from(c.current_location.as_str())
        })
        .with_render(|c| html! { <span>{ format!("📍 {}", c.current_location) }</span> }),
        Column::new("temperature", "Temperature", |c: &Container| {
            CellValue::from(c.temperature)
        })
        .with_render(|c| {
            html! {
                <span class="temp-cell">
                    <span class={classes!("mono", c.temperature_deviates().then_some("temp-alert"))}>
                        { format!("{}°C", c.temperature) }
                    </span>
                    <span class="cell-sub">{ format!(" / {}°C", c.set_point) }</span>
                </span>
            }
        }),
        Column::new("battery", "Battery", |c: &Container| CellValue::from(c.battery))
            .with_render(|c| {
                let tone = if c.battery < 30 {
                    "battery-critical"
                } else if c.battery < 50 {
                    "battery-low"
                } else {
                    "battery-ok"
                };
                html! {
                    <span class={classes!("battery-cell", tone)}>
                        <span class="battery-bar">
                            <span class="battery-fill" style={format!("width: {}%", c.battery)} />
                        </span>
                        <span class="mono">{ format!("{}%", c.battery) }</span>
                    </span>
                }
            }),
        Column::new("status", "Status", |c: &Container| {
            CellValue::from(c.status.as_str())
        })
        .with_render(|c| {
            html! {
                <StatusChip label={capitalize(c.status.as_str())} tone={ChipTone::from(c.status)} />
            }
        }),
    ]
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let context = use_session();

    let alerts = mock_data::alerts();
    let critical_alerts = alerts
        .iter()
        .filter(|a| a.severity == AlertSeverity::Critical)
        .count();
    let warning_alerts = alerts
        .iter()
        .filter(|a| a.severity == AlertSeverity::Warning)
        .count();

    let navigate_to = |route: Route| {
        let navigate = context.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))
    };

    let markers = MAP_MARKERS
        .iter()
        .map(|(id, marker_class, location, top, left)| {
            let onclick = {
                let select_container = context.select_container.clone();
                let id = (*id).to_string();
                Callback::from(move |_: MouseEvent| select_container.emit(id.clone()))
            };
            html! {
                <div class="map-marker" style={format!("top: {}; left: {}", top, left)}>
                    <button type="button" class={classes!("marker-dot", *marker_class)} {onclick} />
                    <div class="marker-tooltip">
                        <p class="mono accent">{ *id }</p>
                        <p>{ *location }</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let alert_feed = alerts
        .iter()
        .map(|alert| {
            let onclick = {
                let select_container = context.select_container.clone();
                let container_id = alert.container_id.clone();
                Callback::from(move |_: MouseEvent| select_container.emit(container_id.clone()))
            };
            html! {
                <button type="button" class="alert-item" key={alert.id.clone()} {onclick}>
                    <span class={classes!("alert-icon", alert.severity.as_str())}>
                        { alert.kind.icon() }
                    </span>
                    <div class="alert-body">
                        <div class="alert-head">
                            <span class="mono accent">{ alert.container_id.clone() }</span>
                            <StatusChip
                                label={capitalize(alert.severity.as_str())}
                                tone={ChipTone::from(alert.severity)}
                            />
                        </div>
                        <p class="alert-message">{ alert.message.clone() }</p>
                        <p class="alert-time">{ format_datetime(&alert.timestamp) }</p>
                    </div>
                </button>
            }
        })
        .collect::<Html>();

    let on_row_click = {
        let select_container = context.select_container.clone();
        Callback::from(move |container: Container| select_container.emit(container.id))
    };
    let key_extractor: fn(&Container) -> String = |c| c.id.clone();

    html! {
        <div class="dashboard-page">
            <div class="page-heading">
                <div>
                    <h2>{ "Good morning, welcome back" }</h2>
                    <p>{ "Here's what's happening with your shipments today." }</p>
                </div>
                <button type="button" class="btn-primary" onclick={navigate_to(Route::Shipments)}>
                    { "📦 New Booking" }
                </button>
            </div>

            <div class="kpi-grid">
                <KpiTile
                    title="Active Shipments"
                    value={mock_data::containers().len().to_string()}
                    icon="📦"
                    trend={Trend::Up}
                    subtitle="+2 from last week"
                />
                <KpiTile
                    title="Critical Alerts"
                    value={critical_alerts.to_string()}
                    icon="⚠️"
                    trend={if critical_alerts > 0 { Trend::Up } else { Trend::Flat }}
                    subtitle="Requires immediate action"
                    variant={if critical_alerts > 0 { TileVariant::Destructive } else { TileVariant::Default }}
                />
                <KpiTile
                    title="Warning Alerts"
                    value={warning_alerts.to_string()}
                    icon="⚠️"
                    trend={Trend::Flat}
                    subtitle="Monitor closely"
                    variant={if warning_alerts > 0 { TileVariant::Warning } else { TileVariant::Default }}
                />
                <KpiTile
                    title="Avg Transit Time"
                    value="8.5 days"
                    icon="🕐"
                    trend={Trend::Down}
                    subtitle="-0.5 days vs last month"
                    variant={TileVariant::Success}
                />
            </div>

            <div class="dashboard-grid">
                <div class="card map-card">
                    <div class="card-header">
                        <div class="card-title">
                            <span class="card-icon">{ "🌐" }</span>
                            <div>
                                <h3>{ "Global Container Map" }</h3>
                                <p>{ "Real-time location tracking" }</p>
                            </div>
                        </div>
                        <button type="button" class="btn-ghost" onclick={navigate_to(Route::Containers)}>
                            { "View Full Map →" }
                        </button>
                    </div>
                    <div class="map-canvas">
                        { markers }
                        <div class="map-legend">
                            <span class="legend-ok">{ "OK" }</span>
                            <span class="legend-warning">{ "Warning" }</span>
                            <span class="legend-critical">{ "Critical" }</span>
                        </div>
                    </div>
                </div>

                <div class="card alerts-card">
                    <div class="card-header">
                        <div class="card-title">
                            <span class="card-icon">{ "⚠️" }</span>
                            <div>
                                <h3>{ "Active Alerts" }</h3>
                                <p>{ format!("{} require attention", alerts.len()) }</p>
                            </div>
                        </div>
                    </div>
                    <div class="alert-feed">{ alert_feed }</div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <div class="card-title">
                        <span class="card-icon">{ "📦" }</span>
                        <div>
                            <h3>{ "Recent Container Activity" }</h3>
                            <p>{ "Overview of active shipments" }</p>
                        </div>
                    </div>
                    <button type="button" class="btn-ghost" onclick={navigate_to(Route::Containers)}>
                        { "View All →" }
                    </button>
                </div>
                <DataTable<Container>
                    columns={activity_columns()}
                    rows={mock_data::containers().to_vec()}
                    key_extractor={key_extractor}
                    on_row_click={Some(on_row_click)}
                />
            </div>

            <div class="quick-actions">
                <button type="button" class="action-card highlighted" onclick={navigate_to(Route::Containers)}>
                    <span class="action-icon">{ "📦" }</span>
                    <div>
                        <p class="action-title">{ "Track Container" }</p>
                        <p class="action-subtitle">{ "View real-time status" }</p>
                    </div>
                    <span class="action-arrow">{ "→" }</span>
                </button>
                <button type="button" class="action-card" onclick={navigate_to(Route::Reports)}>
                    <span class="action-icon">{ "📈" }</span>
                    <div>
                        <p class="action-title">{ "Generate Report" }</p>
                        <p class="action-subtitle">{ "Export compliance data" }</p>
                    </div>
                    <span class="action-arrow">{ "→" }</span>
                </button>
                <button type="button" class="action-card" onclick={navigate_to(Route::Shipments)}>
                    <span class="action-icon">{ "🕐" }</span>
                    <div>
                        <p class="action-title">{ "Schedule Shipment" }</p>
                        <p class="action-subtitle">{ "Book a new shipment" }</p>
                    </div>
                    <span class="action-arrow">{ "→" }</span>
                </button>
            </div>
        </div>
    }
}
