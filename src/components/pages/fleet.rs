// ============================================================================
// FLEET MANAGEMENT - Vista de flota para personal (KPIs, mantenimiento, salud)
// ============================================================================

use yew::prelude::*;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::kpi_tile::{KpiTile, Trend};
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::context::use_session;
use crate::models::Container;
use crate::services::{mock_data, notify};
use crate::utils::{capitalize, days_until, format_date, format_epoch_ms, today};

const TOTAL_FLEET: usize = 45;
const IN_MAINTENANCE: usize = 3;

// (region, units, active, available)
const REGIONS: [(&str, u32, u32, u32); 3] = [
    ("Europe", 18, 12, 6),
    ("Asia-Pacific", 15, 10, 5),
    ("Americas", 12, 8, 4),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaintenanceFilter {
    All,
    Due,
    Overdue,
}

impl MaintenanceFilter {
    const ALL: [MaintenanceFilter; 3] = [
        MaintenanceFilter::All,
        MaintenanceFilter::Due,
        MaintenanceFilter::Overdue,
    ];

    fn label(&self) -> &'static str {
        match self {
            MaintenanceFilter::All => "All",
            MaintenanceFilter::Due => "Due",
            MaintenanceFilter::Overdue => "Overdue",
        }
    }

    /// Due means inside the next 30 days; overdue means the date passed.
    fn retains(&self, days: Option<i64>) -> bool {
        match self {
            MaintenanceFilter::All => true,
            MaintenanceFilter::Due => matches!(days, Some(d) if (0..30).contains(&d)),
            MaintenanceFilter::Overdue => matches!(days, Some(d) if d < 0),
        }
    }
}

fn maintenance_columns() -> Vec<Column<Container>> {
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
        Column::new("status", "Current Status", |c: &Container| {
            CellValue::from(c.status.as_str())
        })
        .with_render(|c| {
            html! {
                <StatusChip label={capitalize(c.status.as_str())} tone={ChipTone::from(c.status)} />
            }
        }),
        Column::new("next_maintenance", "Next Maintenance", |c: &Container| {
            CellValue::from(c.next_maintenance.as_str())
        })
        .with_render(|c| html! { { format_date(&c.next_maintenance) } }),
        Column::new("days_until", "Days Until", |c: &Container| {
            days_until(&c.next_maintenance, today())
                .map(|days| days as f64)
                .into()
        })
        .with_render(|c| match days_until(&c.next_maintenance, today()) {
            Some(days) => {
                let tone = if days < 7 {
                    Some("days-critical")
                } else if days < 30 {
                    Some("days-warning")
                } else {
                    None
                };
                html! { <span class={classes!(tone)}>{ format!("{} days", days) }</span> }
            }
            None => html! { <span class="cell-sub">{ "—" }</span> },
        }),
        Column::new("actions", "Actions", |_: &Container| CellValue::Missing)
            .not_sortable()
            .with_render(|c| {
                let id = c.id.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    notify::alert(&format!("Create maintenance ticket for {}", id));
                });
                html! {
                    <button type="button" class="link-button" {onclick}>{ "Schedule" }</button>
                }
            }),
    ]
}

#[function_component(Fleet)]
pub fn fleet() -> Html {
    let context = use_session();
    let maintenance_filter = use_state(|| MaintenanceFilter::All);

    let active_rentals = mock_data::containers().len();
    let available = TOTAL_FLEET - active_rentals - IN_MAINTENANCE;
    let utilization = (active_rentals as f64 / TOTAL_FLEET as f64) * 100.0;

    let filtered: Vec<Container> = mock_data::containers()
        .iter()
        .filter(|c| maintenance_filter.retains(days_until(&c.next_maintenance, today())))
        .cloned()
        .collect();

    let filter_buttons = MaintenanceFilter::ALL
        .iter()
        .map(|&filter| {
            let onclick = {
                let maintenance_filter = maintenance_filter.clone();
                Callback::from(move |_: MouseEvent| maintenance_filter.set(filter))
            };
            html! {
                <button
                    type="button"
                    class={classes!("btn-range", (*maintenance_filter == filter).then_some("active"))}
                    {onclick}
                >
                    { filter.label() }
                </button>
            }
        })
        .collect::<Html>();

    let regions = REGIONS
        .iter()
        .map(|(region, units, active, available)| {
            html! {
                <div class="region-card" key={*region}>
                    <p class="metric-label">{ *region }</p>
                    <p class="region-units">{ format!("{} units", units) }</p>
                    <div class="region-split">
                        <span class="region-active">{ format!("{} Active", active) }</span>
                        <span class="cell-sub">{ format!("{} Available", available) }</span>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let on_row_click = {
        let select_container = context.select_container.clone();
        Callback::from(move |container: Container| select_container.emit(container.id))
    };
    let key_extractor: fn(&Container) -> String = |c| c.id.clone();

    html! {
        <div class="fleet-page">
            <div class="kpi-grid">
                <KpiTile
                    title="Total Fleet"
                    value={TOTAL_FLEET.to_string()}
                    icon="📊"
                    subtitle="Opticooler units"
                />
                <KpiTile
                    title="Active Rentals"
                    value={active_rentals.to_string()}
                    icon="📍"
                    trend={Trend::Up}
                    subtitle={format!("{:.1}% utilization", utilization)}
                />
                <KpiTile
                    title="Available"
                    value={available.to_string()}
                    icon="📈"
                    subtitle="Ready to deploy"
                />
                <KpiTile
                    title="In Maintenance"
                    value={IN_MAINTENANCE.to_string()}
                    icon="🔧"
                    subtitle="Service in progress"
                />
            </div>

            <div class="card">
                <div class="card-header stacked">
                    <h3>{ "Global Fleet Distribution" }</h3>
                    <p>{ "OptiCooler units distributed across regions" }</p>
                </div>
                <div class="card-body region-grid">{ regions }</div>
            </div>

            <div class="card">
                <div class="card-header">
                    <div>
                        <h3>{ "Maintenance Schedule" }</h3>
                        <p>{ "Upcoming and overdue maintenance tasks" }</p>
                    </div>
                    <div class="range-toggle">{ filter_buttons }</div>
                </div>
                <DataTable<Container>
                    columns={maintenance_columns()}
                    rows={filtered}
                    key_extractor={key_extractor}
                    on_row_click={Some(on_row_click)}
                />
            </div>

            <div class="card">
                <div class="card-header">
                    <div>
                        <h3>{ "Sensor Health Analytics" }</h3>
                        <p>
                            { format!("Powered by Databricks • Last updated: {}",
                                      format_epoch_ms(js_sys::Date::now())) }
                        </p>
                    </div>
                    <span class="badge badge-live">{ "● Connected" }</span>
                </div>
                <div class="card-body health-grid">
                    <div class="health-panel">
                        <div class="health-head">
                            <h4>{ "Compressor Efficiency" }</h4>
                            <StatusChip label="Optimal" tone={ChipTone::Positive} />
                        </div>
                        <div class="health-row">
                            <span class="cell-sub">{ "Average RPM" }</span>
                            <span>{ "2,450" }</span>
                        </div>
                        <div class="health-row">
                            <span class="cell-sub">{ "Power Draw" }</span>
                            <span>{ "145W" }</span>
                        </div>
                    </div>
                    <div class="health-panel">
                        <div class="health-head">
                            <h4>{ "Sensor Calibration" }</h4>
                            <StatusChip label="1 Overdue" tone={ChipTone::Caution} />
                        </div>
                        <div class="health-row">
                            <span class="cell-sub">{ "Last Calibration" }</span>
                            <span>{ "15 days ago" }</span>
                        </div>
                        <div class="health-row">
                            <span class="cell-sub">{ "Accuracy" }</span>
                            <span>{ "±0.2°C" }</span>
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

    #[test]
    fn due_window_covers_the_next_thirty_days() {
        let filter = MaintenanceFilter::Due;
        assert!(filter.retains(Some(0)));
        assert!(filter.retains(Some(29)));
        assert!(!filter.retains(Some(30)));
        assert!(!filter.retains(Some(-1)));
        assert!(!filter.retains(None));
    }

    #[test]
    fn overdue_means_past_dates_only() {
        let filter = MaintenanceFilter::Overdue;
        assert!(filter.retains(Some(-1)));
        assert!(!filter.retains(Some(0)));
        assert!(!filter.retains(None));
    }

    #[test]
    fn all_keeps_unparseable_dates() {
        assert!(MaintenanceFilter::All.retains(None));
    }
}
