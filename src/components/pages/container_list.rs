// ============================================================================
// TRACK & TRACE - Listado de contenedores con búsqueda y filtro de estado
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::context::use_session;
use crate::models::{Container, ContainerStatus};
use crate::services::mock_data;
use crate::utils::{capitalize, format_datetime};

/// Case-insensitive match over id, AWB, origin and destination, plus the
/// status dropdown ("all" passes everything).
fn matches_filters(container: &Container, term: &str, status: &str) -> bool {
    let term = term.to_lowercase();
    let matches_search = term.is_empty()
        || container.id.to_lowercase().contains(&term)
        || container.awb.to_lowercase().contains(&term)
        || container.origin.to_lowercase().contains(&term)
        || container.destination.to_lowercase().contains(&term);
    let matches_status = status == "all" || container.status.as_str() == status;
    matches_search && matches_status
}

fn list_columns() -> Vec<Column<Container>> {
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
        Column::new("last_seen", "Last Seen", |c: &Container| {
            CellValue::from(c.last_seen.as_str())
        })
        .with_render(|c| html! { <span class="cell-sub">{ format_datetime(&c.last_seen) }</span> }),
        Column::new("temperature", "Temperature", |c: &Container| {
            CellValue::from(c.temperature)
        })
        .with_render(|c| {
            html! {
                <span>
                    <span class={classes!(c.temperature_deviates().then_some("temp-alert"))}>
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
                    <span class="battery-cell">
                        <span class="battery-bar">
                            <span class="battery-fill" style={format!("width: {}%", c.battery)} />
                        </span>
                        <span class={classes!("cell-sub", tone)}>{ format!("{}%", c.battery) }</span>
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

#[function_component(ContainerList)]
pub fn container_list() -> Html {
    let context = use_session();
    let search_term = use_state(String::new);
    let status_filter = use_state(|| "all".to_string());

    let containers = mock_data::containers();
    let filtered: Vec<Container> = containers
        .iter()
        .filter(|c| matches_filters(c, &search_term, &status_filter))
        .cloned()
        .collect();

    let count_for = |status: ContainerStatus| {
        containers.iter().filter(|c| c.status == status).count()
    };

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_term.set(input.value());
            }
        })
    };
    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                status_filter.set(select.value());
            }
        })
    };
    let on_clear = {
        let search_term = search_term.clone();
        Callback::from(move |_: MouseEvent| search_term.set(String::new()))
    };

    let on_row_click = {
        let select_container = context.select_container.clone();
        Callback::from(move |container: Container| select_container.emit(container.id))
    };
    let key_extractor: fn(&Container) -> String = |c| c.id.clone();

    html! {
        <div class="container-list-page">
            <div class="card">
                <div class="card-header stacked">
                    <h3>{ "Search Containers" }</h3>
                    <p>{ "Find containers by ID, AWB, origin, or destination" }</p>
                </div>
                <div class="card-body">
                    <div class="filter-row">
                        <div class="search-field">
                            <span class="search-icon">{ "🔍" }</span>
                            <input
                                type="text"
                                placeholder="Search by Container ID, AWB, Origin, or Destination..."
                                value={(*search_term).clone()}
                                oninput={on_search}
                            />
                        </div>
                        <select class="status-select" onchange={on_status_change}>
                            <option value="all" selected={*status_filter == "all"}>{ "All Status" }</option>
                            <option value="ok" selected={*status_filter == "ok"}>{ "OK" }</option>
                            <option value="warning" selected={*status_filter == "warning"}>{ "Warning" }</option>
                            <option value="critical" selected={*status_filter == "critical"}>{ "Critical" }</option>
                        </select>
                        <button type="button" class="btn-outline">{ "More Filters" }</button>
                    </div>

                    <div class="filter-summary">
                        <span>{ format!("{} containers found", filtered.len()) }</span>
                        <StatusChip
                            label={format!("{} OK", count_for(ContainerStatus::Ok))}
                            tone={ChipTone::Positive}
                        />
                        <StatusChip
                            label={format!("{} Warning", count_for(ContainerStatus::Warning))}
                            tone={ChipTone::Caution}
                        />
                        <StatusChip
                            label={format!("{} Critical", count_for(ContainerStatus::Critical))}
                            tone={ChipTone::Negative}
                        />
                    </div>
                </div>
            </div>

            <div class="card">
                <DataTable<Container>
                    columns={list_columns()}
                    rows={filtered.clone()}
                    key_extractor={key_extractor}
                    on_row_click={Some(on_row_click)}
                />
            </div>

            if filtered.is_empty() && !search_term.is_empty() {
                <div class="card empty-search">
                    <p>{ format!("No containers found matching \"{}\"", *search_term) }</p>
                    <button type="button" class="link-button" onclick={on_clear}>
                        { "Clear search" }
                    </button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_matches_everything() {
        let matched = mock_data::containers()
            .iter()
            .filter(|c| matches_filters(c, "", "all"))
            .count();
        assert_eq!(matched, mock_data::containers().len());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let ids: Vec<&str> = mock_data::containers()
            .iter()
            .filter(|c| matches_filters(c, "sin", "all"))
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["OC-2402"]);

        let by_awb: Vec<&str> = mock_data::containers()
            .iter()
            .filter(|c| matches_filters(c, "awb-987", "all"))
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(by_awb, vec!["OC-2404"]);
    }

    #[test]
    fn status_filter_narrows_results() {
        let ok_count = mock_data::containers()
            .iter()
            .filter(|c| matches_filters(c, "", "ok"))
            .count();
        assert_eq!(ok_count, 3);
    }

    #[test]
    fn search_and_status_combine() {
        // OC-2401 matches "fra" but is in warning state
        let matched = mock_data::containers()
            .iter()
            .filter(|c| matches_filters(c, "fra", "ok"))
            .count();
        assert_eq!(matched, 0);
    }
}
