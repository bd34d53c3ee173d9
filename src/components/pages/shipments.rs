// ============================================================================
// SHIPMENTS & BOOKINGS - Reservas activas, historial y alta de reservas
// ============================================================================

use yew::prelude::*;

use crate::components::status_chip::{ChipTone, StatusChip};
use crate::config::CONFIG;
use crate::models::ContainerType;
use crate::services::{mock_data, notify};
use crate::utils::{capitalize, format_date, format_grouped};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookingTab {
    Active,
    History,
    New,
}

impl BookingTab {
    const ALL: [BookingTab; 3] = [BookingTab::Active, BookingTab::History, BookingTab::New];

    fn label(&self) -> &'static str {
        match self {
            BookingTab::Active => "Active Bookings",
            BookingTab::History => "Booking History",
            BookingTab::New => "New Requests",
        }
    }

    fn count(&self) -> usize {
        match self {
            BookingTab::Active => mock_data::containers().len(),
            BookingTab::History => 23,
            BookingTab::New => 0,
        }
    }
}

// (booking id, container, route, duration, completed)
const HISTORY_ROWS: [(&str, &str, &str, &str, &str); 2] = [
    ("BK-2310-045", "OC-2301", "FRA → JFK", "14 days", "Nov 15, 2025"),
    ("BK-2310-044", "OC-2302", "SIN → LAX", "21 days", "Nov 10, 2025"),
];

#[function_component(Shipments)]
pub fn shipments() -> Html {
    let active_tab = use_state(|| BookingTab::Active);
    let show_modal = use_state(|| false);

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(true))
    };
    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(false))
    };
    let submit_booking = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| {
            notify::alert("Booking request submitted successfully!");
            show_modal.set(false);
        })
    };

    let tabs = BookingTab::ALL
        .iter()
        .map(|&tab| {
            let onclick = {
                let active_tab = active_tab.clone();
                Callback::from(move |_: MouseEvent| active_tab.set(tab))
            };
            html! {
                <button
                    type="button"
                    class={classes!("tab-button", (*active_tab == tab).then_some("active"))}
                    {onclick}
                >
                    { tab.label() }
                    <span class="tab-count">{ tab.count() }</span>
                </button>
            }
        })
        .collect::<Html>();

    let tab_body = match *active_tab {
        BookingTab::Active => {
            let cards = mock_data::containers()
                .iter()
                .map(|container| {
                    html! {
                        <div class="booking-card" key={container.id.clone()}>
                            <div class="booking-head">
                                <div class="booking-title">
                                    <span class="booking-icon">{ "✈️" }</span>
                                    <div>
                                        <div class="booking-id">
                                            <span class="mono accent">{ container.id.clone() }</span>
                                            <StatusChip
                                                label={capitalize(container.status.as_str())}
                                                tone={ChipTone::from(container.status)}
                                            />
                                        </div>
                                        <p class="cell-sub">{ format!("AWB: {}", container.awb) }</p>
                                    </div>
                                </div>
                                <button type="button" class="link-button">{ "View Details" }</button>
                            </div>
                            <div class="booking-facts">
                                <div>
                                    <p class="metric-label">{ "Route" }</p>
                                    <p>{ format!("{} → {}", container.origin, container.destination) }</p>
                                </div>
                                <div>
                                    <p class="metric-label">{ "Current Location" }</p>
                                    <p>{ container.current_location.clone() }</p>
                                </div>
                                <div>
                                    <p class="metric-label">{ "Lease Start" }</p>
                                    <p>{ format!("📅 {}", format_date(&container.lease_start)) }</p>
                                </div>
                                <div>
                                    <p class="metric-label">{ "Temperature" }</p>
                                    <p>{ format!("{}°C", container.temperature) }</p>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect::<Html>();
            html! { <div class="booking-list">{ cards }</div> }
        }
        BookingTab::History => {
            let rows = HISTORY_ROWS
                .iter()
                .map(|(booking_id, container, route, duration, completed)| {
                    html! {
                        <tr key={*booking_id}>
                            <td class="mono">{ *booking_id }</td>
                            <td class="mono accent">{ *container }</td>
                            <td>{ *route }</td>
                            <td>{ *duration }</td>
                            <td>{ *completed }</td>
                            <td><StatusChip label="Completed" tone={ChipTone::Positive} /></td>
                        </tr>
                    }
                })
                .collect::<Html>();
            html! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Booking ID" }</th>
                            <th>{ "Container" }</th>
                            <th>{ "Route" }</th>
                            <th>{ "Duration" }</th>
                            <th>{ "Completed" }</th>
                            <th>{ "Status" }</th>
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            }
        }
        BookingTab::New => html! {
            <div class="empty-tab">
                <p>{ "No new booking requests" }</p>
                <button type="button" class="link-button" onclick={open_modal.clone()}>
                    { "Create a new booking" }
                </button>
            </div>
        },
    };

    let rate = CONFIG.lease_rate_per_day;
    let weekly_total = format_grouped(rate * 7.0);

    html! {
        <div class="shipments-page">
            <div class="page-heading">
                <div>
                    <h2>{ "Shipments & Bookings" }</h2>
                    <p>{ "Manage container bookings and shipment details" }</p>
                </div>
                <button type="button" class="btn-primary" onclick={open_modal}>
                    { "+ New Booking" }
                </button>
            </div>

            <div class="card">
                <div class="tab-bar">{ tabs }</div>
                <div class="card-body">{ tab_body }</div>
            </div>

            if *show_modal {
                <div class="modal-backdrop">
                    <div class="modal">
                        <div class="modal-header">
                            <h3>{ "New Booking Request" }</h3>
                            <p>{ "Reserve a container for your shipment" }</p>
                        </div>
                        <div class="modal-body">
                            <div class="field-row">
                                <div class="form-group">
                                    <label>{ "Container Type" }</label>
                                    <select>
                                        <option>{ ContainerType::Rkn.booking_label() }</option>
                                        <option>{ ContainerType::Rap.booking_label() }</option>
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label>{ "Quantity" }</label>
                                    <input type="number" placeholder="1" min="1" />
                                </div>
                            </div>
                            <div class="field-row">
                                <div class="form-group">
                                    <label>{ "Origin Airport" }</label>
                                    <input type="text" placeholder="e.g., FRA" />
                                </div>
                                <div class="form-group">
                                    <label>{ "Destination Airport" }</label>
                                    <input type="text" placeholder="e.g., JFK" />
                                </div>
                            </div>
                            <div class="field-row">
                                <div class="form-group">
                                    <label>{ "Departure Date" }</label>
                                    <input type="date" />
                                </div>
                                <div class="form-group">
                                    <label>{ "Estimated Duration" }</label>
                                    <input type="number" placeholder="Days" />
                                </div>
                            </div>
                            <div class="form-group">
                                <label>{ "Air Waybill (AWB)" }</label>
                                <input type="text" placeholder="AWB-123456789" />
                            </div>
                            <div class="form-group">
                                <label>{ "Special Requirements" }</label>
                                <textarea
                                    rows="3"
                                    placeholder="Enter any special handling or temperature requirements..."
                                />
                            </div>
                            <div class="cost-preview">
                                <div class="cost-row">
                                    <span>{ "Estimated Cost" }</span>
                                    <span>{ format!("${}/day", rate as u32) }</span>
                                </div>
                                <div class="cost-row total">
                                    <span>{ "Total (7 days)" }</span>
                                    <span>{ format!("${}", weekly_total) }</span>
                                </div>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn-outline" onclick={close_modal}>
                                { "Cancel" }
                            </button>
                            <button type="button" class="btn-primary" onclick={submit_booking}>
                                { "Submit Request" }
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
