// ============================================================================
// BILLING - Lista maestra de facturas con detalle y desglose por partidas
// ============================================================================

use yew::prelude::*;

use crate::components::status_chip::{ChipTone, StatusChip};
use crate::config::CONFIG;
use crate::models::InvoiceStatus;
use crate::services::mock_data;
use crate::utils::{capitalize, format_currency, format_date, format_grouped};

#[function_component(Invoices)]
pub fn invoices() -> Html {
    let invoices = mock_data::invoices();
    let selected_id = use_state(|| {
        invoices
            .first()
            .map(|invoice| invoice.id.clone())
            .unwrap_or_default()
    });

    let selected = invoices.iter().find(|invoice| invoice.id == *selected_id);

    let total_invoiced: f64 = invoices.iter().map(|invoice| invoice.amount).sum();
    let outstanding: f64 = invoices
        .iter()
        .filter(|invoice| invoice.status != InvoiceStatus::Paid)
        .map(|invoice| invoice.amount)
        .sum();

    let list_items = invoices
        .iter()
        .map(|invoice| {
            let onclick = {
                let selected_id = selected_id.clone();
                let id = invoice.id.clone();
                Callback::from(move |_: MouseEvent| selected_id.set(id.clone()))
            };
            html! {
                <button
                    type="button"
                    key={invoice.id.clone()}
                    class={classes!("invoice-item", (*selected_id == invoice.id).then_some("selected"))}
                    {onclick}
                >
                    <div class="invoice-head">
                        <span class="mono">{ format!("📄 {}", invoice.number) }</span>
                        <StatusChip
                            label={capitalize(invoice.status.as_str())}
                            tone={ChipTone::from(invoice.status)}
                        />
                    </div>
                    <p class="invoice-amount">{ format!("${}", format_grouped(invoice.amount)) }</p>
                    <p class="cell-sub">{ format!("Due: {}", format_date(&invoice.due_date)) }</p>
                </button>
            }
        })
        .collect::<Html>();

    let detail = match selected {
        Some(invoice) => {
            let line_rows = invoice
                .line_items
                .iter()
                .map(|item| {
                    html! {
                        <tr key={item.container_id.clone()}>
                            <td><span class="mono accent">{ item.container_id.clone() }</span></td>
                            <td>{ item.route.clone() }</td>
                            <td class="numeric">{ item.days_rented }</td>
                            <td class="numeric">{ format!("${}", format_grouped(item.rate)) }</td>
                            <td class="numeric">{ format!("${}", format_grouped(item.total)) }</td>
                        </tr>
                    }
                })
                .collect::<Html>();

            html! {
                <div class="card">
                    <div class="invoice-detail-header">
                        <div class="detail-title">
                            <div>
                                <h2>{ invoice.number.clone() }</h2>
                                <p class="cell-sub">{ format!("Issued: {}", format_date(&invoice.date)) }</p>
                            </div>
                            <StatusChip
                                label={capitalize(invoice.status.as_str())}
                                tone={ChipTone::from(invoice.status)}
                            />
                        </div>

                        <div class="invoice-totals">
                            <div>
                                <p class="metric-label">{ "Total Amount" }</p>
                                <p>{ format!("${}", format_grouped(invoice.amount)) }</p>
                            </div>
                            <div>
                                <p class="metric-label">{ "Due Date" }</p>
                                <p>{ format_date(&invoice.due_date) }</p>
                            </div>
                        </div>

                        <div class="detail-actions">
                            <button type="button" class="btn-primary">{ "⬇ Download PDF" }</button>
                            <button type="button" class="btn-outline">{ "👁 Preview" }</button>
                        </div>
                    </div>

                    <div class="card-body">
                        <h3>{ "Line Items" }</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{ "Container ID" }</th>
                                    <th>{ "Route" }</th>
                                    <th class="numeric">{ "Days Rented" }</th>
                                    <th class="numeric">{ "Rate/Day" }</th>
                                    <th class="numeric">{ "Total" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { line_rows }
                                <tr class="total-row">
                                    <td colspan="4" class="numeric">{ "Total" }</td>
                                    <td class="numeric">{ format!("${}", format_grouped(invoice.amount)) }</td>
                                </tr>
                            </tbody>
                        </table>
                    </div>

                    <div class="export-strip">
                        <h3>{ "Export Options" }</h3>
                        <div class="export-buttons">
                            <button type="button" class="btn-outline">{ "Export as CSV" }</button>
                            <button type="button" class="btn-outline">{ "Export as Excel" }</button>
                            <button type="button" class="btn-outline">{ "Send to ERP" }</button>
                        </div>
                    </div>
                </div>
            }
        }
        None => html! {
            <div class="card empty-search">
                <p>{ "No invoices available" }</p>
            </div>
        },
    };

    html! {
        <div class="invoices-page">
            <div class="invoices-grid">
                <div class="invoice-list">
                    <div class="card">
                        <div class="card-header stacked">
                            <h3>{ "Invoices" }</h3>
                        </div>
                        <div class="invoice-items">{ list_items }</div>
                    </div>
                </div>

                <div class="invoice-detail">
                    { detail }

                    <div class="summary-cards">
                        <div class="card summary">
                            <p class="metric-label">{ "Total Invoiced (Nov)" }</p>
                            <p>{ format!("${}", format_currency(total_invoiced)) }</p>
                        </div>
                        <div class="card summary">
                            <p class="metric-label">{ "Outstanding" }</p>
                            <p>{ format!("${}", format_currency(outstanding)) }</p>
                        </div>
                        <div class="card summary">
                            <p class="metric-label">{ "Avg. Cost/Day" }</p>
                            <p>{ format!("${}", format_currency(CONFIG.lease_rate_per_day)) }</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
