// ============================================================================
// MOCK DATA - Datos de demo del portal (sin backend)
// ============================================================================
// Todo el portal lee de estas colecciones fijas. La única parte generada
// es la serie de temperatura, con jitter acotado alrededor del set point.
// ============================================================================

use lazy_static::lazy_static;

use crate::models::{
    Alert, AlertKind, AlertSeverity, Container, ContainerStatus, ContainerType, Customer,
    CustomerStatus, Integration, IntegrationStatus, Invoice, InvoiceLineItem, InvoiceStatus,
    TemperatureReading,
};

/// Samples per generated series: 24h of history at 30-minute intervals,
/// endpoints included.
pub const READING_COUNT: usize = 49;
pub const READING_INTERVAL_MS: f64 = 30.0 * 60.0 * 1000.0;

fn container(
    id: &str,
    container_type: ContainerType,
    origin: &str,
    destination: &str,
    current_location: &str,
    last_seen: &str,
    temperature: f64,
    set_point: f64,
    battery: u8,
    status: ContainerStatus,
    awb: &str,
    route: &[&str],
    lease_start: &str,
    next_maintenance: &str,
) -> Container {
    Container {
        id: id.to_string(),
        container_type,
        origin: origin.to_string(),
        destination: destination.to_string(),
        current_location: current_location.to_string(),
        last_seen: last_seen.to_string(),
        temperature,
        set_point,
        battery,
        status,
        awb: awb.to_string(),
        route: route.iter().map(|s| s.to_string()).collect(),
        lease_start: lease_start.to_string(),
        next_maintenance: next_maintenance.to_string(),
    }
}

lazy_static! {
    static ref CONTAINERS: Vec<Container> = vec![
        container(
            "OC-2401",
            ContainerType::Rkn,
            "FRA",
            "JFK",
            "In Transit",
            "2025-11-28T10:30:00Z",
            5.2,
            5.0,
            45,
            ContainerStatus::Warning,
            "AWB-789456123",
            &["FRA", "AMS", "JFK"],
            "2025-11-25",
            "2026-02-15",
        ),
        container(
            "OC-2402",
            ContainerType::Rap,
            "SIN",
            "LAX",
            "Singapore",
            "2025-11-28T09:15:00Z",
            22.1,
            22.0,
            87,
            ContainerStatus::Ok,
            "AWB-456789012",
            &["SIN", "HKG", "LAX"],
            "2025-11-26",
            "2026-03-01",
        ),
        container(
            "OC-2403",
            ContainerType::Rkn,
            "LHR",
            "DXB",
            "Dubai",
            "2025-11-28T11:45:00Z",
            4.8,
            5.0,
            92,
            ContainerStatus::Ok,
            "AWB-123456789",
            &["LHR", "DXB"],
            "2025-11-27",
            "2026-01-20",
        ),
        container(
            "OC-2404",
            ContainerType::Rkn,
            "CDG",
            "BOS",
            "In Transit",
            "2025-11-28T08:20:00Z",
            8.3,
            5.0,
            23,
            ContainerStatus::Critical,
            "AWB-987654321",
            &["CDG", "LHR", "BOS"],
            "2025-11-24",
            "2026-01-10",
        ),
        container(
            "OC-2405",
            ContainerType::Rap,
            "NRT",
            "ORD",
            "Tokyo",
            "2025-11-28T07:00:00Z",
            21.5,
            22.0,
            78,
            ContainerStatus::Ok,
            "AWB-741852963",
            &["NRT", "LAX", "ORD"],
            "2025-11-23",
            "2026-02-28",
        ),
    ];
    static ref ALERTS: Vec<Alert> = vec![
        Alert {
            id: "ALT-001".to_string(),
            container_id: "OC-2404".to_string(),
            timestamp: "2025-11-28T08:20:00Z".to_string(),
            kind: AlertKind::Temperature,
            severity: AlertSeverity::Critical,
            message: "Temperature exceeded threshold: 8.3°C (Max: 8.0°C)".to_string(),
        },
        Alert {
            id: "ALT-002".to_string(),
            container_id: "OC-2401".to_string(),
            timestamp: "2025-11-28T10:15:00Z".to_string(),
            kind: AlertKind::Battery,
            severity: AlertSeverity::Warning,
            message: "Battery level low: 45% - Charging recommended".to_string(),
        },
        Alert {
            id: "ALT-003".to_string(),
            container_id: "OC-2404".to_string(),
            timestamp: "2025-11-28T07:45:00Z".to_string(),
            kind: AlertKind::Battery,
            severity: AlertSeverity::Critical,
            message: "Battery level critical: 23% - Immediate action required".to_string(),
        },
    ];
    static ref INVOICES: Vec<Invoice> = vec![
        Invoice {
            id: "INV-001".to_string(),
            number: "INV-2025-11-001".to_string(),
            date: "2025-11-01".to_string(),
            due_date: "2025-11-30".to_string(),
            amount: 15750.00,
            status: InvoiceStatus::Paid,
            line_items: vec![
                InvoiceLineItem {
                    container_id: "OC-2301".to_string(),
                    route: "FRA → JFK".to_string(),
                    days_rented: 14,
                    rate: 450.0,
                    total: 6300.0,
                },
                InvoiceLineItem {
                    container_id: "OC-2302".to_string(),
                    route: "SIN → LAX".to_string(),
                    days_rented: 21,
                    rate: 450.0,
                    total: 9450.0,
                },
            ],
        },
        Invoice {
            id: "INV-002".to_string(),
            number: "INV-2025-11-002".to_string(),
            date: "2025-11-15".to_string(),
            due_date: "2025-12-15".to_string(),
            amount: 12600.00,
            status: InvoiceStatus::Pending,
            line_items: vec![
                InvoiceLineItem {
                    container_id: "OC-2401".to_string(),
                    route: "FRA → JFK".to_string(),
                    days_rented: 7,
                    rate: 450.0,
                    total: 3150.0,
                },
                InvoiceLineItem {
                    container_id: "OC-2402".to_string(),
                    route: "SIN → LAX".to_string(),
                    days_rented: 14,
                    rate: 450.0,
                    total: 6300.0,
                },
                InvoiceLineItem {
                    container_id: "OC-2403".to_string(),
                    route: "LHR → DXB".to_string(),
                    days_rented: 7,
                    rate: 450.0,
                    total: 3150.0,
                },
            ],
        },
    ];
    static ref CUSTOMERS: Vec<Customer> = vec![
        Customer {
            id: "CUST-001".to_string(),
            name: "BioMed Pharma".to_string(),
            contract_type: "Global Lease".to_string(),
            active_users: 12,
            api_usage: 245,
            status: CustomerStatus::Active,
        },
        Customer {
            id: "CUST-002".to_string(),
            name: "MedTech Solutions".to_string(),
            contract_type: "Pay-per-Use".to_string(),
            active_users: 5,
            api_usage: 78,
            status: CustomerStatus::Active,
        },
        Customer {
            id: "CUST-003".to_string(),
            name: "PharmaLogix Inc".to_string(),
            contract_type: "Regional Contract".to_string(),
            active_users: 8,
            api_usage: 156,
            status: CustomerStatus::Active,
        },
    ];
    static ref INTEGRATIONS: Vec<Integration> = vec![
        Integration {
            id: "INT-001".to_string(),
            name: "Databricks".to_string(),
            logo: "📊".to_string(),
            status: IntegrationStatus::Connected,
            last_sync: "2025-11-28T11:30:00Z".to_string(),
        },
        Integration {
            id: "INT-002".to_string(),
            name: "Power BI".to_string(),
            logo: "📈".to_string(),
            status: IntegrationStatus::Connected,
            last_sync: "2025-11-28T10:00:00Z".to_string(),
        },
        Integration {
            id: "INT-003".to_string(),
            name: "SAP ERP".to_string(),
            logo: "💼".to_string(),
            status: IntegrationStatus::Error,
            last_sync: "2025-11-27T15:30:00Z".to_string(),
        },
    ];
}

pub fn containers() -> &'static [Container] {
    &CONTAINERS
}

pub fn container_by_id(id: &str) -> Option<&'static Container> {
    CONTAINERS.iter().find(|c| c.id == id)
}

pub fn alerts() -> &'static [Alert] {
    &ALERTS
}

pub fn alerts_for_container(container_id: &str) -> Vec<Alert> {
    ALERTS
        .iter()
        .filter(|a| a.container_id == container_id)
        .cloned()
        .collect()
}

pub fn invoices() -> &'static [Invoice] {
    &INVOICES
}

pub fn customers() -> &'static [Customer] {
    &CUSTOMERS
}

pub fn integrations() -> &'static [Integration] {
    &INTEGRATIONS
}

/// 24 hours of synthetic telemetry for one container, oldest sample
/// first, ending at "now". Unknown ids get an empty series.
pub fn temperature_series(container_id: &str) -> Vec<TemperatureReading> {
    temperature_series_at(container_id, js_sys::Date::now(), js_sys::Math::random)
}

/// Generator with injectable clock and jitter source. `jitter` must
/// return values in [0, 1), like `Math.random`.
fn temperature_series_at(
    container_id: &str,
    now_ms: f64,
    mut jitter: impl FnMut() -> f64,
) -> Vec<TemperatureReading> {
    let container = match container_by_id(container_id) {
        Some(c) => c,
        None => return Vec::new(),
    };

    let ambient_base = match container.container_type {
        ContainerType::Rkn => 25.0,
        ContainerType::Rap => 23.0,
    };

    let mut readings = Vec::with_capacity(READING_COUNT);
    for i in (0..READING_COUNT).rev() {
        let variation = (jitter() - 0.5) * 1.5;
        readings.push(TemperatureReading {
            timestamp: now_ms - i as f64 * READING_INTERVAL_MS,
            internal: container.set_point + variation,
            set_point: container.set_point,
            ambient: ambient_base + (jitter() - 0.5) * 5.0,
        });
    }

    readings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_containers_with_unique_ids() {
        let containers = containers();
        assert_eq!(containers.len(), 5);

        let mut ids: Vec<&str> = containers.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn alerts_reference_known_containers() {
        for alert in alerts() {
            assert!(
                container_by_id(&alert.container_id).is_some(),
                "alert {} points at unknown container {}",
                alert.id,
                alert.container_id
            );
        }
    }

    #[test]
    fn alerts_for_container_filters_by_id() {
        let for_2404 = alerts_for_container("OC-2404");
        assert_eq!(for_2404.len(), 2);
        assert!(for_2404.iter().all(|a| a.container_id == "OC-2404"));

        assert!(alerts_for_container("OC-2403").is_empty());
    }

    #[test]
    fn invoice_amounts_match_line_items() {
        for invoice in invoices() {
            let sum: f64 = invoice.line_items.iter().map(|item| item.total).sum();
            assert!(
                (invoice.amount - sum).abs() < 0.01,
                "invoice {} amount {} != line item sum {}",
                invoice.id,
                invoice.amount,
                sum
            );
        }
    }

    #[test]
    fn series_has_expected_shape() {
        let now = 1_764_324_000_000.0;
        let series = temperature_series_at("OC-2401", now, || 0.5);

        assert_eq!(series.len(), READING_COUNT);
        assert_eq!(series.last().map(|r| r.timestamp), Some(now));

        // Oldest first, evenly spaced
        for pair in series.windows(2) {
            let delta = pair[1].timestamp - pair[0].timestamp;
            assert_eq!(delta, READING_INTERVAL_MS);
        }
    }

    #[test]
    fn series_jitter_stays_in_bounds() {
        // Extremes of the jitter source pin the spread
        let low = temperature_series_at("OC-2402", 0.0, || 0.0);
        let high = temperature_series_at("OC-2402", 0.0, || 0.999_999);

        for reading in low.iter().chain(high.iter()) {
            assert!((reading.internal - reading.set_point).abs() <= 0.75);
            // RAP ambient base is 23°C
            assert!((reading.ambient - 23.0).abs() <= 2.5);
        }
    }

    #[test]
    fn unknown_container_yields_empty_series() {
        assert!(temperature_series_at("OC-9999", 0.0, || 0.5).is_empty());
    }
}
