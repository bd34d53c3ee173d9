use serde::{Deserialize, Serialize};

/// Container hardware family. RKN holds 2-8°C, RAP holds 15-25°C.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContainerType {
    #[serde(rename = "RKN")]
    Rkn,
    #[serde(rename = "RAP")]
    Rap,
}

impl ContainerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerType::Rkn => "RKN",
            ContainerType::Rap => "RAP",
        }
    }

    /// Allowed temperature band (min, max) in °C.
    pub fn thresholds(&self) -> (f64, f64) {
        match self {
            ContainerType::Rkn => (2.0, 8.0),
            ContainerType::Rap => (15.0, 25.0),
        }
    }

    /// Label used in booking forms.
    pub fn booking_label(&self) -> &'static str {
        match self {
            ContainerType::Rkn => "RKN (2-8°C)",
            ContainerType::Rap => "RAP (15-25°C)",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    Ok,
    Warning,
    Critical,
}

impl ContainerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStatus::Ok => "ok",
            ContainerStatus::Warning => "warning",
            ContainerStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Container {
    pub id: String,
    pub container_type: ContainerType,
    pub origin: String,
    pub destination: String,
    pub current_location: String,
    /// RFC 3339 timestamp of the last telemetry ping
    pub last_seen: String,
    pub temperature: f64,
    pub set_point: f64,
    /// Battery charge in percent
    pub battery: u8,
    pub status: ContainerStatus,
    pub awb: String,
    /// Airport codes along the planned route, origin first
    pub route: Vec<String>,
    pub lease_start: String,
    pub next_maintenance: String,
}

impl Container {
    /// A reading more than 2°C away from the set point is off-range.
    pub fn temperature_deviates(&self) -> bool {
        (self.temperature - self.set_point).abs() > 2.0
    }
}

/// One synthetic telemetry sample. Timestamp is ms since the epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureReading {
    pub timestamp: f64,
    pub internal: f64,
    pub set_point: f64,
    pub ambient: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_per_type() {
        assert_eq!(ContainerType::Rkn.thresholds(), (2.0, 8.0));
        assert_eq!(ContainerType::Rap.thresholds(), (15.0, 25.0));
    }

    #[test]
    fn temperature_deviation_uses_two_degree_band() {
        let mut container = Container {
            id: "OC-0000".to_string(),
            container_type: ContainerType::Rkn,
            origin: "FRA".to_string(),
            destination: "JFK".to_string(),
            current_location: "In Transit".to_string(),
            last_seen: "2025-11-28T10:30:00Z".to_string(),
            temperature: 5.2,
            set_point: 5.0,
            battery: 80,
            status: ContainerStatus::Ok,
            awb: "AWB-000000000".to_string(),
            route: vec!["FRA".to_string(), "JFK".to_string()],
            lease_start: "2025-11-25".to_string(),
            next_maintenance: "2026-02-15".to_string(),
        };
        assert!(!container.temperature_deviates());

        container.temperature = 8.3;
        assert!(container.temperature_deviates());
    }
}
