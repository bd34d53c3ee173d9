use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Artificial delay before demo sign-in resolves, in ms
    pub login_latency_ms: u32,
    /// Artificial delay for demo actions (reports, connection tests), in ms
    pub action_latency_ms: u32,
    /// Daily container lease rate shown in booking/billing screens, USD
    pub lease_rate_per_day: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "DoKaSch Opticool Portal".to_string(),
            environment: "demo".to_string(),
            enable_logging: true,
            login_latency_ms: 800,
            action_latency_ms: 2000,
            lease_rate_per_day: 450.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de
    /// compilación (ver build.rs).
    pub fn from_env() -> Self {
        Self {
            app_name: option_env!("APP_NAME")
                .unwrap_or("DoKaSch Opticool Portal")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("demo").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            login_latency_ms: option_env!("LOGIN_LATENCY_MS")
                .unwrap_or("800")
                .parse()
                .unwrap_or(800),
            action_latency_ms: option_env!("ACTION_LATENCY_MS")
                .unwrap_or("2000")
                .parse()
                .unwrap_or(2000),
            lease_rate_per_day: option_env!("LEASE_RATE_PER_DAY")
                .unwrap_or("450.0")
                .parse()
                .unwrap_or(450.0),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.login_latency_ms, 800);
        assert_eq!(config.action_latency_ms, 2000);
        assert_eq!(config.lease_rate_per_day, 450.0);
    }
}
