pub mod app;
pub mod app_shell;
pub mod data_table;
pub mod kpi_tile;
pub mod login;
pub mod pages;
pub mod sensor_chart;
pub mod status_chip;

pub use app::App;
pub use app_shell::AppShell;
pub use data_table::DataTable;
pub use kpi_tile::KpiTile;
pub use login::Login;
pub use sensor_chart::SensorChart;
pub use status_chip::StatusChip;
