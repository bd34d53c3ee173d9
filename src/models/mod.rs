pub mod alert;
pub mod billing;
pub mod container;
pub mod customer;
pub mod integration;
pub mod session;

pub use alert::{Alert, AlertKind, AlertSeverity};
pub use billing::{Invoice, InvoiceLineItem, InvoiceStatus};
pub use container::{Container, ContainerStatus, ContainerType, TemperatureReading};
pub use customer::{Customer, CustomerStatus};
pub use integration::{Integration, IntegrationStatus};
pub use session::{Role, Session};
