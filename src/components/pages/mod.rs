pub mod container_detail;
pub mod container_list;
pub mod customers;
pub mod dashboard;
pub mod fleet;
pub mod integrations;
pub mod invoices;
pub mod reports;
pub mod shipments;

pub use container_detail::ContainerDetail;
pub use container_list::ContainerList;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use fleet::Fleet;
pub use integrations::Integrations;
pub use invoices::Invoices;
pub use reports::Reports;
pub use shipments::Shipments;
