pub mod alerts;
pub mod dashboard;
pub mod layout;
pub mod not_found;
pub mod paged;
pub mod raw_data;
pub mod table;

pub use alerts::AlertsPage;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use raw_data::RawDataPage;
