pub mod alert;
pub mod health;
pub mod reading;
pub mod stats;

pub use alert::Alert;
pub use health::BackendStatus;
pub use reading::{Reading, SensorField};
pub use stats::{LatestReading, StatsSummary};
