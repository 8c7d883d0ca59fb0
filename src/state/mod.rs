pub mod api;

pub use api::{provide_api_client, use_api_client};
