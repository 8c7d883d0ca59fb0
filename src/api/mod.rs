pub mod alerts;
pub mod client;
pub mod data;
pub mod health;
pub mod stats;

pub use client::{ApiClient, ApiError};
