use serde::{Deserialize, Serialize};

/// Greeting returned by the backend root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub message: String,
}
