use serde::{Deserialize, Serialize};

/// One recorded threshold violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub timestamp: String,
    pub topic: String,
    pub violated_key: String,
    pub threshold_value: f64,
    pub actual_value: f64,
    pub message: String,
}
