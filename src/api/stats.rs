use super::client::{ApiClient, ApiError};
use crate::models::StatsSummary;

impl ApiClient {
    /// Get the aggregate counters and the latest reading
    pub async fn fetch_stats(&self) -> Result<StatsSummary, ApiError> {
        self.get("/stats").await
    }
}
