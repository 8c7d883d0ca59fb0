use super::client::{ApiClient, ApiError};
use crate::models::Alert;
use crate::pagination::PageRequest;

impl ApiClient {
    /// Get one page of threshold alerts, newest first
    pub async fn fetch_alerts(&self, page: PageRequest) -> Result<Vec<Alert>, ApiError> {
        self.get(&format!("/alerts?{}", page.query_string())).await
    }
}
