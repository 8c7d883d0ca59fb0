use super::client::{ApiClient, ApiError};
use crate::models::Reading;
use crate::pagination::PageRequest;

impl ApiClient {
    /// Get one page of raw sensor readings, newest first
    pub async fn fetch_data(&self, page: PageRequest) -> Result<Vec<Reading>, ApiError> {
        self.get(&format!("/data?{}", page.query_string())).await
    }
}
