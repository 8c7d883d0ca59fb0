use super::client::{ApiClient, ApiError};
use crate::models::BackendStatus;

impl ApiClient {
    /// Ping the backend root
    pub async fn fetch_health(&self) -> Result<BackendStatus, ApiError> {
        self.get("/").await
    }
}
