use leptos::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;

/// Resolve the backend config once and share the client with every page.
/// Call this at the root of the app, before the router.
pub fn provide_api_client() {
    provide_context(ApiClient::new(ApiConfig::resolve()));
}

/// Hook to access the shared API client
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient must be provided by a parent component")
}
