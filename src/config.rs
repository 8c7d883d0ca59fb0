//! Backend connection settings.
//!
//! The base URL is looked up once when the app mounts, in this order:
//! 1. `window.ENV.API_URL`, injected by the hosting page at runtime
//! 2. `SENSOR_API_BASE_URL`, baked in at build time
//! 3. [`DEFAULT_API_URL`]

/// Local development backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolved backend configuration, shared through the API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config for the given base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the config from the browser environment and build-time overrides
    pub fn resolve() -> Self {
        let config = Self::from_candidates(runtime_api_url(), option_env!("SENSOR_API_BASE_URL"));
        log::info!("Using backend at {}", config.base_url);
        config
    }

    /// Pick the first non-blank candidate, falling back to the default
    pub fn from_candidates(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let url = runtime
            .filter(|u| !u.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|u| !u.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL with an absolute path such as `/stats`
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Read `window.ENV.API_URL` if the hosting page defines it
fn runtime_api_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        js_sys::Reflect::get(&env, &JsValue::from_str("API_URL"))
            .ok()?
            .as_string()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
