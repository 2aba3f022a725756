//! Endpoint configuration for the remote jobs API.
//!
//! A wasm page has no process environment at run time, so the only override
//! is taken at build time from `JOBBY_API_BASE_URL`.

/// Base URL used when no override is compiled in.
pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

/// Name of the cookie holding the bearer token.
pub const DEFAULT_CREDENTIAL_COOKIE: &str = "jwt_token";

/// Where the page sends its two reads and where it finds the bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host of the API, without trailing slash.
    pub base_url: String,

    /// Path of the profile summary endpoint.
    pub profile_path: String,

    /// Path of the filtered job list endpoint.
    pub jobs_path: String,

    /// Cookie name the credential accessor reads.
    pub credential_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_path: "/profile".to_string(),
            jobs_path: "/jobs".to_string(),
            credential_cookie: DEFAULT_CREDENTIAL_COOKIE.to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads the configuration compiled into the binary.
    ///
    /// Optional build-time environment variables:
    /// - JOBBY_API_BASE_URL: API origin (default: https://apis.ccbp.in)
    pub fn from_build_env() -> Self {
        Self::default().with_base_url(option_env!("JOBBY_API_BASE_URL"))
    }

    /// Replaces the base URL when `base_url` is present and non-blank.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn profile_url(&self) -> String {
        self.endpoint(&self.profile_path)
    }

    pub fn jobs_url(&self) -> String {
        self.endpoint(&self.jobs_path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
