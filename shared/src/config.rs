//! ==============================================================================
//! config.rs - console configuration
//! ==============================================================================
//!
//! the backend address is fixed at build time through `RENTAL_API_URL`
//! (trunk forwards the environment to rustc), falling back to the local
//! development server.
//!
//! ==============================================================================

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// how long a notification stays on screen before leaving
pub const NOTICE_DISPLAY_MS: u32 = 3000;

/// length of the exit transition before the notification is removed
pub const NOTICE_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// backend base url, without trailing slash
    pub api_url: &'static str,
    /// customers listed in the rent form
    pub customer_limit: usize,
    /// films listed in the catalog and the rent form
    pub film_limit: usize,
    /// rentals scanned for the summary stats
    pub rental_stats_limit: usize,
    /// rows of the most-rented ranking
    pub most_rented_limit: usize,
    /// availability requests kept in flight at once
    pub availability_concurrency: usize,
    pub default_rental_days: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL,
            customer_limit: 100,
            film_limit: 100,
            rental_stats_limit: 1000,
            most_rented_limit: 10,
            availability_concurrency: 8,
            default_rental_days: 7,
        }
    }
}

impl ConsoleConfig {
    /// defaults, with the backend address taken from `RENTAL_API_URL` if set
    pub fn from_env() -> Self {
        match option_env!("RENTAL_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_api_url(url),
            _ => Self::default(),
        }
    }

    pub fn with_api_url(mut self, url: &'static str) -> Self {
        self.api_url = url.trim().trim_end_matches('/');
        self
    }

    /// full url for an endpoint path such as `/films?limit=100`
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
