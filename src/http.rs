// src/http.rs
// HTTP client settings for node web API calls

use std::time::Duration;

/// Request timeout for a single web API round-trip
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sent with every request so node logs show who made the call
pub const USER_AGENT: &str = concat!("tahoe-magic/", env!("CARGO_PKG_VERSION"));

/// Client used for every grid call of one command
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate_version() {
        assert_eq!(
            USER_AGENT,
            format!("tahoe-magic/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_connect_timeout_shorter_than_request() {
        assert!(CONNECT_TIMEOUT < REQUEST_TIMEOUT);
    }
}
