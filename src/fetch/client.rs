//! HTTP client construction
//!
//! One client is built per scrape, carrying the identity profile's
//! `User-Agent` and the fixed request timeout. No cookie store is attached,
//! so nothing persists across invocations.

use crate::config::IdentityProfile;
use reqwest::Client;
use std::time::Duration;

/// Total budget for the single GET request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client for a scrape
///
/// Redirects follow reqwest's default policy; the page URL used for link
/// resolution stays the requested one either way.
///
/// # Arguments
///
/// * `profile` - The identity profile supplying the `User-Agent`
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(profile: IdentityProfile) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(profile.user_agent())
        .timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}
