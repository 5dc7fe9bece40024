use std::time::Duration;

use url::Url;

use crate::error::LoadError;

/// Result of fetching a URL
#[derive(Clone)]
pub struct FetchResult {
    pub body: String,
    pub url: String,
    pub status: u16,
    pub content_type: String,
}

/// Fetch a JSON document over HTTP (blocking).
///
/// Any non-success status is an error; the body is not inspected here.
pub fn fetch_json(url_str: &str, timeout: Duration, tier: &'static str) -> Result<FetchResult, LoadError> {
    let parsed = Url::parse(url_str).map_err(|source| LoadError::InvalidUrl {
        tier,
        url: url_str.to_string(),
        source,
    })?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!(
            "solar-explorer/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|source| LoadError::Request { tier, source })?;

    let response = client
        .get(parsed.as_str())
        .header("Accept", "application/json,text/plain;q=0.9,*/*;q=0.8")
        .send()
        .map_err(|source| LoadError::Request { tier, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            tier,
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    let final_url = response.url().to_string();

    let body = response
        .text()
        .map_err(|source| LoadError::Request { tier, source })?;

    Ok(FetchResult {
        body,
        url: final_url,
        status: status.as_u16(),
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        let err = fetch_json("not a url", Duration::from_secs(1), "remote")
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::InvalidUrl { tier: "remote", .. }));
    }

    #[test]
    fn unreachable_host_is_a_request_error() {
        // Port 9 on loopback: nothing listens there in the test environment.
        let err = fetch_json(
            "http://127.0.0.1:9/solar_system.json",
            Duration::from_millis(500),
            "remote",
        )
        .err()
        .unwrap();
        assert_eq!(err.tier(), "remote");
        assert!(matches!(err, LoadError::Request { .. }));
    }
}
