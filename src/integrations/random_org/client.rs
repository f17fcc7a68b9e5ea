// src/integrations/random_org/client.rs
//
// random.org HTTP client
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - One blocking GET per draw, no retries
// - Timeouts, transport failures and unparseable bodies stay distinct

use std::time::Duration;

use log::{debug, error, info};
use reqwest::blocking::Client;

use super::{RandomError, RandomSource};
use crate::error::{AppError, AppResult};

/// One decimal fraction with two digits, plain text
pub const DEFAULT_RANDOM_ORG_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// random.org API client
pub struct RandomOrgClient {
    url: String,
    http_client: Client,
}

impl RandomOrgClient {
    /// Create a client for `url` with a bounded wait of `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_body(&self) -> Result<String, RandomError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(classify)?;

        response.text().map_err(classify)
    }
}

impl RandomSource for RandomOrgClient {
    fn get_random(&self) -> AppResult<f64> {
        info!("Fetching random number from {}", self.url);

        let body = self.fetch_body().map_err(|e| {
            error!("{}", e);
            e
        })?;
        debug!("Received raw response: {}", body.trim());

        let value = parse_random_response(&body)?;
        info!("Received random number: {:.3}", value);
        Ok(value)
    }
}

/// Parse a plain-text random.org body into a float
pub fn parse_random_response(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| RandomError::InvalidResponse(trimmed.to_string()))
}

fn classify(err: reqwest::Error) -> RandomError {
    if err.is_timeout() {
        RandomError::Timeout
    } else {
        RandomError::RequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/decimal-fractions/", addr)
    }

    #[test]
    fn test_parse_valid_body() {
        assert_eq!(parse_random_response("0.42\n").unwrap(), 0.42);
        assert_eq!(parse_random_response("  0.07 ").unwrap(), 0.07);
    }

    #[test]
    fn test_parse_invalid_body() {
        let err = parse_random_response("invalid_response").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid response from random.org: invalid_response"
        );
    }

    #[test]
    fn test_get_random_decimal() {
        let url = serve_once("HTTP/1.1 200 OK", "0.42\n");
        let client = RandomOrgClient::new(url, DEFAULT_TIMEOUT).unwrap();

        assert_eq!(client.get_random().unwrap(), 0.42);
    }

    #[test]
    fn test_get_random_invalid_response() {
        let url = serve_once("HTTP/1.1 200 OK", "invalid_response");
        let client = RandomOrgClient::new(url, DEFAULT_TIMEOUT).unwrap();

        let err = client.get_random().unwrap_err();
        assert!(matches!(
            err,
            AppError::Random(RandomError::InvalidResponse(ref raw)) if raw == "invalid_response"
        ));
    }

    #[test]
    fn test_get_random_http_error_status() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "busy");
        let client = RandomOrgClient::new(url, DEFAULT_TIMEOUT).unwrap();

        let err = client.get_random().unwrap_err();
        assert!(matches!(err, AppError::Random(RandomError::RequestFailed(_))));
    }

    #[test]
    fn test_get_random_request_failure() {
        // Bind then drop to get a port nobody listens on
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let client = RandomOrgClient::new(format!("http://{}/", addr), DEFAULT_TIMEOUT).unwrap();

        let err = client.get_random().unwrap_err();
        assert!(matches!(err, AppError::Random(RandomError::RequestFailed(_))));
        assert!(err.to_string().starts_with("Request to random.org failed: "));
    }

    #[test]
    fn test_get_random_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            // Accept and hold the connection without answering
            let accepted = listener.accept();
            thread::sleep(Duration::from_millis(1500));
            drop(accepted);
        });

        let client =
            RandomOrgClient::new(format!("http://{}/", addr), Duration::from_millis(200)).unwrap();

        let err = client.get_random().unwrap_err();
        assert!(matches!(err, AppError::Random(RandomError::Timeout)));
        assert_eq!(err.to_string(), "Request to random.org timed out.");

        handle.join().unwrap();
    }

    #[test]
    fn test_default_url() {
        let client = RandomOrgClient::new(DEFAULT_RANDOM_ORG_URL, DEFAULT_TIMEOUT).unwrap();
        assert!(client.url().starts_with("https://www.random.org/decimal-fractions/"));
    }
}
