use serde::Deserialize;
use std::fmt;

use crate::config::SuffixConfig;
use crate::fake::FakeData;

// ---------- errors ----------

#[derive(Debug)]
pub enum SuffixError {
    Timeout,
    Http(reqwest::Error),
    /// Endpoint answered with something other than 200 OK.
    Status(u16),
    Decode(String),
    MissingSuffix,
}

impl fmt::Display for SuffixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixError::Timeout => write!(f, "Suffix lookup timed out"),
            SuffixError::Http(e) => write!(f, "Suffix lookup failed: {e}"),
            SuffixError::Status(code) => write!(f, "Suffix lookup returned HTTP {code}"),
            SuffixError::Decode(msg) => write!(f, "Suffix lookup returned invalid JSON: {msg}"),
            SuffixError::MissingSuffix => write!(f, "Suffix lookup response has no suffix"),
        }
    }
}

impl std::error::Error for SuffixError {}

impl From<reqwest::Error> for SuffixError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SuffixError::Timeout
        } else if e.is_decode() {
            SuffixError::Decode(e.to_string())
        } else {
            SuffixError::Http(e)
        }
    }
}

// ---------- trait ----------

#[async_trait::async_trait]
pub trait SuffixLookup: Send + Sync {
    async fn fetch_suffix(&self) -> Result<String, SuffixError>;
}

// ---------- HTTP lookup ----------

#[derive(Debug, Deserialize)]
struct RandomCompany {
    suffix: Option<String>,
}

/// Fetches a company suffix from a random-company JSON endpoint.
pub struct HttpSuffixLookup {
    client: reqwest::Client,
    url: String,
}

impl HttpSuffixLookup {
    pub fn new(config: &SuffixConfig) -> Result<Self, SuffixError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl SuffixLookup for HttpSuffixLookup {
    async fn fetch_suffix(&self) -> Result<String, SuffixError> {
        let response = self.client.get(&self.url).send().await?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(SuffixError::Status(response.status().as_u16()));
        }

        let company: RandomCompany = response.json().await?;

        match company.suffix {
            Some(suffix) if !suffix.trim().is_empty() => Ok(suffix.trim().to_string()),
            _ => Err(SuffixError::MissingSuffix),
        }
    }
}

// ---------- fallback policy ----------

/// Ask the remote lookup first; any error falls back to the local faker.
pub async fn resolve_suffix(lookup: Option<&dyn SuffixLookup>, faker: &mut dyn FakeData) -> String {
    let Some(lookup) = lookup else {
        return faker.company_suffix();
    };
    match lookup.fetch_suffix().await {
        Ok(suffix) => suffix,
        Err(e) => {
            tracing::debug!(error = %e, "remote suffix unavailable, using local fallback");
            faker.company_suffix()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::LocalFaker;
    use axum::{Json, Router, http::StatusCode, routing::get};
    use std::time::Duration;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/company")
    }

    fn lookup(url: String, timeout: Duration) -> HttpSuffixLookup {
        HttpSuffixLookup::new(&SuffixConfig { url, timeout }).unwrap()
    }

    struct FixedSuffix(Result<&'static str, ()>);

    #[async_trait::async_trait]
    impl SuffixLookup for FixedSuffix {
        async fn fetch_suffix(&self) -> Result<String, SuffixError> {
            self.0
                .map(str::to_string)
                .map_err(|_| SuffixError::Status(500))
        }
    }

    // --- HttpSuffixLookup ---

    #[tokio::test]
    async fn test_http_lookup_reads_suffix_field() {
        let url = serve(Router::new().route(
            "/company",
            get(|| async { Json(serde_json::json!({"name": "Acme", "suffix": "Holdings"})) }),
        ))
        .await;

        let suffix = lookup(url, Duration::from_secs(5)).fetch_suffix().await.unwrap();
        assert_eq!(suffix, "Holdings");
    }

    #[tokio::test]
    async fn test_http_lookup_non_200_is_status_error() {
        let url = serve(Router::new().route(
            "/company",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        ))
        .await;

        let err = lookup(url, Duration::from_secs(5)).fetch_suffix().await.unwrap_err();
        assert!(matches!(err, SuffixError::Status(503)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_http_lookup_missing_suffix() {
        let url = serve(Router::new().route(
            "/company",
            get(|| async { Json(serde_json::json!({"name": "Acme"})) }),
        ))
        .await;

        let err = lookup(url, Duration::from_secs(5)).fetch_suffix().await.unwrap_err();
        assert!(matches!(err, SuffixError::MissingSuffix), "got {err:?}");
    }

    #[tokio::test]
    async fn test_http_lookup_invalid_json() {
        let url = serve(Router::new().route("/company", get(|| async { "not json" }))).await;

        let err = lookup(url, Duration::from_secs(5)).fetch_suffix().await.unwrap_err();
        assert!(matches!(err, SuffixError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_http_lookup_suffix_of_wrong_type_is_decode_error() {
        let url = serve(Router::new().route(
            "/company",
            get(|| async { Json(serde_json::json!({"suffix": 42})) }),
        ))
        .await;

        let err = lookup(url, Duration::from_secs(5)).fetch_suffix().await.unwrap_err();
        assert!(matches!(err, SuffixError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_http_lookup_times_out() {
        let url = serve(Router::new().route(
            "/company",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(serde_json::json!({"suffix": "Late"}))
            }),
        ))
        .await;

        let err = lookup(url, Duration::from_millis(100))
            .fetch_suffix()
            .await
            .unwrap_err();
        assert!(matches!(err, SuffixError::Timeout), "got {err:?}");
    }

    #[tokio::test]
    async fn test_http_lookup_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = lookup(format!("http://{addr}/company"), Duration::from_secs(1))
            .fetch_suffix()
            .await
            .unwrap_err();
        assert!(matches!(err, SuffixError::Http(_)), "got {err:?}");
    }

    // --- resolve_suffix ---

    #[tokio::test]
    async fn test_resolve_prefers_remote() {
        let remote = FixedSuffix(Ok("Remote Ltd"));
        let mut faker = LocalFaker::from_seed(1);
        assert_eq!(resolve_suffix(Some(&remote), &mut faker).await, "Remote Ltd");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_on_error() {
        let remote = FixedSuffix(Err(()));
        let mut expected = LocalFaker::from_seed(9);
        let mut faker = LocalFaker::from_seed(9);
        assert_eq!(
            resolve_suffix(Some(&remote), &mut faker).await,
            expected.company_suffix()
        );
    }

    #[tokio::test]
    async fn test_resolve_without_remote_uses_faker() {
        let mut expected = LocalFaker::from_seed(11);
        let mut faker = LocalFaker::from_seed(11);
        assert_eq!(resolve_suffix(None, &mut faker).await, expected.company_suffix());
    }
}
