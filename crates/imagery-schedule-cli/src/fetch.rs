//! HTTP access to the directory page and the per-country pages.

use crate::config::Config;
use imagery_schedule::is_valid_identifier;
use reqwest::header::ACCEPT_LANGUAGE;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid country identifier {0:?}")]
    InvalidCountry(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: Url, status: u16 },
}

/// Fetches schedule pages as text.
pub struct Fetcher {
    client: reqwest::Client,
    base: Url,
    language: String,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut base = Url::parse(&config.base_url).map_err(|source| FetchError::Url {
            url: config.base_url.clone(),
            source,
        })?;
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base,
            language: config.language.clone(),
        })
    }

    /// Page listing every country, `<base>/locations/`.
    pub fn directory_url(&self) -> Result<Url, FetchError> {
        self.join("locations/")
    }

    /// Schedule page of one country, `<base>/<country>/`. Identifiers that
    /// would resolve outside the base are rejected.
    pub fn country_url(&self, country: &str) -> Result<Url, FetchError> {
        if !is_valid_identifier(country) {
            return Err(FetchError::InvalidCountry(country.to_string()));
        }
        self.join(&format!("{country}/"))
    }

    pub async fn directory(&self) -> Result<String, FetchError> {
        self.get(self.directory_url()?).await
    }

    pub async fn country(&self, country: &str) -> Result<String, FetchError> {
        self.get(self.country_url(country)?).await
    }

    /// GET a page and return its body. Any non-2xx status is an error.
    pub async fn get(&self, url: Url) -> Result<String, FetchError> {
        tracing::debug!(%url, "GET");
        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT_LANGUAGE, self.language.as_str())
            .send()
            .await;
        let resp = match resp {
            Ok(r) => r,
            Err(source) => return Err(FetchError::Request { url, source }),
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        resp.text()
            .await
            .map_err(|source| FetchError::Request { url, source })
    }

    fn join(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|source| FetchError::Url {
            url: format!("{}{path}", self.base),
            source,
        })
    }
}
