//! Runtime configuration and the one-shot gate that loads it.
//!
//! [`ConfigLoader`] performs a single HTTP GET of a JSON resource, parses
//! it, and only then hands out the stored [`RuntimeConfig`] through a
//! synchronous accessor. The state machine is `Pending -> Loaded | Failed`;
//! both outcomes are terminal and nothing retries.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

const CONNECT_TIMEOUT_SECS: u64 = 5;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Flat key-value configuration fetched at startup.
///
/// Only `helloWorld` is required; unknown flat keys land in `extra` so a
/// superset payload never fails the gate. Read-only after load.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub hello_world: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config endpoint {url:?}")]
    Endpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to fetch runtime config from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("config endpoint {url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("runtime config payload is not a valid config object")]
    Parse(#[from] serde_json::Error),
    #[error("runtime config accessed before a successful load")]
    Gate,
}

#[derive(Debug, Default)]
enum LoadState {
    #[default]
    Pending,
    Loaded(RuntimeConfig),
    Failed,
}

/// One-shot loader for the runtime configuration.
#[derive(Debug)]
pub struct ConfigLoader {
    url: String,
    client: reqwest::Client,
    state: LoadState,
}

impl ConfigLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_request_timeout(url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Same loader with a caller-chosen total request timeout. Timeout
    /// expiry surfaces as [`ConfigError::Fetch`].
    pub fn with_request_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::error!("failed to build timed HTTP client: {err}; using defaults");
                reqwest::Client::new()
            });

        Self {
            url: url.into(),
            client,
            state: LoadState::default(),
        }
    }

    /// Run the gate: fetch, parse, store.
    ///
    /// Idempotent once loaded — the stored config is never overwritten.
    /// After a failure the gate stays shut and returns [`ConfigError::Gate`].
    pub async fn load(&mut self) -> Result<(), ConfigError> {
        match self.state {
            LoadState::Loaded(_) => return Ok(()),
            LoadState::Failed => return Err(ConfigError::Gate),
            LoadState::Pending => {}
        }

        match self.fetch_and_parse().await {
            Ok(config) => {
                tracing::info!(url = %self.url, keys = config.extra.len() + 1, "runtime config loaded");
                self.state = LoadState::Loaded(config);
                Ok(())
            }
            Err(err) => {
                self.state = LoadState::Failed;
                Err(err)
            }
        }
    }

    async fn fetch_and_parse(&self) -> Result<RuntimeConfig, ConfigError> {
        let url = Url::parse(&self.url).map_err(|source| ConfigError::Endpoint {
            url: self.url.clone(),
            source,
        })?;

        tracing::info!(%url, "fetching runtime config");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ConfigError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| ConfigError::Fetch {
            url: self.url.clone(),
            source,
        })?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Synchronous accessor. Only valid after [`ConfigLoader::load`] has
    /// succeeded; any earlier call is a sequencing bug and gets
    /// [`ConfigError::Gate`], never a partial or empty config.
    pub fn get(&self) -> Result<&RuntimeConfig, ConfigError> {
        match &self.state {
            LoadState::Loaded(config) => Ok(config),
            LoadState::Pending | LoadState::Failed => Err(ConfigError::Gate),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
