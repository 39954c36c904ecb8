use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::predict::ModelKind;

use super::ConfigError;

pub(crate) const DEFAULT_ID3_ENDPOINT: &str =
    "https://backend-machine-learning.vercel.app/api/predict-id3";
pub(crate) const DEFAULT_NAIVE_BAYES_ENDPOINT: &str = "http://127.0.0.1:5000/api/predict-nb";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;
const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RESPONSE_BYTES: usize = 256 * 1024;
const MIN_MAX_RESPONSE_BYTES: usize = 1024;

/// Settings persisted in `config.toml`.
///
/// Config keys (TOML): `default_page`, `endpoints.id3`, `endpoints.naive_bayes`,
/// `http.connect_timeout_secs`, `http.read_timeout_secs`, `http.write_timeout_secs`,
/// `http.max_response_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Page shown when the window opens.
    #[serde(default)]
    pub default_page: ModelKind,
    #[serde(default)]
    pub endpoints: EndpointSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

impl AppSettings {
    /// Clamp numeric values into usable ranges.
    pub fn normalized(self) -> Self {
        Self {
            http: self.http.normalized(),
            ..self
        }
    }

    /// Reject endpoints that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for model in ModelKind::ALL {
            validate_endpoint(model, self.endpoints.url_for(model))?;
        }
        Ok(())
    }
}

fn validate_endpoint(model: ModelKind, raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        model,
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}

/// Remote prediction service URLs, one per model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    #[serde(default = "default_id3_endpoint")]
    pub id3: String,
    #[serde(default = "default_naive_bayes_endpoint")]
    pub naive_bayes: String,
}

impl EndpointSettings {
    pub fn url_for(&self, model: ModelKind) -> &str {
        match model {
            ModelKind::Id3 => &self.id3,
            ModelKind::NaiveBayes => &self.naive_bayes,
        }
    }
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            id3: default_id3_endpoint(),
            naive_bayes: default_naive_bayes_endpoint(),
        }
    }
}

fn default_id3_endpoint() -> String {
    DEFAULT_ID3_ENDPOINT.to_string()
}

fn default_naive_bayes_endpoint() -> String {
    DEFAULT_NAIVE_BAYES_ENDPOINT.to_string()
}

/// Transport limits for prediction requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
    /// Time allowed to send the request body.
    #[serde(default = "default_write_timeout_secs")]
    pub write_timeout_secs: u64,
    /// Upper bound on a response body; larger bodies are rejected unread.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl HttpSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    fn normalized(self) -> Self {
        Self {
            connect_timeout_secs: self.connect_timeout_secs.max(1),
            read_timeout_secs: self.read_timeout_secs.max(1),
            write_timeout_secs: self.write_timeout_secs.max(1),
            max_response_bytes: self.max_response_bytes.max(MIN_MAX_RESPONSE_BYTES),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            write_timeout_secs: default_write_timeout_secs(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_read_timeout_secs() -> u64 {
    DEFAULT_READ_TIMEOUT_SECS
}

fn default_write_timeout_secs() -> u64 {
    DEFAULT_WRITE_TIMEOUT_SECS
}

fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}
