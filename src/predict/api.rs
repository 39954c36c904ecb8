//! Blocking HTTP dispatch of a single prediction request.

use crate::config::HttpSettings;
use crate::features::WineFeatures;
use crate::http_client;

use super::{ModelKind, PredictRequest, PredictionResult, parse_prediction_response};

/// Failure of one prediction request.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The server could not be reached or answered with a non-2xx status.
    #[error("Failed to contact the prediction server.")]
    Connection { detail: String },
    /// A 2xx response whose body could not be interpreted.
    #[error("Invalid response from the prediction server: {0}")]
    InvalidResponse(String),
    /// The service answered but reported a failure in its `kode` field.
    #[error("{0}")]
    Backend(String),
}

/// Sends prediction requests with a shared agent and response size cap.
#[derive(Clone)]
pub struct PredictClient {
    agent: ureq::Agent,
    max_response_bytes: usize,
}

impl PredictClient {
    pub fn new(settings: &HttpSettings) -> Self {
        Self {
            agent: http_client::build_agent(settings),
            max_response_bytes: settings.max_response_bytes,
        }
    }

    /// POST `features` to `endpoint` and interpret the reply as `model`'s schema.
    pub fn predict(
        &self,
        model: ModelKind,
        endpoint: &str,
        features: &WineFeatures,
    ) -> Result<PredictionResult, PredictError> {
        let request = PredictRequest::from(features);
        tracing::debug!(%model, endpoint, ?request, "Sending prediction request");

        let response = match self
            .agent
            .post(endpoint)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .send_json(&request)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, self.max_response_bytes)
                    .unwrap_or_else(|err| err.to_string());
                tracing::warn!(%model, code, body = %body.trim(), "Prediction server returned an error status");
                return Err(PredictError::Connection {
                    detail: format!("HTTP {code}"),
                });
            }
            Err(ureq::Error::Transport(err)) => {
                tracing::warn!(%model, endpoint, "Prediction request failed: {err}");
                return Err(PredictError::Connection {
                    detail: err.to_string(),
                });
            }
        };

        let body = http_client::read_response_text(response, self.max_response_bytes)
            .map_err(|err| PredictError::InvalidResponse(err.to_string()))?;
        parse_prediction_response(model, &body)
    }
}
