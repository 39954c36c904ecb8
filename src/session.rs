//! Per-page form session: field values, bulk input text and the state of the
//! one prediction request the page may have in flight.
//!
//! A result and an error are never held at the same time. Starting a submission
//! clears both; completing it stores exactly one of them.

use crate::bulk_input::{self, BulkInputError};
use crate::chart::ChartSlice;
use crate::features::{FeatureField, WineFeatures};
use crate::predict::{ModelKind, PredictError, PredictionResult};

#[derive(Clone, Debug)]
pub struct FormSession {
    model: ModelKind,
    /// Current field values, bound directly to the form inputs.
    pub features: WineFeatures,
    /// Comma-separated bulk input; `None` for pages without bulk input.
    pub bulk_input: Option<String>,
    loading: bool,
    error: Option<String>,
    result: Option<PredictionResult>,
}

impl FormSession {
    pub fn new(model: ModelKind) -> Self {
        Self {
            model,
            features: WineFeatures::default(),
            bulk_input: model.supports_bulk_input().then(String::new),
            loading: false,
            error: None,
            result: None,
        }
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Pie chart dataset for the current result.
    pub fn chart(&self) -> Option<[ChartSlice; 2]> {
        self.result.as_ref().map(PredictionResult::chart)
    }

    pub fn set_field(&mut self, field: FeatureField, value: impl Into<String>) {
        self.features = self.features.with_field(field, value);
    }

    /// Replace every field from the bulk input text.
    ///
    /// On a wrong token count the fields are left untouched and the error is
    /// recorded for display. Pages without bulk input ignore the call.
    pub fn apply_bulk_input(&mut self) -> Result<(), BulkInputError> {
        let Some(text) = self.bulk_input.as_deref() else {
            return Ok(());
        };
        match bulk_input::parse_bulk_input(text) {
            Ok(features) => {
                self.features = features;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Mark a submission as started and hand back the features to send.
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<WineFeatures> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.result = None;
        Some(self.features.clone())
    }

    /// Store the outcome of the in-flight submission and clear the loading flag.
    pub fn complete_submit(&mut self, outcome: Result<PredictionResult, PredictError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.error = None;
                self.result = Some(result);
            }
            Err(err) => {
                if let PredictError::Connection { detail } = &err {
                    tracing::debug!(model = %self.model, "Connection failure detail: {detail}");
                }
                self.set_error(err.to_string());
            }
        }
    }

    /// Empty every field and the bulk input, and drop any result or error.
    ///
    /// An in-flight request keeps running and still lands when it completes.
    pub fn reset(&mut self) {
        self.features = WineFeatures::default();
        if let Some(text) = self.bulk_input.as_mut() {
            text.clear();
        }
        self.error = None;
        self.result = None;
    }

    /// Close the result view without touching the form.
    pub fn dismiss_result(&mut self) {
        self.result = None;
    }

    fn set_error(&mut self, message: String) {
        self.result = None;
        self.error = Some(message);
    }
}
