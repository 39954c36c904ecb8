//! Maintains per-page form sessions and bridges them to the egui UI.

mod jobs;

use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::predict::{ModelKind, PredictClient};
use crate::session::FormSession;
use jobs::{ControllerJobs, JobMessage, PredictionJob, PredictionJobResult};

/// Owns both prediction pages and the worker channel their requests report on.
pub struct EguiController {
    pub ui: UiState,
    settings: AppSettings,
    client: PredictClient,
    id3: FormSession,
    naive_bayes: FormSession,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            ui: UiState::new(settings.default_page),
            client: PredictClient::new(&settings.http),
            id3: FormSession::new(ModelKind::Id3),
            naive_bayes: FormSession::new(ModelKind::NaiveBayes),
            jobs: ControllerJobs::new(),
            settings,
        }
    }

    /// Build a controller from the persisted configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = config::load_or_default()?;
        tracing::info!(
            id3 = %settings.endpoints.id3,
            naive_bayes = %settings.endpoints.naive_bayes,
            "Loaded prediction endpoints"
        );
        Ok(Self::new(settings))
    }

    pub fn session(&self, model: ModelKind) -> &FormSession {
        match model {
            ModelKind::Id3 => &self.id3,
            ModelKind::NaiveBayes => &self.naive_bayes,
        }
    }

    pub fn session_mut(&mut self, model: ModelKind) -> &mut FormSession {
        match model {
            ModelKind::Id3 => &mut self.id3,
            ModelKind::NaiveBayes => &mut self.naive_bayes,
        }
    }

    pub fn select_page(&mut self, model: ModelKind) {
        self.ui.active_page = model;
    }

    /// True while any page waits on the prediction server.
    pub fn is_busy(&self) -> bool {
        ModelKind::ALL
            .into_iter()
            .any(|model| self.session(model).is_loading())
    }

    /// Fill the page's fields from its bulk input line.
    pub fn apply_bulk_input(&mut self, model: ModelKind) {
        match self.session_mut(model).apply_bulk_input() {
            Ok(()) => self.set_status("Bulk input applied", StatusTone::Info),
            Err(err) => self.set_status(err.to_string(), StatusTone::Warning),
        }
    }

    /// Send the page's current features to its model endpoint.
    ///
    /// Ignored while the page already has a request in flight.
    pub fn submit_prediction(&mut self, model: ModelKind) {
        let Some(features) = self.session_mut(model).begin_submit() else {
            tracing::debug!(%model, "Prediction already in flight; ignoring submit");
            return;
        };
        let endpoint = self.settings.endpoints.url_for(model).to_string();
        tracing::info!(%model, %endpoint, "Submitting prediction");
        self.jobs.begin_prediction(
            self.client.clone(),
            PredictionJob {
                model,
                endpoint,
                features,
            },
        );
        self.set_status(format!("Predicting with {model}..."), StatusTone::Busy);
    }

    /// Clear the page's fields, result and error without touching the network.
    pub fn reset_form(&mut self, model: ModelKind) {
        self.session_mut(model).reset();
        self.set_status(format!("{model} form cleared"), StatusTone::Idle);
    }

    pub fn dismiss_result(&mut self, model: ModelKind) {
        self.session_mut(model).dismiss_result();
    }

    /// Apply finished background requests to their sessions.
    pub fn poll_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::PredictionFinished(message) => self.handle_prediction_finished(message),
            }
        }
    }

    fn handle_prediction_finished(&mut self, message: PredictionJobResult) {
        let PredictionJobResult { model, result } = message;
        match &result {
            Ok(prediction) => {
                tracing::info!(
                    %model,
                    class = prediction.class_label(),
                    accuracy = prediction.accuracy(),
                    "Prediction succeeded"
                );
                self.set_status(
                    format!("{model} predicted class {}", prediction.class_label()),
                    StatusTone::Info,
                );
            }
            Err(err) => {
                tracing::warn!(%model, "Prediction failed: {err}");
                self.set_status(format!("{model} prediction failed: {err}"), StatusTone::Error);
            }
        }
        self.session_mut(model).complete_submit(result);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }
}
