//! Client for the remote wine quality prediction services.
//!
//! Both services share one request shape and differ only in how much of the
//! evaluation report they return, so a single [`ModelKind`] parameterizes the
//! endpoint, the response schema and the result view.

pub mod api;
mod request;
mod response;

use serde::{Deserialize, Serialize};

pub use api::{PredictClient, PredictError};
pub use request::PredictRequest;
pub use response::{
    Id3Prediction, NaiveBayesPrediction, PredictionResult, SUCCESS_CODE, parse_prediction_response,
};

/// Remote classifier a form page talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// ID3 decision tree; reports precision, recall and F1 alongside accuracy.
    #[default]
    Id3,
    /// Gaussian Naive Bayes; reports accuracy only.
    NaiveBayes,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [Self::Id3, Self::NaiveBayes];

    /// Short name used in tabs and log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Id3 => "ID3",
            Self::NaiveBayes => "Naive Bayes",
        }
    }

    pub fn page_title(self) -> String {
        format!("{} – Wine Quality Prediction", self.name())
    }

    pub fn page_description(self) -> &'static str {
        match self {
            Self::Id3 => "Enter the 11 wine features, or paste them all at once with bulk input.",
            Self::NaiveBayes => {
                "Fill out the values below to predict wine quality using the Naive Bayes model."
            }
        }
    }

    /// Whether the page offers the comma-separated bulk input row.
    pub fn supports_bulk_input(self) -> bool {
        matches!(self, Self::Id3)
    }

    pub fn reset_label(self) -> &'static str {
        match self {
            Self::Id3 => "Reset",
            Self::NaiveBayes => "Draft",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_id3_has_bulk_input() {
        assert!(ModelKind::Id3.supports_bulk_input());
        assert!(!ModelKind::NaiveBayes.supports_bulk_input());
    }

    #[test]
    fn titles_name_the_model() {
        assert_eq!(ModelKind::Id3.page_title(), "ID3 – Wine Quality Prediction");
        assert_eq!(
            ModelKind::NaiveBayes.page_title(),
            "Naive Bayes – Wine Quality Prediction"
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            page: ModelKind,
        }
        let text = toml::to_string(&Wrapper {
            page: ModelKind::NaiveBayes,
        })
        .unwrap();
        assert_eq!(text.trim(), "page = \"naive_bayes\"");
        let parsed: Wrapper = toml::from_str("page = \"id3\"").unwrap();
        assert_eq!(parsed.page, ModelKind::Id3);
    }
}
