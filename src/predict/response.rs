use serde::Deserialize;
use serde_json::Value;

use crate::chart::{self, ChartSlice};

use super::{ModelKind, PredictError};

/// Value of `kode` that marks a successful prediction.
pub const SUCCESS_CODE: i64 = 200;

const UNKNOWN_BACKEND_ERROR: &str = "Unknown backend error";

/// Prediction and evaluation report returned by the ID3 service.
#[derive(Clone, Debug, PartialEq)]
pub struct Id3Prediction {
    pub prediction: f64,
    pub class_label: String,
    pub accuracy: f64,
    pub precision: String,
    pub recall: String,
    pub f1_score: String,
    pub status: String,
    pub code: i64,
}

/// Prediction returned by the Naive Bayes service.
#[derive(Clone, Debug, PartialEq)]
pub struct NaiveBayesPrediction {
    pub prediction: f64,
    pub class_label: String,
    pub accuracy: f64,
}

/// Successful response of either model.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionResult {
    Id3(Id3Prediction),
    NaiveBayes(NaiveBayesPrediction),
}

impl PredictionResult {
    pub fn model(&self) -> ModelKind {
        match self {
            Self::Id3(_) => ModelKind::Id3,
            Self::NaiveBayes(_) => ModelKind::NaiveBayes,
        }
    }

    pub fn prediction(&self) -> f64 {
        match self {
            Self::Id3(result) => result.prediction,
            Self::NaiveBayes(result) => result.prediction,
        }
    }

    pub fn class_label(&self) -> &str {
        match self {
            Self::Id3(result) => &result.class_label,
            Self::NaiveBayes(result) => &result.class_label,
        }
    }

    pub fn accuracy(&self) -> f64 {
        match self {
            Self::Id3(result) => result.accuracy,
            Self::NaiveBayes(result) => result.accuracy,
        }
    }

    pub fn chart(&self) -> [ChartSlice; 2] {
        chart::accuracy_slices(self.accuracy())
    }

    /// Labelled scalar fields in display order.
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Prediction", self.prediction().to_string()),
            ("Class", self.class_label().to_string()),
            ("Accuracy", self.accuracy().to_string()),
        ];
        if let Self::Id3(result) = self {
            rows.push(("Precision", result.precision.clone()));
            rows.push(("Recall", result.recall.clone()));
            rows.push(("F1 Score", result.f1_score.clone()));
            rows.push(("Status", result.status.clone()));
        }
        rows
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponseWire {
    kode: Option<Value>,
    prediksi: Option<Value>,
    kelas: Option<Value>,
    akurasi_model: Option<Value>,
    precision: Option<Value>,
    recall: Option<Value>,
    f1_score: Option<Value>,
    status: Option<Value>,
    error: Option<Value>,
}

/// Parse a 2xx response body into the typed result for `model`.
///
/// A `kode` other than the number [`SUCCESS_CODE`] becomes
/// [`PredictError::Backend`] carrying the server's `error` text. The other
/// fields are only type-checked once `kode` reports success.
pub fn parse_prediction_response(
    model: ModelKind,
    body: &str,
) -> Result<PredictionResult, PredictError> {
    let wire: PredictResponseWire = serde_json::from_str(body.trim())
        .map_err(|err| PredictError::InvalidResponse(err.to_string()))?;

    if wire.kode.as_ref().and_then(Value::as_f64) != Some(SUCCESS_CODE as f64) {
        let message = wire
            .error
            .as_ref()
            .map(value_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string());
        return Err(PredictError::Backend(message));
    }

    let prediction = number_field(&wire.prediksi, "prediksi")?;
    let class_label = wire
        .kelas
        .as_ref()
        .map(value_text)
        .ok_or_else(|| missing_field("kelas"))?;
    let accuracy = number_field(&wire.akurasi_model, "akurasi_model")?;

    Ok(match model {
        ModelKind::Id3 => PredictionResult::Id3(Id3Prediction {
            prediction,
            class_label,
            accuracy,
            precision: optional_text(&wire.precision),
            recall: optional_text(&wire.recall),
            f1_score: optional_text(&wire.f1_score),
            status: optional_text(&wire.status),
            code: SUCCESS_CODE,
        }),
        ModelKind::NaiveBayes => PredictionResult::NaiveBayes(NaiveBayesPrediction {
            prediction,
            class_label,
            accuracy,
        }),
    })
}

fn missing_field(name: &str) -> PredictError {
    PredictError::InvalidResponse(format!("missing field `{name}`"))
}

fn number_field(value: &Option<Value>, name: &str) -> Result<f64, PredictError> {
    match value {
        None | Some(Value::Null) => Err(missing_field(name)),
        Some(value) => value.as_f64().ok_or_else(|| {
            PredictError::InvalidResponse(format!("field `{name}` is not a number: {value}"))
        }),
    }
}

fn optional_text(value: &Option<Value>) -> String {
    value.as_ref().map(value_text).unwrap_or_default()
}

/// Render a JSON scalar the way it reads in the response; strings lose their quotes.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID3_OK: &str = r#"{
        "kode": 200,
        "prediksi": 1,
        "kelas": "good",
        "akurasi_model": 0.87,
        "precision": "0.85",
        "recall": "0.80",
        "f1_score": "0.82",
        "status": "success"
    }"#;

    #[test]
    fn parses_id3_success() {
        let result = parse_prediction_response(ModelKind::Id3, ID3_OK).unwrap();
        let PredictionResult::Id3(prediction) = &result else {
            panic!("expected ID3 result, got {result:?}");
        };
        assert_eq!(prediction.prediction, 1.0);
        assert_eq!(prediction.class_label, "good");
        assert_eq!(prediction.accuracy, 0.87);
        assert_eq!(prediction.precision, "0.85");
        assert_eq!(prediction.recall, "0.80");
        assert_eq!(prediction.f1_score, "0.82");
        assert_eq!(prediction.status, "success");
        assert_eq!(prediction.code, 200);

        let [accuracy, rest] = result.chart();
        assert_eq!((accuracy.name, accuracy.value), ("Akurasi", 0.87));
        assert_eq!(rest.name, "Sisa");
        assert!((rest.value - 0.13).abs() < 1e-12);
    }

    #[test]
    fn naive_bayes_ignores_extra_metrics() {
        let result = parse_prediction_response(ModelKind::NaiveBayes, ID3_OK).unwrap();
        assert_eq!(
            result,
            PredictionResult::NaiveBayes(NaiveBayesPrediction {
                prediction: 1.0,
                class_label: "good".into(),
                accuracy: 0.87,
            })
        );
        assert_eq!(result.detail_rows().len(), 3);
    }

    #[test]
    fn numeric_metrics_render_as_text() {
        let body = r#"{"kode":200,"prediksi":0,"kelas":"bad","akurasi_model":0.5,
            "precision":0.75,"recall":1,"f1_score":null}"#;
        let PredictionResult::Id3(prediction) =
            parse_prediction_response(ModelKind::Id3, body).unwrap()
        else {
            panic!("expected ID3 result");
        };
        assert_eq!(prediction.precision, "0.75");
        assert_eq!(prediction.recall, "1");
        assert_eq!(prediction.f1_score, "");
        assert_eq!(prediction.status, "");
    }

    #[test]
    fn non_success_code_surfaces_server_error() {
        let err =
            parse_prediction_response(ModelKind::Id3, r#"{"kode":400,"error":"bad input"}"#)
                .unwrap_err();
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn error_text_survives_mistyped_fields() {
        let body = r#"{"kode":400,"error":"bad input","prediksi":"-","akurasi_model":null}"#;
        let err = parse_prediction_response(ModelKind::Id3, body).unwrap_err();
        assert_eq!(err.to_string(), "bad input");

        let err = parse_prediction_response(
            ModelKind::NaiveBayes,
            r#"{"kode":"500","error":"model offline"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PredictError::Backend(ref msg) if msg == "model offline"));
    }

    #[test]
    fn string_success_code_is_not_success() {
        let err = parse_prediction_response(
            ModelKind::Id3,
            r#"{"kode":"200","prediksi":1,"kelas":"good","akurasi_model":0.9}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown backend error");
    }

    #[test]
    fn success_with_non_numeric_accuracy_is_invalid() {
        let err = parse_prediction_response(
            ModelKind::NaiveBayes,
            r#"{"kode":200,"prediksi":1,"kelas":"good","akurasi_model":"high"}"#,
        )
        .unwrap_err();
        assert!(
            matches!(err, PredictError::InvalidResponse(ref msg) if msg.contains("akurasi_model"))
        );
    }

    #[test]
    fn missing_or_empty_error_falls_back() {
        for body in [r#"{"kode":500}"#, r#"{"kode":500,"error":""}"#, r#"{}"#] {
            let err = parse_prediction_response(ModelKind::NaiveBayes, body).unwrap_err();
            assert_eq!(err.to_string(), "Unknown backend error", "body: {body}");
        }
    }

    #[test]
    fn success_without_prediction_is_invalid() {
        let err = parse_prediction_response(
            ModelKind::Id3,
            r#"{"kode":200,"kelas":"good","akurasi_model":0.9}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PredictError::InvalidResponse(ref msg) if msg.contains("prediksi")));
    }

    #[test]
    fn rejects_non_json_body() {
        let err = parse_prediction_response(ModelKind::Id3, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, PredictError::InvalidResponse(_)));
    }

    #[test]
    fn detail_rows_use_plain_number_formatting() {
        let result = parse_prediction_response(ModelKind::Id3, ID3_OK).unwrap();
        let rows = result.detail_rows();
        assert_eq!(rows[0], ("Prediction", "1".to_string()));
        assert_eq!(rows[2], ("Accuracy", "0.87".to_string()));
        assert_eq!(rows.last().unwrap().0, "Status");
    }
}
