use serde::Serialize;

use crate::features::WineFeatures;

/// JSON body sent to a prediction endpoint.
///
/// Carries every feature under its form key plus `ph`, a lowercase copy of
/// `pH` that the services read.
#[derive(Clone, Debug, Serialize)]
pub struct PredictRequest<'a> {
    #[serde(flatten)]
    pub features: &'a WineFeatures,
    pub ph: &'a str,
}

impl<'a> From<&'a WineFeatures> for PredictRequest<'a> {
    fn from(features: &'a WineFeatures) -> Self {
        Self {
            features,
            ph: &features.ph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk_input::parse_bulk_input;

    #[test]
    fn body_duplicates_ph_under_both_casings() {
        let features =
            parse_bulk_input("7.4, 0.7, 0.0, 1.9, 0.076, 11, 34, 0.9978, 3.51, 0.56, 9.4").unwrap();
        let body = serde_json::to_value(PredictRequest::from(&features)).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 12);
        assert_eq!(object["pH"], "3.51");
        assert_eq!(object["ph"], "3.51");
        assert_eq!(object["fixed_acidity"], "7.4");
        assert_eq!(object["alcohol"], "9.4");
    }

    #[test]
    fn values_stay_strings_even_when_blank() {
        let features = WineFeatures::default();
        let body = serde_json::to_value(PredictRequest::from(&features)).unwrap();
        assert_eq!(body["density"], "");
        assert_eq!(body["ph"], "");
    }
}
