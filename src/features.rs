//! The eleven wine-chemistry measurements collected by the form.
//!
//! Values are kept as raw text so partially typed or empty fields survive
//! untouched; the remote service performs numeric coercion.

use serde::Serialize;

/// One input field of the form, in the fixed order the remote models expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureField {
    FixedAcidity,
    VolatileAcidity,
    CitricAcid,
    ResidualSugar,
    Chlorides,
    FreeSulfurDioxide,
    TotalSulfurDioxide,
    Density,
    Ph,
    Sulphates,
    Alcohol,
}

impl FeatureField {
    /// Number of measurements in a [`WineFeatures`] record.
    pub const COUNT: usize = 11;

    /// All fields in positional order.
    pub const ALL: [FeatureField; Self::COUNT] = [
        Self::FixedAcidity,
        Self::VolatileAcidity,
        Self::CitricAcid,
        Self::ResidualSugar,
        Self::Chlorides,
        Self::FreeSulfurDioxide,
        Self::TotalSulfurDioxide,
        Self::Density,
        Self::Ph,
        Self::Sulphates,
        Self::Alcohol,
    ];

    /// JSON key used by the form record.
    pub fn key(self) -> &'static str {
        match self {
            Self::FixedAcidity => "fixed_acidity",
            Self::VolatileAcidity => "volatile_acidity",
            Self::CitricAcid => "citric_acid",
            Self::ResidualSugar => "residual_sugar",
            Self::Chlorides => "chlorides",
            Self::FreeSulfurDioxide => "free_sulfur_dioxide",
            Self::TotalSulfurDioxide => "total_sulfur_dioxide",
            Self::Density => "density",
            Self::Ph => "pH",
            Self::Sulphates => "sulphates",
            Self::Alcohol => "alcohol",
        }
    }

    /// Human-readable label: the key with underscores as spaces, words capitalized.
    pub fn label(self) -> String {
        self.key()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Raw text of every measurement, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WineFeatures {
    pub fixed_acidity: String,
    pub volatile_acidity: String,
    pub citric_acid: String,
    pub residual_sugar: String,
    pub chlorides: String,
    pub free_sulfur_dioxide: String,
    pub total_sulfur_dioxide: String,
    pub density: String,
    #[serde(rename = "pH")]
    pub ph: String,
    pub sulphates: String,
    pub alcohol: String,
}

impl WineFeatures {
    /// Build a record from values in [`FeatureField::ALL`] order.
    pub fn from_values(values: [String; FeatureField::COUNT]) -> Self {
        let [
            fixed_acidity,
            volatile_acidity,
            citric_acid,
            residual_sugar,
            chlorides,
            free_sulfur_dioxide,
            total_sulfur_dioxide,
            density,
            ph,
            sulphates,
            alcohol,
        ] = values;
        Self {
            fixed_acidity,
            volatile_acidity,
            citric_acid,
            residual_sugar,
            chlorides,
            free_sulfur_dioxide,
            total_sulfur_dioxide,
            density,
            ph,
            sulphates,
            alcohol,
        }
    }

    pub fn get(&self, field: FeatureField) -> &str {
        match field {
            FeatureField::FixedAcidity => &self.fixed_acidity,
            FeatureField::VolatileAcidity => &self.volatile_acidity,
            FeatureField::CitricAcid => &self.citric_acid,
            FeatureField::ResidualSugar => &self.residual_sugar,
            FeatureField::Chlorides => &self.chlorides,
            FeatureField::FreeSulfurDioxide => &self.free_sulfur_dioxide,
            FeatureField::TotalSulfurDioxide => &self.total_sulfur_dioxide,
            FeatureField::Density => &self.density,
            FeatureField::Ph => &self.ph,
            FeatureField::Sulphates => &self.sulphates,
            FeatureField::Alcohol => &self.alcohol,
        }
    }

    /// Mutable access for text widgets bound directly to a field.
    pub fn get_mut(&mut self, field: FeatureField) -> &mut String {
        match field {
            FeatureField::FixedAcidity => &mut self.fixed_acidity,
            FeatureField::VolatileAcidity => &mut self.volatile_acidity,
            FeatureField::CitricAcid => &mut self.citric_acid,
            FeatureField::ResidualSugar => &mut self.residual_sugar,
            FeatureField::Chlorides => &mut self.chlorides,
            FeatureField::FreeSulfurDioxide => &mut self.free_sulfur_dioxide,
            FeatureField::TotalSulfurDioxide => &mut self.total_sulfur_dioxide,
            FeatureField::Density => &mut self.density,
            FeatureField::Ph => &mut self.ph,
            FeatureField::Sulphates => &mut self.sulphates,
            FeatureField::Alcohol => &mut self.alcohol,
        }
    }

    /// Return a copy with one field replaced.
    pub fn with_field(&self, field: FeatureField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.get_mut(field) = value.into();
        next
    }

    /// Iterate `(field, value)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureField, &str)> + '_ {
        FeatureField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// True when every field is blank.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_replace_underscores_and_capitalize() {
        assert_eq!(FeatureField::FixedAcidity.label(), "Fixed Acidity");
        assert_eq!(FeatureField::TotalSulfurDioxide.label(), "Total Sulfur Dioxide");
        assert_eq!(FeatureField::Ph.label(), "PH");
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let base = WineFeatures::default();
        let next = base.with_field(FeatureField::Alcohol, "9.4");
        assert!(base.is_empty());
        assert_eq!(next.alcohol, "9.4");
        assert_eq!(next.get(FeatureField::Alcohol), "9.4");
        assert!(!next.is_empty());
    }

    #[test]
    fn iter_follows_positional_order() {
        let values = std::array::from_fn(|idx| idx.to_string());
        let features = WineFeatures::from_values(values);
        let collected: Vec<_> = features.iter().map(|(_, value)| value.to_string()).collect();
        let expected: Vec<_> = (0..FeatureField::COUNT).map(|idx| idx.to_string()).collect();
        assert_eq!(collected, expected);
        assert_eq!(features.ph, "8");
    }

    #[test]
    fn serializes_ph_with_ui_casing() {
        let value = serde_json::to_value(WineFeatures::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), FeatureField::COUNT);
        assert!(object.contains_key("pH"));
        assert!(!object.contains_key("ph"));
        for field in FeatureField::ALL {
            assert!(object.contains_key(field.key()), "missing {}", field.key());
        }
    }
}
