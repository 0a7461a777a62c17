/// Типы данных для конфигурации препроцессинга

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewCategory {
    HighlySkewed,
    ModeratelySkewed,
    ApproximatelyNormal,
}

impl SkewCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkewCategory::HighlySkewed => "highly_skewed",
            SkewCategory::ModeratelySkewed => "moderately_skewed",
            SkewCategory::ApproximatelyNormal => "approximately_normal",
        }
    }
}

impl fmt::Display for SkewCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub skewness: f64, // посчитано заранее на EDA
}

impl Feature {
    pub fn new(name: impl Into<String>, skewness: f64) -> Self {
        Self {
            name: name.into(),
            skewness,
        }
    }
}

/// Группы признаков по асимметрии распределения (результат EDA)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureGroups {
    #[serde(default)]
    pub highly_skewed: Vec<Feature>,
    #[serde(default)]
    pub moderately_skewed: Vec<Feature>,
    #[serde(default)]
    pub approximately_normal: Vec<Feature>,
}

impl FeatureGroups {
    /// Признаки датасета треков
    pub fn track_attributes() -> Self {
        Self {
            highly_skewed: vec![
                Feature::new("InstrumentalScore", 1.04),
                Feature::new("VocalContent", 0.79),
                Feature::new("AcousticQuality", 0.79),
            ],
            moderately_skewed: vec![Feature::new("LivePerformanceLikelihood", 0.39)],
            approximately_normal: vec![
                Feature::new("RhythmScore", 0.17),
                Feature::new("AudioLoudness", -0.31),
                Feature::new("MoodScore", -0.27),
                Feature::new("TrackDurationMs", -0.19),
                Feature::new("Energy", -0.03),
            ],
        }
    }

    pub fn group(&self, category: SkewCategory) -> &[Feature] {
        match category {
            SkewCategory::HighlySkewed => &self.highly_skewed,
            SkewCategory::ModeratelySkewed => &self.moderately_skewed,
            SkewCategory::ApproximatelyNormal => &self.approximately_normal,
        }
    }

    pub fn names(&self, category: SkewCategory) -> Vec<String> {
        self.group(category).iter().map(|f| f.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkewCategory, &Feature)> + '_ {
        [
            SkewCategory::HighlySkewed,
            SkewCategory::ModeratelySkewed,
            SkewCategory::ApproximatelyNormal,
        ]
        .into_iter()
        .flat_map(move |category| self.group(category).iter().map(move |f| (category, f)))
    }

    pub fn feature_names(&self) -> Vec<String> {
        self.iter().map(|(_, f)| f.name.clone()).collect()
    }

    pub fn category_of(&self, name: &str) -> Option<SkewCategory> {
        self.iter()
            .find(|(_, f)| f.name == name)
            .map(|(category, _)| category)
    }

    /// Каждый признак должен входить ровно в одну группу
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<(&str, SkewCategory)> = Vec::new();
        for (category, feature) in self.iter() {
            if let Some(&(_, first)) = seen.iter().find(|(name, _)| *name == feature.name) {
                return Err(PreprocessError::DuplicateFeature {
                    name: feature.name.clone(),
                    first,
                    second: category,
                });
            }
            seen.push((feature.name.as_str(), category));
        }

        if seen.is_empty() {
            return Err(PreprocessError::EmptyFeatureSet);
        }

        Ok(())
    }
}

impl Default for FeatureGroups {
    fn default() -> Self {
        Self::track_attributes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_attributes_are_valid() {
        let groups = FeatureGroups::track_attributes();
        assert!(groups.validate().is_ok());
        assert_eq!(groups.feature_names().len(), 9);
        assert_eq!(
            groups.category_of("LivePerformanceLikelihood"),
            Some(SkewCategory::ModeratelySkewed)
        );
        assert_eq!(groups.category_of("Tempo"), None);
    }

    #[test]
    fn duplicate_feature_is_rejected() {
        let mut groups = FeatureGroups::track_attributes();
        groups
            .approximately_normal
            .push(Feature::new("VocalContent", 0.79));

        match groups.validate() {
            Err(PreprocessError::DuplicateFeature { name, first, second }) => {
                assert_eq!(name, "VocalContent");
                assert_eq!(first, SkewCategory::HighlySkewed);
                assert_eq!(second, SkewCategory::ApproximatelyNormal);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_groups_are_rejected() {
        let groups = FeatureGroups {
            highly_skewed: Vec::new(),
            moderately_skewed: Vec::new(),
            approximately_normal: Vec::new(),
        };
        assert!(matches!(
            groups.validate(),
            Err(PreprocessError::EmptyFeatureSet)
        ));
    }

    #[test]
    fn category_serializes_as_snake_case() {
        let json = serde_json::to_string(&SkewCategory::ApproximatelyNormal).unwrap();
        assert_eq!(json, "\"approximately_normal\"");
    }
}
