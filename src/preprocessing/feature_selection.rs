//! Выбор признаков для Yeo-Johnson трансформации

use serde::Serialize;

use crate::config::{ModerateSkewPolicy, PreprocessingConfig};
use crate::error::Result;
use crate::types::{FeatureGroups, SkewCategory};

/// Разбиение признаков на трансформируемые и пропускаемые без изменений.
///
/// Списки не пересекаются и вместе покрывают все объявленные признаки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformDecision {
    features_to_transform: Vec<String>,
    features_normal: Vec<String>,
}

impl TransformDecision {
    pub fn from_config(config: &PreprocessingConfig) -> Result<Self> {
        Self::classify(&config.feature_groups, config.moderate_skew)
    }

    pub fn classify(groups: &FeatureGroups, policy: ModerateSkewPolicy) -> Result<Self> {
        groups.validate()?;

        // Копии, а не ссылки на исходные группы
        let mut features_to_transform = groups.names(SkewCategory::HighlySkewed);
        let mut features_normal = groups.names(SkewCategory::ApproximatelyNormal);

        for feature in &groups.moderately_skewed {
            if policy == ModerateSkewPolicy::Transform {
                tracing::info!(
                    feature = %feature.name,
                    skewness = feature.skewness,
                    "moderately skewed feature added to transform set"
                );
                features_to_transform.push(feature.name.clone());
            }
            if !features_to_transform.contains(&feature.name) {
                features_normal.push(feature.name.clone());
            }
        }

        tracing::debug!(
            transform = features_to_transform.len(),
            passthrough = features_normal.len(),
            ?policy,
            "feature transform decision built"
        );

        Ok(Self {
            features_to_transform,
            features_normal,
        })
    }

    pub fn features_to_transform(&self) -> &[String] {
        &self.features_to_transform
    }

    pub fn features_normal(&self) -> &[String] {
        &self.features_normal
    }

    pub fn is_transformed(&self, name: &str) -> bool {
        self.features_to_transform.iter().any(|f| f == name)
    }

    /// Все признаки в порядке выхода column transform
    pub fn all_features(&self) -> Vec<String> {
        self.features_to_transform
            .iter()
            .chain(&self.features_normal)
            .cloned()
            .collect()
    }
}
