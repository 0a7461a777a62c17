//! Конфигурация препроцессинга для экспериментов

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::FeatureGroups;

/// Что делать с умеренно скошенными признаками.
///
/// Решение ручное: включать ли их в Yeo-Johnson зависит от того,
/// насколько трансформация реально снижает асимметрию.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerateSkewPolicy {
    #[default]
    PassThrough,
    Transform,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreprocessingConfig {
    #[serde(default)]
    pub moderate_skew: ModerateSkewPolicy,
    #[serde(default)]
    pub feature_groups: FeatureGroups,
}

impl PreprocessingConfig {
    pub fn with_moderate_skew(mut self, policy: ModerateSkewPolicy) -> Self {
        self.moderate_skew = policy;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.feature_groups.validate()?;
        Ok(config)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
