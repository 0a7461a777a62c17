//! Реестр: семейство моделей -> билдер препроцессора

use std::fmt;
use std::str::FromStr;

use crate::config::PreprocessingConfig;
use crate::error::{PreprocessError, Result};
use crate::preprocessing::{Preprocessor, PreprocessorFactory, TransformDecision};

pub type BuilderFn = fn(&PreprocessorFactory) -> Preprocessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelFamily {
    // Линейные
    Linear,
    Ridge,
    Lasso,
    ElasticNet,
    Gam,
    // Ядерные
    Svr,
    // Деревья
    Tree,
    RandomForest,
    XgBoost,
    LightGbm,
    CatBoost,
    // Нейросети
    NeuralNetwork,
    // Полиномиальная регрессия
    PolynomialInteract,
    PolynomialFull,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 14] = [
        ModelFamily::Linear,
        ModelFamily::Ridge,
        ModelFamily::Lasso,
        ModelFamily::ElasticNet,
        ModelFamily::Gam,
        ModelFamily::Svr,
        ModelFamily::Tree,
        ModelFamily::RandomForest,
        ModelFamily::XgBoost,
        ModelFamily::LightGbm,
        ModelFamily::CatBoost,
        ModelFamily::NeuralNetwork,
        ModelFamily::PolynomialInteract,
        ModelFamily::PolynomialFull,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelFamily::Linear => "linear",
            ModelFamily::Ridge => "ridge",
            ModelFamily::Lasso => "lasso",
            ModelFamily::ElasticNet => "elasticnet",
            ModelFamily::Gam => "gam",
            ModelFamily::Svr => "svr",
            ModelFamily::Tree => "tree",
            ModelFamily::RandomForest => "random_forest",
            ModelFamily::XgBoost => "xgboost",
            ModelFamily::LightGbm => "lightgbm",
            ModelFamily::CatBoost => "catboost",
            ModelFamily::NeuralNetwork => "neural_network",
            ModelFamily::PolynomialInteract => "polynomial_interact",
            ModelFamily::PolynomialFull => "polynomial_full",
        }
    }

    /// Выбор билдера определяется потребностью в препроцессинге,
    /// а не самим алгоритмом модели
    pub fn builder(self) -> BuilderFn {
        match self {
            ModelFamily::Linear
            | ModelFamily::Ridge
            | ModelFamily::Lasso
            | ModelFamily::ElasticNet
            | ModelFamily::Gam => PreprocessorFactory::linear_model,
            ModelFamily::Svr => PreprocessorFactory::svr,
            ModelFamily::Tree
            | ModelFamily::RandomForest
            | ModelFamily::XgBoost
            | ModelFamily::LightGbm
            | ModelFamily::CatBoost => PreprocessorFactory::tree_model,
            ModelFamily::NeuralNetwork => PreprocessorFactory::neural_network,
            ModelFamily::PolynomialInteract => PreprocessorFactory::polynomial_interaction,
            ModelFamily::PolynomialFull => PreprocessorFactory::polynomial_full,
        }
    }

    pub fn requires_scaling(self) -> bool {
        !matches!(
            self,
            ModelFamily::Tree
                | ModelFamily::RandomForest
                | ModelFamily::XgBoost
                | ModelFamily::LightGbm
                | ModelFamily::CatBoost
        )
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFamily {
    type Err = PreprocessError;

    fn from_str(s: &str) -> Result<Self> {
        ModelFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| PreprocessError::UnknownModelFamily(s.to_string()))
    }
}

/// Неизменяемый реестр, собирается один раз при старте
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRegistry {
    factory: PreprocessorFactory,
}

impl PipelineRegistry {
    pub fn new(config: &PreprocessingConfig) -> Result<Self> {
        let factory = PreprocessorFactory::from_config(config)?;
        tracing::debug!(families = ModelFamily::ALL.len(), "pipeline registry built");
        Ok(Self { factory })
    }

    pub fn factory(&self) -> &PreprocessorFactory {
        &self.factory
    }

    pub fn decision(&self) -> &TransformDecision {
        self.factory.decision()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        ModelFamily::ALL.iter().map(|family| family.as_str()).collect()
    }

    /// Билдер по строковому ключу; неизвестный ключ - ошибка без fallback
    pub fn get(&self, key: &str) -> Result<BuilderFn> {
        let family: ModelFamily = key.parse()?;
        Ok(family.builder())
    }

    pub fn build(&self, key: &str) -> Result<Preprocessor> {
        let builder = self.get(key)?;
        Ok(builder(&self.factory))
    }

    pub fn build_family(&self, family: ModelFamily) -> Preprocessor {
        (family.builder())(&self.factory)
    }
}
