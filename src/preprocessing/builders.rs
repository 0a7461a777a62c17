//! Билдеры препроцессоров под семейства моделей

use crate::config::PreprocessingConfig;
use crate::error::Result;

use super::feature_selection::TransformDecision;
use super::pipeline::{
    ColumnOp, ColumnTransform, ColumnTransformer, MinMaxScaler, Pipeline, PolynomialFeatures,
    PowerTransformer, Preprocessor, Stage, StandardScaler,
};

/// Создает свежие (не обученные) пайплайны на основе разбиения признаков.
///
/// Каждый вызов билдера возвращает новый независимый экземпляр.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessorFactory {
    decision: TransformDecision,
}

impl PreprocessorFactory {
    pub fn new(decision: TransformDecision) -> Self {
        Self { decision }
    }

    pub fn from_config(config: &PreprocessingConfig) -> Result<Self> {
        Ok(Self::new(TransformDecision::from_config(config)?))
    }

    pub fn decision(&self) -> &TransformDecision {
        &self.decision
    }

    /// Yeo-Johnson для скошенных признаков, остальные без изменений
    fn column_transform(&self) -> Stage {
        Stage::Columns(ColumnTransformer {
            transformers: vec![
                ColumnTransform {
                    name: "yeo_johnson".to_string(),
                    op: ColumnOp::PowerTransform(PowerTransformer::yeo_johnson()),
                    columns: self.decision.features_to_transform().to_vec(),
                },
                ColumnTransform {
                    name: "passthrough".to_string(),
                    op: ColumnOp::Passthrough,
                    columns: self.decision.features_normal().to_vec(),
                },
            ],
        })
    }

    /// Линейные и регуляризованные модели: Yeo-Johnson + StandardScaler
    pub fn linear_model(&self) -> Preprocessor {
        Pipeline::new()
            .step("transform", self.column_transform())
            .step("scaler", Stage::StandardScaler(StandardScaler::default()))
            .into()
    }

    /// Деревья (RF, XGB, LGBM, CatBoost) инвариантны к масштабу
    pub fn tree_model(&self) -> Preprocessor {
        Preprocessor::Passthrough
    }

    /// Нейросети: Yeo-Johnson + MinMaxScaler в [0, 1]
    pub fn neural_network(&self) -> Preprocessor {
        Pipeline::new()
            .step("transform", self.column_transform())
            .step("scaler", Stage::MinMaxScaler(MinMaxScaler::default()))
            .into()
    }

    /// SVR очень чувствителен к масштабу, препроцессинг как у линейных моделей
    pub fn svr(&self) -> Preprocessor {
        self.linear_model()
    }

    pub fn polynomial(&self, degree: u32, interaction_only: bool) -> Preprocessor {
        Pipeline::new()
            .step("transform", self.column_transform())
            .step(
                "polynomial",
                Stage::Polynomial(PolynomialFeatures {
                    degree,
                    interaction_only,
                    include_bias: false,
                }),
            )
            .step("scaler", Stage::StandardScaler(StandardScaler::default()))
            .into()
    }

    pub fn polynomial_interaction(&self) -> Preprocessor {
        self.polynomial(2, true)
    }

    pub fn polynomial_full(&self) -> Preprocessor {
        self.polynomial(2, false)
    }
}
