//! Ошибки конфигурации препроцессинга

use thiserror::Error;

use crate::types::SkewCategory;

pub type Result<T> = std::result::Result<T, PreprocessError>;

#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Идентификатор модели отсутствует в реестре
    #[error("configuration key not found: unknown model family `{0}`")]
    UnknownModelFamily(String),

    #[error("feature `{name}` is declared as both {first} and {second}")]
    DuplicateFeature {
        name: String,
        first: SkewCategory,
        second: SkewCategory,
    },

    #[error("no features declared")]
    EmptyFeatureSet,

    #[error("invalid preprocessing config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read preprocessing config: {0}")]
    Io(#[from] std::io::Error),
}
