/// Модуль предобработки данных

pub mod builders;
pub mod feature_selection;
pub mod pipeline;

pub use builders::PreprocessorFactory;
pub use feature_selection::TransformDecision;
pub use pipeline::{Pipeline, Preprocessor, Stage};
