//! Track preprocessing - конфигурация пайплайнов препроцессинга под семейства моделей

pub mod config;
pub mod error;
pub mod types;
pub mod models;
pub mod preprocessing;

pub use config::{ModerateSkewPolicy, PreprocessingConfig};
pub use error::{PreprocessError, Result};
pub use types::*;
pub use models::*;
pub use preprocessing::*;
