/// Выбор препроцессора под модель

pub mod registry;

pub use registry::{BuilderFn, ModelFamily, PipelineRegistry};
