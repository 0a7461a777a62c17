/// Диагностика: разбиение признаков и доступные пайплайны

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use track_preprocessing::{ModerateSkewPolicy, PipelineRegistry, PreprocessingConfig};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config with feature groups and moderate-skew policy
    #[arg(long)]
    config: Option<PathBuf>,

    /// Yeo-Johnson transform moderately skewed features too
    #[arg(long)]
    include_moderate: bool,

    /// Print the preprocessor built for this model family
    #[arg(long)]
    model: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PreprocessingConfig::load_json(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PreprocessingConfig::default(),
    };
    if args.include_moderate {
        config.moderate_skew = ModerateSkewPolicy::Transform;
    }

    let registry = PipelineRegistry::new(&config)?;
    let decision = registry.decision();

    println!("✓ Preprocessing module loaded.");
    println!("Features to transform: {:?}", decision.features_to_transform());
    println!("Features to scale only: {:?}", decision.features_normal());
    println!("Available pipelines: {:?}", registry.keys());

    if let Some(model) = &args.model {
        tracing::info!("Building preprocessor for {}", model);
        let preprocessor = registry.build(model)?;
        println!("{}", serde_json::to_string_pretty(&preprocessor)?);
    }

    Ok(())
}
