//! Интеграционные тесты реестра и билдеров

use std::collections::BTreeSet;

use track_preprocessing::pipeline::{MinMaxScaler, StandardScaler};
use track_preprocessing::{
    FeatureGroups, ModelFamily, ModerateSkewPolicy, PipelineRegistry, PreprocessError,
    PreprocessingConfig, Stage, TransformDecision,
};

const TREE_FAMILIES: [&str; 5] = ["tree", "random_forest", "xgboost", "lightgbm", "catboost"];

fn registry() -> PipelineRegistry {
    PipelineRegistry::new(&PreprocessingConfig::default()).unwrap()
}

#[test]
fn test_partition_covers_all_features_without_overlap() {
    let groups = FeatureGroups::track_attributes();
    for policy in [ModerateSkewPolicy::PassThrough, ModerateSkewPolicy::Transform] {
        let decision = TransformDecision::classify(&groups, policy).unwrap();

        let transform: BTreeSet<&String> = decision.features_to_transform().iter().collect();
        let normal: BTreeSet<&String> = decision.features_normal().iter().collect();
        let all: BTreeSet<String> = groups.feature_names().into_iter().collect();

        assert!(transform.is_disjoint(&normal));
        let union: BTreeSet<String> = transform.union(&normal).map(|s| s.to_string()).collect();
        assert_eq!(union, all);

        for feature in &groups.highly_skewed {
            assert!(decision.is_transformed(&feature.name));
            assert!(!normal.contains(&feature.name));
        }
    }
}

#[test]
fn test_every_key_resolves() {
    let registry = registry();
    assert_eq!(registry.keys().len(), 14);

    for key in registry.keys() {
        let preprocessor = registry.build(key).unwrap();
        assert_eq!(
            preprocessor.is_passthrough(),
            TREE_FAMILIES.contains(&key),
            "{key}"
        );
    }
}

#[test]
fn test_linear_aliases_share_stage_sequence() {
    let registry = registry();
    let linear = registry.build("linear").unwrap();

    for key in ["ridge", "lasso", "elasticnet", "gam", "svr"] {
        assert_eq!(registry.build(key).unwrap(), linear, "{key}");
    }
}

#[test]
fn test_polynomial_families() {
    let registry = registry();

    let interact = registry.build("polynomial_interact").unwrap();
    let poly = interact.as_pipeline().unwrap().polynomial().unwrap();
    assert_eq!((poly.degree, poly.interaction_only, poly.include_bias), (2, true, false));

    let full = registry.build("polynomial_full").unwrap();
    let poly = full.as_pipeline().unwrap().polynomial().unwrap();
    assert_eq!((poly.degree, poly.interaction_only, poly.include_bias), (2, false, false));
}

#[test]
fn test_builder_returns_independent_instances() {
    let registry = registry();
    let builder = registry.get("neural_network").unwrap();

    let first = builder(registry.factory());
    let second = builder(registry.factory());
    assert_eq!(first, second);

    let mut first = first.into_pipeline().unwrap();
    first = first.step("extra", Stage::StandardScaler(StandardScaler::default()));
    assert_eq!(first.steps().len(), 3);
    assert_eq!(second.as_pipeline().unwrap().steps().len(), 2);
}

#[test]
fn test_unknown_family_fails() {
    let registry = registry();
    assert!(matches!(
        registry.build("knn"),
        Err(PreprocessError::UnknownModelFamily(_))
    ));
    assert!("".parse::<ModelFamily>().is_err());
}

#[test]
fn test_final_scaler_per_family() {
    let registry = registry();

    let nn = registry.build("neural_network").unwrap();
    assert_eq!(
        nn.as_pipeline().unwrap().final_stage(),
        Some(&Stage::MinMaxScaler(MinMaxScaler {
            feature_range: (0.0, 1.0)
        }))
    );

    let linear = registry.build("linear").unwrap();
    assert!(matches!(
        linear.as_pipeline().unwrap().final_stage(),
        Some(Stage::StandardScaler(_))
    ));
}

#[test]
fn test_moderate_policy_changes_pipelines() {
    let config = PreprocessingConfig::default().with_moderate_skew(ModerateSkewPolicy::Transform);
    let registry = PipelineRegistry::new(&config).unwrap();

    assert!(registry.decision().is_transformed("LivePerformanceLikelihood"));
    assert_ne!(
        registry.build("linear").unwrap(),
        self::registry().build("linear").unwrap()
    );
}

#[test]
fn test_pipeline_serializes_for_inspection() {
    let pipeline = registry().build("polynomial_full").unwrap();
    let json = serde_json::to_value(&pipeline).unwrap();

    let steps = json["pipeline"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["name"], "transform");
    assert_eq!(steps[1]["stage"]["kind"], "polynomial");
    assert_eq!(steps[1]["stage"]["include_bias"], false);
    assert_eq!(steps[2]["stage"]["kind"], "standard_scaler");
}
