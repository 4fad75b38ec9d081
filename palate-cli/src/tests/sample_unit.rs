//! Focused unit tests covering sample CLI configuration and execution.

use std::collections::BTreeSet;

use super::helpers::Workspace;
use super::*;
use crate::sample::{SampleConfig, config_from_layers_for_test, run_sample_with};
use palate_core::DEFAULT_SAMPLE_SIZE;
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn sample(args: SampleArgs) -> Vec<String> {
    let mut buffer = Vec::new();
    run_sample_with(args, &mut buffer).expect("sample should succeed");
    serde_json::from_slice(&buffer).expect("output should be a JSON array of ids")
}

fn seeded(workspace: &Workspace, count: usize, seed: u64) -> SampleArgs {
    SampleArgs {
        catalog: Some(workspace.catalog()),
        count: Some(count),
        seed: Some(seed),
        exclude: None,
    }
}

#[rstest]
fn converting_without_catalog_errors() {
    let err = SampleConfig::try_from(SampleArgs::default()).expect_err("catalog is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_SAMPLE_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn config_defaults_sample_size() {
    let args = SampleArgs {
        catalog: Some(camino::Utf8PathBuf::from("catalog.json")),
        ..SampleArgs::default()
    };
    let config = SampleConfig::try_from(args).expect("config should build");
    assert_eq!(config.count, DEFAULT_SAMPLE_SIZE);
    assert_eq!(config.seed, None);
}

#[rstest]
fn seeded_samples_are_reproducible(workspace: Workspace) {
    let first = sample(seeded(&workspace, 5, 42));
    let second = sample(seeded(&workspace, 5, 42));
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
    let distinct: BTreeSet<&String> = first.iter().collect();
    assert_eq!(distinct.len(), 5);
}

#[rstest]
fn excluded_dishes_are_never_sampled(workspace: Workspace) {
    let liked: Vec<String> = (0..10).map(|n| format!("c0-d{n}")).collect();
    let liked_refs: Vec<&str> = liked.iter().map(String::as_str).collect();
    workspace.write_liked(&liked_refs);
    let args = SampleArgs {
        exclude: Some(workspace.liked()),
        ..seeded(&workspace, 50, 7)
    };
    let sampled = sample(args);
    assert_eq!(sampled.len(), 10);
    assert!(sampled.iter().all(|id| id.starts_with("c1-")));
}

#[rstest]
fn missing_exclude_file_is_reported(workspace: Workspace) {
    let args = SampleArgs {
        exclude: Some(workspace.liked()),
        ..seeded(&workspace, 3, 1)
    };
    let mut buffer = Vec::new();
    let err = run_sample_with(args, &mut buffer).expect_err("exclude file is absent");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_EXCLUDE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_prefers_cli_over_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "catalog": "from-file.json", "count": 3 }), None);
    composer.push_environment(json!({ "count": 4, "seed": 9 }));
    composer.push_cli(json!({ "seed": 11 }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config builds");
    assert_eq!(config.catalog, camino::Utf8PathBuf::from("from-file.json"));
    assert_eq!(config.count, 4);
    assert_eq!(config.seed, Some(11));
}
