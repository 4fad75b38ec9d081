//! Sample command implementation for the Palate CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use palate_core::{Catalog, DEFAULT_SAMPLE_SIZE, DishId, LikedDishes, sample_dishes};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::input::{load_json, require_existing, write_json};
use crate::{ARG_CATALOG, ARG_COUNT, ARG_EXCLUDE, ARG_SEED, CliError, ENV_SAMPLE_CATALOG};

/// CLI arguments for the `sample` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "sample",
    long_about = "Draw distinct dishes uniformly from a flavour catalog, \
                 skipping any listed in an exclusion file. A fixed seed makes \
                 the draw reproducible.",
    about = "Sample dishes to offer for liking"
)]
#[ortho_config(prefix = "PALATE")]
pub(crate) struct SampleArgs {
    /// Path to the JSON flavour catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of dishes to draw.
    #[arg(long = ARG_COUNT, value_name = "count")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Seed for the random generator; omit for a fresh draw each run.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Path to a JSON array of dish ids to leave out.
    #[arg(long = ARG_EXCLUDE, value_name = "path")]
    #[serde(default)]
    pub(crate) exclude: Option<Utf8PathBuf>,
}

impl SampleArgs {
    pub(crate) fn into_config(self) -> Result<SampleConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SampleConfig::try_from(merged)
    }
}

/// Resolved `sample` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SampleConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) count: usize,
    pub(crate) seed: Option<u64>,
    pub(crate) exclude: Option<Utf8PathBuf>,
}

impl SampleConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(exclude) = &self.exclude {
            require_existing(exclude, ARG_EXCLUDE)?;
        }
        Ok(())
    }

    fn rng(&self) -> ChaCha8Rng {
        self.seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }
}

impl TryFrom<SampleArgs> for SampleConfig {
    type Error = CliError;

    fn try_from(args: SampleArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_SAMPLE_CATALOG,
        })?;
        Ok(Self {
            catalog,
            count: args.count.unwrap_or(DEFAULT_SAMPLE_SIZE),
            seed: args.seed,
            exclude: args.exclude,
        })
    }
}

pub(crate) fn run_sample_with(args: SampleArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let sampled = execute_sample(args)?;
    write_json(writer, &sampled)
}

fn execute_sample(args: SampleArgs) -> Result<Vec<DishId>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let catalog: Catalog = load_json(&config.catalog, ARG_CATALOG)?;
    let exclude: LikedDishes = match &config.exclude {
        Some(path) => load_json(path, ARG_EXCLUDE)?,
        None => LikedDishes::new(),
    };
    let mut rng = config.rng();
    let sampled = sample_dishes(&catalog, config.count, &exclude, &mut rng);
    log::debug!(
        "sampled {} of {} catalog dishes",
        sampled.len(),
        catalog.len()
    );
    Ok(sampled)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SampleConfig, CliError> {
    let merged = SampleArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SampleConfig::try_from(merged)
}
