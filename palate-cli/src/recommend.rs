//! Recommend command implementation for the Palate CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use palate_core::{
    Catalog, DEFAULT_BANDWIDTH, DEFAULT_TOTAL_RECOMMENDATIONS, DEFAULT_WILDCARD_RATIO,
    LikedDishes, RecommendRequest, Recommendation, Recommender,
};
use serde::{Deserialize, Serialize};

use crate::input::{load_json, require_existing, write_json};
use crate::{
    ARG_BANDWIDTH, ARG_CATALOG, ARG_INCLUDE_LIKED, ARG_LIKED, ARG_MIN_LIKED, ARG_TOTAL,
    ARG_WILDCARD_RATIO, CliError, ENV_RECOMMEND_CATALOG, ENV_RECOMMEND_LIKED,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank dishes from a flavour catalog against a JSON list of \
                 liked dish ids. Each liked cluster receives a share of the \
                 result proportional to how many liked dishes it holds, part \
                 of which is spent on wildcard picks ranked just below the \
                 top of the cluster.",
    about = "Recommend dishes from liked ones"
)]
#[ortho_config(prefix = "PALATE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of liked dish ids.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) liked_path: Option<Utf8PathBuf>,
    /// Path to the JSON flavour catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of dishes to recommend.
    #[arg(long = ARG_TOTAL, value_name = "count")]
    #[serde(default)]
    pub(crate) total: Option<usize>,
    /// Fraction of each cluster's share reserved for wildcard picks.
    #[arg(long = ARG_WILDCARD_RATIO, value_name = "ratio")]
    #[serde(default)]
    pub(crate) wildcard_ratio: Option<f64>,
    /// Scale factor for the density estimate's kernel covariance.
    #[arg(long = ARG_BANDWIDTH, value_name = "factor")]
    #[serde(default)]
    pub(crate) bandwidth: Option<f64>,
    /// Refuse to recommend until this many liked dishes are in the catalog.
    #[arg(long = ARG_MIN_LIKED, value_name = "count")]
    #[serde(default)]
    pub(crate) min_liked: Option<usize>,
    /// Keep liked dishes in the output instead of filtering them out.
    #[arg(long = ARG_INCLUDE_LIKED)]
    #[serde(default)]
    pub(crate) include_liked: bool,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the liked-dish list.
    pub(crate) liked_path: Utf8PathBuf,
    /// Path to the flavour catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Upper bound on recommended dishes.
    pub(crate) total: usize,
    /// Wildcard share of each cluster's quota.
    pub(crate) wildcard_ratio: f64,
    /// Kernel covariance scale factor.
    pub(crate) bandwidth: f64,
    /// Minimum liked dishes that must resolve in the catalog.
    pub(crate) min_liked: usize,
    /// Whether liked dishes stay in the output.
    pub(crate) include_liked: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.liked_path, ARG_LIKED)?;
        require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }

    fn request(&self, liked: LikedDishes) -> RecommendRequest {
        RecommendRequest::new(liked)
            .with_total(self.total)
            .with_wildcard_ratio(self.wildcard_ratio)
            .with_bandwidth(self.bandwidth)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let liked_path = args.liked_path.ok_or(CliError::MissingPositional {
            name: ARG_LIKED,
            env: ENV_RECOMMEND_LIKED,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        Ok(Self {
            liked_path,
            catalog,
            total: args.total.unwrap_or(DEFAULT_TOTAL_RECOMMENDATIONS),
            wildcard_ratio: args.wildcard_ratio.unwrap_or(DEFAULT_WILDCARD_RATIO),
            bandwidth: args.bandwidth.unwrap_or(DEFAULT_BANDWIDTH),
            min_liked: args.min_liked.unwrap_or_default(),
            include_liked: args.include_liked,
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    recommender: &dyn Recommender,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendation = execute_recommend(args, recommender)?;
    write_json(writer, &recommendation)
}

fn execute_recommend(
    args: RecommendArgs,
    recommender: &dyn Recommender,
) -> Result<Recommendation, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let catalog: Catalog = load_json(&config.catalog, ARG_CATALOG)?;
    let liked: LikedDishes = load_json(&config.liked_path, ARG_LIKED)?;
    log::debug!(
        "loaded {} dishes from {} and {} liked dishes from {}",
        catalog.len(),
        config.catalog,
        liked.len(),
        config.liked_path
    );

    let resolved = liked.resolve(&catalog).count();
    if resolved < config.min_liked {
        return Err(CliError::TooFewLikedDishes {
            resolved,
            required: config.min_liked,
        });
    }

    let request = config.request(liked);
    let recommendation = recommender.recommend(&catalog, &request)?;
    if config.include_liked {
        Ok(recommendation)
    } else {
        Ok(recommendation.excluding(&request.liked))
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
