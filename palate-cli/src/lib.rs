//! Command-line interface for Palate dish recommendations.
//!
//! Two subcommands operate on a JSON flavour catalog:
//!
//! - `recommend` ranks catalog dishes against a JSON list of liked dish ids.
//! - `sample` draws a reproducible random selection of dishes, typically to
//!   seed a new user's liked set.
//!
//! Options layer through `ortho_config`: command-line flags override
//! `PALATE_`-prefixed environment variables, which override configuration
//! files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use palate_scorer::KdeRecommender;

mod error;
mod input;
mod recommend;
mod sample;

pub use error::CliError;

use recommend::RecommendArgs;
use sample::SampleArgs;

const ARG_LIKED: &str = "liked";
const ARG_CATALOG: &str = "catalog";
const ARG_EXCLUDE: &str = "exclude";
const ARG_TOTAL: &str = "total";
const ARG_WILDCARD_RATIO: &str = "wildcard-ratio";
const ARG_BANDWIDTH: &str = "bandwidth";
const ARG_MIN_LIKED: &str = "min-liked";
const ARG_INCLUDE_LIKED: &str = "include-liked";
const ARG_COUNT: &str = "count";
const ARG_SEED: &str = "seed";
const ENV_RECOMMEND_LIKED: &str = "PALATE_CMDS_RECOMMEND_LIKED_PATH";
const ENV_RECOMMEND_CATALOG: &str = "PALATE_CMDS_RECOMMEND_CATALOG";
const ENV_SAMPLE_CATALOG: &str = "PALATE_CMDS_SAMPLE_CATALOG";

/// Run the Palate CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, input
/// loading, recommendation or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => {
            recommend::run_recommend_with(args, &KdeRecommender::new(), &mut stdout)
        }
        Command::Sample(args) => sample::run_sample_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "palate",
    about = "Flavour-profile dish recommendations from a clustered catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog dishes against a liked-dish list.
    Recommend(RecommendArgs),
    /// Draw a random selection of catalog dishes.
    Sample(SampleArgs),
}

#[cfg(test)]
mod tests;
