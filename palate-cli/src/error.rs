//! Error types emitted by the Palate CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use palate_core::RecommendError;
use thiserror::Error;

/// Errors emitted by the Palate CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A required positional argument is missing after configuration merging.
    #[error("missing <{name}> (pass it as a positional argument or set {env})")]
    MissingPositional {
        /// Placeholder naming the positional argument.
        name: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening a JSON input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A JSON input file could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Decoder failure, including catalog validation errors.
        #[source]
        source: serde_json::Error,
    },
    /// Too few liked dishes resolved in the catalog to recommend from.
    #[error("only {resolved} liked dishes were found in the catalog; at least {required} are needed")]
    TooFewLikedDishes {
        /// Liked dishes present in the catalog.
        resolved: usize,
        /// Configured minimum.
        required: usize,
    },
    /// The recommender rejected the request.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
