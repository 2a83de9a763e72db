//! Command-line parsing for the carbon-intensity pull tool.
//!
//! The surface is deliberately minimal: one positional output path, no
//! flags. Transport/pacing knobs live in [`crate::domain::PullConfig`] so
//! tests can override them without widening the CLI.

use std::path::PathBuf;

use clap::Parser;

/// Pull the full UK grid carbon-intensity history into a tab-separated file.
#[derive(Debug, Parser)]
#[command(
    name = "carbon-pull",
    version,
    about = "Pull historical UK grid carbon-intensity data into a TSV file"
)]
pub struct Cli {
    /// Output file path (created or truncated).
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_positional_argument_parses() {
        let cli = Cli::try_parse_from(["carbon-pull", "out.tsv"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out.tsv"));
    }

    #[test]
    fn missing_output_path_is_a_usage_error() {
        let err = Cli::try_parse_from(["carbon-pull"]).unwrap_err();
        assert!(err.use_stderr());
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        let err = Cli::try_parse_from(["carbon-pull", "a.tsv", "b.tsv"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
