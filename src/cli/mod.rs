//! Command-line interface for vmc-resolver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Translate identifiers such as `NCBI:NC_000019.10` to VMC digests
//! - **aliases**: List every alias of the sequence an identifier refers to
//!
//! The SeqRepo instance is chosen with `--root-dir` and `--instance`, which fall back
//! to `SEQREPO_ROOT_DIR` and `SEQREPO_INSTANCE`.
//!
//! ## Usage
//!
//! ```text
//! # Resolve a single accession
//! vmc-resolver resolve NCBI:NC_000019.10
//!
//! # Resolve a list, one identifier per line
//! cut -f1 accessions.txt | vmc-resolver resolve --input -
//!
//! # JSON output for scripting
//! vmc-resolver resolve NCBI:NC_000019.10 --format json
//!
//! # Use a specific SeqRepo snapshot
//! vmc-resolver --root-dir /data/seqrepo --instance 2024-02-20 aliases NCBI:NC_000019.10
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::config::SeqRepoConfig;

pub mod aliases;
pub mod resolve;

#[derive(Parser)]
#[command(name = "vmc-resolver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Translate assigned sequence identifiers to VMC digests using SeqRepo")]
#[command(
    long_about = "vmc-resolver looks up sequence identifiers assigned by other authorities (e.g. NCBI:NC_000019.10) in a local SeqRepo instance and reports the corresponding VMC sequence digest (e.g. VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl).\n\nNo digests are computed: the SeqRepo alias table must already contain them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory containing SeqRepo instances
    /// [default: $SEQREPO_ROOT_DIR, else /usr/local/share/seqrepo]
    #[arg(long, global = true)]
    pub root_dir: Option<PathBuf>,

    /// SeqRepo instance name within the root directory
    /// [default: $SEQREPO_INSTANCE, else master]
    #[arg(long, global = true)]
    pub instance: Option<String>,
}

impl Cli {
    /// Location of the SeqRepo instance: the environment, overridden by any flags given
    pub fn seqrepo_config(&self) -> SeqRepoConfig {
        self.override_config(SeqRepoConfig::from_env())
    }

    fn override_config(&self, mut config: SeqRepoConfig) -> SeqRepoConfig {
        if let Some(root_dir) = &self.root_dir {
            config.root_dir.clone_from(root_dir);
        }
        if let Some(instance) = &self.instance {
            config.instance.clone_from(instance);
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve identifiers to VMC sequence digests
    Resolve(resolve::ResolveArgs),

    /// List all aliases of the sequence an identifier refers to
    Aliases(aliases::AliasesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::config::{INSTANCE_ENV, ROOT_DIR_ENV};

    fn env_config(root_dir: &str, instance: &str) -> SeqRepoConfig {
        SeqRepoConfig::from_lookup(|key| match key {
            ROOT_DIR_ENV => Some(root_dir.to_string()),
            INSTANCE_ENV => Some(instance.to_string()),
            _ => None,
        })
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "vmc-resolver",
            "--root-dir",
            "/data/seqrepo",
            "resolve",
            "NCBI:NC_000019.10",
        ])
        .unwrap();

        let config = cli.override_config(env_config("/env/seqrepo", "2024-02-20"));
        assert_eq!(config, SeqRepoConfig::new("/data/seqrepo", "2024-02-20"));
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let cli = Cli::try_parse_from(["vmc-resolver", "resolve", "NCBI:NC_000019.10"]).unwrap();
        assert!(cli.root_dir.is_none());
        assert!(cli.instance.is_none());

        let config = cli.override_config(env_config("", ""));
        assert_eq!(config, SeqRepoConfig::default());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vmc-resolver",
            "aliases",
            "UCSC:chr19",
            "--instance",
            "other",
        ])
        .unwrap();
        assert_eq!(cli.instance.as_deref(), Some("other"));
    }
}
