use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::identifier::Identifier;
use crate::resolver::engine::{IdentifierResolver, Resolution, ResolutionSummary};
use crate::store::AliasStore;
use crate::utils::validation;

#[derive(Args)]
pub struct ResolveArgs {
    /// Identifiers to resolve, as namespace:accession (e.g. NCBI:NC_000019.10)
    pub identifiers: Vec<String>,

    /// Read identifiers from a file, one per line
    /// Use '-' for stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the identifiers cannot be read or parsed, or if any
/// identifier fails to resolve.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: ResolveArgs,
    store: &dyn AliasStore,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let identifiers = collect_identifiers(&args)?;

    if verbose {
        eprintln!("Resolving {} identifier(s)", identifiers.len());
    }

    let resolver = IdentifierResolver::new(store);
    let resolutions = resolver.resolve_all(identifiers);

    match format {
        OutputFormat::Text => print_text_results(&resolutions),
        OutputFormat::Json => print_json_results(&resolutions)?,
        OutputFormat::Tsv => print_tsv_results(&resolutions),
    }

    let failed = resolutions.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} identifier(s) could not be resolved",
            resolutions.len()
        );
    }

    Ok(())
}

fn collect_identifiers(args: &ResolveArgs) -> anyhow::Result<Vec<Identifier>> {
    use std::io::{self, Read};

    let mut identifiers = args
        .identifiers
        .iter()
        .map(|text| validation::parse_identifier(text))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(input) = &args.input {
        let content = if input.to_string_lossy() == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(input)
                .with_context(|| format!("Failed to read {}", input.display()))?
        };
        identifiers.extend(validation::parse_identifier_lines(&content)?);
    }

    validation::check_batch_size(identifiers.len())?;

    Ok(identifiers)
}

fn print_text_results(resolutions: &[Resolution]) {
    for resolution in resolutions {
        match &resolution.result {
            Ok(digest) => println!("{}\t{digest}", resolution.identifier),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

fn print_json_results(resolutions: &[Resolution]) -> anyhow::Result<()> {
    let output: Vec<ResolutionSummary> = resolutions.iter().map(ResolutionSummary::from).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(resolutions: &[Resolution]) {
    println!("namespace\taccession\tdigest\terror");
    for resolution in resolutions {
        let summary = ResolutionSummary::from(resolution);
        println!(
            "{}\t{}\t{}\t{}",
            summary.namespace,
            summary.accession,
            summary.digest.unwrap_or(""),
            summary.error.as_deref().unwrap_or(""),
        );
    }
}
