use clap::Args;

use crate::cli::OutputFormat;
use crate::core::alias::AliasRecord;
use crate::core::identifier::Identifier;
use crate::resolver::engine::IdentifierResolver;
use crate::store::AliasStore;
use crate::utils::validation;

#[derive(Args)]
pub struct AliasesArgs {
    /// Identifier to look up, as namespace:accession (e.g. NCBI:NC_000019.10)
    #[arg(required = true)]
    pub identifier: String,
}

/// Execute aliases subcommand
///
/// # Errors
///
/// Returns an error if the identifier is malformed or cannot be found.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: AliasesArgs,
    store: &dyn AliasStore,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let identifier = validation::parse_identifier(&args.identifier)?;

    let resolver = IdentifierResolver::new(store);
    let aliases = resolver.aliases(&identifier)?;

    if verbose {
        eprintln!("Found {} alias(es) for {identifier}", aliases.len());
    }

    match format {
        OutputFormat::Text => print_text_aliases(&identifier, &aliases),
        OutputFormat::Json => print_json_aliases(&identifier, &aliases)?,
        OutputFormat::Tsv => print_tsv_aliases(&aliases),
    }

    Ok(())
}

fn format_added(record: &AliasRecord) -> String {
    record.added.map(|a| a.to_string()).unwrap_or_default()
}

fn print_text_aliases(identifier: &Identifier, aliases: &[AliasRecord]) {
    println!("Aliases of {identifier}");
    println!("{}", "=".repeat(60));

    if let Some(first) = aliases.first() {
        println!("Sequence: {}", first.seq_id);
    }

    for record in aliases {
        println!("  {:<12} {}", record.namespace, record.alias);
    }
}

fn print_json_aliases(identifier: &Identifier, aliases: &[AliasRecord]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "identifier": identifier,
        "seq_id": aliases.first().map(|r| r.seq_id.as_str()),
        "aliases": aliases,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_aliases(aliases: &[AliasRecord]) {
    println!("seq_id\tnamespace\talias\tadded");
    for record in aliases {
        println!(
            "{}\t{}\t{}\t{}",
            record.seq_id,
            record.namespace,
            record.alias,
            format_added(record),
        );
    }
}
