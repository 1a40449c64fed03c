//! bom-tools: BOM spreadsheet generation and comparison for ERP imports.

use anyhow::{bail, Result};
use bom_tools::{
    builder::{BomSpec, GroupRows, RandomGroup},
    cli,
    config::{load_spec, CompareConfig, GenerateConfig},
    generate::FieldSet,
    model::{Column, PartRow},
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bom-tools")]
#[command(version)]
#[command(about = "Generate and compare BOM Compare import spreadsheets", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Random BOM: 5 components under TOP-100, 2 of them Manufactured
    bom-tools generate -p TOP-100 -c 5 --manufactured 2 -o my_bom.xlsx

    # Deep tree: 2 random Level 2 parts under every Manufactured Level 1 part
    bom-tools generate -p TOP-100 -c 4 --manufactured 2 --level2-per-parent 2

    # Full control via a JSON spec tree
    bom-tools generate --spec bom_spec.json -o my_bom.xlsx

    # Diff two BOM files into an xlsx report
    bom-tools compare old_bom.xlsx new_bom.xlsx -o comparison.xlsx

    # Blank template with the styled header row
    bom-tools create-template -o template.xlsx")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `generate` subcommand
#[derive(Parser)]
struct GenerateArgs {
    /// Parent (Level 0) part number
    #[arg(short = 'p', long)]
    parent_part: Option<String>,

    /// Parent part description
    #[arg(long)]
    parent_description: Option<String>,

    /// Parent part quantity
    #[arg(long, default_value = "1")]
    parent_quantity: f64,

    /// Parent part revision (propagated with --apply-revision-to-all)
    #[arg(long)]
    parent_revision: Option<String>,

    /// Parent part location (propagated with --apply-location-to-all)
    #[arg(long)]
    parent_location: Option<String>,

    /// Parent part source code
    #[arg(long, default_value = "M")]
    parent_source: String,

    /// Number of random Level 1 components
    #[arg(short = 'c', long, default_value = "2")]
    children: usize,

    /// How many Level 1 components get Source Manufactured to Job (F)
    #[arg(long, default_value = "0")]
    manufactured: usize,

    /// Columns to fill with random data (comma separated header names)
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,

    /// Use 20-50 character long-form part numbers
    #[arg(long)]
    long_part_numbers: bool,

    /// Generate this many random Level 2 parts under every Manufactured
    /// Level 1 part
    #[arg(long)]
    level2_per_parent: Option<usize>,

    /// How many of each Level 2 batch get Source Manufactured to Job (F)
    #[arg(long, default_value = "0")]
    level2_manufactured: usize,

    /// Generate this many random Level 3 parts under every Manufactured
    /// Level 2 part
    #[arg(long)]
    level3_per_parent: Option<usize>,

    /// Per-level sequence spacing (1, 10, 100, 1000, 10000)
    #[arg(long, default_value = "100")]
    sequence_increment: u32,

    /// Apply the parent Revision to every Level 1/2/3 part
    #[arg(long)]
    apply_revision_to_all: bool,

    /// Apply the parent Location to every Level 1/2/3 part
    #[arg(long)]
    apply_location_to_all: bool,

    /// Full BOM spec tree as a JSON file (overrides the flags above)
    #[arg(short = 's', long)]
    spec: Option<PathBuf>,

    /// Template file whose header row is validated before writing
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Proceed despite a template header mismatch
    #[arg(long)]
    allow_header_mismatch: bool,

    /// Output BOM file path
    #[arg(short = 'o', long, default_value = "output_bom.xlsx")]
    output: PathBuf,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the old/baseline BOM file
    old: PathBuf,

    /// Path to the new BOM file
    new: PathBuf,

    /// Write a multi-sheet xlsx comparison report to this path
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Stdout report format
    #[arg(short = 'f', long, default_value = "summary")]
    format: ReportFormat,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `create-template` subcommand
#[derive(Parser)]
struct CreateTemplateArgs {
    /// Output template file path
    #[arg(short = 'o', long)]
    output: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a BOM spreadsheet from flags or a JSON spec tree
    Generate(GenerateArgs),

    /// Compare two BOM files and report added/removed/modified items
    Compare(CompareArgs),

    /// Create a blank BOM template with the styled header row
    CreateTemplate(CreateTemplateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Generate(args) => {
            let spec = spec_from_args(&args)?;
            let config = GenerateConfig {
                template: args.template,
                output: args.output,
                allow_header_mismatch: args.allow_header_mismatch,
                spec,
            };
            cli::run_generate(config)
        }

        Commands::Compare(args) => {
            let config = CompareConfig {
                old: args.old,
                new: args.new,
                report: args.output,
                format: args.format,
                fail_on_change: args.fail_on_change,
            };
            let exit_code = cli::run_compare(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::CreateTemplate(args) => cli::run_create_template(&args.output),

        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bom-tools", &mut io::stdout());
            Ok(())
        }
    }
}

/// Build the spec tree from CLI flags, or load it from `--spec`.
fn spec_from_args(args: &GenerateArgs) -> Result<BomSpec> {
    if let Some(path) = &args.spec {
        return Ok(load_spec(path)?);
    }
    let Some(parent_part) = args.parent_part.clone() else {
        bail!("either --parent-part or --spec is required");
    };

    let fields = parse_fields(&args.fields)?;
    let parent = PartRow {
        part_no: Some(parent_part),
        description: args.parent_description.clone(),
        quantity: Some(args.parent_quantity),
        um: Some("EA".to_string()),
        productline: Some("FG".to_string()),
        source: Some(args.parent_source.clone()),
        revision: args.parent_revision.clone(),
        location: args.parent_location.clone(),
        ..PartRow::default()
    };

    Ok(BomSpec {
        parent,
        level1: GroupRows::Random(RandomGroup {
            count: args.children,
            fields: fields.clone(),
            manufactured_count: args.manufactured,
            long_part_numbers: args.long_part_numbers,
        }),
        per_parent_level2: args.level2_per_parent.map(|count| RandomGroup {
            count,
            fields: fields.clone(),
            manufactured_count: args.level2_manufactured,
            long_part_numbers: args.long_part_numbers,
        }),
        level2: Vec::new(),
        per_parent_level3: args.level3_per_parent.map(|count| RandomGroup {
            count,
            fields: fields.clone(),
            manufactured_count: 0,
            long_part_numbers: args.long_part_numbers,
        }),
        level3: Vec::new(),
        sequence_increment: args.sequence_increment,
        propagate_revision: args.apply_revision_to_all,
        propagate_location: args.apply_location_to_all,
    })
}

/// Parse `--fields` header names into a field set.
///
/// Defaults to PartNo, Description, Quantity, Cost when not given — the
/// structural columns (Parent, Sequence, Level) are always populated by
/// the builder.
fn parse_fields(names: &[String]) -> Result<FieldSet> {
    if names.is_empty() {
        return Ok([
            Column::PartNo,
            Column::Description,
            Column::Quantity,
            Column::Cost,
        ]
        .into_iter()
        .collect());
    }
    let mut fields = FieldSet::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Column::from_name(trimmed) {
            Some(column) => {
                fields.insert(column);
            }
            None => bail!(
                "unknown column {trimmed:?}; expected one of: {}",
                bom_tools::TEMPLATE_HEADERS.join(", ")
            ),
        }
    }
    Ok(fields)
}
