use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use storefront_core::{Encoding, SCHEMA_VERSION};
use storefront_loader::{LoaderConfig, commands};
use storefront_observability::LogFormat;

#[derive(Parser)]
#[command(
    name = "storefront-loader",
    version,
    about = "Convert and inspect storefront catalog seed data"
)]
struct Cli {
    /// YAML config file (defaults to ./storefront-loader.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format: json or text
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV catalog export into products.yaml and categories.yaml
    Convert {
        /// CSV file with a header row
        csv: PathBuf,

        /// Output directory (overrides config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Check a products file for records with empty ids and duplicate ids
    Validate {
        /// Products file (.yaml, .yml or .json)
        file: PathBuf,

        /// Also fail when an id appears more than once
        #[arg(long)]
        strict: bool,
    },
    /// Print a single product by id
    Show {
        /// Products file (.yaml, .yml or .json)
        file: PathBuf,

        id: String,

        /// Output format: json or yaml
        #[arg(long, default_value = "yaml")]
        format: Encoding,
    },
    /// Print the products that belong to the given categories
    Sample {
        /// Products file (.yaml, .yml or .json)
        file: PathBuf,

        /// Category to include (repeatable)
        #[arg(long = "category", required = true)]
        categories: Vec<String>,

        /// Output format: json or yaml
        #[arg(long, default_value = "yaml")]
        format: Encoding,
    },
    /// Print the record schema version this loader writes
    SchemaVersion,
}

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the real environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = LoaderConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    storefront_observability::init(config.log_format);

    match cli.command {
        Commands::Convert { csv, out_dir } => {
            if let Some(out_dir) = out_dir {
                config.out_dir = out_dir;
            }
            let report = commands::convert(&csv, &config)
                .with_context(|| format!("failed to convert {}", csv.display()))?;
            println!(
                "wrote {} products to {} and {} categories to {}",
                report.products,
                report.files.products.display(),
                report.categories,
                report.files.categories.display()
            );
        }
        Commands::Validate { file, strict } => {
            let run = if strict {
                commands::validate_strict
            } else {
                commands::validate
            };
            let report = run(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            if !report.is_valid() {
                bail!(
                    "{} of {} records in {} are not initialized",
                    report.uninitialized.len(),
                    report.total,
                    file.display()
                );
            }
            println!("{}: {} records ok", file.display(), report.total);
        }
        Commands::Show { file, id, format } => {
            let out = commands::show(&file, &id, format)
                .with_context(|| format!("failed to show {id} from {}", file.display()))?;
            print!("{out}");
            if format == Encoding::Json {
                println!();
            }
        }
        Commands::Sample {
            file,
            categories,
            format,
        } => {
            let out = commands::sample(&file, &categories, format)
                .with_context(|| format!("failed to sample {}", file.display()))?;
            print!("{out}");
            if format == Encoding::Json {
                println!();
            }
        }
        Commands::SchemaVersion => println!("{SCHEMA_VERSION}"),
    }

    Ok(())
}
