mod data;
mod demo;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use parcoords::{render, PlotConfig, RenderOutput};
use tracing::info;
use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

/// Parallel coordinates layout and geometry from tabular data
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a CSV file to JSON plot geometry
    Render {
        /// Path to a CSV file with a header row
        csv: PathBuf,

        /// Axis columns in plotting order, comma separated
        #[arg(long, value_delimiter = ',')]
        cols: Vec<String>,

        /// Color lines by the values of this column
        #[arg(long, conflicts_with = "color_by")]
        rank: Option<String>,

        /// Color lines by the categories of this column
        #[arg(long)]
        color_by: Option<String>,

        /// Transform applied to every axis (log, winsorize, robust, quantile)
        #[arg(short, long)]
        transform: Option<String>,

        /// JSON file with the full plot configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path for the JSON result (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for categorical jitter
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render a synthetic enterprise dataset
    Demo {
        /// Output path for the JSON result (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of generated rows
        #[arg(long, default_value_t = 1000)]
        rows: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_span_events(FmtSpan::CLOSE))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            csv,
            cols,
            rank,
            color_by,
            transform,
            config,
            output,
            seed,
        } => {
            let mut plot_config = match config {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    PlotConfig::from_json(&json)?
                }
                None => PlotConfig::default(),
            };
            if !cols.is_empty() {
                plot_config.cols = cols;
            }
            if let Some(rank) = rank {
                plot_config = plot_config.with_rank(rank);
            }
            if let Some(color_by) = color_by {
                plot_config = plot_config.with_category(color_by);
            }
            if let Some(transform) = transform {
                plot_config = plot_config.with_transform(transform);
            }
            if seed.is_some() {
                plot_config = plot_config.with_seed(seed);
            }

            let table = data::load_csv(&csv)?;
            info!(
                "loaded {} rows and {} columns from {}",
                table.num_rows(),
                table.num_columns(),
                csv.display()
            );
            let result = render(&table, &plot_config)?;
            write_output(&result, output.as_deref())
        }
        Commands::Demo { output, rows, seed } => {
            let table = demo::demo_table(rows, seed)?;
            let result = render(&table, &demo::demo_config(seed))?;
            write_output(&result, output.as_deref())
        }
    }
}

fn write_output(result: &RenderOutput, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
