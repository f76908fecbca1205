//! flarestat: command-line front end for light curve flare statistics.
//!
//! Logging goes through `env_logger`; `RUST_LOG` overrides the level chosen
//! by `--verbose`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;

use lightcurve_flares::config::{AnalysisConfig, FlareCounting};
use lightcurve_flares::io::{convert_tree, read_light_curve, read_star_list, write_summary};
use lightcurve_flares::pipeline::{analyze_curve, process_curves};

#[derive(Parser, Debug)]
#[command(
    name = "flarestat",
    version,
    about = "Flare counts and rotation periods for K2 light curves",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse every light curve under a data directory and write a summary table
    Process(ProcessArgs),
    /// Convert whitespace-delimited .dat files under a directory to .csv
    Convert {
        /// Root data directory
        #[arg(value_name = "ROOT")]
        root: PathBuf,
    },
    /// Run all analyses on a single light curve CSV and print the results
    Analyze {
        /// Light curve CSV file
        #[arg(value_name = "CSV")]
        path: PathBuf,

        #[command(flatten)]
        detector: DetectorArgs,
    },
}

#[derive(Args, Debug)]
struct DetectorArgs {
    /// Standard deviations above the mean for the flare threshold
    #[arg(short = 's', long = "std-dev", default_value_t = 1.5)]
    std_dev: f64,

    /// Moving average window size
    #[arg(short = 'N', long = "window-size", default_value_t = 10)]
    window_size: usize,

    /// Count every contiguous block of flagged derivatives instead of onsets
    #[arg(long)]
    run_length: bool,
}

impl DetectorArgs {
    fn config(&self) -> AnalysisConfig {
        let counting = if self.run_length {
            FlareCounting::ContiguousRuns
        } else {
            FlareCounting::OnsetWalk
        };
        AnalysisConfig::new(self.std_dev, self.window_size).with_counting(counting)
    }
}

#[derive(Args, Debug)]
struct ProcessArgs {
    /// Root data directory laid out as <campaign>/<star type>/<name>.csv
    #[arg(value_name = "ROOT", default_value = "data")]
    root: PathBuf,

    #[command(flatten)]
    detector: DetectorArgs,

    /// CSV list of stars to analyse (column "mdwarf_star"); all stars if omitted
    #[arg(short = 'l', long = "star-list", value_name = "FILE")]
    star_list: Option<PathBuf>,

    /// Also run the derivative detector and rotation estimator
    #[arg(long)]
    extended: bool,

    /// Output table path
    #[arg(short, long, default_value = "mdwarf_flares_new.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Process(args) => run_process(&args),
        Commands::Convert { root } => {
            let written = convert_tree(&root)
                .with_context(|| format!("failed to convert .dat files under {}", root.display()))?;
            println!("Converted {} files.", written.len());
            Ok(())
        }
        Commands::Analyze { path, detector } => run_analyze(&path, &detector.config()),
    }
}

fn run_process(args: &ProcessArgs) -> anyhow::Result<()> {
    let config = args.detector.config();
    let selection = args
        .star_list
        .as_deref()
        .map(read_star_list)
        .transpose()
        .context("failed to read star list")?;

    if let Some(list) = &selection {
        info!("selecting from {} listed stars", list.len());
    }

    let rows = process_curves(&args.root, selection.as_ref(), &config, args.extended)
        .with_context(|| format!("failed to process {}", args.root.display()))?;

    write_summary(&args.output, &rows, args.extended)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Wrote {} rows to {}.", rows.len(), args.output.display());
    Ok(())
}

fn run_analyze(path: &Path, config: &AnalysisConfig) -> anyhow::Result<()> {
    let curve = read_light_curve(path)?;
    let analysis = analyze_curve(&curve, config, true)
        .with_context(|| format!("analysis failed for {}", path.display()))?;

    println!("{} ({} samples)", path.display(), curve.len());
    println!("  threshold flares:  {}", analysis.threshold.flare_count);
    if let Some(derivative) = analysis.derivative {
        println!("  derivative flares: {}", derivative.flare_count);
    }
    if let Some(periodicity) = analysis.periodicity {
        println!(
            "  rotation: frequency {:.5} (period {:.4}), strength {:.3}",
            periodicity.dominant_frequency,
            periodicity.period(),
            periodicity.oscillation_strength
        );
    }
    Ok(())
}
