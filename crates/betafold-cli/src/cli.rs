use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "BetaFold Contributors",
    version,
    about = "BetaFold CLI - Topology diagrams, contact maps and sequence statistics for 2D protein structure reports.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for processing multi-record inputs.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a full prediction report (segments, layout, statistics, ribbon, contact map) for
    /// every record of a sequence file.
    Predict(PredictArgs),
    /// Compute molecular weight, isoelectric point and domains for every record of a sequence file.
    Analyze(AnalyzeArgs),
    /// Run-length encode a secondary structure label string into topology segments.
    Segment(SegmentArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON on stdout
    Json,
    /// Human-readable tables on stdout
    #[default]
    Text,
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    // --- Core Arguments ---
    /// Path to the input sequence file (FASTA-like, one or more records).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory to write per-record JSON reports and SVG renderings into.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Secondary structure labels (H/E/C) to use instead of the random generator.
    /// Only valid for single-record inputs.
    #[arg(long, value_name = "LABELS")]
    pub structure: Option<String>,

    /// Contact matrix CSV to use instead of the random generator.
    /// Only valid for single-record inputs.
    #[arg(long, value_name = "PATH")]
    pub contacts: Option<PathBuf>,

    /// Output format for the report printed on stdout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: PipelineOverrides,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S layout.unit-width=6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the input sequence file (FASTA-like, one or more records).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for the summaries printed on stdout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: PipelineOverrides,

    /// Set a specific configuration value, overriding the config file.
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `segment` subcommand.
#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// Secondary structure label string, e.g. HHHEEECCCHH.
    #[arg(required = true, value_name = "LABELS")]
    pub labels: String,

    /// Output format for the segments printed on stdout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Command-line overrides shared by the commands that run the pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct PipelineOverrides {
    /// Seed for the random generator and heuristic estimators.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Isoelectric point model: 'heuristic' or 'titration'.
    #[arg(long, value_name = "MODEL")]
    pub isoelectric_model: Option<String>,

    /// Override the topology lane height.
    #[arg(long, value_name = "FLOAT")]
    pub lane_height: Option<f64>,

    /// Override the topology width per residue.
    #[arg(long, value_name = "FLOAT")]
    pub unit_width: Option<f64>,

    /// Override the contact map canvas size.
    #[arg(long, value_name = "FLOAT")]
    pub canvas_size: Option<f64>,

    /// Override the contact map dot size.
    #[arg(long, value_name = "FLOAT")]
    pub dot_size: Option<f64>,

    /// Override the random contact density in [0, 1].
    #[arg(long, value_name = "FLOAT")]
    pub contact_density: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_parses_overrides_and_set_values() {
        let cli = Cli::parse_from([
            "betafold",
            "-vv",
            "predict",
            "-i",
            "in.fasta",
            "--seed",
            "7",
            "--unit-width",
            "6",
            "-S",
            "layout.gap=20",
            "--format",
            "json",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.input, PathBuf::from("in.fasta"));
        assert_eq!(args.overrides.seed, Some(7));
        assert_eq!(args.overrides.unit_width, Some(6.0));
        assert_eq!(args.set_values, vec!["layout.gap=20"]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn segment_takes_positional_labels() {
        let cli = Cli::parse_from(["betafold", "segment", "HHEC"]);
        let Commands::Segment(args) = cli.command else {
            panic!("expected segment");
        };
        assert_eq!(args.labels, "HHEC");
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["betafold", "-q", "-v", "segment", "H"]).is_err());
    }
}
