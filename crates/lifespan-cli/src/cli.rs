//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use lifespan_server::config::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(
    name = "lifespan",
    version,
    about = "Life expectancy estimator - serve the HTTP API or run a single estimate",
    long_about = "Estimate life expectancy from a birth date and lifestyle factors.\n\n\
                  The estimate starts from a country and gender baseline and applies \n\
                  fixed adjustments for smoking, exercise, stress, and BMI. It is a \n\
                  rough heuristic, not medical advice."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names and birth dates to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API.
    Serve(ServeArgs),

    /// Estimate life expectancy for one person and print the result.
    Predict(PredictArgs),

    /// List supported countries and their baseline life expectancies.
    Countries,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Birth date as YYYY-MM-DD.
    #[arg(long = "birth-date", value_name = "DATE")]
    pub birth_date: String,

    /// Name echoed back in the result.
    #[arg(long)]
    pub name: Option<String>,

    /// male, female, or anything else for unspecified.
    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub smoker: bool,

    #[arg(long = "height-cm", value_name = "CM")]
    pub height_cm: Option<f64>,

    #[arg(long = "weight-kg", value_name = "KG")]
    pub weight_kg: Option<f64>,

    /// Weekly minutes of exercise.
    #[arg(long = "exercise-mins", value_name = "MINS", allow_negative_numbers = true)]
    pub exercise_mins: Option<i64>,

    /// Stress level from 1 (low) to 5 (high).
    #[arg(long, value_name = "LEVEL", allow_negative_numbers = true)]
    pub stress: Option<i64>,

    /// usa, uk, india, japan, nigeria, or global.
    #[arg(long)]
    pub country: Option<String>,

    /// Evaluate as of this date instead of today.
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
