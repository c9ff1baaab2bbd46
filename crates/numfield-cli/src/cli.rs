//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "numfield",
    version,
    about = "Numeric field formatter - check edits and normalize values",
    long_about = "Drive a numeric input field from the terminal.\n\n\
                  A field is described by a JSON configuration (countInt, countDecimal,\n\
                  withPercentage, min/max, prColin, ...). Edits are checked against the\n\
                  field grammar and values are normalized the way a blur would."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Allow field values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the acceptance grammar of a field.
    Grammar(ConfigArgs),

    /// Check whether a single keystroke or paste would be admitted.
    Check(CheckArgs),

    /// Normalize a value as if the field lost focus.
    Blur(BlurArgs),

    /// Replay a scripted session of focus, key, paste and blur events.
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Field configuration file (JSON).
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub field: ConfigArgs,

    /// Current text of the field.
    #[arg(long = "text", default_value = "")]
    pub text: String,

    /// Caret position in characters (default: end of text).
    #[arg(long = "caret", value_name = "POS")]
    pub caret: Option<usize>,

    /// Treat the whole text as selected.
    #[arg(long = "select-all")]
    pub select_all: bool,

    /// Key pressed (e.g. `5`, `Decimal`, `Backspace`).
    #[arg(long = "key", conflicts_with = "paste", required_unless_present = "paste")]
    pub key: Option<String>,

    /// Text pasted from the clipboard.
    #[arg(long = "paste")]
    pub paste: Option<String>,
}

#[derive(Args)]
pub struct BlurArgs {
    #[command(flatten)]
    pub field: ConfigArgs,

    /// Raw text in the field when it loses focus.
    #[arg(long = "value", allow_hyphen_values = true)]
    pub value: String,

    /// Text the field held when it gained focus.
    #[arg(long = "focus-value", default_value = "", allow_hyphen_values = true)]
    pub focus_value: String,

    /// Override the configured reference (prColin) value.
    #[arg(long = "reference", allow_hyphen_values = true)]
    pub reference: Option<String>,
}

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub field: ConfigArgs,

    /// Session script (JSON).
    #[arg(long = "script", value_name = "PATH")]
    pub script: PathBuf,
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
