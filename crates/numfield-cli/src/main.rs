//! Numeric field CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use numfield_cli::commands::{
    BlurRequest, CheckInput, CheckRequest, load_config, load_script, run_blur, run_check,
    run_grammar, run_replay,
};
use numfield_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{BlurArgs, CheckArgs, Cli, Command, LogFormatArg, LogLevelArg, ReplayArgs};
use crate::summary::{print_blur, print_check, print_grammar, print_replay};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run a subcommand. Rejected edits and reported diagnostics exit with 1.
fn run(command: Command) -> Result<i32> {
    match command {
        Command::Grammar(args) => {
            let pattern = run_grammar(load_config(&args.config)?)?;
            print_grammar(&pattern);
            Ok(0)
        }
        Command::Check(args) => {
            let result = run_check(load_config(&args.field.config)?, &check_request(args))?;
            print_check(&result);
            Ok(i32::from(result.is_rejected()))
        }
        Command::Blur(args) => {
            let config = load_config(&args.field.config)?;
            let result = run_blur(config, &blur_request(args))?;
            print_blur(&result);
            Ok(i32::from(!result.diagnostics.is_empty()))
        }
        Command::Replay(ReplayArgs { field, script }) => {
            let config = load_config(&field.config)?;
            let report = run_replay(config, &load_script(&script)?)?;
            print_replay(&report);
            Ok(i32::from(report.has_diagnostics()))
        }
    }
}

fn check_request(args: CheckArgs) -> CheckRequest {
    let input = match (args.key, args.paste) {
        (_, Some(text)) => CheckInput::Paste(text),
        (Some(key), None) => CheckInput::Key(key),
        // clap requires one of the two
        (None, None) => CheckInput::Paste(String::new()),
    };
    CheckRequest {
        text: args.text,
        caret: args.caret,
        select_all: args.select_all,
        input,
    }
}

fn blur_request(args: BlurArgs) -> BlurRequest {
    BlurRequest {
        value: args.value,
        focus_value: args.focus_value,
        reference: args.reference,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
