mod cli;
mod commands;

use cli::Command;
use rpsyntax_common::RpSyntaxError;
use rpsyntax_config::{toml_loader, validation, RpSyntaxConfig};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

const DEFAULT_DIRECTIVE: &str = "rpsyntax=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn load_config(path: Option<&str>) -> rpsyntax_common::Result<RpSyntaxConfig> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(Path::new(path))?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Parse a filter directive, falling back to [`DEFAULT_DIRECTIVE`].
fn parse_directive(directive: &str) -> Directive {
    directive
        .parse()
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().expect("static directive"))
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_directive(directive))
}

/// Install the subscriber before anything logs. The filter can be swapped
/// once the config file has been read.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Directive from the config file, unless `--log-level` already chose one.
fn configured_directive(cli_level: Option<&str>, config: &RpSyntaxConfig) -> Option<&'static str> {
    match cli_level {
        Some(_) => None,
        None => Some(config.logging.level.directive()),
    }
}

fn run(args: cli::Args, config: RpSyntaxConfig) -> rpsyntax_common::Result<()> {
    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Parse { colors, normalized } => {
            let (lines, errors) = commands::parse_colors(&colors, normalized);
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            for error in &errors {
                eprintln!("{error}");
            }
            if !errors.is_empty() {
                return Err(RpSyntaxError::Other(format!(
                    "{} of {} colors could not be parsed",
                    errors.len(),
                    colors.len()
                )));
            }
        }
        Command::Theme { name } => {
            write!(out, "{}", commands::theme(name.as_deref(), &config)?)?;
        }
        Command::Config => {
            writeln!(out, "{}", commands::config(&config))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let filter = init_logging(args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE));

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}; using default config");
            RpSyntaxConfig::default()
        }
    };

    if let Some(directive) = configured_directive(args.log_level.as_deref(), &config) {
        if let Err(e) = filter.reload(build_filter(directive)) {
            warn!("failed to apply logging.level: {e}");
        }
    }

    debug!("theme = {}", config.theme.name);

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
