use clap::{Parser, Subcommand};

/// rpsyntax: hex color parsing and syntax theme inspection.
#[derive(Parser, Debug)]
#[command(name = "rpsyntax", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (e.g. `rpsyntax=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse hex colors (`#RGB`, `#RRGGBB`, `#RRGGBBAA`).
    Parse {
        /// Colors to parse; the leading `#` is optional.
        #[arg(required = true)]
        colors: Vec<String>,

        /// Print channels as floats in [0, 1].
        #[arg(short, long)]
        normalized: bool,
    },

    /// Load a theme and print its resolved colors.
    Theme {
        /// Theme name or path; defaults to the configured theme.
        name: Option<String>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
