use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fast Food Finder: spend a budget across one meal per store
#[derive(Parser, Debug)]
#[command(name = "fastfood-finder")]
#[command(version)]
#[command(about = "Pick one affordable fast food meal per store within a budget")]
#[command(
    long_about = "Fast Food Finder walks the store catalog in order and picks the most expensive item each store offers that still fits the remaining budget. Run without a command for the interactive finder."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Configuration file (defaults to ./fastfood-finder.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive finder (default)
    #[cfg(feature = "tui")]
    Tui {
        /// Starting budget
        #[arg(short, long)]
        budget: Option<u32>,

        /// Catalog file to use instead of the built-in stores
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Run one selection and print the picks
    Pick {
        /// Budget to spend
        #[arg(short, long)]
        budget: Option<u32>,

        /// Catalog file to use instead of the built-in stores
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the store catalog
    Menu {
        /// Catalog file to use instead of the built-in stores
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "tui")]
            Commands::Tui { .. } => "tui",
            Commands::Pick { .. } => "pick",
            Commands::Menu { .. } => "menu",
        }
    }

    /// Whether this command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        #[cfg(feature = "tui")]
        {
            matches!(self, Commands::Tui { .. })
        }
        #[cfg(not(feature = "tui"))]
        {
            false
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_pick_parsing() {
        let cli = Cli::parse_from(["fastfood-finder", "pick", "--budget", "150", "--format", "json"]);

        match cli.command {
            Some(Commands::Pick {
                budget,
                catalog,
                format,
            }) => {
                assert_eq!(budget, Some(150));
                assert!(catalog.is_none());
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_no_command_and_globals() {
        let cli = Cli::parse_from(["fastfood-finder", "--log-level", "debug"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
    }

    #[test]
    fn test_menu_defaults() {
        let cli = Cli::parse_from(["fastfood-finder", "menu", "--config", "my.yaml"]);
        let command = cli.command.unwrap();
        assert_eq!(command.name(), "menu");
        assert!(!command.is_interactive());
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
    }

    #[test]
    fn test_budget_must_be_non_negative() {
        assert!(Cli::try_parse_from(["fastfood-finder", "pick", "--budget", "-5"]).is_err());
    }
}
