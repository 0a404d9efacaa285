//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// EMAS Metal corporate website server
#[derive(Parser, Debug)]
#[command(name = "emasmetal")]
#[command(version)]
#[command(about = "Server-rendered corporate website for EMAS Metal", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Fetch references and gallery once and report the result
    CheckApi,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Write a config file with every default filled in
    Generate {
        /// Output file path (default: config.example.toml)
        #[arg(long = "output", short = 'o')]
        output_path: Option<String>,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["emasmetal"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["emasmetal", "check-api", "-c", "prod.toml"]);
        assert_eq!(cli.command, Some(Commands::CheckApi));
        assert_eq!(cli.config.as_deref(), Some("prod.toml"));
    }

    #[test]
    fn test_config_generate_output() {
        let cli = Cli::parse_from(["emasmetal", "config", "generate", "--output", "x.toml"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Generate {
                    output_path: Some("x.toml".into()),
                    force: false
                }
            })
        );
    }
}
