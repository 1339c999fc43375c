use crate::domain::model::RuleKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "strkit")]
#[command(about = "Validation and formatting helpers for Chinese text data")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a single value against a rule
    Check {
        #[arg(value_enum)]
        rule: RuleKind,
        value: String,
        /// Regular expression for the `pattern` rule
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Extract `length` characters starting at `start`
    Substring {
        input: String,
        start: usize,
        length: usize,
    },

    /// Lowercase ASCII letters only
    Lower { input: String },

    /// Format a number of seconds as HH:MM:SS
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },

    /// Remove HTML tags
    StripHtml { input: String },

    /// Upgrade an http URL to https
    Https { url: String },

    /// Percent-encode text for a URL query
    UrlEncode { input: String },

    /// Run the checks of a TOML configuration over a CSV file
    Batch {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "strkit.toml")]
        config: String,

        /// Validate the configuration and show what would be checked
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["strkit", "check", "mobile-phone", "13800138000"]);
        match cli.command {
            Command::Check { rule, value, pattern } => {
                assert_eq!(rule, RuleKind::MobilePhone);
                assert_eq!(value, "13800138000");
                assert!(pattern.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_duration() {
        let cli = Cli::parse_from(["strkit", "-v", "duration", "-5"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Duration { seconds: -5 }));
    }

    #[test]
    fn test_parse_batch_defaults() {
        let cli = Cli::parse_from(["strkit", "batch", "--dry-run"]);
        match cli.command {
            Command::Batch { config, dry_run } => {
                assert_eq!(config, "strkit.toml");
                assert!(dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
