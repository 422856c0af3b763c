use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use riscos_charset::ErrorPolicy;

/// Convert text between the RISC OS alphabets and UTF-8.
#[derive(Debug, Parser)]
#[command(name = "rocharset", about, version)]
pub struct Cli {
    /// Log filter directive (e.g. 'debug', 'riscos_charset=trace')
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available alphabets
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode bytes in a RISC OS alphabet to UTF-8
    Decode {
        /// Alphabet name, 'alphabet-N', 'riscos-alphabet-N', or number
        #[arg(long, short = 'a', value_name = "KEY")]
        alphabet: String,

        /// How to handle bytes with no mapping. Default: strict
        #[arg(long, value_enum)]
        errors: Option<PolicyArg>,

        /// Input file. Default: standard input
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Encode UTF-8 text into a RISC OS alphabet
    Encode {
        /// Alphabet name, 'alphabet-N', 'riscos-alphabet-N', or number
        #[arg(long, short = 'a', value_name = "KEY")]
        alphabet: String,

        /// How to handle characters with no byte. Default: replace
        #[arg(long, value_enum)]
        errors: Option<PolicyArg>,

        /// Input file. Default: standard input
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Report byte positions with no character mapping
    Check {
        /// Only check this alphabet. Default: all
        #[arg(long, short = 'a', value_name = "KEY")]
        alphabet: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for list/check subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON output
    Json,
}

/// Error policy for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Fail on the first unconvertible unit
    Strict,
    /// Drop unconvertible units
    Ignore,
    /// Substitute U+FFFD (decode) or '?' (encode)
    Replace,
}

impl PolicyArg {
    pub fn to_policy(self) -> ErrorPolicy {
        match self {
            PolicyArg::Strict => ErrorPolicy::Strict,
            PolicyArg::Ignore => ErrorPolicy::Ignore,
            PolicyArg::Replace => ErrorPolicy::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_list_defaults_to_text() {
        let cli = Cli::parse_from(["rocharset", "list"]);
        match cli.command {
            Commands::List { ref format } => {
                assert!(matches!(format, OutputFormat::Text));
            }
            _ => panic!("expected List subcommand"),
        }
    }

    #[test]
    fn parse_list_json() {
        let cli = Cli::parse_from(["rocharset", "list", "--format", "json"]);
        match cli.command {
            Commands::List { ref format } => {
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected List subcommand"),
        }
    }

    #[test]
    fn parse_decode_with_file_and_policy() {
        let cli = Cli::parse_from([
            "rocharset",
            "decode",
            "--alphabet",
            "riscos-latin1",
            "--errors",
            "replace",
            "input.txt",
        ]);
        match cli.command {
            Commands::Decode {
                ref alphabet,
                errors,
                ref file,
            } => {
                assert_eq!(alphabet, "riscos-latin1");
                assert!(matches!(errors, Some(PolicyArg::Replace)));
                assert_eq!(file.as_deref(), Some(std::path::Path::new("input.txt")));
            }
            _ => panic!("expected Decode subcommand"),
        }
    }

    #[test]
    fn parse_decode_reads_stdin_by_default() {
        let cli = Cli::parse_from(["rocharset", "decode", "-a", "101"]);
        match cli.command {
            Commands::Decode {
                ref alphabet,
                errors,
                ref file,
            } => {
                assert_eq!(alphabet, "101");
                assert!(errors.is_none());
                assert!(file.is_none());
            }
            _ => panic!("expected Decode subcommand"),
        }
    }

    #[test]
    fn parse_encode_with_ignore() {
        let cli = Cli::parse_from([
            "rocharset",
            "encode",
            "--alphabet",
            "alphabet-105",
            "--errors",
            "ignore",
        ]);
        match cli.command {
            Commands::Encode {
                ref alphabet,
                errors,
                ..
            } => {
                assert_eq!(alphabet, "alphabet-105");
                assert_eq!(errors.map(PolicyArg::to_policy), Some(ErrorPolicy::Ignore));
            }
            _ => panic!("expected Encode subcommand"),
        }
    }

    #[test]
    fn parse_check_all() {
        let cli = Cli::parse_from(["rocharset", "check"]);
        match cli.command {
            Commands::Check {
                ref alphabet,
                ref format,
            } => {
                assert!(alphabet.is_none());
                assert!(matches!(format, OutputFormat::Text));
            }
            _ => panic!("expected Check subcommand"),
        }
    }

    #[test]
    fn parse_global_log_level() {
        let cli = Cli::parse_from(["rocharset", "list", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn decode_requires_alphabet() {
        let result = Cli::try_parse_from(["rocharset", "decode"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = Cli::try_parse_from(["rocharset", "decode", "-a", "101", "--errors", "lax"]);
        assert!(result.is_err());
    }

    #[test]
    fn policy_args_map_to_policies() {
        assert_eq!(PolicyArg::Strict.to_policy(), ErrorPolicy::Strict);
        assert_eq!(PolicyArg::Ignore.to_policy(), ErrorPolicy::Ignore);
        assert_eq!(PolicyArg::Replace.to_policy(), ErrorPolicy::Replace);
    }
}
