//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Download every URL of a list into a directory, skipping files that are
/// already there.
#[derive(Parser, Debug)]
#[command(name = "bulkfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Output directory, relative to the current directory
    #[arg(short, long, default_value = "js")]
    pub output: String,

    /// File holding one URL per line (`-` reads standard input)
    #[arg(short, long, default_value = "url_list.txt")]
    pub input: String,

    /// Read URLs from standard input instead of the input file
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Maximum concurrent downloads (1-1024); unbounded when absent
    #[arg(short = 'c', long, value_parser = clap::value_parser!(u16).range(1..=1024))]
    pub concurrency: Option<u16>,

    /// User-Agent sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Show progress bars
    #[arg(long)]
    pub progress: bool,

    /// Let URLs with the same file name race instead of skipping duplicates
    #[arg(long)]
    pub allow_collisions: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["bulkfetch"]).unwrap();
        assert_eq!(args.output, "js");
        assert_eq!(args.input, "url_list.txt");
        assert!(!args.stdin);
        assert_eq!(args.concurrency, None);
        assert_eq!(args.timeout, None);
        assert!(!args.progress);
        assert!(!args.allow_collisions);
        assert_eq!(args.default_log_level(), "info");
    }

    #[test]
    fn test_cli_short_flags() {
        let args =
            Args::try_parse_from(["bulkfetch", "-o", "out", "-i", "list.txt", "-c", "8"]).unwrap();
        assert_eq!(args.output, "out");
        assert_eq!(args.input, "list.txt");
        assert_eq!(args.concurrency, Some(8));
    }

    #[test]
    fn test_cli_concurrency_range() {
        assert!(Args::try_parse_from(["bulkfetch", "-c", "0"]).is_err());
        assert!(Args::try_parse_from(["bulkfetch", "-c", "2000"]).is_err());
    }

    #[test]
    fn test_cli_stdin_conflicts_with_input() {
        assert!(Args::try_parse_from(["bulkfetch", "--stdin"]).is_ok());
        assert!(Args::try_parse_from(["bulkfetch", "--stdin", "-i", "list.txt"]).is_err());
    }

    #[test]
    fn test_cli_log_levels() {
        let args = Args::try_parse_from(["bulkfetch", "-vv"]).unwrap();
        assert_eq!(args.default_log_level(), "trace");

        let args = Args::try_parse_from(["bulkfetch", "-q"]).unwrap();
        assert_eq!(args.default_log_level(), "error");
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["bulkfetch", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
