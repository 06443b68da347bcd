//! Command-line interface definitions using clap

use clap::Parser;

/// Greeter - prints a greeting and the CPU count
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version)]
#[command(about = "Prints a greeting and the number of CPUs", long_about = None)]
pub struct Cli {
    /// Name to greet
    pub name: Option<String>,

    /// Configuration file (default: greeter.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Append library log output to this file
    #[arg(long, conflicts_with = "log_stdout")]
    pub log_file: Option<String>,

    /// Print library log output on stdout
    #[arg(long)]
    pub log_stdout: bool,

    /// Write a sample configuration file and exit
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<String>,
}

impl Cli {
    /// One-line usage text for the binary.
    pub fn usage() -> String {
        "usage: greeter [OPTIONS] <NAME>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name() {
        let cli = Cli::try_parse_from(["greeter", "Tim"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Tim"));
        assert!(cli.config.is_none());
        assert!(!cli.log_stdout);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "greeter",
            "-c",
            "custom.toml",
            "--log-file",
            "out.log",
            "Ada",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.log_file.as_deref(), Some("out.log"));
        assert_eq!(cli.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_log_targets_conflict() {
        let res = Cli::try_parse_from(["greeter", "--log-file", "a.log", "--log-stdout", "x"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_too_many_names() {
        assert!(Cli::try_parse_from(["greeter", "a", "b"]).is_err());
    }
}
