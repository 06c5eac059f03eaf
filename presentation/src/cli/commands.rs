//! CLI command definitions

use clap::{Parser, ValueEnum};
use multiedit_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for decomposition results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered report with header and footer
    Report,
    /// One `source → target` line per operation
    List,
    /// JSON object per instruction
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Report => DomainOutputFormat::Report,
            OutputFormat::List => DomainOutputFormat::List,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for multiedit
#[derive(Parser, Debug)]
#[command(name = "multiedit")]
#[command(author, version, about = "Decompose compound recoloring instructions into ordered steps")]
#[command(long_about = r#"
multiedit splits a compound recoloring instruction (Chinese, English or mixed)
into an ordered list of atomic "source → target" operations.

Chinese clauses are matched against literal templates first (把X变成Y, 将X改为Y,
...); clauses no template matches go through a part-of-speech scan.
English sentences are matched word by word against a composite pattern.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./multiedit.toml      Project-level config
3. ~/.config/multiedit/config.toml   Global config

Example:
  multiedit "把红球变成蓝的，然后黄色大立方体改成绿色"
  multiedit -o list "Turn the big red ball into purple, and change blue cylinder to orange"
  cat instructions.txt | multiedit -o json
"#)]
pub struct Cli {
    /// Instructions to decompose (read one per line from stdin when omitted)
    pub instructions: Vec<String>,

    /// Output format (defaults to the configured format, else report)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Only use the literal templates for Chinese clauses
    #[arg(long)]
    pub no_fallback: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Output format chosen on the command line, else `configured`
    pub fn output_format(&self, configured: Option<DomainOutputFormat>) -> DomainOutputFormat {
        self.output
            .map(Into::into)
            .or(configured)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_instructions_and_flags() {
        let cli = Cli::parse_from([
            "multiedit",
            "-vv",
            "--no-fallback",
            "-o",
            "json",
            "把红球变成蓝色",
            "turn the ball into red",
        ]);
        assert_eq!(cli.instructions, vec!["把红球变成蓝色", "turn the ball into red"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_fallback);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_output_format_precedence() {
        let cli = Cli::parse_from(["multiedit"]);
        assert!(cli.instructions.is_empty());
        assert_eq!(cli.output_format(None), DomainOutputFormat::Report);
        assert_eq!(
            cli.output_format(Some(DomainOutputFormat::List)),
            DomainOutputFormat::List
        );

        let cli = Cli::parse_from(["multiedit", "--output", "report"]);
        assert_eq!(
            cli.output_format(Some(DomainOutputFormat::Json)),
            DomainOutputFormat::Report
        );
    }
}
