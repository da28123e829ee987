//! CLI interface for the resume profiler

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-profiler")]
#[command(about = "Extract structured candidate profiles from resume files")]
#[command(long_about = "Parse PDF, DOCX, ODT, RTF, TXT and Markdown resumes into contact details, skills, work history, education and summary")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one or more resume files
    Parse {
        /// Resume files (PDF, DOCX, ODT, RTF, TXT, MD; images are reported as needing OCR)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Declared MIME type, applied to every file instead of guessing from the extension
        #[arg(short, long)]
        mime: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the skills the matcher recognizes
    Skills,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand_arguments() {
        let cli = Cli::try_parse_from([
            "resume-profiler",
            "parse",
            "a.pdf",
            "b.docx",
            "--output",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Parse { files, output, mime, .. } => {
                assert_eq!(files.len(), 2);
                assert_eq!(output.as_deref(), Some("json"));
                assert!(mime.is_none());
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }
}
