//! Resume profiler: turn resume files into structured candidate profiles

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_profiler::cli::{self, Cli, Commands, ConfigAction};
use resume_profiler::output::formatter::save_report_to_file;
use resume_profiler::output::{ProfileReport, ReportGenerator};
use resume_profiler::{Config, InputManager, Result, ResumeParser, ResumeProfilerError};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse {
            files,
            mime,
            output,
            save,
        } => {
            let format = match output {
                Some(output) => {
                    cli::parse_output_format(&output).map_err(ResumeProfilerError::InvalidInput)?
                }
                None => config.output.format,
            };

            let parser = Arc::new(ResumeParser::with_config(&config)?);
            info!("Parsing {} file(s)", files.len());

            let progress = (files.len() > 1).then(|| {
                let bar = ProgressBar::new(files.len() as u64);
                bar.set_style(
                    ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            });

            let mut tasks = Vec::with_capacity(files.len());
            for path in files {
                let parser = Arc::clone(&parser);
                let mime = mime.clone();
                let progress = progress.clone();
                tasks.push(tokio::spawn(async move {
                    let report = parse_file(parser, path, mime).await;
                    if let Some(bar) = &progress {
                        bar.set_message(report.file_name.clone());
                        bar.inc(1);
                    }
                    report
                }));
            }

            let mut reports = Vec::with_capacity(tasks.len());
            for task in tasks {
                let report = task.await.map_err(|e| {
                    ResumeProfilerError::Processing(format!("Parse task failed: {}", e))
                })?;
                reports.push(report);
            }
            if let Some(bar) = progress {
                bar.finish_and_clear();
            }

            // Colors never go to files.
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, config.output.pretty_json);
            let rendered = generator.generate_report(&reports, &format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    info!("Saved {} report(s) to {}", reports.len(), path.display());
                }
                None => println!("{}", rendered),
            }

            let failures = reports.iter().filter(|r| r.is_failure()).count();
            if failures > 0 {
                warn!("{} of {} file(s) could not be parsed", failures, reports.len());
            }
        }

        Commands::Skills => {
            let parser = ResumeParser::with_config(&config)?;
            let matcher = parser.skill_matcher();
            println!("{} skills recognized:\n", matcher.skill_count());
            for skill in matcher.skills() {
                println!("  • {}", skill);
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeProfilerError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("# {}\n{}", path.display(), content);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Load and parse one file; failures become a failed report instead of
/// aborting the batch.
async fn parse_file(parser: Arc<ResumeParser>, path: PathBuf, mime: Option<String>) -> ProfileReport {
    let label = path.display().to_string();

    let document = match InputManager::load(&path, mime.as_deref()).await {
        Ok(document) => document,
        Err(e) => {
            warn!("Could not read {}: {}", label, e);
            return ProfileReport::failed(label, &e);
        }
    };

    // Decoders are CPU bound, keep them off the async workers.
    let parsed = tokio::task::spawn_blocking(move || {
        parser.parse(&document.bytes, &document.mime_type, &document.file_name)
    })
    .await;

    match parsed {
        Ok(Ok(outcome)) => ProfileReport::parsed(label, outcome),
        Ok(Err(e)) => {
            if e.is_decode_stage() {
                warn!("Could not parse {}: {}", label, e);
            } else {
                error!("Failed while parsing {}: {}", label, e);
            }
            ProfileReport::failed(label, &e)
        }
        Err(e) => ProfileReport::failed(
            label,
            &ResumeProfilerError::Processing(format!("Parser panicked: {}", e)),
        ),
    }
}
