//! Configuration management for the resume profiler

use crate::error::{Result, ResumeProfilerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Thresholds used by the extraction heuristics. Lengths are counted in
/// grapheme clusters and compared strictly (`len > threshold`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// How many normalized lines from the top are searched for a name.
    pub name_scan_lines: usize,
    pub summary_max_lines: usize,
    pub summary_min_chars: usize,
    pub position_min_chars: usize,
    pub company_min_chars: usize,
    pub description_min_chars: usize,
    pub degree_min_chars: usize,
    pub institution_min_chars: usize,
    /// Appended after the curated skill dictionary.
    pub extra_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            name_scan_lines: 5,
            summary_max_lines: 3,
            summary_min_chars: 50,
            position_min_chars: 5,
            company_min_chars: 3,
            description_min_chars: 10,
            degree_min_chars: 5,
            institution_min_chars: 3,
            extra_skills: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ResumeProfilerError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeProfilerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-profiler")
            .join("config.toml")
    }
}
