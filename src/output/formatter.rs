//! Output formatters for parsed profiles

use crate::config::OutputFormat;
use crate::error::{Result, ResumeProfilerError};
use crate::output::report::{ProfileReport, ReportStatus};
use crate::processing::profile::{ParseOutcome, ParsedProfile};
use colored::{Color, Colorize};
use std::fmt::Write;
use std::path::Path;

/// Trait for rendering a batch of parse reports
pub trait OutputFormatter {
    fn format_reports(&self, reports: &[ProfileReport]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON output for API integration and storage
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown output for sharing
pub struct MarkdownFormatter;

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn fmt_err(err: std::fmt::Error) -> ResumeProfilerError {
    ResumeProfilerError::OutputFormatting(err.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn field(&self, out: &mut String, label: &str, value: Option<&str>) -> Result<()> {
        let value = match value {
            Some(v) => v.to_string(),
            None => self.colorize("not found", Color::BrightBlack),
        };
        writeln!(out, "{:<10} {}", label, value).map_err(fmt_err)
    }

    fn format_profile(&self, out: &mut String, profile: &ParsedProfile) -> Result<()> {
        out.push_str(&self.format_header("Contact", 2));
        self.field(out, "Name", profile.full_name().as_deref())?;
        self.field(out, "Email", profile.email.as_deref())?;
        self.field(out, "Phone", profile.phone.as_deref())?;
        self.field(out, "LinkedIn", profile.linked_in.as_deref())?;

        if let Some(summary) = &profile.summary {
            out.push_str(&self.format_header("Summary", 2));
            writeln!(out, "{}", summary).map_err(fmt_err)?;
        }

        out.push_str(&self.format_header(&format!("Skills ({})", profile.skills.len()), 2));
        if profile.skills.is_empty() {
            writeln!(out, "{}", self.colorize("none detected", Color::BrightBlack))
                .map_err(fmt_err)?;
        } else {
            writeln!(out, "{}", self.colorize(&profile.skills.join(", "), Color::Cyan))
                .map_err(fmt_err)?;
        }

        out.push_str(&self.format_header(
            &format!("Experience ({})", profile.work_experience.len()),
            2,
        ));
        for entry in &profile.work_experience {
            writeln!(
                out,
                "{} {} - {}",
                self.colorize(&format!("{}–{}", entry.start_date, entry.end_date), Color::Yellow),
                entry.position,
                entry.company
            )
            .map_err(fmt_err)?;
            if let Some(description) = &entry.description {
                writeln!(out, "    {}", description).map_err(fmt_err)?;
            }
        }

        out.push_str(&self.format_header(
            &format!("Education ({})", profile.education.len()),
            2,
        ));
        for entry in &profile.education {
            writeln!(
                out,
                "{} {} - {}",
                self.colorize(&entry.graduation_year, Color::Yellow),
                entry.degree,
                entry.institution
            )
            .map_err(fmt_err)?;
        }
        Ok(())
    }

    fn format_outcome(&self, out: &mut String, outcome: &ParseOutcome) -> Result<()> {
        if outcome.requires_ocr {
            let message = outcome.message.as_deref().unwrap_or_default();
            writeln!(out, "{}", self.colorize(message, Color::Yellow)).map_err(fmt_err)?;
            return Ok(());
        }
        self.format_profile(out, &outcome.profile)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_reports(&self, reports: &[ProfileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            output.push_str(&self.format_header(&report.file_name, 1));
            match &report.status {
                ReportStatus::Parsed { result } => self.format_outcome(&mut output, result)?,
                ReportStatus::Failed { error } => {
                    writeln!(output, "{}", self.colorize(error, Color::Red)).map_err(fmt_err)?;
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_reports(&self, reports: &[ProfileReport]) -> Result<String> {
        // A single file prints as one object rather than a one-element array.
        let value = match reports {
            [single] => serde_json::to_value(single)?,
            many => serde_json::to_value(many)?,
        };

        if self.pretty {
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(&value)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn format_profile(out: &mut String, profile: &ParsedProfile) -> std::fmt::Result {
        writeln!(out, "| Field | Value |")?;
        writeln!(out, "|---|---|")?;
        let rows = [
            ("Name", profile.full_name()),
            ("Email", profile.email.clone()),
            ("Phone", profile.phone.clone()),
            ("LinkedIn", profile.linked_in.clone()),
        ];
        for (label, value) in rows {
            writeln!(out, "| {} | {} |", label, value.as_deref().unwrap_or("—"))?;
        }

        if let Some(summary) = &profile.summary {
            writeln!(out, "\n### Summary\n\n{}", summary)?;
        }

        writeln!(out, "\n### Skills\n")?;
        if profile.skills.is_empty() {
            writeln!(out, "_None detected_")?;
        } else {
            writeln!(out, "{}", profile.skills.join(", "))?;
        }

        writeln!(out, "\n### Experience\n")?;
        for entry in &profile.work_experience {
            writeln!(
                out,
                "- **{}**, {} ({} – {})",
                entry.position, entry.company, entry.start_date, entry.end_date
            )?;
            if let Some(description) = &entry.description {
                writeln!(out, "  {}", description)?;
            }
        }

        writeln!(out, "\n### Education\n")?;
        for entry in &profile.education {
            writeln!(
                out,
                "- **{}**, {} ({})",
                entry.degree, entry.institution, entry.graduation_year
            )?;
        }
        Ok(())
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_reports(&self, reports: &[ProfileReport]) -> Result<String> {
        let mut output = String::from("# Parsed Resumes\n");

        for report in reports {
            writeln!(output, "\n## {}\n", report.file_name).map_err(fmt_err)?;
            match &report.status {
                ReportStatus::Parsed { result } if result.requires_ocr => {
                    writeln!(output, "> {}", result.message.as_deref().unwrap_or_default())
                        .map_err(fmt_err)?;
                }
                ReportStatus::Parsed { result } => {
                    Self::format_profile(&mut output, &result.profile).map_err(fmt_err)?;
                }
                ReportStatus::Failed { error } => {
                    writeln!(output, "**Error:** {}", error).map_err(fmt_err)?;
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn generate_report(&self, reports: &[ProfileReport], format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_reports(reports),
            OutputFormat::Json => self.json_formatter.format_reports(reports),
            OutputFormat::Markdown => self.markdown_formatter.format_reports(reports),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
