//! Profile summary extraction

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static SUMMARY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[^\p{L}]*(?:profil(?:e)?(?:\s+professionnel)?|(?:professional\s+)?summary|r[ée]sum[ée]|about(?:\s+me)?|[àa]\s+propos(?:\s+de\s+moi)?)\s*:?\s*$",
    )
    .expect("Invalid summary heading regex")
});

pub struct SummaryExtractor {
    max_lines: usize,
    min_chars: usize,
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::new(3, 50)
    }
}

impl SummaryExtractor {
    pub fn new(max_lines: usize, min_chars: usize) -> Self {
        Self {
            max_lines,
            min_chars,
        }
    }

    /// Join the first long lines after the first summary heading. Collection
    /// is bounded by count only; later headings do not stop it.
    pub fn extract(&self, lines: &[String]) -> Option<String> {
        let heading = lines
            .iter()
            .position(|line| SUMMARY_HEADING.is_match(line))?;

        let collected: Vec<&str> = lines[heading + 1..]
            .iter()
            .filter(|line| line.graphemes(true).count() > self.min_chars)
            .take(self.max_lines)
            .map(String::as_str)
            .collect();

        if collected.is_empty() {
            None
        } else {
            Some(collected.join(" "))
        }
    }
}
