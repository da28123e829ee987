//! Line normalization and contact entity extraction

use regex::Regex;

/// Contact details found in a resume. Every field is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linked_in: Option<String>,
}

/// Split text into trimmed, non-empty lines, keeping their order.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct TextProcessor {
    email_regex: Regex,
    phone_regex: Regex,
    phone_separator_regex: Regex,
    linkedin_regex: Regex,
    name_regex: Regex,
    name_scan_lines: usize,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self::with_name_scan_lines(5)
    }

    pub fn with_name_scan_lines(name_scan_lines: usize) -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        // French numbering: 0X or +33/0033 prefix, then four digit pairs.
        let phone_regex = Regex::new(
            r"(?:\+33|\b0033|\b0)[\s.-]*(?:\(0\)[\s.-]*)?[1-9](?:[\s.-]*\d{2}){4}\b",
        )
        .expect("Invalid phone regex");

        // The "(0)" trunk marker only appears after an international prefix.
        let phone_separator_regex =
            Regex::new(r"\(0\)|[\s.\-]").expect("Invalid separator regex");

        let linkedin_regex =
            Regex::new(r"(?i)linkedin\.com/in/[\w-]+").expect("Invalid LinkedIn regex");

        let name_regex = Regex::new(r"^\p{Lu}\p{Ll}+(?:[ \t]+\p{Lu}\p{Ll}+){1,2}$")
            .expect("Invalid name regex");

        Self {
            email_regex,
            phone_regex,
            phone_separator_regex,
            linkedin_regex,
            name_regex,
            name_scan_lines,
        }
    }

    /// Run every contact extractor. `text` is the full decoded document and
    /// `lines` its normalized form.
    pub fn extract_contact(&self, text: &str, lines: &[String]) -> ContactInfo {
        let (first_name, last_name) = match self.extract_name(lines) {
            Some((first, last)) => (Some(first), Some(last)),
            None => (None, None),
        };

        ContactInfo {
            first_name,
            last_name,
            email: self.extract_email(text),
            phone: self.extract_phone(text),
            linked_in: self.extract_linkedin(text),
        }
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// First phone number, with separators removed.
    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone_regex.find(text).map(|m| {
            self.phone_separator_regex
                .replace_all(m.as_str(), "")
                .to_string()
        })
    }

    /// LinkedIn profile URL as written in the document.
    pub fn extract_linkedin(&self, text: &str) -> Option<String> {
        self.linkedin_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// Names sit at the top of a resume; only the first few lines are tried
    /// so capitalized company names and headings further down never match.
    pub fn extract_name(&self, lines: &[String]) -> Option<(String, String)> {
        let line = lines
            .iter()
            .take(self.name_scan_lines)
            .find(|line| self.name_regex.is_match(line))?;

        let mut words = line.split_whitespace();
        let first = words.next()?.to_string();
        let last = words.collect::<Vec<_>>().join(" ");
        Some((first, last))
    }
}
