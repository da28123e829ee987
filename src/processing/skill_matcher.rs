//! Dictionary-driven skill matching

use crate::error::{Result, ResumeProfilerError};
use log::debug;
use regex::Regex;

/// Curated skill names, grouped by family. Output order follows this list.
const SKILL_DICTIONARY: &[&str] = &[
    // Languages
    "JavaScript", "TypeScript", "Python", "Java", "C#", "C++", "PHP", "Ruby", "Golang", "Rust",
    "Kotlin", "Swift", "Scala", "SQL",
    // Web
    "React", "Angular", "Vue.js", "Next.js", "Node.js", "Express.js", "Django", "Flask",
    "Spring Boot", "Symfony", "Laravel", "Ruby on Rails", "HTML", "CSS", "Sass", "Tailwind CSS",
    "GraphQL",
    // Databases
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch", "Oracle", "SQLite",
    // Cloud and DevOps
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Terraform", "Ansible", "Jenkins",
    "GitLab CI", "GitHub Actions", "Linux", "Git",
    // Collaboration
    "Jira", "Confluence", "Slack", "Trello", "Agile", "Scrum",
    // Data and machine learning
    "TensorFlow", "PyTorch", "scikit-learn", "Pandas", "NumPy", "Spark", "Power BI", "Tableau",
    // Mobile
    "React Native", "Flutter", "Android", "iOS",
    // Design
    "Figma", "Adobe XD", "Photoshop", "Illustrator",
];

/// Matches dictionary skills as whole words, case-insensitively.
pub struct SkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl SkillMatcher {
    /// Create a matcher over the curated dictionary
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(Vec::new())
    }

    /// Create a matcher with additional skills appended after the dictionary.
    /// Entries already present (ignoring case) are skipped.
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Result<Self> {
        let mut skills: Vec<String> = SKILL_DICTIONARY.iter().map(|s| s.to_string()).collect();
        for skill in additional_skills {
            let skill = skill.trim().to_string();
            if skill.is_empty() || skills.iter().any(|s| s.eq_ignore_ascii_case(&skill)) {
                continue;
            }
            skills.push(skill);
        }

        let patterns = skills
            .into_iter()
            .map(|skill| {
                let regex = Regex::new(&Self::whole_word_pattern(&skill)).map_err(|e| {
                    ResumeProfilerError::Processing(format!(
                        "Failed to build pattern for skill '{}': {}",
                        skill, e
                    ))
                })?;
                Ok((skill, regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// `\b` only works next to word characters, so entries such as "C++"
    /// are bounded by a non-word character or the text edge instead.
    fn whole_word_pattern(skill: &str) -> String {
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        let starts_word = skill.chars().next().is_some_and(is_word);
        let ends_word = skill.chars().last().is_some_and(is_word);

        format!(
            "(?i){}{}{}",
            if starts_word { r"\b" } else { r"(?:^|\W)" },
            regex::escape(skill),
            if ends_word { r"\b" } else { r"(?:\W|$)" },
        )
    }

    /// Skills found in `text`, in dictionary order.
    pub fn find_skills(&self, text: &str) -> Vec<String> {
        let found: Vec<String> = self
            .patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(skill, _)| skill.clone())
            .collect();

        debug!("Matched {} of {} skills", found.len(), self.patterns.len());
        found
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(skill, _)| skill.as_str())
    }

    pub fn skill_count(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_is_unique() {
        let matcher = SkillMatcher::new().unwrap();
        let mut seen: Vec<String> = Vec::new();
        for skill in matcher.skills() {
            let lower = skill.to_lowercase();
            assert!(!seen.contains(&lower), "duplicate skill {skill}");
            seen.push(lower);
        }
        assert!(matcher.skill_count() > 30);
    }

    #[test]
    fn test_whole_word_only() {
        let matcher = SkillMatcher::new().unwrap();
        assert!(!matcher.find_skills("JavaScripting all day").contains(&"JavaScript".to_string()));
        assert!(matcher.find_skills("I use JavaScript daily").contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_java_not_found_inside_javascript() {
        let matcher = SkillMatcher::new().unwrap();
        let skills = matcher.find_skills("Frontend en javascript et TypeScript");
        assert_eq!(skills, vec!["JavaScript".to_string(), "TypeScript".to_string()]);
    }

    #[test]
    fn test_dictionary_order_not_text_order() {
        let matcher = SkillMatcher::new().unwrap();
        let skills = matcher.find_skills("Docker, puis Python, puis react et docker encore");
        assert_eq!(
            skills,
            vec!["Python".to_string(), "React".to_string(), "Docker".to_string()]
        );
    }

    #[test]
    fn test_symbol_skills() {
        let matcher = SkillMatcher::new().unwrap();
        let skills = matcher.find_skills("C++ and C#, plus Node.js (backend)");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"C#".to_string()));
        assert!(skills.contains(&"Node.js".to_string()));
        assert!(!matcher.find_skills("Nodejs").contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_multi_word_skill() {
        let matcher = SkillMatcher::new().unwrap();
        let skills = matcher.find_skills("Apps in react native and Spring boot");
        assert!(skills.contains(&"React Native".to_string()));
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Spring Boot".to_string()));
    }

    #[test]
    fn test_custom_skills_appended() {
        let matcher =
            SkillMatcher::with_custom_skills(vec!["Elixir".into(), "python".into(), " ".into()])
                .unwrap();
        assert_eq!(matcher.skill_count(), SKILL_DICTIONARY.len() + 1);
        assert_eq!(matcher.skills().last(), Some("Elixir"));
        assert_eq!(
            matcher.find_skills("Elixir and Python"),
            vec!["Python".to_string(), "Elixir".to_string()]
        );
    }
}
