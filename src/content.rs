use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const RESUME_FILE: &str = "resume.json";

pub static RESUME: LazyLock<ResumeData> =
    LazyLock::new(|| load().unwrap_or_else(|e| panic!("Couldn't load site content: {e}")));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub metrics: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub publisher: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub grade: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub hero_titles: Vec<String>,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(&'static str),
    #[error("Couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate experience id: {0}")]
    DuplicateExperienceId(String),
    #[error("Duplicate skill category: {0}")]
    DuplicateSkillCategory(String),
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),
}

/// Reads and validates the embedded resume record.
///
/// Prefer [`RESUME`] from views; this is for callers that want to surface the
/// error themselves, such as the server at startup.
pub fn load() -> Result<ResumeData, ContentError> {
    let file = Assets::get(RESUME_FILE).ok_or(ContentError::Missing(RESUME_FILE))?;
    parse(&file.data)
}

pub fn parse(bytes: &[u8]) -> Result<ResumeData, ContentError> {
    let data: ResumeData = serde_json::from_slice(bytes)?;
    data.validate()?;
    Ok(data)
}

impl ResumeData {
    /// Render keys must be unique; nothing else is checked since the record
    /// never changes at runtime.
    pub fn validate(&self) -> Result<(), ContentError> {
        first_duplicate(self.experience.iter().map(|e| e.id.as_str()))
            .map_or(Ok(()), |id| Err(ContentError::DuplicateExperienceId(id)))?;
        first_duplicate(self.skills.iter().map(|s| s.category.as_str()))
            .map_or(Ok(()), |c| Err(ContentError::DuplicateSkillCategory(c)))?;
        first_duplicate(self.projects.iter().map(|p| p.id.as_str()))
            .map_or(Ok(()), |id| Err(ContentError::DuplicateProjectId(id)))
    }

    /// First and remaining words of the name, for the two-tone headings.
    pub fn name_parts(&self) -> (&str, &str) {
        let name = self.personal_info.name.trim();
        match name.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim_start()),
            None => (name, ""),
        }
    }
}

fn first_duplicate<'a>(mut keys: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    keys.find(|k| !seen.insert(*k)).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "personal_info": {
            "name": "Jo Doe", "title": "Engineer", "phone": "", "email": "",
            "linkedin": "", "github": "", "summary": "hello"
        },
        "experience": [
            { "id": "a", "role": "r", "company": "c", "period": "p", "location": "l", "achievements": [] },
            { "id": "b", "role": "r", "company": "c", "period": "p", "location": "l", "achievements": ["x"] }
        ],
        "skills": [ { "category": "Rust", "items": ["tokio"] } ]
    }"#;

    #[test]
    fn test_embedded_content_loads() {
        let data = load().expect("embedded content should be valid");
        assert!(!data.personal_info.name.is_empty());
        assert!(!data.experience.is_empty());
        assert!(!data.skills.is_empty());
        assert!(!data.hero_titles.is_empty());

        let ids: HashSet<_> = data.experience.iter().map(|e| &e.id).collect();
        assert_eq!(ids.len(), data.experience.len());
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let data = parse(MINIMAL.as_bytes()).unwrap();
        assert!(data.projects.is_empty());
        assert!(data.publications.is_empty());
        assert!(data.education.is_empty());
        assert!(data.hero_titles.is_empty());
        assert_eq!(data.experience[1].achievements, vec!["x"]);
    }

    #[test]
    fn test_duplicate_experience_id_rejected() {
        let dup = MINIMAL.replace(r#""id": "b""#, r#""id": "a""#);
        match parse(dup.as_bytes()) {
            Err(ContentError::DuplicateExperienceId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_skill_category_rejected() {
        let dup = MINIMAL.replace(
            r#"[ { "category": "Rust", "items": ["tokio"] } ]"#,
            r#"[ { "category": "Rust", "items": [] }, { "category": "Rust", "items": [] } ]"#,
        );
        assert!(matches!(
            parse(dup.as_bytes()),
            Err(ContentError::DuplicateSkillCategory(_))
        ));
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let err = parse(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("Couldn't parse site content"));
    }

    #[test]
    fn test_name_parts() {
        let data = parse(MINIMAL.as_bytes()).unwrap();
        assert_eq!(data.name_parts(), ("Jo", "Doe"));

        let mut single = data.clone();
        single.personal_info.name = "Prince".to_string();
        assert_eq!(single.name_parts(), ("Prince", ""));
    }
}
