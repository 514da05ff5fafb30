use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectType {
    #[serde(rename = "Personal Project")]
    PersonalProject,
    #[serde(rename = "Client Work")]
    ClientWork,
}

impl ProjectType {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::PersonalProject => "Personal Project",
            ProjectType::ClientWork => "Client Work",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
    /// ISO date string, kept as written in the document.
    pub completed_at: String,
}

impl Project {
    /// Parses `completed_at` as `YYYY-MM-DD`, falling back to `YYYY-MM`.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.completed_at, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", self.completed_at), "%Y-%m-%d"))
            .ok()
    }

    /// The link a visitor should follow first: the live demo, else the code.
    pub fn primary_url(&self) -> Option<&str> {
        self.demo_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.github_url.as_deref().filter(|u| !u.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(completed_at: &str) -> Project {
        Project {
            id: 1,
            title: "Ledger".to_string(),
            description: "Budget tracker".to_string(),
            image: String::new(),
            technologies: vec!["Rust".to_string()],
            category: "Web".to_string(),
            project_type: ProjectType::PersonalProject,
            demo_url: None,
            github_url: Some("https://github.com/jane/ledger".to_string()),
            featured: true,
            completed_at: completed_at.to_string(),
        }
    }

    #[test]
    fn test_completed_on_full_date() {
        assert_eq!(
            project("2024-03-15").completed_on(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_completed_on_month_only() {
        assert_eq!(
            project("2023-11").completed_on(),
            NaiveDate::from_ymd_opt(2023, 11, 1)
        );
    }

    #[test]
    fn test_completed_on_garbage_is_none() {
        assert_eq!(project("last spring").completed_on(), None);
    }

    #[test]
    fn test_primary_url_falls_back_to_github() {
        assert_eq!(
            project("2024-01-01").primary_url(),
            Some("https://github.com/jane/ledger")
        );
    }

    #[test]
    fn test_type_uses_display_labels_on_the_wire() {
        let json = serde_json::to_string(&ProjectType::ClientWork).unwrap();
        assert_eq!(json, "\"Client Work\"");
        let parsed: ProjectType = serde_json::from_str("\"Personal Project\"").unwrap();
        assert_eq!(parsed, ProjectType::PersonalProject);
    }
}
