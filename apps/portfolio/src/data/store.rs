//! Portfolio store — pluggable, trait-based access to the four documents.
//!
//! Default: `FsPortfolioStore` reading JSON from a base directory fixed at
//! startup. Carried in `AppState` as `Arc<dyn PortfolioStore>`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::data::{
    DataError, EXPERIENCE_DOCUMENT, PERSONAL_DOCUMENT, PROJECTS_DOCUMENT, SKILLS_DOCUMENT,
};
use crate::models::{Experience, PersonalInfo, Project, Skills};

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn personal_info(&self) -> Result<PersonalInfo, DataError>;

    async fn projects(&self) -> Result<Vec<Project>, DataError>;

    async fn skills(&self) -> Result<Skills, DataError>;

    async fn experience(&self) -> Result<Vec<Experience>, DataError>;

    /// Projects flagged `featured`, in document order. Derived from
    /// `projects()`; performs no I/O of its own.
    async fn featured_projects(&self) -> Result<Vec<Project>, DataError> {
        let projects = self.projects().await?;
        Ok(projects.into_iter().filter(|p| p.featured).collect())
    }
}

#[derive(Debug, Clone)]
pub struct FsPortfolioStore {
    base_dir: PathBuf,
}

impl FsPortfolioStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn read_document<T: DeserializeOwned>(
        &self,
        document: &'static str,
    ) -> Result<T, DataError> {
        let path = self.base_dir.join(document);
        debug!("Loading {}", path.display());

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| DataError::Unavailable {
                document,
                reason: e.to_string(),
            })?;

        serde_json::from_str(&raw).map_err(|e| DataError::Unavailable {
            document,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl PortfolioStore for FsPortfolioStore {
    async fn personal_info(&self) -> Result<PersonalInfo, DataError> {
        self.read_document(PERSONAL_DOCUMENT).await
    }

    async fn projects(&self) -> Result<Vec<Project>, DataError> {
        self.read_document(PROJECTS_DOCUMENT).await
    }

    async fn skills(&self) -> Result<Skills, DataError> {
        self.read_document(SKILLS_DOCUMENT).await
    }

    async fn experience(&self) -> Result<Vec<Experience>, DataError> {
        self.read_document(EXPERIENCE_DOCUMENT).await
    }
}

/// Everything one page render needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub personal_info: PersonalInfo,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub experience: Vec<Experience>,
}

/// Loads all four documents concurrently. Any failure fails the whole load.
pub async fn load_portfolio(store: &dyn PortfolioStore) -> Result<Portfolio, DataError> {
    let (personal_info, projects, skills, experience) = tokio::try_join!(
        store.personal_info(),
        store.projects(),
        store.skills(),
        store.experience(),
    )?;

    Ok(Portfolio {
        personal_info,
        projects,
        skills,
        experience,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::Path;

    use serde_json::json;

    pub fn personal_json() -> serde_json::Value {
        json!({
            "name": "Jane Doe",
            "title": "Software Engineer",
            "subtitle": "Backend & systems",
            "bio": "I build reliable services.",
            "location": "Lahore, Pakistan",
            "email": "jane@example.com",
            "phone": "+92 300 0000000",
            "website": "https://jane.dev",
            "social": {
                "github": "https://github.com/jane",
                "linkedin": "https://linkedin.com/in/jane"
            },
            "resume": "/resume.pdf",
            "profileImage": "/profile.jpg"
        })
    }

    pub fn projects_json() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "title": "Ledger",
                "description": "Personal budget tracker",
                "image": "/projects/ledger.png",
                "technologies": ["Rust", "Axum", "SQLite", "HTMX"],
                "category": "Web",
                "type": "Personal Project",
                "githubUrl": "https://github.com/jane/ledger",
                "featured": true,
                "completedAt": "2024-03-15"
            },
            {
                "id": 2,
                "title": "Shopfront",
                "description": "Storefront for a bakery",
                "image": "",
                "technologies": ["TypeScript"],
                "category": "Web",
                "type": "Client Work",
                "demoUrl": "https://bakery.example.com",
                "featured": false,
                "completedAt": "2023-09-01"
            },
            {
                "id": 3,
                "title": "Tally",
                "description": "Habit tracker",
                "image": "/projects/tally.png",
                "technologies": ["Kotlin"],
                "category": "Mobile",
                "type": "Personal Project",
                "featured": true,
                "completedAt": "2023-05-20"
            }
        ])
    }

    pub fn skills_json() -> serde_json::Value {
        json!({
            "technical": [
                {
                    "category": "Backend",
                    "skills": [
                        { "name": "Rust", "level": 90 },
                        { "name": "PostgreSQL", "level": 150 }
                    ]
                }
            ],
            "soft": ["Communication", "Mentoring"]
        })
    }

    pub fn experience_json() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "title": "Backend Engineer",
                "company": "Acme",
                "type": "Full-time",
                "location": "Remote",
                "duration": "Jan 2023 - Present",
                "description": "Payments platform.",
                "achievements": ["Cut p99 latency by 40%"],
                "technologies": ["Rust", "Kafka"]
            },
            {
                "id": 2,
                "title": "BS Computer Science",
                "company": "FAST",
                "type": "Education",
                "location": "Lahore",
                "duration": "2019 - 2023",
                "description": "Systems track.",
                "achievements": [],
                "technologies": []
            }
        ])
    }

    /// Writes all four sample documents into `dir`.
    pub fn write_all(dir: &Path) {
        for (name, value) in [
            ("personal.json", personal_json()),
            ("projects.json", projects_json()),
            ("skills.json", skills_json()),
            ("experience.json", experience_json()),
        ] {
            std::fs::write(dir.join(name), serde_json::to_string_pretty(&value).unwrap())
                .unwrap();
        }
    }
}
