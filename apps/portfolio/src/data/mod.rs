//! Data Loader — static JSON documents in, typed records out.
//!
//! Documents are read fresh on every call. There is no cache and nothing is
//! ever written back.

pub mod filter;
pub mod store;

use thiserror::Error;

pub use filter::{categories, CategoryFilter};
pub use store::{load_portfolio, FsPortfolioStore, Portfolio, PortfolioStore};

pub const PERSONAL_DOCUMENT: &str = "personal.json";
pub const PROJECTS_DOCUMENT: &str = "projects.json";
pub const SKILLS_DOCUMENT: &str = "skills.json";
pub const EXPERIENCE_DOCUMENT: &str = "experience.json";

#[derive(Debug, Error)]
pub enum DataError {
    /// The document is missing, unreadable, or does not match its record shape.
    #[error("data unavailable: {document}: {reason}")]
    Unavailable {
        document: &'static str,
        reason: String,
    },
}

impl DataError {
    pub fn document(&self) -> &'static str {
        match self {
            DataError::Unavailable { document, .. } => document,
        }
    }
}
