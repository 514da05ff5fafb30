use serde::{Deserialize, Serialize};

/// Owner of the site. Loaded from `personal.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    #[serde(default)]
    pub social: SocialLinks,
    pub resume: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialLinks {
    /// Profiles advertised as `sameAs` in structured metadata, in a fixed order.
    pub fn same_as(&self) -> Vec<&str> {
        [self.github.as_deref(), self.linkedin.as_deref()]
            .into_iter()
            .flatten()
            .filter(|url| !url.is_empty())
            .collect()
    }
}
