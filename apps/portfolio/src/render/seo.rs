//! Head metadata and schema.org structured data.

use serde_json::{json, Value};

use crate::models::{PersonalInfo, Project};
use crate::render::html::{escape, script_json};

#[derive(Debug, Clone)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_image: String,
    pub canonical_url: Option<String>,
}

impl SeoMeta {
    /// Page metadata derived from the owner's profile.
    pub fn for_person(info: &PersonalInfo, projects: &[Project], site_url: Option<&str>) -> Self {
        let mut keywords: Vec<String> = vec!["portfolio".to_string(), info.title.to_lowercase()];
        for tech in projects.iter().flat_map(|p| p.technologies.iter()) {
            if !keywords.iter().any(|k| k.eq_ignore_ascii_case(tech)) {
                keywords.push(tech.clone());
            }
        }

        let og_image = if info.profile_image.is_empty() {
            "/og-image.jpg".to_string()
        } else {
            info.profile_image.clone()
        };

        SeoMeta {
            title: format!("{} - {}", info.name, info.title),
            description: info.bio.clone(),
            keywords,
            og_image,
            canonical_url: site_url.map(str::to_string),
        }
    }

    pub fn render_head(&self) -> String {
        let title = escape(&self.title);
        let description = escape(&self.description);
        let image = escape(&self.og_image);

        let mut out = format!(
            r#"<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{}">
<meta name="robots" content="index, follow">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:type" content="profile">
<meta property="og:image" content="{image}">
<meta property="og:image:width" content="1200">
<meta property="og:image:height" content="630">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">
<meta name="twitter:image" content="{image}">
"#,
            escape(&self.keywords.join(", ")),
        );
        if let Some(url) = &self.canonical_url {
            out.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                escape(url)
            ));
        }
        out
    }
}

pub fn person_schema(info: &PersonalInfo) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": info.name,
        "jobTitle": info.title,
        "description": info.bio,
        "email": info.email,
        "telephone": info.phone,
        "url": info.website,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": info.location,
        },
        "sameAs": info.social.same_as(),
    })
}

pub fn project_schema(project: &Project, author: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "CreativeWork",
        "name": project.title,
        "description": project.description,
        "datePublished": project.completed_at,
        "url": project.primary_url(),
        "author": {
            "@type": "Person",
            "name": author,
        },
        "keywords": project.technologies.join(", "),
    })
}

pub fn json_ld(value: &Value) -> String {
    format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        script_json(value)
    )
}

/// Normalises a heading into an anchor id: lower case, whitespace runs to `-`.
pub fn section_id(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
