//! The page's sections, in display order. Tracker, navigation, page layout
//! and (through the rendered nav) the client script all read this list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

pub const SECTIONS: [Section; 6] = [
    Section::Hero,
    Section::About,
    Section::Experience,
    Section::Projects,
    Section::Skills,
    Section::Contact,
];

impl Section {
    /// Anchor id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// CSS colour of the section's accent.
    pub fn color(&self) -> String {
        format!("oklch(var(--{}-color))", self.id())
    }

    pub fn accent_class(&self) -> String {
        format!("{}-accent", self.id())
    }

    /// Inverse of `id`.
    pub fn from_id(id: &str) -> Option<Section> {
        SECTIONS.iter().copied().find(|s| s.id() == id)
    }

    pub fn first() -> Section {
        SECTIONS[0]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub color: String,
}

impl From<Section> for SectionDescriptor {
    fn from(s: Section) -> Self {
        SectionDescriptor {
            id: s.id(),
            label: s.label(),
            color: s.color(),
        }
    }
}

pub fn describe_sections() -> Vec<SectionDescriptor> {
    SECTIONS.iter().copied().map(SectionDescriptor::from).collect()
}
