use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExperienceType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Freelance,
    Internship,
    Education,
}

impl ExperienceType {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceType::FullTime => "Full-time",
            ExperienceType::PartTime => "Part-time",
            ExperienceType::Freelance => "Freelance",
            ExperienceType::Internship => "Internship",
            ExperienceType::Education => "Education",
        }
    }

    /// Icon hook used by the stylesheet.
    pub fn icon(&self) -> &'static str {
        match self {
            ExperienceType::Education => "graduation-cap",
            ExperienceType::Freelance => "users",
            _ => "building",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: u64,
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub experience_type: ExperienceType,
    pub location: String,
    /// Free text such as "Jun 2023 - Present".
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_types_parse() {
        let t: ExperienceType = serde_json::from_str("\"Full-time\"").unwrap();
        assert_eq!(t, ExperienceType::FullTime);
        let t: ExperienceType = serde_json::from_str("\"Part-time\"").unwrap();
        assert_eq!(t, ExperienceType::PartTime);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(serde_json::from_str::<ExperienceType>("\"Contract\"").is_err());
    }

    #[test]
    fn test_label_matches_wire_name() {
        for t in [
            ExperienceType::FullTime,
            ExperienceType::PartTime,
            ExperienceType::Freelance,
            ExperienceType::Internship,
            ExperienceType::Education,
        ] {
            let wire = serde_json::to_string(&t).unwrap();
            assert_eq!(wire, format!("\"{}\"", t.label()));
        }
    }
}
