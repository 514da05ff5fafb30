use serde::{Deserialize, Serialize};

/// Contents of `skills.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    pub technical: Vec<SkillCategory>,
    #[serde(default)]
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// `level` is a percentage in [0, 100] by convention only; documents are not
/// validated and out-of-range values load as written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: i64,
}

impl Skill {
    /// Width of the rendered bar. The printed figure stays `level` verbatim.
    pub fn bar_width(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }
}
