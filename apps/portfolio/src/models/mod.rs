pub mod experience;
pub mod personal;
pub mod project;
pub mod skills;

pub use experience::{Experience, ExperienceType};
pub use personal::{PersonalInfo, SocialLinks};
pub use project::{Project, ProjectType};
pub use skills::{Skill, SkillCategory, Skills};
