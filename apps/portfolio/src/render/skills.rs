use crate::models::{SkillCategory, Skills};
use crate::render::html::{escape, section_heading};
use crate::render::seo::section_id;

fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "frontend" | "web" => "globe",
        "backend" | "database" | "databases" => "database",
        "mobile" => "smartphone",
        "tools" | "devops" => "zap",
        _ => "code",
    }
}

fn render_category(category: &SkillCategory) -> String {
    let mut out = format!(
        r#"<div class="skill-category" id="skills-{}" data-icon="{}"><h3>{}</h3>"#,
        section_id(&category.category),
        category_icon(&category.category),
        escape(&category.category)
    );
    for skill in &category.skills {
        out.push_str(&format!(
            r#"<div class="skill"><div class="skill-label"><span>{}</span><span class="level">{}%</span></div><div class="bar"><div class="bar-fill" style="width: {}%"></div></div></div>"#,
            escape(&skill.name),
            skill.level,
            skill.bar_width()
        ));
    }
    out.push_str("</div>");
    out
}

pub fn render_skills(skills: &Skills) -> String {
    let mut out = String::from(r#"<section id="skills" class="skills">"#);
    out.push_str(&section_heading(
        "Skills & Technologies",
        "skills",
        "Tools and technologies I work with.",
    ));
    out.push_str(r#"<div class="skill-grid">"#);
    for category in &skills.technical {
        out.push_str(&render_category(category));
    }
    out.push_str("</div>");

    if !skills.soft.is_empty() {
        out.push_str(r#"<div class="soft-skills"><h3>Soft Skills</h3>"#);
        for s in &skills.soft {
            out.push_str(&format!(r#"<span class="tag skills-tag">{}</span>"#, escape(s)));
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
    out
}
