use crate::models::Experience;
use crate::render::html::{escape, section_heading, tech_tags};

fn render_card(exp: &Experience) -> String {
    let mut out = format!(
        r#"<article class="experience-card" data-id="{}"><header><h3>{}</h3><p class="company experience-accent">{}</p><span class="badge badge-{}" data-icon="{}">{}</span></header>"#,
        exp.id,
        escape(&exp.title),
        escape(&exp.company),
        exp.experience_type.label().to_lowercase(),
        exp.experience_type.icon(),
        exp.experience_type.label(),
    );
    out.push_str(&format!(
        r#"<p class="meta"><span class="duration">{}</span><span class="location">{}</span></p><p class="description">{}</p>"#,
        escape(&exp.duration),
        escape(&exp.location),
        escape(&exp.description)
    ));

    if !exp.achievements.is_empty() {
        out.push_str(r#"<h4>Key Achievements</h4><ul class="achievements">"#);
        for a in &exp.achievements {
            out.push_str(&format!("<li>{}</li>", escape(a)));
        }
        out.push_str("</ul>");
    }

    if !exp.technologies.is_empty() {
        out.push_str(&format!(
            r#"<div class="tech">{}</div>"#,
            tech_tags(&exp.technologies, "tag experience-tag")
        ));
    }
    out.push_str("</article>");
    out
}

pub fn render_experience(experience: &[Experience]) -> String {
    let mut out = String::from(r#"<section id="experience" class="experience">"#);
    out.push_str(&section_heading(
        "Experience & Education",
        "experience",
        "My professional journey and educational background.",
    ));

    if experience.is_empty() {
        out.push_str(r#"<p class="empty-state">No experience entries yet.</p>"#);
    } else {
        out.push_str(r#"<div class="timeline">"#);
        for exp in experience {
            out.push_str(&render_card(exp));
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
    out
}
