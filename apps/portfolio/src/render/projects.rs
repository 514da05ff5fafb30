use crate::data::{categories, CategoryFilter};
use crate::models::Project;
use crate::render::html::{escape, external_link, section_heading, tech_tags};

/// Technologies shown on a card before collapsing into "+N more".
const VISIBLE_TECHNOLOGIES: usize = 3;

pub const EMPTY_CATEGORY_MESSAGE: &str = "No projects found for the selected category.";

fn render_card(project: &Project) -> String {
    let image = if project.image.is_empty() {
        "/placeholder.svg"
    } else {
        project.image.as_str()
    };

    let mut out = format!(
        r#"<article class="project-card" data-id="{}" data-category="{}"><div class="project-image"><img src="{}" alt="{}" loading="lazy"><span class="badge">{}</span></div>"#,
        project.id,
        escape(&project.category),
        escape(image),
        escape(&project.title),
        project.project_type.label(),
    );
    out.push_str(&format!(
        r#"<h3>{}</h3><p class="description">{}</p>"#,
        escape(&project.title),
        escape(&project.description)
    ));

    let shown = project.technologies.len().min(VISIBLE_TECHNOLOGIES);
    out.push_str(&format!(
        r#"<div class="tech">{}"#,
        tech_tags(&project.technologies[..shown], "tag projects-tag")
    ));
    let hidden = project.technologies.len() - shown;
    if hidden > 0 {
        out.push_str(&format!(r#"<span class="tag more">+{hidden} more</span>"#));
    }
    out.push_str("</div>");

    if let Some(date) = project.completed_on() {
        out.push_str(&format!(
            r#"<time class="completed" datetime="{}">{}</time>"#,
            date.format("%Y-%m-%d"),
            date.format("%b %Y")
        ));
    }

    let mut links = String::new();
    if let Some(url) = project.demo_url.as_deref().filter(|u| !u.is_empty()) {
        links.push_str(&external_link(url, "btn btn-primary", "Live Demo"));
    }
    if let Some(url) = project.github_url.as_deref().filter(|u| !u.is_empty()) {
        links.push_str(&external_link(url, "btn btn-outline", "Code"));
    }
    if !links.is_empty() {
        out.push_str(&format!(r#"<div class="project-links">{links}</div>"#));
    }

    out.push_str("</article>");
    out
}

fn render_filter_bar(projects: &[Project], selected: &CategoryFilter) -> String {
    let mut out = String::from(r#"<nav class="project-filters" aria-label="Project categories">"#);
    for category in categories(projects) {
        let active = category == selected.label();
        let href = format!("/?category={}#projects", urlencoding::encode(&category));
        out.push_str(&format!(
            r#"<a href="{}" class="filter{}" data-category="{}"{}>{}</a>"#,
            escape(&href),
            if active { " active" } else { "" },
            escape(&category),
            if active { r#" aria-current="true""# } else { "" },
            escape(&category)
        ));
    }
    out.push_str("</nav>");
    out
}

pub fn render_projects(projects: &[Project], selected: &CategoryFilter) -> String {
    let mut out = String::from(r#"<section id="projects" class="projects">"#);
    out.push_str(&section_heading(
        "Featured Projects",
        "projects",
        "A selection of things I have built.",
    ));
    out.push_str(&render_filter_bar(projects, selected));

    let shown = selected.apply(projects);
    if shown.is_empty() {
        out.push_str(&format!(
            r#"<p class="empty-state">{EMPTY_CATEGORY_MESSAGE}</p>"#
        ));
    } else {
        out.push_str(r#"<div class="project-grid">"#);
        for project in shown {
            out.push_str(&render_card(project));
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
    out
}
