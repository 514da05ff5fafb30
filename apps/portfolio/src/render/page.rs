use crate::data::{CategoryFilter, Portfolio};
use crate::render::chrome::{render_footer, render_header, render_progress_bar};
use crate::render::seo::{json_ld, person_schema, project_schema, SeoMeta};
use crate::render::{about, contact, experience, hero, projects, skills};
use crate::sections::{Section, SECTIONS};
use crate::tracker::{NavHighlighter, ProgressBar, ScrollState};

/// Per-request rendering inputs beyond the data itself.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub category: CategoryFilter,
    pub site_url: Option<String>,
    pub trigger_offset: f64,
    pub year: i32,
}

fn render_section(section: Section, portfolio: &Portfolio, options: &PageOptions) -> String {
    match section {
        Section::Hero => hero::render_hero(&portfolio.personal_info),
        Section::About => about::render_about(&portfolio.personal_info),
        Section::Experience => experience::render_experience(&portfolio.experience),
        Section::Projects => projects::render_projects(&portfolio.projects, &options.category),
        Section::Skills => skills::render_skills(&portfolio.skills),
        Section::Contact => contact::render_contact(&portfolio.personal_info),
    }
}

/// Renders the whole single-page document.
pub fn render_page(portfolio: &Portfolio, options: &PageOptions) -> String {
    let info = &portfolio.personal_info;

    // Server render always starts at the first section; the client script
    // takes over the shared state once scrolling begins.
    let scroll = ScrollState::new(options.trigger_offset);
    let nav = NavHighlighter::new(scroll.subscribe());
    let bar = ProgressBar::new(scroll.subscribe());

    let seo = SeoMeta::for_person(info, &portfolio.projects, options.site_url.as_deref());

    let mut structured = json_ld(&person_schema(info));
    for project in portfolio.projects.iter().filter(|p| p.featured) {
        structured.push_str(&json_ld(&project_schema(project, &info.name)));
    }

    let main: String = SECTIONS
        .iter()
        .map(|s| render_section(*s, portfolio, options))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}{structured}<link rel="stylesheet" href="/assets/site.css">
<script src="/assets/site.js" defer></script>
</head>
<body data-trigger-offset="{trigger}" data-active-section="{active}">
{progress}
{header}
<main>{main}</main>
{footer}
</body>
</html>
"#,
        head = seo.render_head(),
        trigger = options.trigger_offset,
        active = nav.active().id(),
        progress = render_progress_bar(&bar),
        header = render_header(&nav),
        footer = render_footer(&info.name, options.year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::store::fixtures;

    fn portfolio() -> Portfolio {
        Portfolio {
            personal_info: serde_json::from_value(fixtures::personal_json()).unwrap(),
            projects: serde_json::from_value(fixtures::projects_json()).unwrap(),
            skills: serde_json::from_value(fixtures::skills_json()).unwrap(),
            experience: serde_json::from_value(fixtures::experience_json()).unwrap(),
        }
    }

    fn options(category: CategoryFilter) -> PageOptions {
        PageOptions {
            category,
            site_url: None,
            trigger_offset: 100.0,
            year: 2026,
        }
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        let html = render_page(&portfolio(), &options(CategoryFilter::All));
        let positions: Vec<usize> = SECTIONS
            .iter()
            .map(|s| html.find(&format!(r#"<section id="{}""#, s.id())).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_structured_data_for_person_and_featured_projects() {
        let html = render_page(&portfolio(), &options(CategoryFilter::All));
        assert_eq!(html.matches("application/ld+json").count(), 3);
        assert!(html.contains(r#""@type":"Person""#));
        assert!(html.contains(r#""name":"Ledger""#));
        assert!(!html.contains(r#""name":"Shopfront""#));
    }

    #[test]
    fn test_category_selection_flows_into_projects() {
        let html = render_page(
            &portfolio(),
            &options(CategoryFilter::Category("Mobile".to_string())),
        );
        assert_eq!(html.matches(r#"class="project-card""#).count(), 1);
    }

    #[test]
    fn test_trigger_offset_and_initial_section_exposed_to_client() {
        let html = render_page(&portfolio(), &options(CategoryFilter::All));
        assert!(html.contains(r#"data-trigger-offset="100" data-active-section="hero""#));
    }
}
