use crate::models::PersonalInfo;
use crate::render::html::{escape, external_link};

pub fn render_hero(info: &PersonalInfo) -> String {
    let mut out = String::from(r#"<section id="hero" class="hero">"#);
    out.push_str(&format!(
        r#"<h1 class="hero-name">{}</h1><p class="hero-title hero-accent">{}</p>"#,
        escape(&info.name),
        escape(&info.title)
    ));
    if !info.subtitle.is_empty() {
        out.push_str(&format!(
            r#"<p class="hero-subtitle">{}</p>"#,
            escape(&info.subtitle)
        ));
    }

    out.push_str(r#"<div class="hero-actions">"#);
    if !info.resume.is_empty() {
        out.push_str(&external_link(&info.resume, "btn btn-primary", "Download Resume"));
    }
    out.push_str(&format!(
        r#"<a href="mailto:{}" class="btn btn-outline">Get In Touch</a>"#,
        escape(&info.email)
    ));
    out.push_str("</div>");

    let socials: Vec<String> = [
        ("GitHub", info.social.github.as_deref()),
        ("LinkedIn", info.social.linkedin.as_deref()),
        ("Twitter", info.social.twitter.as_deref()),
        ("Instagram", info.social.instagram.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
    .map(|(label, url)| external_link(url, "social-link", label))
    .collect();
    if !socials.is_empty() {
        out.push_str(&format!(r#"<div class="hero-social">{}</div>"#, socials.concat()));
    }

    out.push_str(r##"<a href="#about" class="scroll-hint" aria-label="Scroll to about">&#8595;</a>"##);
    out.push_str("</section>");
    out
}
