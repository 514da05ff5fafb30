use crate::models::PersonalInfo;
use crate::render::html::{escape, section_heading};

const HIGHLIGHTS: [&str; 4] = [
    "Problem Solver",
    "Team Player",
    "Continuous Learner",
    "Detail Oriented",
];

pub fn render_about(info: &PersonalInfo) -> String {
    let mut out = String::from(r#"<section id="about" class="about">"#);
    out.push_str(&section_heading(
        "About Me",
        "about",
        "Get to know me better",
    ));

    if !info.profile_image.is_empty() {
        out.push_str(&format!(
            r#"<img class="profile-image" src="{}" alt="{}" loading="lazy">"#,
            escape(&info.profile_image),
            escape(&info.name)
        ));
    }

    out.push_str(&format!(r#"<p class="bio">{}</p>"#, escape(&info.bio)));
    out.push_str(r#"<dl class="about-facts">"#);
    if !info.location.is_empty() {
        out.push_str(&format!(
            "<dt>Location</dt><dd>{}</dd>",
            escape(&info.location)
        ));
    }
    out.push_str(&format!(
        r#"<dt>Email</dt><dd><a href="mailto:{0}">{0}</a></dd>"#,
        escape(&info.email)
    ));
    out.push_str("</dl>");

    out.push_str(r#"<ul class="highlights">"#);
    for item in HIGHLIGHTS {
        out.push_str(&format!(r#"<li class="tag about-accent">{item}</li>"#));
    }
    out.push_str("</ul></section>");
    out
}
