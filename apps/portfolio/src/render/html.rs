/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialises `value` for an inline `<script>` block.
pub fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// `<a>` opening an external page in a new tab.
pub fn external_link(href: &str, class: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" class="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape(href),
        class,
        escape(label)
    )
}

/// Technology chips shared by project and experience cards.
pub fn tech_tags(technologies: &[String], class: &str) -> String {
    technologies
        .iter()
        .map(|t| format!(r#"<span class="{class}">{}</span>"#, escape(t)))
        .collect()
}

/// Section heading with the accent underline.
pub fn section_heading(title: &str, accent: &str, lead: &str) -> String {
    format!(
        r#"<div class="section-heading"><h2>{}</h2><div class="underline {accent}-bg"></div><p class="lead">{}</p></div>"#,
        escape(title),
        escape(lead)
    )
}
