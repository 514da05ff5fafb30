use crate::models::PersonalInfo;
use crate::render::html::{escape, section_heading};

fn contact_item(label: &str, value: &str, href: Option<String>) -> String {
    let value = escape(value);
    let body = match href {
        Some(href) => format!(r#"<a href="{}">{value}</a>"#, escape(&href)),
        None => format!("<p>{value}</p>"),
    };
    format!(r#"<div class="contact-item"><p class="label">{label}</p>{body}</div>"#)
}

pub fn render_contact(info: &PersonalInfo) -> String {
    let mut out = String::from(r#"<section id="contact" class="contact">"#);
    out.push_str(&section_heading(
        "Get In Touch",
        "contact",
        "I'm always interested in new opportunities and interesting projects. Let's connect!",
    ));

    out.push_str(r#"<div class="contact-info"><h3>Contact Information</h3>"#);
    out.push_str(&contact_item(
        "Email",
        &info.email,
        Some(format!("mailto:{}", info.email)),
    ));
    if !info.phone.is_empty() {
        out.push_str(&contact_item(
            "Phone",
            &info.phone,
            Some(format!("tel:{}", info.phone)),
        ));
    }
    out.push_str(&contact_item("Location", &info.location, None));
    out.push_str("</div>");

    out.push_str(
        r#"<form class="contact-form" method="post" action="/contact" data-mail-handoff>
<label>Name<input type="text" name="name" required></label>
<label>Email<input type="email" name="email" required></label>
<label>Message<textarea name="message" rows="5" required></textarea></label>
<button type="submit" class="btn btn-primary">Send Message</button>
</form>"#,
    );
    out.push_str("</section>");
    out
}
