//! Page chrome: header navigation, scroll progress bar, footer.

use crate::render::html::escape;
use crate::tracker::{NavHighlighter, ProgressBar};

pub fn render_header(nav: &NavHighlighter) -> String {
    let mut out = String::from(
        r##"<header class="site-header"><a href="#hero" class="logo hero-accent">Portfolio</a><nav class="site-nav" id="site-nav">"##,
    );
    for item in nav.items() {
        let section = item.section;
        out.push_str(&format!(
            r##"<a href="#{}" class="nav-item {}{}" data-section="{}">{}</a>"##,
            section.id(),
            section.accent_class(),
            if item.active { " active" } else { "" },
            section.id(),
            section.label()
        ));
    }
    out.push_str(
        r#"</nav><button class="menu-toggle" aria-label="Toggle menu" aria-controls="site-nav" aria-expanded="false"></button></header>"#,
    );
    out
}

pub fn render_progress_bar(bar: &ProgressBar) -> String {
    format!(
        r#"<div class="scroll-progress" data-progress-bar style="background-color: {}; transform: scaleX(0)"></div>"#,
        bar.color()
    )
}

pub fn render_footer(name: &str, year: i32) -> String {
    format!(
        r#"<footer class="site-footer"><p>&copy; {year} {}. All rights reserved.</p></footer>"#,
        escape(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::ScrollState;

    #[test]
    fn test_header_lists_sections_with_hero_active() {
        let state = ScrollState::new(100.0);
        let html = render_header(&NavHighlighter::new(state.subscribe()));
        assert_eq!(html.matches("nav-item").count(), 6);
        assert!(html.contains(r##"href="#hero" class="nav-item hero-accent active""##));
        assert!(html.contains(r##"href="#contact" class="nav-item contact-accent""##));
    }

    #[test]
    fn test_menu_toggle_controls_nav() {
        let state = ScrollState::new(100.0);
        let html = render_header(&NavHighlighter::new(state.subscribe()));
        assert!(html.contains(r#"<nav class="site-nav" id="site-nav">"#));
        assert!(html.contains(r#"aria-controls="site-nav" aria-expanded="false""#));
    }

    #[test]
    fn test_progress_bar_uses_active_color() {
        let state = ScrollState::new(100.0);
        let html = render_progress_bar(&ProgressBar::new(state.subscribe()));
        assert!(html.contains("oklch(var(--hero-color))"));
    }

    #[test]
    fn test_footer_year() {
        assert!(render_footer("Jane", 2026).contains("&copy; 2026 Jane."));
    }
}
