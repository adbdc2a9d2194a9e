//! Presentational building blocks.
//!
//! Every component is a pure function from its inputs to [`Markup`]. None of
//! them hold state or can fail; all text is escaped by maud.

use maud::{Markup, html};

/// Centered, width-constrained wrapper.
pub fn container(class: &str, content: Markup) -> Markup {
    html! {
        div class={ "container " (class) } {
            (content)
        }
    }
}

/// Anchorable section. `id` must be unique within the page.
pub fn section(id: &str, content: Markup) -> Markup {
    html! {
        section.section id=(id) aria-label=(id) {
            (content)
        }
    }
}

/// Small rounded label with a sparkle icon, used as a section eyebrow.
pub fn badge(label: &str) -> Markup {
    html! {
        div.badge-row {
            span.badge {
                span.badge-icon aria-hidden="true" { "\u{2726}" }
                " " (label)
            }
        }
    }
}

pub fn pill(label: &str) -> Markup {
    html! {
        span.pill { (label) }
    }
}

/// Title + description card with a check mark.
pub fn feature(title: &str, description: &str) -> Markup {
    html! {
        div.card.feature {
            div.card-title-row {
                span.check aria-hidden="true" { "\u{2713}" }
                h4 { (title) }
            }
            p.card-body { (description) }
        }
    }
}

/// Plain in-page navigation link.
///
/// With `closes_menu` set the link carries the `data-menu-close` hook so
/// activating it also collapses the mobile menu.
pub fn nav_link(href: &str, label: &str, closes_menu: bool) -> Markup {
    html! {
        a.nav-link href=(href) data-menu-close[closes_menu] { (label) }
    }
}

/// Visual weight of a call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaStyle {
    /// Filled accent button.
    Primary,
    /// Outlined button.
    Secondary,
}

impl CtaStyle {
    fn class(self) -> &'static str {
        match self {
            CtaStyle::Primary => "cta cta-primary",
            CtaStyle::Secondary => "cta cta-secondary",
        }
    }
}

/// A call-to-action link.
#[derive(Debug, Clone, Copy)]
pub struct Cta<'a> {
    pub href: &'a str,
    pub label: &'a str,
    pub style: CtaStyle,
    /// Opens in a new tab with `rel="noreferrer"`.
    pub external: bool,
    /// Trailing glyph, e.g. an arrow.
    pub icon: Option<&'a str>,
    pub closes_menu: bool,
}

impl<'a> Cta<'a> {
    pub fn new(href: &'a str, label: &'a str) -> Self {
        Self {
            href,
            label,
            style: CtaStyle::Primary,
            external: false,
            icon: None,
            closes_menu: false,
        }
    }

    pub fn secondary(mut self) -> Self {
        self.style = CtaStyle::Secondary;
        self
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn closes_menu(mut self) -> Self {
        self.closes_menu = true;
        self
    }

    pub fn render(&self) -> Markup {
        html! {
            a class=(self.style.class()) href=(self.href)
                target=[self.external.then_some("_blank")]
                rel=[self.external.then_some("noreferrer")]
                data-menu-close[self.closes_menu] {
                (self.label)
                @if let Some(icon) = self.icon {
                    " "
                    span.cta-icon aria-hidden="true" { (icon) }
                }
            }
        }
    }
}

/// Bulleted list.
pub fn bullet_list(items: &[String]) -> Markup {
    html! {
        ul.bullets {
            @for item in items {
                li { (item) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_carries_id_and_label() {
        let html = section("work", html! { p { "x" } }).into_string();
        assert!(html.contains(r#"id="work""#));
        assert!(html.contains(r#"aria-label="work""#));
    }

    #[test]
    fn container_appends_class() {
        let html = container("hero", html! {}).into_string();
        assert!(html.contains(r#"class="container hero""#));
    }

    #[test]
    fn badge_renders_label() {
        let html = badge("What I Do").into_string();
        assert!(html.contains("What I Do"));
        assert!(html.contains("badge"));
    }

    #[test]
    fn feature_renders_title_and_description() {
        let html = feature("Growth Loops", "Compounding mechanics.").into_string();
        assert!(html.contains("<h4>Growth Loops</h4>"));
        assert!(html.contains("Compounding mechanics."));
    }

    #[test]
    fn nav_link_close_hook_is_optional() {
        let plain = nav_link("#work", "Work", false).into_string();
        assert!(!plain.contains("data-menu-close"));
        let closing = nav_link("#work", "Work", true).into_string();
        assert!(closing.contains("data-menu-close"));
        assert!(closing.contains(r##"href="#work""##));
    }

    #[test]
    fn external_cta_opens_new_tab() {
        let html = Cta::new("https://calendly.com/x", "Book a Call")
            .external()
            .icon("\u{2192}")
            .render()
            .into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer""#));
        assert!(html.contains("cta-primary"));
        assert!(html.contains("cta-icon"));
    }

    #[test]
    fn internal_cta_has_no_target() {
        let html = Cta::new("#work", "See example work")
            .secondary()
            .render()
            .into_string();
        assert!(!html.contains("target="));
        assert!(html.contains("cta-secondary"));
    }

    #[test]
    fn text_is_escaped() {
        let html = pill("<b>x</b>").into_string();
        assert!(html.contains("&lt;b&gt;"));
    }
}
