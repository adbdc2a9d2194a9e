//! Page composition.
//!
//! [`render_page`] assembles the whole document top-down from
//! [`SiteConfig`]: sticky header with primary and mobile navigation, the
//! content sections in fixed order inside `main#home`, and the footer.
//! Data only flows down; the one piece of mutable UI state (the mobile menu)
//! is rendered in its initial [`MenuState`] and owned by the browser after
//! load.
//!
//! ## Section order
//!
//! ```text
//! main#home
//! ├── hero pitch
//! ├── #work      brand grid (grouped brands, flattened)
//! ├── #services  feature cards
//! ├── #method    numbered steps
//! ├── #case      case studies
//! ├── #about     copy, skills, expertise snapshot
//! └── #contact   call/email/WhatsApp, details, fit + engagement lists
//! footer
//! ├── © year, Privacy / Terms links
//! ├── #privacy
//! └── #terms
//! ```

use crate::components::{Cta, badge, bullet_list, container, feature, nav_link, pill, section};
use crate::config::{self, SiteConfig};
use crate::content::{CaseStudy, Feature};
use crate::menu::{self, MenuState};
use crate::seo;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");

const ARROW: &str = "\u{2192}";

/// In-page anchor identifiers shared by navigation and section wrappers.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";
    pub const SERVICES: &str = "services";
    pub const METHOD: &str = "method";
    pub const CASE: &str = "case";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
    pub const PRIVACY: &str = "privacy";
    pub const TERMS: &str = "terms";

    /// Content anchors in page order. Header navigation may target these.
    pub const SECTIONS: [&str; 7] = [HOME, WORK, SERVICES, METHOD, CASE, ABOUT, CONTACT];

    /// Footer legal notes.
    pub const LEGAL: [&str; 2] = [PRIVACY, TERMS];

    pub fn all() -> impl Iterator<Item = &'static str> {
        SECTIONS.into_iter().chain(LEGAL)
    }
}

/// Full stylesheet: color custom properties followed by the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Renders the complete page. `year` is stamped into the footer.
pub fn render_page(config: &SiteConfig, year: i32) -> Markup {
    let state = MenuState::default();
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                (seo::head_metadata(config))
                style { (PreEscaped(stylesheet(config))) }
            }
            body {
                (site_header(config, state))
                main id=(anchors::HOME) {
                    (hero(config))
                    (work(config))
                    (services(config))
                    (method(config))
                    (cases(config))
                    (about(config))
                    (contact(config))
                }
                (site_footer(config, year))
                (menu::script())
            }
        }
    }
}

// ============================================================================
// Header
// ============================================================================

fn book_a_call(config: &SiteConfig) -> Cta<'_> {
    Cta::new(&config.contact.scheduling_url, "Book a Call")
        .external()
        .icon(ARROW)
}

/// Navigation links, with or without the close-menu hook.
fn nav_links(config: &SiteConfig, closes_menu: bool) -> Markup {
    html! {
        @for entry in &config.content.nav {
            (nav_link(&entry.href(), &entry.label, closes_menu))
        }
    }
}

/// Sticky header: brand mark, wide navigation, toggle and mobile panel.
fn site_header(config: &SiteConfig, state: MenuState) -> Markup {
    let mobile_cta = book_a_call(config).closes_menu();
    html! {
        header.site-header {
            div.container.header-bar {
                a.brand href={ "#" (anchors::HOME) } {
                    img.avatar src=(config.site.avatar) alt=(config.site.name) width="24" height="24";
                    span { (config.site.name) }
                }
                nav.primary-nav aria-label="Primary" {
                    (nav_links(config, false))
                    (book_a_call(config).render())
                }
                (menu::toggle_button(state))
            }
            (menu::panel(state, html! {
                (nav_links(config, true))
                (mobile_cta.render())
            }))
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn hero(config: &SiteConfig) -> Markup {
    let hero = &config.content.hero;
    let work_href = format!("#{}", anchors::WORK);
    container(
        "hero",
        html! {
            (badge(&hero.badge))
            h1 { (hero.headline) }
            p.lead { (hero.pitch) }
            div.cta-row {
                (Cta::new(&config.contact.scheduling_url, &hero.primary_cta).external().icon(ARROW).render())
                (Cta::new(&work_href, &hero.secondary_cta).secondary().render())
            }
        },
    )
}

fn work(config: &SiteConfig) -> Markup {
    let brands = &config.content.brands;
    section(
        anchors::WORK,
        container(
            "block",
            html! {
                (badge(&brands.badge))
                div.brand-grid {
                    @for brand in brands.flattened() {
                        div.brand { (brand) }
                    }
                }
                p.note { (brands.note) }
            },
        ),
    )
}

fn services(config: &SiteConfig) -> Markup {
    let services = &config.content.services;
    section(
        anchors::SERVICES,
        container(
            "block",
            html! {
                (badge(&services.badge))
                h2 { (services.heading) }
                p.intro { (services.intro) }
                div.grid.grid-3 {
                    @for f in &services.features {
                        (feature(&f.title, &f.description))
                    }
                }
            },
        ),
    )
}

fn step_card(position: usize, step: &Feature) -> Markup {
    html! {
        div.card.step {
            h4 { (position) " \u{b7} " (step.title) }
            p.card-body { (step.description) }
        }
    }
}

fn method(config: &SiteConfig) -> Markup {
    let method = &config.content.method;
    section(
        anchors::METHOD,
        container(
            "block",
            html! {
                (badge(&method.badge))
                div.grid.grid-4 {
                    @for (i, step) in method.steps.iter().enumerate() {
                        (step_card(i + 1, step))
                    }
                }
            },
        ),
    )
}

fn case_card(study: &CaseStudy) -> Markup {
    html! {
        div.card.case {
            h3 { (study.title) }
            (bullet_list(&study.bullets))
            div.pill-row {
                @for outcome in &study.outcomes {
                    (pill(outcome))
                }
            }
            p.case-result { (study.result) }
        }
    }
}

fn cases(config: &SiteConfig) -> Markup {
    let cases = &config.content.cases;
    section(
        anchors::CASE,
        container(
            "block",
            html! {
                (badge(&cases.badge))
                div.grid.grid-2 {
                    @for study in &cases.studies {
                        (case_card(study))
                    }
                }
            },
        ),
    )
}

/// Markdown to HTML for the about copy.
fn markdown(source: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    out
}

fn about(config: &SiteConfig) -> Markup {
    let about = &config.content.about;
    section(
        anchors::ABOUT,
        container(
            "block",
            html! {
                (badge(&about.badge))
                div.about-grid {
                    div.about-copy {
                        h2 { (about.heading) }
                        div.prose { (PreEscaped(markdown(&about.body))) }
                        div.pill-row {
                            @for skill in &about.skills {
                                (pill(skill))
                            }
                        }
                    }
                    div.card.snapshot {
                        h4 { (about.snapshot_title) }
                        (bullet_list(&about.snapshot))
                    }
                }
            },
        ),
    )
}

fn contact(config: &SiteConfig) -> Markup {
    let copy = &config.content.contact;
    let targets = &config.contact;
    let mailto = targets.mailto();
    section(
        anchors::CONTACT,
        container(
            "block",
            html! {
                (badge(&copy.badge))
                div.grid.grid-2 {
                    div.card.call {
                        h3 { (copy.call_heading) }
                        p.card-body { (copy.call_blurb) }
                        div.cta-row {
                            (Cta::new(&targets.scheduling_url, "Book a discovery call").external().icon("\u{27a4}").render())
                            (Cta::new(&mailto, "Email me").secondary().icon("\u{2709}").render())
                            @if let Some(whatsapp) = &targets.whatsapp {
                                (Cta::new(whatsapp, "WhatsApp").secondary().external().icon("\u{1f4ac}").render())
                            }
                        }
                        div.contact-details {
                            span.detail { span.detail-icon aria-hidden="true" { "\u{2709}" } " " (targets.email) }
                            a.detail href=(targets.linkedin) target="_blank" rel="noreferrer" {
                                span.detail-icon aria-hidden="true" { "in" } " LinkedIn"
                            }
                            span.detail.muted { span.detail-icon aria-hidden="true" { "\u{260e}" } " " (targets.phone) }
                        }
                    }
                    div.card.fit {
                        h4 { (copy.ideal_fits_title) }
                        (bullet_list(&copy.ideal_fits))
                        h4 { (copy.engagement_modes_title) }
                        (bullet_list(&copy.engagement_modes))
                    }
                }
            },
        ),
    )
}

// ============================================================================
// Footer
// ============================================================================

fn legal_note(id: &str, title: &str, body: &str) -> Markup {
    section(
        id,
        html! {
            h5 { (title) }
            p { (body) }
        },
    )
}

fn site_footer(config: &SiteConfig, year: i32) -> Markup {
    let legal = &config.content.legal;
    html! {
        footer.site-footer {
            div.container.footer-bar {
                p.copyright { "\u{a9} " (year) " " (config.site.name) ". All rights reserved." }
                nav.legal-links aria-label="Legal" {
                    (nav_link(&format!("#{}", anchors::PRIVACY), "Privacy", false))
                    (nav_link(&format!("#{}", anchors::TERMS), "Terms", false))
                }
            }
            div.container.legal-notes {
                (legal_note(anchors::PRIVACY, "Privacy", &legal.privacy))
                (legal_note(anchors::TERMS, "Terms", &legal.terms))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::collections::HashSet;

    fn page() -> String {
        render_page(&SiteConfig::default(), 2026).into_string()
    }

    #[test]
    fn page_starts_with_doctype() {
        assert!(page().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn anchors_are_unique() {
        let all: Vec<&str> = anchors::all().collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn rendered_ids_are_unique() {
        let html = page();
        let ids = attr_values(&html, "id");
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "duplicate ids: {ids:?}");
        for anchor in anchors::all() {
            assert!(ids.iter().any(|id| id == anchor), "missing #{anchor}");
        }
    }

    #[test]
    fn every_fragment_link_resolves_to_one_id() {
        let html = page();
        let ids = attr_values(&html, "id");
        for href in attr_values(&html, "href") {
            if let Some(target) = href.strip_prefix('#') {
                let hits = ids.iter().filter(|id| *id == target).count();
                assert_eq!(hits, 1, "href #{target} resolves to {hits} ids");
            }
        }
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = page();
        let positions: Vec<usize> = anchors::SECTIONS
            .iter()
            .map(|a| html.find(&format!(r#"id="{a}""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn header_shows_primary_nav_and_cta() {
        let config = SiteConfig::default();
        let html = site_header(&config, MenuState::Closed).into_string();
        let primary = between(&html, "primary-nav", "</nav>");
        for label in ["Work", "Services", "Method", "About", "Contact"] {
            assert!(primary.contains(&format!(">{label}</a>")), "missing {label}");
        }
        assert!(primary.contains("Book a Call"));
        assert!(primary.contains(&format!(r#"href="{}""#, config.contact.scheduling_url)));
    }

    #[test]
    fn mobile_panel_links_close_the_menu() {
        let config = SiteConfig::default();
        let html = site_header(&config, MenuState::Closed).into_string();
        let panel = between(&html, r#"id="mobile-menu""#, "</header>");
        assert_eq!(count(panel, "data-menu-close"), 6);
        assert_eq!(count(panel, "<a "), 6);
    }

    #[test]
    fn mobile_panel_starts_hidden() {
        let html = page();
        assert!(html.contains(r#"id="mobile-menu" hidden"#));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn brand_grid_is_flattened_groups() {
        let config = SiteConfig::default();
        let html = work(&config).into_string();
        let rendered = element_texts(&html, r#"<div class="brand">"#);
        let expected: Vec<String> = config.content.brands.groups.concat();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn services_render_every_feature() {
        let config = SiteConfig::default();
        let html = services(&config).into_string();
        assert_eq!(count(&html, "card feature"), config.content.services.features.len());
    }

    #[test]
    fn method_steps_are_numbered() {
        let html = method(&SiteConfig::default()).into_string();
        assert!(html.contains("1 \u{b7} Diagnose"));
        assert!(html.contains("4 \u{b7} Scale"));
        assert_eq!(count(&html, "card step"), 4);
    }

    #[test]
    fn case_studies_render_outcome_pills() {
        let html = cases(&SiteConfig::default()).into_string();
        assert_eq!(count(&html, "card case"), 2);
        assert_eq!(count(&html, r#"class="pill""#), 6);
    }

    #[test]
    fn about_renders_markdown_and_skills() {
        let mut config = SiteConfig::default();
        config.content.about.body = "Some **bold** claim.".to_string();
        let html = about(&config).into_string();
        assert!(html.contains("<strong>bold</strong>"));
        assert_eq!(count(&html, r#"class="pill""#), config.content.about.skills.len());
    }

    #[test]
    fn contact_has_one_mailto_and_one_scheduling_link() {
        let config = SiteConfig::default();
        let html = contact(&config).into_string();
        let hrefs = attr_values(&html, "href");
        let mailtos: Vec<&String> = hrefs.iter().filter(|h| h.starts_with("mailto:")).collect();
        assert_eq!(mailtos.len(), 1);
        assert!(mailtos[0].contains(&config.contact.email));
        let scheduling = hrefs
            .iter()
            .filter(|h| h.contains(&config.contact.scheduling_url))
            .count();
        assert_eq!(scheduling, 1);
    }

    #[test]
    fn contact_omits_whatsapp_when_unset() {
        let mut config = SiteConfig::default();
        config.contact.whatsapp = None;
        let html = contact(&config).into_string();
        assert!(!html.contains("WhatsApp"));
    }

    #[test]
    fn contact_shows_phone_as_text() {
        let config = SiteConfig::default();
        let html = contact(&config).into_string();
        assert!(html.contains(&config.contact.phone));
        assert!(!html.contains("tel:"));
    }

    #[test]
    fn footer_stamps_year() {
        let html = render_page(&SiteConfig::default(), 2031).into_string();
        assert!(html.contains("\u{a9} 2031 Ferhan Sahin. All rights reserved."));
    }

    #[test]
    fn custom_nav_is_rendered_in_both_menus() {
        let mut config = SiteConfig::default();
        config.content.nav.truncate(2);
        let html = site_header(&config, MenuState::Closed).into_string();
        assert_eq!(count(&html, r##"href="#work""##), 2);
        assert_eq!(count(&html, r##"href="#method""##), 0);
    }

    #[test]
    fn stylesheet_prepends_colors() {
        let css = stylesheet(&SiteConfig::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".mobile-menu"));
    }
}
