//! # onepager
//!
//! A static one-page site generator for an individual consultant's marketing
//! site. One `config.toml` describes the person, their contact targets and
//! every line of page copy; the build renders a single HTML page plus the
//! sitemap and robots files and copies the `public/` assets next to them.
//!
//! # Architecture: Config In, Files Out
//!
//! ```text
//! config.toml ─┐
//! stock defaults ─┴→ SiteConfig → page::render_page → index.html
//!                             ├→ export::render_sitemap → sitemap.xml
//!                             ├→ export::render_robots  → robots.txt
//! public/ ───────────────────────────────────────────→ (copied verbatim)
//! ```
//!
//! Rendering is a tree of pure functions returning [`maud::Markup`]. All
//! content is passed down from one immutable [`config::SiteConfig`]; nothing
//! flows back up. The only runtime-dependent value is the copyright year,
//! taken from the build date.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, merging over stock defaults, `SITE_URL` override, validation |
//! | [`content`] | Page copy records (brands, features, steps, cases, about, contact lists) with the canonical defaults |
//! | [`components`] | Presentational primitives: container, section, badge, pill, feature card, nav link, call-to-action |
//! | [`menu`] | The two-state mobile menu and its inline client script |
//! | [`page`] | Page composition: header, sections in fixed order, footer; anchor identifiers |
//! | [`seo`] | Head metadata, Open Graph/Twitter cards, JSON-LD structured data |
//! | [`export`] | Sitemap and robots policy, trailing-slash URL normalization |
//! | [`generate`] | Writes the static site and copies passthrough assets |
//! | [`output`] | CLI output formatting for `build` and `check` |
//!
//! # Design Decisions
//!
//! ## One Config Object
//!
//! Contact details, brand lists and copy used to live as constants scattered
//! through page code, duplicated between drafts. They are now one
//! [`config::SiteConfig`] with the canonical copy as its `Default`, so there
//! is a single place to change and nothing to drift.
//!
//! ## Menu State Without a Framework
//!
//! The page has exactly one mutable value: whether the mobile menu is open.
//! [`menu::MenuState`] defines the transitions in Rust, where they are unit
//! tested, and a ~20 line inline script applies the same table in the
//! browser. The server-rendered markup is always the initial closed state.
//!
//! ## Maud Over Template Engines
//!
//! Templates are Rust functions: malformed markup is a build error, every
//! interpolation is escaped, and there is no template directory to ship.
//!
//! ## Static Export Only
//!
//! Output is plain files. Images are copied unoptimized because optimization
//! would need a running server, and no custom HTTP headers are emitted.

pub mod components;
pub mod config;
pub mod content;
pub mod export;
pub mod generate;
pub mod menu;
pub mod output;
pub mod page;
pub mod seo;

#[cfg(test)]
pub(crate) mod test_helpers;
