//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. One `SiteConfig`
//! carries everything the page needs: identity, contact identifiers, SEO
//! strings, export settings, colors and the full page copy. It is passed
//! down to the renderers unchanged.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml     # Overrides stock defaults (optional)
//! └── public/         # Passthrough assets (favicon, og-image.jpg, ...)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Ferhan Sahin"
//! url = "https://ferhansahin.com"   # SITE_URL env var wins when set
//! avatar = "/og-image.jpg"
//! locale = "en_US"
//!
//! [contact]
//! email = "ferhanthenomad@gmail.com"
//! phone = "+351 93828 4428"
//! linkedin = "https://www.linkedin.com/in/ferhansahin/"
//! whatsapp = "http://wa.me/351938284428"
//! scheduling_url = "https://calendly.com/ferhanthenomad/30min"
//!
//! [export]
//! trailing_slash = true
//! changefreq = "monthly"
//! priority = 1.0
//! assets_dir = "public"
//! ```
//!
//! `[seo]`, `[colors.*]` and `[content.*]` follow the same pattern; run
//! `onepager gen-config` for the documented stock file.
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [contact]
//! email = "hello@example.com"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::content::Content;
use crate::page::anchors;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding `[site] url`.
pub const SITE_URL_ENV: &str = "SITE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults that reproduce the canonical site. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity of the site owner and the deployed base URL.
    pub site: SiteInfo,
    /// Outbound contact targets.
    pub contact: ContactConfig,
    /// Head metadata and structured data strings.
    pub seo: SeoConfig,
    /// Static-export settings (sitemap, robots, URL shape, assets).
    pub export: ExportConfig,
    /// Color palette injected as CSS custom properties.
    pub colors: ColorConfig,
    /// Page copy.
    pub content: Content,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.site.url) {
            return Err(ConfigError::Validation(format!(
                "site.url must start with http:// or https:// (got {:?})",
                self.site.url
            )));
        }
        if !self.contact.email.contains('@') {
            return Err(ConfigError::Validation(
                "contact.email must be an email address".into(),
            ));
        }
        if !is_http_url(&self.contact.scheduling_url) {
            return Err(ConfigError::Validation(
                "contact.scheduling_url must start with http:// or https://".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.export.priority) {
            return Err(ConfigError::Validation(
                "export.priority must be between 0.0 and 1.0".into(),
            ));
        }
        if self.content.nav.is_empty() {
            return Err(ConfigError::Validation(
                "content.nav must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.content.nav {
            if !anchors::SECTIONS.contains(&entry.target.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "content.nav entry {:?} targets unknown section {:?} (known: {})",
                    entry.label,
                    entry.target,
                    anchors::SECTIONS.join(", ")
                )));
            }
            if !seen.insert(entry.target.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "content.nav targets section {:?} more than once",
                    entry.target
                )));
            }
        }
        if self.content.brands.flattened().any(|b| b.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "content.brands.groups must not contain empty names".into(),
            ));
        }
        Ok(())
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("https://") || s.starts_with("http://")
}

/// Identity of the site owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Display name used in the header brand mark and the footer.
    pub name: String,
    /// Deployed base URL, without trailing slash.
    pub url: String,
    /// Site-relative path of the header avatar image.
    pub avatar: String,
    /// Open Graph locale.
    pub locale: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Ferhan Sahin".to_string(),
            url: "https://ferhansahin.com".to_string(),
            avatar: "/og-image.jpg".to_string(),
            locale: "en_US".to_string(),
        }
    }
}

/// Outbound contact targets. Opaque strings, only the email and scheduling
/// URL are checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    /// Displayed as text, never linked.
    pub phone: String,
    pub linkedin: String,
    /// WhatsApp deep link. An empty string hides the button; since the user
    /// file is merged over the stock link, deleting the key does not.
    pub whatsapp: Option<String>,
    /// External scheduling service used by every call-to-action.
    pub scheduling_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "ferhanthenomad@gmail.com".to_string(),
            phone: "+351 93828 4428".to_string(),
            linkedin: "https://www.linkedin.com/in/ferhansahin/".to_string(),
            whatsapp: Some("http://wa.me/351938284428".to_string()),
            scheduling_url: "https://calendly.com/ferhanthenomad/30min".to_string(),
        }
    }
}

impl ContactConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Head metadata and structured data strings. Static, never computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Title used by Open Graph and Twitter cards.
    pub share_title: String,
    pub og_description: String,
    pub twitter_description: String,
    /// Site-relative path of the social preview image.
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    /// Organization description in the JSON-LD block.
    pub organization_name: String,
    pub organization_description: String,
    pub job_title: String,
    /// ISO 3166 country code for the postal address.
    pub country: String,
    pub area_served: String,
    pub service_types: Vec<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title: "Ferhan Sahin - Fractional Growth Marketing Partner for Brands".to_string(),
            description: "Fractional growth marketing leadership. Build predictable, scalable \
                          growth engines rooted in product value \u{2014} not excessive ad spend. \
                          Expert in PLG, activation, and retention."
                .to_string(),
            keywords: [
                "fractional growth marketing",
                "fractional CMO",
                "product-led growth",
                "PLG",
                "growth strategy",
                "SaaS marketing",
                "activation",
                "retention",
                "growth loops",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            share_title: "Ferhan Sahin - Fractional Growth Marketing Partner".to_string(),
            og_description: "Build predictable, scalable growth engines rooted in product value. \
                             Fractional growth marketing leadership for SaaS and e-commerce brands."
                .to_string(),
            twitter_description: "Build predictable, scalable growth engines rooted in product \
                                  value. Fractional growth marketing leadership."
                .to_string(),
            image: "/og-image.jpg".to_string(),
            image_width: 1142,
            image_height: 1600,
            organization_name: "Ferhan Sahin - Fractional Growth Marketing".to_string(),
            organization_description: "Fractional growth marketing leadership for brands. \
                                       Building predictable, scalable growth engines rooted in \
                                       product value."
                .to_string(),
            job_title: "Fractional Growth Marketing Leader".to_string(),
            country: "PT".to_string(),
            area_served: "Worldwide".to_string(),
            service_types: [
                "Growth Marketing Strategy",
                "Product-Led Growth",
                "Fractional CMO",
                "Marketing Leadership",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Sitemap change frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// Static-export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Normalize exported URLs to end in `/`.
    pub trailing_slash: bool,
    pub changefreq: ChangeFreq,
    /// Sitemap priority, `0.0..=1.0`.
    pub priority: f32,
    /// Directory (relative to the source dir) copied verbatim to the output
    /// root. Images are passed through unoptimized.
    pub assets_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            trailing_slash: true,
            changefreq: ChangeFreq::Monthly,
            priority: 1.0,
            assets_dir: "public".to_string(),
        }
    }
}

/// Color configuration. The page is light-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Card and header surface.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (nav links, card bodies, footer).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Call-to-action background.
    pub accent: String,
    /// Call-to-action text.
    pub accent_text: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#f9fafb".to_string(),
            surface: "#ffffff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#111827".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config.toml, using stock defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    debug!(path = %config_path.display(), "loaded config overlay");
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: SiteConfig = merged.try_into()?;
    config.contact.whatsapp = config
        .contact
        .whatsapp
        .take()
        .filter(|link| !link.trim().is_empty());
    Ok(config)
}

/// Apply environment overrides through `lookup`.
///
/// Only `SITE_URL` is honoured; empty values are ignored. A trailing `/` is
/// stripped so URL joining stays uniform.
pub fn apply_env_overrides<F>(config: &mut SiteConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(SITE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        debug!(%url, "site url overridden from {}", SITE_URL_ENV);
        config.site.url = url.trim().to_string();
    }
    while config.site.url.ends_with('/') {
        config.site.url.pop();
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// applies the `SITE_URL` environment override and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let mut config = resolve_config(base, overlay)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with the most common keys.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# onepager configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Identity
# ---------------------------------------------------------------------------
[site]
# Shown in the header brand mark and the footer copyright line.
name = "Ferhan Sahin"
# Deployed base URL. The SITE_URL environment variable wins when set.
url = "https://ferhansahin.com"
# Header avatar, relative to the site root (put the file in public/).
avatar = "/og-image.jpg"
locale = "en_US"

# ---------------------------------------------------------------------------
# Contact targets
# ---------------------------------------------------------------------------
[contact]
email = "ferhanthenomad@gmail.com"
# Displayed as text only.
phone = "+351 93828 4428"
linkedin = "https://www.linkedin.com/in/ferhansahin/"
# Set to "" to hide the WhatsApp button.
whatsapp = "http://wa.me/351938284428"
# Every "Book a Call" button points here.
scheduling_url = "https://calendly.com/ferhanthenomad/30min"

# ---------------------------------------------------------------------------
# Static export
# ---------------------------------------------------------------------------
[export]
# Normalize exported URLs to end in "/".
trailing_slash = true
# Sitemap change frequency: always, hourly, daily, weekly, monthly, yearly, never.
changefreq = "monthly"
# Sitemap priority (0.0 - 1.0).
priority = 1.0
# Copied verbatim to the output root (images are not optimized).
assets_dir = "public"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#f9fafb"
surface = "#ffffff"
text = "#111827"
text_muted = "#4b5563"
border = "#e5e7eb"
accent = "#111827"
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Page copy
# ---------------------------------------------------------------------------
# Every block of the page can be overridden under [content.*]:
#   [content.hero] [content.brands] [content.services] [content.method]
#   [content.cases] [content.about] [content.contact] [content.legal]
# Arrays replace the stock array wholesale.

# Header navigation. Targets must be one of:
#   home, work, services, method, case, about, contact
[[content.nav]]
label = "Work"
target = "work"

[[content.nav]]
label = "Services"
target = "services"

[[content.nav]]
label = "Method"
target = "method"

[[content.nav]]
label = "About"
target = "about"

[[content.nav]]
label = "Contact"
target = "contact"

[content.hero]
badge = "Fractional Growth Marketing"
headline = "Fractional Growth Partner for Brands."
primary_cta = "Let's build your growth engine"
secondary_cta = "See example work"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-accent: {accent};
    --color-accent-text: {accent_text};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        accent = colors.accent,
        accent_text = colors.accent_text,
    )
}
