//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is an inventory of what the page contains or what a build wrote,
//! not a log. Each entity leads with a positional index and its label, with
//! details on indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 #home
//! 002 #work ← Work
//! 003 #services ← Services
//! ...
//!
//! Content
//!     Brands: 32 in 4 groups
//!     Services: 6 features
//!
//! Config
//!     config.toml
//!     public/
//! ```
//!
//! ## Build
//!
//! ```text
//! Page → index.html
//! Sitemap → sitemap.xml
//! Robots → robots.txt
//!
//! Assets
//! 001 favicon.ico
//! 002 og-image.jpg
//!
//! Generated 3 files, 2 assets for https://ferhansahin.com
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::generate::BuildReport;
use crate::page::anchors;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `n` followed by the singular or plural noun.
fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn describe_artifact(path: &Path) -> &'static str {
    match path.to_str() {
        Some("index.html") => "Page",
        Some("sitemap.xml") => "Sitemap",
        Some("robots.txt") => "Robots",
        _ => "File",
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the page inventory: anchors with the nav labels pointing at them,
/// content counts, contact targets and the config sources present.
pub fn format_check_output(config: &SiteConfig, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let content = &config.content;

    lines.push("Sections".to_string());
    for (i, anchor) in anchors::all().enumerate() {
        let labels: Vec<&str> = content
            .nav
            .iter()
            .filter(|n| n.target == anchor)
            .map(|n| n.label.as_str())
            .collect();
        if labels.is_empty() {
            lines.push(format!("{} #{}", format_index(i + 1), anchor));
        } else {
            lines.push(format!(
                "{} #{} \u{2190} {}",
                format_index(i + 1),
                anchor,
                labels.join(", ")
            ));
        }
    }

    let brand_count = content.brands.flattened().count();
    lines.push(String::new());
    lines.push("Content".to_string());
    lines.push(format!(
        "    Brands: {} in {}",
        brand_count,
        plural(content.brands.groups.len(), "group", "groups")
    ));
    lines.push(format!(
        "    Services: {}",
        plural(content.services.features.len(), "feature", "features")
    ));
    lines.push(format!(
        "    Method: {}",
        plural(content.method.steps.len(), "step", "steps")
    ));
    lines.push(format!(
        "    Cases: {}",
        plural(content.cases.studies.len(), "study", "studies")
    ));

    lines.push(String::new());
    lines.push("Contact".to_string());
    lines.push(format!("    Email: {}", config.contact.email));
    lines.push(format!("    Scheduling: {}", config.contact.scheduling_url));
    if let Some(whatsapp) = &config.contact.whatsapp {
        lines.push(format!("    WhatsApp: {}", whatsapp));
    }
    lines.push(format!("    Site URL: {}", config.site.url));

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (stock defaults)".to_string());
    }
    if source_root.join(&config.export.assets_dir).is_dir() {
        lines.push(format!("    {}/", config.export.assets_dir));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(config, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the build summary: generated artifacts, then passthrough assets.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    for path in &report.generated {
        lines.push(format!(
            "{} \u{2192} {}",
            describe_artifact(path),
            path.display()
        ));
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for (i, asset) in report.assets.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), asset.display()));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} for {}",
        plural(report.generated.len(), "file", "files"),
        plural(report.assets.len(), "asset", "assets"),
        report.site_url
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
