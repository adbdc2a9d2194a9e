//! Static export.
//!
//! Renders the page and writes every artifact of the static site into the
//! output directory. There is no server-side runtime: the output can be
//! dropped on any static host.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The page
//! ├── sitemap.xml       # One entry per exported page
//! ├── robots.txt        # Allow-all policy + sitemap pointer
//! ├── og-image.jpg      # Copied verbatim from public/
//! └── favicon.ico
//! ```
//!
//! ## Assets
//!
//! Everything under the configured `assets_dir` is copied byte for byte,
//! preserving subdirectories. Images are not resized or re-encoded.

use crate::config::SiteConfig;
use crate::{export, page};
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Files the build writes itself. Assets with these names at the output root
/// are skipped.
pub const GENERATED: [&str; 3] = ["index.html", "sitemap.xml", "robots.txt"];

/// Site-relative paths of every exported page.
pub const PAGES: [&str; 1] = ["/"];

/// What a build wrote, for the CLI summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Resolved base URL the artifacts were generated for.
    pub site_url: String,
    /// Year stamped into the footer.
    pub year: i32,
    /// Generated files, relative to the output directory.
    pub generated: Vec<PathBuf>,
    /// Passthrough assets, relative to the output directory.
    pub assets: Vec<PathBuf>,
}

/// Render and write the whole site.
///
/// `today` drives the footer year and the sitemap `lastmod`; the CLI passes
/// the local calendar date.
pub fn generate(
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
    today: NaiveDate,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets = copy_assets(&source_dir.join(&config.export.assets_dir), output_dir)?;

    let year = today.year();
    let site_url = config.site.url.clone();
    let mut generated = Vec::new();

    let index = page::render_page(config, year);
    write(output_dir, "index.html", &index.into_string(), &mut generated)?;

    let sitemap = export::render_sitemap(&site_url, &PAGES, &config.export, today);
    write(output_dir, "sitemap.xml", &sitemap, &mut generated)?;

    let robots = export::render_robots(&site_url);
    write(output_dir, "robots.txt", &robots, &mut generated)?;

    info!(
        output = %output_dir.display(),
        files = generated.len(),
        assets = assets.len(),
        "site generated"
    );

    Ok(BuildReport {
        site_url,
        year,
        generated,
        assets,
    })
}

fn write(
    output_dir: &Path,
    name: &str,
    contents: &str,
    generated: &mut Vec<PathBuf>,
) -> std::io::Result<()> {
    fs::write(output_dir.join(name), contents)?;
    debug!(file = name, bytes = contents.len(), "wrote");
    generated.push(PathBuf::from(name));
    Ok(())
}

/// Copy every file under `assets_dir` into `output_dir`, unmodified.
///
/// A missing assets directory is not an error; the site just has no
/// passthrough files. Root files named in [`GENERATED`] are skipped with a
/// warning. Returns the copied paths relative to `output_dir`,
/// sorted.
pub fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    if !assets_dir.is_dir() {
        debug!(path = %assets_dir.display(), "no assets directory");
        return Ok(Vec::new());
    }

    let mut copied = Vec::new();
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }
        if !entry.file_type().is_dir() && GENERATED.iter().any(|name| rel == Path::new(name)) {
            warn!(asset = %rel.display(), "skipping asset, the build generates this file");
            continue;
        }
        let dst = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            fs::copy(entry.path(), &dst)?;
            debug!(asset = %rel.display(), "copied");
            copied.push(rel.to_path_buf());
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn generate_writes_all_artifacts() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), source.path(), out.path(), today()).unwrap();

        for name in ["index.html", "sitemap.xml", "robots.txt"] {
            assert!(out.path().join(name).is_file(), "missing {name}");
        }
        assert_eq!(report.generated.len(), 3);
        assert!(report.assets.is_empty());
        assert_eq!(report.year, 2026);
        assert_eq!(report.site_url, "https://ferhansahin.com");
    }

    #[test]
    fn generate_stamps_year_from_date() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        generate(&SiteConfig::default(), source.path(), out.path(), date).unwrap();
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("\u{a9} 2030 "));
        let sitemap = fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<lastmod>2030-01-01</lastmod>"));
    }

    #[test]
    fn generate_uses_configured_site_url() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.site.url = "https://staging.example.com".to_string();
        generate(&config, source.path(), out.path(), today()).unwrap();
        let robots = fs::read_to_string(out.path().join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://staging.example.com/sitemap.xml"));
        let sitemap = fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://staging.example.com/</loc>"));
    }

    #[test]
    fn assets_are_copied_verbatim() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let public = source.path().join("public");
        fs::create_dir_all(public.join("img")).unwrap();
        let bytes = [0xffu8, 0xd8, 0xff, 0xe0, 0x00, 0x10];
        fs::write(public.join("og-image.jpg"), bytes).unwrap();
        fs::write(public.join("img/logo.svg"), "<svg/>").unwrap();

        let report = generate(&SiteConfig::default(), source.path(), out.path(), today()).unwrap();

        assert_eq!(
            report.assets,
            [PathBuf::from("img/logo.svg"), PathBuf::from("og-image.jpg")]
        );
        assert_eq!(fs::read(out.path().join("og-image.jpg")).unwrap(), bytes);
        assert_eq!(
            fs::read_to_string(out.path().join("img/logo.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn assets_never_replace_generated_files() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let public = source.path().join("public");
        fs::create_dir_all(public.join("docs")).unwrap();
        fs::write(public.join("robots.txt"), "User-agent: *\nDisallow: /\n").unwrap();
        fs::write(public.join("index.html"), "stale").unwrap();
        fs::write(public.join("docs/index.html"), "nested").unwrap();

        let report = generate(&SiteConfig::default(), source.path(), out.path(), today()).unwrap();

        assert_eq!(report.assets, [PathBuf::from("docs/index.html")]);
        let robots = fs::read_to_string(out.path().join("robots.txt")).unwrap();
        assert!(robots.contains("Allow: /"));
        assert!(!robots.contains("Disallow"));
        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert_eq!(
            fs::read_to_string(out.path().join("docs/index.html")).unwrap(),
            "nested"
        );
    }

    #[test]
    fn custom_assets_dir() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("static")).unwrap();
        fs::write(source.path().join("static/favicon.ico"), [0u8; 4]).unwrap();
        let mut config = SiteConfig::default();
        config.export.assets_dir = "static".to_string();

        let report = generate(&config, source.path(), out.path(), today()).unwrap();
        assert_eq!(report.assets, [PathBuf::from("favicon.ico")]);
    }

    #[test]
    fn generate_creates_missing_output_dir() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let nested = out.path().join("a/b/dist");
        generate(&SiteConfig::default(), source.path(), &nested, today()).unwrap();
        assert!(nested.join("index.html").is_file());
    }
}
