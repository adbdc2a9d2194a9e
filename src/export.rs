//! Static-export artifacts: sitemap and robots policy.
//!
//! Both files are derived from the resolved base site URL and the
//! `[export]` settings. The sitemap is rendered with maud like the page, so
//! `loc` values are escaped the same way.

use crate::config::ExportConfig;
use chrono::NaiveDate;
use maud::{Markup, PreEscaped, html};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Join a site-relative `path` onto `base`, normalizing the trailing slash.
///
/// With `trailing_slash` every URL ends in `/`, except paths that name a
/// file (last segment contains a `.`), which are left alone.
pub fn page_url(base: &str, path: &str, trailing_slash: bool) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_matches('/');
    let mut url = if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    };
    let is_file = path.rsplit('/').next().is_some_and(|seg| seg.contains('.'));
    if trailing_slash && !is_file {
        url.push('/');
    }
    url
}

/// Sitemap priority as written in `config.toml`. Whole numbers keep one
/// decimal (`1.0`), everything else uses the shortest exact form.
fn format_priority(priority: f32) -> String {
    if priority.fract() == 0.0 {
        format!("{priority:.1}")
    } else {
        priority.to_string()
    }
}

/// Renders `sitemap.xml` for the given site-relative page paths.
pub fn render_sitemap(
    site_url: &str,
    pages: &[&str],
    export: &ExportConfig,
    lastmod: NaiveDate,
) -> String {
    let doc: Markup = html! {
        (PreEscaped("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"))
        urlset xmlns=(SITEMAP_NS) {
            @for page in pages {
                url {
                    loc { (page_url(site_url, page, export.trailing_slash)) }
                    lastmod { (lastmod.format("%Y-%m-%d").to_string()) }
                    changefreq { (export.changefreq.as_str()) }
                    priority { (format_priority(export.priority)) }
                }
            }
        }
    };
    doc.into_string()
}

/// Renders `robots.txt`: allow everything for every agent, point at the
/// sitemap.
pub fn render_robots(site_url: &str) -> String {
    format!(
        "# *\nUser-agent: *\nAllow: /\n\n# Host\nHost: {base}\n\n# Sitemaps\nSitemap: {sitemap}\n",
        base = site_url.trim_end_matches('/'),
        sitemap = page_url(site_url, "sitemap.xml", true),
    )
}
