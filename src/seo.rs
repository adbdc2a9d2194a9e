//! Head metadata: title, description, canonical link, Open Graph and Twitter
//! cards, icons and the JSON-LD structured data block.
//!
//! All values are static strings from [`SeoConfig`](crate::config::SeoConfig)
//! joined to the resolved site URL.

use crate::config::SiteConfig;
use crate::export;
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

/// Absolute URL for a site-relative asset path.
fn absolute(config: &SiteConfig, path: &str) -> String {
    format!(
        "{}/{}",
        config.site.url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Schema.org `ProfessionalService` description of the site owner.
pub fn structured_data(config: &SiteConfig) -> Value {
    let seo = &config.seo;
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": seo.organization_name,
        "description": seo.organization_description,
        "url": config.site.url,
        "image": absolute(config, &seo.image),
        "telephone": config.contact.phone,
        "email": config.contact.email,
        "address": {
            "@type": "PostalAddress",
            "addressCountry": seo.country,
        },
        "founder": {
            "@type": "Person",
            "name": config.site.name,
            "jobTitle": seo.job_title,
            "sameAs": [config.contact.linkedin],
        },
        "areaServed": seo.area_served,
        "serviceType": seo.service_types,
    })
}

/// Serialize JSON for embedding inside `<script>`.
///
/// `</` is escaped so no string value can terminate the script element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Renders every `<head>` tag except charset, stylesheet and scripts.
pub fn head_metadata(config: &SiteConfig) -> Markup {
    let seo = &config.seo;
    let canonical = export::page_url(&config.site.url, "/", config.export.trailing_slash);
    let image = absolute(config, &seo.image);

    html! {
        title { (seo.title) }
        meta name="description" content=(seo.description);
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta name="keywords" content=(seo.keywords.join(", "));
        meta name="author" content=(config.site.name);
        link rel="canonical" href=(canonical);

        meta property="og:type" content="website";
        meta property="og:url" content=(canonical);
        meta property="og:title" content=(seo.share_title);
        meta property="og:description" content=(seo.og_description);
        meta property="og:image" content=(image);
        meta property="og:image:width" content=(seo.image_width);
        meta property="og:image:height" content=(seo.image_height);
        meta property="og:image:type" content="image/jpeg";
        meta property="og:site_name" content=(config.site.name);
        meta property="og:locale" content=(config.site.locale);

        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:url" content=(canonical);
        meta name="twitter:title" content=(seo.share_title);
        meta name="twitter:description" content=(seo.twitter_description);
        meta name="twitter:image" content=(image);

        link rel="icon" href="/favicon.ico";
        link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png";

        script type="application/ld+json" {
            (PreEscaped(script_json(&structured_data(config))))
        }
    }
}
