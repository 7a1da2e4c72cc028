/// Page sitemap and robots.txt builders
///
/// The site is a single-page brochure, so the page sitemap carries exactly
/// the home URL; robots.txt points crawlers at both sitemaps.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::profile::BusinessProfile;

/// Build sitemap.xml: the home URL, refreshed weekly
pub fn build_sitemap_xml(profile: &BusinessProfile, lastmod: DateTime<Utc>) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}/</loc>
    <lastmod>{}</lastmod>
    <changefreq>weekly</changefreq>
    <priority>1.0</priority>
  </url>
</urlset>
"#,
        profile.site_url,
        lastmod.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Build robots.txt: allow everything, advertise both sitemaps
pub fn build_robots_txt(profile: &BusinessProfile) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nHost: {site}\nSitemap: {site}/sitemap.xml\nSitemap: {site}/image-sitemap.xml\n",
        site = profile.site_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sitemap_has_single_home_url() {
        let profile = BusinessProfile::default();
        let lastmod = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let xml = build_sitemap_xml(&profile, lastmod);

        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://jackdesign.com.br/</loc>"));
        assert!(xml.contains("<lastmod>2025-06-01T12:00:00.000Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
    }

    #[test]
    fn test_robots_lists_host_and_both_sitemaps() {
        let robots = build_robots_txt(&BusinessProfile::default());

        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Host: https://jackdesign.com.br\n"));
        assert!(robots.contains("Sitemap: https://jackdesign.com.br/sitemap.xml"));
        assert!(robots.contains("Sitemap: https://jackdesign.com.br/image-sitemap.xml"));
    }
}
