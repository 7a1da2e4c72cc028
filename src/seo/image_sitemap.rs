/// Google image sitemap builder
///
/// The site is single-page, so there is one `<url>` (the home) carrying an
/// `<image:image>` entry per picture: the fixed hero/brand images first,
/// then one per portfolio record, deduplicated by URL. Google accepts up
/// to 1000 images per `<url>`, far above this catalog's size.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::profile::BusinessProfile;
use crate::state::data::{category_label, PortfolioRecord};

/// One `<image:image>` entry
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapImage {
    pub loc: String,
    pub title: String,
    pub caption: String,
}

/// Fixed site images (hero banners + logo) that always accompany the catalog
pub fn static_images(profile: &BusinessProfile) -> Vec<SitemapImage> {
    let entries = [
        ("/hero1.jpg", "Letreiro luminoso", "Projeto de letreiro luminoso — Jack Designer"),
        ("/hero2.jpg", "Iluminação LED", "Exemplo de aplicação com LED"),
        ("/hero3.jpg", "Fachada em ACM", "Fachada em ACM — execução premium"),
        ("/hero4.jpg", "Faixa e banner", "Faixa promocional impressa — comunicação visual"),
    ];

    let mut images: Vec<SitemapImage> = entries
        .iter()
        .map(|(path, title, caption)| SitemapImage {
            loc: profile.absolute_url(path),
            title: title.to_string(),
            caption: caption.to_string(),
        })
        .collect();

    images.push(SitemapImage {
        loc: profile.absolute_url(&profile.logo_path),
        title: format!("Logotipo {}", profile.name),
        caption: format!("Marca oficial {}", profile.name),
    });

    images
}

/// Convert portfolio records into sitemap images.
/// Unknown or missing categories caption as "Portfólio" rather than dropping
/// the record.
pub fn portfolio_images(
    profile: &BusinessProfile,
    records: &[PortfolioRecord],
) -> Vec<SitemapImage> {
    records
        .iter()
        .map(|record| {
            let label = category_label(record.category_key()).unwrap_or("Portfólio");
            let caption = match record.client_key() {
                "" => label.to_string(),
                client => format!("{} — {}", label, client),
            };

            SitemapImage {
                loc: profile.absolute_url(&format!("/portfolio/{}", record.file_name)),
                title: format!("{} | {}", label, profile.name),
                caption,
            }
        })
        .collect()
}

/// Drop repeated URLs, keeping the first occurrence
pub fn dedupe_by_loc(images: Vec<SitemapImage>) -> Vec<SitemapImage> {
    let mut seen = HashSet::new();
    images
        .into_iter()
        .filter(|img| seen.insert(img.loc.clone()))
        .collect()
}

/// Build the full image-sitemap.xml
pub fn build_image_sitemap_xml(
    profile: &BusinessProfile,
    records: &[PortfolioRecord],
    lastmod: DateTime<Utc>,
) -> String {
    let mut images = static_images(profile);
    images.extend(portfolio_images(profile, records));
    let images = dedupe_by_loc(images);

    let entries: String = images
        .iter()
        .map(|img| {
            format!(
                "\n    <image:image>\n      <image:loc>{}</image:loc>\n      \
                 <image:title><![CDATA[{}]]></image:title>\n      \
                 <image:caption><![CDATA[{}]]></image:caption>\n    </image:image>",
                img.loc, img.title, img.caption,
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset
  xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
  xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
  <url>
    <loc>{}/</loc>{}
    <lastmod>{}</lastmod>
    <changefreq>weekly</changefreq>
    <priority>0.9</priority>
  </url>
</urlset>
"#,
        profile.site_url,
        entries,
        lastmod.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rec(file_name: &str, category: Option<&str>, client: Option<&str>) -> PortfolioRecord {
        PortfolioRecord {
            file_name: file_name.to_string(),
            category: category.map(String::from),
            client: client.map(String::from),
            ordem: None,
        }
    }

    #[test]
    fn test_portfolio_images_build_site_urls_and_captions() {
        let profile = BusinessProfile::default();
        let images = portfolio_images(
            &profile,
            &[rec("14.jpeg", Some("luminoso"), Some("Clínica Diegues"))],
        );

        assert_eq!(images[0].loc, "https://jackdesign.com.br/portfolio/14.jpeg");
        assert_eq!(images[0].title, "Luminoso | Jack Designer");
        assert_eq!(images[0].caption, "Luminoso — Clínica Diegues");
    }

    #[test]
    fn test_unknown_category_captions_as_portfolio() {
        let profile = BusinessProfile::default();
        let images = portfolio_images(&profile, &[rec("9.jpeg", Some("vitrine"), None)]);

        assert_eq!(images[0].title, "Portfólio | Jack Designer");
        assert_eq!(images[0].caption, "Portfólio");
    }

    #[test]
    fn test_duplicate_file_names_collapse_to_one_entry() {
        let profile = BusinessProfile::default();
        let records = [
            rec("14.jpeg", Some("acm"), None),
            rec("14.jpeg", Some("luminoso"), None),
        ];

        let deduped = dedupe_by_loc(portfolio_images(&profile, &records));
        assert_eq!(deduped.len(), 1);
        // First occurrence wins
        assert_eq!(deduped[0].title, "Fachada em ACM | Jack Designer");
    }

    #[test]
    fn test_xml_declares_namespace_and_wraps_text_in_cdata() {
        let profile = BusinessProfile::default();
        let lastmod = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let xml = build_image_sitemap_xml(&profile, &[rec("1.jpeg", Some("acm"), None)], lastmod);

        assert!(xml.contains("xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\""));
        assert!(xml.contains("<image:title><![CDATA[Fachada em ACM | Jack Designer]]></image:title>"));
        assert!(xml.contains("<image:loc>https://jackdesign.com.br/portfolio/1.jpeg</image:loc>"));
        // 4 heroes + logo + 1 record
        assert_eq!(xml.matches("<image:image>").count(), 6);
    }
}
