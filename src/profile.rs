/// Business profile
///
/// The site-wide constants every exported artifact is stamped with:
/// canonical URL, contact phone, postal address, service area. Defaults
/// describe the shop; an optional `profile.json` next to the data file
/// overrides them.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BusinessProfile {
    /// Trading name used in titles and captions
    pub name: String,
    /// Canonical site URL, no trailing slash ("https://jackdesign.com.br")
    pub site_url: String,
    /// Human-readable phone for structured data ("+55 19 99656-5458")
    pub display_phone: String,
    pub description: String,
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub area_served: String,
    pub price_range: String,
    /// Site-relative path of the logo image
    pub logo_path: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        BusinessProfile {
            name: "Jack Designer".to_string(),
            site_url: "https://jackdesign.com.br".to_string(),
            display_phone: "+55 19 99656-5458".to_string(),
            description: "Fachadas em ACM, letras caixa e luminosos com execução premium \
                          em Mogi Guaçu."
                .to_string(),
            street_address: "R. Antônio Alves Bueno, 35 - Jardim Suecia".to_string(),
            locality: "Mogi Guaçu".to_string(),
            region: "SP".to_string(),
            postal_code: "13848-498".to_string(),
            country: "BR".to_string(),
            area_served: "Mogi Guaçu e região".to_string(),
            price_range: "$$".to_string(),
            logo_path: "/logo-horizontal.png".to_string(),
        }
    }
}

impl BusinessProfile {
    /// Absolute URL for a site-relative path
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }

    /// Convert to JSON string (profile.json)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string (profile.json)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load `profile.json` from disk, falling back to the defaults when the
    /// file is absent or unreadable
    pub fn load_or_default(path: &std::path::Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|json| Self::from_json(&json).ok())
            .unwrap_or_default()
    }
}
