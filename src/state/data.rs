/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::{Deserialize, Serialize};

/// One entry of the portfolio data file (`portfolio.json`)
///
/// The file is operator-curated, so fields other than `file_name` may be
/// missing or null. Missing values degrade to neutral defaults instead of
/// being rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PortfolioRecord {
    /// Asset name inside the portfolio directory (e.g., "14.jpeg", "v2.mp4")
    pub file_name: String,
    /// Category tag: "acm", "letra_caixa", "luminoso", "painel_impresso",
    /// or any other string for uncurated work
    #[serde(default)]
    pub category: Option<String>,
    /// Customer the project was made for, used as a grouping key
    #[serde(default)]
    pub client: Option<String>,
    /// Manual display precedence inside a category group (lower = earlier).
    /// Null or absent means "after everything that has a rank".
    #[serde(default)]
    pub ordem: Option<f64>,
}

impl PortfolioRecord {
    /// Category key used for grouping (missing category → empty string)
    pub fn category_key(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Client key used for grouping (missing client → empty string)
    pub fn client_key(&self) -> &str {
        self.client.as_deref().unwrap_or("")
    }

    /// Sort rank derived from `ordem`.
    /// Missing or non-finite values rank after every finite value.
    pub fn ordem_rank(&self) -> f64 {
        match self.ordem {
            Some(o) if o.is_finite() => o,
            _ => f64::INFINITY,
        }
    }
}

/// Kind of media behind a portfolio record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Infer the media type from the asset file extension
    pub fn from_file_name(file_name: &str) -> Self {
        let ext = file_name
            .rsplit('.')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "mp4" | "webm" => MediaType::Video,
            _ => MediaType::Image,
        }
    }
}

/// Default display dimensions. The gallery renders every tile at a fixed
/// 4:3 aspect, so items carry 1200x900 unless real dimensions are known.
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 900;

/// A record prepared for display, derived 1:1 from a `PortfolioRecord`
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    /// Site-relative URL of the asset ("/portfolio/<file_name>")
    pub src: String,
    /// Asset name, kept for local path resolution and thumbnail lookup
    pub file_name: String,
    /// Accessible description built from the category label and client
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub media_type: MediaType,
}

impl DisplayItem {
    pub fn from_record(record: &PortfolioRecord) -> Self {
        let label = category_label(record.category_key()).unwrap_or("Portfólio");
        let alt = match record.client_key() {
            "" => label.to_string(),
            client => format!("{} — {}", label, client),
        };

        DisplayItem {
            src: format!("/portfolio/{}", record.file_name),
            file_name: record.file_name.clone(),
            alt,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            media_type: MediaType::from_file_name(&record.file_name),
        }
    }
}

/// Curated categories, in the order the gallery presents them
pub const CANONICAL_CATEGORIES: [&str; 4] =
    ["acm", "letra_caixa", "luminoso", "painel_impresso"];

/// Friendly title for a curated category key.
/// Unknown keys return None so callers can pick their own fallback.
pub fn category_label(key: &str) -> Option<&'static str> {
    match key {
        "acm" => Some("Fachada em ACM"),
        "letra_caixa" => Some("Letras caixa"),
        "luminoso" => Some("Luminoso"),
        "painel_impresso" => Some("Painel impresso"),
        _ => None,
    }
}

/// Short descriptions shown under curated category headers
pub fn category_description(key: &str) -> Option<&'static str> {
    match key {
        "acm" => Some("Fachadas em ACM com execução premium"),
        "letra_caixa" => Some("Letras caixa em PVC, galvanizado e inox"),
        "luminoso" => Some("Letreiros luminosos com iluminação em LED"),
        "painel_impresso" => Some("Painéis e faixas em lona impressa"),
        _ => None,
    }
}
