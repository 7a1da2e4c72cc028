/// schema.org LocalBusiness structured data
///
/// The JSON-LD block embedded in the site's <head>, generated from the
/// business profile so address or phone changes stay in one place.

use serde_json::{json, Value};

use crate::profile::BusinessProfile;

pub fn local_business(profile: &BusinessProfile) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": profile.name,
        "url": format!("{}/", profile.site_url),
        "description": profile.description,
        "image": [profile.absolute_url(&profile.logo_path)],
        "telephone": profile.display_phone,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": profile.street_address,
            "addressLocality": profile.locality,
            "addressRegion": profile.region,
            "postalCode": profile.postal_code,
            "addressCountry": profile.country,
        },
        "priceRange": profile.price_range,
        "areaServed": profile.area_served,
    })
}

/// Pretty JSON for the exported structured-data.json
pub fn local_business_json(profile: &BusinessProfile) -> String {
    // Value serialization of a json! literal cannot fail
    serde_json::to_string_pretty(&local_business(profile)).unwrap_or_default()
}
