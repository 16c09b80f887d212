//! Mapping from raw spec-source records into catalog records: slugs, brand
//! metadata, short-spec extraction, and spec-category assembly.

use crate::clients::gsmarena::RawDevice;
use crate::models::{NewBrand, NewMobile, ShortSpecs, SpecCategory, SpecEntry};
use regex::Regex;
use std::sync::OnceLock;

/// Derives a URL slug from a display name.
///
/// ```
/// use fonarr::services::transform::slugify;
///
/// assert_eq!(slugify("Galaxy S24 Ultra"), "galaxy-s24-ultra");
/// assert_eq!(slugify("iPhone 15 Pro Max!"), "iphone-15-pro-max");
/// assert_eq!(slugify("  Nothing   Phone (2) "), "nothing-phone-2");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_hyphen = true;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_hyphen = false;
        } else if (c.is_whitespace() || c == '-') && !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Short display glyph for a brand tile; falls back to the first letter.
#[must_use]
pub fn brand_logo(name: &str) -> String {
    match name {
        "Apple" => "🍎".to_string(),
        "OnePlus" => "1+".to_string(),
        "Samsung" | "Sony" => "S".to_string(),
        "Xiaomi" => "X".to_string(),
        "Google" => "G".to_string(),
        "Huawei" | "Honor" => "H".to_string(),
        "Oppo" => "O".to_string(),
        "Vivo" => "V".to_string(),
        "Nokia" | "Nothing" => "N".to_string(),
        "Motorola" => "M".to_string(),
        "Realme" => "R".to_string(),
        other => other
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
    }
}

#[must_use]
pub fn brand_description(name: &str) -> String {
    match name {
        "Apple" => "American multinational technology company".to_string(),
        "Samsung" => "South Korean multinational electronics corporation".to_string(),
        "Xiaomi" => "Chinese electronics company".to_string(),
        "OnePlus" => "Chinese smartphone manufacturer".to_string(),
        "Google" => "American multinational technology corporation".to_string(),
        "Huawei" => "Chinese multinational technology corporation".to_string(),
        "Oppo" => "Chinese consumer electronics company".to_string(),
        "Vivo" => "Chinese technology company".to_string(),
        "Sony" => "Japanese multinational electronics corporation".to_string(),
        "Nokia" => "Finnish multinational telecommunications company".to_string(),
        "Motorola" => "American telecommunications company".to_string(),
        "Realme" | "Honor" => "Chinese smartphone brand".to_string(),
        "Nothing" => "British consumer technology company".to_string(),
        other => format!("{other} smartphone manufacturer"),
    }
}

#[must_use]
pub fn brand_from_name(name: &str, phone_count: u64) -> NewBrand {
    NewBrand {
        name: name.to_string(),
        slug: slugify(name),
        logo: Some(brand_logo(name)),
        phone_count: Some(phone_count.to_string()),
        description: Some(brand_description(name)),
    }
}

/// Vendor strings arrive with HTML entities and stray whitespace.
fn clean(value: &str) -> String {
    html_escape::decode_html_entities(value.trim()).to_string()
}

/// Pulls RAM and storage out of strings like "256GB 12GB RAM, 512GB 16GB RAM".
/// Fields the record does not carry come back as "Unknown" so list cards
/// always have something to show.
#[must_use]
pub fn short_specs_from_raw(raw: &RawDevice) -> ShortSpecs {
    static RAM_RE: OnceLock<Regex> = OnceLock::new();
    static STORAGE_RE: OnceLock<Regex> = OnceLock::new();

    let ram_re =
        RAM_RE.get_or_init(|| Regex::new(r"(\d+GB)\s+RAM").expect("Invalid regex"));
    let storage_re = STORAGE_RE
        .get_or_init(|| Regex::new(r"(\d+GB)\s+\d+GB\s+RAM").expect("Invalid regex"));

    let internal = raw.internal.as_deref().unwrap_or("");

    let ram = ram_re
        .captures(internal)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    let storage = storage_re
        .captures(internal)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    ShortSpecs {
        ram: ram.unwrap_or_else(|| "Unknown".to_string()),
        storage: storage.unwrap_or_else(|| "Unknown".to_string()),
        camera: raw
            .main_camera_specs
            .as_deref()
            .map_or_else(|| "Unknown".to_string(), clean),
        battery: raw.battery.as_deref().map(clean),
        display: raw.display_size.as_deref().map(clean),
        processor: raw.chipset.as_deref().map(clean),
    }
}

/// Entries that are absent, blank after cleaning, or the vendor's literal
/// "Unknown" are dropped rather than rendered.
fn category(name: &str, entries: &[(&str, Option<&str>)]) -> SpecCategory {
    SpecCategory {
        category: name.to_string(),
        specs: entries
            .iter()
            .filter_map(|(feature, value)| {
                value
                    .map(clean)
                    .filter(|v| !v.is_empty() && v != "Unknown")
                    .map(|v| SpecEntry {
                        feature: (*feature).to_string(),
                        value: v,
                    })
            })
            .collect(),
    }
}

/// Builds the detail-page spec categories from whatever fields the record
/// carries. Categories with no populated entries are dropped.
#[must_use]
pub fn specifications_from_raw(raw: &RawDevice) -> Vec<SpecCategory> {
    let mut categories = Vec::new();

    if raw.display_size.is_some() || raw.display_type.is_some() || raw.display_resolution.is_some()
    {
        categories.push(category(
            "Display",
            &[
                ("Screen Size", raw.display_size.as_deref()),
                ("Resolution", raw.display_resolution.as_deref()),
                ("Display Type", raw.display_type.as_deref()),
            ],
        ));
    }

    if raw.main_camera_specs.is_some() || raw.selfie_camera_specs.is_some() {
        categories.push(category(
            "Camera",
            &[
                ("Main Camera", raw.main_camera_specs.as_deref()),
                ("Front Camera", raw.selfie_camera_specs.as_deref()),
                ("Main Features", raw.main_camera_features.as_deref()),
                ("Video Recording", raw.main_video_specs.as_deref()),
            ],
        ));
    }

    if raw.chipset.is_some() || raw.cpu.is_some() || raw.gpu.is_some() {
        categories.push(category(
            "Performance",
            &[
                ("Chipset", raw.chipset.as_deref()),
                ("CPU", raw.cpu.as_deref()),
                ("GPU", raw.gpu.as_deref()),
            ],
        ));
    }

    if raw.battery.is_some() || raw.internal.is_some() {
        categories.push(category(
            "Battery & Storage",
            &[
                ("Battery", raw.battery.as_deref()),
                ("Internal Storage", raw.internal.as_deref()),
            ],
        ));
    }

    if raw.sensors.is_some() || raw.android_version.is_some() {
        let os = raw.android_version.as_ref().map(|v| format!("Android {}", clean(v)));
        categories.push(category(
            "Features",
            &[
                ("Operating System", os.as_deref()),
                ("Sensors", raw.sensors.as_deref()),
            ],
        ));
    }

    categories.retain(|c| !c.specs.is_empty());
    categories
}

/// GSMArena-style product image URL derived from manufacturer and model.
#[must_use]
pub fn image_url(manufacturer: &str, model: &str) -> String {
    let cleaned: String = model
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let model_part = cleaned.split_whitespace().collect::<Vec<_>>().join("-");

    format!(
        "https://fdn2.gsmarena.com/vv/bigpic/{}-{}.jpg",
        manufacturer.to_lowercase(),
        model_part
    )
}

/// Approximate release date from the shipped Android version. Records
/// without one get today's date.
#[must_use]
pub fn release_date_from_android(version: Option<&str>) -> String {
    let mapped = version.map(str::trim).and_then(|v| match v {
        "14" => Some("2023-10-04"),
        "13" => Some("2022-08-15"),
        "12" => Some("2021-10-04"),
        "11" => Some("2020-09-08"),
        "10" => Some("2019-09-03"),
        "9" => Some("2018-08-06"),
        "8" => Some("2017-08-21"),
        "7" => Some("2016-08-22"),
        "6" => Some("2015-10-05"),
        _ => None,
    });

    mapped.map_or_else(
        || chrono::Utc::now().format("%Y-%m-%d").to_string(),
        ToString::to_string,
    )
}

/// Full record mapping. The price stays a placeholder; the source carries no
/// pricing data.
#[must_use]
pub fn mobile_from_raw(raw: &RawDevice) -> NewMobile {
    let full_name = format!("{} {}", raw.manufacturer, raw.model);
    let slug = slugify(&full_name);
    let brand_slug = slugify(&raw.manufacturer);
    let image = image_url(&raw.manufacturer, &raw.model);

    NewMobile {
        imagekit_path: Some(format!("/mobiles/{brand_slug}/{slug}.jpg")),
        name: full_name,
        brand: brand_slug,
        model: raw.model.clone(),
        carousel_images: vec![image.clone()],
        image_url: image,
        release_date: release_date_from_android(raw.android_version.as_deref()),
        price: Some("Price not available".to_string()),
        short_specs: short_specs_from_raw(raw),
        specifications: specifications_from_raw(raw),
        dimensions: None,
        build_materials: None,
        slug,
    }
}
