use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mobile {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Brand slug as a plain string (e.g. "samsung"), matched against
    /// `Brand::slug` rather than a database-level foreign key.
    pub brand: String,
    pub model: String,
    pub image_url: String,
    pub imagekit_path: Option<String>,
    pub release_date: String,
    pub price: Option<String>,
    pub short_specs: ShortSpecs,
    #[serde(default)]
    pub carousel_images: Vec<String>,
    pub specifications: Vec<SpecCategory>,
    pub dimensions: Option<Dimensions>,
    pub build_materials: Option<BuildMaterials>,
    pub created_at: String,
}

/// Compact spec summary shown on list cards and detail headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortSpecs {
    pub ram: String,
    pub storage: String,
    pub camera: String,
    pub battery: Option<String>,
    pub display: Option<String>,
    pub processor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecCategory {
    pub category: String,
    pub specs: Vec<SpecEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub feature: String,
    pub value: String,
}

/// Physical measurements as display strings ("162.3mm", "232g").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: String,
    pub width: String,
    pub thickness: String,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMaterials {
    pub frame: String,
    pub back: String,
    pub protection: String,
}

/// Validated insert payload. The id and timestamp are assigned by the
/// storage layer.
#[derive(Debug, Clone)]
pub struct NewMobile {
    pub slug: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub image_url: String,
    pub imagekit_path: Option<String>,
    pub release_date: String,
    pub price: Option<String>,
    pub short_specs: ShortSpecs,
    pub carousel_images: Vec<String>,
    pub specifications: Vec<SpecCategory>,
    pub dimensions: Option<Dimensions>,
    pub build_materials: Option<BuildMaterials>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MobileUpdate {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub image_url: Option<String>,
    pub imagekit_path: Option<String>,
    pub release_date: Option<String>,
    pub price: Option<String>,
    pub short_specs: Option<ShortSpecs>,
    pub carousel_images: Option<Vec<String>>,
    pub specifications: Option<Vec<SpecCategory>>,
    pub dimensions: Option<Dimensions>,
    pub build_materials: Option<BuildMaterials>,
}
