use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub phone_count: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// Validated insert payload. The id and timestamp are assigned by the
/// storage layer.
#[derive(Debug, Clone)]
pub struct NewBrand {
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub phone_count: Option<String>,
    pub description: Option<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub logo: Option<String>,
    pub phone_count: Option<String>,
    pub description: Option<String>,
}
