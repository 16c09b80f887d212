use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mobiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Unique per brand, not globally; see the (brand, slug) index.
    pub slug: String,

    pub name: String,

    /// Brand slug as a plain string match against brands.slug, not an
    /// enforced foreign key.
    pub brand: String,

    pub model: String,

    pub image_url: String,

    pub imagekit_path: Option<String>,

    /// YYYY-MM-DD display string.
    pub release_date: String,

    /// Freeform display string ("₨ 449,999"), never parsed as a number.
    pub price: Option<String>,

    /// JSON object: {"ram", "storage", "camera"} plus optional
    /// battery/display/processor strings.
    pub short_specs: String,

    /// JSON array of image URLs.
    pub carousel_images: Option<String>,

    /// JSON array of {"category", "specs": [{"feature", "value"}]}.
    pub specifications: String,

    /// JSON object: height/width/thickness/weight strings.
    pub dimensions: Option<String>,

    /// JSON object: frame/back/protection strings.
    pub build_materials: Option<String>,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
