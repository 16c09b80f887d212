pub mod brand;
pub mod mobile;

pub use brand::{Brand, BrandUpdate, NewBrand};
pub use mobile::{
    BuildMaterials, Dimensions, Mobile, MobileUpdate, NewMobile, ShortSpecs, SpecCategory,
    SpecEntry,
};
