//! Admin payload validation.
//!
//! Bodies arrive as raw JSON values and are checked here instead of relying
//! on extractor rejections, so every malformed payload produces a 400 with a
//! message naming the offending fields.

use serde::Deserialize;
use serde_json::Value;

use super::ApiError;
use crate::models::{
    BrandUpdate, BuildMaterials, Dimensions, MobileUpdate, NewBrand, NewMobile, ShortSpecs,
    SpecCategory,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBrand {
    name: Option<String>,
    slug: Option<String>,
    logo: Option<String>,
    phone_count: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawShortSpecs {
    ram: Option<String>,
    storage: Option<String>,
    camera: Option<String>,
    battery: Option<String>,
    display: Option<String>,
    processor: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMobile {
    slug: Option<String>,
    name: Option<String>,
    brand: Option<String>,
    model: Option<String>,
    image_url: Option<String>,
    imagekit_path: Option<String>,
    release_date: Option<String>,
    price: Option<String>,
    short_specs: Option<RawShortSpecs>,
    carousel_images: Option<Vec<String>>,
    specifications: Option<Vec<SpecCategory>>,
    dimensions: Option<Dimensions>,
    build_materials: Option<BuildMaterials>,
}

fn required(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

fn check_not_blank(field: &'static str, value: Option<&str>, blank: &mut Vec<&'static str>) {
    if let Some(v) = value
        && v.trim().is_empty()
    {
        blank.push(field);
    }
}

fn missing_error(entity: &str, fields: &[&str]) -> ApiError {
    let list = fields
        .iter()
        .map(|f| format!("{f} is required"))
        .collect::<Vec<_>>()
        .join(", ");
    ApiError::validation(format!("Invalid {entity} data: {list}"))
}

fn blank_error(entity: &str, fields: &[&str]) -> ApiError {
    let list = fields
        .iter()
        .map(|f| format!("{f} must not be empty"))
        .collect::<Vec<_>>()
        .join(", ");
    ApiError::validation(format!("Invalid {entity} data: {list}"))
}

pub fn parse_new_brand(payload: Value) -> Result<NewBrand, ApiError> {
    let raw: RawBrand = serde_json::from_value(payload)
        .map_err(|e| ApiError::validation(format!("Invalid brand data: {e}")))?;

    let mut missing = Vec::new();
    let name = required("name", raw.name, &mut missing);
    let slug = required("slug", raw.slug, &mut missing);

    if !missing.is_empty() {
        return Err(missing_error("brand", &missing));
    }

    Ok(NewBrand {
        name,
        slug,
        logo: raw.logo,
        phone_count: raw.phone_count,
        description: raw.description,
    })
}

pub fn parse_brand_update(payload: Value) -> Result<BrandUpdate, ApiError> {
    let raw: RawBrand = serde_json::from_value(payload)
        .map_err(|e| ApiError::validation(format!("Invalid brand data: {e}")))?;

    let mut blank = Vec::new();
    check_not_blank("name", raw.name.as_deref(), &mut blank);
    check_not_blank("slug", raw.slug.as_deref(), &mut blank);

    if !blank.is_empty() {
        return Err(blank_error("brand", &blank));
    }

    Ok(BrandUpdate {
        name: raw.name,
        slug: raw.slug,
        logo: raw.logo,
        phone_count: raw.phone_count,
        description: raw.description,
    })
}

pub fn parse_new_mobile(payload: Value) -> Result<NewMobile, ApiError> {
    let raw: RawMobile = serde_json::from_value(payload)
        .map_err(|e| ApiError::validation(format!("Invalid mobile data: {e}")))?;

    let mut missing = Vec::new();
    let slug = required("slug", raw.slug, &mut missing);
    let name = required("name", raw.name, &mut missing);
    let brand = required("brand", raw.brand, &mut missing);
    let model = required("model", raw.model, &mut missing);
    let image_url = required("imageUrl", raw.image_url, &mut missing);
    let release_date = required("releaseDate", raw.release_date, &mut missing);

    let short_specs = if let Some(specs) = raw.short_specs {
        let ram = required("shortSpecs.ram", specs.ram, &mut missing);
        let storage = required("shortSpecs.storage", specs.storage, &mut missing);
        let camera = required("shortSpecs.camera", specs.camera, &mut missing);
        ShortSpecs {
            ram,
            storage,
            camera,
            battery: specs.battery,
            display: specs.display,
            processor: specs.processor,
        }
    } else {
        missing.push("shortSpecs");
        ShortSpecs::default()
    };

    if !missing.is_empty() {
        return Err(missing_error("mobile", &missing));
    }

    Ok(NewMobile {
        slug,
        name,
        brand,
        model,
        image_url,
        imagekit_path: raw.imagekit_path,
        release_date,
        price: raw.price,
        short_specs,
        carousel_images: raw.carousel_images.unwrap_or_default(),
        specifications: raw.specifications.unwrap_or_default(),
        dimensions: raw.dimensions,
        build_materials: raw.build_materials,
    })
}

pub fn parse_mobile_update(payload: Value) -> Result<MobileUpdate, ApiError> {
    let raw: RawMobile = serde_json::from_value(payload)
        .map_err(|e| ApiError::validation(format!("Invalid mobile data: {e}")))?;

    let mut blank = Vec::new();
    check_not_blank("slug", raw.slug.as_deref(), &mut blank);
    check_not_blank("name", raw.name.as_deref(), &mut blank);
    check_not_blank("brand", raw.brand.as_deref(), &mut blank);
    check_not_blank("model", raw.model.as_deref(), &mut blank);
    check_not_blank("imageUrl", raw.image_url.as_deref(), &mut blank);
    check_not_blank("releaseDate", raw.release_date.as_deref(), &mut blank);

    if !blank.is_empty() {
        return Err(blank_error("mobile", &blank));
    }

    // A supplied shortSpecs object replaces the stored one wholesale, so the
    // required trio must be present in it.
    let short_specs = match raw.short_specs {
        Some(specs) => {
            let mut missing = Vec::new();
            let ram = required("shortSpecs.ram", specs.ram, &mut missing);
            let storage = required("shortSpecs.storage", specs.storage, &mut missing);
            let camera = required("shortSpecs.camera", specs.camera, &mut missing);

            if !missing.is_empty() {
                return Err(missing_error("mobile", &missing));
            }

            Some(ShortSpecs {
                ram,
                storage,
                camera,
                battery: specs.battery,
                display: specs.display,
                processor: specs.processor,
            })
        }
        None => None,
    };

    Ok(MobileUpdate {
        slug: raw.slug,
        name: raw.name,
        brand: raw.brand,
        model: raw.model,
        image_url: raw.image_url,
        imagekit_path: raw.imagekit_path,
        release_date: raw.release_date,
        price: raw.price,
        short_specs,
        carousel_images: raw.carousel_images,
        specifications: raw.specifications,
        dimensions: raw.dimensions,
        build_materials: raw.build_materials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_brand_requires_slug() {
        let err = parse_new_brand(json!({"name": "Samsung"})).unwrap_err();
        assert!(err.to_string().contains("slug is required"));
    }

    #[test]
    fn test_new_brand_lists_every_missing_field() {
        let err = parse_new_brand(json!({"logo": "S"})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("name is required"));
        assert!(message.contains("slug is required"));
    }

    #[test]
    fn test_new_brand_accepts_full_payload() {
        let brand = parse_new_brand(json!({
            "name": "Samsung",
            "slug": "samsung",
            "logo": "S",
            "phoneCount": "142",
            "description": "Leading smartphone manufacturer"
        }))
        .unwrap();

        assert_eq!(brand.name, "Samsung");
        assert_eq!(brand.slug, "samsung");
        assert_eq!(brand.phone_count.as_deref(), Some("142"));
    }

    #[test]
    fn test_new_brand_rejects_wrong_shape() {
        assert!(parse_new_brand(json!("not an object")).is_err());
        assert!(parse_new_brand(json!({"name": 42, "slug": "x"})).is_err());
    }

    #[test]
    fn test_brand_update_rejects_blank_name() {
        let err = parse_brand_update(json!({"name": "   "})).unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn test_brand_update_allows_sparse_payload() {
        let update = parse_brand_update(json!({"description": "Updated"})).unwrap();
        assert!(update.name.is_none());
        assert_eq!(update.description.as_deref(), Some("Updated"));
    }

    #[test]
    fn test_new_mobile_requires_short_specs() {
        let err = parse_new_mobile(json!({
            "slug": "galaxy-s24",
            "name": "Galaxy S24",
            "brand": "samsung",
            "model": "Galaxy S24",
            "imageUrl": "https://example.com/s24.jpg",
            "releaseDate": "2024-01-17"
        }))
        .unwrap_err();

        assert!(err.to_string().contains("shortSpecs is required"));
    }

    #[test]
    fn test_new_mobile_requires_short_spec_trio() {
        let err = parse_new_mobile(json!({
            "slug": "galaxy-s24",
            "name": "Galaxy S24",
            "brand": "samsung",
            "model": "Galaxy S24",
            "imageUrl": "https://example.com/s24.jpg",
            "releaseDate": "2024-01-17",
            "shortSpecs": {"ram": "8GB"}
        }))
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("shortSpecs.storage is required"));
        assert!(message.contains("shortSpecs.camera is required"));
    }

    #[test]
    fn test_new_mobile_accepts_minimal_payload() {
        let mobile = parse_new_mobile(json!({
            "slug": "galaxy-s24",
            "name": "Galaxy S24",
            "brand": "samsung",
            "model": "Galaxy S24",
            "imageUrl": "https://example.com/s24.jpg",
            "releaseDate": "2024-01-17",
            "shortSpecs": {"ram": "8GB", "storage": "256GB", "camera": "50MP"}
        }))
        .unwrap();

        assert_eq!(mobile.slug, "galaxy-s24");
        assert_eq!(mobile.short_specs.ram, "8GB");
        assert!(mobile.carousel_images.is_empty());
        assert!(mobile.specifications.is_empty());
        assert!(mobile.price.is_none());
    }

    #[test]
    fn test_mobile_update_allows_sparse_payload() {
        let update = parse_mobile_update(json!({"price": "₨ 299,999"})).unwrap();
        assert!(update.slug.is_none());
        assert!(update.short_specs.is_none());
        assert_eq!(update.price.as_deref(), Some("₨ 299,999"));
    }

    #[test]
    fn test_mobile_update_rejects_partial_short_specs() {
        let err = parse_mobile_update(json!({"shortSpecs": {"ram": "12GB"}})).unwrap_err();
        assert!(err.to_string().contains("shortSpecs.storage is required"));
    }
}
