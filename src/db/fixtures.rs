//! Demo catalog used by the `seed` command and the development seeding flag.
//! Mirrors the fixture dataset the original development storage shipped with.

use crate::models::{
    BuildMaterials, Dimensions, NewBrand, NewMobile, ShortSpecs, SpecCategory, SpecEntry,
};

fn entry(feature: &str, value: &str) -> SpecEntry {
    SpecEntry {
        feature: feature.to_string(),
        value: value.to_string(),
    }
}

fn brand(name: &str, slug: &str, logo: &str, phone_count: &str, description: &str) -> NewBrand {
    NewBrand {
        name: name.to_string(),
        slug: slug.to_string(),
        logo: Some(logo.to_string()),
        phone_count: Some(phone_count.to_string()),
        description: Some(description.to_string()),
    }
}

#[must_use]
pub fn demo_brands() -> Vec<NewBrand> {
    vec![
        brand(
            "Samsung",
            "samsung",
            "S",
            "142",
            "South Korean multinational electronics company",
        ),
        brand(
            "Apple",
            "apple",
            "A",
            "28",
            "American multinational technology company",
        ),
        brand("Xiaomi", "xiaomi", "X", "89", "Chinese electronics company"),
        brand(
            "Oppo",
            "oppo",
            "O",
            "67",
            "Chinese consumer electronics company",
        ),
        brand("Vivo", "vivo", "V", "54", "Chinese technology company"),
        brand(
            "Realme",
            "realme",
            "R",
            "43",
            "Chinese smartphone manufacturer",
        ),
    ]
}

#[must_use]
pub fn demo_mobiles() -> Vec<NewMobile> {
    vec![
        NewMobile {
            slug: "galaxy-s24-ultra".to_string(),
            name: "Galaxy S24 Ultra".to_string(),
            brand: "samsung".to_string(),
            model: "S24 Ultra".to_string(),
            image_url: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400".to_string(),
            imagekit_path: None,
            release_date: "2024-01-01".to_string(),
            price: Some("₨ 449,999".to_string()),
            short_specs: ShortSpecs {
                ram: "12GB".to_string(),
                storage: "256GB".to_string(),
                camera: "200MP".to_string(),
                battery: Some("5000mAh".to_string()),
                display: Some("6.8\" Dynamic AMOLED 2X".to_string()),
                processor: Some("Snapdragon 8 Gen 3".to_string()),
            },
            carousel_images: vec![
                "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=600".to_string(),
                "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=600".to_string(),
                "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=600".to_string(),
            ],
            specifications: vec![
                SpecCategory {
                    category: "Display".to_string(),
                    specs: vec![
                        entry("Screen Size", "6.8 inches"),
                        entry("Resolution", "3120 x 1440 pixels"),
                        entry("Display Type", "Dynamic AMOLED 2X"),
                        entry("Refresh Rate", "120Hz"),
                    ],
                },
                SpecCategory {
                    category: "Performance".to_string(),
                    specs: vec![
                        entry("Processor", "Snapdragon 8 Gen 3"),
                        entry("RAM", "12GB"),
                        entry("Storage", "256GB"),
                        entry("OS", "Android 14"),
                    ],
                },
                SpecCategory {
                    category: "Camera".to_string(),
                    specs: vec![
                        entry("Main Camera", "200MP"),
                        entry("Ultra Wide", "12MP"),
                        entry("Telephoto", "50MP"),
                        entry("Front Camera", "12MP"),
                    ],
                },
            ],
            dimensions: Some(Dimensions {
                height: "162.3mm".to_string(),
                width: "79.0mm".to_string(),
                thickness: "8.6mm".to_string(),
                weight: "232g".to_string(),
            }),
            build_materials: Some(BuildMaterials {
                frame: "Titanium".to_string(),
                back: "Glass".to_string(),
                protection: "Gorilla Glass Victus 2".to_string(),
            }),
        },
        NewMobile {
            slug: "iphone-15-pro-max".to_string(),
            name: "iPhone 15 Pro Max".to_string(),
            brand: "apple".to_string(),
            model: "15 Pro Max".to_string(),
            image_url: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400".to_string(),
            imagekit_path: None,
            release_date: "2023-09-01".to_string(),
            price: Some("₨ 519,999".to_string()),
            short_specs: ShortSpecs {
                ram: "8GB".to_string(),
                storage: "256GB".to_string(),
                camera: "48MP".to_string(),
                battery: Some("4441mAh".to_string()),
                display: Some("6.7\" Super Retina XDR".to_string()),
                processor: Some("A17 Pro".to_string()),
            },
            carousel_images: vec![
                "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=600".to_string(),
            ],
            specifications: vec![SpecCategory {
                category: "Display".to_string(),
                specs: vec![
                    entry("Screen Size", "6.7 inches"),
                    entry("Resolution", "2796 x 1290 pixels"),
                    entry("Display Type", "Super Retina XDR OLED"),
                    entry("Refresh Rate", "120Hz"),
                ],
            }],
            dimensions: None,
            build_materials: None,
        },
        NewMobile {
            slug: "xiaomi-14-pro".to_string(),
            name: "Xiaomi 14 Pro".to_string(),
            brand: "xiaomi".to_string(),
            model: "14 Pro".to_string(),
            image_url: "https://images.unsplash.com/photo-1574944985070-8f3ebc6b79d2?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400".to_string(),
            imagekit_path: None,
            release_date: "2024-02-01".to_string(),
            price: Some("₨ 189,999".to_string()),
            short_specs: ShortSpecs {
                ram: "12GB".to_string(),
                storage: "256GB".to_string(),
                camera: "50MP".to_string(),
                battery: Some("4880mAh".to_string()),
                display: Some("6.73\" LTPO OLED".to_string()),
                processor: Some("Snapdragon 8 Gen 3".to_string()),
            },
            carousel_images: vec![
                "https://images.unsplash.com/photo-1574944985070-8f3ebc6b79d2?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=600".to_string(),
            ],
            specifications: vec![SpecCategory {
                category: "Display".to_string(),
                specs: vec![
                    entry("Screen Size", "6.73 inches"),
                    entry("Resolution", "3200 x 1440 pixels"),
                    entry("Display Type", "LTPO OLED"),
                    entry("Refresh Rate", "120Hz"),
                ],
            }],
            dimensions: None,
            build_materials: None,
        },
        NewMobile {
            slug: "oneplus-12".to_string(),
            name: "OnePlus 12".to_string(),
            brand: "oneplus".to_string(),
            model: "12".to_string(),
            image_url: "https://images.unsplash.com/photo-1585060544812-6b45742d762f?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400".to_string(),
            imagekit_path: None,
            release_date: "2024-01-15".to_string(),
            price: Some("₨ 299,999".to_string()),
            short_specs: ShortSpecs {
                ram: "16GB".to_string(),
                storage: "512GB".to_string(),
                camera: "50MP".to_string(),
                battery: Some("5400mAh".to_string()),
                display: Some("6.82\" LTPO OLED".to_string()),
                processor: Some("Snapdragon 8 Gen 3".to_string()),
            },
            carousel_images: vec![
                "https://images.unsplash.com/photo-1585060544812-6b45742d762f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=600".to_string(),
            ],
            specifications: vec![SpecCategory {
                category: "Display".to_string(),
                specs: vec![
                    entry("Screen Size", "6.82 inches"),
                    entry("Resolution", "3168 x 1440 pixels"),
                    entry("Display Type", "LTPO OLED"),
                    entry("Refresh Rate", "120Hz"),
                ],
            }],
            dimensions: None,
            build_materials: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_brand_slugs_are_unique() {
        let brands = demo_brands();
        let mut slugs: Vec<&str> = brands.iter().map(|b| b.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), brands.len());
    }

    #[test]
    fn demo_mobiles_have_required_short_specs() {
        for mobile in demo_mobiles() {
            assert!(!mobile.short_specs.ram.is_empty(), "{}", mobile.slug);
            assert!(!mobile.short_specs.storage.is_empty(), "{}", mobile.slug);
            assert!(!mobile.short_specs.camera.is_empty(), "{}", mobile.slug);
        }
    }
}
