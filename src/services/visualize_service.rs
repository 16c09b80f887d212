//! Assembly of the AR/VR model payload the browser canvas renders: phone box
//! geometry from a per-brand dimension table, material colors, and animation
//! parameters. All drawing happens client-side; this only computes the data.

use crate::models::Mobile;
use serde::Serialize;

/// Physical device envelope in millimetres, plus the diagonal screen size in
/// inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub screen_size: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelData {
    pub vertices: PhoneVertices,
    pub textures: Vec<String>,
    pub materials: Materials,
    pub animations: Animations,
    pub dimensions: DeviceDimensions,
    pub hand_scales: HandScales,
}

/// Flat x,y,z triples. The body is a box (front face, then back face); the
/// screen is a slightly inset quad floating above the front face.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneVertices {
    pub body: Vec<f64>,
    pub screen: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Materials {
    pub screen: ScreenMaterial,
    pub body: BodyMaterial,
    pub camera: CameraMaterial,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenMaterial {
    pub color: String,
    pub reflectivity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BodyMaterial {
    pub color: String,
    pub metallic: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CameraMaterial {
    pub color: String,
    pub roughness: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Animations {
    pub rotation: RotationAnimation,
    pub zoom: ZoomAnimation,
}

#[derive(Debug, Clone, Serialize)]
pub struct RotationAnimation {
    pub speed: f64,
    pub axis: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoomAnimation {
    pub min: f64,
    pub max: f64,
}

/// Scale factors against an average adult hand, for the try-on overlay.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HandScales {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

pub const HAND_SCALES: HandScales = HandScales {
    small: 0.85,
    medium: 1.0,
    large: 1.15,
};

/// Measured envelopes for the flagship line of each known brand; anything
/// unrecognized renders with the samsung envelope.
#[must_use]
pub fn device_dimensions(brand: &str) -> DeviceDimensions {
    match brand.to_lowercase().as_str() {
        "apple" => DeviceDimensions {
            width: 77.6,
            height: 160.9,
            depth: 7.8,
            screen_size: 6.1,
        },
        "google" => DeviceDimensions {
            width: 76.5,
            height: 162.6,
            depth: 8.8,
            screen_size: 6.7,
        },
        "xiaomi" => DeviceDimensions {
            width: 75.3,
            height: 161.4,
            depth: 8.2,
            screen_size: 6.73,
        },
        "oneplus" => DeviceDimensions {
            width: 75.8,
            height: 164.3,
            depth: 9.2,
            screen_size: 6.82,
        },
        "oppo" => DeviceDimensions {
            width: 76.2,
            height: 162.6,
            depth: 9.5,
            screen_size: 6.82,
        },
        "vivo" => DeviceDimensions {
            width: 76.3,
            height: 164.1,
            depth: 8.9,
            screen_size: 6.78,
        },
        _ => DeviceDimensions {
            width: 79.0,
            height: 162.3,
            depth: 8.2,
            screen_size: 6.8,
        },
    }
}

#[must_use]
pub fn brand_color(brand: &str) -> &'static str {
    match brand.to_lowercase().as_str() {
        "apple" => "#A8DADC",
        "samsung" => "#4285F4",
        "google" => "#34A853",
        "xiaomi" => "#FF6900",
        "oneplus" => "#EB0028",
        "oppo" => "#1BA854",
        "vivo" => "#4A90E2",
        _ => "#6B7280",
    }
}

#[must_use]
pub fn phone_vertices(d: DeviceDimensions) -> PhoneVertices {
    let (w, h, depth) = (d.width, d.height, d.depth);

    PhoneVertices {
        body: vec![
            // Front face (screen side)
            -w / 2.0,
            -h / 2.0,
            depth / 2.0,
            w / 2.0,
            -h / 2.0,
            depth / 2.0,
            w / 2.0,
            h / 2.0,
            depth / 2.0,
            -w / 2.0,
            h / 2.0,
            depth / 2.0,
            // Back face
            -w / 2.0,
            -h / 2.0,
            -depth / 2.0,
            w / 2.0,
            -h / 2.0,
            -depth / 2.0,
            w / 2.0,
            h / 2.0,
            -depth / 2.0,
            -w / 2.0,
            h / 2.0,
            -depth / 2.0,
        ],
        screen: vec![
            -w / 2.2,
            -h / 2.1,
            depth / 2.0 + 0.1,
            w / 2.2,
            -h / 2.1,
            depth / 2.0 + 0.1,
            w / 2.2,
            h / 2.1,
            depth / 2.0 + 0.1,
            -w / 2.2,
            h / 2.1,
            depth / 2.0 + 0.1,
        ],
    }
}

#[must_use]
pub fn model_data(mobile: &Mobile) -> ModelData {
    let dimensions = device_dimensions(&mobile.brand);

    let textures = if mobile.carousel_images.is_empty() {
        vec![mobile.image_url.clone()]
    } else {
        mobile.carousel_images.clone()
    };

    ModelData {
        vertices: phone_vertices(dimensions),
        textures,
        materials: Materials {
            screen: ScreenMaterial {
                color: "#000000".to_string(),
                reflectivity: 0.9,
            },
            body: BodyMaterial {
                color: brand_color(&mobile.brand).to_string(),
                metallic: 0.8,
            },
            camera: CameraMaterial {
                color: "#1a1a1a".to_string(),
                roughness: 0.1,
            },
        },
        animations: Animations {
            rotation: RotationAnimation {
                speed: 0.02,
                axis: "y".to_string(),
            },
            zoom: ZoomAnimation { min: 0.5, max: 3.0 },
        },
        dimensions,
        hand_scales: HAND_SCALES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShortSpecs;

    fn mobile(brand: &str, carousel: Vec<String>) -> Mobile {
        Mobile {
            id: "mobile-1".to_string(),
            slug: "test-phone".to_string(),
            name: "Test Phone".to_string(),
            brand: brand.to_string(),
            model: "Phone".to_string(),
            image_url: "https://example.com/phone.jpg".to_string(),
            imagekit_path: None,
            release_date: "2024-01-01".to_string(),
            price: None,
            short_specs: ShortSpecs::default(),
            carousel_images: carousel,
            specifications: Vec::new(),
            dimensions: None,
            build_materials: None,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn unknown_brand_falls_back_to_samsung_envelope() {
        assert_eq!(device_dimensions("fairphone"), device_dimensions("samsung"));
        assert_eq!(brand_color("fairphone"), "#6B7280");
    }

    #[test]
    fn body_is_a_box_with_eight_corners() {
        let verts = phone_vertices(device_dimensions("apple"));
        assert_eq!(verts.body.len(), 24);
        assert_eq!(verts.screen.len(), 12);

        // Front face corners sit at +depth/2, back face at -depth/2.
        assert!(verts.body[2] > 0.0);
        assert!(verts.body[14] < 0.0);
        // Screen floats just above the front face.
        assert!(verts.screen[2] > verts.body[2]);
    }

    #[test]
    fn textures_fall_back_to_primary_image() {
        let data = model_data(&mobile("samsung", Vec::new()));
        assert_eq!(data.textures, vec!["https://example.com/phone.jpg"]);

        let data = model_data(&mobile(
            "samsung",
            vec!["https://example.com/a.jpg".to_string()],
        ));
        assert_eq!(data.textures, vec!["https://example.com/a.jpg"]);
    }

    #[test]
    fn materials_carry_brand_color() {
        let data = model_data(&mobile("oneplus", Vec::new()));
        assert_eq!(data.materials.body.color, "#EB0028");
        assert_eq!(data.materials.screen.color, "#000000");
        assert_eq!(data.animations.rotation.axis, "y");
    }
}
