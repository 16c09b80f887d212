use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use fonarr::config::Config;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// In-memory app with the demo catalog seeded (6 brands, 4 mobiles).
async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = fonarr::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    fonarr::api::router(state).await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_brand_endpoints() {
    let app = spawn_app().await;

    let (status, body) = get_json(&app, "/api/brands").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(body["data"].as_array().map(Vec::len), Some(6));

    let (status, body) = get_json(&app, "/api/brands/samsung").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Samsung");
    assert_eq!(body["data"]["slug"], "samsung");
    assert!(body["data"]["id"].is_string());

    let (status, body) = get_json(&app, "/api/brands/nokia").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(body["error"], "Brand not found");
}

#[tokio::test]
async fn test_mobile_listing_and_filters() {
    let app = spawn_app().await;

    let (status, body) = get_json(&app, "/api/mobiles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));

    let (status, body) = get_json(&app, "/api/mobiles?brand=samsung").await;
    assert_eq!(status, StatusCode::OK);
    let samsung = body["data"].as_array().unwrap();
    assert_eq!(samsung.len(), 1);
    assert_eq!(samsung[0]["slug"], "galaxy-s24-ultra");

    // Search matches case-insensitively across name, brand and model.
    let (status, body) = get_json(&app, "/api/mobiles?search=GALAXY").await;
    assert_eq!(status, StatusCode::OK);
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Galaxy S24 Ultra");

    let (_, body) = get_json(&app, "/api/mobiles?search=apple").await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["slug"], "iphone-15-pro-max");

    // Brand filter wins over search when both are supplied.
    let (_, body) = get_json(&app, "/api/mobiles?brand=samsung&search=iphone").await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["slug"], "galaxy-s24-ultra");

    let (status, body) = get_json(&app, "/api/mobiles?featured=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));

    let (_, body) = get_json(&app, "/api/mobiles?search=zyx-no-such-phone").await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_mobile_detail() {
    let app = spawn_app().await;

    let (status, body) = get_json(&app, "/api/mobiles/samsung/galaxy-s24-ultra").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Galaxy S24 Ultra");
    assert_eq!(body["data"]["price"], "₨ 449,999");
    assert_eq!(body["data"]["shortSpecs"]["ram"], "12GB");
    assert_eq!(
        body["data"]["carouselImages"].as_array().map(Vec::len),
        Some(3)
    );

    // The slug exists, but under a different brand.
    let (status, body) = get_json(&app, "/api/mobiles/apple/galaxy-s24-ultra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Mobile not found");
}

#[tokio::test]
async fn test_model_data_endpoint() {
    let app = spawn_app().await;

    let (status, body) = get_json(&app, "/api/mobiles/samsung/galaxy-s24-ultra/model").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["vertices"]["body"].as_array().map(Vec::len), Some(24));
    assert_eq!(data["vertices"]["screen"].as_array().map(Vec::len), Some(12));
    assert_eq!(data["materials"]["body"]["color"], "#4285F4");
    assert_eq!(data["materials"]["screen"]["color"], "#000000");
    assert_eq!(data["animations"]["rotation"]["axis"], "y");
    assert_eq!(data["dimensions"]["screenSize"], serde_json::json!(6.8));
    assert_eq!(data["handScales"]["medium"], serde_json::json!(1.0));
    assert_eq!(data["textures"].as_array().map(Vec::len), Some(3));

    let (status, _) = get_json(&app, "/api/mobiles/samsung/no-such-phone/model").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_brand_admin_crud() {
    let app = spawn_app().await;

    let new_brand = serde_json::json!({
        "name": "Google",
        "slug": "google",
        "logo": "G",
        "phoneCount": "95",
        "description": "American technology company"
    });
    let (status, body) = send_json(&app, "POST", "/api/admin/brands", &new_brand).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["slug"], "google");
    let brand_id = body["data"]["id"].as_str().unwrap().to_string();

    // Validation names the missing field.
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/admin/brands",
        &serde_json::json!({"name": "Nokia"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid brand data: slug is required");

    // Slugs are unique across brands.
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/admin/brands",
        &serde_json::json!({"name": "Samsung Again", "slug": "samsung"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Brand with slug 'samsung' already exists");

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/admin/brands/{brand_id}"),
        &serde_json::json!({"name": "Google LLC"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Google LLC");
    assert_eq!(body["data"]["slug"], "google");

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/admin/brands/missing-id",
        &serde_json::json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Brand not found");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/brands/{brand_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again reports the row as gone.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/brands/{brand_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn new_mobile_payload() -> serde_json::Value {
    serde_json::json!({
        "slug": "galaxy-z-fold6",
        "name": "Galaxy Z Fold6",
        "brand": "samsung",
        "model": "Z Fold6",
        "imageUrl": "https://example.com/galaxy-z-fold6.jpg",
        "releaseDate": "2024-07-10",
        "price": "₨ 604,999",
        "shortSpecs": {
            "ram": "12GB",
            "storage": "512GB",
            "camera": "50MP"
        }
    })
}

#[tokio::test]
async fn test_mobile_admin_crud() {
    let app = spawn_app().await;

    let (status, body) = send_json(&app, "POST", "/api/admin/mobiles", &new_mobile_payload()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["id"].is_string());
    let mobile_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/admin/mobiles",
        &serde_json::json!({"name": "Broken Phone"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid mobile data:"), "{error}");
    assert!(error.contains("slug is required"), "{error}");
    assert!(error.contains("shortSpecs is required"), "{error}");

    // Same slug under the same brand is a conflict.
    let (status, body) = send_json(&app, "POST", "/api/admin/mobiles", &new_mobile_payload()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "Mobile with slug 'galaxy-z-fold6' already exists for brand 'samsung'"
    );

    let (status, body) = get_json(&app, &format!("/api/admin/mobiles/{mobile_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "galaxy-z-fold6");

    let (status, _) = get_json(&app, "/api/admin/mobiles/missing-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Partial update leaves the other fields alone.
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/admin/mobiles/{mobile_id}"),
        &serde_json::json!({"price": "₨ 579,999"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], "₨ 579,999");
    assert_eq!(body["data"]["name"], "Galaxy Z Fold6");
    assert_eq!(body["data"]["shortSpecs"]["storage"], "512GB");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/mobiles/{mobile_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/mobiles/{mobile_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_endpoints() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({"username": "admin", "password": "anything"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body_json,
        serde_json::json!({
            "success": true,
            "message": "Login successful - Open Access",
            "redirectTo": "/admin"
        })
    );

    let (status, body) = get_json(&app, "/api/auth/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"isAuthenticated": true, "username": "admin"})
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body_json,
        serde_json::json!({"success": true, "message": "Logged out successfully"})
    );
}

#[tokio::test]
async fn test_health_and_system_status() {
    let app = spawn_app().await;

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": "ok"}));

    let (status, body) = get_json(&app, "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["data"]["brands"], serde_json::json!(6));
    assert_eq!(body["data"]["mobiles"], serde_json::json!(4));
    assert_eq!(body["data"]["database"], serde_json::json!(true));
    assert!(body["data"]["uptime"].is_u64());
}

#[tokio::test]
async fn test_sitemap_xml() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/sitemap.xml")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/xml")
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let xml = String::from_utf8(body.to_vec()).unwrap();

    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.contains("<loc>https://mobile-price.com</loc>"));
    assert!(xml.contains("<loc>https://mobile-price.com/samsung/galaxy-s24-ultra</loc>"));
    assert!(xml.contains("<loc>https://mobile-price.com/compare</loc>"));
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/brands")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    assert_eq!(
        headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    assert!(headers.contains_key("content-security-policy"));
}
