use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Raw device record from the GSMArena parser API, field names as the
/// vendor sends them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDevice {
    #[serde(default)]
    pub id: i64,
    pub manufacturer: String,
    pub model: String,
    pub chipset: Option<String>,
    pub android_version: Option<String>,
    pub battery: Option<String>,
    pub cpu: Option<String>,
    pub display_resolution: Option<String>,
    pub display_size: Option<String>,
    pub display_type: Option<String>,
    pub gpu: Option<String>,
    pub internal: Option<String>,
    pub main_camera_features: Option<String>,
    pub main_camera_specs: Option<String>,
    pub main_video_specs: Option<String>,
    pub selfie_camera_features: Option<String>,
    pub selfie_camera_specs: Option<String>,
    pub selfie_video_specs: Option<String>,
    pub sensors: Option<String>,
}

/// Client for a RapidAPI-hosted GSMArena parser deployment.
#[derive(Clone)]
pub struct GsmArenaClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GsmArenaClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// RapidAPI routes on the Host header, not just the URL.
    fn host(&self) -> &str {
        self.base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", self.host())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Spec source API error: {} - {}",
                status,
                body
            ));
        }

        Ok(response.json().await?)
    }

    pub async fn available_brands(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/values/availablebrands", self.base_url);
        self.get_json(&url).await
    }

    pub async fn devices_by_brand(&self, brand: &str) -> Result<Vec<RawDevice>> {
        let url = format!(
            "{}/api/values/devicesbybrand/{}",
            self.base_url,
            urlencoding::encode(brand)
        );
        self.get_json(&url).await
    }
}
