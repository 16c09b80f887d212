//! Default implementation of the `ImportService` trait.

use crate::clients::gsmarena::{GsmArenaClient, RawDevice};
use crate::db::Store;
use crate::services::import_service::{
    ImportError, ImportService, ImportSummary, SkippedRecordDto,
};
use crate::services::transform;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

pub struct DefaultImportService {
    store: Store,
    client: GsmArenaClient,
}

impl DefaultImportService {
    #[must_use]
    pub const fn new(store: Store, client: GsmArenaClient) -> Self {
        Self { store, client }
    }

    /// Transforms and writes one batch of raw records. Brand names are
    /// grouped first so each brand is created once and its phone count
    /// refreshed once at the end.
    async fn ingest(
        &self,
        devices: Vec<RawDevice>,
        dry_run: bool,
    ) -> Result<ImportSummary, ImportError> {
        let mut summary = ImportSummary {
            dry_run,
            ..ImportSummary::default()
        };

        // BTreeMap keeps log and summary output stable across runs.
        let mut per_brand: BTreeMap<String, (String, Vec<RawDevice>)> = BTreeMap::new();

        for device in devices {
            if device.manufacturer.trim().is_empty() || device.model.trim().is_empty() {
                summary.skipped.push(SkippedRecordDto {
                    name: format!("{} {}", device.manufacturer, device.model)
                        .trim()
                        .to_string(),
                    reason: "missing manufacturer or model".to_string(),
                });
                continue;
            }

            let brand_slug = transform::slugify(&device.manufacturer);
            per_brand
                .entry(brand_slug)
                .or_insert_with(|| (device.manufacturer.clone(), Vec::new()))
                .1
                .push(device);
        }

        for (brand_slug, (brand_name, brand_devices)) in per_brand {
            let device_count = brand_devices.len() as u64;

            if self.store.get_brand_by_slug(&brand_slug).await?.is_none() {
                if !dry_run {
                    self.store
                        .create_brand(transform::brand_from_name(&brand_name, device_count))
                        .await?;
                }
                summary.brands_created += 1;
            }

            for device in brand_devices {
                if !dry_run {
                    self.store
                        .upsert_mobile(transform::mobile_from_raw(&device))
                        .await?;
                }
                summary.mobiles_imported += 1;
            }

            if !dry_run {
                let total = self.store.count_mobiles_by_brand(&brand_slug).await?;
                self.store
                    .set_brand_phone_count(&brand_slug, total)
                    .await?;
            }
        }

        info!(
            "Import pass {}: {} brands created, {} mobiles imported, {} skipped",
            if dry_run { "(dry run)" } else { "finished" },
            summary.brands_created,
            summary.mobiles_imported,
            summary.skipped.len()
        );

        Ok(summary)
    }
}

#[async_trait]
impl ImportService for DefaultImportService {
    async fn import_file(&self, path: &str, dry_run: bool) -> Result<ImportSummary, ImportError> {
        if !Path::new(path).exists() {
            return Err(ImportError::FileNotFound(path.to_string()));
        }

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ImportError::Internal(format!("Failed to read {path}: {e}")))?;

        let devices: Vec<RawDevice> = serde_json::from_str(&raw)
            .map_err(|e| ImportError::InvalidData(format!("{path}: {e}")))?;

        self.ingest(devices, dry_run).await
    }

    async fn import_brand(
        &self,
        brand: &str,
        dry_run: bool,
    ) -> Result<ImportSummary, ImportError> {
        let devices = self
            .client
            .devices_by_brand(brand)
            .await
            .map_err(|e| ImportError::SpecSource(e.to_string()))?;

        if devices.is_empty() {
            return Err(ImportError::SpecSource(format!(
                "No devices returned for brand '{brand}'"
            )));
        }

        self.ingest(devices, dry_run).await
    }
}
