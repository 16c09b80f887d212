pub mod import_service;
pub mod import_service_impl;
pub use import_service::{ImportError, ImportService, ImportSummary, SkippedRecordDto};
pub use import_service_impl::DefaultImportService;

pub mod sitemap_service;
pub use sitemap_service::SitemapError;

pub mod transform;

pub mod visualize_service;
pub use visualize_service::ModelData;
