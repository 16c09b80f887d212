pub mod api;
pub mod clients;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use clients::gsmarena::GsmArenaClient;
pub use config::Config;
use db::Store;
use services::{DefaultImportService, ImportService, ImportSummary};

/// Main entry point. Parses CLI arguments and dispatches to the right
/// command, or prints help when invoked bare.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    // Install the Prometheus recorder before any subsystem records metrics.
    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(handle)
    } else {
        None
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url =
            url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let mut builder = tracing_loki::builder();
        for (key, value) in &config.observability.loki_labels {
            builder = builder.label(key.as_str(), value.as_str())?;
        }
        let (loki_layer, loki_task) = builder
            .extra_field("version", env!("CARGO_PKG_VERSION"))?
            .build_url(url)?;

        tokio::spawn(loki_task);

        registry.with(loki_layer).init();
        info!("Loki log shipping enabled: {}", config.observability.loki_url);
    } else {
        registry.init();
    }

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    match args[1].as_str() {
        "serve" | "-s" | "--serve" => run_server(config, prometheus_handle).await,

        "import" => {
            if args.len() < 3 {
                println!("Usage: fonarr import <file.json> [--dry-run]");
                println!("       fonarr import --fetch <brand> [--dry-run]");
                return Ok(());
            }
            let dry_run = args.iter().any(|a| a == "--dry-run");
            if args[2] == "--fetch" {
                let Some(brand) = args.get(3).filter(|a| a.as_str() != "--dry-run") else {
                    println!("Usage: fonarr import --fetch <brand> [--dry-run]");
                    return Ok(());
                };
                cmd_import_fetch(&config, brand, dry_run).await
            } else {
                cmd_import_file(&config, &args[2], dry_run).await
            }
        }

        "seed" => cmd_seed(&config).await,

        "brands" | "b" => cmd_brands(&config).await,

        "list" | "ls" => {
            let brand = args.get(2).map(String::as_str);
            cmd_list(&config, brand).await
        }

        "init" | "--init" => {
            Config::create_default_if_missing()?;
            println!("✓ Config file created. Edit config.toml and run again.");
            Ok(())
        }

        "help" | "-h" | "--help" => {
            print_help();
            Ok(())
        }

        unknown => {
            println!("Unknown command: {unknown}");
            println!();
            print_help();
            Ok(())
        }
    }
}

/// Run the web server until interrupted.
async fn run_server(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("Fonarr v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let state = api::create_app_state_from_config(config, prometheus_handle).await?;
    let app = api::router(state).await;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("🌐 Web server running at http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }

    server_handle.abort();
    info!("Fonarr stopped");

    Ok(())
}

/// Import device records from a local JSON dump.
async fn cmd_import_file(config: &Config, path: &str, dry_run: bool) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let client = import_client(config)?;
    let importer = DefaultImportService::new(store, client);

    println!("Importing from {path}...");
    let summary = importer.import_file(path, dry_run).await?;
    print_import_summary(&summary);

    Ok(())
}

/// Fetch a brand's device list from the remote source and import it.
async fn cmd_import_fetch(config: &Config, brand: &str, dry_run: bool) -> anyhow::Result<()> {
    if config.import.api_key.is_empty() {
        println!("⚠ No API key configured. Set import.api_key in config.toml");
        println!("  or export RAPIDAPI_KEY before fetching.");
        return Ok(());
    }

    let store = Store::new(&config.general.database_path).await?;
    let client = import_client(config)?;
    let importer = DefaultImportService::new(store, client);

    println!("Fetching devices for '{brand}'...");
    let summary = importer.import_brand(brand, dry_run).await?;
    print_import_summary(&summary);

    Ok(())
}

fn import_client(config: &Config) -> anyhow::Result<GsmArenaClient> {
    GsmArenaClient::new(
        &config.import.source_url,
        &config.import.api_key,
        Duration::from_secs(config.import.request_timeout_seconds.into()),
    )
}

fn print_import_summary(summary: &ImportSummary) {
    println!("{:-<70}", "");
    if summary.dry_run {
        println!("Dry run - nothing was written");
    }
    println!("✓ Brands created:   {}", summary.brands_created);
    println!("✓ Mobiles imported: {}", summary.mobiles_imported);
    if !summary.skipped.is_empty() {
        println!("⚠ Skipped {} record(s):", summary.skipped.len());
        for skipped in &summary.skipped {
            println!("  • {} ({})", skipped.name, skipped.reason);
        }
    }
}

/// Populate an empty database with the built-in demo catalog.
async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let seeded = store.seed_demo_catalog().await?;

    if seeded == 0 {
        println!("Catalog already has data, nothing to seed.");
    } else {
        println!("✓ Seeded demo catalog ({seeded} records)");
    }

    Ok(())
}

/// Print all brands with their phone counts.
async fn cmd_brands(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let brands = store.list_brands().await?;

    if brands.is_empty() {
        println!("No brands in the catalog. Run 'fonarr seed' or 'fonarr import'.");
        return Ok(());
    }

    println!("Brands ({}):", brands.len());
    println!("{:-<70}", "");
    for brand in &brands {
        let count = store.count_mobiles_by_brand(&brand.slug).await?;
        println!(
            "  {:<20} {:<20} {} mobile(s)",
            brand.name, brand.slug, count
        );
    }

    Ok(())
}

/// Print mobiles, optionally narrowed to one brand.
async fn cmd_list(config: &Config, brand: Option<&str>) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    let mobiles = match brand {
        Some(slug) => store.get_mobiles_by_brand(slug).await?,
        None => store.list_mobiles().await?,
    };

    if mobiles.is_empty() {
        match brand {
            Some(slug) => println!("No mobiles found for brand '{slug}'."),
            None => println!("No mobiles in the catalog."),
        }
        return Ok(());
    }

    println!("Mobiles ({}):", mobiles.len());
    println!("{:-<70}", "");
    for mobile in &mobiles {
        let price = mobile.price.as_deref().unwrap_or("Price not available");
        println!("  {:<32} {:<12} {}", mobile.name, mobile.brand, price);
        println!(
            "    {} | {} | {} | {}",
            mobile.short_specs.ram,
            mobile.short_specs.storage,
            mobile.short_specs.camera,
            mobile.release_date
        );
    }

    Ok(())
}

fn print_help() {
    println!("Fonarr - Mobile Phone Catalog Server");
    println!();
    println!("USAGE:");
    println!("  fonarr <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("  serve                  Run the web server and API");
    println!("  brands                 List catalog brands with phone counts");
    println!("  list [brand]           List mobiles, optionally for one brand");
    println!("  import <file>          Import device records from a JSON file");
    println!("  import --fetch <name>  Fetch a brand's devices from the remote source");
    println!("  seed                   Populate an empty database with demo data");
    println!("  init                   Create a default config file");
    println!("  help                   Show this help message");
    println!();
    println!("OPTIONS:");
    println!("  --dry-run              Report what an import would write, without writing");
    println!();
    println!("EXAMPLES:");
    println!("  fonarr serve                     # Start server on the configured port");
    println!("  fonarr list samsung              # Mobiles for one brand");
    println!("  fonarr import devices.json       # Import from a local dump");
    println!("  fonarr import --fetch Samsung    # Import via the configured API");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to set the port, database path and import source.");
}
