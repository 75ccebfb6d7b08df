use housing_catalog::catalog::labels::{
    filter_chips, filter_summary, format_date, format_price, suggested_search_name,
};
use housing_catalog::catalog::{apply, paginate, project_markers, PageItem};
use housing_catalog::config::AppConfig;
use housing_catalog::searches::SavedSearchStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Housing Catalog");

    let config = AppConfig::load().await?;
    let source = config.catalog_source()?;

    info!("Loading catalog via {} source...", source.source_name());
    let catalog = source.load().await?;

    let filters = &config.filters;
    for chip in filter_chips(filters, &catalog.zones) {
        info!("Filter: {}", chip.label);
    }

    let results = apply(&catalog.properties, filters, config.sort);
    info!(
        "{} ({} active filters, sorted by {})",
        results.count_label(),
        filters.active_filter_count(),
        config.sort.label()
    );

    if results.is_empty() {
        warn!("No properties match the configured filters");
    }

    let page = paginate(&results, 1, config.page_size);
    for (i, property) in page.properties.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            property.title,
            format_price(property.price, property.modality)
        );
        match property.bedrooms {
            Some(bedrooms) => println!(
                "   {} hab., {} baños, {} m²",
                bedrooms, property.bathrooms, property.area
            ),
            None => println!("   {} baños, {} m²", property.bathrooms, property.area),
        }
        let zone = catalog.zone_name(&property.zone.id).unwrap_or(&property.zone.name);
        println!("   Zona: {}", zone);
        println!("   Publicado: {}", format_date(&property.published_at));
        if !property.features.is_empty() {
            println!("   Características: {}", property.features.join(", "));
        }
        println!();
    }

    let strip: Vec<String> = page
        .items()
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == page.current_page => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect();
    if !strip.is_empty() {
        println!("Páginas: {}", strip.join(" "));
    }

    // Remember this query the way the save-search dialog would
    let mut searches = SavedSearchStore::new();
    let saved = searches.create(&suggested_search_name(filters), filters, true)?;
    info!("Saved search \"{}\": {}", saved.name, filter_summary(&saved.filters));

    tokio::fs::create_dir_all(&config.output_dir).await?;

    let results_path = config.output_dir.join("results.json");
    tokio::fs::write(&results_path, serde_json::to_string_pretty(&results)?).await?;
    info!("💾 Saved {} results to {}", results.total, results_path.display());

    let markers_path = config.output_dir.join("markers.json");
    let markers = project_markers(&results.properties);
    tokio::fs::write(&markers_path, serde_json::to_string_pretty(&markers)?).await?;
    info!("💾 Saved {} map markers to {}", markers.len(), markers_path.display());

    let searches_path = config.output_dir.join("saved_searches.json");
    tokio::fs::write(&searches_path, serde_json::to_string_pretty(&searches)?).await?;
    info!("💾 Saved {} searches to {}", searches.len(), searches_path.display());

    Ok(())
}
