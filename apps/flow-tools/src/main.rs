//! Flow Tools
//!
//! Operational CLI for the se_flows vector collection: one-time setup,
//! sample seeding and a demo search against the configured Qdrant engine.

use clap::{Parser, Subcommand};
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_flows::{
    CollectionSpec, IndexService, PointInput, QdrantConfig, QdrantIndex, SearchQuery,
};
use eyre::Result;
use rand::Rng;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "flow-tools")]
#[command(about = "Manage the se_flows vector collection in Qdrant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure the configured collection exists, listing collections before and after
    Setup,

    /// Insert randomly generated sample points
    Seed {
        /// Number of sample points to insert
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },

    /// Run a zero-vector demo search
    Search {
        /// Maximum number of hits to return
        #[arg(short, long, default_value_t = 5)]
        limit: u64,

        /// Minimum similarity score for a hit to be included
        #[arg(short, long)]
        threshold: Option<f32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    let qdrant = QdrantConfig::from_env()?;
    let service = IndexService::new(QdrantIndex::new(&qdrant)?);

    match cli.command {
        Commands::Setup => setup(&service, &qdrant).await,
        Commands::Seed { count } => seed(&service, &qdrant, count).await,
        Commands::Search { limit, threshold } => search(&service, &qdrant, limit, threshold).await,
    }
}

async fn setup(service: &IndexService<QdrantIndex>, config: &QdrantConfig) -> Result<()> {
    let names = service.list_collections().await?;
    info!(
        "Existing collections: {}",
        if names.is_empty() {
            "<none>".to_string()
        } else {
            names.join(", ")
        }
    );

    let spec = CollectionSpec::new(config.vector_size);
    if service.ensure_collection(&config.collection, spec).await? {
        info!("Created collection: {}", config.collection);
    } else {
        info!("Collection already exists: {}", config.collection);
    }

    let names = service.list_collections().await?;
    info!("Collections now: {}", names.join(", "));
    Ok(())
}

async fn seed(
    service: &IndexService<QdrantIndex>,
    config: &QdrantConfig,
    count: usize,
) -> Result<()> {
    let spec = CollectionSpec::new(config.vector_size);
    service.ensure_collection(&config.collection, spec).await?;

    let mut rng = rand::rng();
    let points: Vec<PointInput> = (0..count)
        .map(|i| PointInput {
            id: json!(Uuid::new_v4().to_string()),
            vector: (0..config.vector_size).map(|_| rng.random::<f32>()).collect(),
            payload: Some(json!({
                "title": format!("flow-sample-{}", i),
                "phase": "demo",
                "source": "seed",
            })),
        })
        .collect();

    let receipt = service.insert(&config.collection, points).await?;
    info!(
        "Seeded {}: upserted={} status={}",
        config.collection, receipt.upserted, receipt.status
    );
    Ok(())
}

async fn search(
    service: &IndexService<QdrantIndex>,
    config: &QdrantConfig,
    limit: u64,
    threshold: Option<f32>,
) -> Result<()> {
    // Zero vector for demonstration; a real caller passes a text embedding.
    let mut query = SearchQuery::new(vec![0.0; config.vector_size as usize], limit);
    if let Some(t) = threshold {
        query = query.with_score_threshold(t);
    }

    let hits = service.search(&config.collection, query).await?;
    info!("Search returned {} hits", hits.len());
    for hit in hits {
        info!(id = %hit.id, score = hit.score, payload = ?hit.payload, "hit");
    }
    Ok(())
}
