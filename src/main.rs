use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::{config, db, seed, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env, which must happen before the subscriber looks at RUST_LOG
    let config = config::Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = db::init_db(&config.database_url).await?;
    tracing::info!("Database initialized");

    if config.seed_catalog {
        let inserted = seed::seed_catalog(&db).await?;
        if inserted == 0 {
            tracing::info!("Catalog already present, seed skipped");
        }
    } else {
        tracing::info!("Catalog seeding disabled via SEED_CATALOG");
    }

    server::serve(db, &config).await
}
