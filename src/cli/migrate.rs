use mealweek_store::SqliteStore;

use crate::Config;

pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!(url = %config.store.url, "running database migrations");

    let store = SqliteStore::connect(&config.store.url, 1).await?;
    let migrated = store.migrate().await;
    mealweek_store::Store::close(&store).await;
    migrated?;

    tracing::info!("migrations completed");

    Ok(())
}
