use std::path::Path;

use mealweek_store::{Seed, SqliteStore, Store};

use crate::Config;

/// Migrates the database then inserts the seed file content.
pub async fn seed(config: &Config, file: &Path) -> anyhow::Result<()> {
    let seed = Seed::load(file)?;

    let store = SqliteStore::connect(&config.store.url, 1).await?;
    let result = async {
        store.migrate().await?;
        store.seed(&seed).await
    }
    .await;
    store.close().await;
    result?;

    Ok(())
}
