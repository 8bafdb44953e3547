mod fixture;
mod memory;
mod sqlite;

pub use fixture::*;
pub use memory::*;
pub use sqlite::*;

use std::path::PathBuf;

use mealweek_shared::catalog::{MealCandidate, MealRecord, PlanItem, PlannedMeal, StoredPlan};
use mealweek_shared::mealplan::{GeneratedPlan, PlanRequest};
use serde::Deserialize;
use strum::{Display, EnumString};

/// Read and write access to the catalog and persisted plans.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Catalog rows with nutrition totals and alternates resolved, ordered by id.
    async fn fetch_meals(&self) -> mealweek_shared::Result<Vec<MealRecord>>;

    async fn fetch_candidates(&self) -> mealweek_shared::Result<Vec<MealCandidate>> {
        Ok(self
            .fetch_meals()
            .await?
            .iter()
            .map(MealRecord::candidate)
            .collect())
    }

    /// One catalog meal by id, `None` when it does not exist.
    async fn fetch_meal(&self, id: &str) -> mealweek_shared::Result<Option<MealRecord>> {
        if id.trim().is_empty() {
            mealweek_shared::bail!("meal id is required");
        }

        Ok(self.fetch_meals().await?.into_iter().find(|m| m.id == id))
    }

    async fn fetch_plans(&self) -> mealweek_shared::Result<Vec<StoredPlan>>;

    /// Items of one plan, ordered by day then slot.
    async fn fetch_plan_items(&self, plan_id: &str) -> mealweek_shared::Result<Vec<PlannedMeal>>;

    async fn save_plan(
        &self,
        req: &PlanRequest,
        plan: &GeneratedPlan,
    ) -> mealweek_shared::Result<()>;

    /// Inserts one plan item and returns its id.
    async fn insert_plan_item(&self, item: &PlanItem) -> mealweek_shared::Result<String>;

    async fn close(&self);
}

#[derive(Deserialize, EnumString, Display, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    #[default]
    Memory,
    Sqlite,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            url: default_url(),
            max_connections: default_max_connections(),
            fixture: None,
        }
    }
}

fn default_url() -> String {
    "sqlite:mealweek.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

/// Opens the store selected by `config.kind`.
pub async fn connect(config: &StoreConfig) -> mealweek_shared::Result<Box<dyn Store>> {
    match config.kind {
        StoreKind::Memory => {
            let store = match &config.fixture {
                Some(path) => MemoryStore::from(Fixture::load(path)?),
                None => MemoryStore::default(),
            };

            tracing::info!(kind = %config.kind, "store ready");

            Ok(Box::new(store))
        }
        StoreKind::Sqlite => {
            let store = SqliteStore::connect(&config.url, config.max_connections).await?;

            tracing::info!(
                kind = %config.kind,
                max_connections = config.max_connections,
                "store ready"
            );

            Ok(Box::new(store))
        }
    }
}

const LAST_DAY_OF_WEEK: u8 = 7;

pub(crate) fn check_plan_item(item: &PlanItem) -> mealweek_shared::Result<()> {
    if item.plan_id.trim().is_empty() {
        mealweek_shared::bail!("plan_id is required");
    }

    if item.meal_id.trim().is_empty() {
        mealweek_shared::bail!("meal_id is required");
    }

    if !(1..=LAST_DAY_OF_WEEK).contains(&item.day_of_week) {
        mealweek_shared::bail!("day_of_week must be between 1 and {LAST_DAY_OF_WEEK}");
    }

    Ok(())
}
