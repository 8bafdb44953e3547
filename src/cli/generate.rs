use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use mealweek_mealplan::PlanService;
use mealweek_shared::catalog::MealCandidate;
use mealweek_shared::mealplan::{GeneratePlanRequest, GeneratedPlan, Goal, PlanRequest, PriceTier};
use uuid::Uuid;

use crate::Config;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long)]
    pub user_id: Uuid,

    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub week_start: NaiveDate,

    /// cut, bulk or maintain
    #[arg(long)]
    pub goal: Goal,

    /// Only pick meals of this price tier (ekonomik or normal)
    #[arg(long)]
    pub tariff_mode: Option<PriceTier>,

    /// Read candidates from a JSON file instead of the configured store
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Persist the generated plan in the configured store
    #[arg(long)]
    pub save: bool,
}

impl From<&GenerateArgs> for PlanRequest {
    fn from(value: &GenerateArgs) -> Self {
        GeneratePlanRequest {
            user_id: value.user_id,
            week_start: value.week_start,
            goal_tag: value.goal,
            tariff_mode: value.tariff_mode,
        }
        .into()
    }
}

pub async fn generate(config: &Config, args: &GenerateArgs) -> anyhow::Result<GeneratedPlan> {
    let req = PlanRequest::from(args);
    let mut store = None;

    let candidates = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => {
            let store = store.insert(mealweek_store::connect(&config.store).await?);
            match store.fetch_candidates().await {
                Ok(candidates) => candidates,
                Err(err) => {
                    store.close().await;
                    return Err(err.into());
                }
            }
        }
    };

    if candidates.is_empty() {
        tracing::warn!("catalog is empty, every slot will use a fallback meal");
    } else {
        tracing::info!(meals = candidates.len(), "catalog loaded");
    }

    let plan = PlanService::new(candidates)
        .macro_tolerance(config.planner.macro_tolerance)
        .generate_week(&req);

    tracing::info!(
        plan_id = %plan.plan_id,
        user_id = %req.user_id,
        week_start = %req.week_start,
        goal = %req.goal,
        "plan generated"
    );

    if args.save {
        let store = match store.take() {
            Some(store) => store,
            None => mealweek_store::connect(&config.store).await?,
        };

        let saved = store.save_plan(&req, &plan).await;
        store.close().await;
        saved?;
    } else if let Some(store) = store {
        store.close().await;
    }

    Ok(plan)
}

/// A JSON array of meal candidates.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<MealCandidate>> {
    let content = std::fs::read_to_string(path)?;

    Ok(serde_json::from_str(&content)?)
}
