use std::path::Path;

use mealweek_shared::catalog::{MealRecord, PlanItem, StoredPlan};
use mealweek_shared::mealplan::{Goal, PriceTier, SlotType};
use serde::{Deserialize, Serialize};

/// Snapshot loaded into a [`crate::MemoryStore`].
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Fixture {
    #[serde(default)]
    pub meals: Vec<MealRecord>,
    #[serde(default)]
    pub plans: Vec<StoredPlan>,
    #[serde(default)]
    pub plan_items: Vec<PlanItem>,
}

impl Fixture {
    pub fn load(path: impl AsRef<Path>) -> mealweek_shared::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedIngredient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price_per100_try: f64,
    pub per100_kcal: f64,
    pub per100_p: f64,
    pub per100_c: f64,
    pub per100_f: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedMealItem {
    pub ingredient_id: String,
    pub grams: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedMeal {
    pub id: String,
    pub name: String,
    pub meal_type: SlotType,
    pub meal_class: String,
    pub goal_tag: Goal,
    #[serde(default)]
    pub protein_source: Option<String>,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
    #[serde(default)]
    pub items: Vec<SeedMealItem>,
    #[serde(default)]
    pub alt1_id: Option<String>,
    #[serde(default)]
    pub alt2_id: Option<String>,
}

/// Catalog content inserted by [`crate::SqliteStore::seed`].
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Seed {
    #[serde(default)]
    pub ingredients: Vec<SeedIngredient>,
    #[serde(default)]
    pub meals: Vec<SeedMeal>,
}

impl Seed {
    pub fn load(path: impl AsRef<Path>) -> mealweek_shared::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Ok(serde_json::from_str(&content)?)
    }
}
