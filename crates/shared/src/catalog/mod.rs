use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::mealplan::{GeneratedPlan, Goal, MacroTargets, PriceTier, SlotType};

pub const TAG_ALL: &str = "all";
pub const TAG_FALLBACK: &str = "fallback";

/// A meal that can be placed in a slot, as loaded from the catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealCandidate {
    pub id: String,
    #[serde(rename = "meal_type")]
    pub slot_type: SlotType,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(rename = "kcal")]
    pub calories: f64,
    #[serde(rename = "p")]
    pub protein: f64,
    #[serde(rename = "c")]
    pub carbs: f64,
    #[serde(rename = "f")]
    pub fat: f64,
    pub price: f64,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
}

impl MealCandidate {
    /// Placeholder used when the catalog has nothing for a slot.
    pub fn fallback(id: impl Into<String>, slot_type: SlotType) -> Self {
        Self {
            id: id.into(),
            slot_type,
            tags: BTreeSet::from([TAG_FALLBACK.to_owned()]),
            calories: 250.0,
            protein: 15.0,
            carbs: 25.0,
            fat: 8.0,
            price: 40.0,
            price_tier: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_fallback(&self) -> bool {
        self.has_tag(TAG_FALLBACK)
    }

    pub fn macros(&self) -> MacroTargets {
        MacroTargets::new(self.calories, self.protein, self.carbs, self.fat)
    }
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealClass {
    Breakfast,
    LightSnack,
    MainMeal,
    NightSnack,
}

impl From<SlotType> for MealClass {
    fn from(value: SlotType) -> Self {
        match value {
            SlotType::Breakfast => MealClass::Breakfast,
            SlotType::Snack1 | SlotType::Snack2 => MealClass::LightSnack,
            SlotType::Lunch | SlotType::Dinner => MealClass::MainMeal,
            SlotType::Snack3 => MealClass::NightSnack,
        }
    }
}

/// A persisted catalog meal with totals computed from its ingredients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "meal_type")]
    pub slot_type: SlotType,
    /// Recorded class label, kept raw so bad data can be reported instead of rejected.
    pub meal_class: String,
    pub goal_tag: Goal,
    #[serde(default)]
    pub protein_source: Option<String>,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
    #[serde(rename = "total_cost_try")]
    pub total_cost: f64,
    #[serde(rename = "kcal")]
    pub calories: f64,
    #[serde(rename = "p")]
    pub protein: f64,
    #[serde(rename = "c")]
    pub carbs: f64,
    #[serde(rename = "f")]
    pub fat: f64,
    #[serde(default)]
    pub alt1_id: Option<String>,
    #[serde(default)]
    pub alt2_id: Option<String>,
}

impl MealRecord {
    pub fn candidate(&self) -> MealCandidate {
        MealCandidate {
            id: self.id.to_owned(),
            slot_type: self.slot_type,
            tags: BTreeSet::from([self.goal_tag.to_string()]),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            price: self.total_cost,
            price_tier: self.price_tier,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoredPlan {
    pub id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub goal_tag: Goal,
    #[serde(default)]
    pub tariff_mode: Option<PriceTier>,
}

/// One slot of a persisted plan joined with the catalog meal it points to.
///
/// `name`, `protein_source` and `price_tier` are empty for synthesized fallback meals.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlannedMeal {
    pub day_of_week: u8,
    #[serde(rename = "meal_type")]
    pub slot_type: SlotType,
    pub meal_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub protein_source: Option<String>,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
}

impl PlannedMeal {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.meal_id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanItem {
    pub plan_id: String,
    pub day_of_week: u8,
    #[serde(rename = "meal_type")]
    pub slot_type: SlotType,
    pub meal_id: String,
    #[serde(default)]
    pub alt1_meal_id: Option<String>,
    #[serde(default)]
    pub alt2_meal_id: Option<String>,
    #[serde(default)]
    pub is_consumed: bool,
}

impl PlanItem {
    /// Flattens a generated plan into one item per slot, days numbered from 1.
    pub fn from_plan(plan: &GeneratedPlan) -> Vec<PlanItem> {
        plan.slots()
            .map(|(day, slot)| PlanItem {
                plan_id: plan.plan_id.to_owned(),
                day_of_week: (day + 1) as u8,
                slot_type: slot.slot_type,
                meal_id: slot.meal_id.to_owned(),
                alt1_meal_id: Some(slot.alternate1_id.to_owned()),
                alt2_meal_id: Some(slot.alternate2_id.to_owned()),
                is_consumed: false,
            })
            .collect()
    }
}
