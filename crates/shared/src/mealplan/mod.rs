use std::collections::BTreeSet;
use std::ops::AddAssign;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use uuid::Uuid;

/// The six fixed meal occasions of a day, in chronological order.
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
    PartialOrd,
    Ord,
    Hash,
)]
pub enum SlotType {
    #[strum(to_string = "breakfast", serialize = "kahvalti")]
    #[serde(rename = "breakfast", alias = "kahvalti")]
    Breakfast,
    #[strum(to_string = "snack1", serialize = "ara_ogun_1")]
    #[serde(rename = "snack1", alias = "ara_ogun_1")]
    Snack1,
    #[strum(to_string = "lunch", serialize = "ogle")]
    #[serde(rename = "lunch", alias = "ogle")]
    Lunch,
    #[strum(to_string = "snack2", serialize = "ara_ogun_2")]
    #[serde(rename = "snack2", alias = "ara_ogun_2")]
    Snack2,
    #[strum(to_string = "dinner", serialize = "aksam")]
    #[serde(rename = "dinner", alias = "aksam")]
    Dinner,
    #[strum(to_string = "snack3", serialize = "gece_atistirmasi")]
    #[serde(rename = "snack3", alias = "gece_atistirmasi")]
    Snack3,
}

impl SlotType {
    /// Position of the slot within a day (0 = breakfast, 5 = night snack).
    pub fn position(&self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
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
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Cut,
    Bulk,
    #[default]
    Maintain,
}

/// Affordability bucket a meal belongs to.
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
    PartialOrd,
    Ord,
    Hash,
)]
pub enum PriceTier {
    #[strum(to_string = "ekonomik", serialize = "economic")]
    #[serde(rename = "ekonomik", alias = "economic")]
    Ekonomik,
    #[strum(to_string = "normal")]
    #[serde(rename = "normal")]
    Normal,
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SlotFlag {
    FallbackUsed,
    FilledMissingSlot,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct MacroTargets {
    #[serde(rename = "kcal")]
    pub calories: f64,
    #[serde(rename = "p")]
    pub protein: f64,
    #[serde(rename = "c")]
    pub carbs: f64,
    #[serde(rename = "f")]
    pub fat: f64,
}

impl MacroTargets {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

impl AddAssign for MacroTargets {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanRequest {
    pub user_id: String,
    pub week_start: NaiveDate,
    pub goal: Goal,
    pub tariff_mode: Option<PriceTier>,
}

impl PlanRequest {
    pub fn new(user_id: impl Into<String>, week_start: NaiveDate, goal: Goal) -> Self {
        Self {
            user_id: user_id.into(),
            week_start,
            goal,
            tariff_mode: None,
        }
    }

    pub fn tariff_mode(mut self, tier: PriceTier) -> Self {
        self.tariff_mode = Some(tier);
        self
    }

    /// `userId:weekStart:goal`, the string the plan seed is hashed from.
    pub fn seed_key(&self) -> String {
        format!("{}:{}:{}", self.user_id, self.week_start, self.goal)
    }
}

/// Request body accepted at the transport boundary.
///
/// Deserialization doubles as schema validation: a malformed uuid, date or goal tag
/// never reaches the planner.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GeneratePlanRequest {
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    pub goal_tag: Goal,
    #[serde(default)]
    pub tariff_mode: Option<PriceTier>,
}

impl From<GeneratePlanRequest> for PlanRequest {
    fn from(value: GeneratePlanRequest) -> Self {
        Self {
            user_id: value.user_id.to_string(),
            week_start: value.week_start,
            goal: value.goal_tag,
            tariff_mode: value.tariff_mode,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealSlot {
    pub meal_id: String,
    #[serde(rename = "meal_type")]
    pub slot_type: SlotType,
    #[serde(rename = "kcal")]
    pub calories: f64,
    #[serde(rename = "p")]
    pub protein: f64,
    #[serde(rename = "c")]
    pub carbs: f64,
    #[serde(rename = "f")]
    pub fat: f64,
    #[serde(rename = "estimated_cost_try")]
    pub estimated_cost: f64,
    #[serde(rename = "alt1_meal_id")]
    pub alternate1_id: String,
    #[serde(rename = "alt2_meal_id")]
    pub alternate2_id: String,
    pub flags: BTreeSet<SlotFlag>,
}

impl MealSlot {
    pub fn macros(&self) -> MacroTargets {
        MacroTargets::new(self.calories, self.protein, self.carbs, self.fat)
    }

    pub fn is_fallback(&self) -> bool {
        !self.flags.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub meals: Vec<MealSlot>,
}

impl DayPlan {
    pub fn totals(&self) -> MacroTargets {
        let mut totals = MacroTargets::default();
        for meal in &self.meals {
            totals += meal.macros();
        }

        totals
    }

    pub fn estimated_cost(&self) -> f64 {
        self.meals.iter().map(|m| m.estimated_cost).sum()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratedPlan {
    pub plan_id: String,
    pub week_start: NaiveDate,
    pub days: Vec<DayPlan>,
}

impl GeneratedPlan {
    pub fn slots(&self) -> impl Iterator<Item = (usize, &MealSlot)> {
        self.days
            .iter()
            .enumerate()
            .flat_map(|(i, day)| day.meals.iter().map(move |m| (i, m)))
    }
}
