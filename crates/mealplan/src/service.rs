use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use mealweek_shared::catalog::MealCandidate;
use mealweek_shared::mealplan::{
    DayPlan, GeneratedPlan, Goal, MacroTargets, MealSlot, PlanRequest, PriceTier, SlotFlag,
    SlotType,
};
use strum::VariantArray;

use crate::{DEFAULT_MACRO_TOLERANCE, MealCatalog, Rules, SeededRng};

pub const DAYS_PER_WEEK: usize = 7;
pub const SLOTS_PER_DAY: usize = 6;

/// Builds 7 x 6 plans from a fixed catalog.
///
/// Stateless apart from the catalog: every call seeds a fresh [`SeededRng`] from
/// `userId:weekStart:goal`, so identical requests produce identical plans, uuids included.
pub struct PlanService {
    catalog: MealCatalog,
    slot_types: Vec<SlotType>,
    macro_tolerance: f64,
}

impl PlanService {
    pub fn new(catalog: impl Into<MealCatalog>) -> Self {
        Self {
            catalog: catalog.into(),
            slot_types: SlotType::VARIANTS.to_vec(),
            macro_tolerance: DEFAULT_MACRO_TOLERANCE,
        }
    }

    /// Restricts which slot types are selected from the catalog. Missing ones are
    /// still present in every day, filled with placeholders.
    pub fn slot_types(mut self, slot_types: &[SlotType]) -> Self {
        let mut slot_types = slot_types.to_vec();
        slot_types.sort();
        slot_types.dedup();
        self.slot_types = slot_types;
        self
    }

    pub fn macro_tolerance(mut self, tolerance: f64) -> Self {
        self.macro_tolerance = tolerance;
        self
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    pub fn generate_week(&self, req: &PlanRequest) -> GeneratedPlan {
        let mut rng = SeededRng::from_key(&req.seed_key());
        let targets = Rules::daily_targets(req.goal);

        let days = (0..DAYS_PER_WEEK)
            .map(|i| {
                let date = day_date(req.week_start, i);
                let day = DayPlan {
                    date,
                    meals: self.generate_day(&mut rng, req.goal, req.tariff_mode, i),
                };

                let totals = day.totals();
                tracing::debug!(
                    user_id = %req.user_id,
                    %date,
                    kcal = totals.calories,
                    target_kcal = targets.calories,
                    within_target = Rules::validate_macros(&totals, &targets, self.macro_tolerance),
                    "day generated"
                );

                day
            })
            .collect();

        GeneratedPlan {
            plan_id: rng.uuid("plan").to_string(),
            week_start: req.week_start,
            days,
        }
    }

    fn generate_day(
        &self,
        rng: &mut SeededRng,
        goal: Goal,
        tier: Option<PriceTier>,
        day: usize,
    ) -> Vec<MealSlot> {
        let mut meals = Vec::with_capacity(SLOTS_PER_DAY);

        for slot_type in &self.slot_types {
            let mut candidates = self.catalog.filter_tier(*slot_type, goal, tier);
            candidates.sort_by(|a, b| a.id.cmp(&b.id));

            let fallback;
            let meal = if candidates.is_empty() {
                fallback = MealCandidate::fallback(
                    rng.uuid(&format!("fallback-{day}-{slot_type}")).to_string(),
                    *slot_type,
                );
                &fallback
            } else {
                candidates[rng.range(0, candidates.len())]
            };

            let mut flags = BTreeSet::new();
            if meal.is_fallback() {
                flags.insert(SlotFlag::FallbackUsed);
            }

            meals.push(slot(rng, meal, *slot_type, day, flags, ""));
        }

        for slot_type in SlotType::VARIANTS {
            if meals.len() >= SLOTS_PER_DAY {
                break;
            }

            if meals.iter().any(|m| m.slot_type == *slot_type) {
                continue;
            }

            let meal = MealCandidate::fallback(
                rng.uuid(&format!("fallback-{day}-{slot_type}-extra"))
                    .to_string(),
                *slot_type,
            );
            let flags = BTreeSet::from([SlotFlag::FilledMissingSlot]);
            meals.push(slot(rng, &meal, *slot_type, day, flags, "-extra"));
        }

        meals.sort_by_key(|m| m.slot_type.position());
        meals.truncate(SLOTS_PER_DAY);

        meals
    }
}

fn slot(
    rng: &mut SeededRng,
    meal: &MealCandidate,
    slot_type: SlotType,
    day: usize,
    flags: BTreeSet<SlotFlag>,
    suffix: &str,
) -> MealSlot {
    let MacroTargets {
        calories,
        protein,
        carbs,
        fat,
    } = meal.macros();

    MealSlot {
        meal_id: meal.id.to_owned(),
        slot_type,
        calories,
        protein,
        carbs,
        fat,
        estimated_cost: meal.price,
        alternate1_id: rng
            .uuid(&format!("alt1-{day}-{slot_type}{suffix}"))
            .to_string(),
        alternate2_id: rng
            .uuid(&format!("alt2-{day}-{slot_type}{suffix}"))
            .to_string(),
        flags,
    }
}

/// `week_start + offset` days, saturating at the last representable date.
///
/// Near `NaiveDate::MAX` several days of a plan can share that date.
pub fn day_date(week_start: NaiveDate, offset: usize) -> NaiveDate {
    match week_start.checked_add_days(Days::new(offset as u64)) {
        Some(date) => date,
        None => {
            tracing::warn!(
                %week_start,
                offset,
                "day date out of range, using the last representable date"
            );

            NaiveDate::MAX
        }
    }
}
