use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use mealweek_shared::catalog::{MealRecord, PlanItem, PlannedMeal, StoredPlan};
use mealweek_shared::mealplan::{GeneratedPlan, PlanRequest};

use crate::{Fixture, Store, check_plan_item};

#[derive(Default)]
struct Inner {
    meals: Vec<MealRecord>,
    plans: Vec<StoredPlan>,
    items: Vec<PlanItem>,
}

/// In-process store used by tests and by `kind = "memory"`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new(meals: Vec<MealRecord>) -> Self {
        Fixture {
            meals,
            ..Default::default()
        }
        .into()
    }

    fn read(&self) -> mealweek_shared::Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|e| mealweek_shared::Error::Store(e.to_string()))
    }

    fn write(&self) -> mealweek_shared::Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|e| mealweek_shared::Error::Store(e.to_string()))
    }
}

impl From<Fixture> for MemoryStore {
    fn from(value: Fixture) -> Self {
        let mut meals = value.meals;
        meals.sort_by(|a, b| a.id.cmp(&b.id));

        Self {
            inner: RwLock::new(Inner {
                meals,
                plans: value.plans,
                items: value.plan_items,
            }),
        }
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn fetch_meals(&self) -> mealweek_shared::Result<Vec<MealRecord>> {
        Ok(self.read()?.meals.to_vec())
    }

    async fn fetch_plans(&self) -> mealweek_shared::Result<Vec<StoredPlan>> {
        Ok(self.read()?.plans.to_vec())
    }

    async fn fetch_plan_items(&self, plan_id: &str) -> mealweek_shared::Result<Vec<PlannedMeal>> {
        let inner = self.read()?;
        let meals = inner
            .meals
            .iter()
            .map(|m| (m.id.as_str(), m))
            .collect::<HashMap<_, _>>();

        let mut items = inner
            .items
            .iter()
            .filter(|i| i.plan_id == plan_id)
            .map(|i| {
                let meal = meals.get(i.meal_id.as_str());

                PlannedMeal {
                    day_of_week: i.day_of_week,
                    slot_type: i.slot_type,
                    meal_id: i.meal_id.to_owned(),
                    name: meal.map(|m| m.name.to_owned()),
                    protein_source: meal.and_then(|m| m.protein_source.to_owned()),
                    price_tier: meal.and_then(|m| m.price_tier),
                }
            })
            .collect::<Vec<_>>();

        items.sort_by_key(|i| (i.day_of_week, i.slot_type.position()));

        Ok(items)
    }

    async fn save_plan(
        &self,
        req: &PlanRequest,
        plan: &GeneratedPlan,
    ) -> mealweek_shared::Result<()> {
        let items = PlanItem::from_plan(plan);
        for item in items.iter() {
            check_plan_item(item)?;
        }

        let mut inner = self.write()?;
        inner.plans.retain(|p| p.id != plan.plan_id);
        inner.items.retain(|i| i.plan_id != plan.plan_id);
        inner.plans.push(StoredPlan {
            id: plan.plan_id.to_owned(),
            user_id: req.user_id.to_owned(),
            week_start: plan.week_start,
            goal_tag: req.goal,
            tariff_mode: req.tariff_mode,
        });
        inner.items.extend(items);

        Ok(())
    }

    async fn insert_plan_item(&self, item: &PlanItem) -> mealweek_shared::Result<String> {
        check_plan_item(item)?;

        self.write()?.items.push(item.clone());

        Ok(uuid::Uuid::new_v4().to_string())
    }

    async fn close(&self) {}
}
