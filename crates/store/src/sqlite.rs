use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use mealweek_db::table::{
    Ingredient, Meal, MealAlternative, MealItem, Plan, PlanItem as PlanItemTable,
};
use mealweek_shared::catalog::{MealRecord, PlanItem, PlannedMeal, StoredPlan};
use mealweek_shared::mealplan::{GeneratedPlan, Goal, PlanRequest, PriceTier, SlotType};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use sqlx::types::Text;
use sqlx_migrator::{Migrate, Plan as MigrationPlan};

use crate::{Seed, Store, check_plan_item};

#[derive(FromRow)]
struct MealRow {
    id: String,
    name: String,
    meal_type: Text<SlotType>,
    meal_class: String,
    goal_tag: Text<Goal>,
    protein_source: Option<String>,
    price_tier: Option<Text<PriceTier>>,
}

#[derive(FromRow)]
struct MealItemRow {
    meal_id: String,
    ingredient_id: String,
    grams: f64,
}

#[derive(FromRow)]
struct IngredientRow {
    id: String,
    price_per100_try: f64,
    per100_kcal: f64,
    per100_p: f64,
    per100_c: f64,
    per100_f: f64,
}

#[derive(FromRow)]
struct AlternativeRow {
    meal_id: String,
    alt1_meal_id: Option<String>,
    alt2_meal_id: Option<String>,
}

#[derive(FromRow)]
struct PlanRow {
    id: String,
    user_id: String,
    week_start: Text<NaiveDate>,
    goal_tag: Text<Goal>,
    tariff_mode: Option<Text<PriceTier>>,
}

#[derive(FromRow)]
struct PlanItemRow {
    day_of_week: i64,
    meal_type: Text<SlotType>,
    meal_id: String,
}

/// Store backed by the `mealweek-db` schema.
#[derive(Clone)]
pub struct SqliteStore(pub SqlitePool);

impl SqliteStore {
    pub async fn connect(url: &str, max_connections: u32) -> mealweek_shared::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self(pool))
    }

    pub async fn migrate(&self) -> mealweek_shared::Result<()> {
        let mut conn = self.0.acquire().await?;
        mealweek_db::migrator()
            .map_err(|e| mealweek_shared::Error::Store(e.to_string()))?
            .run(&mut conn, &MigrationPlan::apply_all())
            .await
            .map_err(|e| mealweek_shared::Error::Store(e.to_string()))?;

        Ok(())
    }

    /// Inserts ingredients, meals, meal items and alternates in one transaction.
    pub async fn seed(&self, seed: &Seed) -> mealweek_shared::Result<()> {
        let mut tx = self.0.begin().await?;

        if !seed.ingredients.is_empty() {
            let mut statement = Query::insert()
                .into_table(Ingredient::Table)
                .columns([
                    Ingredient::Id,
                    Ingredient::Name,
                    Ingredient::PricePer100Try,
                    Ingredient::Per100Kcal,
                    Ingredient::Per100P,
                    Ingredient::Per100C,
                    Ingredient::Per100F,
                ])
                .to_owned();

            for ingredient in seed.ingredients.iter() {
                statement.values_panic([
                    ingredient.id.to_owned().into(),
                    ingredient.name.to_owned().into(),
                    ingredient.price_per100_try.into(),
                    ingredient.per100_kcal.into(),
                    ingredient.per100_p.into(),
                    ingredient.per100_c.into(),
                    ingredient.per100_f.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        if seed.meals.is_empty() {
            tx.commit().await?;

            return Ok(());
        }

        let mut statement = Query::insert()
            .into_table(Meal::Table)
            .columns([
                Meal::Id,
                Meal::Name,
                Meal::MealType,
                Meal::MealClass,
                Meal::GoalTag,
                Meal::ProteinSource,
                Meal::PriceTier,
            ])
            .to_owned();

        for meal in seed.meals.iter() {
            statement.values_panic([
                meal.id.to_owned().into(),
                meal.name.to_owned().into(),
                meal.meal_type.to_string().into(),
                meal.meal_class.to_owned().into(),
                meal.goal_tag.to_string().into(),
                meal.protein_source.to_owned().into(),
                meal.price_tier.map(|t| t.to_string()).into(),
            ]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let mut statement = Query::insert()
            .into_table(MealItem::Table)
            .columns([MealItem::MealId, MealItem::IngredientId, MealItem::Grams])
            .to_owned();
        let mut has_items = false;

        for meal in seed.meals.iter() {
            for item in meal.items.iter() {
                statement.values_panic([
                    meal.id.to_owned().into(),
                    item.ingredient_id.to_owned().into(),
                    item.grams.into(),
                ]);
                has_items = true;
            }
        }

        if has_items {
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        let mut statement = Query::insert()
            .into_table(MealAlternative::Table)
            .columns([
                MealAlternative::MealId,
                MealAlternative::Alt1MealId,
                MealAlternative::Alt2MealId,
            ])
            .to_owned();

        for meal in seed.meals.iter() {
            statement.values_panic([
                meal.id.to_owned().into(),
                meal.alt1_id.to_owned().into(),
                meal.alt2_id.to_owned().into(),
            ]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(
            ingredients = seed.ingredients.len(),
            meals = seed.meals.len(),
            "catalog seeded"
        );

        Ok(())
    }

    async fn meal_rows(&self) -> mealweek_shared::Result<Vec<MealRow>> {
        let statement = Query::select()
            .columns([
                Meal::Id,
                Meal::Name,
                Meal::MealType,
                Meal::MealClass,
                Meal::GoalTag,
                Meal::ProteinSource,
                Meal::PriceTier,
            ])
            .from(Meal::Table)
            .order_by(Meal::Id, sea_query::Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, MealRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}

#[async_trait::async_trait]
impl Store for SqliteStore {
    async fn fetch_meals(&self) -> mealweek_shared::Result<Vec<MealRecord>> {
        let meals = self.meal_rows().await?;

        let statement = Query::select()
            .columns([
                Ingredient::Id,
                Ingredient::PricePer100Try,
                Ingredient::Per100Kcal,
                Ingredient::Per100P,
                Ingredient::Per100C,
                Ingredient::Per100F,
            ])
            .from(Ingredient::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let ingredients = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|i| (i.id.to_owned(), i))
            .collect::<HashMap<_, _>>();

        let statement = Query::select()
            .columns([MealItem::MealId, MealItem::IngredientId, MealItem::Grams])
            .from(MealItem::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let items = sqlx::query_as_with::<_, MealItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let statement = Query::select()
            .columns([
                MealAlternative::MealId,
                MealAlternative::Alt1MealId,
                MealAlternative::Alt2MealId,
            ])
            .from(MealAlternative::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let alternatives = sqlx::query_as_with::<_, AlternativeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|a| (a.meal_id.to_owned(), a))
            .collect::<HashMap<_, _>>();

        // [cost, kcal, p, c, f] per meal, from grams and per-100g values
        let mut totals: HashMap<&str, [f64; 5]> = HashMap::new();
        for item in items.iter() {
            let Some(ingredient) = ingredients.get(&item.ingredient_id) else {
                tracing::warn!(
                    meal_id = %item.meal_id,
                    ingredient_id = %item.ingredient_id,
                    "meal item references a missing ingredient"
                );
                continue;
            };

            let ratio = item.grams / 100.0;
            let total = totals.entry(item.meal_id.as_str()).or_default();
            total[0] += ingredient.price_per100_try * ratio;
            total[1] += ingredient.per100_kcal * ratio;
            total[2] += ingredient.per100_p * ratio;
            total[3] += ingredient.per100_c * ratio;
            total[4] += ingredient.per100_f * ratio;
        }

        Ok(meals
            .into_iter()
            .map(|m| {
                let [total_cost, calories, protein, carbs, fat] =
                    totals.get(m.id.as_str()).copied().unwrap_or_default();
                let alternative = alternatives.get(&m.id);

                MealRecord {
                    alt1_id: alternative.and_then(|a| a.alt1_meal_id.to_owned()),
                    alt2_id: alternative.and_then(|a| a.alt2_meal_id.to_owned()),
                    id: m.id,
                    name: m.name,
                    slot_type: m.meal_type.0,
                    meal_class: m.meal_class,
                    goal_tag: m.goal_tag.0,
                    protein_source: m.protein_source,
                    price_tier: m.price_tier.map(|t| t.0),
                    total_cost,
                    calories,
                    protein,
                    carbs,
                    fat,
                }
            })
            .collect())
    }

    async fn fetch_plans(&self) -> mealweek_shared::Result<Vec<StoredPlan>> {
        let statement = Query::select()
            .columns([
                Plan::Id,
                Plan::UserId,
                Plan::WeekStart,
                Plan::GoalTag,
                Plan::TariffMode,
            ])
            .from(Plan::Table)
            .order_by(Plan::CreatedAt, sea_query::Order::Asc)
            .order_by(Plan::Id, sea_query::Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|p| StoredPlan {
                id: p.id,
                user_id: p.user_id,
                week_start: p.week_start.0,
                goal_tag: p.goal_tag.0,
                tariff_mode: p.tariff_mode.map(|t| t.0),
            })
            .collect())
    }

    async fn fetch_plan_items(&self, plan_id: &str) -> mealweek_shared::Result<Vec<PlannedMeal>> {
        let statement = Query::select()
            .columns([
                PlanItemTable::DayOfWeek,
                PlanItemTable::MealType,
                PlanItemTable::MealId,
            ])
            .from(PlanItemTable::Table)
            .and_where(Expr::col(PlanItemTable::PlanId).eq(plan_id))
            .order_by(PlanItemTable::DayOfWeek, sea_query::Order::Asc)
            .order_by(PlanItemTable::SlotPosition, sea_query::Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PlanItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let meals = self
            .meal_rows()
            .await?
            .into_iter()
            .map(|m| (m.id.to_owned(), m))
            .collect::<HashMap<_, _>>();

        rows.into_iter()
            .map(|row| {
                let meal = meals.get(&row.meal_id);
                let day_of_week = u8::try_from(row.day_of_week)
                    .map_err(|e| mealweek_shared::Error::Store(e.to_string()))?;

                Ok(PlannedMeal {
                    day_of_week,
                    slot_type: row.meal_type.0,
                    name: meal.map(|m| m.name.to_owned()),
                    protein_source: meal.and_then(|m| m.protein_source.to_owned()),
                    price_tier: meal.and_then(|m| m.price_tier.as_ref().map(|t| t.0)),
                    meal_id: row.meal_id,
                })
            })
            .collect()
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

        let mut tx = self.0.begin().await?;

        // Plan ids are deterministic, saving the same request again replaces it
        let statement = Query::delete()
            .from_table(PlanItemTable::Table)
            .and_where(Expr::col(PlanItemTable::PlanId).eq(plan.plan_id.to_owned()))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let statement = Query::delete()
            .from_table(Plan::Table)
            .and_where(Expr::col(Plan::Id).eq(plan.plan_id.to_owned()))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let statement = Query::insert()
            .into_table(Plan::Table)
            .columns([
                Plan::Id,
                Plan::UserId,
                Plan::WeekStart,
                Plan::GoalTag,
                Plan::TariffMode,
                Plan::CreatedAt,
            ])
            .values_panic([
                plan.plan_id.to_owned().into(),
                req.user_id.to_owned().into(),
                plan.week_start.to_string().into(),
                req.goal.to_string().into(),
                req.tariff_mode.map(|t| t.to_string()).into(),
                chrono::Utc::now().timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !items.is_empty() {
            let mut statement = plan_item_insert();
            for item in items.iter() {
                push_plan_item(&mut statement, item);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(plan_id = %plan.plan_id, items = items.len(), "plan saved");

        Ok(())
    }

    async fn insert_plan_item(&self, item: &PlanItem) -> mealweek_shared::Result<String> {
        check_plan_item(item)?;

        let mut statement = plan_item_insert();
        let id = push_plan_item(&mut statement, item);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(id)
    }

    async fn close(&self) {
        self.0.close().await;
    }
}

fn plan_item_insert() -> sea_query::InsertStatement {
    Query::insert()
        .into_table(PlanItemTable::Table)
        .columns([
            PlanItemTable::Id,
            PlanItemTable::PlanId,
            PlanItemTable::DayOfWeek,
            PlanItemTable::MealType,
            PlanItemTable::SlotPosition,
            PlanItemTable::MealId,
            PlanItemTable::Alt1MealId,
            PlanItemTable::Alt2MealId,
            PlanItemTable::IsConsumed,
        ])
        .to_owned()
}

fn push_plan_item(statement: &mut sea_query::InsertStatement, item: &PlanItem) -> String {
    let id = uuid::Uuid::new_v4().to_string();

    statement.values_panic([
        id.to_owned().into(),
        item.plan_id.to_owned().into(),
        i32::from(item.day_of_week).into(),
        item.slot_type.to_string().into(),
        (item.slot_type.position() as i32).into(),
        item.meal_id.to_owned().into(),
        item.alt1_meal_id.to_owned().into(),
        item.alt2_meal_id.to_owned().into(),
        item.is_consumed.into(),
    ]);

    id
}
