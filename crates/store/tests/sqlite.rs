use chrono::NaiveDate;
use mealweek_shared::catalog::PlanItem;
use mealweek_shared::mealplan::{
    DayPlan, GeneratedPlan, Goal, MealSlot, PlanRequest, PriceTier, SlotType,
};
use mealweek_store::{Seed, Store};
use temp_dir::TempDir;

mod helpers;

fn slot(meal_id: &str, slot_type: SlotType) -> MealSlot {
    MealSlot {
        meal_id: meal_id.to_owned(),
        slot_type,
        calories: 400.0,
        protein: 20.0,
        carbs: 40.0,
        fat: 10.0,
        estimated_cost: 50.0,
        alternate1_id: "a1".to_owned(),
        alternate2_id: "a2".to_owned(),
        flags: Default::default(),
    }
}

#[tokio::test]
async fn test_seed_computes_totals() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;
    store.seed(&helpers::seed()).await?;

    let meals = store.fetch_meals().await?;
    let ids = meals.iter().map(|m| m.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["b-egg", "b-oats", "l-chicken"]);

    let lunch = &meals[2];
    assert_eq!(lunch.slot_type, SlotType::Lunch);
    assert!((lunch.calories - (165.0 * 1.5 + 130.0 * 2.0)).abs() < 1e-9);
    assert!((lunch.protein - (31.0 * 1.5 + 3.0 * 2.0)).abs() < 1e-9);
    assert!((lunch.total_cost - (30.0 * 1.5 + 5.0 * 2.0)).abs() < 1e-9);
    assert_eq!(lunch.price_tier, Some(PriceTier::Normal));

    let oats = &meals[1];
    assert_eq!(oats.alt1_id.as_deref(), Some("b-egg"));
    assert_eq!(oats.alt2_id, None);
    assert_eq!(oats.protein_source.as_deref(), Some("dairy"));

    let candidates = store.fetch_candidates().await?;
    assert_eq!(candidates.len(), 3);
    assert!(candidates.iter().all(|c| c.has_tag("cut")));

    store.close().await;

    Ok(())
}

#[tokio::test]
async fn test_empty_seed_is_noop() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;
    store.seed(&Seed::default()).await?;

    assert!(store.fetch_meals().await?.is_empty());
    assert!(store.fetch_plans().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_migrate_twice() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;
    store.migrate().await?;

    assert!(store.fetch_meals().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_save_plan_and_fetch_items() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;
    store.seed(&helpers::seed()).await?;

    let week_start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let plan = GeneratedPlan {
        plan_id: "plan-1".to_owned(),
        week_start,
        days: vec![
            DayPlan {
                date: week_start,
                meals: vec![
                    slot("l-chicken", SlotType::Lunch),
                    slot("b-oats", SlotType::Breakfast),
                ],
            },
            DayPlan {
                date: week_start.succ_opt().unwrap(),
                meals: vec![slot("00000000-fallback", SlotType::Dinner)],
            },
        ],
    };
    let req = PlanRequest::new("u1", week_start, Goal::Cut).tariff_mode(PriceTier::Ekonomik);
    store.save_plan(&req, &plan).await?;

    let plans = store.fetch_plans().await?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, "plan-1");
    assert_eq!(plans[0].user_id, "u1");
    assert_eq!(plans[0].week_start, week_start);
    assert_eq!(plans[0].goal_tag, Goal::Cut);
    assert_eq!(plans[0].tariff_mode, Some(PriceTier::Ekonomik));

    let items = store.fetch_plan_items("plan-1").await?;
    let order = items
        .iter()
        .map(|i| (i.day_of_week, i.slot_type))
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            (1, SlotType::Breakfast),
            (1, SlotType::Lunch),
            (2, SlotType::Dinner)
        ]
    );
    assert_eq!(items[0].name.as_deref(), Some("Oat bowl"));
    assert_eq!(items[0].price_tier, Some(PriceTier::Ekonomik));
    assert_eq!(items[2].name, None);
    assert_eq!(items[2].label(), "00000000-fallback");

    assert!(store.fetch_plan_items("missing").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_insert_plan_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    let mut item = PlanItem {
        plan_id: "plan-2".to_owned(),
        day_of_week: 3,
        slot_type: SlotType::Snack2,
        meal_id: "m1".to_owned(),
        alt1_meal_id: None,
        alt2_meal_id: None,
        is_consumed: false,
    };

    let id = store.insert_plan_item(&item).await?;
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    let items = store.fetch_plan_items("plan-2").await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].day_of_week, 3);

    item.meal_id = String::new();
    let err = store.insert_plan_item(&item).await.unwrap_err();
    assert!(matches!(err, mealweek_shared::Error::Validation(_)));
    assert_eq!(store.fetch_plan_items("plan-2").await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_missing_schema_is_infrastructure_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let store = mealweek_store::SqliteStore::connect(&url, 1).await?;

    let err = store.fetch_meals().await.unwrap_err();
    assert!(err.is_infrastructure());

    Ok(())
}

#[tokio::test]
async fn test_save_plan_twice_replaces_it() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;
    store.seed(&helpers::seed()).await?;

    let week_start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let req = PlanRequest::new("u1", week_start, Goal::Cut);
    let service = mealweek_mealplan::PlanService::new(store.fetch_candidates().await?);
    let plan = service.generate_week(&req);

    store.save_plan(&req, &plan).await?;
    store.save_plan(&req, &service.generate_week(&req)).await?;

    let plans = store.fetch_plans().await?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, plan.plan_id);
    assert_eq!(store.fetch_plan_items(&plan.plan_id).await?.len(), 42);

    Ok(())
}

#[tokio::test]
async fn test_fetch_meal_by_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;
    store.seed(&helpers::seed()).await?;

    let meal = store.fetch_meal("b-oats").await?.unwrap();
    assert_eq!(meal.name, "Oat bowl");
    assert_eq!(meal.alt1_id.as_deref(), Some("b-egg"));
    assert!(store.fetch_meal("missing").await?.is_none());
    assert!(!store.fetch_meal("").await.unwrap_err().is_infrastructure());

    Ok(())
}
