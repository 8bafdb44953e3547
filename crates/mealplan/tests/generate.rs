use mealweek_mealplan::{MealCatalog, PlanService};
use mealweek_shared::mealplan::{Goal, PriceTier, SlotFlag, SlotType};
use strum::VariantArray;

mod helpers;

#[test]
fn test_generate_week_from_mock_catalog() {
    let service = PlanService::new(helpers::mock_meals());
    let plan = service.generate_week(&helpers::request("u1", "2026-01-01", Goal::Cut));

    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.days[0].date.to_string(), "2026-01-01");
    assert_eq!(plan.days[6].date.to_string(), "2026-01-07");
    assert_eq!(plan.week_start.to_string(), "2026-01-01");

    let catalog_ids = helpers::mock_meals()
        .into_iter()
        .map(|m| m.id)
        .collect::<Vec<_>>();

    for day in &plan.days {
        assert_eq!(day.meals.len(), 6);
        let slot_types = day.meals.iter().map(|m| m.slot_type).collect::<Vec<_>>();
        assert_eq!(slot_types, SlotType::VARIANTS.to_vec());

        for meal in &day.meals {
            assert!(meal.flags.is_empty(), "{} should not be a fallback", meal.meal_id);
            assert!(catalog_ids.contains(&meal.meal_id));
            assert_ne!(meal.alternate1_id, meal.meal_id);
            assert_ne!(meal.alternate2_id, meal.meal_id);
            assert_ne!(meal.alternate1_id, meal.alternate2_id);
        }
    }
}

#[test]
fn test_selected_meal_matches_slot_nutrition() {
    let service = PlanService::new(helpers::mock_meals());
    let plan = service.generate_week(&helpers::request("u1", "2026-01-01", Goal::Cut));
    let catalog = helpers::mock_meals();

    for (_, slot) in plan.slots() {
        let meal = catalog.iter().find(|m| m.id == slot.meal_id).unwrap();
        assert_eq!(meal.slot_type, slot.slot_type);
        assert_eq!(meal.calories, slot.calories);
        assert_eq!(meal.price, slot.estimated_cost);
    }
}

#[test]
fn test_goal_is_threaded_into_selection() {
    let meals = vec![helpers::meal(
        "9d3eb18f-a2e3-4f91-8687-c1f2e3d4c5b6",
        SlotType::Breakfast,
        "bulk",
        650.0,
        40.0,
        70.0,
        20.0,
        55.0,
    )];
    let service = PlanService::new(meals);

    let bulk = service.generate_week(&helpers::request("u1", "2026-01-01", Goal::Bulk));
    let breakfast = &bulk.days[0].meals[0];
    assert_eq!(breakfast.meal_id, "9d3eb18f-a2e3-4f91-8687-c1f2e3d4c5b6");
    assert!(breakfast.flags.is_empty());

    let cut = service.generate_week(&helpers::request("u1", "2026-01-01", Goal::Cut));
    let breakfast = &cut.days[0].meals[0];
    assert_ne!(breakfast.meal_id, "9d3eb18f-a2e3-4f91-8687-c1f2e3d4c5b6");
    assert!(breakfast.flags.contains(&SlotFlag::FallbackUsed));
}

#[test]
fn test_all_tag_matches_every_goal() {
    let meals = vec![helpers::meal(
        "ae4fc29a-b3f4-4a02-9798-d2a3f4e5d6c7",
        SlotType::Snack3,
        "all",
        150.0,
        8.0,
        12.0,
        6.0,
        20.0,
    )];
    let service = PlanService::new(meals);

    for goal in [Goal::Cut, Goal::Bulk, Goal::Maintain] {
        let plan = service.generate_week(&helpers::request("u9", "2026-03-02", goal));
        assert!(plan.days.iter().all(|d| d.meals[5].meal_id
            == "ae4fc29a-b3f4-4a02-9798-d2a3f4e5d6c7"
            && d.meals[5].flags.is_empty()));
    }
}

#[test]
fn test_tariff_mode_narrows_candidates() {
    let mut meals = helpers::mock_meals();
    meals[0].price_tier = Some(PriceTier::Ekonomik);
    meals[1].price_tier = Some(PriceTier::Normal);
    let eco_id = meals[0].id.to_owned();
    let service = PlanService::new(meals);

    let req = helpers::request("u1", "2026-01-01", Goal::Cut).tariff_mode(PriceTier::Ekonomik);
    let plan = service.generate_week(&req);

    for day in &plan.days {
        assert_eq!(day.meals[0].meal_id, eco_id);
    }
}

#[test]
fn test_missing_slot_types_are_filled() {
    let service = PlanService::new(helpers::mock_meals()).slot_types(&[
        SlotType::Breakfast,
        SlotType::Snack1,
        SlotType::Lunch,
        SlotType::Dinner,
    ]);
    let plan = service.generate_week(&helpers::request("u1", "2026-01-01", Goal::Cut));
    let uuid = helpers::uuid_regex();

    for day in &plan.days {
        assert_eq!(day.meals.len(), 6);
        for meal in &day.meals {
            match meal.slot_type {
                SlotType::Snack2 | SlotType::Snack3 => {
                    assert!(meal.flags.contains(&SlotFlag::FilledMissingSlot));
                    assert!(uuid.is_match(&meal.meal_id));
                    assert_eq!(meal.calories, 250.0);
                }
                _ => assert!(meal.flags.is_empty()),
            }
        }
    }
}

#[test]
fn test_catalog_order_does_not_change_plan() {
    let mut reversed = helpers::mock_meals();
    reversed.reverse();

    let req = helpers::request("u1", "2026-01-01", Goal::Cut);
    let a = PlanService::new(helpers::mock_meals()).generate_week(&req);
    let b = PlanService::new(MealCatalog::new(reversed)).generate_week(&req);

    assert_eq!(a, b);
}

#[test]
fn test_day_totals_sum_slots() {
    let service = PlanService::new(helpers::mock_meals());
    let plan = service.generate_week(&helpers::request("u1", "2026-01-01", Goal::Cut));

    for day in &plan.days {
        let kcal: f64 = day.meals.iter().map(|m| m.calories).sum();
        assert_eq!(day.totals().calories, kcal);
    }
}
