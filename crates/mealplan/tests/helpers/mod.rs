#![allow(dead_code)]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use mealweek_shared::catalog::MealCandidate;
use mealweek_shared::mealplan::{Goal, PlanRequest, SlotType};
use regex::Regex;

pub const UUID_V4: &str =
    r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

pub fn uuid_regex() -> Regex {
    Regex::new(UUID_V4).unwrap()
}

#[allow(clippy::too_many_arguments)]
pub fn meal(
    id: &str,
    slot_type: SlotType,
    tag: &str,
    kcal: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    price: f64,
) -> MealCandidate {
    MealCandidate {
        id: id.to_owned(),
        slot_type,
        tags: BTreeSet::from([tag.to_owned()]),
        calories: kcal,
        protein,
        carbs,
        fat,
        price,
        price_tier: None,
    }
}

/// Eight meals covering all six slot types, all tagged `cut`.
pub fn mock_meals() -> Vec<MealCandidate> {
    vec![
        meal("1be5c3fd-e9da-4127-8977-94a50d28362d", SlotType::Breakfast, "cut", 400.0, 20.0, 40.0, 10.0, 50.0),
        meal("2c6f4a1e-3b7d-4e2a-9f10-5a8b7c6d5e4f", SlotType::Breakfast, "cut", 410.0, 21.0, 41.0, 11.0, 51.0),
        meal("3d7a5b2f-4c8e-4f3b-a021-6b9c8d7e6f50", SlotType::Lunch, "cut", 600.0, 40.0, 60.0, 20.0, 80.0),
        meal("4e8b6c3a-5d9f-4a4c-b132-7cad9e8f7061", SlotType::Lunch, "cut", 610.0, 41.0, 61.0, 21.0, 81.0),
        meal("5f9c7d4b-6eaf-4b5d-8243-8dbeaf908172", SlotType::Dinner, "cut", 500.0, 35.0, 45.0, 15.0, 70.0),
        meal("6a0d8e5c-7fb0-4c6e-9354-9ecfb0a19283", SlotType::Snack1, "cut", 200.0, 10.0, 20.0, 5.0, 30.0),
        meal("7b1e9f6d-80c1-4d7f-a465-afd0c1b2a394", SlotType::Snack2, "cut", 200.0, 10.0, 20.0, 5.0, 30.0),
        meal("8c2fa07e-91d2-4e80-b576-b0e1d2c3b4a5", SlotType::Snack3, "cut", 200.0, 10.0, 20.0, 5.0, 30.0),
    ]
}

pub fn request(user_id: &str, week_start: &str, goal: Goal) -> PlanRequest {
    PlanRequest::new(
        user_id,
        NaiveDate::parse_from_str(week_start, "%Y-%m-%d").unwrap(),
        goal,
    )
}
