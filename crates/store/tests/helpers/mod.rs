use std::path::PathBuf;

use mealweek_shared::mealplan::{Goal, PriceTier, SlotType};
use mealweek_store::{Seed, SeedIngredient, SeedMeal, SeedMealItem, SqliteStore};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let store = SqliteStore::connect(&url, 1).await?;
    store.migrate().await?;

    Ok(store)
}

fn ingredient(id: &str, price: f64, kcal: f64, p: f64, c: f64, f: f64) -> SeedIngredient {
    SeedIngredient {
        id: id.to_owned(),
        name: id.to_owned(),
        price_per100_try: price,
        per100_kcal: kcal,
        per100_p: p,
        per100_c: c,
        per100_f: f,
    }
}

#[allow(dead_code)]
pub fn seed() -> Seed {
    Seed {
        ingredients: vec![
            ingredient("oats", 4.0, 380.0, 13.0, 60.0, 7.0),
            ingredient("egg", 12.0, 150.0, 13.0, 1.0, 10.0),
            ingredient("chicken", 30.0, 165.0, 31.0, 0.0, 4.0),
            ingredient("rice", 5.0, 130.0, 3.0, 28.0, 0.0),
        ],
        meals: vec![
            SeedMeal {
                id: "b-oats".to_owned(),
                name: "Oat bowl".to_owned(),
                meal_type: SlotType::Breakfast,
                meal_class: "breakfast".to_owned(),
                goal_tag: Goal::Cut,
                protein_source: Some("dairy".to_owned()),
                price_tier: Some(PriceTier::Ekonomik),
                items: vec![SeedMealItem {
                    ingredient_id: "oats".to_owned(),
                    grams: 100.0,
                }],
                alt1_id: Some("b-egg".to_owned()),
                alt2_id: None,
            },
            SeedMeal {
                id: "b-egg".to_owned(),
                name: "Eggs".to_owned(),
                meal_type: SlotType::Breakfast,
                meal_class: "breakfast".to_owned(),
                goal_tag: Goal::Cut,
                protein_source: Some("egg".to_owned()),
                price_tier: None,
                items: vec![SeedMealItem {
                    ingredient_id: "egg".to_owned(),
                    grams: 200.0,
                }],
                alt1_id: None,
                alt2_id: None,
            },
            SeedMeal {
                id: "l-chicken".to_owned(),
                name: "Chicken rice".to_owned(),
                meal_type: SlotType::Lunch,
                meal_class: "main_meal".to_owned(),
                goal_tag: Goal::Cut,
                protein_source: Some("chicken".to_owned()),
                price_tier: Some(PriceTier::Normal),
                items: vec![
                    SeedMealItem {
                        ingredient_id: "chicken".to_owned(),
                        grams: 150.0,
                    },
                    SeedMealItem {
                        ingredient_id: "rice".to_owned(),
                        grams: 200.0,
                    },
                ],
                alt1_id: None,
                alt2_id: None,
            },
        ],
    }
}
