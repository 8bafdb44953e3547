mod ingredient;
mod meal;
mod meal_alternative;
mod meal_item;
mod plan;
mod plan_item;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealweek",
    "m0001",
    vec_box![],
    vec_box![
        ingredient::CreateTable,
        meal::CreateTable,
        meal::CreateIdx1,
        meal_item::CreateTable,
        meal_alternative::CreateTable,
        plan::CreateTable,
        plan_item::CreateTable,
        plan_item::CreateIdx1
    ]
);
