use mealweek_shared::mealplan::{Goal, SlotType};

/// Inclusive `[min, max]` window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Highest ingredient cost, in TRY, a meal may have for its slot.
pub fn cost_cap(slot_type: SlotType) -> f64 {
    match slot_type {
        SlotType::Breakfast => 60.0,
        SlotType::Snack1 | SlotType::Snack2 => 35.0,
        SlotType::Lunch | SlotType::Dinner => 90.0,
        SlotType::Snack3 => 45.0,
    }
}

pub fn kcal_range(slot_type: SlotType, goal: Goal) -> Range {
    match (slot_type, goal) {
        (SlotType::Breakfast, Goal::Cut) => Range::new(300.0, 450.0),
        (SlotType::Breakfast, Goal::Bulk) => Range::new(500.0, 700.0),
        (SlotType::Breakfast, Goal::Maintain) => Range::new(400.0, 600.0),
        (SlotType::Lunch | SlotType::Dinner, Goal::Cut) => Range::new(400.0, 600.0),
        (SlotType::Lunch | SlotType::Dinner, Goal::Bulk) => Range::new(700.0, 900.0),
        (SlotType::Lunch | SlotType::Dinner, Goal::Maintain) => Range::new(600.0, 800.0),
        (SlotType::Snack1 | SlotType::Snack2, Goal::Cut) => Range::new(100.0, 250.0),
        (SlotType::Snack1 | SlotType::Snack2, Goal::Bulk) => Range::new(250.0, 400.0),
        (SlotType::Snack1 | SlotType::Snack2, Goal::Maintain) => Range::new(200.0, 300.0),
        (SlotType::Snack3, Goal::Cut) => Range::new(100.0, 200.0),
        (SlotType::Snack3, Goal::Bulk) => Range::new(200.0, 400.0),
        (SlotType::Snack3, Goal::Maintain) => Range::new(150.0, 300.0),
    }
}

/// Protein grams window, only enforced when `strict_protein` is on.
pub fn protein_range(slot_type: SlotType, goal: Goal) -> Range {
    match (slot_type, goal) {
        (SlotType::Breakfast, Goal::Cut) => Range::new(20.0, 40.0),
        (SlotType::Breakfast, Goal::Bulk) => Range::new(30.0, 55.0),
        (SlotType::Breakfast, Goal::Maintain) => Range::new(20.0, 45.0),
        (SlotType::Lunch | SlotType::Dinner, Goal::Cut) => Range::new(30.0, 55.0),
        (SlotType::Lunch | SlotType::Dinner, Goal::Bulk) => Range::new(40.0, 70.0),
        (SlotType::Lunch | SlotType::Dinner, Goal::Maintain) => Range::new(30.0, 60.0),
        (_, Goal::Cut) => Range::new(5.0, 25.0),
        (_, Goal::Bulk) => Range::new(10.0, 35.0),
        (_, Goal::Maintain) => Range::new(8.0, 30.0),
    }
}
