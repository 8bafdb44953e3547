use std::str::FromStr;

use mealweek_shared::mealplan::{Goal, MacroTargets};

pub const DEFAULT_MACRO_TOLERANCE: f64 = 0.1;

pub struct Rules;

impl Rules {
    pub fn daily_targets(goal: Goal) -> MacroTargets {
        match goal {
            Goal::Cut => MacroTargets::new(2000.0, 180.0, 200.0, 60.0),
            Goal::Bulk => MacroTargets::new(3000.0, 220.0, 350.0, 80.0),
            Goal::Maintain => MacroTargets::new(2500.0, 150.0, 250.0, 70.0),
        }
    }

    /// Same as [`Rules::daily_targets`] for a raw tag; unknown tags get the maintain tuple.
    pub fn daily_targets_for_tag(tag: &str) -> MacroTargets {
        Self::daily_targets(Goal::from_str(tag).unwrap_or_default())
    }

    /// Only calories are compared. Protein, carbs and fat are accepted as-is until
    /// product confirms a stricter rule.
    pub fn validate_macros(actual: &MacroTargets, target: &MacroTargets, tolerance: f64) -> bool {
        (actual.calories - target.calories).abs() <= target.calories * tolerance
    }
}
