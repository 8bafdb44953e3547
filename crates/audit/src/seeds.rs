use std::collections::HashMap;

use mealweek_shared::catalog::{MealClass, MealRecord};
use mealweek_store::Store;

use crate::{AuditConfig, Report, Rule, Violation, cost_cap, kcal_range, protein_range};

/// Catalog integrity checks over every persisted meal.
pub struct SeedAudit {
    kcal_tolerance: f64,
    strict_protein: bool,
}

impl SeedAudit {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            kcal_tolerance: config.kcal_tolerance,
            strict_protein: config.strict_protein,
        }
    }

    pub async fn run(&self, store: &dyn Store) -> mealweek_shared::Result<Report> {
        let meals = store.fetch_meals().await?;

        Ok(self.check(&meals))
    }

    pub fn check(&self, meals: &[MealRecord]) -> Report {
        let mut report = Report::new("seeds");

        if meals.is_empty() {
            report.push(Violation::new(
                Rule::EmptyCatalog,
                "meals",
                "no meals found, seed data missing",
            ));

            return report;
        }

        let by_id = meals
            .iter()
            .map(|m| (m.id.as_str(), m))
            .collect::<HashMap<_, _>>();

        for meal in meals {
            report.checked += 1;
            self.check_limits(meal, &mut report);

            let (Some(alt1_id), Some(alt2_id)) = (&meal.alt1_id, &meal.alt2_id) else {
                report.push(Violation::new(
                    Rule::AlternativesExist,
                    &meal.id,
                    format!("'{}' is missing alt1 or alt2", meal.name),
                ));
                continue;
            };

            let (Some(alt1), Some(alt2)) = (by_id.get(alt1_id.as_str()), by_id.get(alt2_id.as_str()))
            else {
                report.push(Violation::new(
                    Rule::AlternativesValid,
                    &meal.id,
                    format!("'{}' references alternatives not in the catalog", meal.name),
                ));
                continue;
            };

            for (label, alt) in [("alt1", alt1), ("alt2", alt2)] {
                self.check_alternate(meal, label, alt, &mut report);
            }
        }

        report
    }

    fn check_limits(&self, meal: &MealRecord, report: &mut Report) {
        let cap = cost_cap(meal.slot_type);
        if meal.total_cost > cap {
            report.push(Violation::new(
                Rule::CostCap,
                &meal.id,
                format!(
                    "cost {:.2} exceeds {cap:.2} for {}",
                    meal.total_cost, meal.slot_type
                ),
            ));
        }

        let expected = MealClass::from(meal.slot_type);
        if meal.meal_class != expected.as_ref() {
            report.push(Violation::new(
                Rule::MealClass,
                &meal.id,
                format!(
                    "class '{}' but {} expects '{expected}'",
                    meal.meal_class, meal.slot_type
                ),
            ));
        }

        let range = kcal_range(meal.slot_type, meal.goal_tag);
        if !range.contains(meal.calories) {
            report.push(Violation::new(
                Rule::MacroRange,
                &meal.id,
                format!(
                    "kcal {:.1} not in [{}, {}] for {}/{}",
                    meal.calories, range.min, range.max, meal.slot_type, meal.goal_tag
                ),
            ));
        }

        if !self.strict_protein {
            return;
        }

        let range = protein_range(meal.slot_type, meal.goal_tag);
        if !range.contains(meal.protein) {
            report.push(Violation::new(
                Rule::MacroRange,
                &meal.id,
                format!(
                    "protein {:.1}g not in [{}, {}] for {}/{}",
                    meal.protein, range.min, range.max, meal.slot_type, meal.goal_tag
                ),
            ));
        }
    }

    fn check_alternate(
        &self,
        meal: &MealRecord,
        label: &str,
        alt: &MealRecord,
        report: &mut Report,
    ) {
        let diff = (meal.calories - alt.calories).abs();
        let limit = meal.calories * self.kcal_tolerance;
        if diff > limit {
            report.push(Violation::new(
                Rule::KcalTolerance,
                &meal.id,
                format!(
                    "'{}' vs {label} '{}': diff {diff:.1}, max {limit:.1}",
                    meal.name, alt.name
                ),
            ));
        }

        let (Some(source), Some(alt_source)) = (&meal.protein_source, &alt.protein_source) else {
            return;
        };

        if source == alt_source {
            report.push(Violation::new(
                Rule::ProteinSourceDiversity,
                &meal.id,
                format!("{label} '{}' has the same protein source '{source}'", alt.name),
            ));
        }
    }
}
