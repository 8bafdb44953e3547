use std::collections::HashMap;

use mealweek_shared::catalog::MealRecord;
use mealweek_shared::mealplan::{Goal, PriceTier, SlotType};
use mealweek_store::Store;
use strum::VariantArray;

use crate::{AuditConfig, Report, Rule, Violation};

/// Every (goal, slot, tier) group must offer enough meals to choose from.
pub struct TierAudit {
    min_group_size: usize,
}

impl TierAudit {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            min_group_size: config.min_tier_group_size,
        }
    }

    pub async fn run(&self, store: &dyn Store) -> mealweek_shared::Result<Report> {
        let meals = store.fetch_meals().await?;

        Ok(self.check(&meals))
    }

    pub fn check(&self, meals: &[MealRecord]) -> Report {
        let mut report = Report::new("tiers");

        if meals.is_empty() {
            report.push(Violation::new(
                Rule::EmptyCatalog,
                "meals",
                "no meals found, seed data missing",
            ));

            return report;
        }

        let mut groups: HashMap<(Goal, SlotType, PriceTier), usize> = HashMap::new();
        for meal in meals {
            let Some(tier) = meal.price_tier else {
                continue;
            };

            *groups
                .entry((meal.goal_tag, meal.slot_type, tier))
                .or_default() += 1;
        }

        for goal in Goal::VARIANTS {
            for slot_type in SlotType::VARIANTS {
                for tier in PriceTier::VARIANTS {
                    report.checked += 1;

                    let count = groups
                        .get(&(*goal, *slot_type, *tier))
                        .copied()
                        .unwrap_or_default();

                    if count < self.min_group_size {
                        report.push(Violation::new(
                            Rule::PriceTierCoverage,
                            format!("{goal}|{slot_type}|{tier}"),
                            format!(
                                "found {count} meals (min {} required)",
                                self.min_group_size
                            ),
                        ));
                    }
                }
            }
        }

        report
    }
}
