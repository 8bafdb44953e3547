use std::collections::{HashMap, HashSet};

use mealweek_shared::catalog::{PlannedMeal, StoredPlan};
use mealweek_store::Store;

use crate::{AuditConfig, Report, Rule, Violation};

/// Variety and tariff checks over persisted plans.
pub struct PlanAudit {
    max_weekly_repetitions: usize,
}

impl PlanAudit {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            max_weekly_repetitions: config.max_weekly_repetitions,
        }
    }

    pub async fn run(&self, store: &dyn Store) -> mealweek_shared::Result<Report> {
        let mut report = Report::new("plans");
        let plans = store.fetch_plans().await?;

        if plans.is_empty() {
            tracing::warn!("no plans found to validate, skipping plan checks");

            return Ok(report);
        }

        for plan in plans.iter() {
            let items = store.fetch_plan_items(&plan.id).await?;
            report.checked += 1;
            self.check(plan, &items, &mut report);
        }

        Ok(report)
    }

    /// `items` must be ordered by day then slot.
    pub fn check(&self, plan: &StoredPlan, items: &[PlannedMeal], report: &mut Report) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in items {
            let count = counts.entry(item.meal_id.as_str()).or_default();
            *count += 1;

            if *count > self.max_weekly_repetitions {
                report.push(Violation::new(
                    Rule::WeeklyRepetition,
                    &plan.id,
                    format!(
                        "meal '{}' appears more than {} times in the week ({count})",
                        item.label(),
                        self.max_weekly_repetitions
                    ),
                ));
            }
        }

        for pair in items.windows(2) {
            if pair[0].meal_id == pair[1].meal_id {
                report.push(Violation::new(
                    Rule::ConsecutiveRepetition,
                    &plan.id,
                    format!(
                        "meal '{}' repeats back to back (day {} {} / day {} {})",
                        pair[0].label(),
                        pair[0].day_of_week,
                        pair[0].slot_type,
                        pair[1].day_of_week,
                        pair[1].slot_type
                    ),
                ));
            }
        }

        let mut proteins: HashMap<u8, HashSet<&str>> = HashMap::new();
        for item in items {
            let Some(source) = item.protein_source.as_deref() else {
                continue;
            };

            if !proteins.entry(item.day_of_week).or_default().insert(source) {
                report.push(Violation::new(
                    Rule::SameDayProtein,
                    &plan.id,
                    format!(
                        "day {} repeats protein source '{source}'",
                        item.day_of_week
                    ),
                ));
            }
        }

        let Some(tariff_mode) = plan.tariff_mode else {
            return;
        };

        for item in items {
            let Some(tier) = item.price_tier else {
                continue;
            };

            if tier != tariff_mode {
                report.push(Violation::new(
                    Rule::TierConsistency,
                    &plan.id,
                    format!(
                        "meal '{}' is {tier} but the plan asked for {tariff_mode}",
                        item.label()
                    ),
                ));
            }
        }
    }
}
