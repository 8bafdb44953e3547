use mealweek_shared::catalog::{MealCandidate, TAG_ALL};
use mealweek_shared::mealplan::{Goal, PriceTier, SlotType};

/// Immutable, already-fetched set of candidate meals.
#[derive(Clone, Debug, Default)]
pub struct MealCatalog {
    meals: Vec<MealCandidate>,
}

impl MealCatalog {
    pub fn new(meals: Vec<MealCandidate>) -> Self {
        Self { meals }
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Meals of `slot_type` tagged with `goal` or `all`, in catalog order.
    pub fn filter(&self, slot_type: SlotType, goal: Goal) -> Vec<&MealCandidate> {
        self.meals
            .iter()
            .filter(|m| {
                m.slot_type == slot_type && (m.has_tag(goal.as_ref()) || m.has_tag(TAG_ALL))
            })
            .collect()
    }

    /// [`MealCatalog::filter`] narrowed to a tariff mode. Meals without a tier stay eligible.
    pub fn filter_tier(
        &self,
        slot_type: SlotType,
        goal: Goal,
        tier: Option<PriceTier>,
    ) -> Vec<&MealCandidate> {
        let mut candidates = self.filter(slot_type, goal);
        if let Some(tier) = tier {
            candidates.retain(|m| m.price_tier.is_none_or(|t| t == tier));
        }

        candidates
    }

    pub fn pick_random<'a>(
        candidates: &[&'a MealCandidate],
        seed: u32,
    ) -> Option<&'a MealCandidate> {
        if candidates.is_empty() {
            return None;
        }

        Some(candidates[seed as usize % candidates.len()])
    }
}

impl From<Vec<MealCandidate>> for MealCatalog {
    fn from(value: Vec<MealCandidate>) -> Self {
        Self::new(value)
    }
}
