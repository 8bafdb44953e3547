use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    #[iden = "price_per100_try"]
    PricePer100Try,
    #[iden = "per100_kcal"]
    Per100Kcal,
    #[iden = "per100_p"]
    Per100P,
    #[iden = "per100_c"]
    Per100C,
    #[iden = "per100_f"]
    Per100F,
}

#[derive(Iden, Clone)]
pub enum Meal {
    Table,
    Id,
    Name,
    MealType,
    MealClass,
    GoalTag,
    ProteinSource,
    PriceTier,
}

#[derive(Iden, Clone)]
pub enum MealItem {
    Table,
    MealId,
    IngredientId,
    Grams,
}

#[derive(Iden, Clone)]
pub enum MealAlternative {
    Table,
    MealId,
    #[iden = "alt1_meal_id"]
    Alt1MealId,
    #[iden = "alt2_meal_id"]
    Alt2MealId,
}

#[derive(Iden, Clone)]
pub enum Plan {
    Table,
    Id,
    UserId,
    WeekStart,
    GoalTag,
    TariffMode,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PlanItem {
    Table,
    Id,
    PlanId,
    DayOfWeek,
    MealType,
    SlotPosition,
    MealId,
    #[iden = "alt1_meal_id"]
    Alt1MealId,
    #[iden = "alt2_meal_id"]
    Alt2MealId,
    IsConsumed,
}
