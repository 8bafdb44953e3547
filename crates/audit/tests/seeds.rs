use mealweek_audit::{AuditConfig, Rule, SeedAudit};
use mealweek_shared::catalog::MealRecord;
use mealweek_shared::mealplan::{Goal, SlotType};
use mealweek_store::MemoryStore;

fn breakfast(id: &str, calories: f64, protein_source: &str, alts: [&str; 2]) -> MealRecord {
    MealRecord {
        id: id.to_owned(),
        name: format!("breakfast {id}"),
        slot_type: SlotType::Breakfast,
        meal_class: "breakfast".to_owned(),
        goal_tag: Goal::Maintain,
        protein_source: Some(protein_source.to_owned()),
        price_tier: None,
        total_cost: 50.0,
        calories,
        protein: 25.0,
        carbs: 40.0,
        fat: 15.0,
        alt1_id: Some(alts[0].to_owned()),
        alt2_id: Some(alts[1].to_owned()),
    }
}

fn catalog() -> Vec<MealRecord> {
    vec![
        breakfast("a", 400.0, "chicken", ["b", "c"]),
        breakfast("b", 410.0, "beef", ["a", "d"]),
        breakfast("c", 480.0, "fish", ["d", "e"]),
        breakfast("d", 470.0, "egg", ["c", "e"]),
        breakfast("e", 490.0, "lentil", ["c", "d"]),
    ]
}

#[tokio::test]
async fn test_alternate_outside_kcal_tolerance() -> anyhow::Result<()> {
    let store = MemoryStore::new(catalog());
    let report = SeedAudit::new(&AuditConfig::default()).run(&store).await?;

    assert_eq!(report.count(), 1);
    assert!(!report.passed());
    assert_eq!(report.violations[0].rule, Rule::KcalTolerance);
    assert_eq!(report.violations[0].record, "a");
    assert_eq!(report.checked, 5);

    Ok(())
}

#[tokio::test]
async fn test_clean_catalog_passes() -> anyhow::Result<()> {
    let mut meals = catalog();
    meals[0].alt2_id = Some("d".to_owned());
    meals[0].calories = 420.0;

    let store = MemoryStore::new(meals);
    let report = SeedAudit::new(&AuditConfig::default()).run(&store).await?;

    assert!(report.passed(), "{:?}", report.violations);

    Ok(())
}

#[tokio::test]
async fn test_wider_tolerance_accepts() -> anyhow::Result<()> {
    let store = MemoryStore::new(catalog());
    let config = AuditConfig {
        kcal_tolerance: 0.25,
        ..Default::default()
    };

    assert!(SeedAudit::new(&config).run(&store).await?.passed());

    Ok(())
}

#[tokio::test]
async fn test_same_protein_source_alternate() -> anyhow::Result<()> {
    let mut meals = catalog();
    meals[1].protein_source = Some("fish".to_owned());
    meals[2].protein_source = Some("fish".to_owned());
    meals[0].alt2_id = Some("d".to_owned());
    meals[0].calories = 420.0;

    let report = SeedAudit::new(&AuditConfig::default()).check(&meals);

    assert_eq!(report.count_rule(Rule::ProteinSourceDiversity), 0);

    meals[3].protein_source = Some("fish".to_owned());
    let report = SeedAudit::new(&AuditConfig::default()).check(&meals);
    // b -> d, c -> d, d -> c
    assert_eq!(report.count_rule(Rule::ProteinSourceDiversity), 3);
    assert_eq!(report.count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_empty_catalog_fails() -> anyhow::Result<()> {
    let report = SeedAudit::new(&AuditConfig::default())
        .run(&MemoryStore::default())
        .await?;

    assert_eq!(report.count_rule(Rule::EmptyCatalog), 1);
    assert!(!report.passed());

    Ok(())
}
