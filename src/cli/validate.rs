use clap::ValueEnum;
use mealweek_audit::{PlanAudit, Report, SeedAudit, TierAudit};

use crate::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AuditTarget {
    /// Catalog limits and alternates
    Seeds,
    /// Repetition, protein and tariff rules of saved plans
    Plans,
    /// Meals available per goal, slot and price tier
    Tiers,
}

pub async fn validate(config: &Config, target: AuditTarget) -> anyhow::Result<Report> {
    let store = mealweek_store::connect(&config.store).await?;

    let report = match target {
        AuditTarget::Seeds => SeedAudit::new(&config.audit).run(store.as_ref()).await,
        AuditTarget::Plans => PlanAudit::new(&config.audit).run(store.as_ref()).await,
        AuditTarget::Tiers => TierAudit::new(&config.audit).run(store.as_ref()).await,
    };

    store.close().await;

    let report = report?;
    report.log();

    Ok(report)
}
