use std::fmt;

use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    EmptyCatalog,
    CostCap,
    MealClass,
    MacroRange,
    AlternativesExist,
    AlternativesValid,
    KcalTolerance,
    ProteinSourceDiversity,
    WeeklyRepetition,
    ConsecutiveRepetition,
    SameDayProtein,
    PriceTierCoverage,
    TierConsistency,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub rule: Rule,
    /// Meal, plan or group the rule was evaluated against.
    pub record: String,
    pub message: String,
}

impl Violation {
    pub fn new(rule: Rule, record: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            record: record.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rule '{}' violated for record '{}': {}",
            self.rule, self.record, self.message
        )
    }
}

/// Outcome of one audit run.
#[derive(Clone, Debug)]
pub struct Report {
    pub audit: &'static str,
    pub checked: usize,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn new(audit: &'static str) -> Self {
        Self {
            audit,
            checked: 0,
            violations: vec![],
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn count(&self) -> usize {
        self.violations.len()
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn count_rule(&self, rule: Rule) -> usize {
        self.violations.iter().filter(|v| v.rule == rule).count()
    }

    /// One error line per violation, then a summary line.
    pub fn log(&self) {
        for violation in self.violations.iter() {
            tracing::error!(
                audit = self.audit,
                rule = %violation.rule,
                record = %violation.record,
                "{}",
                violation.message
            );
        }

        if self.passed() {
            tracing::info!(audit = self.audit, checked = self.checked, "audit passed");
        } else {
            tracing::error!(
                audit = self.audit,
                checked = self.checked,
                violations = self.count(),
                "audit failed"
            );
        }
    }
}
