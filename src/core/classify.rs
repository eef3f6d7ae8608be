//! Classification engine facade
//!
//! The single entry point for turning an incident record into a
//! classification. Validates the record's invariants first, then runs every
//! criterion evaluator and resolves their outcomes into one tier, one report
//! flag, and one justification.
//!
//! The engine is stateless: the full decision is recomputed on every call,
//! reads no clock and no external state, and classifying the same record
//! twice returns identical results.

use thiserror::Error;

use crate::core::criteria;
use crate::core::rules::RuleSet;
use crate::entities::classification::{Classification, CriterionOutcome};
use crate::entities::incident::Incident;

/// An invariant violation in an incident record
///
/// Raised before any evaluator runs; an invalid record never receives a
/// classification, partial or otherwise.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("field '{field}': value must not be negative")]
    Negative { field: &'static str },

    #[error("field '{field}': value must be a finite number")]
    NotFinite { field: &'static str },

    #[error("field '{field}': must not be empty")]
    Empty { field: &'static str },

    #[error("field 'date': incident date {date} is after record creation ({created})")]
    FutureDate {
        date: chrono::NaiveDate,
        created: chrono::NaiveDate,
    },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Negative { field } => field,
            ValidationError::NotFinite { field } => field,
            ValidationError::Empty { field } => field,
            ValidationError::FutureDate { .. } => "date",
        }
    }
}

/// Check the record invariants the type system cannot enforce
///
/// Counts are unsigned and categorical answers are closed enums, so the
/// remaining checks are float sanity, required strings, and the date bound.
/// The date is compared against the record's own creation timestamp rather
/// than the wall clock, so validation of a stored record never changes over
/// time.
pub fn validate(record: &Incident) -> Result<(), ValidationError> {
    if record.company.trim().is_empty() {
        return Err(ValidationError::Empty { field: "company" });
    }
    if record.author.trim().is_empty() {
        return Err(ValidationError::Empty { field: "author" });
    }
    if record.date > record.created.date_naive() {
        return Err(ValidationError::FutureDate {
            date: record.date,
            created: record.created.date_naive(),
        });
    }

    let floats: [(&'static str, f64); 12] = [
        ("evacuation.duration_hours", record.impacts.evacuation.duration_hours),
        (
            "service_disruption.duration_hours",
            record.impacts.service_disruption.duration_hours,
        ),
        ("environment.protected_area_ha", record.impacts.environment.protected_area_ha),
        ("environment.extended_area_ha", record.impacts.environment.extended_area_ha),
        ("environment.river_km", record.impacts.environment.river_km),
        ("environment.lake_ha", record.impacts.environment.lake_ha),
        ("environment.delta_ha", record.impacts.environment.delta_ha),
        ("environment.aquifer_ha", record.impacts.environment.aquifer_ha),
        ("financial.onsite_cost", record.impacts.financial.onsite_cost),
        ("financial.offsite_cost", record.impacts.financial.offsite_cost),
        ("release.quantity_kg", record.release.quantity_kg),
        (
            "release.qualifying_quantity_kg",
            record.release.qualifying_quantity_kg.unwrap_or(0.0),
        ),
    ];

    for (field, value) in floats {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if value < 0.0 {
            return Err(ValidationError::Negative { field });
        }
    }

    Ok(())
}

/// Combine per-criterion outcomes into the final classification
///
/// Final tier is the maximum across outcomes. The report flag is the OR of
/// every trigger: any single dimension crossing its mandatory threshold
/// forces reporting, whatever tier the others produce. The justification
/// comes from the evaluator that produced the final tier; `outcomes` arrives
/// in priority order and the first evaluator at the maximum tier wins ties,
/// so identical input always yields the identical justification.
fn resolve(outcomes: Vec<CriterionOutcome>) -> Classification {
    debug_assert!(!outcomes.is_empty());

    let report_required = outcomes.iter().any(|o| o.triggers_report);

    // Keep the first outcome at the maximum tier: only a strictly greater
    // severity displaces the current winner.
    let mut winner = 0;
    for (i, outcome) in outcomes.iter().enumerate().skip(1) {
        if outcome.severity > outcomes[winner].severity {
            winner = i;
        }
    }

    Classification {
        severity: outcomes[winner].severity,
        report_required,
        determined_by: outcomes[winner].criterion,
        justification: outcomes[winner].reason.clone(),
        breakdown: outcomes,
    }
}

/// The classification engine
///
/// Owns a validated rule set and classifies records against it. Safe to share
/// across threads; every call is independent.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    /// Create an engine over the given rule set
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Engine over the built-in regulation defaults
    pub fn with_defaults() -> Self {
        Self::new(RuleSet::default())
    }

    /// The rule set in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify one record
    ///
    /// Validates invariants first; on violation no evaluator runs and the
    /// error names the offending field.
    pub fn classify(&self, record: &Incident) -> Result<Classification, ValidationError> {
        validate(record)?;
        let outcomes = criteria::evaluate_all(record, &self.rules);
        Ok(resolve(outcomes))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::classification::{Criterion, Severity};
    use crate::entities::incident::HomesDamaged;
    use chrono::NaiveDate;

    fn record() -> Incident {
        Incident::new(
            "Acme Chemicals".to_string(),
            NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            "j.doe".to_string(),
        )
    }

    #[test]
    fn test_zero_impact_classifies_at_floor_without_report() {
        let engine = Classifier::with_defaults();
        let result = engine.classify(&record()).unwrap();
        assert_eq!(result.severity, Severity::Minor);
        assert!(!result.report_required);
        assert_eq!(result.breakdown.len(), Criterion::ALL.len());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.impacts.human.injured_onsite = 6;
        r.impacts.environment.river_km = 10.0;
        let a = engine.classify(&r).unwrap();
        let b = engine.classify(&r).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_death_scenario() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.impacts.human.deaths = 1;
        let result = engine.classify(&r).unwrap();
        assert_eq!(result.severity, Severity::Catastrophic);
        assert!(result.report_required);
        assert_eq!(result.determined_by, Criterion::HumanHarm);
    }

    #[test]
    fn test_transboundary_scenario_reports_without_tier_escalation() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.impacts.transboundary = true;
        let result = engine.classify(&r).unwrap();
        assert_eq!(result.severity, Severity::Minor);
        assert!(result.report_required);
    }

    #[test]
    fn test_or_trigger_is_independent_of_final_tier() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        // Homes push the tier to catastrophic without involving transboundary;
        // transboundary still independently forces the report flag even if
        // every other trigger were absent.
        r.impacts.homes_damaged = HomesDamaged::Many;
        r.impacts.transboundary = true;
        let result = engine.classify(&r).unwrap();
        assert_eq!(result.severity, Severity::Catastrophic);
        assert!(result.report_required);
        let tb = result
            .breakdown
            .iter()
            .find(|o| o.criterion == Criterion::Transboundary)
            .unwrap();
        assert!(tb.triggers_report);
    }

    #[test]
    fn test_tie_break_follows_priority_order() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        // Both reach major; human harm is declared first and wins.
        r.impacts.human.injured_offsite = 1;
        r.impacts.financial.offsite_cost = 500_000.0;
        let result = engine.classify(&r).unwrap();
        assert_eq!(result.severity, Severity::Major);
        assert_eq!(result.determined_by, Criterion::HumanHarm);

        // Environmental beats financial when human harm is absent.
        let mut r = record();
        r.impacts.environment.lake_ha = 1.0;
        r.impacts.financial.offsite_cost = 500_000.0;
        let result = engine.classify(&r).unwrap();
        assert_eq!(result.determined_by, Criterion::Environmental);
    }

    #[test]
    fn test_monotonicity_in_single_fields() {
        let engine = Classifier::with_defaults();

        // Growing on-site injuries never lowers the tier.
        let mut last = Severity::Minor;
        for injured in 0..10 {
            let mut r = record();
            r.impacts.human.injured_onsite = injured;
            let tier = engine.classify(&r).unwrap().severity;
            assert!(tier >= last, "tier dropped at injured_onsite={}", injured);
            last = tier;
        }

        // Growing river damage never lowers the tier.
        let mut last = Severity::Minor;
        for km in [0.0, 1.0, 9.9, 10.0, 50.0] {
            let mut r = record();
            r.impacts.environment.river_km = km;
            let tier = engine.classify(&r).unwrap().severity;
            assert!(tier >= last, "tier dropped at river_km={}", km);
            last = tier;
        }
    }

    #[test]
    fn test_validation_gate_rejects_negative_float() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.impacts.financial.onsite_cost = -1.0;
        let err = engine.classify(&r).unwrap_err();
        assert_eq!(err.field(), "financial.onsite_cost");
        assert!(matches!(err, ValidationError::Negative { .. }));
    }

    #[test]
    fn test_validation_gate_rejects_nan() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.impacts.evacuation.duration_hours = f64::NAN;
        let err = engine.classify(&r).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { .. }));
    }

    #[test]
    fn test_validation_gate_rejects_future_date() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.date = r.created.date_naive() + chrono::Days::new(1);
        let err = engine.classify(&r).unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate { .. }));
        assert_eq!(err.field(), "date");
    }

    #[test]
    fn test_validation_gate_rejects_blank_company() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.company = "   ".to_string();
        let err = engine.classify(&r).unwrap_err();
        assert_eq!(err.field(), "company");
    }

    #[test]
    fn test_classify_does_not_mutate_record() {
        let engine = Classifier::with_defaults();
        let mut r = record();
        r.impacts.human.deaths = 1;
        let before = serde_yml::to_string(&r).unwrap();
        engine.classify(&r).unwrap();
        let after = serde_yml::to_string(&r).unwrap();
        assert_eq!(before, after);
    }
}
