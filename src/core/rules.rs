//! Classification rule set - thresholds as configuration data
//!
//! Every numeric cutoff and every tier assignment the engine uses lives here,
//! not in the evaluators. The built-in defaults carry the major-accident
//! notification criteria from Annex VI of Directive 2012/18/EU (Seveso III);
//! projects can override them with a YAML rules file written out by
//! `iris init`.
//!
//! All comparisons against a threshold are inclusive (`>=`), matching the
//! regulation's "at least" wording.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::entities::classification::Severity;

/// Errors loading or validating a rule set
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Cannot read rules file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot parse rules file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid rule set: ladder '{ladder}' has rungs out of ascending threshold order")]
    UnorderedRungs { ladder: &'static str },

    #[error("Invalid rule set: ladder '{ladder}' decreases severity as thresholds grow")]
    NonMonotonic { ladder: &'static str },

    #[error("Invalid rule set: ladder '{ladder}' has a negative or non-finite threshold")]
    BadThreshold { ladder: &'static str },

    #[error("Invalid rule set: qualifying fraction {0} must be in (0, 1]")]
    BadFraction(f64),
}

/// One rung of a threshold ladder: reaching `at` escalates to `severity`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rung {
    /// Inclusive threshold value
    pub at: f64,

    /// Tier assigned when the value reaches the threshold
    pub severity: Severity,

    /// Whether reaching this rung forces external reporting
    #[serde(default)]
    pub report: bool,
}

/// An ordered set of (threshold, tier) pairs for one numeric field
///
/// Rungs must ascend in threshold and never descend in severity; a value is
/// scored by the highest rung it reaches, or the floor tier if it reaches
/// none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ladder {
    pub rungs: Vec<Rung>,
}

impl Ladder {
    /// Build a ladder from (threshold, severity, report) triples
    pub fn new(rungs: &[(f64, Severity, bool)]) -> Self {
        Self {
            rungs: rungs
                .iter()
                .map(|&(at, severity, report)| Rung { at, severity, report })
                .collect(),
        }
    }

    /// Score a value: the highest rung whose threshold the value meets
    ///
    /// Comparison is inclusive; a value exactly at a threshold escalates.
    pub fn evaluate(&self, value: f64) -> Option<&Rung> {
        self.rungs.iter().rev().find(|r| value >= r.at)
    }

    fn check(&self, name: &'static str) -> Result<(), RuleError> {
        for pair in self.rungs.windows(2) {
            if pair[1].at <= pair[0].at {
                return Err(RuleError::UnorderedRungs { ladder: name });
            }
            if pair[1].severity < pair[0].severity {
                return Err(RuleError::NonMonotonic { ladder: name });
            }
        }
        if self.rungs.iter().any(|r| !r.at.is_finite() || r.at < 0.0) {
            return Err(RuleError::BadThreshold { ladder: name });
        }
        Ok(())
    }
}

/// Fixed outcome for a categorical answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedOutcome {
    pub severity: Severity,

    #[serde(default)]
    pub report: bool,
}

/// Human-harm thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanRules {
    pub deaths: Ladder,
    pub injured_onsite: Ladder,
    pub injured_offsite: Ladder,
}

impl Default for HumanRules {
    fn default() -> Self {
        Self {
            // Any death is the worst case and always reportable.
            deaths: Ladder::new(&[(1.0, Severity::Catastrophic, true)]),
            // One hospitalization escalates; six on site must be reported.
            injured_onsite: Ladder::new(&[
                (1.0, Severity::Moderate, false),
                (6.0, Severity::Major, true),
            ]),
            // A single person hospitalized outside the establishment reports.
            injured_offsite: Ladder::new(&[(1.0, Severity::Major, true)]),
        }
    }
}

/// Dwelling-damage outcomes, keyed by the categorical answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRules {
    /// A dwelling damaged and unusable
    pub some_homes: FixedOutcome,

    /// Widespread dwelling damage
    pub many_homes: FixedOutcome,
}

impl Default for PropertyRules {
    fn default() -> Self {
        Self {
            some_homes: FixedOutcome {
                severity: Severity::Major,
                report: true,
            },
            many_homes: FixedOutcome {
                severity: Severity::Catastrophic,
                report: true,
            },
        }
    }
}

/// Person-hours thresholds for evacuation and service disruption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureRules {
    /// Minimum duration (hours) before person-hours count at all
    pub min_duration_hours: f64,

    /// Ladder over persons x hours
    pub person_hours: Ladder,
}

impl ExposureRules {
    fn new(min_duration_hours: f64, threshold: f64) -> Self {
        Self {
            min_duration_hours,
            person_hours: Ladder::new(&[(threshold, Severity::Major, true)]),
        }
    }
}

impl Default for ExposureRules {
    fn default() -> Self {
        Self::new(2.0, 500.0)
    }
}

/// Environmental-damage thresholds, one ladder per protected category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentRules {
    pub protected_area_ha: Ladder,
    pub extended_area_ha: Ladder,
    pub river_km: Ladder,
    pub lake_ha: Ladder,
    pub delta_ha: Ladder,
    pub aquifer_ha: Ladder,
}

impl Default for EnvironmentRules {
    fn default() -> Self {
        let single = |at| Ladder::new(&[(at, Severity::Major, true)]);
        Self {
            protected_area_ha: single(0.5),
            extended_area_ha: single(10.0),
            river_km: single(10.0),
            lake_ha: single(1.0),
            delta_ha: single(2.0),
            aquifer_ha: single(1.0),
        }
    }
}

/// Monetary-damage thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialRules {
    /// Currency the cost answers are denominated in
    pub currency: String,

    pub onsite_cost: Ladder,
    pub offsite_cost: Ladder,
}

impl Default for FinancialRules {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            onsite_cost: Ladder::new(&[(2_000_000.0, Severity::Major, true)]),
            offsite_cost: Ladder::new(&[(500_000.0, Severity::Major, true)]),
        }
    }
}

/// Substance-release rule: report when the released quantity reaches a
/// fraction of the substance's qualifying quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseRules {
    /// Fraction of the qualifying quantity that triggers the outcome
    pub qualifying_fraction: f64,

    pub outcome: FixedOutcome,
}

impl Default for ReleaseRules {
    fn default() -> Self {
        Self {
            qualifying_fraction: 0.05,
            outcome: FixedOutcome {
                severity: Severity::Major,
                report: true,
            },
        }
    }
}

/// The complete classification rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub human: HumanRules,
    pub property: PropertyRules,
    pub evacuation: ExposureRules,
    pub service_disruption: ExposureRules,
    pub environment: EnvironmentRules,
    pub financial: FinancialRules,

    /// Any cross-border effect: reportable regardless of tier
    pub transboundary: FixedOutcome,

    pub release: ReleaseRules,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            human: HumanRules::default(),
            property: PropertyRules::default(),
            evacuation: ExposureRules::default(),
            service_disruption: ExposureRules::new(2.0, 1000.0),
            environment: EnvironmentRules::default(),
            financial: FinancialRules::default(),
            transboundary: FixedOutcome {
                severity: Severity::Minor,
                report: true,
            },
            release: ReleaseRules::default(),
        }
    }
}

impl RuleSet {
    /// Load a rule set from a YAML file and validate it
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| RuleError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let rules: RuleSet = serde_yml::from_str(&content).map_err(|e| RuleError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check structural soundness of every ladder
    ///
    /// Rungs must strictly ascend in threshold and never descend in severity;
    /// anything else would let a larger impact value classify lower.
    pub fn validate(&self) -> Result<(), RuleError> {
        self.human.deaths.check("human.deaths")?;
        self.human.injured_onsite.check("human.injured_onsite")?;
        self.human.injured_offsite.check("human.injured_offsite")?;
        self.evacuation.person_hours.check("evacuation.person_hours")?;
        self.service_disruption
            .person_hours
            .check("service_disruption.person_hours")?;
        self.environment.protected_area_ha.check("environment.protected_area_ha")?;
        self.environment.extended_area_ha.check("environment.extended_area_ha")?;
        self.environment.river_km.check("environment.river_km")?;
        self.environment.lake_ha.check("environment.lake_ha")?;
        self.environment.delta_ha.check("environment.delta_ha")?;
        self.environment.aquifer_ha.check("environment.aquifer_ha")?;
        self.financial.onsite_cost.check("financial.onsite_cost")?;
        self.financial.offsite_cost.check("financial.offsite_cost")?;

        if !(self.release.qualifying_fraction > 0.0 && self.release.qualifying_fraction <= 1.0) {
            return Err(RuleError::BadFraction(self.release.qualifying_fraction));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_inclusive_at_threshold() {
        let ladder = Ladder::new(&[(6.0, Severity::Major, true)]);
        assert!(ladder.evaluate(5.0).is_none());
        let rung = ladder.evaluate(6.0).unwrap();
        assert_eq!(rung.severity, Severity::Major);
        assert!(rung.report);
        assert!(ladder.evaluate(7.0).is_some());
    }

    #[test]
    fn test_ladder_picks_highest_rung_reached() {
        let ladder = Ladder::new(&[
            (1.0, Severity::Moderate, false),
            (6.0, Severity::Major, true),
        ]);
        assert_eq!(ladder.evaluate(0.0), None);
        assert_eq!(ladder.evaluate(1.0).unwrap().severity, Severity::Moderate);
        assert_eq!(ladder.evaluate(5.0).unwrap().severity, Severity::Moderate);
        assert_eq!(ladder.evaluate(6.0).unwrap().severity, Severity::Major);
    }

    #[test]
    fn test_default_ruleset_is_valid() {
        RuleSet::default().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_unordered_rungs() {
        let mut rules = RuleSet::default();
        rules.human.injured_onsite = Ladder::new(&[
            (6.0, Severity::Major, true),
            (1.0, Severity::Moderate, false),
        ]);
        assert!(matches!(
            rules.validate(),
            Err(RuleError::UnorderedRungs { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_decreasing_severity() {
        let mut rules = RuleSet::default();
        rules.financial.onsite_cost = Ladder::new(&[
            (1_000.0, Severity::Major, false),
            (2_000.0, Severity::Moderate, false),
        ]);
        assert!(matches!(rules.validate(), Err(RuleError::NonMonotonic { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_fraction() {
        let mut rules = RuleSet::default();
        rules.release.qualifying_fraction = 0.0;
        assert!(matches!(rules.validate(), Err(RuleError::BadFraction(_))));
    }

    #[test]
    fn test_ruleset_yaml_roundtrip() {
        let rules = RuleSet::default();
        let yaml = serde_yml::to_string(&rules).unwrap();
        let parsed: RuleSet = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(rules, parsed);
    }

    #[test]
    fn test_partial_rules_file_fills_defaults() {
        // Only override one ladder; everything else stays at the defaults.
        let yaml = r#"
financial:
  currency: "CZK"
  onsite_cost:
    - at: 50000000.0
      severity: major
      report: true
"#;
        let rules: RuleSet = serde_yml::from_str(yaml).unwrap();
        assert_eq!(rules.financial.currency, "CZK");
        assert_eq!(rules.financial.onsite_cost.rungs[0].at, 50_000_000.0);
        // Untouched sections keep regulation defaults.
        assert_eq!(rules.human.deaths.rungs[0].severity, Severity::Catastrophic);
        assert_eq!(rules.evacuation.person_hours.rungs[0].at, 500.0);
    }
}
