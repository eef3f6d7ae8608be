//! Severity scale and classification result types
//!
//! The severity scale is a total order: `minor < moderate < major <
//! catastrophic`. Which tier a given impact value maps to is decided entirely
//! by the rule set; nothing in this crate assigns a tier to a dimension
//! outside the loaded rules.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordered severity tier for a classified incident
///
/// Derives `Ord` so the resolver can take the maximum across criteria.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No reporting threshold reached
    #[default]
    Minor,
    /// Escalated but below any mandatory-reporting threshold
    Moderate,
    /// A mandatory-reporting criterion is met
    Major,
    /// Fatalities or equivalent worst-case harm
    Catastrophic,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Minor => write!(f, "minor"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Major => write!(f, "major"),
            Severity::Catastrophic => write!(f, "catastrophic"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minor" | "low" => Ok(Severity::Minor),
            "moderate" | "medium" => Ok(Severity::Moderate),
            "major" | "high" | "severe" => Ok(Severity::Major),
            "catastrophic" | "critical" | "fatal" => Ok(Severity::Catastrophic),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Impact dimension evaluated by the classification engine
///
/// Declaration order is the fixed tie-break priority: when two criteria
/// produce the same final tier, the justification comes from the one declared
/// first here. Human harm outranks everything; transboundary effect ranks
/// last because its report obligation is independent of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    HumanHarm,
    PropertyDamage,
    Evacuation,
    ServiceDisruption,
    Environmental,
    Financial,
    SubstanceRelease,
    Transboundary,
}

impl Criterion {
    /// All criteria in tie-break priority order
    pub const ALL: [Criterion; 8] = [
        Criterion::HumanHarm,
        Criterion::PropertyDamage,
        Criterion::Evacuation,
        Criterion::ServiceDisruption,
        Criterion::Environmental,
        Criterion::Financial,
        Criterion::SubstanceRelease,
        Criterion::Transboundary,
    ];

    /// Stable identifier used in output and stored results
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::HumanHarm => "human-harm",
            Criterion::PropertyDamage => "property-damage",
            Criterion::Evacuation => "evacuation",
            Criterion::ServiceDisruption => "service-disruption",
            Criterion::Environmental => "environmental",
            Criterion::Financial => "financial",
            Criterion::SubstanceRelease => "substance-release",
            Criterion::Transboundary => "transboundary",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One criterion's verdict on a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionOutcome {
    /// Which impact dimension produced this outcome
    pub criterion: Criterion,

    /// Candidate tier from this dimension alone
    pub severity: Severity,

    /// Whether this dimension independently forces external reporting
    pub triggers_report: bool,

    /// Human-readable statement of the threshold met (or not met)
    pub reason: String,
}

/// Final classification for one incident
///
/// Recomputed from scratch on every request; contains no timestamp and no
/// random state, so repeated classification of the same record is
/// byte-identical when persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Final severity tier (maximum across all criteria)
    pub severity: Severity,

    /// Whether the incident must be externally reported within 24 hours
    pub report_required: bool,

    /// The criterion that determined the final tier
    pub determined_by: Criterion,

    /// Reason string from the determining criterion
    pub justification: String,

    /// Per-criterion outcomes, in priority order, for auditability
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<CriterionOutcome>,
}
