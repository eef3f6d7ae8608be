//! Incident entity type
//!
//! An incident is the structured answer set describing one workplace safety
//! event: who/when/what, plus quantitative and categorical impact answers for
//! every dimension the classification engine evaluates. Records are immutable
//! from the engine's point of view - classification reads, never writes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::identity::EntityId;
use crate::entities::classification::Classification;

/// Incident lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Being filled in, not yet classified
    #[default]
    Draft,
    /// Intake complete, classification on record
    Submitted,
    /// External report filed with the authority
    Reported,
    /// Investigation closed
    Closed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Draft => write!(f, "draft"),
            Status::Submitted => write!(f, "submitted"),
            Status::Reported => write!(f, "reported"),
            Status::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Status::Draft),
            "submitted" => Ok(Status::Submitted),
            "reported" => Ok(Status::Reported),
            "closed" => Ok(Status::Closed),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// Extent of damage to dwellings outside the establishment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HomesDamaged {
    /// No dwellings affected
    #[default]
    None,
    /// One or more dwellings damaged and unusable
    Some,
    /// Widespread damage to dwellings
    Many,
}

impl std::fmt::Display for HomesDamaged {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomesDamaged::None => write!(f, "none"),
            HomesDamaged::Some => write!(f, "some"),
            HomesDamaged::Many => write!(f, "many"),
        }
    }
}

impl FromStr for HomesDamaged {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "no" => Ok(HomesDamaged::None),
            "some" => Ok(HomesDamaged::Some),
            "many" => Ok(HomesDamaged::Many),
            _ => Err(format!("Unknown homes-damaged value: {}", s)),
        }
    }
}

/// Nature of a substance release, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
    /// No substance involved
    #[default]
    None,
    /// Accidental discharge or spill
    Spill,
    Fire,
    Explosion,
}

impl std::fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseKind::None => write!(f, "none"),
            ReleaseKind::Spill => write!(f, "spill"),
            ReleaseKind::Fire => write!(f, "fire"),
            ReleaseKind::Explosion => write!(f, "explosion"),
        }
    }
}

impl FromStr for ReleaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "no" => Ok(ReleaseKind::None),
            "spill" | "discharge" | "leak" => Ok(ReleaseKind::Spill),
            "fire" => Ok(ReleaseKind::Fire),
            "explosion" => Ok(ReleaseKind::Explosion),
            _ => Err(format!("Unknown release kind: {}", s)),
        }
    }
}

/// Harm to people
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanImpact {
    /// Number of deaths
    pub deaths: u32,

    /// Persons injured inside the establishment and hospitalized >= 24h
    pub injured_onsite: u32,

    /// Persons injured outside the establishment and hospitalized >= 24h
    pub injured_offsite: u32,
}

/// People kept away from their homes or workplaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exposure {
    /// Number of persons affected
    pub people: u32,

    /// Duration in hours
    pub duration_hours: f64,
}

impl Exposure {
    /// Persons x hours, the unit the reporting thresholds are written in
    pub fn person_hours(&self) -> f64 {
        f64::from(self.people) * self.duration_hours
    }
}

/// Damage to natural habitats, one magnitude per protected category
///
/// Units follow the regulatory criteria: hectares for areas, kilometres for
/// watercourses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalImpact {
    /// Protected habitat damaged (ha)
    pub protected_area_ha: f64,

    /// More widespread habitat, including agricultural land (ha)
    pub extended_area_ha: f64,

    /// River or canal affected (km)
    pub river_km: f64,

    /// Lake or pond affected (ha)
    pub lake_ha: f64,

    /// Delta affected (ha)
    pub delta_ha: f64,

    /// Aquifer or underground water affected (ha)
    pub aquifer_ha: f64,
}

/// Monetary damage, same currency on both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialImpact {
    /// Damage within the establishment
    pub onsite_cost: f64,

    /// Damage outside the establishment
    pub offsite_cost: f64,
}

/// All impact answers for one incident
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Impacts {
    pub human: HumanImpact,

    /// Dwellings outside the establishment
    pub homes_damaged: HomesDamaged,

    pub evacuation: Exposure,

    /// Interruption of drinking water, electricity, gas, or telephone
    pub service_disruption: Exposure,

    pub environment: EnvironmentalImpact,

    pub financial: FinancialImpact,

    /// Effects beyond the national border
    pub transboundary: bool,
}

/// Characteristics of any dangerous-substance release
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseImpact {
    /// What happened to the substance
    pub kind: ReleaseKind,

    /// Substance name, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substance: Option<String>,

    /// Quantity involved (kg)
    pub quantity_kg: f64,

    /// Qualifying quantity for the substance (kg), from the applicable
    /// substance list; release thresholds are a fraction of this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifying_quantity_kg: Option<f64>,
}

/// An incident record - one workplace safety event and its impact answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    /// Unique identifier (INC-ULID)
    pub id: EntityId,

    /// Operator or company name
    pub company: String,

    /// Date the incident occurred
    pub date: NaiveDate,

    /// Free-text description of what happened
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Who recorded and classified this incident
    pub author: String,

    /// Current status
    #[serde(default)]
    pub status: Status,

    /// Tags for filtering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Structured impact answers
    #[serde(default)]
    pub impacts: Impacts,

    /// Substance release characteristics
    #[serde(default)]
    pub release: ReleaseImpact,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Revision number, bumped on re-submission
    #[serde(default = "default_revision")]
    pub revision: u32,

    /// Last computed classification, stored alongside the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

fn default_revision() -> u32 {
    1
}

impl Incident {
    /// Create a new incident with required fields
    pub fn new(company: String, date: NaiveDate, author: String) -> Self {
        Self {
            id: EntityId::new(),
            company,
            date,
            description: String::new(),
            author,
            status: Status::default(),
            tags: Vec::new(),
            impacts: Impacts::default(),
            release: ReleaseImpact::default(),
            created: Utc::now(),
            revision: 1,
            classification: None,
        }
    }

    /// Whether the stored classification says this incident is reportable
    pub fn is_reportable(&self) -> bool {
        self.classification
            .as_ref()
            .map(|c| c.report_required)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Incident {
        Incident::new(
            "Acme Chemicals".to_string(),
            NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            "j.doe".to_string(),
        )
    }

    #[test]
    fn test_incident_roundtrip() {
        let mut inc = sample();
        inc.impacts.human.deaths = 1;
        inc.impacts.environment.river_km = 12.5;
        inc.impacts.transboundary = true;

        let yaml = serde_yml::to_string(&inc).unwrap();
        let parsed: Incident = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(inc.id, parsed.id);
        assert_eq!(parsed.impacts.human.deaths, 1);
        assert_eq!(parsed.impacts.environment.river_km, 12.5);
        assert!(parsed.impacts.transboundary);
    }

    #[test]
    fn test_impacts_default_on_missing_fields() {
        // Minimal file written by hand: impact block absent entirely.
        let yaml = r#"
id: INC-01ARZ3NDEKTSV4RRFFQ69G5FAV
company: "Acme"
date: 2025-06-12
author: "j.doe"
created: "2025-06-12T08:00:00Z"
"#;
        let inc: Incident = serde_yml::from_str(yaml).unwrap();
        assert_eq!(inc.impacts.human.deaths, 0);
        assert_eq!(inc.impacts.homes_damaged, HomesDamaged::None);
        assert!(!inc.impacts.transboundary);
        assert_eq!(inc.release.kind, ReleaseKind::None);
        assert_eq!(inc.revision, 1);
        assert!(inc.classification.is_none());
    }

    #[test]
    fn test_invalid_categorical_fails_to_parse() {
        let yaml = r#"
id: INC-01ARZ3NDEKTSV4RRFFQ69G5FAV
company: "Acme"
date: 2025-06-12
author: "j.doe"
created: "2025-06-12T08:00:00Z"
impacts:
  homes_damaged: catastrophically
"#;
        assert!(serde_yml::from_str::<Incident>(yaml).is_err());
    }

    #[test]
    fn test_person_hours() {
        let e = Exposure {
            people: 250,
            duration_hours: 2.0,
        };
        assert_eq!(e.person_hours(), 500.0);
    }

    #[test]
    fn test_homes_damaged_from_str() {
        assert_eq!("some".parse::<HomesDamaged>().unwrap(), HomesDamaged::Some);
        assert_eq!("NONE".parse::<HomesDamaged>().unwrap(), HomesDamaged::None);
        assert!("lots".parse::<HomesDamaged>().is_err());
    }

    #[test]
    fn test_release_kind_aliases() {
        assert_eq!("leak".parse::<ReleaseKind>().unwrap(), ReleaseKind::Spill);
        assert_eq!("FIRE".parse::<ReleaseKind>().unwrap(), ReleaseKind::Fire);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_yml::to_string(&Status::Submitted).unwrap().trim(), "submitted");
    }
}
