//! Unified filter enums for CLI commands

use clap::ValueEnum;

use crate::entities::classification::Severity;
use crate::entities::incident::{Incident, Status};

/// Status filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Draft status only
    Draft,
    /// Submitted status only
    Submitted,
    /// Reported status only
    Reported,
    /// Closed status only
    Closed,
    /// All open statuses (not closed) - default
    #[default]
    Open,
    /// All statuses
    All,
}

impl StatusFilter {
    /// Check if a Status matches this filter
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::Draft => status == Status::Draft,
            StatusFilter::Submitted => status == Status::Submitted,
            StatusFilter::Reported => status == Status::Reported,
            StatusFilter::Closed => status == Status::Closed,
            StatusFilter::Open => status != Status::Closed,
            StatusFilter::All => true,
        }
    }
}

/// Severity filter for list commands, keyed on the stored classification
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SeverityFilter {
    Minor,
    Moderate,
    Major,
    Catastrophic,
    /// Incidents with no stored classification
    Unclassified,
    #[default]
    All,
}

impl SeverityFilter {
    /// Check if an incident's stored classification matches this filter
    pub fn matches(&self, incident: &Incident) -> bool {
        let stored = incident.classification.as_ref().map(|c| c.severity);
        match self {
            SeverityFilter::Minor => stored == Some(Severity::Minor),
            SeverityFilter::Moderate => stored == Some(Severity::Moderate),
            SeverityFilter::Major => stored == Some(Severity::Major),
            SeverityFilter::Catastrophic => stored == Some(Severity::Catastrophic),
            SeverityFilter::Unclassified => stored.is_none(),
            SeverityFilter::All => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn incident() -> Incident {
        Incident::new(
            "Acme".to_string(),
            NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            "j.doe".to_string(),
        )
    }

    #[test]
    fn test_status_filter_open_excludes_closed() {
        assert!(StatusFilter::Open.matches(Status::Draft));
        assert!(StatusFilter::Open.matches(Status::Reported));
        assert!(!StatusFilter::Open.matches(Status::Closed));
        assert!(StatusFilter::All.matches(Status::Closed));
    }

    #[test]
    fn test_severity_filter_unclassified() {
        let inc = incident();
        assert!(SeverityFilter::Unclassified.matches(&inc));
        assert!(!SeverityFilter::Major.matches(&inc));
        assert!(SeverityFilter::All.matches(&inc));
    }
}
