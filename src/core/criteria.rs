//! Criterion evaluators - one pure function per impact dimension
//!
//! Each evaluator inspects only its own dimension of the record and returns a
//! candidate tier, a report trigger, and a reason naming the threshold met.
//! Evaluators never see each other's output; combining them is the resolver's
//! job. A record with nothing to escalate scores the floor tier through the
//! same code path as any other - no special casing.

use crate::core::rules::{FixedOutcome, Ladder, RuleSet};
use crate::entities::classification::{Criterion, CriterionOutcome, Severity};
use crate::entities::incident::{HomesDamaged, Incident};

/// Run every evaluator, in tie-break priority order
pub(crate) fn evaluate_all(record: &Incident, rules: &RuleSet) -> Vec<CriterionOutcome> {
    Criterion::ALL
        .iter()
        .map(|c| evaluate(*c, record, rules))
        .collect()
}

fn evaluate(criterion: Criterion, record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    match criterion {
        Criterion::HumanHarm => human_harm(record, rules),
        Criterion::PropertyDamage => property_damage(record, rules),
        Criterion::Evacuation => evacuation(record, rules),
        Criterion::ServiceDisruption => service_disruption(record, rules),
        Criterion::Environmental => environmental(record, rules),
        Criterion::Financial => financial(record, rules),
        Criterion::SubstanceRelease => substance_release(record, rules),
        Criterion::Transboundary => transboundary(record, rules),
    }
}

/// Floor outcome when no threshold in the dimension is reached
fn floor(criterion: Criterion) -> CriterionOutcome {
    CriterionOutcome {
        criterion,
        severity: Severity::Minor,
        triggers_report: false,
        reason: format!("no {} threshold reached", criterion),
    }
}

/// Score one named value against a ladder
///
/// Returns the rung outcome, or None when the value is below every rung.
fn score(
    criterion: Criterion,
    ladder: &Ladder,
    value: f64,
    what: &str,
) -> Option<CriterionOutcome> {
    ladder.evaluate(value).map(|rung| CriterionOutcome {
        criterion,
        severity: rung.severity,
        triggers_report: rung.report,
        reason: format!("{} {} meets the threshold of {}", what, value, rung.at),
    })
}

/// Highest-severity outcome across a dimension's sub-fields, with the report
/// trigger set if ANY sub-field independently crossed its report threshold
///
/// Ties on severity keep the first sub-field listed, so the reason is
/// deterministic.
fn combine(criterion: Criterion, candidates: Vec<Option<CriterionOutcome>>) -> CriterionOutcome {
    let hit: Vec<CriterionOutcome> = candidates.into_iter().flatten().collect();
    let any_report = hit.iter().any(|o| o.triggers_report);

    let mut best: Option<CriterionOutcome> = None;
    for outcome in hit {
        match &best {
            Some(b) if outcome.severity <= b.severity => {}
            _ => best = Some(outcome),
        }
    }

    match best {
        Some(mut outcome) => {
            outcome.triggers_report = any_report;
            outcome
        }
        None => floor(criterion),
    }
}

fn human_harm(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::HumanHarm;
    let h = &record.impacts.human;
    combine(
        c,
        vec![
            score(c, &rules.human.deaths, f64::from(h.deaths), "death count"),
            score(
                c,
                &rules.human.injured_onsite,
                f64::from(h.injured_onsite),
                "on-site hospitalized count",
            ),
            score(
                c,
                &rules.human.injured_offsite,
                f64::from(h.injured_offsite),
                "off-site hospitalized count",
            ),
        ],
    )
}

fn property_damage(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::PropertyDamage;
    let outcome = match record.impacts.homes_damaged {
        HomesDamaged::None => return floor(c),
        HomesDamaged::Some => rules.property.some_homes,
        HomesDamaged::Many => rules.property.many_homes,
    };
    CriterionOutcome {
        criterion: c,
        severity: outcome.severity,
        triggers_report: outcome.report,
        reason: format!(
            "dwellings damaged and unusable ({})",
            record.impacts.homes_damaged
        ),
    }
}

fn evacuation(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::Evacuation;
    let e = &record.impacts.evacuation;
    if e.duration_hours < rules.evacuation.min_duration_hours {
        return floor(c);
    }
    score(
        c,
        &rules.evacuation.person_hours,
        e.person_hours(),
        "evacuation person-hours",
    )
    .unwrap_or_else(|| floor(c))
}

fn service_disruption(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::ServiceDisruption;
    let s = &record.impacts.service_disruption;
    if s.duration_hours < rules.service_disruption.min_duration_hours {
        return floor(c);
    }
    score(
        c,
        &rules.service_disruption.person_hours,
        s.person_hours(),
        "service-disruption person-hours",
    )
    .unwrap_or_else(|| floor(c))
}

fn environmental(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::Environmental;
    let env = &record.impacts.environment;
    let r = &rules.environment;
    combine(
        c,
        vec![
            score(c, &r.protected_area_ha, env.protected_area_ha, "protected habitat (ha)"),
            score(c, &r.extended_area_ha, env.extended_area_ha, "widespread habitat (ha)"),
            score(c, &r.river_km, env.river_km, "river or canal (km)"),
            score(c, &r.lake_ha, env.lake_ha, "lake or pond (ha)"),
            score(c, &r.delta_ha, env.delta_ha, "delta (ha)"),
            score(c, &r.aquifer_ha, env.aquifer_ha, "aquifer (ha)"),
        ],
    )
}

fn financial(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::Financial;
    let f = &record.impacts.financial;
    let currency = &rules.financial.currency;
    combine(
        c,
        vec![
            score(
                c,
                &rules.financial.onsite_cost,
                f.onsite_cost,
                &format!("on-site damage ({})", currency),
            ),
            score(
                c,
                &rules.financial.offsite_cost,
                f.offsite_cost,
                &format!("off-site damage ({})", currency),
            ),
        ],
    )
}

fn substance_release(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::SubstanceRelease;
    let Some(qualifying) = record.release.qualifying_quantity_kg else {
        return floor(c);
    };
    if qualifying <= 0.0 {
        return floor(c);
    }
    let threshold = qualifying * rules.release.qualifying_fraction;
    if record.release.quantity_kg >= threshold {
        let FixedOutcome { severity, report } = rules.release.outcome;
        CriterionOutcome {
            criterion: c,
            severity,
            triggers_report: report,
            reason: format!(
                "released {} kg, at least {}% of the qualifying quantity {} kg",
                record.release.quantity_kg,
                rules.release.qualifying_fraction * 100.0,
                qualifying
            ),
        }
    } else {
        floor(c)
    }
}

fn transboundary(record: &Incident, rules: &RuleSet) -> CriterionOutcome {
    let c = Criterion::Transboundary;
    if !record.impacts.transboundary {
        return floor(c);
    }
    let FixedOutcome { severity, report } = rules.transboundary;
    CriterionOutcome {
        criterion: c,
        severity,
        triggers_report: report,
        reason: "effects extend beyond the national border".to_string(),
    }
}
