//! Urgency classification for due instants.
//!
//! "Now" is always an explicit parameter — nothing in this module reads
//! the wall clock, so every function is deterministic for a fixed pair of
//! instants.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Ordered urgency tiers, least to most severe.
///
/// `None` applies only when no due instant exists at all; it is not the
/// same as a due instant in the past (that is `Overdue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    None,
    Later,
    Upcoming,
    Tomorrow,
    Soon,
    Warning,
    Critical,
    Overdue,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::None => "none",
            Urgency::Later => "later",
            Urgency::Upcoming => "upcoming",
            Urgency::Tomorrow => "tomorrow",
            Urgency::Soon => "soon",
            Urgency::Warning => "warning",
            Urgency::Critical => "critical",
            Urgency::Overdue => "overdue",
        }
    }
}

/// Assign a tier from `diff = due − now`. First match wins.
pub fn classify(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Urgency {
    let due = match due {
        Some(d) => d,
        None => return Urgency::None,
    };
    let diff = due - now;

    if diff <= Duration::zero() {
        Urgency::Overdue
    } else if diff <= Duration::hours(1) {
        Urgency::Critical
    } else if diff <= Duration::hours(4) {
        Urgency::Warning
    } else if diff <= Duration::hours(24) {
        Urgency::Soon
    } else if diff <= Duration::hours(48) {
        Urgency::Tomorrow
    } else if diff <= Duration::days(7) {
        Urgency::Upcoming
    } else {
        Urgency::Later
    }
}

/// Human-readable label for the gap between `due` and `now`, using the
/// coarsest unit that keeps the label informative: minutes under an hour,
/// hours under a day, days under a week, weeks under ~8, months beyond.
///
/// Examples: "3h left", "2d overdue", "due tomorrow".
pub fn describe(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let due = match due {
        Some(d) => d,
        None => return "no due date".to_string(),
    };
    let diff = due - now;

    if diff > Duration::zero() {
        if diff <= Duration::hours(1) {
            format!("{}m left", diff.num_minutes().max(1))
        } else if diff <= Duration::hours(24) {
            format!("{}h left", diff.num_hours())
        } else if diff <= Duration::hours(48) {
            "due tomorrow".to_string()
        } else if diff <= Duration::days(7) {
            format!("{}d left", diff.num_days())
        } else if diff < Duration::weeks(8) {
            format!("{}w left", diff.num_weeks())
        } else {
            format!("{}mo left", diff.num_days() / 30)
        }
    } else {
        let late = -diff;
        if late < Duration::minutes(1) {
            "due now".to_string()
        } else if late < Duration::hours(1) {
            format!("{}m overdue", late.num_minutes())
        } else if late < Duration::hours(24) {
            format!("{}h overdue", late.num_hours())
        } else if late < Duration::days(7) {
            format!("{}d overdue", late.num_days())
        } else if late < Duration::weeks(8) {
            format!("{}w overdue", late.num_weeks())
        } else {
            format!("{}mo overdue", late.num_days() / 30)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn tier_boundaries() {
        let now = t("2026-08-20T12:00:00Z");
        let cases = [
            (None, Urgency::None),
            (Some(now - Duration::days(3)), Urgency::Overdue),
            (Some(now), Urgency::Overdue),
            (Some(now + Duration::minutes(30)), Urgency::Critical),
            (Some(now + Duration::hours(1)), Urgency::Critical),
            (Some(now + Duration::hours(3)), Urgency::Warning),
            (Some(now + Duration::hours(4)), Urgency::Warning),
            (Some(now + Duration::hours(12)), Urgency::Soon),
            (Some(now + Duration::hours(24)), Urgency::Soon),
            (Some(now + Duration::hours(36)), Urgency::Tomorrow),
            (Some(now + Duration::hours(48)), Urgency::Tomorrow),
            (Some(now + Duration::days(5)), Urgency::Upcoming),
            (Some(now + Duration::days(7)), Urgency::Upcoming),
            (Some(now + Duration::days(20)), Urgency::Later),
        ];
        for (due, expected) in cases {
            assert_eq!(classify(due, now), expected, "due={due:?}");
        }
    }

    #[test]
    fn severity_is_monotone_as_due_approaches() {
        // Sweep due from now+10d down to now-10d; the tier must never
        // step backward in severity.
        let now = t("2026-08-20T12:00:00Z");
        let mut previous = Urgency::Later;
        let mut offset = Duration::days(10);
        while offset >= Duration::days(-10) {
            let tier = classify(Some(now + offset), now);
            assert!(
                tier >= previous,
                "severity regressed from {previous:?} to {tier:?} at offset {offset}"
            );
            previous = tier;
            offset = offset - Duration::minutes(30);
        }
        assert_eq!(previous, Urgency::Overdue);
    }

    #[test]
    fn labels_pick_the_coarsest_informative_unit() {
        let now = t("2026-08-20T12:00:00Z");
        let cases = [
            (None, "no due date"),
            (Some(now + Duration::minutes(45)), "45m left"),
            (Some(now + Duration::hours(3)), "3h left"),
            (Some(now + Duration::hours(30)), "due tomorrow"),
            (Some(now + Duration::days(4)), "4d left"),
            (Some(now + Duration::weeks(3)), "3w left"),
            (Some(now + Duration::days(90)), "3mo left"),
            (Some(now), "due now"),
            (Some(now - Duration::minutes(10)), "10m overdue"),
            (Some(now - Duration::hours(5)), "5h overdue"),
            (Some(now - Duration::days(2)), "2d overdue"),
            (Some(now - Duration::weeks(3)), "3w overdue"),
            (Some(now - Duration::days(120)), "4mo overdue"),
        ];
        for (due, expected) in cases {
            assert_eq!(describe(due, now), expected, "due={due:?}");
        }
    }

    #[test]
    fn labels_are_deterministic_for_fixed_instants() {
        let now = t("2026-08-20T12:00:00Z");
        let due = Some(t("2026-08-21T09:30:00Z"));
        assert_eq!(describe(due, now), describe(due, now));
        assert_eq!(classify(due, now), classify(due, now));
    }
}
