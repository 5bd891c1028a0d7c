use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use geom::{Duration, LonLat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Accident,
    Construction,
    RoadClosure,
    Flooding,
    Landslide,
    Congestion,
    Event,
}

impl IssueType {
    pub fn icon(self) -> &'static str {
        match self {
            IssueType::Accident => "💥",
            IssueType::Construction => "🚧",
            IssueType::RoadClosure => "⛔",
            IssueType::Flooding => "🌊",
            IssueType::Landslide => "⛰️",
            IssueType::Congestion => "🚗",
            IssueType::Event => "🎪",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Low => "#eab308",
            Severity::Medium => "#f97316",
            Severity::High => "#ef4444",
            Severity::Critical => "#7f1d1d",
        }
    }
}

/// A snapshot of something reported on the road. Issues aren't tracked to resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteIssue {
    pub id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub location: LonLat,
    pub severity: Severity,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub estimated_clear: Option<DateTime<Utc>>,
    #[serde(default)]
    pub affected_roads: Vec<String>,
    /// Extra travel time caused for anyone passing through
    pub delay: Duration,
}

impl RouteIssue {
    /// Has this been reported by `time`, and not yet expected to be cleared?
    pub fn is_active_at(&self, time: DateTime<Utc>) -> bool {
        self.reported_at <= time && self.estimated_clear.map(|c| time < c).unwrap_or(true)
    }
}

/// The most severe of the issues, if there are any.
pub fn worst_severity(issues: &[RouteIssue]) -> Option<Severity> {
    issues.iter().map(|i| i.severity).max()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use strum::IntoEnumIterator;

    use super::*;

    fn issue(severity: Severity) -> RouteIssue {
        RouteIssue {
            id: format!("{:?}", severity),
            issue_type: IssueType::Construction,
            location: LonLat::new(77.0, 28.0),
            severity,
            description: "Lane closed".to_string(),
            reported_at: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
            estimated_clear: Some(Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()),
            affected_roads: vec!["NH48".to_string()],
            delay: Duration::minutes(15),
        }
    }

    #[test]
    fn mappings_are_total() {
        assert_eq!(IssueType::iter().count(), 7);
        for t in IssueType::iter() {
            assert!(!t.icon().is_empty());
        }
        let severities: Vec<Severity> = Severity::iter().collect();
        assert_eq!(
            severities,
            vec![
                Severity::Low,
                Severity::Medium,
                Severity::High,
                Severity::Critical
            ]
        );
        for pair in severities.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_ne!(pair[0].color(), pair[1].color());
        }
    }

    #[test]
    fn active_window() {
        let i = issue(Severity::High);
        assert!(!i.is_active_at(Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap()));
        assert!(i.is_active_at(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()));
        assert!(!i.is_active_at(Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()));

        let mut open_ended = issue(Severity::Low);
        open_ended.estimated_clear = None;
        assert!(open_ended.is_active_at(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn worst() {
        assert_eq!(worst_severity(&[]), None);
        assert_eq!(
            worst_severity(&[
                issue(Severity::Medium),
                issue(Severity::Critical),
                issue(Severity::Low)
            ]),
            Some(Severity::Critical)
        );
    }

    #[test]
    fn parse_json() {
        let i: RouteIssue = serde_json::from_str(
            r#"{
                "id": "i1",
                "type": "road_closure",
                "location": {"longitude": 77.1, "latitude": 28.5},
                "severity": "critical",
                "description": "Bridge closed",
                "reported_at": "2025-06-01T06:30:00Z",
                "estimated_clear": null,
                "delay": 1800.0
            }"#,
        )
        .unwrap();
        assert_eq!(i.issue_type, IssueType::RoadClosure);
        assert_eq!(i.severity, Severity::Critical);
        assert_eq!(i.delay, Duration::minutes(30));
        assert!(i.affected_roads.is_empty());
    }
}
