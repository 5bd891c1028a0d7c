use chrono::{DateTime, Duration, Utc};

use crate::Trip;

/// When to nudge travelers before a trip: a day ahead, 3 hours ahead, and 30 minutes ahead.
/// Trips without a start date get no reminders.
pub fn generate_smart_reminders(trip: &Trip) -> Vec<DateTime<Utc>> {
    let start = match trip.start_date {
        Some(x) => x,
        None => {
            return Vec::new();
        }
    };
    vec![
        start - Duration::hours(24),
        start - Duration::hours(3),
        start - Duration::minutes(30),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::trip::tests::plan;
    use crate::TravelMode;

    #[test]
    fn reminders() {
        let mut trip = Trip::new(
            "t1",
            plan(TravelMode::Drive, Vec::new()),
            Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap(),
        );
        assert!(generate_smart_reminders(&trip).is_empty());

        trip.start_date = Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
        assert_eq!(
            generate_smart_reminders(&trip),
            vec![
                Utc.with_ymd_and_hms(2025, 5, 31, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 6, 1, 11, 30, 0).unwrap(),
            ]
        );
        let formatted: Vec<String> = generate_smart_reminders(&trip)
            .into_iter()
            .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            .collect();
        assert_eq!(
            formatted,
            vec![
                "2025-05-31T12:00:00Z",
                "2025-06-01T09:00:00Z",
                "2025-06-01T11:30:00Z"
            ]
        );
    }
}
