//! Overlap checks between itinerary stops. Advisory only: conflicts feed a
//! warning banner and never block a save.

use crate::dates::days_inclusive;
use crate::{Stop, Trip};
use chrono::NaiveDate;

/// Two stops whose date ranges intersect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopConflict {
    pub first: usize,
    pub second: usize,
    pub first_city: String,
    pub second_city: String,
}

impl StopConflict {
    pub fn describe(&self) -> String {
        format!("{} and {}", self.first_city, self.second_city)
    }
}

/// Inclusive interval intersection
pub fn ranges_overlap(start1: NaiveDate, end1: NaiveDate, start2: NaiveDate, end2: NaiveDate) -> bool {
    start1 <= end2 && end1 >= start2
}

/// Every pair `(i, j)` with `i < j` whose ranges intersect, in index order
pub fn detect_stop_conflicts(stops: &[Stop]) -> Vec<StopConflict> {
    let mut conflicts = Vec::new();
    for (i, a) in stops.iter().enumerate() {
        for (j, b) in stops.iter().enumerate().skip(i + 1) {
            if ranges_overlap(a.start_date, a.end_date, b.start_date, b.end_date) {
                conflicts.push(StopConflict {
                    first: i,
                    second: j,
                    first_city: a.city.clone(),
                    second_city: b.city.clone(),
                });
            }
        }
    }
    conflicts
}

/// Whether a stop range lies within its trip's range
pub fn within_trip(trip: &Trip, start: NaiveDate, end: NaiveDate) -> bool {
    start >= trip.start_date && end <= trip.end_date
}

pub fn total_stop_budget(stops: &[Stop]) -> f64 {
    stops.iter().map(|stop| stop.budget).sum()
}

pub fn total_stop_days(stops: &[Stop]) -> i64 {
    stops
        .iter()
        .map(|stop| days_inclusive(stop.start_date, stop.end_date))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    fn stop(city: &str, start: NaiveDate, end: NaiveDate, budget: f64) -> Stop {
        Stop {
            id: city.to_lowercase(),
            city: city.to_string(),
            country: String::new(),
            start_date: start,
            end_date: end,
            budget,
            notes: String::new(),
            order: 0,
            activities: Vec::new(),
        }
    }

    #[test]
    fn test_flags_only_overlapping_pairs() {
        let stops = vec![
            stop("Paris", d(1, 1), d(1, 5), 0.0),
            stop("Amsterdam", d(1, 4), d(1, 8), 0.0),
            stop("Berlin", d(1, 10), d(1, 12), 0.0),
            stop("Prague", d(1, 12), d(1, 14), 0.0),
        ];
        let conflicts = detect_stop_conflicts(&stops);
        let pairs: Vec<_> = conflicts.iter().map(|c| (c.first, c.second)).collect();
        assert_eq!(pairs, vec![(0, 1), (2, 3)]);
        assert_eq!(conflicts[0].describe(), "Paris and Amsterdam");
    }

    #[test]
    fn test_touching_ranges_conflict() {
        assert!(ranges_overlap(d(1, 1), d(1, 5), d(1, 5), d(1, 9)));
        assert!(!ranges_overlap(d(1, 1), d(1, 5), d(1, 6), d(1, 9)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let ranges = [
            (d(1, 1), d(1, 5)),
            (d(1, 3), d(1, 4)),
            (d(1, 5), d(1, 9)),
            (d(1, 6), d(1, 6)),
            (d(2, 1), d(2, 3)),
        ];
        for &(s1, e1) in &ranges {
            for &(s2, e2) in &ranges {
                assert_eq!(ranges_overlap(s1, e1, s2, e2), ranges_overlap(s2, e2, s1, e1));
            }
        }

        let forward = vec![stop("A", d(1, 1), d(1, 5), 0.0), stop("B", d(1, 3), d(1, 7), 0.0)];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();
        assert_eq!(detect_stop_conflicts(&forward).len(), 1);
        assert_eq!(detect_stop_conflicts(&reversed).len(), 1);
    }

    #[test]
    fn test_no_conflicts_for_sequential_stops() {
        let stops = vec![
            stop("Tokyo", d(3, 20), d(3, 25), 0.0),
            stop("Kyoto", d(3, 26), d(3, 30), 0.0),
        ];
        assert!(detect_stop_conflicts(&stops).is_empty());
        assert!(detect_stop_conflicts(&[]).is_empty());
    }

    #[test]
    fn test_totals() {
        let stops = vec![
            stop("Paris", d(1, 1), d(1, 5), 1500.0),
            stop("Berlin", d(1, 6), d(1, 6), 250.5),
        ];
        assert_eq!(total_stop_budget(&stops), 1750.5);
        assert_eq!(total_stop_days(&stops), 6);
    }
}
