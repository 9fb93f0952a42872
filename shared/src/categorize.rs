//! Dashboard bucketing of trips relative to today.

use crate::Trip;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripCategory {
    Ongoing,
    Scheduled,
    Previous,
}

impl TripCategory {
    pub const ALL: [TripCategory; 3] = [
        TripCategory::Ongoing,
        TripCategory::Scheduled,
        TripCategory::Previous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TripCategory::Ongoing => "Ongoing",
            TripCategory::Scheduled => "Upcoming",
            TripCategory::Previous => "Completed",
        }
    }

    /// Bucket for a single trip. Both range ends count as ongoing.
    pub fn of(trip: &Trip, today: NaiveDate) -> Self {
        if trip.end_date < today {
            TripCategory::Previous
        } else if trip.start_date <= today && today <= trip.end_date {
            TripCategory::Ongoing
        } else {
            TripCategory::Scheduled
        }
    }
}

/// Trips split into the three dashboard tabs, input order preserved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedTrips {
    pub ongoing: Vec<Trip>,
    pub scheduled: Vec<Trip>,
    pub previous: Vec<Trip>,
}

impl CategorizedTrips {
    pub fn get(&self, category: TripCategory) -> &[Trip] {
        match category {
            TripCategory::Ongoing => &self.ongoing,
            TripCategory::Scheduled => &self.scheduled,
            TripCategory::Previous => &self.previous,
        }
    }

    pub fn total(&self) -> usize {
        self.ongoing.len() + self.scheduled.len() + self.previous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trip> {
        self.ongoing
            .iter()
            .chain(self.scheduled.iter())
            .chain(self.previous.iter())
    }

    /// Days until the earliest scheduled trip starts; 0 when nothing is scheduled
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        self.scheduled
            .iter()
            .map(|trip| trip.start_date)
            .min()
            .map(|start| (start - today).num_days().max(0))
            .unwrap_or(0)
    }

    /// Distinct stop cities across every trip
    pub fn destination_count(&self) -> usize {
        self.iter()
            .flat_map(|trip| trip.stops.iter())
            .map(|stop| stop.city.trim())
            .filter(|city| !city.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }
}

pub fn categorize_trips(trips: Vec<Trip>, today: NaiveDate) -> CategorizedTrips {
    let mut categorized = CategorizedTrips::default();
    for trip in trips {
        match TripCategory::of(&trip, today) {
            TripCategory::Ongoing => categorized.ongoing.push(trip),
            TripCategory::Scheduled => categorized.scheduled.push(trip),
            TripCategory::Previous => categorized.previous.push(trip),
        }
    }
    categorized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Stop, TripStyle};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn trip(id: &str, start: NaiveDate, end: NaiveDate, cities: &[&str]) -> Trip {
        Trip {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            start_date: start,
            end_date: end,
            budget: 0.0,
            cover_photo: None,
            style: TripStyle::default(),
            stops: cities
                .iter()
                .map(|city| Stop {
                    id: city.to_string(),
                    city: city.to_string(),
                    country: String::new(),
                    start_date: start,
                    end_date: end,
                    budget: 0.0,
                    notes: String::new(),
                    order: 0,
                    activities: Vec::new(),
                })
                .collect(),
            stops_count: None,
            activities_count: None,
            activities: Vec::new(),
        }
    }

    #[test]
    fn test_boundaries_are_ongoing() {
        let today = d(2026, 10, 18);
        let starts_today = trip("a", today, d(2026, 10, 25), &[]);
        let ends_today = trip("b", d(2026, 10, 1), today, &[]);
        let single_day = trip("c", today, today, &[]);
        assert_eq!(TripCategory::of(&starts_today, today), TripCategory::Ongoing);
        assert_eq!(TripCategory::of(&ends_today, today), TripCategory::Ongoing);
        assert_eq!(TripCategory::of(&single_day, today), TripCategory::Ongoing);
    }

    #[test]
    fn test_past_and_future() {
        let today = d(2026, 10, 18);
        let ended_yesterday = trip("a", d(2026, 10, 1), d(2026, 10, 17), &[]);
        let starts_tomorrow = trip("b", d(2026, 10, 19), d(2026, 10, 30), &[]);
        assert_eq!(TripCategory::of(&ended_yesterday, today), TripCategory::Previous);
        assert_eq!(TripCategory::of(&starts_tomorrow, today), TripCategory::Scheduled);
    }

    #[test]
    fn test_categorize_preserves_order() {
        let today = d(2026, 10, 18);
        let trips = vec![
            trip("future-2", d(2026, 12, 1), d(2026, 12, 5), &[]),
            trip("past", d(2026, 1, 1), d(2026, 1, 5), &[]),
            trip("now", d(2026, 10, 10), d(2026, 10, 20), &[]),
            trip("future-1", d(2026, 11, 1), d(2026, 11, 5), &[]),
        ];
        let categorized = categorize_trips(trips, today);
        let ids = |v: &[Trip]| v.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&categorized.ongoing), vec!["now"]);
        assert_eq!(ids(&categorized.scheduled), vec!["future-2", "future-1"]);
        assert_eq!(ids(&categorized.previous), vec!["past"]);
        assert_eq!(categorized.total(), 4);
        assert_eq!(categorized.get(TripCategory::Previous).len(), 1);
    }

    #[test]
    fn test_days_until_next() {
        let today = d(2026, 10, 18);
        let categorized = categorize_trips(
            vec![
                trip("far", d(2026, 12, 1), d(2026, 12, 5), &[]),
                trip("near", d(2026, 10, 28), d(2026, 11, 2), &[]),
            ],
            today,
        );
        assert_eq!(categorized.days_until_next(today), 10);
        assert_eq!(CategorizedTrips::default().days_until_next(today), 0);
    }

    #[test]
    fn test_destination_count_is_distinct() {
        let today = d(2026, 10, 18);
        let categorized = categorize_trips(
            vec![
                trip("a", d(2026, 1, 1), d(2026, 1, 5), &["Paris", "Berlin"]),
                trip("b", d(2026, 12, 1), d(2026, 12, 5), &["Paris", "Rome", " "]),
            ],
            today,
        );
        assert_eq!(categorized.destination_count(), 3);
    }
}
