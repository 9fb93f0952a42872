//! Aggregations behind the analytics page charts.

use crate::config::companion_label;
use crate::dates::month_label;
use crate::Trip;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Slices shown in the budget pie
pub const BUDGET_SLICE_LIMIT: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripStats {
    pub total_trips: usize,
    pub total_budget: f64,
    pub total_activities: u32,
    pub total_cities: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    pub month: String,
    pub trips: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub activities: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReport {
    pub stats: TripStats,
    pub budget: Vec<BudgetSlice>,
    pub trend: Vec<MonthlyTrend>,
    pub categories: Vec<CategoryCount>,
}

fn activity_count(trip: &Trip) -> u32 {
    trip.activities_count.unwrap_or_else(|| {
        trip.stops.iter().map(|stop| stop.activities.len() as u32).sum()
    })
}

fn stop_count(trip: &Trip) -> u32 {
    trip.stops_count.unwrap_or(trip.stops.len() as u32)
}

pub fn trip_stats(trips: &[Trip]) -> TripStats {
    TripStats {
        total_trips: trips.len(),
        total_budget: trips.iter().map(|t| t.budget).sum(),
        total_activities: trips.iter().map(activity_count).sum(),
        total_cities: trips.iter().map(stop_count).sum(),
    }
}

/// First six trips with a positive budget
pub fn budget_distribution(trips: &[Trip]) -> Vec<BudgetSlice> {
    trips
        .iter()
        .filter(|trip| trip.budget > 0.0)
        .take(BUDGET_SLICE_LIMIT)
        .map(|trip| BudgetSlice {
            name: trip.name.clone(),
            value: trip.budget,
        })
        .collect()
}

/// Trips per start month, oldest month first
pub fn monthly_trend(trips: &[Trip]) -> Vec<MonthlyTrend> {
    let mut months: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();
    for trip in trips {
        let key = (trip.start_date.year(), trip.start_date.month());
        months
            .entry(key)
            .or_insert_with(|| (month_label(trip.start_date), 0))
            .1 += 1;
    }
    months
        .into_values()
        .map(|(month, trips)| MonthlyTrend { month, trips })
        .collect()
}

/// Activities summed per companion type, in first-seen order
pub fn activities_by_category(trips: &[Trip]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for trip in trips {
        let category = trip
            .style
            .companion
            .map(companion_label)
            .unwrap_or("Other")
            .to_string();
        let activities = activity_count(trip);
        match counts.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.activities += activities,
            None => counts.push(CategoryCount { category, activities }),
        }
    }
    counts
}

pub fn build_report(trips: &[Trip]) -> AnalyticsReport {
    AnalyticsReport {
        stats: trip_stats(trips),
        budget: budget_distribution(trips),
        trend: monthly_trend(trips),
        categories: activities_by_category(trips),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Companion, TripStyle};
    use chrono::NaiveDate;

    fn trip(name: &str, start: (i32, u32, u32), budget: f64, companion: Option<Companion>, activities: u32) -> Trip {
        let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        Trip {
            id: name.to_string(),
            name: name.to_string(),
            description: String::new(),
            start_date: start,
            end_date: start,
            budget,
            cover_photo: None,
            style: TripStyle {
                companion,
                ..Default::default()
            },
            stops: Vec::new(),
            stops_count: Some(2),
            activities_count: Some(activities),
            activities: Vec::new(),
        }
    }

    #[test]
    fn test_stats() {
        let trips = vec![
            trip("a", (2026, 1, 1), 1000.0, None, 3),
            trip("b", (2026, 2, 1), 500.0, None, 4),
        ];
        let stats = trip_stats(&trips);
        assert_eq!(stats.total_trips, 2);
        assert_eq!(stats.total_budget, 1500.0);
        assert_eq!(stats.total_activities, 7);
        assert_eq!(stats.total_cities, 4);
    }

    #[test]
    fn test_budget_distribution_skips_zero_and_caps() {
        let mut trips: Vec<Trip> = (0..8)
            .map(|i| trip(&format!("t{}", i), (2026, 1, 1), 100.0 * (i + 1) as f64, None, 0))
            .collect();
        trips.insert(0, trip("free", (2026, 1, 1), 0.0, None, 0));
        let slices = budget_distribution(&trips);
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[0].name, "t0");
    }

    #[test]
    fn test_monthly_trend_is_chronological() {
        let trips = vec![
            trip("a", (2026, 3, 1), 0.0, None, 0),
            trip("b", (2025, 12, 5), 0.0, None, 0),
            trip("c", (2026, 3, 20), 0.0, None, 0),
        ];
        let trend = monthly_trend(&trips);
        assert_eq!(
            trend,
            vec![
                MonthlyTrend { month: "Dec 2025".to_string(), trips: 1 },
                MonthlyTrend { month: "Mar 2026".to_string(), trips: 2 },
            ]
        );
    }

    #[test]
    fn test_activities_by_category() {
        let trips = vec![
            trip("a", (2026, 1, 1), 0.0, Some(Companion::Family), 3),
            trip("b", (2026, 1, 1), 0.0, None, 2),
            trip("c", (2026, 1, 1), 0.0, Some(Companion::Family), 1),
        ];
        let counts = activities_by_category(&trips);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].category, "Family");
        assert_eq!(counts[0].activities, 4);
        assert_eq!(counts[1].category, "Other");
    }
}
