//! Day-by-day views of a trip: the stop timeline and the per-date itinerary.

use crate::config::{limits, thresholds};
use crate::{Activity, ActivityStatus, Stop};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineDay {
    pub date: NaiveDate,
    /// 1-based across the whole trip
    pub day_of_trip: usize,
    pub stop_id: String,
    pub city: String,
    pub country: String,
    pub activities: Vec<Activity>,
}

/// One entry per inclusive day of every stop, in stop order. A day lists the
/// activities dated on it; undated activities land on the stop's first day.
/// The timeline stops after `MAX_TIMELINE_DAYS` entries.
pub fn build_timeline(stops: &[Stop]) -> Vec<TimelineDay> {
    let mut days = Vec::new();
    for stop in stops {
        let mut date = stop.start_date;
        while date <= stop.end_date {
            if days.len() >= limits::MAX_TIMELINE_DAYS {
                return days;
            }
            let activities = stop
                .activities
                .iter()
                .filter(|a| match a.date {
                    Some(d) => d == date,
                    None => date == stop.start_date,
                })
                .cloned()
                .collect();
            days.push(TimelineDay {
                date,
                day_of_trip: days.len() + 1,
                stop_id: stop.id.clone(),
                city: stop.city.clone(),
                country: stop.country.clone(),
                activities,
            });
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
    }
    days
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryEntry {
    pub activity: Activity,
    pub stop_id: String,
    pub stop_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    /// Stop of the first activity on this date
    pub stop_name: String,
    pub entries: Vec<ItineraryEntry>,
}

impl DateGroup {
    pub fn total_cost(&self) -> f64 {
        self.entries.iter().map(|e| e.activity.cost).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.activity.status == ActivityStatus::Done)
            .count()
    }

    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().filter_map(|e| e.activity.duration).sum()
    }

    /// Too many activities or too many hours for one day
    pub fn is_overloaded(&self) -> bool {
        self.entries.len() > thresholds::OVERLOADED_DAY_ACTIVITIES
            || self.total_minutes() > thresholds::OVERLOADED_DAY_HOURS * 60
    }
}

/// Activities grouped by date (falling back to the stop's start), oldest first
pub fn group_by_date(stops: &[Stop]) -> Vec<DateGroup> {
    let mut groups: BTreeMap<NaiveDate, DateGroup> = BTreeMap::new();
    for stop in stops {
        for activity in &stop.activities {
            let date = activity.date.unwrap_or(stop.start_date);
            groups
                .entry(date)
                .or_insert_with(|| DateGroup {
                    date,
                    stop_name: stop.city.clone(),
                    entries: Vec::new(),
                })
                .entries
                .push(ItineraryEntry {
                    activity: activity.clone(),
                    stop_id: stop.id.clone(),
                    stop_name: stop.city.clone(),
                });
        }
    }
    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActivityType;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    fn activity(name: &str, date: Option<NaiveDate>, cost: f64, status: ActivityStatus, duration: Option<u32>) -> Activity {
        Activity {
            id: name.to_string(),
            name: name.to_string(),
            activity_type: ActivityType::Sightseeing,
            date,
            time: None,
            duration,
            cost,
            status,
            notes: String::new(),
            location: None,
        }
    }

    fn stop(id: &str, start: NaiveDate, end: NaiveDate, activities: Vec<Activity>) -> Stop {
        Stop {
            id: id.to_string(),
            city: id.to_string(),
            country: String::new(),
            start_date: start,
            end_date: end,
            budget: 0.0,
            notes: String::new(),
            order: 0,
            activities,
        }
    }

    #[test]
    fn test_timeline_numbers_days_across_stops() {
        let stops = vec![
            stop("Paris", d(1, 1), d(1, 3), vec![
                activity("Louvre", Some(d(1, 2)), 17.0, ActivityStatus::Planned, None),
                activity("Arrival", None, 0.0, ActivityStatus::Planned, None),
            ]),
            stop("Berlin", d(1, 4), d(1, 5), Vec::new()),
        ];
        let days = build_timeline(&stops);
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].day_of_trip, 1);
        assert_eq!(days[4].day_of_trip, 5);
        assert_eq!(days[3].city, "Berlin");
        assert_eq!(days[0].activities[0].name, "Arrival");
        assert_eq!(days[1].activities[0].name, "Louvre");
        assert!(days[2].activities.is_empty());
    }

    #[test]
    fn test_reversed_stop_contributes_no_days() {
        let stops = vec![stop("Odd", d(1, 5), d(1, 1), Vec::new())];
        assert!(build_timeline(&stops).is_empty());
    }

    #[test]
    fn test_mistyped_end_year_is_capped() {
        let far = NaiveDate::from_ymd_opt(2206, 1, 1).unwrap();
        let stops = vec![stop("Paris", d(1, 1), far, Vec::new()), stop("Berlin", d(1, 2), d(1, 3), Vec::new())];
        let days = build_timeline(&stops);
        assert_eq!(days.len(), limits::MAX_TIMELINE_DAYS);
        assert!(days.iter().all(|day| day.city == "Paris"));
        assert_eq!(days.last().map(|day| day.day_of_trip), Some(limits::MAX_TIMELINE_DAYS));
    }

    #[test]
    fn test_group_by_date_sorted_with_fallback() {
        let stops = vec![
            stop("Rome", d(6, 10), d(6, 15), vec![
                activity("Colosseum", Some(d(6, 12)), 20.0, ActivityStatus::Done, Some(120)),
                activity("Walk", None, 0.0, ActivityStatus::Planned, None),
            ]),
            stop("Athens", d(6, 1), d(6, 3), vec![
                activity("Acropolis", Some(d(6, 12)), 25.0, ActivityStatus::Planned, Some(90)),
            ]),
        ];
        let groups = group_by_date(&stops);
        let dates: Vec<_> = groups.iter().map(|g| g.date).collect();
        assert_eq!(dates, vec![d(6, 10), d(6, 12)]);
        let busy = &groups[1];
        assert_eq!(busy.stop_name, "Rome");
        assert_eq!(busy.entries.len(), 2);
        assert_eq!(busy.total_cost(), 45.0);
        assert_eq!(busy.completed_count(), 1);
        assert_eq!(busy.total_minutes(), 210);
        assert!(!busy.is_overloaded());
    }

    #[test]
    fn test_overloaded_day() {
        let many: Vec<_> = (0..9)
            .map(|i| activity(&format!("a{}", i), Some(d(1, 1)), 0.0, ActivityStatus::Planned, None))
            .collect();
        let long = vec![activity("Hike", Some(d(1, 2)), 0.0, ActivityStatus::Planned, Some(15 * 60))];
        let groups = group_by_date(&[stop("X", d(1, 1), d(1, 2), many.into_iter().chain(long).collect())]);
        assert!(groups[0].is_overloaded());
        assert!(groups[1].is_overloaded());
    }
}
