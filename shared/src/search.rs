//! Cross-trip activity search.

use crate::{Activity, ActivityType, Trip};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityHit {
    pub activity: Activity,
    pub trip_id: String,
    pub trip_name: String,
    /// `None` for activities attached to the trip itself
    pub stop_name: Option<String>,
}

/// Flatten every activity of every trip, trip-level ones first, then each
/// stop's in stop order
pub fn collect_activities(trips: &[Trip]) -> Vec<ActivityHit> {
    let hit = |trip: &Trip, activity: &Activity, stop_name: Option<&str>| ActivityHit {
        activity: activity.clone(),
        trip_id: trip.id.clone(),
        trip_name: trip.name.clone(),
        stop_name: stop_name.map(str::to_string),
    };
    let mut hits = Vec::new();
    for trip in trips {
        hits.extend(trip.activities.iter().map(|activity| hit(trip, activity, None)));
        for stop in &trip.stops {
            hits.extend(stop.activities.iter().map(|activity| hit(trip, activity, Some(stop.city.as_str()))));
        }
    }
    hits
}

/// All set criteria must match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub query: String,
    pub trip_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub activity_type: Option<ActivityType>,
}

impl ActivityFilter {
    pub fn matches(&self, hit: &ActivityHit) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let activity = &hit.activity;
            let found = activity.name.to_lowercase().contains(&query)
                || activity.notes.to_lowercase().contains(&query)
                || activity
                    .location
                    .as_deref()
                    .map(|l| l.to_lowercase().contains(&query))
                    .unwrap_or(false);
            if !found {
                return false;
            }
        }
        if let Some(trip_id) = &self.trip_id {
            if &hit.trip_id != trip_id {
                return false;
            }
        }
        if let Some(date) = self.date {
            if hit.activity.date != Some(date) {
                return false;
            }
        }
        if let Some(kind) = self.activity_type {
            if hit.activity.activity_type != kind {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, hits: &'a [ActivityHit]) -> Vec<&'a ActivityHit> {
        hits.iter().filter(|hit| self.matches(hit)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityStatus, Stop, TripStyle};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, day).unwrap()
    }

    fn activity(name: &str, kind: ActivityType, date: u32, location: Option<&str>) -> Activity {
        Activity {
            id: name.to_string(),
            name: name.to_string(),
            activity_type: kind,
            date: Some(d(date)),
            time: None,
            duration: None,
            cost: 0.0,
            status: ActivityStatus::Planned,
            notes: String::new(),
            location: location.map(str::to_string),
        }
    }

    fn trips() -> Vec<Trip> {
        let make = |id: &str, activities: Vec<Activity>| Trip {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            start_date: d(1),
            end_date: d(30),
            budget: 0.0,
            cover_photo: None,
            style: TripStyle::default(),
            stops: vec![Stop {
                id: format!("{}-s1", id),
                city: "City".to_string(),
                country: String::new(),
                start_date: d(1),
                end_date: d(30),
                budget: 0.0,
                notes: String::new(),
                order: 1,
                activities,
            }],
            stops_count: None,
            activities_count: None,
            activities: Vec::new(),
        };
        vec![
            make("rome", vec![
                activity("Colosseum tour", ActivityType::Cultural, 2, Some("Piazza del Colosseo")),
                activity("Pasta class", ActivityType::Dining, 3, None),
            ]),
            make("paris", vec![activity("Louvre", ActivityType::Cultural, 2, Some("Rue de Rivoli"))]),
        ]
    }

    #[test]
    fn test_collect_tags_trip() {
        let hits = collect_activities(&trips());
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[2].trip_name, "PARIS");
        assert_eq!(hits[2].stop_name.as_deref(), Some("City"));
    }

    #[test]
    fn test_collect_includes_trip_level_activities() {
        let mut trips = trips();
        trips[1].activities = vec![activity("Airport transfer", ActivityType::Transportation, 1, None)];
        let hits = collect_activities(&trips);
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[2].activity.name, "Airport transfer");
        assert_eq!(hits[2].stop_name, None);
        assert_eq!(hits[2].trip_id, "paris");

        let transport = ActivityFilter {
            activity_type: Some(ActivityType::Transportation),
            ..Default::default()
        };
        assert_eq!(transport.apply(&hits).len(), 1);
    }

    #[test]
    fn test_filters_are_anded() {
        let hits = collect_activities(&trips());
        let all = ActivityFilter::default();
        assert_eq!(all.apply(&hits).len(), 3);

        let by_location = ActivityFilter {
            query: "RIVOLI".to_string(),
            ..Default::default()
        };
        assert_eq!(by_location.apply(&hits)[0].activity.name, "Louvre");

        let cultural_on_day_two = ActivityFilter {
            date: Some(d(2)),
            activity_type: Some(ActivityType::Cultural),
            ..Default::default()
        };
        assert_eq!(cultural_on_day_two.apply(&hits).len(), 2);

        let in_rome = ActivityFilter {
            trip_id: Some("rome".to_string()),
            activity_type: Some(ActivityType::Cultural),
            ..cultural_on_day_two
        };
        assert_eq!(in_rome.apply(&hits).len(), 1);
    }
}
