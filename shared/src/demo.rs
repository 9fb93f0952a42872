//! Built-in sample trips shown when the API has nothing to offer.
//!
//! Dates are laid out relative to `today` so the dashboard always shows
//! ongoing, upcoming and completed trips.

use crate::{
    Activity, ActivityStatus, ActivityType, AuthResponse, Companion, Pace, Stop, Trip, TripStyle, User,
};
use chrono::{Duration, NaiveDate};

pub const DEMO_ID_PREFIX: &str = "demo-";

/// Rotating dashboard banner images
pub const HERO_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=1920&h=600&fit=crop",
    "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?w=1920&h=600&fit=crop",
    "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=1920&h=600&fit=crop",
    "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=1920&h=600&fit=crop",
    "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1?w=1920&h=600&fit=crop",
];

struct DemoStop {
    city: &'static str,
    country: &'static str,
    nights: i64,
    budget: f64,
}

struct DemoTrip {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    /// Days from today to the first day of the trip
    start_offset: i64,
    budget: f64,
    photo: &'static str,
    companion: Companion,
    pace: Pace,
    stops: &'static [DemoStop],
}

const fn stop(city: &'static str, country: &'static str, nights: i64, budget: f64) -> DemoStop {
    DemoStop {
        city,
        country,
        nights,
        budget,
    }
}

const DEMO_TRIPS: &[DemoTrip] = &[
    DemoTrip {
        id: "demo-ongoing-1",
        name: "European Adventure",
        description: "Exploring the historic cities of Western Europe",
        start_offset: -5,
        budget: 4500.0,
        photo: "photo-1502602898657-3e91760cbb34",
        companion: Companion::Couple,
        pace: Pace::Moderate,
        stops: &[
            stop("Paris", "France", 6, 1500.0),
            stop("Amsterdam", "Netherlands", 6, 1200.0),
            stop("Berlin", "Germany", 7, 1800.0),
        ],
    },
    DemoTrip {
        id: "demo-ongoing-2",
        name: "Southeast Asia Explorer",
        description: "Island hopping and cultural immersion",
        start_offset: -12,
        budget: 3200.0,
        photo: "photo-1537996194471-e657df975ab4",
        companion: Companion::Group,
        pace: Pace::Fast,
        stops: &[
            stop("Bali", "Indonesia", 8, 1000.0),
            stop("Bangkok", "Thailand", 7, 1100.0),
            stop("Singapore", "Singapore", 7, 1100.0),
        ],
    },
    DemoTrip {
        id: "demo-scheduled-1",
        name: "Japan Cultural Journey",
        description: "Cherry blossom season and ancient temples",
        start_offset: 60,
        budget: 5800.0,
        photo: "photo-1540959733332-eab4deabeeaf",
        companion: Companion::Family,
        pace: Pace::Moderate,
        stops: &[
            stop("Tokyo", "Japan", 6, 1800.0),
            stop("Kyoto", "Japan", 5, 1500.0),
            stop("Osaka", "Japan", 3, 1200.0),
            stop("Hiroshima", "Japan", 3, 1300.0),
        ],
    },
    DemoTrip {
        id: "demo-scheduled-2",
        name: "New York City Getaway",
        description: "Business and leisure in the Big Apple",
        start_offset: 25,
        budget: 2800.0,
        photo: "photo-1496442226666-8d4d0e62e6e9",
        companion: Companion::Solo,
        pace: Pace::Fast,
        stops: &[stop("New York", "USA", 8, 2800.0)],
    },
    DemoTrip {
        id: "demo-scheduled-3",
        name: "Mediterranean Coast",
        description: "Coastal towns and ancient history",
        start_offset: 150,
        budget: 4200.0,
        photo: "photo-1552832230-c0197dd311b5",
        companion: Companion::Couple,
        pace: Pace::Slow,
        stops: &[
            stop("Rome", "Italy", 6, 1500.0),
            stop("Athens", "Greece", 5, 1300.0),
            stop("Barcelona", "Spain", 5, 1400.0),
        ],
    },
    DemoTrip {
        id: "demo-previous-1",
        name: "London Business Trip",
        description: "Conference and client meetings",
        start_offset: -40,
        budget: 3500.0,
        photo: "photo-1513635269975-59663e0ac1ad",
        companion: Companion::Solo,
        pace: Pace::Fast,
        stops: &[stop("London", "UK", 8, 3500.0)],
    },
    DemoTrip {
        id: "demo-previous-2",
        name: "Swiss Alps Retreat",
        description: "Mountain hiking and relaxation",
        start_offset: -90,
        budget: 4800.0,
        photo: "photo-1531366936337-7c912a4589a7",
        companion: Companion::Group,
        pace: Pace::Slow,
        stops: &[
            stop("Zurich", "Switzerland", 6, 1600.0),
            stop("Interlaken", "Switzerland", 4, 1500.0),
            stop("Zermatt", "Switzerland", 4, 1700.0),
        ],
    },
    DemoTrip {
        id: "demo-previous-3",
        name: "Dubai Weekend",
        description: "Shopping and luxury experiences",
        start_offset: -120,
        budget: 3200.0,
        photo: "photo-1512453979798-5ea266f8880c",
        companion: Companion::Couple,
        pace: Pace::Moderate,
        stops: &[stop("Dubai", "UAE", 5, 3200.0)],
    },
];

pub const DEMO_TOKEN: &str = "demo-token";

/// Offline session used when the auth API cannot be reached
pub fn demo_session() -> AuthResponse {
    AuthResponse {
        token: DEMO_TOKEN.to_string(),
        user: User {
            id: "demo-user".to_string(),
            name: Some("Demo User".to_string()),
            email: "demo@planora.app".to_string(),
            ..Default::default()
        },
    }
}

pub fn is_demo_id(id: &str) -> bool {
    id.starts_with(DEMO_ID_PREFIX)
}

/// Cover image for a demo trip photo id
fn cover_url(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?w=800&h=500&fit=crop", photo)
}

fn sample_activities(stop_id: &str, city: &str, start: NaiveDate) -> Vec<Activity> {
    let make = |n: u32, name: String, kind: ActivityType, day: i64, time: &str, duration: u32, cost: f64| Activity {
        id: format!("{}-a{}", stop_id, n),
        name,
        activity_type: kind,
        date: Some(start + Duration::days(day)),
        time: Some(time.to_string()),
        duration: Some(duration),
        cost,
        status: ActivityStatus::Planned,
        notes: String::new(),
        location: Some(city.to_string()),
    };
    vec![
        make(1, format!("{} city walk", city), ActivityType::Sightseeing, 0, "10:00", 180, 0.0),
        make(2, format!("Dinner in {}", city), ActivityType::Dining, 0, "19:30", 120, 60.0),
        make(3, format!("{} museum visit", city), ActivityType::Cultural, 1, "11:00", 150, 25.0),
    ]
}

fn build(demo: &DemoTrip, today: NaiveDate) -> Trip {
    let start = today + Duration::days(demo.start_offset);
    let mut cursor = start;
    let stops: Vec<Stop> = demo
        .stops
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let id = format!("{}-s{}", demo.id, index + 1);
            let stop_start = cursor;
            let stop_end = stop_start + Duration::days(s.nights - 1);
            cursor = stop_end + Duration::days(1);
            Stop {
                activities: sample_activities(&id, s.city, stop_start),
                id,
                city: s.city.to_string(),
                country: s.country.to_string(),
                start_date: stop_start,
                end_date: stop_end,
                budget: s.budget,
                notes: String::new(),
                order: index as u32 + 1,
            }
        })
        .collect();
    let end = stops.last().map(|s| s.end_date).unwrap_or(start);
    let activities: usize = stops.iter().map(|s| s.activities.len()).sum();
    Trip {
        id: demo.id.to_string(),
        name: demo.name.to_string(),
        description: demo.description.to_string(),
        start_date: start,
        end_date: end,
        budget: demo.budget,
        cover_photo: Some(cover_url(demo.photo)),
        style: TripStyle {
            companion: Some(demo.companion),
            budget_level: None,
            pace: Some(demo.pace),
            travel_style: None,
        },
        stops_count: Some(stops.len() as u32),
        activities_count: Some(activities as u32),
        activities: Vec::new(),
        stops,
    }
}

pub fn demo_trips(today: NaiveDate) -> Vec<Trip> {
    DEMO_TRIPS.iter().map(|demo| build(demo, today)).collect()
}

pub fn demo_trip(id: &str, today: NaiveDate) -> Option<Trip> {
    DEMO_TRIPS
        .iter()
        .find(|demo| demo.id == id)
        .map(|demo| build(demo, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{categorize_trips, detect_stop_conflicts};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_demo_trips_fill_every_bucket() {
        let buckets = categorize_trips(demo_trips(today()), today());
        assert_eq!(buckets.ongoing.len(), 2);
        assert_eq!(buckets.scheduled.len(), 3);
        assert_eq!(buckets.previous.len(), 3);
    }

    #[test]
    fn test_demo_stops_are_sequential_and_conflict_free() {
        for trip in demo_trips(today()) {
            assert!(is_demo_id(&trip.id));
            assert!(detect_stop_conflicts(&trip.stops).is_empty(), "{}", trip.name);
            assert_eq!(trip.stops.first().map(|s| s.start_date), Some(trip.start_date));
            assert_eq!(trip.stops.last().map(|s| s.end_date), Some(trip.end_date));
            let total: f64 = trip.stops.iter().map(|s| s.budget).sum();
            assert_eq!(total, trip.budget, "{}", trip.name);
        }
    }

    #[test]
    fn test_demo_session_user() {
        let session = demo_session();
        assert_eq!(session.token, DEMO_TOKEN);
        assert_eq!(session.user.display_name(), "Demo User");
    }

    #[test]
    fn test_lookup_by_id() {
        let trip = demo_trip("demo-scheduled-2", today()).unwrap();
        assert_eq!(trip.name, "New York City Getaway");
        assert_eq!(trip.stops[0].id, "demo-scheduled-2-s1");
        assert!(demo_trip("trip-42", today()).is_none());
    }
}
