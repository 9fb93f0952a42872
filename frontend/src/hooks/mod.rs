pub mod use_activities;
pub mod use_alert;
pub mod use_trip_overview;
pub mod use_trip_stops;
pub mod use_trips;
