pub mod activities;
pub mod activity_search;
pub mod analytics;
pub mod calendar_view;
pub mod create_trip;
pub mod dashboard;
pub mod itinerary;
pub mod login;
pub mod settings;
pub mod shared_trip;
pub mod signup;
pub mod timeline;
pub mod trip_health;
pub mod trip_stops;
