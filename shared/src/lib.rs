use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod analytics;
pub mod calendar;
pub mod categorize;
pub mod config;
pub mod conflicts;
pub mod dates;
pub mod demo;
pub mod health;
pub mod reorder;
pub mod routes;
pub mod search;
pub mod timeline;
pub mod validation;
pub mod wire;
pub mod wizard;

pub use categorize::{categorize_trips, CategorizedTrips, TripCategory};
pub use conflicts::{detect_stop_conflicts, StopConflict};
pub use dates::DateError;
pub use reorder::ReorderState;
pub use routes::Route;
pub use validation::ValidationErrors;
pub use wizard::{TripDraft, TripWizard, WizardStep};

/// A planned trip as returned by the itinerary API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default, deserialize_with = "wire::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "wire::date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "wire::date")]
    pub end_date: NaiveDate,
    /// Total planned budget in the user's currency
    #[serde(default, deserialize_with = "wire::amount")]
    pub budget: f64,
    /// Remote URL or data URL of the cover image
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(default)]
    pub style: TripStyle,
    #[serde(default, deserialize_with = "wire::skip_invalid")]
    pub stops: Vec<Stop>,
    /// Aggregate counts the list endpoint may attach instead of full stops
    #[serde(default)]
    pub stops_count: Option<u32>,
    #[serde(default)]
    pub activities_count: Option<u32>,
    /// Activities attached to the trip as a whole rather than to a stop
    #[serde(default, deserialize_with = "wire::skip_invalid")]
    pub activities: Vec<Activity>,
}

/// Travel preferences chosen in the creation wizard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStyle {
    #[serde(default, alias = "groupType")]
    pub companion: Option<Companion>,
    #[serde(default)]
    pub budget_level: Option<BudgetLevel>,
    #[serde(default)]
    pub pace: Option<Pace>,
    #[serde(default)]
    pub travel_style: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Companion {
    Solo,
    Couple,
    Family,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Budget,
    Moderate,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    Moderate,
    Fast,
}

/// A city/destination segment within a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    #[serde(default, deserialize_with = "wire::id")]
    pub id: String,
    #[serde(rename = "cityName", alias = "city")]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(deserialize_with = "wire::date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "wire::date")]
    pub end_date: NaiveDate,
    #[serde(default, deserialize_with = "wire::amount")]
    pub budget: f64,
    #[serde(default)]
    pub notes: String,
    /// 1-based position within the trip
    #[serde(default)]
    pub order: u32,
    #[serde(default, deserialize_with = "wire::skip_invalid")]
    pub activities: Vec<Activity>,
}

/// A scheduled item within a stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, deserialize_with = "wire::id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub activity_type: ActivityType,
    #[serde(default, deserialize_with = "wire::optional_date")]
    pub date: Option<NaiveDate>,
    /// Wall-clock start in `HH:MM`
    #[serde(default)]
    pub time: Option<String>,
    /// Length in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "wire::amount")]
    pub cost: f64,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Sightseeing,
    Dining,
    Adventure,
    Cultural,
    Shopping,
    Entertainment,
    Relaxation,
    Transportation,
    Accommodation,
    #[default]
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 10] = [
        ActivityType::Sightseeing,
        ActivityType::Dining,
        ActivityType::Adventure,
        ActivityType::Cultural,
        ActivityType::Shopping,
        ActivityType::Entertainment,
        ActivityType::Relaxation,
        ActivityType::Transportation,
        ActivityType::Accommodation,
        ActivityType::Other,
    ];

    /// Wire value, also used as the `<select>` option value
    pub fn value(&self) -> &'static str {
        match self {
            ActivityType::Sightseeing => "sightseeing",
            ActivityType::Dining => "dining",
            ActivityType::Adventure => "adventure",
            ActivityType::Cultural => "cultural",
            ActivityType::Shopping => "shopping",
            ActivityType::Entertainment => "entertainment",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Transportation => "transportation",
            ActivityType::Accommodation => "accommodation",
            ActivityType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Sightseeing => "Sightseeing",
            ActivityType::Dining => "Dining",
            ActivityType::Adventure => "Adventure",
            ActivityType::Cultural => "Cultural",
            ActivityType::Shopping => "Shopping",
            ActivityType::Entertainment => "Entertainment",
            ActivityType::Relaxation => "Relaxation",
            ActivityType::Transportation => "Transportation",
            ActivityType::Accommodation => "Accommodation",
            ActivityType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.value() == value)
            .unwrap_or(ActivityType::Other)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Planned,
    Done,
}

impl ActivityStatus {
    pub fn toggled(self) -> Self {
        match self {
            ActivityStatus::Planned => ActivityStatus::Done,
            ActivityStatus::Done => ActivityStatus::Planned,
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityStatus::Planned => write!(f, "Planned"),
            ActivityStatus::Done => write!(f, "Done"),
        }
    }
}

/// Signed-in user profile, mirrored into local storage after login
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl User {
    /// Name shown in the navbar greeting
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.email.clone()
        } else {
            full
        }
    }
}

/// Severity shared by inline banners and API health alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Info => "alert-info",
            Severity::Warning => "alert-warning",
            Severity::Error => "alert-error",
        }
    }
}

/// Trip health score as computed by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripHealth {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub alerts: Vec<HealthAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAnalysis {
    #[serde(default, deserialize_with = "wire::amount")]
    pub total_spent: f64,
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub category: String,
    #[serde(deserialize_with = "wire::amount")]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedCity {
    pub city: String,
    #[serde(default)]
    pub country: String,
}

// ---------------------------------------------------------------------------
// Request / response envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Number of family members travelling, as typed
    pub family_member: String,
    pub city: String,
    pub country: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Body of responses that only carry a status message (logout, deletes)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripListResponse {
    #[serde(default, deserialize_with = "wire::skip_invalid")]
    pub trips: Vec<Trip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResponse {
    pub trip: Trip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travel_style: String,
    pub companion: Companion,
    pub budget_level: Option<BudgetLevel>,
    pub pace: Pace,
    pub budget: f64,
    pub cover_photo: Option<String>,
}

/// Partial trip update; absent fields are left untouched by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopListResponse {
    #[serde(default, deserialize_with = "wire::skip_invalid")]
    pub stops: Vec<Stop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopResponse {
    pub stop: Stop,
}

/// Body for creating or fully updating a stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPayload {
    #[serde(rename = "cityName")]
    pub city: String,
    pub country: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Body for the per-stop order update issued after a drag-and-drop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopOrderUpdate {
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityListResponse {
    #[serde(default, deserialize_with = "wire::skip_invalid")]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub activity: Activity,
}

/// Body for creating or fully updating an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub duration: Option<u32>,
    pub cost: f64,
    pub status: ActivityStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityStatusUpdate {
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub health: TripHealth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub budget: BudgetAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub share_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub cities: Vec<RecommendedCity>,
}

/// Error body the API attaches to non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": "t1",
            "name": "Japan",
            "startDate": "2026-03-20",
            "endDate": "2026-04-05",
            "budget": 5800,
            "stops": [
                {"id": "s1", "cityName": "Tokyo", "country": "Japan",
                 "startDate": "2026-03-20", "endDate": "2026-03-25", "order": 1}
            ]
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.name, "Japan");
        assert_eq!(trip.description, "");
        assert_eq!(trip.stops.len(), 1);
        assert_eq!(trip.stops[0].city, "Tokyo");
        assert_eq!(trip.stops[0].budget, 0.0);
        assert_eq!(trip.style, TripStyle::default());
    }

    #[test]
    fn test_stop_accepts_plain_city_key() {
        let json = r#"{"city": "Paris", "startDate": "2026-01-01", "endDate": "2026-01-02"}"#;
        let stop: Stop = serde_json::from_str(json).unwrap();
        assert_eq!(stop.city, "Paris");
        assert_eq!(stop.order, 0);
    }

    #[test]
    fn test_style_accepts_group_type_alias() {
        let style: TripStyle = serde_json::from_str(r#"{"groupType": "family"}"#).unwrap();
        assert_eq!(style.companion, Some(Companion::Family));
    }

    #[test]
    fn test_unknown_activity_type_maps_to_other() {
        let json = r#"{"name": "Boat", "type": "sailing"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.activity_type, ActivityType::Other);
        assert_eq!(activity.status, ActivityStatus::Planned);
    }

    #[test]
    fn test_activity_type_value_lookup() {
        assert_eq!(ActivityType::from_value("dining"), ActivityType::Dining);
        assert_eq!(ActivityType::from_value("nope"), ActivityType::Other);
        for t in ActivityType::ALL {
            assert_eq!(ActivityType::from_value(t.value()), t);
        }
    }

    #[test]
    fn test_activity_status_toggle() {
        assert_eq!(ActivityStatus::Planned.toggled(), ActivityStatus::Done);
        assert_eq!(ActivityStatus::Done.toggled(), ActivityStatus::Planned);
    }

    #[test]
    fn test_update_trip_request_skips_absent_fields() {
        let req = UpdateTripRequest {
            budget: Some(100.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"budget":100.0}"#);
    }

    #[test]
    fn test_list_envelopes_default_to_empty() {
        let trips: TripListResponse = serde_json::from_str("{}").unwrap();
        assert!(trips.trips.is_empty());
        let acts: ActivityListResponse = serde_json::from_str("{}").unwrap();
        assert!(acts.activities.is_empty());
    }

    #[test]
    fn test_user_display_name() {
        let mut user = User {
            email: "a@b.co".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "a@b.co");
        user.first_name = Some("Ada".to_string());
        user.last_name = Some("Lovelace".to_string());
        assert_eq!(user.display_name(), "Ada Lovelace");
        user.name = Some("Demo User".to_string());
        assert_eq!(user.display_name(), "Demo User");
    }

    #[test]
    fn test_trip_list_tolerates_loose_records() {
        let json = r#"{"trips": [
            {"id": 12, "name": "Japan", "startDate": "2026-03-20T00:00:00.000Z",
             "endDate": "2026-04-05T00:00:00.000Z", "budget": "5800.50"},
            {"id": "t2", "name": "Undated"},
            {"id": "t3", "name": "Rome", "startDate": "2026-06-01", "endDate": "2026-06-07"}
        ]}"#;
        let list: TripListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.trips.len(), 2);
        assert_eq!(list.trips[0].id, "12");
        assert_eq!(list.trips[0].start_date, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(list.trips[0].budget, 5800.5);
        assert_eq!(list.trips[1].name, "Rome");
    }

    #[test]
    fn test_stop_and_activity_amounts_as_strings() {
        let json = r#"{"stops": [{"id": 3, "cityName": "Paris", "startDate": "2026-01-01",
            "endDate": "2026-01-04", "budget": "1500.00",
            "activities": [{"id": 9, "name": "Louvre", "date": "2026-01-02T09:00:00Z", "cost": "17"}]}]}"#;
        let list: StopListResponse = serde_json::from_str(json).unwrap();
        let stop = &list.stops[0];
        assert_eq!(stop.id, "3");
        assert_eq!(stop.budget, 1500.0);
        assert_eq!(stop.activities[0].id, "9");
        assert_eq!(stop.activities[0].cost, 17.0);
        assert_eq!(stop.activities[0].date, NaiveDate::from_ymd_opt(2026, 1, 2));
    }

    #[test]
    fn test_user_with_numeric_id() {
        let user: User = serde_json::from_str(r#"{"id": 1, "email": "demo@planora.app"}"#).unwrap();
        assert_eq!(user.id, "1");
    }
}
