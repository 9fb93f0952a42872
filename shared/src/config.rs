//! Application-wide constants: API endpoints, storage keys, validation limits.

use crate::{BudgetLevel, Companion, Pace};

/// Default API root when `PLANORA_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

pub mod endpoints {
    pub const LOGIN: &str = "/auth/login";
    pub const SIGNUP: &str = "/auth/signup";
    pub const LOGOUT: &str = "/auth/logout";
    pub const VERIFY_TOKEN: &str = "/auth/verify";

    pub const USER_PROFILE: &str = "/user/profile";
    pub const UPDATE_PROFILE: &str = "/user/profile/update";

    pub const TRIPS: &str = "/trips";
    pub const TRIP_DETAIL: &str = "/trips/:id";
    pub const CREATE_TRIP: &str = "/trips/create";
    pub const UPDATE_TRIP: &str = "/trips/:id/update";
    pub const DELETE_TRIP: &str = "/trips/:id/delete";

    pub const STOPS: &str = "/trips/:tripId/stops";
    pub const STOP_DETAIL: &str = "/trips/:tripId/stops/:stopId";
    pub const CREATE_STOP: &str = "/trips/:tripId/stops/create";
    pub const UPDATE_STOP: &str = "/trips/:tripId/stops/:stopId/update";
    pub const DELETE_STOP: &str = "/trips/:tripId/stops/:stopId/delete";

    pub const ACTIVITIES: &str = "/trips/:tripId/stops/:stopId/activities";
    pub const CREATE_ACTIVITY: &str = "/trips/:tripId/stops/:stopId/activities/create";
    pub const UPDATE_ACTIVITY: &str = "/trips/:tripId/stops/:stopId/activities/:activityId/update";
    pub const DELETE_ACTIVITY: &str = "/trips/:tripId/stops/:stopId/activities/:activityId/delete";

    pub const TRIP_HEALTH: &str = "/trips/:id/health";
    pub const BUDGET_ANALYSIS: &str = "/trips/:id/budget";

    pub const SHARE_TRIP: &str = "/trips/:id/share";
    pub const SHARED_TRIP: &str = "/trips/shared/:token";

    pub const RECOMMENDED_CITIES: &str = "/recommendations/cities";
}

pub mod storage_keys {
    pub const AUTH_TOKEN: &str = "planora_auth_token";
    pub const USER_DATA: &str = "planora_user_data";
    pub const THEME_PREFERENCE: &str = "planora_theme";
}

pub mod limits {
    pub const PASSWORD_MIN_LENGTH: usize = 8;
    pub const TRIP_NAME_MIN_LENGTH: usize = 2;
    pub const TRIP_NAME_MAX_LENGTH: usize = 100;
    pub const MAX_STOPS_PER_TRIP: usize = 50;
    pub const MIN_BUDGET: f64 = 0.0;
    pub const MAX_BUDGET: f64 = 1_000_000.0;
    /// Minutes
    pub const ACTIVITY_DURATION_MIN: u32 = 15;
    pub const ACTIVITY_DURATION_MAX: u32 = 1440;
    pub const COVER_PHOTO_MAX_BYTES: u64 = 5 * 1024 * 1024;
    /// Longest day-by-day timeline rendered for one trip
    pub const MAX_TIMELINE_DAYS: usize = 366;
}

/// Trip health and budget banding
pub mod thresholds {
    pub const BUDGET_WARNING_PERCENT: f64 = 80.0;
    pub const BUDGET_CRITICAL_PERCENT: f64 = 100.0;

    pub const OVERLOADED_DAY_ACTIVITIES: usize = 8;
    pub const OVERLOADED_DAY_HOURS: u32 = 14;

    pub const HEALTH_EXCELLENT: u32 = 90;
    pub const HEALTH_GOOD: u32 = 70;
    pub const HEALTH_FAIR: u32 = 50;
}

/// How long success banners stay up before auto-dismissing
pub const ALERT_DISMISS_MS: u32 = 3000;

/// Delay between a successful wizard submit and the redirect
pub const CREATE_REDIRECT_MS: u32 = 1200;

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub const CHART_COLORS: [(u8, u8, u8); 6] = [
    (0xFF, 0xC1, 0x07),
    (0xFF, 0x98, 0x00),
    (0xFF, 0x57, 0x22),
    (0xE9, 0x1E, 0x63),
    (0x9C, 0x27, 0xB0),
    (0x3F, 0x51, 0xB5),
];

pub const COMPANION_OPTIONS: [(Companion, &str, &str); 4] = [
    (Companion::Solo, "solo", "Solo"),
    (Companion::Couple, "couple", "Couple"),
    (Companion::Family, "family", "Family"),
    (Companion::Group, "group", "Group"),
];

pub const BUDGET_LEVEL_OPTIONS: [(BudgetLevel, &str, &str); 3] = [
    (BudgetLevel::Budget, "budget", "Budget"),
    (BudgetLevel::Moderate, "moderate", "Moderate"),
    (BudgetLevel::Luxury, "luxury", "Luxury"),
];

pub const PACE_OPTIONS: [(Pace, &str, &str); 3] = [
    (Pace::Slow, "slow", "Slow (Relaxed)"),
    (Pace::Moderate, "moderate", "Moderate"),
    (Pace::Fast, "fast", "Fast (Action-packed)"),
];

pub fn companion_from_value(value: &str) -> Option<Companion> {
    COMPANION_OPTIONS.iter().find(|(_, v, _)| *v == value).map(|(c, _, _)| *c)
}

pub fn budget_level_from_value(value: &str) -> Option<BudgetLevel> {
    BUDGET_LEVEL_OPTIONS.iter().find(|(_, v, _)| *v == value).map(|(b, _, _)| *b)
}

pub fn pace_from_value(value: &str) -> Option<Pace> {
    PACE_OPTIONS.iter().find(|(_, v, _)| *v == value).map(|(p, _, _)| *p)
}

pub fn companion_label(companion: Companion) -> &'static str {
    COMPANION_OPTIONS
        .iter()
        .find(|(c, _, _)| *c == companion)
        .map(|(_, _, label)| *label)
        .unwrap_or("Other")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_lookups() {
        assert_eq!(companion_from_value("family"), Some(Companion::Family));
        assert_eq!(companion_from_value(""), None);
        assert_eq!(budget_level_from_value("luxury"), Some(BudgetLevel::Luxury));
        assert_eq!(pace_from_value("fast"), Some(Pace::Fast));
        assert_eq!(companion_label(Companion::Couple), "Couple");
    }

    #[test]
    fn test_storage_keys_are_namespaced() {
        for key in [storage_keys::AUTH_TOKEN, storage_keys::USER_DATA, storage_keys::THEME_PREFERENCE] {
            assert!(key.starts_with("planora_"));
        }
    }
}
