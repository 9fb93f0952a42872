//! Client-side routes and API path templates.

/// Every page the app can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    CreateTrip,
    TripStops { trip_id: String },
    Activities { trip_id: String, stop_id: String },
    Timeline { trip_id: String },
    Itinerary { trip_id: String },
    TripHealth { trip_id: String },
    SharedTrip { token: String },
    Analytics,
    Calendar,
    Search,
    Settings,
}

impl Route {
    /// Unknown paths resolve to the login page
    pub fn from_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Route::Login)
    }

    pub fn recognize(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] | ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard,
            ["trips", "create"] => Route::CreateTrip,
            ["trips", trip_id, "stops"] => Route::TripStops {
                trip_id: trip_id.to_string(),
            },
            ["trips", trip_id, "stops", stop_id, "activities"] => Route::Activities {
                trip_id: trip_id.to_string(),
                stop_id: stop_id.to_string(),
            },
            ["trips", trip_id, "timeline"] => Route::Timeline {
                trip_id: trip_id.to_string(),
            },
            ["trips", trip_id, "itinerary"] => Route::Itinerary {
                trip_id: trip_id.to_string(),
            },
            ["trips", trip_id, "health"] => Route::TripHealth {
                trip_id: trip_id.to_string(),
            },
            ["shared", token] => Route::SharedTrip {
                token: token.to_string(),
            },
            ["analytics"] => Route::Analytics,
            ["calendar"] => Route::Calendar,
            ["search"] => Route::Search,
            ["settings"] => Route::Settings,
            _ => return None,
        };
        Some(route)
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::CreateTrip => "/trips/create".to_string(),
            Route::TripStops { trip_id } => format!("/trips/{}/stops", trip_id),
            Route::Activities { trip_id, stop_id } => {
                format!("/trips/{}/stops/{}/activities", trip_id, stop_id)
            }
            Route::Timeline { trip_id } => format!("/trips/{}/timeline", trip_id),
            Route::Itinerary { trip_id } => format!("/trips/{}/itinerary", trip_id),
            Route::TripHealth { trip_id } => format!("/trips/{}/health", trip_id),
            Route::SharedTrip { token } => format!("/shared/{}", token),
            Route::Analytics => "/analytics".to_string(),
            Route::Calendar => "/calendar".to_string(),
            Route::Search => "/search".to_string(),
            Route::Settings => "/settings".to_string(),
        }
    }

    /// Login and signup; signed-in users are sent on to the dashboard
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }

    /// Shared trips are readable by anyone
    pub fn requires_auth(&self) -> bool {
        !self.is_public() && !matches!(self, Route::SharedTrip { .. })
    }

    /// The route actually shown for a requested route and session state
    pub fn guard(self, has_token: bool) -> Self {
        if self.requires_auth() && !has_token {
            Route::Login
        } else if self.is_public() && has_token {
            Route::Dashboard
        } else {
            self
        }
    }
}

/// Substitute `:name` segments of an endpoint template
pub fn api_path(template: &str, params: &[(&str, &str)]) -> String {
    template
        .split('/')
        .map(|segment| {
            segment
                .strip_prefix(':')
                .and_then(|name| params.iter().find(|(key, _)| *key == name))
                .map(|(_, value)| *value)
                .unwrap_or(segment)
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::endpoints;

    fn all_routes() -> Vec<Route> {
        vec![
            Route::Login,
            Route::Signup,
            Route::Dashboard,
            Route::CreateTrip,
            Route::TripStops { trip_id: "t1".into() },
            Route::Activities { trip_id: "t1".into(), stop_id: "s2".into() },
            Route::Timeline { trip_id: "t1".into() },
            Route::Itinerary { trip_id: "t1".into() },
            Route::TripHealth { trip_id: "t1".into() },
            Route::SharedTrip { token: "abc".into() },
            Route::Analytics,
            Route::Calendar,
            Route::Search,
            Route::Settings,
        ]
    }

    #[test]
    fn test_paths_round_trip() {
        for route in all_routes() {
            assert_eq!(Route::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_unknown_and_root_resolve_to_login() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path("/nowhere/at/all"), Route::Login);
        assert_eq!(Route::recognize("/nowhere"), None);
        assert_eq!(Route::from_path("/dashboard/?tab=1"), Route::Dashboard);
        // "create" is the wizard, not a trip id
        assert_eq!(Route::from_path("/trips/create"), Route::CreateTrip);
    }

    #[test]
    fn test_guards() {
        assert_eq!(Route::Dashboard.guard(false), Route::Login);
        assert_eq!(Route::Dashboard.guard(true), Route::Dashboard);
        assert_eq!(Route::Login.guard(true), Route::Dashboard);
        assert_eq!(Route::Signup.guard(false), Route::Signup);
        let shared = Route::SharedTrip { token: "x".into() };
        assert_eq!(shared.clone().guard(false), shared);
        assert_eq!(shared.clone().guard(true), shared);
    }

    #[test]
    fn test_api_path_substitution() {
        assert_eq!(api_path(endpoints::TRIP_DETAIL, &[("id", "42")]), "/trips/42");
        assert_eq!(
            api_path(endpoints::UPDATE_ACTIVITY, &[("tripId", "t"), ("stopId", "s"), ("activityId", "a")]),
            "/trips/t/stops/s/activities/a/update"
        );
        assert_eq!(api_path(endpoints::STOPS, &[]), "/trips/:tripId/stops");
    }
}
