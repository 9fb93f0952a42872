use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use shared::config::{endpoints, DEFAULT_API_BASE_URL};
use shared::routes::api_path;
use shared::{
    Activity, ActivityListResponse, ActivityPayload, ActivityResponse, ActivityStatus,
    ActivityStatusUpdate, ApiErrorBody, AuthResponse, BudgetAnalysis, BudgetResponse,
    CreateTripRequest, HealthResponse, LoginRequest, MessageResponse, RecommendationsResponse,
    RecommendedCity, ShareResponse, SignupRequest, Stop, StopListResponse,
    StopOrderUpdate, StopPayload, StopResponse, Trip, TripHealth, TripListResponse, TripResponse,
    UpdateProfileRequest, UpdateTripRequest, User, UserResponse,
};
use thiserror::Error;

use super::storage::Session;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// The API could not be reached at all
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// Error for a non-2xx response: the JSON `message` field when present,
/// otherwise the status text.
pub fn http_error(status: u16, body: &str, status_text: &str) -> ApiError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|body| body.message)
        .ok()
        .filter(|message| !message.trim().is_empty())
        .or_else(|| Some(status_text.to_string()).filter(|text| !text.trim().is_empty()))
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    ApiError::Http { status, message }
}

/// Decode a 2xx body; an empty body decodes as `null`
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// API client for the itinerary REST API
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client for the compile-time `PLANORA_API_URL`, or the local default
    pub fn new() -> Self {
        Self::with_base_url(option_env!("PLANORA_API_URL").unwrap_or(DEFAULT_API_BASE_URL).to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, template: &str, params: &[(&str, &str)]) -> String {
        format!("{}{}", self.base_url, api_path(template, params))
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match Session::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(http_error(response.status(), &body, &response.status_text()));
        }
        decode_body(&body)
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let request: Request = Self::authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    // Auth

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        Self::send_json(Request::post(&self.url(endpoints::LOGIN, &[])), request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        Self::send_json(Request::post(&self.url(endpoints::SIGNUP, &[])), request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: Option<MessageResponse> = Self::send(Request::post(&self.url(endpoints::LOGOUT, &[]))).await?;
        Ok(())
    }

    pub async fn verify_token(&self) -> Result<User, ApiError> {
        let response: UserResponse = Self::send(Request::get(&self.url(endpoints::VERIFY_TOKEN, &[]))).await?;
        Ok(response.user)
    }

    // Profile

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let response: UserResponse = Self::send(Request::get(&self.url(endpoints::USER_PROFILE, &[]))).await?;
        Ok(response.user)
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        let response: UserResponse =
            Self::send_json(Request::put(&self.url(endpoints::UPDATE_PROFILE, &[])), request).await?;
        Ok(response.user)
    }

    // Trips

    pub async fn get_trips(&self) -> Result<Vec<Trip>, ApiError> {
        let response: Option<TripListResponse> = Self::send(Request::get(&self.url(endpoints::TRIPS, &[]))).await?;
        Ok(response.unwrap_or_default().trips)
    }

    pub async fn get_trip(&self, trip_id: &str) -> Result<Trip, ApiError> {
        let url = self.url(endpoints::TRIP_DETAIL, &[("id", trip_id)]);
        let response: TripResponse = Self::send(Request::get(&url)).await?;
        Ok(response.trip)
    }

    pub async fn create_trip(&self, request: &CreateTripRequest) -> Result<Trip, ApiError> {
        let response: TripResponse =
            Self::send_json(Request::post(&self.url(endpoints::CREATE_TRIP, &[])), request).await?;
        Ok(response.trip)
    }

    pub async fn update_trip(&self, trip_id: &str, request: &UpdateTripRequest) -> Result<Trip, ApiError> {
        let url = self.url(endpoints::UPDATE_TRIP, &[("id", trip_id)]);
        let response: TripResponse = Self::send_json(Request::put(&url), request).await?;
        Ok(response.trip)
    }

    pub async fn delete_trip(&self, trip_id: &str) -> Result<(), ApiError> {
        let url = self.url(endpoints::DELETE_TRIP, &[("id", trip_id)]);
        let _: Option<MessageResponse> = Self::send(Request::delete(&url)).await?;
        Ok(())
    }

    // Stops

    pub async fn get_stops(&self, trip_id: &str) -> Result<Vec<Stop>, ApiError> {
        let url = self.url(endpoints::STOPS, &[("tripId", trip_id)]);
        let response: Option<StopListResponse> = Self::send(Request::get(&url)).await?;
        Ok(response.unwrap_or_default().stops)
    }

    pub async fn get_stop(&self, trip_id: &str, stop_id: &str) -> Result<Stop, ApiError> {
        let url = self.url(endpoints::STOP_DETAIL, &[("tripId", trip_id), ("stopId", stop_id)]);
        let response: StopResponse = Self::send(Request::get(&url)).await?;
        Ok(response.stop)
    }

    pub async fn create_stop(&self, trip_id: &str, payload: &StopPayload) -> Result<Stop, ApiError> {
        let url = self.url(endpoints::CREATE_STOP, &[("tripId", trip_id)]);
        let response: StopResponse = Self::send_json(Request::post(&url), payload).await?;
        Ok(response.stop)
    }

    pub async fn update_stop(&self, trip_id: &str, stop_id: &str, payload: &StopPayload) -> Result<Stop, ApiError> {
        let url = self.url(endpoints::UPDATE_STOP, &[("tripId", trip_id), ("stopId", stop_id)]);
        let response: StopResponse = Self::send_json(Request::put(&url), payload).await?;
        Ok(response.stop)
    }

    /// Partial update carrying only the new position
    pub async fn update_stop_order(&self, trip_id: &str, stop_id: &str, update: StopOrderUpdate) -> Result<(), ApiError> {
        let url = self.url(endpoints::UPDATE_STOP, &[("tripId", trip_id), ("stopId", stop_id)]);
        let _: IgnoredAny = Self::send_json(Request::put(&url), &update).await?;
        Ok(())
    }

    pub async fn delete_stop(&self, trip_id: &str, stop_id: &str) -> Result<(), ApiError> {
        let url = self.url(endpoints::DELETE_STOP, &[("tripId", trip_id), ("stopId", stop_id)]);
        let _: Option<MessageResponse> = Self::send(Request::delete(&url)).await?;
        Ok(())
    }

    // Activities

    pub async fn get_activities(&self, trip_id: &str, stop_id: &str) -> Result<Vec<Activity>, ApiError> {
        let url = self.url(endpoints::ACTIVITIES, &[("tripId", trip_id), ("stopId", stop_id)]);
        let response: Option<ActivityListResponse> = Self::send(Request::get(&url)).await?;
        Ok(response.unwrap_or_default().activities)
    }

    pub async fn create_activity(&self, trip_id: &str, stop_id: &str, payload: &ActivityPayload) -> Result<Activity, ApiError> {
        let url = self.url(endpoints::CREATE_ACTIVITY, &[("tripId", trip_id), ("stopId", stop_id)]);
        let response: ActivityResponse = Self::send_json(Request::post(&url), payload).await?;
        Ok(response.activity)
    }

    pub async fn update_activity(
        &self,
        trip_id: &str,
        stop_id: &str,
        activity_id: &str,
        payload: &ActivityPayload,
    ) -> Result<Activity, ApiError> {
        let url = self.url(
            endpoints::UPDATE_ACTIVITY,
            &[("tripId", trip_id), ("stopId", stop_id), ("activityId", activity_id)],
        );
        let response: ActivityResponse = Self::send_json(Request::put(&url), payload).await?;
        Ok(response.activity)
    }

    pub async fn update_activity_status(
        &self,
        trip_id: &str,
        stop_id: &str,
        activity_id: &str,
        status: ActivityStatus,
    ) -> Result<(), ApiError> {
        let url = self.url(
            endpoints::UPDATE_ACTIVITY,
            &[("tripId", trip_id), ("stopId", stop_id), ("activityId", activity_id)],
        );
        let _: IgnoredAny = Self::send_json(Request::put(&url), &ActivityStatusUpdate { status }).await?;
        Ok(())
    }

    pub async fn delete_activity(&self, trip_id: &str, stop_id: &str, activity_id: &str) -> Result<(), ApiError> {
        let url = self.url(
            endpoints::DELETE_ACTIVITY,
            &[("tripId", trip_id), ("stopId", stop_id), ("activityId", activity_id)],
        );
        let _: Option<MessageResponse> = Self::send(Request::delete(&url)).await?;
        Ok(())
    }

    // Intelligence

    pub async fn get_trip_health(&self, trip_id: &str) -> Result<TripHealth, ApiError> {
        let url = self.url(endpoints::TRIP_HEALTH, &[("id", trip_id)]);
        let response: HealthResponse = Self::send(Request::get(&url)).await?;
        Ok(response.health)
    }

    pub async fn get_budget_analysis(&self, trip_id: &str) -> Result<BudgetAnalysis, ApiError> {
        let url = self.url(endpoints::BUDGET_ANALYSIS, &[("id", trip_id)]);
        let response: BudgetResponse = Self::send(Request::get(&url)).await?;
        Ok(response.budget)
    }

    // Sharing

    pub async fn share_trip(&self, trip_id: &str) -> Result<String, ApiError> {
        let url = self.url(endpoints::SHARE_TRIP, &[("id", trip_id)]);
        let response: ShareResponse = Self::send(Request::post(&url)).await?;
        Ok(response.share_token)
    }

    pub async fn get_shared_trip(&self, token: &str) -> Result<Trip, ApiError> {
        let url = self.url(endpoints::SHARED_TRIP, &[("token", token)]);
        let response: TripResponse = Self::send(Request::get(&url)).await?;
        Ok(response.trip)
    }

    pub async fn get_recommended_cities(&self) -> Result<Vec<RecommendedCity>, ApiError> {
        let url = self.url(endpoints::RECOMMENDED_CITIES, &[]);
        let response: Option<RecommendationsResponse> = Self::send(Request::get(&url)).await?;
        Ok(response.unwrap_or_default().cities)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_url_substitutes_params() {
        let client = ApiClient::with_base_url("https://api.example.com/api/".to_string());
        assert_eq!(
            client.url(endpoints::STOP_DETAIL, &[("tripId", "t1"), ("stopId", "s9")]),
            "https://api.example.com/api/trips/t1/stops/s9"
        );
    }

    #[wasm_bindgen_test]
    fn test_http_error_prefers_message_field() {
        let error = http_error(400, r#"{"message":"Trip name is required"}"#, "Bad Request");
        assert_eq!(error.to_string(), "Trip name is required");
        assert_eq!(http_error(500, "<html>oops</html>", "Internal Server Error").to_string(), "Internal Server Error");
        assert_eq!(http_error(502, "", "").to_string(), "Request failed with status 502");
        assert!(http_error(401, "", "Unauthorized").is_unauthorized());
    }

    #[wasm_bindgen_test]
    fn test_decode_body_tolerates_empty_bodies() {
        let message: Option<MessageResponse> = decode_body("").unwrap();
        assert!(message.is_none());
        let trips: TripListResponse = decode_body(r#"{"trips":[]}"#).unwrap();
        assert!(trips.trips.is_empty());
        assert!(matches!(decode_body::<TripResponse>("{}"), Err(ApiError::Decode(_))));
    }
}
