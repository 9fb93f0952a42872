//! Form state and field-scoped validation for every input form in the app.
//!
//! Each form keeps the raw strings typed by the user. `validate` returns the
//! per-field messages that block submission; `to_*` converts a valid form
//! into the API payload.

use crate::config::limits;
use crate::conflicts::within_trip;
use crate::dates::{parse_date, parse_optional_date, to_input_value, DateError};
use crate::{
    Activity, ActivityPayload, ActivityStatus, ActivityType, LoginRequest, SignupRequest, Stop,
    StopPayload, Trip, UpdateProfileRequest, User,
};
use std::collections::BTreeMap;

/// Field name to message. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Editing a field clears its message
    pub fn clear(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Same shape as `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.set("email", "Email is required");
    } else if !is_valid_email(email.trim()) {
        errors.set("email", "Please enter a valid email address");
    }
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.set(field, message);
    }
}

/// A trip holds at most `MAX_STOPS_PER_TRIP` stops
pub fn check_stop_capacity(existing: usize) -> Result<(), String> {
    if existing >= limits::MAX_STOPS_PER_TRIP {
        return Err(format!("A trip can have at most {} stops", limits::MAX_STOPS_PER_TRIP));
    }
    Ok(())
}

/// Parse a money input. Blank is zero; negative or non-numeric is an error.
pub fn parse_amount(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let amount = trimmed
        .parse::<f64>()
        .map_err(|_| "Please enter a valid number".to_string())?;
    if !amount.is_finite() || amount < limits::MIN_BUDGET {
        return Err("Amount must be a positive number".to_string());
    }
    if amount > limits::MAX_BUDGET {
        return Err(format!("Amount cannot exceed {}", limits::MAX_BUDGET));
    }
    Ok(amount)
}

fn format_amount_input(amount: f64) -> String {
    if amount == 0.0 {
        String::new()
    } else {
        amount.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.set("password", "Password is required");
        }
        errors
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub family_member: String,
    pub city: String,
    pub country: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "firstName", &self.first_name, "First name is required");
        require(&mut errors, "lastName", &self.last_name, "Last name is required");
        check_email(&mut errors, &self.email);
        require(&mut errors, "familyMember", &self.family_member, "Family member count is required");
        require(&mut errors, "city", &self.city, "City is required");
        require(&mut errors, "country", &self.country, "Country is required");

        if self.password.is_empty() {
            errors.set("password", "Password is required");
        } else if self.password.chars().count() < limits::PASSWORD_MIN_LENGTH {
            errors.set(
                "password",
                format!("Password must be at least {} characters", limits::PASSWORD_MIN_LENGTH),
            );
        }

        if self.confirm_password.is_empty() {
            errors.set("confirmPassword", "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.set("confirmPassword", "Passwords do not match");
        }
        errors
    }

    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            family_member: self.family_member.trim().to_string(),
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone(),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "firstName", &self.first_name, "First name is required");
        require(&mut errors, "lastName", &self.last_name, "Last name is required");
        check_email(&mut errors, &self.email);
        errors
    }

    pub fn to_request(&self) -> UpdateProfileRequest {
        UpdateProfileRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopForm {
    pub city: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub notes: String,
}

impl StopForm {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            city: stop.city.clone(),
            country: stop.country.clone(),
            start_date: to_input_value(stop.start_date),
            end_date: to_input_value(stop.end_date),
            budget: format_amount_input(stop.budget),
            notes: stop.notes.clone(),
        }
    }

    /// Nesting inside the trip is only checked when the trip is loaded
    pub fn validate(&self, trip: Option<&Trip>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "cityName", &self.city, "City name is required");

        let start = match parse_date(&self.start_date) {
            Ok(date) => Some(date),
            Err(DateError::Missing) => {
                errors.set("startDate", "Start date is required");
                None
            }
            Err(_) => {
                errors.set("startDate", "Enter a valid date");
                None
            }
        };
        let end = match parse_date(&self.end_date) {
            Ok(date) => Some(date),
            Err(DateError::Missing) => {
                errors.set("endDate", "End date is required");
                None
            }
            Err(_) => {
                errors.set("endDate", "Enter a valid date");
                None
            }
        };

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.set("endDate", "End date must be after start date");
            }
            if let Some(trip) = trip {
                if !within_trip(trip, start, end) {
                    errors.set("startDate", "Dates must be within trip dates");
                }
            }
        }

        if let Err(message) = parse_amount(&self.budget) {
            errors.set("budget", message);
        }
        errors
    }

    pub fn to_payload(&self, trip: Option<&Trip>, order: Option<u32>) -> Result<StopPayload, ValidationErrors> {
        let errors = self.validate(trip);
        if !errors.is_empty() {
            return Err(errors);
        }
        // Validation above guarantees these parse.
        let (Ok(start_date), Ok(end_date), Ok(budget)) = (
            parse_date(&self.start_date),
            parse_date(&self.end_date),
            parse_amount(&self.budget),
        ) else {
            return Err(errors);
        };
        Ok(StopPayload {
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
            start_date,
            end_date,
            budget,
            notes: self.notes.trim().to_string(),
            order,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub name: String,
    pub activity_type: ActivityType,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub cost: String,
    pub status: ActivityStatus,
    pub notes: String,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            activity_type: ActivityType::Sightseeing,
            date: String::new(),
            time: String::new(),
            duration: String::new(),
            cost: String::new(),
            status: ActivityStatus::Planned,
            notes: String::new(),
        }
    }
}

impl ActivityForm {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            activity_type: activity.activity_type,
            date: activity.date.map(to_input_value).unwrap_or_default(),
            time: activity.time.clone().unwrap_or_default(),
            duration: activity.duration.map(|d| d.to_string()).unwrap_or_default(),
            cost: format_amount_input(activity.cost),
            status: activity.status,
            notes: activity.notes.clone(),
        }
    }

    fn parse_duration(&self) -> Result<Option<u32>, String> {
        let trimmed = self.duration.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let minutes = trimmed
            .parse::<u32>()
            .map_err(|_| "Duration must be a whole number of minutes".to_string())?;
        if !(limits::ACTIVITY_DURATION_MIN..=limits::ACTIVITY_DURATION_MAX).contains(&minutes) {
            return Err(format!(
                "Duration must be between {} and {} minutes",
                limits::ACTIVITY_DURATION_MIN,
                limits::ACTIVITY_DURATION_MAX
            ));
        }
        Ok(Some(minutes))
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "name", &self.name, "Activity name is required");
        if parse_optional_date(&self.date).is_err() {
            errors.set("date", "Enter a valid date");
        }
        if let Err(message) = self.parse_duration() {
            errors.set("duration", message);
        }
        if let Err(message) = parse_amount(&self.cost) {
            errors.set("cost", message);
        }
        errors
    }

    pub fn to_payload(&self) -> Result<ActivityPayload, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let (Ok(date), Ok(duration), Ok(cost)) = (
            parse_optional_date(&self.date),
            self.parse_duration(),
            parse_amount(&self.cost),
        ) else {
            return Err(errors);
        };
        let time = Some(self.time.trim().to_string()).filter(|t| !t.is_empty());
        Ok(ActivityPayload {
            name: self.name.trim().to_string(),
            activity_type: self.activity_type,
            date,
            time,
            duration,
            cost,
            status: self.status,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TripStyle;
    use chrono::NaiveDate;

    fn trip() -> Trip {
        Trip {
            id: "t1".to_string(),
            name: "Europe".to_string(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            budget: 0.0,
            cover_photo: None,
            style: TripStyle::default(),
            stops: Vec::new(),
            stops_count: None,
            activities_count: None,
            activities: Vec::new(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("demo@planora.app"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("demo@planora"));
        assert!(!is_valid_email("demo planora@x.io"));
        assert!(!is_valid_email("@x.io"));
        assert!(!is_valid_email("a@@x.io"));
        assert!(!is_valid_email("a@.io"));
        assert!(!is_valid_email("a@io."));
    }

    #[test]
    fn test_login_form() {
        let form = LoginForm::default();
        let errors = form.validate();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let form = LoginForm {
            email: "bad".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(form.validate().get("email"), Some("Please enter a valid email address"));

        let form = LoginForm {
            email: " demo@planora.app ".to_string(),
            password: "secret".to_string(),
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.to_request().email, "demo@planora.app");
    }

    #[test]
    fn test_signup_password_rules() {
        let mut form = SignupForm {
            first_name: "Ada".to_string(),
            last_name: "L".to_string(),
            email: "ada@x.io".to_string(),
            family_member: "2".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        assert_eq!(
            form.validate().get("password"),
            Some("Password must be at least 8 characters")
        );
        form.password = "longenough".to_string();
        assert_eq!(form.validate().get("confirmPassword"), Some("Passwords do not match"));
        form.confirm_password = "longenough".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = SignupForm::default().validate();
        let before = errors.len();
        assert!(errors.has("city"));
        errors.clear("city");
        assert!(!errors.has("city"));
        assert_eq!(errors.len(), before - 1);
    }

    #[test]
    fn test_stop_form_requires_fields() {
        let errors = StopForm::default().validate(None);
        assert_eq!(errors.get("cityName"), Some("City name is required"));
        assert_eq!(errors.get("startDate"), Some("Start date is required"));
        assert_eq!(errors.get("endDate"), Some("End date is required"));
    }

    #[test]
    fn test_stop_form_date_rules() {
        let trip = trip();
        let mut form = StopForm {
            city: "Paris".to_string(),
            start_date: "2026-01-05".to_string(),
            end_date: "2026-01-03".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(Some(&trip)).get("endDate"),
            Some("End date must be after start date")
        );

        form.end_date = "2026-01-20".to_string();
        assert_eq!(
            form.validate(Some(&trip)).get("startDate"),
            Some("Dates must be within trip dates")
        );
        // Without the trip loaded nesting is not checked.
        assert!(form.validate(None).is_empty());

        form.end_date = "2026-01-15".to_string();
        form.budget = "1200.50".to_string();
        let payload = form.to_payload(Some(&trip), Some(3)).unwrap();
        assert_eq!(payload.budget, 1200.5);
        assert_eq!(payload.order, Some(3));
    }

    #[test]
    fn test_stop_form_rejects_negative_budget() {
        let form = StopForm {
            city: "Paris".to_string(),
            start_date: "2026-01-05".to_string(),
            end_date: "2026-01-06".to_string(),
            budget: "-5".to_string(),
            ..Default::default()
        };
        assert!(form.validate(None).has("budget"));
        assert!(form.to_payload(None, None).is_err());
    }

    #[test]
    fn test_stop_form_round_trips_existing_stop() {
        let stop = Stop {
            id: "s1".to_string(),
            city: "Berlin".to_string(),
            country: "Germany".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            budget: 1800.0,
            notes: "Museums".to_string(),
            order: 3,
            activities: Vec::new(),
        };
        let form = StopForm::from_stop(&stop);
        assert_eq!(form.start_date, "2026-01-09");
        assert_eq!(form.budget, "1800");
        let payload = form.to_payload(Some(&trip()), None).unwrap();
        assert_eq!(payload.city, "Berlin");
        assert_eq!(payload.end_date, stop.end_date);
    }

    #[test]
    fn test_activity_form() {
        let mut form = ActivityForm::default();
        assert_eq!(form.validate().get("name"), Some("Activity name is required"));

        form.name = "Louvre".to_string();
        form.duration = "5".to_string();
        assert!(form.validate().has("duration"));

        form.duration = "120".to_string();
        form.cost = "17".to_string();
        form.time = "10:00".to_string();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.duration, Some(120));
        assert_eq!(payload.cost, 17.0);
        assert_eq!(payload.time.as_deref(), Some("10:00"));
        assert_eq!(payload.date, None);
    }

    #[test]
    fn test_activity_duration_bounds_are_inclusive() {
        let mut form = ActivityForm {
            name: "Hike".to_string(),
            ..Default::default()
        };
        for minutes in ["15", "1440"] {
            form.duration = minutes.to_string();
            assert!(!form.validate().has("duration"), "{}", minutes);
        }
        for minutes in ["14", "1441"] {
            form.duration = minutes.to_string();
            assert!(form.validate().has("duration"), "{}", minutes);
        }
    }

    #[test]
    fn test_stop_capacity() {
        assert!(check_stop_capacity(0).is_ok());
        assert!(check_stop_capacity(49).is_ok());
        assert_eq!(check_stop_capacity(50), Err("A trip can have at most 50 stops".to_string()));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Ok(0.0));
        assert_eq!(parse_amount("42.5"), Ok(42.5));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("2000000").is_err());
        assert_eq!(parse_amount("1000000"), Ok(1_000_000.0));
        assert!(parse_amount("1000000.01").is_err());
    }
}
