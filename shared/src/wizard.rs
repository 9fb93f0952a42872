//! Four-step trip creation wizard: Info -> Style -> Dates -> Budget.
//!
//! Moving forward requires the active step to validate. Moving back is
//! always allowed.

use crate::config::limits;
use crate::dates::{duration_label, parse_date, parse_optional_date};
use crate::validation::{parse_amount, ValidationErrors};
use crate::{BudgetLevel, Companion, CreateTripRequest, Pace};
use chrono::{Duration, NaiveDate};

pub const DEFAULT_DESCRIPTION: &str = "No description provided";
pub const DEFAULT_TRAVEL_STYLE: &str = "Adventure";
pub const DEFAULT_BUDGET: f64 = 1000.0;
pub const DEFAULT_TRIP_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Info,
    Style,
    Dates,
    Budget,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Info,
        WizardStep::Style,
        WizardStep::Dates,
        WizardStep::Budget,
    ];

    /// 1-based position shown in the progress bar
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Info => 1,
            WizardStep::Style => 2,
            WizardStep::Dates => 3,
            WizardStep::Budget => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Info => "Trip Info",
            WizardStep::Style => "Travel Style",
            WizardStep::Dates => "Dates",
            WizardStep::Budget => "Budget",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Info => Some(WizardStep::Style),
            WizardStep::Style => Some(WizardStep::Dates),
            WizardStep::Dates => Some(WizardStep::Budget),
            WizardStep::Budget => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Info => None,
            WizardStep::Style => Some(WizardStep::Info),
            WizardStep::Dates => Some(WizardStep::Style),
            WizardStep::Budget => Some(WizardStep::Dates),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// Raw wizard inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripDraft {
    pub name: String,
    pub description: String,
    /// Data URL of the uploaded cover image
    pub cover_photo: Option<String>,
    pub travel_style: String,
    pub companion: Option<Companion>,
    pub budget_level: Option<BudgetLevel>,
    pub pace: Option<Pace>,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
}

impl TripDraft {
    /// "8 days" once both dates parse, empty otherwise
    pub fn duration_label(&self) -> String {
        match (parse_date(&self.start_date), parse_date(&self.end_date)) {
            (Ok(start), Ok(end)) => duration_label(start, end),
            _ => String::new(),
        }
    }
}

/// Reject cover images over the upload limit
pub fn check_cover_photo_size(bytes: u64) -> Result<(), String> {
    if bytes > limits::COVER_PHOTO_MAX_BYTES {
        Err("Image must be less than 5MB".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_step(step: WizardStep, draft: &TripDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match step {
        WizardStep::Info => {
            let name = draft.name.trim();
            if name.is_empty() {
                errors.set("name", "Trip name is required");
            } else if name.chars().count() < limits::TRIP_NAME_MIN_LENGTH {
                errors.set("name", "Trip name must be at least 2 characters");
            } else if name.chars().count() > limits::TRIP_NAME_MAX_LENGTH {
                errors.set(
                    "name",
                    format!("Trip name must be at most {} characters", limits::TRIP_NAME_MAX_LENGTH),
                );
            }
        }
        WizardStep::Style => {}
        WizardStep::Dates => {
            let start = parse_optional_date(&draft.start_date);
            let end = parse_optional_date(&draft.end_date);
            if start.is_err() {
                errors.set("startDate", "Enter a valid date");
            }
            if end.is_err() {
                errors.set("endDate", "Enter a valid date");
            }
            if let (Ok(Some(start)), Ok(Some(end))) = (start, end) {
                if end < start {
                    errors.set("endDate", "End date must be after start date");
                }
            }
        }
        WizardStep::Budget => {
            if parse_amount(&draft.budget).is_err() {
                errors.set("budget", "Budget must be a positive number");
            }
        }
    }
    errors
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripWizard {
    pub step: WizardStep,
    pub draft: TripDraft,
    pub errors: ValidationErrors,
}

impl Default for TripWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TripWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Info,
            draft: TripDraft::default(),
            errors: ValidationErrors::new(),
        }
    }

    /// Validate the active step and advance when it passes. Returns whether
    /// the step was valid; on the last step a valid call stays put.
    pub fn next(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.draft);
        if !self.errors.is_empty() {
            return false;
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        true
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Apply an edit and clear that field's error
    pub fn edit(&mut self, field: &'static str, apply: impl FnOnce(&mut TripDraft)) {
        apply(&mut self.draft);
        self.errors.clear(field);
    }

    /// Build the create request. Only the name is mandatory; every step is
    /// re-checked and the wizard jumps back to the first failing one.
    pub fn submit(&mut self, today: NaiveDate) -> Result<CreateTripRequest, ValidationErrors> {
        for step in WizardStep::ALL {
            let errors = validate_step(step, &self.draft);
            if !errors.is_empty() {
                self.step = step;
                self.errors = errors.clone();
                return Err(errors);
            }
        }
        self.errors = ValidationErrors::new();

        let draft = &self.draft;
        let start_date = parse_optional_date(&draft.start_date).ok().flatten().unwrap_or(today);
        let end_date = parse_optional_date(&draft.end_date)
            .ok()
            .flatten()
            .unwrap_or(start_date + Duration::days(DEFAULT_TRIP_DAYS));
        let budget = match draft.budget.trim() {
            "" => DEFAULT_BUDGET,
            _ => parse_amount(&draft.budget).unwrap_or(DEFAULT_BUDGET),
        };
        let description = match draft.description.trim() {
            "" => DEFAULT_DESCRIPTION.to_string(),
            text => text.to_string(),
        };
        let travel_style = match draft.travel_style.trim() {
            "" => DEFAULT_TRAVEL_STYLE.to_string(),
            style => style.to_string(),
        };

        Ok(CreateTripRequest {
            name: draft.name.trim().to_string(),
            description,
            start_date,
            end_date,
            travel_style,
            companion: draft.companion.unwrap_or(Companion::Solo),
            budget_level: draft.budget_level,
            pace: draft.pace.unwrap_or(Pace::Moderate),
            budget,
            cover_photo: draft.cover_photo.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_blocks_on_invalid_info() {
        let mut wizard = TripWizard::new();
        assert!(!wizard.next());
        assert_eq!(wizard.step, WizardStep::Info);
        assert_eq!(wizard.errors.get("name"), Some("Trip name is required"));

        wizard.edit("name", |d| d.name = "X".to_string());
        assert!(wizard.errors.is_empty());
        assert!(!wizard.next());
        assert_eq!(wizard.errors.get("name"), Some("Trip name must be at least 2 characters"));
    }

    #[test]
    fn test_advances_through_all_steps() {
        let mut wizard = TripWizard::new();
        wizard.draft.name = "Japan".to_string();
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Style);
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Dates);
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Budget);
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Budget);
    }

    #[test]
    fn test_dates_step_rejects_reversed_range() {
        let mut wizard = TripWizard::new();
        wizard.step = WizardStep::Dates;
        wizard.draft.start_date = "2026-11-10".to_string();
        wizard.draft.end_date = "2026-11-01".to_string();
        assert!(!wizard.next());
        assert_eq!(wizard.step, WizardStep::Dates);
        assert_eq!(wizard.errors.get("endDate"), Some("End date must be after start date"));

        // Only one date given is fine.
        wizard.draft.end_date.clear();
        assert!(wizard.next());
        assert_eq!(wizard.step, WizardStep::Budget);
    }

    #[test]
    fn test_budget_step_rejects_negative() {
        let mut wizard = TripWizard::new();
        wizard.step = WizardStep::Budget;
        wizard.draft.budget = "-10".to_string();
        assert!(!wizard.next());
        assert!(wizard.errors.has("budget"));
    }

    #[test]
    fn test_budget_step_upper_limit() {
        let mut wizard = TripWizard::new();
        wizard.step = WizardStep::Budget;
        wizard.draft.budget = "1000000".to_string();
        assert!(wizard.next());
        assert!(wizard.errors.is_empty());

        wizard.draft.budget = "1000000.01".to_string();
        assert!(!wizard.next());
        assert!(wizard.errors.has("budget"));
        assert_eq!(wizard.step, WizardStep::Budget);
    }

    #[test]
    fn test_back_is_unconditional() {
        let mut wizard = TripWizard::new();
        wizard.step = WizardStep::Dates;
        wizard.draft.start_date = "garbage".to_string();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Style);
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Info);
    }

    #[test]
    fn test_submit_applies_defaults() {
        let mut wizard = TripWizard::new();
        wizard.draft.name = "  Bali Getaway ".to_string();
        let request = wizard.submit(today()).unwrap();
        assert_eq!(request.name, "Bali Getaway");
        assert_eq!(request.description, DEFAULT_DESCRIPTION);
        assert_eq!(request.start_date, today());
        assert_eq!(request.end_date, today() + Duration::days(7));
        assert_eq!(request.travel_style, "Adventure");
        assert_eq!(request.companion, Companion::Solo);
        assert_eq!(request.pace, Pace::Moderate);
        assert_eq!(request.budget, 1000.0);
    }

    #[test]
    fn test_submit_without_name_returns_to_info() {
        let mut wizard = TripWizard::new();
        wizard.step = WizardStep::Budget;
        assert!(wizard.submit(today()).is_err());
        assert_eq!(wizard.step, WizardStep::Info);
        assert!(wizard.errors.has("name"));
    }

    #[test]
    fn test_submit_keeps_given_values() {
        let mut wizard = TripWizard::new();
        wizard.draft = TripDraft {
            name: "Alps".to_string(),
            start_date: "2026-12-01".to_string(),
            budget: "2500".to_string(),
            companion: Some(Companion::Family),
            ..Default::default()
        };
        let request = wizard.submit(today()).unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2026, 12, 8).unwrap());
        assert_eq!(request.budget, 2500.0);
        assert_eq!(request.companion, Companion::Family);
    }

    #[test]
    fn test_duration_label_and_photo_limit() {
        let draft = TripDraft {
            start_date: "2026-03-20".to_string(),
            end_date: "2026-04-05".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.duration_label(), "17 days");
        assert_eq!(TripDraft::default().duration_label(), "");
        assert!(check_cover_photo_size(1024).is_ok());
        assert!(check_cover_photo_size(6 * 1024 * 1024).is_err());
    }
}
