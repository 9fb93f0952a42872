use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use shared::config::storage_keys;
use shared::{AuthResponse, User};

/// Colour scheme persisted across visits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Auth token and user profile kept in local storage
pub struct Session;

impl Session {
    pub fn token() -> Option<String> {
        LocalStorage::get::<String>(storage_keys::AUTH_TOKEN)
            .ok()
            .filter(|token| !token.is_empty())
    }

    pub fn has_token() -> bool {
        Self::token().is_some()
    }

    pub fn user() -> Option<User> {
        LocalStorage::get(storage_keys::USER_DATA).ok()
    }

    pub fn set_user(user: &User) -> Result<(), StorageError> {
        LocalStorage::set(storage_keys::USER_DATA, user)
    }

    /// Store the token and user from a successful login or signup
    pub fn start(auth: &AuthResponse) -> Result<(), StorageError> {
        LocalStorage::set(storage_keys::AUTH_TOKEN, &auth.token)?;
        Self::set_user(&auth.user)
    }

    pub fn clear() {
        LocalStorage::delete(storage_keys::AUTH_TOKEN);
        LocalStorage::delete(storage_keys::USER_DATA);
    }

    pub fn theme() -> Theme {
        LocalStorage::get::<String>(storage_keys::THEME_PREFERENCE)
            .map(|value| Theme::from_value(&value))
            .unwrap_or(Theme::Light)
    }

    pub fn set_theme(theme: Theme) -> Result<(), StorageError> {
        LocalStorage::set(storage_keys::THEME_PREFERENCE, theme.value())
    }
}

/// Reflect the theme on the document root for the stylesheet
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn auth() -> AuthResponse {
        AuthResponse {
            token: "tok-123".to_string(),
            user: User {
                id: "u1".to_string(),
                first_name: Some("Ada".to_string()),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
        }
    }

    #[wasm_bindgen_test]
    fn test_session_round_trip() {
        Session::clear();
        assert!(!Session::has_token());

        Session::start(&auth()).unwrap();
        assert_eq!(Session::token().as_deref(), Some("tok-123"));
        assert_eq!(Session::user().map(|u| u.display_name()), Some("Ada".to_string()));

        Session::clear();
        assert!(Session::token().is_none());
        assert!(Session::user().is_none());
    }

    #[wasm_bindgen_test]
    fn test_theme_defaults_to_light() {
        LocalStorage::delete(storage_keys::THEME_PREFERENCE);
        assert_eq!(Session::theme(), Theme::Light);
        Session::set_theme(Theme::Dark).unwrap();
        assert_eq!(Session::theme(), Theme::Dark);
        assert_eq!(Session::theme().toggled(), Theme::Light);
    }
}
