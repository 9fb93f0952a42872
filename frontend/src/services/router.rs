use gloo::history::{BrowserHistory, History};
use shared::Route;

use super::logging::Logger;

pub fn current_path() -> String {
    BrowserHistory::new().location().path().to_string()
}

/// Push a new history entry for `route`
pub fn navigate(route: &Route) {
    Logger::debug_with_component("router", &format!("navigate to {}", route.to_path()));
    BrowserHistory::new().push(route.to_path());
}

/// Swap the current entry, used by the auth guards
pub fn redirect(route: &Route) {
    BrowserHistory::new().replace(route.to_path());
}
