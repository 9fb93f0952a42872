use gloo::timers::callback::Timeout;
use shared::config::ALERT_DISMISS_MS;
use shared::Severity;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

pub struct UseAlertResult {
    pub alert: Option<Alert>,
    pub actions: AlertActions,
}

#[derive(Clone, PartialEq)]
pub struct AlertActions {
    pub show: Callback<Alert>,
    pub dismiss: Callback<()>,
}

/// Inline banner state. Success banners clear themselves after a few seconds.
#[hook]
pub fn use_alert() -> UseAlertResult {
    let alert = use_state(|| Option::<Alert>::None);
    // Bumped on every show so a stale timeout cannot clear a newer banner
    let generation = use_mut_ref(|| 0u32);

    let show = {
        let alert = alert.clone();
        let generation = generation.clone();
        use_callback((), move |next: Alert, _| {
            *generation.borrow_mut() += 1;
            let shown = *generation.borrow();
            if next.severity == Severity::Success {
                let alert = alert.clone();
                let generation = generation.clone();
                Timeout::new(ALERT_DISMISS_MS, move || {
                    if *generation.borrow() == shown {
                        alert.set(None);
                    }
                })
                .forget();
            }
            alert.set(Some(next));
        })
    };

    let dismiss = {
        let alert = alert.clone();
        use_callback((), move |_: (), _| alert.set(None))
    };

    UseAlertResult {
        alert: (*alert).clone(),
        actions: AlertActions { show, dismiss },
    }
}
