use shared::validation::ProfileForm;
use shared::ValidationErrors;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::input_field::InputField;
use crate::hooks::use_alert::{use_alert, Alert};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage::{apply_theme, Session};

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let form = use_state(|| Session::user().as_ref().map(ProfileForm::from_user).unwrap_or_default());
    let errors = use_state(ValidationErrors::new);
    let saving = use_state(|| false);
    let theme = use_state(Session::theme);
    let alert = use_alert();

    // Refresh from the API; the stored copy may be stale
    {
        let form = form.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().get_profile().await {
                    Ok(user) => {
                        if let Err(e) = Session::set_user(&user) {
                            Logger::warn_with_component("settings", &format!("Failed to cache profile: {}", e));
                        }
                        form.set(ProfileForm::from_user(&user));
                    }
                    Err(e) => Logger::warn_with_component("settings", &format!("Failed to load profile: {}", e)),
                }
            });
            || ()
        });
    }

    let edit = |field: &'static str, apply: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
            let mut cleared = (*errors).clone();
            cleared.clear(field);
            errors.set(cleared);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let alerts = alert.actions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let invalid = form.validate();
            if !invalid.is_empty() {
                errors.set(invalid);
                return;
            }
            let request = form.to_request();
            let saving = saving.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                saving.set(true);
                match ApiClient::new().update_profile(&request).await {
                    Ok(user) => {
                        if let Err(e) = Session::set_user(&user) {
                            Logger::warn_with_component("settings", &format!("Failed to cache profile: {}", e));
                        }
                        alerts.show.emit(Alert::success("Profile updated successfully"));
                    }
                    Err(e) => {
                        Logger::error_with_component("settings", &format!("Failed to update profile: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        let alerts = alert.actions.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            apply_theme(next);
            if let Err(e) = Session::set_theme(next) {
                Logger::warn_with_component("settings", &format!("Failed to store theme: {}", e));
                alerts.show.emit(Alert::error("Theme will reset on your next visit"));
            }
            theme.set(next);
        })
    };

    let error = |field: &str| errors.get(field).map(str::to_string);

    html! {
        <div class="settings-page">
            <h1>{"Settings"}</h1>
            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />

            <section class="settings-section">
                <h2>{"Profile"}</h2>
                <form onsubmit={on_submit}>
                    <div class="form-row">
                        <InputField label="First name" name="firstName" value={form.first_name.clone()} required=true
                            error={error("firstName")} on_input={edit("firstName", |f, v| f.first_name = v)} />
                        <InputField label="Last name" name="lastName" value={form.last_name.clone()} required=true
                            error={error("lastName")} on_input={edit("lastName", |f, v| f.last_name = v)} />
                    </div>
                    <InputField label="Email" name="email" input_type="email" value={form.email.clone()} required=true
                        error={error("email")} on_input={edit("email", |f, v| f.email = v)} />
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        {if *saving { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>

            <section class="settings-section">
                <h2>{"Appearance"}</h2>
                <div class="setting-row">
                    <span>{format!("Theme: {}", theme.value())}</span>
                    <button class="btn btn-secondary" onclick={on_toggle_theme}>
                        {format!("Switch to {}", theme.toggled().value())}
                    </button>
                </div>
            </section>
        </div>
    }
}
