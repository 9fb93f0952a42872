use shared::demo::demo_session;
use shared::validation::LoginForm;
use shared::{Route, ValidationErrors};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::input_field::InputField;
use crate::hooks::use_alert::{use_alert, Alert};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::router::navigate;
use crate::services::storage::Session;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(LoginForm::default);
    let errors = use_state(ValidationErrors::new);
    let submitting = use_state(|| false);
    let alert = use_alert();

    let edit = |field: &'static str, apply: fn(&mut LoginForm, String)| {
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
        let submitting = submitting.clone();
        let alerts = alert.actions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            alerts.dismiss.emit(());
            let invalid = form.validate();
            if !invalid.is_empty() {
                errors.set(invalid);
                return;
            }

            let request = form.to_request();
            let submitting = submitting.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                submitting.set(true);
                let session = match ApiClient::new().login(&request).await {
                    Ok(auth) => Some(auth),
                    Err(e) if e.is_network() => {
                        Logger::warn_with_component("login", &format!("Auth API unreachable, starting demo session: {}", e));
                        Some(demo_session())
                    }
                    Err(e) => {
                        alerts.show.emit(Alert::error(e.to_string()));
                        None
                    }
                };
                submitting.set(false);

                if let Some(auth) = session {
                    match Session::start(&auth) {
                        Ok(()) => navigate(&Route::Dashboard),
                        Err(e) => {
                            Logger::error_with_component("login", &format!("Failed to store session: {}", e));
                            alerts.show.emit(Alert::error("Could not save your session in this browser"));
                        }
                    }
                }
            });
        })
    };

    let error = |field: &str| errors.get(field).map(str::to_string);
    let to_signup = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate(&Route::Signup);
    });

    html! {
        <div class="auth-page">
            <div class="auth-brand-panel">
                <h1 class="brand-title">{"PLANORA"}</h1>
                <p class="brand-tagline">{"Design your journey"}</p>
                <ul class="brand-features">
                    <li>{"Multi-city trip planning"}</li>
                    <li>{"Day-by-day itineraries"}</li>
                    <li>{"Budget tracking"}</li>
                </ul>
            </div>
            <div class="auth-form-panel">
                <h2>{"Welcome back"}</h2>
                <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
                <form class="auth-form" onsubmit={on_submit}>
                    <InputField label="Email" name="email" input_type="email" value={form.email.clone()}
                        placeholder="you@example.com" required=true error={error("email")}
                        on_input={edit("email", |f, v| f.email = v)} />
                    <InputField label="Password" name="password" input_type="password" value={form.password.clone()}
                        required=true error={error("password")}
                        on_input={edit("password", |f, v| f.password = v)} />
                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        {if *submitting { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    {"Don't have an account? "}
                    <a href="/signup" onclick={to_signup}>{"Sign up"}</a>
                </p>
            </div>
        </div>
    }
}
