use shared::validation::SignupForm;
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

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let form = use_state(SignupForm::default);
    let errors = use_state(ValidationErrors::new);
    let submitting = use_state(|| false);
    let alert = use_alert();

    let edit = |field: &'static str, apply: fn(&mut SignupForm, String)| {
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
                match ApiClient::new().signup(&request).await {
                    Ok(auth) => match Session::start(&auth) {
                        Ok(()) => navigate(&Route::Dashboard),
                        Err(e) => {
                            Logger::error_with_component("signup", &format!("Failed to store session: {}", e));
                            alerts.show.emit(Alert::error("Could not save your session in this browser"));
                        }
                    },
                    Err(e) => {
                        Logger::error_with_component("signup", &format!("Signup failed: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let error = |field: &str| errors.get(field).map(str::to_string);
    let to_login = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate(&Route::Login);
    });

    html! {
        <div class="auth-page">
            <div class="auth-brand-panel">
                <h1 class="brand-title">{"PLANORA"}</h1>
                <p class="brand-tagline">{"Start planning your next adventure"}</p>
            </div>
            <div class="auth-form-panel">
                <h2>{"Create your account"}</h2>
                <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <InputField label="First name" name="firstName" value={form.first_name.clone()} required=true
                            error={error("firstName")} on_input={edit("firstName", |f, v| f.first_name = v)} />
                        <InputField label="Last name" name="lastName" value={form.last_name.clone()} required=true
                            error={error("lastName")} on_input={edit("lastName", |f, v| f.last_name = v)} />
                    </div>
                    <InputField label="Email" name="email" input_type="email" value={form.email.clone()} required=true
                        error={error("email")} on_input={edit("email", |f, v| f.email = v)} />
                    <InputField label="Family Members" name="familyMember" value={form.family_member.clone()}
                        placeholder="Number of family members" required=true
                        error={error("familyMember")} on_input={edit("familyMember", |f, v| f.family_member = v)} />
                    <div class="form-row">
                        <InputField label="City" name="city" value={form.city.clone()} required=true
                            error={error("city")} on_input={edit("city", |f, v| f.city = v)} />
                        <InputField label="Country" name="country" value={form.country.clone()} required=true
                            error={error("country")} on_input={edit("country", |f, v| f.country = v)} />
                    </div>
                    <InputField label="Password" name="password" input_type="password" value={form.password.clone()}
                        required=true error={error("password")} on_input={edit("password", |f, v| f.password = v)} />
                    <InputField label="Confirm password" name="confirmPassword" input_type="password"
                        value={form.confirm_password.clone()} required=true error={error("confirmPassword")}
                        on_input={edit("confirmPassword", |f, v| f.confirm_password = v)} />
                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        {if *submitting { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-switch">
                    {"Already have an account? "}
                    <a href="/login" onclick={to_login}>{"Sign in"}</a>
                </p>
            </div>
        </div>
    }
}
