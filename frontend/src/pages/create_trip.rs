use gloo::file::callbacks::{read_as_data_url, FileReader};
use gloo::file::File;
use gloo::timers::callback::Timeout;
use shared::config::{BUDGET_LEVEL_OPTIONS, COMPANION_OPTIONS, CREATE_REDIRECT_MS, PACE_OPTIONS};
use shared::wizard::{check_cover_photo_size, TripDraft};
use shared::{BudgetLevel, Companion, Pace, Route, TripWizard, WizardStep};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::input_field::InputField;
use crate::hooks::use_alert::{use_alert, Alert};
use crate::services::api::ApiClient;
use crate::services::date_utils::{today, today_string};
use crate::services::logging::Logger;
use crate::services::router::{navigate, redirect};

fn option_buttons<T: Copy + PartialEq + 'static>(
    options: &[(T, &'static str, &'static str)],
    selected: Option<T>,
    on_pick: Callback<T>,
) -> Html {
    html! {
        <div class="option-grid">
            {for options.iter().map(|(value, key, label)| {
                let value = *value;
                let class = classes!("option-button", (selected == Some(value)).then_some("selected"));
                html! {
                    <button type="button" key={*key} class={class} onclick={on_pick.reform(move |_: MouseEvent| value)}>
                        {*label}
                    </button>
                }
            })}
        </div>
    }
}

fn pick<T: 'static>(
    wizard: &UseStateHandle<TripWizard>,
    field: &'static str,
    apply: fn(&mut TripDraft, T),
) -> Callback<T> {
    let wizard = wizard.clone();
    Callback::from(move |value: T| {
        let mut next = (*wizard).clone();
        next.edit(field, |draft| apply(draft, value));
        wizard.set(next);
    })
}

#[function_component(CreateTripPage)]
pub fn create_trip_page() -> Html {
    let wizard = use_state(TripWizard::new);
    let cover_photo = use_state(|| Option::<String>::None);
    let cover_error = use_state(|| Option::<String>::None);
    let reader = use_mut_ref(|| Option::<FileReader>::None);
    let submitting = use_state(|| false);
    let alert = use_alert();

    let edit = |field: &'static str, apply: fn(&mut TripDraft, String)| {
        let wizard = wizard.clone();
        Callback::from(move |value: String| {
            let mut next = (*wizard).clone();
            next.edit(field, |draft| apply(draft, value));
            wizard.set(next);
        })
    };

    let on_cover = {
        let cover_photo = cover_photo.clone();
        let cover_error = cover_error.clone();
        let reader = reader.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = File::from(file);
            if let Err(message) = check_cover_photo_size(file.size()) {
                cover_error.set(Some(message));
                return;
            }
            cover_error.set(None);

            let cover_photo = cover_photo.clone();
            let cover_error = cover_error.clone();
            let task = read_as_data_url(&file, move |result| match result {
                Ok(data_url) => cover_photo.set(Some(data_url)),
                Err(e) => {
                    Logger::error_with_component("create_trip", &format!("Failed to read cover photo: {}", e));
                    cover_error.set(Some("Could not read that image".to_string()));
                }
            });
            *reader.borrow_mut() = Some(task);
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.next();
            wizard.set(next);
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            wizard.set(next);
        })
    };

    let on_submit = {
        let wizard = wizard.clone();
        let cover_photo = cover_photo.clone();
        let submitting = submitting.clone();
        let alerts = alert.actions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            if !next.step.is_last() {
                next.next();
                wizard.set(next);
                return;
            }

            next.draft.cover_photo = (*cover_photo).clone();
            let request = next.submit(today());
            wizard.set(next);
            let Ok(request) = request else {
                return;
            };

            let submitting = submitting.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                submitting.set(true);
                match ApiClient::new().create_trip(&request).await {
                    Ok(trip) => {
                        Logger::info_with_component("create_trip", &format!("Created trip {}", trip.id));
                        alerts.show.emit(Alert::success("Trip created successfully! Redirecting..."));
                        Timeout::new(CREATE_REDIRECT_MS, || redirect(&Route::Dashboard)).forget();
                    }
                    Err(e) => {
                        Logger::error_with_component("create_trip", &format!("Failed to create trip: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let draft = &wizard.draft;
    let error = |field: &str| wizard.errors.get(field).map(str::to_string);

    let step_body = match wizard.step {
        WizardStep::Info => html! {
            <>
                <InputField label="Trip name" name="name" value={draft.name.clone()} required=true
                    placeholder="e.g. Summer in Europe" error={error("name")}
                    on_input={edit("name", |d, v| d.name = v)} />
                <InputField label="Description" name="description" multiline=true value={draft.description.clone()}
                    placeholder="What is this trip about?"
                    on_input={edit("description", |d, v| d.description = v)} />
                <div class="form-group">
                    <label for="coverPhoto">{"Cover photo"}</label>
                    <input id="coverPhoto" type="file" accept="image/*" onchange={on_cover} />
                    {if let Some(message) = cover_error.as_ref() {
                        html! { <span class="field-error">{message}</span> }
                    } else { html! {} }}
                    {if let Some(url) = cover_photo.as_ref() {
                        html! { <img class="cover-preview" src={url.clone()} alt="Cover preview" /> }
                    } else { html! {} }}
                </div>
            </>
        },
        WizardStep::Style => {
            let on_companion = pick(&wizard, "companion", |d, c: Companion| d.companion = Some(c));
            let on_budget_level = pick(&wizard, "budgetLevel", |d, b: BudgetLevel| d.budget_level = Some(b));
            let on_pace = pick(&wizard, "pace", |d, p: Pace| d.pace = Some(p));
            html! {
                <>
                    <InputField label="Travel style" name="travelStyle" value={draft.travel_style.clone()}
                        placeholder="Adventure, Relaxation, Culture..."
                        on_input={edit("travelStyle", |d, v| d.travel_style = v)} />
                    <div class="form-group">
                        <label>{"Who's travelling?"}</label>
                        {option_buttons(&COMPANION_OPTIONS, draft.companion, on_companion)}
                    </div>
                    <div class="form-group">
                        <label>{"Budget level"}</label>
                        {option_buttons(&BUDGET_LEVEL_OPTIONS, draft.budget_level, on_budget_level)}
                    </div>
                    <div class="form-group">
                        <label>{"Pace"}</label>
                        {option_buttons(&PACE_OPTIONS, draft.pace, on_pace)}
                    </div>
                </>
            }
        }
        WizardStep::Dates => {
            let duration = draft.duration_label();
            html! {
                <>
                    <div class="form-row">
                        <InputField label="Start date" name="startDate" input_type="date" value={draft.start_date.clone()}
                            min={today_string()} error={error("startDate")}
                            on_input={edit("startDate", |d, v| d.start_date = v)} />
                        <InputField label="End date" name="endDate" input_type="date" value={draft.end_date.clone()}
                            min={if draft.start_date.is_empty() { today_string() } else { draft.start_date.clone() }}
                            error={error("endDate")}
                            on_input={edit("endDate", |d, v| d.end_date = v)} />
                    </div>
                    {if duration.is_empty() {
                        html! { <p class="hint">{"Leave the dates empty to start today for a week."}</p> }
                    } else {
                        html! { <p class="duration-badge">{format!("Duration: {}", duration)}</p> }
                    }}
                </>
            }
        }
        WizardStep::Budget => html! {
            <>
                <InputField label="Total budget ($)" name="budget" input_type="number" value={draft.budget.clone()}
                    min="0" placeholder="1000" error={error("budget")}
                    on_input={edit("budget", |d, v| d.budget = v)} />
                <div class="trip-summary">
                    <h4>{"Summary"}</h4>
                    <p>{format!("Name: {}", draft.name.trim())}</p>
                    {if draft.duration_label().is_empty() { html! {} } else {
                        html! { <p>{format!("Duration: {}", draft.duration_label())}</p> }
                    }}
                </div>
            </>
        },
    };

    let on_cancel = Callback::from(|_: MouseEvent| navigate(&Route::Dashboard));

    html! {
        <div class="create-trip-page">
            <h1>{"Plan a New Trip"}</h1>
            <div class="wizard-progress">
                {for WizardStep::ALL.iter().map(|step| {
                    let class = classes!(
                        "wizard-step",
                        (*step == wizard.step).then_some("active"),
                        (*step < wizard.step).then_some("done")
                    );
                    html! {
                        <div class={class}>
                            <span class="wizard-step-number">{step.number()}</span>
                            <span class="wizard-step-label">{step.label()}</span>
                        </div>
                    }
                })}
            </div>
            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
            <form class="wizard-form" onsubmit={on_submit}>
                {step_body}
                <div class="wizard-actions">
                    {if wizard.step == WizardStep::Info {
                        html! { <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button> }
                    } else {
                        html! { <button type="button" class="btn btn-secondary" onclick={on_back}>{"Back"}</button> }
                    }}
                    {if wizard.step.is_last() {
                        html! {
                            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                                {if *submitting { "Creating..." } else { "Create Trip" }}
                            </button>
                        }
                    } else {
                        html! { <button type="button" class="btn btn-primary" onclick={on_next}>{"Next"}</button> }
                    }}
                </div>
            </form>
        </div>
    }
}
