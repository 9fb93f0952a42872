use shared::dates::to_input_value;
use shared::validation::StopForm;
use shared::{Stop, Trip, ValidationErrors};
use yew::prelude::*;

use super::input_field::InputField;
use crate::hooks::use_trip_stops::SaveStop;

#[derive(Properties, PartialEq)]
pub struct StopFormModalProps {
    pub is_open: bool,
    pub trip: Option<Trip>,
    /// Stop being edited; `None` adds a new one
    pub editing: Option<Stop>,
    pub next_order: u32,
    pub saving: bool,
    pub on_save: Callback<SaveStop>,
    pub on_close: Callback<()>,
}

#[function_component(StopFormModal)]
pub fn stop_form_modal(props: &StopFormModalProps) -> Html {
    let form = use_state(StopForm::default);
    let errors = use_state(ValidationErrors::new);

    // Reset the form whenever the modal opens
    use_effect_with((props.is_open, props.editing.clone()), {
        let form = form.clone();
        let errors = errors.clone();
        move |(is_open, editing): &(bool, Option<Stop>)| {
            if *is_open {
                form.set(editing.as_ref().map(StopForm::from_stop).unwrap_or_default());
                errors.set(ValidationErrors::new());
            }
            || ()
        }
    });

    let edit = |field: &'static str, apply: fn(&mut StopForm, String)| {
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
        let trip = props.trip.clone();
        let editing = props.editing.clone();
        let next_order = props.next_order;
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let order = if editing.is_some() { None } else { Some(next_order) };
            match form.to_payload(trip.as_ref(), order) {
                Ok(payload) => on_save.emit(SaveStop {
                    stop_id: editing.as_ref().map(|s| s.id.clone()),
                    payload,
                    on_saved: on_close.clone(),
                }),
                Err(invalid) => errors.set(invalid),
            }
        })
    };

    if !props.is_open {
        return html! {};
    }

    let error = |field: &str| errors.get(field).map(str::to_string);
    let (min, max) = match props.trip.as_ref() {
        Some(trip) => (
            Some(AttrValue::from(to_input_value(trip.start_date))),
            Some(AttrValue::from(to_input_value(trip.end_date))),
        ),
        None => (None, None),
    };
    let title = if props.editing.is_some() { "Edit Stop" } else { "Add Stop" };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"×"}</button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    <InputField label="City" name="cityName" value={form.city.clone()} required=true
                        error={error("cityName")} on_input={edit("cityName", |f, v| f.city = v)} />
                    <InputField label="Country" name="country" value={form.country.clone()}
                        on_input={edit("country", |f, v| f.country = v)} />
                    <div class="form-row">
                        <InputField label="Start date" name="startDate" input_type="date" value={form.start_date.clone()}
                            required=true min={min.clone()} max={max.clone()}
                            error={error("startDate")} on_input={edit("startDate", |f, v| f.start_date = v)} />
                        <InputField label="End date" name="endDate" input_type="date" value={form.end_date.clone()}
                            required=true min={min} max={max}
                            error={error("endDate")} on_input={edit("endDate", |f, v| f.end_date = v)} />
                    </div>
                    <InputField label="Budget" name="budget" input_type="number" value={form.budget.clone()}
                        placeholder="0" error={error("budget")} on_input={edit("budget", |f, v| f.budget = v)} />
                    <InputField label="Notes" name="notes" multiline=true value={form.notes.clone()}
                        on_input={edit("notes", |f, v| f.notes = v)} />
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.saving}>
                            {if props.saving { "Saving..." } else { "Save Stop" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
