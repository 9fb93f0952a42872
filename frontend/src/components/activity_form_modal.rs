use shared::validation::ActivityForm;
use shared::{Activity, ActivityStatus, ActivityType, ValidationErrors};
use yew::prelude::*;

use super::input_field::InputField;
use super::select_field::SelectField;
use crate::hooks::use_activities::SaveActivity;

#[derive(Properties, PartialEq)]
pub struct ActivityFormModalProps {
    pub is_open: bool,
    /// Activity being edited; `None` adds a new one
    pub editing: Option<Activity>,
    pub saving: bool,
    pub on_save: Callback<SaveActivity>,
    pub on_close: Callback<()>,
}

#[function_component(ActivityFormModal)]
pub fn activity_form_modal(props: &ActivityFormModalProps) -> Html {
    let form = use_state(ActivityForm::default);
    let errors = use_state(ValidationErrors::new);

    use_effect_with((props.is_open, props.editing.clone()), {
        let form = form.clone();
        let errors = errors.clone();
        move |(is_open, editing): &(bool, Option<Activity>)| {
            if *is_open {
                form.set(editing.as_ref().map(ActivityForm::from_activity).unwrap_or_default());
                errors.set(ValidationErrors::new());
            }
            || ()
        }
    });

    let edit = |field: &'static str, apply: fn(&mut ActivityForm, String)| {
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
        let editing = props.editing.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_payload() {
                Ok(payload) => on_save.emit(SaveActivity {
                    activity_id: editing.as_ref().map(|a| a.id.clone()),
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
    let type_options: Vec<(AttrValue, AttrValue)> = ActivityType::ALL
        .iter()
        .map(|t| (AttrValue::from(t.value()), AttrValue::from(t.label())))
        .collect();
    let status_options: Vec<(AttrValue, AttrValue)> = [ActivityStatus::Planned, ActivityStatus::Done]
        .iter()
        .map(|s| (AttrValue::from(s.to_string().to_lowercase()), AttrValue::from(s.to_string())))
        .collect();
    let title = if props.editing.is_some() { "Edit Activity" } else { "Add Activity" };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"×"}</button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    <InputField label="Activity name" name="name" value={form.name.clone()} required=true
                        error={error("name")} on_input={edit("name", |f, v| f.name = v)} />
                    <SelectField label="Type" name="type" value={form.activity_type.value()} options={type_options}
                        on_change={edit("type", |f, v| f.activity_type = ActivityType::from_value(&v))} />
                    <div class="form-row">
                        <InputField label="Date" name="date" input_type="date" value={form.date.clone()}
                            error={error("date")} on_input={edit("date", |f, v| f.date = v)} />
                        <InputField label="Time" name="time" input_type="time" value={form.time.clone()}
                            on_input={edit("time", |f, v| f.time = v)} />
                    </div>
                    <div class="form-row">
                        <InputField label="Duration (minutes)" name="duration" input_type="number" value={form.duration.clone()}
                            error={error("duration")} on_input={edit("duration", |f, v| f.duration = v)} />
                        <InputField label="Cost" name="cost" input_type="number" value={form.cost.clone()} placeholder="0"
                            error={error("cost")} on_input={edit("cost", |f, v| f.cost = v)} />
                    </div>
                    <SelectField label="Status" name="status" value={form.status.to_string().to_lowercase()} options={status_options}
                        on_change={edit("status", |f, v| {
                            f.status = if v == "done" { ActivityStatus::Done } else { ActivityStatus::Planned };
                        })} />
                    <InputField label="Notes" name="notes" multiline=true value={form.notes.clone()}
                        on_input={edit("notes", |f, v| f.notes = v)} />
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.saving}>
                            {if props.saving { "Saving..." } else { "Save Activity" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
