use shared::dates::{format_range, format_short, format_time};
use shared::{Activity, ActivityStatus, Route};
use yew::prelude::*;

use crate::components::activity_form_modal::ActivityFormModal;
use crate::components::alert_banner::AlertBanner;
use crate::hooks::use_activities::use_activities;
use crate::hooks::use_alert::use_alert;
use crate::services::api::ApiClient;
use crate::services::router::navigate;

#[derive(Properties, PartialEq)]
pub struct ActivitiesPageProps {
    pub trip_id: AttrValue,
    pub stop_id: AttrValue,
}

#[derive(Clone, PartialEq)]
enum ActivityModal {
    Closed,
    Open(Option<Activity>),
}

#[function_component(ActivitiesPage)]
pub fn activities_page(props: &ActivitiesPageProps) -> Html {
    let api_client = ApiClient::new();
    let alert = use_alert();
    let activities = use_activities(&api_client, &alert.actions, &props.trip_id, &props.stop_id);
    let modal = use_state(|| ActivityModal::Closed);

    let state = &activities.state;
    let actions = &activities.actions;
    let back = {
        let route = Route::TripStops {
            trip_id: props.trip_id.to_string(),
        };
        Callback::from(move |_: MouseEvent| navigate(&route))
    };

    if state.loading {
        return html! { <div class="loading">{"Loading activities..."}</div> };
    }
    if let Some(error) = state.error.as_ref() {
        return html! {
            <div class="page-error">
                <p>{error}</p>
                <button class="btn btn-secondary" onclick={back}>{"Back to Stops"}</button>
            </div>
        };
    }

    let open_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ActivityModal::Open(None)))
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(ActivityModal::Closed))
    };

    let rows = state.activities.iter().map(|activity| {
        let done = activity.status == ActivityStatus::Done;
        let on_toggle = {
            let id = activity.id.clone();
            actions.toggle_status.reform(move |_: Event| id.clone())
        };
        let on_edit = {
            let modal = modal.clone();
            let activity = activity.clone();
            Callback::from(move |_: MouseEvent| modal.set(ActivityModal::Open(Some(activity.clone()))))
        };
        let on_delete = {
            let id = activity.id.clone();
            actions.delete_activity.reform(move |_: MouseEvent| id.clone())
        };
        let when = [
            activity.date.map(format_short),
            activity.time.as_deref().map(format_time),
            activity.duration.map(|minutes| format!("{} min", minutes)),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

        html! {
            <div key={activity.id.clone()} class={classes!("activity-card", done.then_some("completed"))}>
                <input type="checkbox" checked={done} onchange={on_toggle} title={activity.status.to_string()} />
                <div class="activity-info">
                    <h3>{&activity.name}</h3>
                    <span class="badge">{activity.activity_type.label()}</span>
                    {if when.is_empty() { html! {} } else { html! { <p class="activity-when">{when}</p> } }}
                    {if let Some(location) = activity.location.as_ref() {
                        html! { <p class="activity-location">{location}</p> }
                    } else { html! {} }}
                    {if activity.notes.is_empty() { html! {} } else { html! { <p class="activity-notes">{&activity.notes}</p> } }}
                </div>
                <div class="activity-cost">{format!("${:.2}", activity.cost)}</div>
                <div class="activity-actions">
                    <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </div>
        }
    });

    let (is_open, editing) = match &*modal {
        ActivityModal::Closed => (false, None),
        ActivityModal::Open(editing) => (true, editing.clone()),
    };

    html! {
        <div class="activities-page">
            <div class="page-header">
                <div>
                    <button class="btn btn-link" onclick={back}>{"← Back to Stops"}</button>
                    {if let Some(stop) = state.stop.as_ref() {
                        html! {
                            <>
                                <h1>{format!("{}, {}", stop.city, stop.country)}</h1>
                                <p class="subtitle">{format_range(stop.start_date, stop.end_date)}</p>
                            </>
                        }
                    } else { html! {} }}
                </div>
                <button class="btn btn-primary" onclick={open_add}>{"+ Add Activity"}</button>
            </div>

            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />

            <div class="stops-summary">
                <span>{format!("{} activities", state.activities.len())}</span>
                <span>{format!("{} completed", state.completed())}</span>
                <span>{format!("${:.2} total", state.total_cost())}</span>
            </div>

            {if state.activities.is_empty() {
                html! { <div class="empty-state"><p>{"No activities planned for this stop yet."}</p></div> }
            } else {
                html! { <div class="activity-list">{for rows}</div> }
            }}

            <ActivityFormModal
                is_open={is_open}
                editing={editing}
                saving={state.saving}
                on_save={actions.save_activity.clone()}
                on_close={on_close}
            />
        </div>
    }
}
