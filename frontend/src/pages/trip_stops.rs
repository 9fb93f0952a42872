use shared::conflicts::{total_stop_budget, total_stop_days};
use shared::dates::{duration_label, format_range};
use shared::demo::is_demo_id;
use shared::validation::{check_stop_capacity, parse_amount};
use shared::{RecommendedCity, Route, Stop, Trip, UpdateTripRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::input_field::InputField;
use crate::components::stop_form_modal::StopFormModal;
use crate::hooks::use_alert::{use_alert, Alert, AlertActions};
use crate::hooks::use_trip_stops::use_trip_stops;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::router::navigate;

#[derive(Properties, PartialEq)]
pub struct TripStopsPageProps {
    pub trip_id: AttrValue,
}

/// Modal state: closed, adding, or editing a stop
#[derive(Clone, PartialEq)]
enum StopModal {
    Closed,
    Open(Option<Stop>),
}

#[derive(Properties, PartialEq)]
struct TripDetailsFormProps {
    trip: Trip,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
    alerts: AlertActions,
}

/// Inline edit of the trip's name, description and budget
#[function_component(TripDetailsForm)]
fn trip_details_form(props: &TripDetailsFormProps) -> Html {
    let name = use_state(|| props.trip.name.clone());
    let description = use_state(|| props.trip.description.clone());
    let budget = use_state(|| format!("{:.2}", props.trip.budget));
    let error = use_state(|| Option::<String>::None);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };

    let on_submit = {
        let trip_id = props.trip.id.clone();
        let name = name.clone();
        let description = description.clone();
        let budget = budget.clone();
        let error = error.clone();
        let on_saved = props.on_saved.clone();
        let alerts = props.alerts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() {
                error.set(Some("Trip name is required".to_string()));
                return;
            }
            let budget = match parse_amount(&budget) {
                Ok(amount) => amount,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            let request = UpdateTripRequest {
                name: Some(name.trim().to_string()),
                description: Some(description.trim().to_string()),
                budget: Some(budget),
                ..Default::default()
            };

            let trip_id = trip_id.clone();
            let on_saved = on_saved.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                match ApiClient::new().update_trip(&trip_id, &request).await {
                    Ok(_) => {
                        alerts.show.emit(Alert::success("Trip updated successfully"));
                        on_saved.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("trip_stops", &format!("Failed to update trip: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <form class="trip-details-form" onsubmit={on_submit}>
            <InputField label="Trip name" name="tripName" value={(*name).clone()} required=true
                error={(*error).clone()} on_input={bind(&name)} />
            <InputField label="Description" name="tripDescription" multiline=true value={(*description).clone()}
                on_input={bind(&description)} />
            <InputField label="Budget ($)" name="tripBudget" input_type="number" min="0" value={(*budget).clone()}
                on_input={bind(&budget)} />
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" onclick={props.on_cancel.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary">{"Save Trip"}</button>
            </div>
        </form>
    }
}

#[function_component(TripStopsPage)]
pub fn trip_stops_page(props: &TripStopsPageProps) -> Html {
    let api_client = ApiClient::new();
    let alert = use_alert();
    let stops = use_trip_stops(&api_client, &alert.actions, &props.trip_id);
    let modal = use_state(|| StopModal::Closed);
    let share_url = use_state(|| Option::<String>::None);
    let recommended = use_state(Vec::<RecommendedCity>::new);
    let editing_trip = use_state(|| false);

    {
        let api_client = api_client.clone();
        let recommended = recommended.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_recommended_cities().await {
                    Ok(cities) => recommended.set(cities),
                    Err(e) => Logger::debug_with_component("trip_stops", &format!("No city recommendations: {}", e)),
                }
            });
            || ()
        });
    }

    let on_share = {
        let trip_id = props.trip_id.to_string();
        let share_url = share_url.clone();
        let alerts = alert.actions.clone();
        Callback::from(move |_: MouseEvent| {
            if is_demo_id(&trip_id) {
                alerts.show.emit(Alert::info("Sample trips cannot be shared"));
                return;
            }
            let api_client = api_client.clone();
            let trip_id = trip_id.clone();
            let share_url = share_url.clone();
            let alerts = alerts.clone();
            spawn_local(async move {
                match api_client.share_trip(&trip_id).await {
                    Ok(token) => {
                        let origin = gloo::utils::window().location().origin().unwrap_or_default();
                        share_url.set(Some(format!("{}{}", origin, Route::SharedTrip { token }.to_path())));
                        alerts.show.emit(Alert::success("Share link created"));
                    }
                    Err(e) => {
                        Logger::error_with_component("trip_stops", &format!("Failed to share trip: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
            });
        })
    };

    let open_add = {
        let modal = modal.clone();
        let alerts = alert.actions.clone();
        let existing = stops.state.stops.len();
        Callback::from(move |_: MouseEvent| match check_stop_capacity(existing) {
            Ok(()) => modal.set(StopModal::Open(None)),
            Err(message) => alerts.show.emit(Alert::error(message)),
        })
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(StopModal::Closed))
    };

    let state = &stops.state;
    let actions = &stops.actions;

    if state.loading {
        return html! { <div class="loading">{"Loading trip..."}</div> };
    }
    if let Some(error) = state.error.as_ref() {
        return html! {
            <div class="page-error">
                <p>{error}</p>
                <button class="btn btn-secondary" onclick={Callback::from(|_: MouseEvent| navigate(&Route::Dashboard))}>
                    {"Back to Dashboard"}
                </button>
            </div>
        };
    }

    let trip_id = props.trip_id.to_string();
    let stop_rows = state.stops.iter().enumerate().map(|(index, stop)| {
        let ondragstart = actions.drag_start.reform(move |_: DragEvent| index);
        let ondragover = actions.drag_over.reform(move |e: DragEvent| {
            e.prevent_default();
            index
        });
        let ondrop = actions.drop.reform(|e: DragEvent| e.prevent_default());
        let ondragend = actions.drop.reform(|_: DragEvent| ());
        let on_edit = {
            let modal = modal.clone();
            let stop = stop.clone();
            Callback::from(move |_: MouseEvent| modal.set(StopModal::Open(Some(stop.clone()))))
        };
        let on_delete = {
            let stop_id = stop.id.clone();
            actions.delete_stop.reform(move |_: MouseEvent| stop_id.clone())
        };
        let to_activities = {
            let route = Route::Activities {
                trip_id: trip_id.clone(),
                stop_id: stop.id.clone(),
            };
            Callback::from(move |_: MouseEvent| navigate(&route))
        };
        let class = classes!("stop-card", (state.dragged_index == Some(index)).then_some("dragging"));

        html! {
            <div key={stop.id.clone()} class={class} draggable="true" {ondragstart} {ondragover} {ondrop} {ondragend}>
                <span class="drag-handle">{"⋮⋮"}</span>
                <span class="stop-order">{stop.order}</span>
                <div class="stop-info">
                    <h3>{format!("{}, {}", stop.city, stop.country)}</h3>
                    <p>{format!("{} ({})", format_range(stop.start_date, stop.end_date), duration_label(stop.start_date, stop.end_date))}</p>
                    <p class="stop-budget">{format!("Budget: ${:.2}", stop.budget)}</p>
                    {if stop.notes.is_empty() { html! {} } else { html! { <p class="stop-notes">{&stop.notes}</p> } }}
                </div>
                <div class="stop-actions">
                    <button class="btn btn-secondary" onclick={to_activities}>
                        {format!("Activities ({})", stop.activities.len())}
                    </button>
                    <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </div>
        }
    });

    let (is_open, editing) = match &*modal {
        StopModal::Closed => (false, None),
        StopModal::Open(editing) => (true, editing.clone()),
    };
    let trip = state.trip.as_ref();
    let go = |route: Route| Callback::from(move |_: MouseEvent| navigate(&route));
    let on_edit_trip = {
        let editing_trip = editing_trip.clone();
        let alerts = alert.actions.clone();
        let demo = is_demo_id(&trip_id);
        Callback::from(move |_: MouseEvent| {
            if demo {
                alerts.show.emit(Alert::info("Sample trips cannot be edited"));
            } else {
                editing_trip.set(true);
            }
        })
    };
    let close_trip_form = {
        let editing_trip = editing_trip.clone();
        Callback::from(move |_| editing_trip.set(false))
    };
    let on_trip_saved = {
        let editing_trip = editing_trip.clone();
        let refresh = actions.refresh.clone();
        Callback::from(move |_| {
            editing_trip.set(false);
            refresh.emit(());
        })
    };

    html! {
        <div class="trip-stops-page">
            <div class="page-header">
                <div>
                    <h1>{trip.map(|t| t.name.clone()).unwrap_or_default()}</h1>
                    {if let Some(trip) = trip {
                        html! { <p class="subtitle">{format_range(trip.start_date, trip.end_date)}</p> }
                    } else { html! {} }}
                </div>
                <div class="page-actions">
                    <button class="btn btn-secondary" onclick={go(Route::Timeline { trip_id: trip_id.clone() })}>{"Timeline"}</button>
                    <button class="btn btn-secondary" onclick={go(Route::Itinerary { trip_id: trip_id.clone() })}>{"Itinerary"}</button>
                    <button class="btn btn-secondary" onclick={on_edit_trip}>{"Edit Trip"}</button>
                    <button class="btn btn-secondary" onclick={on_share}>{"Share"}</button>
                    <button class="btn btn-primary" onclick={open_add}>{"+ Add Stop"}</button>
                </div>
            </div>

            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
            {match trip {
                Some(trip) if *editing_trip => html! {
                    <TripDetailsForm trip={trip.clone()} on_saved={on_trip_saved} on_cancel={close_trip_form}
                        alerts={alert.actions.clone()} />
                },
                _ => html! {},
            }}
            {if let Some(url) = share_url.as_ref() {
                html! { <div class="alert alert-info share-link">{"Share link: "}<a href={url.clone()}>{url}</a></div> }
            } else { html! {} }}
            {if state.conflicts.is_empty() { html! {} } else {
                html! {
                    <div class="alert alert-warning conflict-banner">
                        <strong>{"Date conflicts detected:"}</strong>
                        <ul>
                            {for state.conflicts.iter().map(|c| html! { <li>{format!("{} overlap", c.describe())}</li> })}
                        </ul>
                    </div>
                }
            }}

            <div class="stops-summary">
                <span>{format!("{} stops", state.stops.len())}</span>
                <span>{format!("{} days", total_stop_days(&state.stops))}</span>
                <span>{format!("${:.2} budgeted", total_stop_budget(&state.stops))}</span>
                {if let Some(trip) = trip {
                    html! { <span>{format!("of ${:.2} trip budget", trip.budget)}</span> }
                } else { html! {} }}
            </div>

            {if state.stops.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{"No stops yet. Add your first destination."}</p>
                    </div>
                }
            } else {
                html! { <div class="stop-list">{for stop_rows}</div> }
            }}

            {if recommended.is_empty() { html! {} } else {
                html! {
                    <div class="recommendations">
                        <h4>{"Popular destinations"}</h4>
                        <div class="chips">
                            {for recommended.iter().map(|city| html! {
                                <span class="chip">{format!("{}, {}", city.city, city.country)}</span>
                            })}
                        </div>
                    </div>
                }
            }}

            <StopFormModal
                is_open={is_open}
                trip={state.trip.clone()}
                editing={editing}
                next_order={state.stops.len() as u32 + 1}
                saving={state.saving}
                on_save={actions.save_stop.clone()}
                on_close={on_close}
            />
        </div>
    }
}
