use futures::future::join_all;
use shared::demo::{demo_trip, is_demo_id};
use shared::reorder::{sort_by_order, ReorderResolution};
use shared::{detect_stop_conflicts, ReorderState, Stop, StopConflict, StopPayload, Trip};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_alert::{Alert, AlertActions};
use crate::services::api::{ApiClient, ApiError};
use crate::services::date_utils::today;
use crate::services::logging::Logger;

/// Create (`stop_id: None`) or update a stop, then run `on_saved`
#[derive(Clone, PartialEq)]
pub struct SaveStop {
    pub stop_id: Option<String>,
    pub payload: StopPayload,
    pub on_saved: Callback<()>,
}

#[derive(Clone, PartialEq)]
pub struct TripStopsState {
    pub trip: Option<Trip>,
    pub stops: Vec<Stop>,
    pub conflicts: Vec<StopConflict>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub dragged_index: Option<usize>,
}

pub struct UseTripStopsResult {
    pub state: TripStopsState,
    pub actions: UseTripStopsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTripStopsActions {
    pub refresh: Callback<()>,
    pub save_stop: Callback<SaveStop>,
    pub delete_stop: Callback<String>,
    pub drag_start: Callback<usize>,
    pub drag_over: Callback<usize>,
    pub drop: Callback<()>,
}

/// Apply a save to the in-memory list for sample trips
fn upsert_local(stops: &[Stop], trip_id: &str, stop_id: Option<&str>, payload: &StopPayload) -> Vec<Stop> {
    let mut stops = stops.to_vec();
    let position = stop_id.and_then(|id| stops.iter().position(|s| s.id == id));
    match position {
        Some(index) => {
            let stop = &mut stops[index];
            stop.city = payload.city.clone();
            stop.country = payload.country.clone();
            stop.start_date = payload.start_date;
            stop.end_date = payload.end_date;
            stop.budget = payload.budget;
            stop.notes = payload.notes.clone();
        }
        None => {
            let order = stops.len() as u32 + 1;
            stops.push(Stop {
                id: format!("{}-local-{}", trip_id, order),
                city: payload.city.clone(),
                country: payload.country.clone(),
                start_date: payload.start_date,
                end_date: payload.end_date,
                budget: payload.budget,
                notes: payload.notes.clone(),
                order,
                activities: Vec::new(),
            });
        }
    }
    stops
}

#[hook]
pub fn use_trip_stops(api_client: &ApiClient, alerts: &AlertActions, trip_id: &str) -> UseTripStopsResult {
    let trip = use_state(|| Option::<Trip>::None);
    let stops = use_state(Vec::<Stop>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let reorder = use_mut_ref(ReorderState::new);
    // Mirrors the dragged index so the dragged card restyles on drag start
    let dragged_index = use_state(|| Option::<usize>::None);
    let trip_id = trip_id.to_string();

    let refresh = {
        let api_client = api_client.clone();
        let trip = trip.clone();
        let stops = stops.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(trip_id.clone(), move |_: (), trip_id| {
            let api_client = api_client.clone();
            let trip = trip.clone();
            let stops = stops.clone();
            let loading = loading.clone();
            let error = error.clone();
            let trip_id = trip_id.clone();

            spawn_local(async move {
                loading.set(true);
                error.set(None);

                if is_demo_id(&trip_id) {
                    match demo_trip(&trip_id, today()) {
                        Some(demo) => {
                            stops.set(demo.stops.clone());
                            trip.set(Some(demo));
                        }
                        None => error.set(Some("Trip not found".to_string())),
                    }
                    loading.set(false);
                    return;
                }

                let loaded = futures::try_join!(api_client.get_trip(&trip_id), api_client.get_stops(&trip_id));
                match loaded {
                    Ok((loaded_trip, mut loaded_stops)) => {
                        sort_by_order(&mut loaded_stops);
                        stops.set(loaded_stops);
                        trip.set(Some(loaded_trip));
                    }
                    Err(e) => {
                        Logger::error_with_component("use_trip_stops", &format!("Failed to load trip {}: {}", trip_id, e));
                        error.set(Some("Failed to load trip data".to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let save_stop = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let alerts = alerts.clone();
        let refresh = refresh.clone();

        use_callback((trip_id.clone(), stops.clone()), move |request: SaveStop, (trip_id, stops)| {
            let SaveStop { stop_id, payload, on_saved } = request;
            let created = stop_id.is_none();

            if is_demo_id(trip_id) {
                stops.set(upsert_local(stops, trip_id, stop_id.as_deref(), &payload));
                alerts.show.emit(Alert::success(if created { "Stop added" } else { "Stop updated" }));
                on_saved.emit(());
                return;
            }

            let api_client = api_client.clone();
            let saving = saving.clone();
            let alerts = alerts.clone();
            let refresh = refresh.clone();
            let trip_id = trip_id.clone();
            spawn_local(async move {
                saving.set(true);
                let result = match &stop_id {
                    Some(id) => api_client.update_stop(&trip_id, id, &payload).await,
                    None => api_client.create_stop(&trip_id, &payload).await,
                };
                match result {
                    Ok(_) => {
                        alerts.show.emit(Alert::success(if created {
                            "Stop added successfully"
                        } else {
                            "Stop updated successfully"
                        }));
                        on_saved.emit(());
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use_trip_stops", &format!("Failed to save stop: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let delete_stop = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let refresh = refresh.clone();

        use_callback((trip_id.clone(), stops.clone()), move |stop_id: String, (trip_id, stops)| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this stop?") {
                return;
            }
            if is_demo_id(trip_id) {
                let mut remaining: Vec<Stop> = stops.iter().filter(|s| s.id != stop_id).cloned().collect();
                shared::reorder::renumber(&mut remaining);
                stops.set(remaining);
                alerts.show.emit(Alert::success("Stop deleted"));
                return;
            }

            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let refresh = refresh.clone();
            let trip_id = trip_id.clone();
            spawn_local(async move {
                match api_client.delete_stop(&trip_id, &stop_id).await {
                    Ok(()) => {
                        alerts.show.emit(Alert::success("Stop deleted successfully"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use_trip_stops", &format!("Failed to delete stop: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
            });
        })
    };

    let drag_start = {
        let reorder = reorder.clone();
        let dragged_index = dragged_index.clone();
        use_callback(stops.clone(), move |index: usize, stops| {
            reorder.borrow_mut().start(index, stops);
            dragged_index.set(Some(index));
        })
    };

    let drag_over = {
        let reorder = reorder.clone();
        let dragged_index = dragged_index.clone();
        use_callback(stops.clone(), move |index: usize, stops| {
            let mut working = (**stops).clone();
            let moved = reorder.borrow_mut().drag_over(&mut working, index);
            if moved {
                dragged_index.set(reorder.borrow().dragged_index());
                stops.set(working);
            }
        })
    };

    let drop = {
        let api_client = api_client.clone();
        let reorder = reorder.clone();
        let alerts = alerts.clone();
        let refresh = refresh.clone();
        let dragged_index = dragged_index.clone();

        use_callback((trip_id.clone(), stops.clone()), move |_: (), (trip_id, stops)| {
            let Some(updates) = reorder.borrow_mut().end_drag(stops) else {
                return;
            };
            dragged_index.set(None);
            let local = (**stops).clone();

            if is_demo_id(trip_id) {
                if let ReorderResolution::Commit(committed) = reorder.borrow_mut().resolve(local, Ok::<(), ApiError>(())) {
                    stops.set(committed);
                }
                return;
            }

            let api_client = api_client.clone();
            let stops = stops.clone();
            let reorder = reorder.clone();
            let alerts = alerts.clone();
            let refresh = refresh.clone();
            let trip_id = trip_id.clone();
            spawn_local(async move {
                let writes = updates
                    .iter()
                    .map(|(stop_id, update)| api_client.update_stop_order(&trip_id, stop_id, *update));
                let outcome = join_all(writes)
                    .await
                    .into_iter()
                    .collect::<Result<Vec<()>, ApiError>>()
                    .map(|_| ());

                if let Err(e) = &outcome {
                    Logger::error_with_component("use_trip_stops", &format!("Failed to persist stop order: {}", e));
                }
                let resolution = reorder.borrow_mut().resolve(local, outcome);
                match resolution {
                    ReorderResolution::Commit(committed) => stops.set(committed),
                    ReorderResolution::Revert(previous) => {
                        stops.set(previous);
                        alerts.show.emit(Alert::error("Failed to reorder stops"));
                        refresh.emit(());
                    }
                }
            });
        })
    };

    use_effect_with(trip_id.clone(), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = TripStopsState {
        trip: (*trip).clone(),
        conflicts: detect_stop_conflicts(&stops),
        stops: (*stops).clone(),
        loading: *loading,
        saving: *saving,
        error: (*error).clone(),
        dragged_index: *dragged_index,
    };

    let actions = UseTripStopsActions {
        refresh,
        save_stop,
        delete_stop,
        drag_start,
        drag_over,
        drop,
    };

    UseTripStopsResult { state, actions }
}
