use shared::demo::{demo_trip, is_demo_id};
use shared::{Activity, ActivityPayload, Stop};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_alert::{Alert, AlertActions};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

/// Create (`activity_id: None`) or update an activity, then run `on_saved`
#[derive(Clone, PartialEq)]
pub struct SaveActivity {
    pub activity_id: Option<String>,
    pub payload: ActivityPayload,
    pub on_saved: Callback<()>,
}

#[derive(Clone, PartialEq)]
pub struct ActivitiesState {
    pub stop: Option<Stop>,
    pub activities: Vec<Activity>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl ActivitiesState {
    pub fn total_cost(&self) -> f64 {
        self.activities.iter().map(|a| a.cost).sum()
    }

    pub fn completed(&self) -> usize {
        self.activities
            .iter()
            .filter(|a| a.status == shared::ActivityStatus::Done)
            .count()
    }
}

pub struct UseActivitiesResult {
    pub state: ActivitiesState,
    pub actions: UseActivitiesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseActivitiesActions {
    pub refresh: Callback<()>,
    pub save_activity: Callback<SaveActivity>,
    pub delete_activity: Callback<String>,
    pub toggle_status: Callback<String>,
}

fn apply_payload(activity: &mut Activity, payload: &ActivityPayload) {
    activity.name = payload.name.clone();
    activity.activity_type = payload.activity_type;
    activity.date = payload.date;
    activity.time = payload.time.clone();
    activity.duration = payload.duration;
    activity.cost = payload.cost;
    activity.status = payload.status;
    activity.notes = payload.notes.clone();
}

#[hook]
pub fn use_activities(
    api_client: &ApiClient,
    alerts: &AlertActions,
    trip_id: &str,
    stop_id: &str,
) -> UseActivitiesResult {
    let stop = use_state(|| Option::<Stop>::None);
    let activities = use_state(Vec::<Activity>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let ids = (trip_id.to_string(), stop_id.to_string());

    let refresh = {
        let api_client = api_client.clone();
        let stop = stop.clone();
        let activities = activities.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(ids.clone(), move |_: (), (trip_id, stop_id)| {
            let api_client = api_client.clone();
            let stop = stop.clone();
            let activities = activities.clone();
            let loading = loading.clone();
            let error = error.clone();
            let trip_id = trip_id.clone();
            let stop_id = stop_id.clone();

            spawn_local(async move {
                loading.set(true);
                error.set(None);

                if is_demo_id(&trip_id) {
                    let found = demo_trip(&trip_id, today())
                        .and_then(|trip| trip.stops.into_iter().find(|s| s.id == stop_id));
                    match found {
                        Some(demo_stop) => {
                            activities.set(demo_stop.activities.clone());
                            stop.set(Some(demo_stop));
                        }
                        None => error.set(Some("Stop not found".to_string())),
                    }
                    loading.set(false);
                    return;
                }

                let loaded = futures::try_join!(
                    api_client.get_stop(&trip_id, &stop_id),
                    api_client.get_activities(&trip_id, &stop_id)
                );
                match loaded {
                    Ok((loaded_stop, loaded_activities)) => {
                        activities.set(loaded_activities);
                        stop.set(Some(loaded_stop));
                    }
                    Err(e) => {
                        Logger::error_with_component("use_activities", &format!("Failed to load stop {}: {}", stop_id, e));
                        error.set(Some("Failed to load activities".to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let save_activity = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let alerts = alerts.clone();
        let refresh = refresh.clone();

        use_callback((ids.clone(), activities.clone()), move |request: SaveActivity, ((trip_id, stop_id), activities)| {
            let SaveActivity { activity_id, payload, on_saved } = request;
            let created = activity_id.is_none();

            if is_demo_id(trip_id) {
                let mut list = activities.to_vec();
                let position = activity_id.as_deref().and_then(|id| list.iter().position(|a| a.id == id));
                match position {
                    Some(index) => apply_payload(&mut list[index], &payload),
                    None => {
                        let mut activity = Activity {
                            id: format!("{}-local-{}", stop_id, list.len() + 1),
                            name: String::new(),
                            activity_type: payload.activity_type,
                            date: None,
                            time: None,
                            duration: None,
                            cost: 0.0,
                            status: payload.status,
                            notes: String::new(),
                            location: None,
                        };
                        apply_payload(&mut activity, &payload);
                        list.push(activity);
                    }
                }
                activities.set(list);
                alerts.show.emit(Alert::success(if created { "Activity added" } else { "Activity updated" }));
                on_saved.emit(());
                return;
            }

            let api_client = api_client.clone();
            let saving = saving.clone();
            let alerts = alerts.clone();
            let refresh = refresh.clone();
            let trip_id = trip_id.clone();
            let stop_id = stop_id.clone();
            spawn_local(async move {
                saving.set(true);
                let result = match &activity_id {
                    Some(id) => api_client.update_activity(&trip_id, &stop_id, id, &payload).await,
                    None => api_client.create_activity(&trip_id, &stop_id, &payload).await,
                };
                match result {
                    Ok(_) => {
                        alerts.show.emit(Alert::success(if created {
                            "Activity added successfully"
                        } else {
                            "Activity updated successfully"
                        }));
                        on_saved.emit(());
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use_activities", &format!("Failed to save activity: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let delete_activity = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let refresh = refresh.clone();

        use_callback((ids.clone(), activities.clone()), move |activity_id: String, ((trip_id, stop_id), activities)| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this activity?") {
                return;
            }
            if is_demo_id(trip_id) {
                let remaining: Vec<Activity> = activities.iter().filter(|a| a.id != activity_id).cloned().collect();
                activities.set(remaining);
                alerts.show.emit(Alert::success("Activity deleted"));
                return;
            }

            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let refresh = refresh.clone();
            let trip_id = trip_id.clone();
            let stop_id = stop_id.clone();
            spawn_local(async move {
                match api_client.delete_activity(&trip_id, &stop_id, &activity_id).await {
                    Ok(()) => {
                        alerts.show.emit(Alert::success("Activity deleted successfully"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use_activities", &format!("Failed to delete activity: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
            });
        })
    };

    let toggle_status = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let refresh = refresh.clone();

        use_callback((ids.clone(), activities.clone()), move |activity_id: String, ((trip_id, stop_id), activities)| {
            let Some(current) = activities.iter().find(|a| a.id == activity_id).map(|a| a.status) else {
                return;
            };
            let next = current.toggled();

            if is_demo_id(trip_id) {
                let mut list = activities.to_vec();
                if let Some(activity) = list.iter_mut().find(|a| a.id == activity_id) {
                    activity.status = next;
                }
                activities.set(list);
                return;
            }

            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let refresh = refresh.clone();
            let trip_id = trip_id.clone();
            let stop_id = stop_id.clone();
            spawn_local(async move {
                match api_client.update_activity_status(&trip_id, &stop_id, &activity_id, next).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => {
                        Logger::error_with_component("use_activities", &format!("Failed to update status: {}", e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
            });
        })
    };

    use_effect_with(ids, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ActivitiesState {
        stop: (*stop).clone(),
        activities: (*activities).clone(),
        loading: *loading,
        saving: *saving,
        error: (*error).clone(),
    };

    let actions = UseActivitiesActions {
        refresh,
        save_activity,
        delete_activity,
        toggle_status,
    };

    UseActivitiesResult { state, actions }
}
