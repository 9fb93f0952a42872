use shared::demo::{demo_trips, is_demo_id};
use shared::{categorize_trips, CategorizedTrips, Trip};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_alert::{Alert, AlertActions};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct TripsState {
    pub trips: Vec<Trip>,
    pub categorized: CategorizedTrips,
    pub loading: bool,
    pub error: Option<String>,
    /// Showing the built-in sample trips instead of API data
    pub using_demo: bool,
}

pub struct UseTripsResult {
    pub state: TripsState,
    pub actions: UseTripsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTripsActions {
    pub refresh: Callback<()>,
    pub delete_trip: Callback<String>,
}

/// The signed-in user's trips. With `demo_fallback`, an unreachable API or an
/// empty list shows the sample trips instead.
#[hook]
pub fn use_trips(api_client: &ApiClient, alerts: &AlertActions, demo_fallback: bool) -> UseTripsResult {
    let trips = use_state(Vec::<Trip>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let using_demo = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let trips = trips.clone();
        let loading = loading.clone();
        let error = error.clone();
        let using_demo = using_demo.clone();

        use_callback(demo_fallback, move |_: (), demo_fallback| {
            let api_client = api_client.clone();
            let trips = trips.clone();
            let loading = loading.clone();
            let error = error.clone();
            let using_demo = using_demo.clone();
            let demo_fallback = *demo_fallback;

            spawn_local(async move {
                loading.set(true);
                error.set(None);

                match api_client.get_trips().await {
                    Ok(list) if list.is_empty() && demo_fallback => {
                        Logger::info_with_component("use_trips", "No trips yet, showing sample trips");
                        trips.set(demo_trips(today()));
                        using_demo.set(true);
                    }
                    Ok(list) => {
                        trips.set(list);
                        using_demo.set(false);
                    }
                    Err(e) if demo_fallback => {
                        Logger::warn_with_component("use_trips", &format!("Falling back to sample trips: {}", e));
                        trips.set(demo_trips(today()));
                        using_demo.set(true);
                    }
                    Err(e) => {
                        Logger::error_with_component("use_trips", &format!("Failed to load trips: {}", e));
                        error.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let delete_trip = {
        let api_client = api_client.clone();
        let alerts = alerts.clone();
        let refresh = refresh.clone();

        use_callback(trips.clone(), move |trip_id: String, trips| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this trip?") {
                return;
            }
            if is_demo_id(&trip_id) {
                let remaining: Vec<Trip> = trips.iter().filter(|t| t.id != trip_id).cloned().collect();
                trips.set(remaining);
                alerts.show.emit(Alert::success("Trip removed"));
                return;
            }

            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api_client.delete_trip(&trip_id).await {
                    Ok(()) => {
                        alerts.show.emit(Alert::success("Trip deleted successfully"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use_trips", &format!("Failed to delete trip {}: {}", trip_id, e));
                        alerts.show.emit(Alert::error(e.to_string()));
                    }
                }
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = TripsState {
        categorized: categorize_trips((*trips).clone(), today()),
        trips: (*trips).clone(),
        loading: *loading,
        error: (*error).clone(),
        using_demo: *using_demo,
    };

    UseTripsResult {
        state,
        actions: UseTripsActions { refresh, delete_trip },
    }
}
