use shared::demo::{demo_trip, is_demo_id};
use shared::reorder::sort_by_order;
use shared::{Stop, Trip};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct TripOverviewState {
    pub trip: Option<Trip>,
    /// Stops in trip order, each with its activities
    pub stops: Vec<Stop>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Read-only trip plus stops for the timeline and itinerary pages
#[hook]
pub fn use_trip_overview(api_client: &ApiClient, trip_id: &str) -> TripOverviewState {
    let trip = use_state(|| Option::<Trip>::None);
    let stops = use_state(Vec::<Stop>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    use_effect_with(trip_id.to_string(), {
        let api_client = api_client.clone();
        let trip = trip.clone();
        let stops = stops.clone();
        let loading = loading.clone();
        let error = error.clone();

        move |trip_id: &String| {
            let trip_id = trip_id.clone();
            spawn_local(async move {
                loading.set(true);
                error.set(None);

                let loaded = if is_demo_id(&trip_id) {
                    demo_trip(&trip_id, today())
                        .map(|demo| (demo.stops.clone(), demo))
                        .ok_or_else(|| "Trip not found".to_string())
                } else {
                    futures::try_join!(api_client.get_trip(&trip_id), api_client.get_stops(&trip_id))
                        .map(|(trip, stops)| {
                            // The stop list may omit nested activities the trip carries
                            let stops = if stops.iter().all(|s| s.activities.is_empty()) && !trip.stops.is_empty() {
                                trip.stops.clone()
                            } else {
                                stops
                            };
                            (stops, trip)
                        })
                        .map_err(|e| {
                            Logger::error_with_component("use_trip_overview", &format!("Failed to load trip {}: {}", trip_id, e));
                            "Failed to load trip".to_string()
                        })
                };

                match loaded {
                    Ok((mut loaded_stops, loaded_trip)) => {
                        sort_by_order(&mut loaded_stops);
                        stops.set(loaded_stops);
                        trip.set(Some(loaded_trip));
                    }
                    Err(message) => error.set(Some(message)),
                }
                loading.set(false);
            });
            || ()
        }
    });

    TripOverviewState {
        trip: (*trip).clone(),
        stops: (*stops).clone(),
        loading: *loading,
        error: (*error).clone(),
    }
}
