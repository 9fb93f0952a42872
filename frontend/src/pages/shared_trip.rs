use shared::dates::{format_range, format_short};
use shared::Trip;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SharedTripPageProps {
    pub token: AttrValue,
}

/// Read-only view of a trip opened from a share link
#[function_component(SharedTripPage)]
pub fn shared_trip_page(props: &SharedTripPageProps) -> Html {
    let trip = use_state(|| Option::<Trip>::None);
    let error = use_state(|| Option::<String>::None);

    {
        let trip = trip.clone();
        let error = error.clone();
        use_effect_with(props.token.to_string(), move |token: &String| {
            let token = token.clone();
            spawn_local(async move {
                match ApiClient::new().get_shared_trip(&token).await {
                    Ok(loaded) => trip.set(Some(loaded)),
                    Err(e) => {
                        Logger::warn_with_component("shared_trip", &format!("Shared trip unavailable: {}", e));
                        error.set(Some("This shared trip could not be found".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let Some(trip) = trip.as_ref() else {
        return match error.as_ref() {
            Some(message) => html! { <div class="page-error"><p>{message}</p></div> },
            None => html! { <div class="loading">{"Loading shared trip..."}</div> },
        };
    };

    html! {
        <div class="shared-trip-page">
            {if let Some(photo) = trip.cover_photo.as_ref() {
                html! { <img class="shared-cover" src={photo.clone()} alt={trip.name.clone()} /> }
            } else { html! {} }}
            <h1>{&trip.name}</h1>
            <p class="subtitle">{format_range(trip.start_date, trip.end_date)}</p>
            <p>{&trip.description}</p>
            <div class="shared-stops">
                {for trip.stops.iter().map(|stop| html! {
                    <div class="stop-card" key={stop.id.clone()}>
                        <span class="stop-order">{stop.order}</span>
                        <div class="stop-info">
                            <h3>{format!("{}, {}", stop.city, stop.country)}</h3>
                            <p>{format_range(stop.start_date, stop.end_date)}</p>
                            <ul>
                                {for stop.activities.iter().map(|activity| html! {
                                    <li>
                                        {&activity.name}
                                        {activity.date.map(|d| format!(" · {}", format_short(d))).unwrap_or_default()}
                                    </li>
                                })}
                            </ul>
                        </div>
                    </div>
                })}
            </div>
            <p class="shared-footer">{"Planned with Planora"}</p>
        </div>
    }
}
