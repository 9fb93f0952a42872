use shared::dates::{duration_label, format_range};
use shared::{Route, Trip, TripCategory};
use yew::prelude::*;

use crate::services::router::navigate;

#[derive(Properties, PartialEq)]
pub struct TripCardProps {
    pub trip: Trip,
    pub category: TripCategory,
    pub on_delete: Callback<String>,
}

#[function_component(TripCard)]
pub fn trip_card(props: &TripCardProps) -> Html {
    let trip = &props.trip;
    let stops_count = trip.stops_count.unwrap_or(trip.stops.len() as u32);
    let destinations = trip
        .stops
        .iter()
        .map(|s| s.city.as_str())
        .collect::<Vec<_>>()
        .join(" · ");

    let go = |route: Route| Callback::from(move |_: MouseEvent| navigate(&route));
    let on_delete = {
        let trip_id = trip.id.clone();
        props.on_delete.reform(move |_: MouseEvent| trip_id.clone())
    };

    html! {
        <div class="trip-card">
            {if let Some(photo) = trip.cover_photo.as_ref() {
                html! { <img class="trip-card-cover" src={photo.clone()} alt={trip.name.clone()} /> }
            } else {
                html! { <div class="trip-card-cover placeholder">{"🌍"}</div> }
            }}
            <div class="trip-card-body">
                <div class="trip-card-header">
                    <h3>{&trip.name}</h3>
                    <span class={classes!("badge", format!("badge-{}", props.category.label().to_lowercase()))}>
                        {props.category.label()}
                    </span>
                </div>
                <p class="trip-card-description">{&trip.description}</p>
                <p class="trip-card-dates">
                    {format_range(trip.start_date, trip.end_date)}
                    <span class="trip-card-duration">{format!(" ({})", duration_label(trip.start_date, trip.end_date))}</span>
                </p>
                {if destinations.is_empty() {
                    html! {}
                } else {
                    html! { <p class="trip-card-destinations">{destinations}</p> }
                }}
                <div class="trip-card-meta">
                    <span>{format!("{} stops", stops_count)}</span>
                    <span>{format!("${:.0}", trip.budget)}</span>
                </div>
                <div class="trip-card-actions">
                    <button class="btn btn-primary" onclick={go(Route::TripStops { trip_id: trip.id.clone() })}>{"Manage Stops"}</button>
                    <button class="btn btn-secondary" onclick={go(Route::Timeline { trip_id: trip.id.clone() })}>{"Timeline"}</button>
                    <button class="btn btn-secondary" onclick={go(Route::Itinerary { trip_id: trip.id.clone() })}>{"Itinerary"}</button>
                    <button class="btn btn-secondary" onclick={go(Route::TripHealth { trip_id: trip.id.clone() })}>{"Health"}</button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </div>
        </div>
    }
}
