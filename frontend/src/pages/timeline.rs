use shared::config::limits;
use shared::dates::{format_long, format_range, format_time};
use shared::timeline::build_timeline;
use shared::Route;
use yew::prelude::*;

use crate::hooks::use_trip_overview::use_trip_overview;
use crate::services::api::ApiClient;
use crate::services::router::navigate;

#[derive(Properties, PartialEq)]
pub struct TimelinePageProps {
    pub trip_id: AttrValue,
}

#[function_component(TimelinePage)]
pub fn timeline_page(props: &TimelinePageProps) -> Html {
    let overview = use_trip_overview(&ApiClient::new(), &props.trip_id);
    let days = use_memo(overview.stops.clone(), |stops| build_timeline(stops));

    let back = {
        let route = Route::TripStops {
            trip_id: props.trip_id.to_string(),
        };
        Callback::from(move |_: MouseEvent| navigate(&route))
    };

    if overview.loading {
        return html! { <div class="loading">{"Loading timeline..."}</div> };
    }
    if let Some(error) = overview.error.as_ref() {
        return html! { <div class="page-error"><p>{error}</p></div> };
    }

    html! {
        <div class="timeline-page">
            <div class="page-header">
                <div>
                    <button class="btn btn-link" onclick={back}>{"← Back to Stops"}</button>
                    {if let Some(trip) = overview.trip.as_ref() {
                        html! {
                            <>
                                <h1>{&trip.name}</h1>
                                <p class="subtitle">{format_range(trip.start_date, trip.end_date)}</p>
                            </>
                        }
                    } else { html! {} }}
                </div>
            </div>
            {if days.len() >= limits::MAX_TIMELINE_DAYS {
                html! { <div class="alert alert-warning">{"Only the first year of this trip is shown. Check the stop dates."}</div> }
            } else { html! {} }}
            {if days.is_empty() {
                html! { <div class="empty-state"><p>{"Add stops to see your day-by-day timeline."}</p></div> }
            } else {
                html! {
                    <div class="timeline">
                        {for days.iter().map(|day| html! {
                            <div class="timeline-day" key={format!("{}-{}", day.stop_id, day.date)}>
                                <div class="timeline-marker">{format!("Day {}", day.day_of_trip)}</div>
                                <div class="timeline-content">
                                    <h3>{format_long(day.date)}</h3>
                                    <p class="timeline-city">{format!("{}, {}", day.city, day.country)}</p>
                                    {if day.activities.is_empty() {
                                        html! { <p class="hint">{"Free day"}</p> }
                                    } else {
                                        html! {
                                            <ul class="timeline-activities">
                                                {for day.activities.iter().map(|activity| html! {
                                                    <li>
                                                        {activity.time.as_deref().map(format_time).map(|t| format!("{} · ", t)).unwrap_or_default()}
                                                        {&activity.name}
                                                        <span class="badge">{activity.activity_type.label()}</span>
                                                    </li>
                                                })}
                                            </ul>
                                        }
                                    }}
                                </div>
                            </div>
                        })}
                    </div>
                }
            }}
        </div>
    }
}
