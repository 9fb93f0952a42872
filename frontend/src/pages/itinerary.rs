use chrono::NaiveDate;
use shared::dates::{format_long, format_short, format_time};
use shared::timeline::group_by_date;
use shared::{ActivityStatus, Route};
use yew::prelude::*;

use crate::hooks::use_trip_overview::use_trip_overview;
use crate::services::api::ApiClient;
use crate::services::router::navigate;

#[derive(Properties, PartialEq)]
pub struct ItineraryPageProps {
    pub trip_id: AttrValue,
}

/// Activities grouped by date with a per-day summary
#[function_component(ItineraryPage)]
pub fn itinerary_page(props: &ItineraryPageProps) -> Html {
    let overview = use_trip_overview(&ApiClient::new(), &props.trip_id);
    let groups = use_memo(overview.stops.clone(), |stops| group_by_date(stops));
    let selected = use_state(|| Option::<NaiveDate>::None);

    if overview.loading {
        return html! { <div class="loading">{"Loading itinerary..."}</div> };
    }
    if let Some(error) = overview.error.as_ref() {
        return html! { <div class="page-error"><p>{error}</p></div> };
    }

    let back = {
        let route = Route::TripStops {
            trip_id: props.trip_id.to_string(),
        };
        Callback::from(move |_: MouseEvent| navigate(&route))
    };

    // Default to the first date once loaded
    let active = (*selected)
        .filter(|date| groups.iter().any(|g| g.date == *date))
        .or_else(|| groups.first().map(|g| g.date));
    let group = active.and_then(|date| groups.iter().find(|g| g.date == date));

    let date_tabs = groups.iter().map(|g| {
        let date = g.date;
        let selected = selected.clone();
        let class = classes!("date-tab", (active == Some(date)).then_some("active"), g.is_overloaded().then_some("overloaded"));
        html! {
            <button key={date.to_string()} {class} onclick={Callback::from(move |_: MouseEvent| selected.set(Some(date)))}>
                <span>{format_short(date)}</span>
                <span class="date-tab-count">{g.entries.len()}</span>
            </button>
        }
    });

    let detail = match group {
        None => html! { <div class="empty-state"><p>{"No activities planned yet."}</p></div> },
        Some(group) => html! {
            <div class="itinerary-day">
                <div class="itinerary-day-header">
                    <h2>{format_long(group.date)}</h2>
                    <p class="subtitle">{&group.stop_name}</p>
                    {if group.is_overloaded() {
                        html! { <span class="badge badge-warning">{"Overloaded day"}</span> }
                    } else { html! {} }}
                </div>
                <div class="stops-summary">
                    <span>{format!("{} activities", group.entries.len())}</span>
                    <span>{format!("{}/{} done", group.completed_count(), group.entries.len())}</span>
                    <span>{format!("{:.1} h", group.total_minutes() as f64 / 60.0)}</span>
                    <span>{format!("${:.2}", group.total_cost())}</span>
                </div>
                <ul class="itinerary-entries">
                    {for group.entries.iter().map(|entry| {
                        let activity = &entry.activity;
                        let done = activity.status == ActivityStatus::Done;
                        html! {
                            <li key={activity.id.clone()} class={classes!("itinerary-entry", done.then_some("completed"))}>
                                <span class="entry-time">{activity.time.as_deref().map(format_time).unwrap_or_default()}</span>
                                <span class="entry-name">{&activity.name}</span>
                                <span class="badge">{activity.activity_type.label()}</span>
                                <span class="entry-stop">{&entry.stop_name}</span>
                                <span class="entry-cost">{format!("${:.2}", activity.cost)}</span>
                            </li>
                        }
                    })}
                </ul>
            </div>
        },
    };

    html! {
        <div class="itinerary-page">
            <div class="page-header">
                <div>
                    <button class="btn btn-link" onclick={back}>{"← Back to Stops"}</button>
                    <h1>{overview.trip.as_ref().map(|t| t.name.clone()).unwrap_or_default()}</h1>
                </div>
            </div>
            <div class="date-tabs">{for date_tabs}</div>
            {detail}
        </div>
    }
}
