use chrono::{Datelike, NaiveDate};
use shared::calendar::{month_grid, trips_on, WEEKDAY_LABELS};
use shared::dates::{month_name, shift_month};
use shared::Route;
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::hooks::use_alert::use_alert;
use crate::hooks::use_trips::use_trips;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::router::navigate;

/// Trips laid out on a month grid
#[function_component(CalendarPage)]
pub fn calendar_page() -> Html {
    let api_client = ApiClient::new();
    let alert = use_alert();
    let trips = use_trips(&api_client, &alert.actions, true);
    let today = today();
    let month = use_state(|| today.with_day(1).unwrap_or(today));

    let shift = |months: i32| {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(shift_month(*month, months)))
    };
    let on_today = {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(today.with_day(1).unwrap_or(today)))
    };

    let all_trips = &trips.state.trips;
    let cell = |day: Option<NaiveDate>| match day {
        None => html! { <div class="calendar-cell empty"></div> },
        Some(date) => {
            let on_day = trips_on(all_trips, date);
            let class = classes!("calendar-cell", (date == today).then_some("today"));
            html! {
                <div {class}>
                    <span class="calendar-day">{date.day()}</span>
                    {for on_day.iter().map(|trip| {
                        let route = Route::TripStops { trip_id: trip.id.clone() };
                        html! {
                            <div class="calendar-trip" title={trip.name.clone()}
                                onclick={Callback::from(move |_: MouseEvent| navigate(&route))}>
                                {&trip.name}
                            </div>
                        }
                    })}
                </div>
            }
        }
    };

    html! {
        <div class="calendar-page">
            <div class="page-header">
                <h1>{"Trip Calendar"}</h1>
                <div class="calendar-nav">
                    <button class="btn btn-secondary" onclick={shift(-1)}>{"‹"}</button>
                    <span class="calendar-month">{format!("{} {}", month_name(month.month()), month.year())}</span>
                    <button class="btn btn-secondary" onclick={shift(1)}>{"›"}</button>
                    <button class="btn btn-link" onclick={on_today}>{"Today"}</button>
                </div>
            </div>
            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
            {if trips.state.loading {
                html! { <div class="loading">{"Loading trips..."}</div> }
            } else {
                html! {
                    <div class="calendar-grid">
                        {for WEEKDAY_LABELS.iter().map(|label| html! { <div class="calendar-weekday">{*label}</div> })}
                        {for month_grid(month.year(), month.month()).into_iter().map(cell)}
                    </div>
                }
            }}
        </div>
    }
}
