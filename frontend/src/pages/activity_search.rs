use shared::dates::{format_short, parse_optional_date, to_input_value};
use shared::search::{collect_activities, ActivityFilter};
use shared::{ActivityType, Route};
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::input_field::InputField;
use crate::components::select_field::SelectField;
use crate::hooks::use_alert::use_alert;
use crate::hooks::use_trips::use_trips;
use crate::services::api::ApiClient;
use crate::services::router::navigate;

/// Find activities across every trip
#[function_component(ActivitySearchPage)]
pub fn activity_search_page() -> Html {
    let api_client = ApiClient::new();
    let alert = use_alert();
    let trips = use_trips(&api_client, &alert.actions, true);
    let filter = use_state(ActivityFilter::default);
    let hits = use_memo(trips.state.trips.clone(), |trips| collect_activities(trips));

    let update = |apply: fn(&mut ActivityFilter, String)| {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            apply(&mut next, value);
            filter.set(next);
        })
    };

    let trip_options: Vec<(AttrValue, AttrValue)> = trips
        .state
        .trips
        .iter()
        .map(|t| (AttrValue::from(t.id.clone()), AttrValue::from(t.name.clone())))
        .collect();
    let type_options: Vec<(AttrValue, AttrValue)> = ActivityType::ALL
        .iter()
        .map(|t| (AttrValue::Static(t.value()), AttrValue::Static(t.label())))
        .collect();

    let results = filter.apply(&hits);
    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(ActivityFilter::default()))
    };

    html! {
        <div class="search-page">
            <h1>{"Search Activities"}</h1>
            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
            <div class="search-filters">
                <InputField label="Search" name="query" value={filter.query.clone()}
                    placeholder="Name, notes or location" on_input={update(|f, v| f.query = v)} />
                <SelectField label="Trip" name="trip" value={filter.trip_id.clone().unwrap_or_default()}
                    options={trip_options} placeholder="All trips"
                    on_change={update(|f, v| f.trip_id = Some(v).filter(|id| !id.is_empty()))} />
                <InputField label="Date" name="date" input_type="date"
                    value={filter.date.map(to_input_value).unwrap_or_default()}
                    on_input={update(|f, v| f.date = parse_optional_date(&v).ok().flatten())} />
                <SelectField label="Type" name="type"
                    value={filter.activity_type.map(|t| t.value()).unwrap_or_default()}
                    options={type_options} placeholder="All types"
                    on_change={update(|f, v| f.activity_type = (!v.is_empty()).then(|| ActivityType::from_value(&v)))} />
                <button class="btn btn-link" onclick={on_clear}>{"Clear filters"}</button>
            </div>

            {if trips.state.loading {
                html! { <div class="loading">{"Loading activities..."}</div> }
            } else if results.is_empty() {
                html! { <div class="empty-state"><p>{"No activities match your search."}</p></div> }
            } else {
                html! {
                    <>
                        <p class="hint">{format!("{} of {} activities", results.len(), hits.len())}</p>
                        <div class="activity-list">
                            {for results.iter().map(|hit| {
                                let activity = &hit.activity;
                                let route = Route::TripStops { trip_id: hit.trip_id.clone() };
                                html! {
                                    <div class="activity-card" key={format!("{}-{}", hit.trip_id, activity.id)}
                                        onclick={Callback::from(move |_: MouseEvent| navigate(&route))}>
                                        <div class="activity-info">
                                            <h3>{&activity.name}</h3>
                                            <span class="badge">{activity.activity_type.label()}</span>
                                            <p>{match &hit.stop_name {
                                                Some(stop) => format!("{} · {}", hit.trip_name, stop),
                                                None => hit.trip_name.clone(),
                                            }}</p>
                                            {if let Some(date) = activity.date {
                                                html! { <p class="activity-when">{format_short(date)}</p> }
                                            } else { html! {} }}
                                        </div>
                                        <div class="activity-cost">{format!("${:.2}", activity.cost)}</div>
                                    </div>
                                }
                            })}
                        </div>
                    </>
                }
            }}
        </div>
    }
}
