use gloo::timers::callback::Interval;
use shared::demo::HERO_IMAGES;
use shared::{Route, TripCategory};
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::trip_card::TripCard;
use crate::hooks::use_alert::use_alert;
use crate::hooks::use_trips::use_trips;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::router::navigate;
use crate::services::storage::Session;

const HERO_ROTATE_MS: u32 = 5000;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api_client = ApiClient::new();
    let alert = use_alert();
    let trips = use_trips(&api_client, &alert.actions, true);
    let active_tab = use_state(|| TripCategory::Ongoing);
    let hero_index = use_state(|| 0usize);
    let hero_cursor = use_mut_ref(|| 0usize);

    {
        let hero_index = hero_index.clone();
        let hero_cursor = hero_cursor.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(HERO_ROTATE_MS, move || {
                let mut cursor = hero_cursor.borrow_mut();
                *cursor = (*cursor + 1) % HERO_IMAGES.len();
                hero_index.set(*cursor);
            });
            move || drop(interval)
        });
    }

    let today = today();
    let state = &trips.state;
    let user_name = Session::user()
        .map(|user| user.display_name())
        .unwrap_or_else(|| "Traveler".to_string());

    let tabs = TripCategory::ALL.iter().map(|category| {
        let category = *category;
        let active_tab = active_tab.clone();
        let class = if *active_tab == category { "tab active" } else { "tab" };
        html! {
            <button class={class} onclick={Callback::from(move |_: MouseEvent| active_tab.set(category))}>
                {format!("{} ({})", category.label(), state.categorized.get(category).len())}
            </button>
        }
    });

    let visible = state.categorized.get(*active_tab);
    let trip_list = if state.loading {
        html! { <div class="loading">{"Loading trips..."}</div> }
    } else if visible.is_empty() {
        html! {
            <div class="empty-state">
                <p>{format!("No {} trips", active_tab.label().to_lowercase())}</p>
                <button class="btn btn-primary" onclick={Callback::from(|_: MouseEvent| navigate(&Route::CreateTrip))}>
                    {"Plan a trip"}
                </button>
            </div>
        }
    } else {
        html! {
            <div class="trip-grid">
                {for visible.iter().map(|trip| html! {
                    <TripCard key={trip.id.clone()} trip={trip.clone()} category={*active_tab}
                        on_delete={trips.actions.delete_trip.clone()} />
                })}
            </div>
        }
    };

    html! {
        <div class="dashboard">
            <section class="hero" style={format!("background-image: url('{}')", HERO_IMAGES[*hero_index])}>
                <div class="hero-overlay">
                    <h1>{format!("Welcome back, {}", user_name)}</h1>
                    <p>{"Where will your next adventure take you?"}</p>
                    <button class="btn btn-primary" onclick={Callback::from(|_: MouseEvent| navigate(&Route::CreateTrip))}>
                        {"Plan New Trip"}
                    </button>
                </div>
                <div class="hero-dots">
                    {for (0..HERO_IMAGES.len()).map(|index| {
                        let hero_index = hero_index.clone();
                        let hero_cursor = hero_cursor.clone();
                        let class = if index == *hero_index { "dot active" } else { "dot" };
                        let onclick = Callback::from(move |_: MouseEvent| {
                            *hero_cursor.borrow_mut() = index;
                            hero_index.set(index);
                        });
                        html! { <span class={class} {onclick}></span> }
                    })}
                </div>
            </section>

            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
            {if state.using_demo {
                html! {
                    <div class="alert alert-info demo-notice">
                        {"Showing sample trips. Create your own trip to get started."}
                    </div>
                }
            } else {
                html! {}
            }}
            {if let Some(error) = state.error.as_ref() {
                html! { <div class="alert alert-error">{error}</div> }
            } else {
                html! {}
            }}

            <section class="stats-row">
                <div class="stat-card">
                    <span class="stat-value">{state.categorized.total()}</span>
                    <span class="stat-label">{"Total Trips"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{state.categorized.days_until_next(today)}</span>
                    <span class="stat-label">{"Days to Next Trip"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{state.categorized.destination_count()}</span>
                    <span class="stat-label">{"Destinations"}</span>
                </div>
            </section>

            <section class="trips-section">
                <div class="tabs">{for tabs}</div>
                {trip_list}
            </section>
        </div>
    }
}
