use gloo::history::{BrowserHistory, History};
use shared::demo::DEMO_TOKEN;
use shared::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::activities::ActivitiesPage;
use crate::pages::activity_search::ActivitySearchPage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::calendar_view::CalendarPage;
use crate::pages::create_trip::CreateTripPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::itinerary::ItineraryPage;
use crate::pages::login::LoginPage;
use crate::pages::settings::SettingsPage;
use crate::pages::shared_trip::SharedTripPage;
use crate::pages::signup::SignupPage;
use crate::pages::timeline::TimelinePage;
use crate::pages::trip_health::TripHealthPage;
use crate::pages::trip_stops::TripStopsPage;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::router::{current_path, redirect};
use crate::services::storage::{apply_theme, Session};

fn render_page(route: &Route) -> Html {
    match route.clone() {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::CreateTrip => html! { <CreateTripPage /> },
        Route::TripStops { trip_id } => html! { <TripStopsPage trip_id={trip_id} /> },
        Route::Activities { trip_id, stop_id } => html! { <ActivitiesPage trip_id={trip_id} stop_id={stop_id} /> },
        Route::Timeline { trip_id } => html! { <TimelinePage trip_id={trip_id} /> },
        Route::Itinerary { trip_id } => html! { <ItineraryPage trip_id={trip_id} /> },
        Route::TripHealth { trip_id } => html! { <TripHealthPage trip_id={trip_id} /> },
        Route::SharedTrip { token } => html! { <SharedTripPage token={token} /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::Calendar => html! { <CalendarPage /> },
        Route::Search => html! { <ActivitySearchPage /> },
        Route::Settings => html! { <SettingsPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let path = use_state(current_path);

    // Follow history changes from navigate/redirect and the back button
    {
        let path = path.clone();
        use_effect_with((), move |_| {
            apply_theme(Session::theme());
            let listener = BrowserHistory::new().listen(move || path.set(current_path()));
            move || drop(listener)
        });
    }

    // Drop a token the API no longer accepts
    use_effect_with((), |_| {
        if Session::token().is_some_and(|token| token != DEMO_TOKEN) {
            spawn_local(async {
                match ApiClient::new().verify_token().await {
                    Ok(user) => {
                        if let Err(e) = Session::set_user(&user) {
                            Logger::warn_with_component("app", &format!("Failed to cache user: {}", e));
                        }
                    }
                    Err(e) if e.is_unauthorized() => {
                        Logger::info_with_component("app", "Session expired, signing out");
                        Session::clear();
                        redirect(&Route::Login);
                    }
                    Err(e) => Logger::warn_with_component("app", &format!("Could not verify session: {}", e)),
                }
            });
        }
        || ()
    });

    let route = Route::from_path(&path).guard(Session::has_token());

    {
        let route = route.clone();
        let path = (*path).clone();
        use_effect_with((route, path), |(route, path)| {
            if route.to_path() != *path {
                Logger::debug_with_component("app", &format!("Redirecting {} to {}", path, route.to_path()));
                redirect(route);
            }
            || ()
        });
    }

    let with_navbar = route.requires_auth();

    html! {
        <div class="app">
            {if with_navbar {
                html! { <Navbar current={route.clone()} /> }
            } else { html! {} }}
            <main class="app-content">
                {render_page(&route)}
            </main>
        </div>
    }
}
