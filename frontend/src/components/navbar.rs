use shared::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::router::navigate;
use crate::services::storage::Session;

const LINKS: [(&str, Route); 5] = [
    ("Dashboard", Route::Dashboard),
    ("Calendar", Route::Calendar),
    ("Analytics", Route::Analytics),
    ("Search", Route::Search),
    ("Settings", Route::Settings),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Route,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let user_name = Session::user()
        .map(|user| user.display_name())
        .unwrap_or_else(|| "Traveler".to_string());

    let on_logout = Callback::from(|_: MouseEvent| {
        spawn_local(async {
            // The session is dropped locally whatever the API says
            if let Err(e) = ApiClient::new().logout().await {
                Logger::warn_with_component("navbar", &format!("Logout request failed: {}", e));
            }
            Session::clear();
            navigate(&Route::Login);
        });
    });

    let on_create = Callback::from(|_: MouseEvent| navigate(&Route::CreateTrip));

    html! {
        <nav class="navbar">
            <div class="navbar-brand" onclick={Callback::from(|_: MouseEvent| navigate(&Route::Dashboard))}>
                {"Planora"}
            </div>
            <div class="navbar-links">
                {for LINKS.iter().map(|(label, route)| {
                    let target = route.clone();
                    let class = if *route == props.current { "nav-link active" } else { "nav-link" };
                    html! {
                        <button class={class} onclick={Callback::from(move |_: MouseEvent| navigate(&target))}>
                            {*label}
                        </button>
                    }
                })}
            </div>
            <div class="navbar-right">
                <button class="btn btn-primary" onclick={on_create}>{"+ New Trip"}</button>
                <span class="navbar-user">{format!("Hi, {}", user_name)}</span>
                <button class="btn btn-secondary" onclick={on_logout}>{"Logout"}</button>
            </div>
        </nav>
    }
}
