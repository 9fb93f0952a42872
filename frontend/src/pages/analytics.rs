use shared::analytics::build_report;
use yew::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::charts::{Chart, ChartData};
use crate::hooks::use_alert::use_alert;
use crate::hooks::use_trips::use_trips;
use crate::services::api::ApiClient;

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let api_client = ApiClient::new();
    let alert = use_alert();
    let trips = use_trips(&api_client, &alert.actions, false);
    let report = use_memo(trips.state.trips.clone(), |trips| build_report(trips));

    let state = &trips.state;
    if state.loading {
        return html! { <div class="loading">{"Crunching your travel numbers..."}</div> };
    }

    let stats = &report.stats;
    let stat_cards = [
        ("Total Trips", stats.total_trips.to_string()),
        ("Total Budget", format!("${:.0}", stats.total_budget)),
        ("Activities", stats.total_activities.to_string()),
        ("Cities", stats.total_cities.to_string()),
    ];

    html! {
        <div class="analytics-page">
            <h1>{"Travel Analytics"}</h1>
            <AlertBanner alert={alert.alert.clone()} on_dismiss={alert.actions.dismiss.clone()} />
            {if let Some(error) = state.error.as_ref() {
                html! { <div class="alert alert-error">{error}</div> }
            } else { html! {} }}

            <div class="stats-row">
                {for stat_cards.iter().map(|(label, value)| html! {
                    <div class="stat-card">
                        <span class="stat-value">{value}</span>
                        <span class="stat-label">{*label}</span>
                    </div>
                })}
            </div>

            <div class="chart-grid">
                <Chart title="Budget by Trip" data={ChartData::Budget(report.budget.clone())} />
                <Chart title="Trips per Month" data={ChartData::Trend(report.trend.clone())} />
                <Chart title="Activities by Travel Group" data={ChartData::Categories(report.categories.clone())} />
            </div>
        </div>
    }
}
