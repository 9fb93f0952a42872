use shared::demo::is_demo_id;
use shared::health::{budget_percent, budget_status, HealthBand};
use shared::{BudgetAnalysis, Route, Trip, TripHealth};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::router::navigate;

#[derive(Properties, PartialEq)]
pub struct TripHealthPageProps {
    pub trip_id: AttrValue,
}

#[derive(Clone, PartialEq)]
struct HealthReport {
    trip: Trip,
    health: TripHealth,
    budget: BudgetAnalysis,
}

/// Sample trips live only in the browser, so the API has no health data for them
fn health_notice(trip_id: &str) -> Option<&'static str> {
    is_demo_id(trip_id).then_some("Health checks are available once you create your own trip.")
}

/// API-computed health score and budget use for one trip
#[function_component(TripHealthPage)]
pub fn trip_health_page(props: &TripHealthPageProps) -> Html {
    let report = use_state(|| Option::<HealthReport>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let report = report.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.trip_id.to_string(), move |trip_id: &String| {
            let trip_id = trip_id.clone();
            if health_notice(&trip_id).is_some() {
                loading.set(false);
            } else {
                spawn_local(async move {
                    loading.set(true);
                    let api_client = ApiClient::new();
                    let loaded = futures::try_join!(
                        api_client.get_trip(&trip_id),
                        api_client.get_trip_health(&trip_id),
                        api_client.get_budget_analysis(&trip_id)
                    );
                    match loaded {
                        Ok((trip, health, budget)) => {
                            report.set(Some(HealthReport { trip, health, budget }));
                            error.set(None);
                        }
                        Err(e) => {
                            Logger::error_with_component("trip_health", &format!("Failed to load health for {}: {}", trip_id, e));
                            error.set(Some("Failed to load trip health".to_string()));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let back = {
        let route = Route::TripStops {
            trip_id: props.trip_id.to_string(),
        };
        Callback::from(move |_: MouseEvent| navigate(&route))
    };

    if let Some(notice) = health_notice(&props.trip_id) {
        return html! {
            <div class="page-error">
                <div class="alert alert-info">{notice}</div>
                <button class="btn btn-secondary" onclick={back}>{"Back to Stops"}</button>
            </div>
        };
    }
    if *loading {
        return html! { <div class="loading">{"Checking trip health..."}</div> };
    }
    let Some(report) = report.as_ref() else {
        return html! {
            <div class="page-error">
                <p>{error.as_deref().unwrap_or("Trip health is unavailable")}</p>
                <button class="btn btn-secondary" onclick={back}>{"Back to Stops"}</button>
            </div>
        };
    };

    let band = HealthBand::from_score(report.health.score);
    let percent = budget_percent(report.trip.budget, report.budget.total_spent);
    let status = budget_status(percent);

    html! {
        <div class="trip-health-page">
            <div class="page-header">
                <div>
                    <button class="btn btn-link" onclick={back}>{"← Back to Stops"}</button>
                    <h1>{format!("{} Health", report.trip.name)}</h1>
                </div>
            </div>

            <div class="health-score" style={format!("border-color: {}", band.color())}>
                <span class="health-score-value">{report.health.score}</span>
                <span class="health-score-label">{band.label()}</span>
            </div>

            {if report.health.alerts.is_empty() {
                html! { <p class="hint">{"No issues found with this trip."}</p> }
            } else {
                html! {
                    <div class="health-alerts">
                        {for report.health.alerts.iter().map(|alert| html! {
                            <div class={classes!("alert", alert.severity.css_class())}>{&alert.message}</div>
                        })}
                    </div>
                }
            }}

            <section class="budget-analysis">
                <h2>{"Budget"}</h2>
                <div class={classes!("budget-bar", status.css_class())}>
                    <div class="budget-bar-fill" style={format!("width: {:.0}%", percent.min(100.0))}></div>
                </div>
                <p>{format!("${:.2} spent of ${:.2} ({:.0}%)", report.budget.total_spent, report.trip.budget, percent)}</p>
                {if report.budget.categories.is_empty() { html! {} } else {
                    html! {
                        <table class="budget-table">
                            <thead><tr><th>{"Category"}</th><th>{"Amount"}</th></tr></thead>
                            <tbody>
                                {for report.budget.categories.iter().map(|c| html! {
                                    <tr><td>{&c.category}</td><td>{format!("${:.2}", c.amount)}</td></tr>
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_sample_trips_skip_the_health_api() {
        assert!(health_notice("demo-ongoing-1").is_some());
        assert!(health_notice("trip-42").is_none());
        assert!(health_notice("7").is_none());
    }
}
