use yew::prelude::*;

use crate::hooks::use_alert::Alert;

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub alert: Option<Alert>,
    pub on_dismiss: Callback<()>,
}

#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    let Some(alert) = props.alert.as_ref() else {
        return html! {};
    };
    let on_dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("alert", alert.severity.css_class())} role="alert">
            <span class="alert-message">{&alert.message}</span>
            <button class="alert-close" onclick={on_dismiss}>{"×"}</button>
        </div>
    }
}
