use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Render a textarea instead of an input
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    pub on_input: Callback<String>,
}

#[function_component(InputField)]
pub fn input_field(props: &InputFieldProps) -> Html {
    let class = classes!("form-input", props.error.is_some().then_some("input-error"));

    let control = if props.multiline {
        let on_input = props.on_input.reform(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            area.value()
        });
        html! {
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                class={class}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                rows="3"
                oninput={on_input}
            />
        }
    } else {
        let on_input = props.on_input.reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        });
        html! {
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                class={class}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                min={props.min.clone()}
                max={props.max.clone()}
                oninput={on_input}
            />
        }
    };

    html! {
        <div class="form-group">
            <label for={props.name.clone()}>
                {props.label.clone()}
                {if props.required { html! { <span class="required">{" *"}</span> } } else { html! {} }}
            </label>
            {control}
            {if let Some(error) = props.error.as_ref() {
                html! { <span class="field-error">{error}</span> }
            } else { html! {} }}
        </div>
    }
}
