use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(AttrValue, AttrValue)>,
    /// Leading empty option, when the field may be left unset
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = props.on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    html! {
        <div class="form-group">
            <label for={props.name.clone()}>{props.label.clone()}</label>
            <select
                id={props.name.clone()}
                name={props.name.clone()}
                class={classes!("form-input", props.error.is_some().then_some("input-error"))}
                onchange={on_change}
            >
                {if let Some(placeholder) = props.placeholder.as_ref() {
                    html! { <option value="" selected={props.value.is_empty()}>{placeholder.clone()}</option> }
                } else { html! {} }}
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label.clone()}</option>
                })}
            </select>
            {if let Some(error) = props.error.as_ref() {
                html! { <span class="field-error">{error}</span> }
            } else { html! {} }}
        </div>
    }
}
