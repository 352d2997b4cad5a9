use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToggleProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or(Some(DaisyColor::Primary))]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Toggle)]
pub(crate) fn toggle(props: &ToggleProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };
    let mut classes = classes!("toggle", props.size.with_prefix("toggle"));
    if let Some(tone) = tone_class("toggle", props.tone) {
        classes.push(tone);
    }

    html! {
        <input
            id={props.id.clone()}
            type="checkbox"
            class={classes}
            checked={props.checked}
            disabled={props.disabled}
            onchange={onchange}
        />
    }
}
