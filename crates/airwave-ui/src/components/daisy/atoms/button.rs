use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let mut classes = classes!(
        "btn",
        props.size.with_prefix("btn"),
        props.outline.then_some("btn-outline"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("btn", props.tone) {
        classes.push(tone);
    }

    html! {
        <button
            type="button"
            class={classes}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
