use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub input_mode: Option<AttrValue>,
    #[prop_or_default]
    pub max_length: Option<u16>,
    /// Marks the field invalid and links it to the element holding the message.
    #[prop_or_default]
    pub error_id: Option<AttrValue>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let invalid = props.error_id.is_some();
    let tone = tone_class("input", invalid.then_some(DaisyColor::Error));
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    let mut classes = classes!("input", props.size.with_prefix("input"), props.class.clone());
    if let Some(tone) = tone {
        classes.push(tone);
    }

    html! {
        <input
            id={props.id.clone()}
            type="text"
            class={classes}
            placeholder={props.placeholder.clone()}
            inputmode={props.input_mode.clone()}
            maxlength={props.max_length.map(|len| AttrValue::from(len.to_string()))}
            aria-invalid={invalid.then_some("true")}
            aria-describedby={props.error_id.clone()}
            value={props.value.clone()}
            oninput={oninput}
        />
    }
}
