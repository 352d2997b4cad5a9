use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub options: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<AttrValue>,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value().into());
            }
        })
    };

    html! {
        <select
            id={props.id.clone()}
            class={classes!("select", props.size.with_prefix("select"), props.class.clone())}
            onchange={onchange}
        >
            {for props.options.iter().map(|(value, label)| {
                html! {
                    <option value={value.clone()} selected={*value == props.value}>
                        {label.clone()}
                    </option>
                }
            })}
        </select>
    }
}
