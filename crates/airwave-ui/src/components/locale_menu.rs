//! Language switch shown in the top bar.
//!
//! # Design
//! - Selection state is owned by the caller; the component only emits choices.

use crate::components::daisy::{DaisySize, Select};
use crate::i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub label: AttrValue,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let options: Vec<(AttrValue, AttrValue)> = LocaleCode::all()
        .iter()
        .map(|locale| (AttrValue::from(locale.code()), AttrValue::from(locale.label())))
        .collect();
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |code: AttrValue| {
            if let Some(locale) = LocaleCode::from_lang_tag(&code) {
                on_select.emit(locale);
            }
        })
    };

    html! {
        <label class="flex items-center gap-2" for="locale-select">
            <span class="text-sm">{props.label.clone()}</span>
            <Select
                id="locale-select"
                size={DaisySize::Sm}
                options={options}
                value={AttrValue::from(props.locale.code())}
                onchange={onchange}
            />
        </label>
    }
}
