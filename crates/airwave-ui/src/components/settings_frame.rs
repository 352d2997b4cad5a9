//! Shared frame for settings pages.
//!
//! # Design
//! - Owns the page chrome (title, back link) so panels only render their rows.
//! - Switches to a single-column, edge-to-edge layout on small screens.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsFrameProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub back_label: AttrValue,
    #[prop_or_default]
    pub small_screen: bool,
    #[prop_or_default]
    pub on_back: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SettingsFrame)]
pub(crate) fn settings_frame(props: &SettingsFrameProps) -> Html {
    let container = if props.small_screen {
        classes!("settings-frame", "w-full", "px-3", "py-4")
    } else {
        classes!("settings-frame", "max-w-3xl", "mx-auto", "px-8", "py-10")
    };
    let back = props.on_back.clone().map_or_else(Html::default, |on_back| {
        html! {
            <button
                type="button"
                class="btn btn-ghost btn-sm"
                aria-label={props.back_label.clone()}
                onclick={on_back}
            >
                {"←"}
                if !props.small_screen {
                    <span>{props.back_label.clone()}</span>
                }
            </button>
        }
    });

    html! {
        <section class={container}>
            <header class="flex items-center gap-3 mb-6">
                {back}
                <div>
                    <h1 class={if props.small_screen { "text-xl font-bold" } else { "text-2xl font-bold" }}>
                        {props.title.clone()}
                    </h1>
                    {props.subtitle.clone().map(|text| html! {
                        <p class="text-sm opacity-70">{text}</p>
                    }).unwrap_or_default()}
                </div>
            </header>
            <div class="flex flex-col gap-6">
                { for props.children.iter() }
            </div>
        </section>
    }
}
