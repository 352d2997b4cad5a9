//! App shell: context providers, the settings page and the toast host.

pub(crate) mod preferences;

use airwave_telemetry::{LoggingConfig, init_logging_with_writer};
use gloo::events::EventListener;
use gloo::utils::window;
use preferences::{load_locale, load_settings, persist_locale};
use tracing::{info, warn};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::components::locale_menu::LocaleMenu;
use crate::components::settings_frame::SettingsFrame;
use crate::components::toast::ToastHost;
use crate::core::breakpoints::{Breakpoint, for_viewport, is_small_screen};
use crate::core::store::AppStore;
use crate::features::data_broadcasting::view::DataBroadcastingSettings;
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::services::console::ConsoleMakeWriter;

#[function_component(AirwaveApp)]
pub(crate) fn airwave_app() -> Html {
    let locale = use_state(load_locale);
    let breakpoint = use_state(current_breakpoint);
    let dispatch = Dispatch::<AppStore>::new();
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| store.settings = load_settings());
                || ()
            },
            (),
        );
    }
    {
        let breakpoint = breakpoint.clone();
        use_effect(move || {
            let handler = EventListener::new(&window(), "resize", {
                let breakpoint = breakpoint.clone();
                move |_event| {
                    let bp = current_breakpoint();
                    if bp != *breakpoint {
                        breakpoint.set(bp);
                    }
                }
            });
            move || drop(handler)
        });
    }
    use_effect_with_deps(
        |locale: &LocaleCode| {
            persist_locale(*locale);
            apply_lang(*locale);
            || ()
        },
        *locale,
    );

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };
    let on_dismiss = dispatch.reduce_mut_callback_with(|store: &mut AppStore, id: u64| {
        store.toasts.dismiss(id);
    });
    let on_back = Callback::from(|_: MouseEvent| {
        if let Err(err) = window().history().and_then(|history| history.back()) {
            warn!(error = ?err, "history navigation failed");
        }
    });

    let small_screen = is_small_screen(*breakpoint);
    let t = |key: &str| bundle.text(key, "");

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ContextProvider<Breakpoint> context={*breakpoint}>
                <div class="min-h-screen bg-base-100" data-bp={breakpoint.name}>
                    <nav class="navbar bg-base-200 px-4">
                        <div class="flex-1">
                            <span class="font-bold">{"Airwave"}</span>
                            <span class="ml-2 opacity-70">{t("nav.settings")}</span>
                        </div>
                        <LocaleMenu
                            locale={*locale}
                            label={AttrValue::from(t("nav.locale"))}
                            on_select={on_locale}
                        />
                    </nav>
                    <SettingsFrame
                        title={AttrValue::from(t("data_broadcasting.title"))}
                        subtitle={AttrValue::from(t("data_broadcasting.subtitle"))}
                        back_label={AttrValue::from(t("nav.back"))}
                        small_screen={small_screen}
                        on_back={on_back}
                    >
                        <DataBroadcastingSettings />
                    </SettingsFrame>
                    <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
                </div>
            </ContextProvider<Breakpoint>>
        </ContextProvider<TranslationBundle>>
    }
}

fn apply_lang(locale: LocaleCode) {
    if let Some(root) = window().document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("lang", locale.code());
    }
}

fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(1280.0);
    for_viewport(width)
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging_with_writer(&LoggingConfig::default(), ConsoleMakeWriter) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    info!("starting airwave ui");
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AirwaveApp>::with_root(root).render();
    } else {
        yew::Renderer::<AirwaveApp>::new().render();
    }
}
