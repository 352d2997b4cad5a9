//! Data broadcasting settings panel.
//!
//! # Design
//! - Storage writes happen inside the change handlers; there is no save button.
//! - A failed write is reported through an error toast and leaves the form as it was.

use airwave_nvram::{NvramError, NvramResult};
use tracing::{error, info};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::preferences::persist_settings;
use crate::components::daisy::{Button, DaisyColor, DaisySize, Input, Select, Toggle};
use crate::core::breakpoints::{Breakpoint, LG, is_small_screen};
use crate::core::store::{AppStore, set_data_broadcasting};
use crate::features::data_broadcasting::logic::{
    POSTAL_CODE_INVALID_KEY, edit_postal_code, load_form, prefecture_options, reset_form,
    select_prefecture,
};
use crate::features::data_broadcasting::state::DataBroadcastingForm;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastKind;
use crate::services::storage::BrowserStorage;

const POSTAL_CODE_ERROR_ID: &str = "data-broadcasting-postal-code-error";

#[function_component(DataBroadcastingSettings)]
pub(crate) fn data_broadcasting_settings() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let small_screen = is_small_screen(use_context::<Breakpoint>().unwrap_or(LG));
    let size = DaisySize::for_layout(small_screen);
    let t = |key: &str| bundle.text(key, "");

    let dispatch = Dispatch::<AppStore>::new();
    let enabled = use_selector(|store: &AppStore| store.settings.tv_show_data_broadcasting);
    let form = use_state(DataBroadcastingForm::default);

    {
        let form = form.clone();
        use_effect_with_deps(
            move |_| {
                match BrowserStorage::local() {
                    Ok(storage) => form.set(load_form(storage)),
                    Err(err) => error!(error = %err, "receiver information unavailable"),
                }
                || ()
            },
            (),
        );
    }

    let on_toggle = dispatch.reduce_mut_callback_with(|store: &mut AppStore, value: bool| {
        set_data_broadcasting(store, value);
        persist_settings(&store.settings);
    });

    let on_postal_code = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let failure = t("data_broadcasting.save_failed");
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            let outcome = with_storage(|storage| edit_postal_code(storage, &mut next, &value));
            match outcome {
                Ok(edit) => info!(?edit, "postal code edited"),
                Err(err) => report_failure(&dispatch, &err, failure.clone()),
            }
            form.set(next);
        })
    };

    let on_prefecture = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let failure = t("data_broadcasting.save_failed");
        Callback::from(move |key: AttrValue| {
            let mut next = (*form).clone();
            match with_storage(|storage| select_prefecture(storage, &mut next, &key)) {
                Ok(_) => form.set(next),
                Err(err) => report_failure(&dispatch, &err, failure.clone()),
            }
        })
    };

    let on_reset = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let done = t("data_broadcasting.reset_done");
        let failure = t("data_broadcasting.reset_failed");
        Callback::from(move |_| {
            let mut next = (*form).clone();
            match with_storage(|storage| reset_form(storage, &mut next)) {
                Ok(_) => {
                    form.set(next);
                    let message = done.clone();
                    dispatch.reduce_mut(move |store| {
                        store.toasts.push(ToastKind::Success, message);
                    });
                }
                Err(err) => report_failure(&dispatch, &err, failure.clone()),
            }
        })
    };

    let options: Vec<(AttrValue, AttrValue)> = prefecture_options(bundle.locale)
        .into_iter()
        .map(|(key, label)| (AttrValue::from(key), AttrValue::from(label)))
        .collect();
    let row = if small_screen {
        classes!("flex", "flex-col", "gap-2")
    } else {
        classes!("flex", "items-center", "justify-between", "gap-6")
    };

    html! {
        <div class="card bg-base-200">
            <div class="card-body gap-6">
                <div class={row.clone()}>
                    <label for="data-broadcasting-enable" class="flex flex-col">
                        <span class="font-semibold">{t("data_broadcasting.enable")}</span>
                        <span class="text-sm opacity-70">{t("data_broadcasting.enable_help")}</span>
                    </label>
                    <Toggle
                        id="data-broadcasting-enable"
                        size={size}
                        checked={*enabled}
                        onchange={on_toggle}
                    />
                </div>
                <div class={row.clone()}>
                    <label for="data-broadcasting-postal-code" class="flex flex-col">
                        <span class="font-semibold">{t("data_broadcasting.postal_code")}</span>
                        <span class="text-sm opacity-70">{t("data_broadcasting.postal_code_help")}</span>
                    </label>
                    <div class="flex flex-col gap-1">
                        <Input
                            id="data-broadcasting-postal-code"
                            size={size}
                            value={AttrValue::from(form.postal_code.clone())}
                            placeholder={AttrValue::from(t("data_broadcasting.postal_code_placeholder"))}
                            input_mode={AttrValue::from("numeric")}
                            max_length={8}
                            error_id={form.postal_code_invalid.then_some(AttrValue::from(POSTAL_CODE_ERROR_ID))}
                            oninput={on_postal_code}
                        />
                        if form.postal_code_invalid {
                            <span id={POSTAL_CODE_ERROR_ID} class="text-sm text-error" role="alert">
                                {t(POSTAL_CODE_INVALID_KEY)}
                            </span>
                        }
                    </div>
                </div>
                <div class={row.clone()}>
                    <label for="data-broadcasting-prefecture" class="flex flex-col">
                        <span class="font-semibold">{t("data_broadcasting.prefecture")}</span>
                        <span class="text-sm opacity-70">{t("data_broadcasting.prefecture_help")}</span>
                    </label>
                    <Select
                        id="data-broadcasting-prefecture"
                        size={size}
                        options={options}
                        value={AttrValue::from(form.prefecture_key.clone())}
                        onchange={on_prefecture}
                    />
                </div>
                <div class={row}>
                    <div class="flex flex-col">
                        <span class="font-semibold">{t("data_broadcasting.reset")}</span>
                        <span class="text-sm opacity-70">{t("data_broadcasting.reset_help")}</span>
                    </div>
                    <Button tone={Some(DaisyColor::Error)} outline={true} size={size} onclick={on_reset}>
                        {t("data_broadcasting.reset")}
                    </Button>
                </div>
            </div>
        </div>
    }
}

fn with_storage<T>(f: impl FnOnce(BrowserStorage) -> NvramResult<T>) -> NvramResult<T> {
    f(BrowserStorage::local()?)
}

fn report_failure(dispatch: &Dispatch<AppStore>, err: &NvramError, message: String) {
    error!(error = %err, "data broadcasting storage write failed");
    dispatch.reduce_mut(move |store| {
        store.toasts.push(ToastKind::Error, message);
    });
}
