use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::Toast;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dismiss_label = bundle.text("toast.dismiss", "Dismiss");
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(handles)
            },
            props.toasts.clone(),
        );
    }

    html! {
        <div class="toast toast-end toast-bottom z-50" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss, &dismiss_label))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>, dismiss_label: &str) -> Html {
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", toast.kind.alert_class())} role="status">
            <span>{toast.message.clone()}</span>
            <button
                type="button"
                class="btn btn-ghost btn-xs"
                aria-label={dismiss_label.to_string()}
                onclick={on_close}
            >
                {"✕"}
            </button>
        </div>
    }
}
