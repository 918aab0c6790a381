use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use super::notify::show_language_suggestion;
use super::translate::apply_translation;
use super::{document, persist_language, stored_language};
use crate::language::Lang;

const SUGGESTION_DELAY_MS: u32 = 1_000;

fn detected_language() -> Lang {
    let locale = window()
        .and_then(|win| win.navigator().language())
        .unwrap_or_default();
    Lang::from_locale(&locale)
}

#[function_component(LanguageMenu)]
pub(super) fn language_menu() -> Html {
    // A persisted choice is displayed on load; translation is not re-applied.
    let current = use_state(|| stored_language().unwrap_or(Lang::En));
    let open = use_state(|| false);

    use_effect_with((), move |_| {
        let detected = detected_language();
        if detected.suggests_translation() {
            Timeout::new(SUGGESTION_DELAY_MS, move || {
                show_language_suggestion(detected);
            })
            .forget();
        }
        || ()
    });

    // Any click outside the menu closes it; the listener lives as long as
    // the page does.
    {
        let open = open.clone();
        use_effect_with((), move |_| {
            let on_document_click = Closure::<dyn FnMut()>::new(move || open.set(false));
            if let Some(document) = document() {
                let _ = document.add_event_listener_with_callback(
                    "click",
                    on_document_click.as_ref().unchecked_ref(),
                );
            }
            on_document_click.forget();
            || ()
        });
    }

    let on_button = {
        let open = open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            open.set(!*open);
        })
    };

    let on_pick = {
        let current = current.clone();
        let open = open.clone();
        Callback::from(move |lang: Lang| {
            current.set(lang);
            apply_translation(lang);
            open.set(false);
            persist_language(lang);
        })
    };

    html! {
        <div class="lang-select">
            <button
                class="lang-button"
                type="button"
                aria-haspopup="listbox"
                aria-expanded={(*open).to_string()}
                onclick={on_button}
            >
                <span class="lang-code">{(*current).label()}</span>
                <span aria-hidden="true">{" ▾"}</span>
            </button>
            <ul class={classes!("lang-dropdown", (*open).then_some("show"))}>
                { for Lang::ALL.iter().copied().map(|lang| {
                    let on_pick = on_pick.clone();
                    html! {
                        <li>
                            <button
                                class="lang-option"
                                type="button"
                                onclick={Callback::from(move |_| on_pick.emit(lang))}
                            >
                                { lang.native_name() }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
