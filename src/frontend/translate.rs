use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlElement, HtmlIFrameElement, HtmlScriptElement};

use super::{document, inject_stylesheet_once};
use crate::language::Lang;

pub(super) const WIDGET_CONTAINER_ID: &str = "translation-widget";

const WIDGET_SCRIPT_URL: &str = "https://translate.google.com/translate_a/element.js";
const INIT_CALLBACK_NAME: &str = "initTranslateWidget";
const MENU_FRAME_SELECTOR: &str = ".goog-te-menu-frame";
const FRAME_POKE_DELAY_MS: u32 = 500;
const PAGE_LANGUAGE: &str = "en";
const INCLUDED_LANGUAGES: &str = "en,fr,ar";

const WIDGET_CHROME_STYLE_ID: &str = "translate-widget-chrome";
const WIDGET_CHROME_CSS: &str = "
.goog-te-banner-frame { display: none !important; }
body { top: 0 !important; }
.goog-te-gadget-simple { border: none !important; background: transparent !important; }
";

// Everything in here pokes at an external widget whose internals are not a
// stable contract; each step is guarded and failure is ignored.
pub(super) fn apply_translation(lang: Lang) {
    if translate_api().is_some() {
        trigger_widget(lang);
    } else {
        load_widget_script(lang);
    }
}

fn translate_api() -> Option<JsValue> {
    let win: JsValue = window()?.into();
    let google = Reflect::get(&win, &JsValue::from_str("google")).ok()?;
    if google.is_undefined() || google.is_null() {
        return None;
    }

    let translate = Reflect::get(&google, &JsValue::from_str("translate")).ok()?;
    if translate.is_undefined() || translate.is_null() {
        return None;
    }
    Some(translate)
}

fn load_widget_script(lang: Lang) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    register_init_callback();

    let Some(script) = document
        .create_element("script")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
    else {
        return;
    };
    script.set_src(&format!(
        "{WIDGET_SCRIPT_URL}?cb={INIT_CALLBACK_NAME}&hl={}",
        lang.code()
    ));
    let _ = body.append_child(&script);
}

// The loader script calls back into a window global once ready. Registered
// at most once; the closure is leaked for the page lifetime.
fn register_init_callback() {
    let Some(win) = window() else {
        return;
    };
    let win: JsValue = win.into();
    let name = JsValue::from_str(INIT_CALLBACK_NAME);

    if Reflect::has(&win, &name).unwrap_or(false) {
        return;
    }

    let init = Closure::<dyn FnMut()>::new(init_widget);
    let _ = Reflect::set(&win, &name, init.as_ref());
    init.forget();
}

fn init_widget() {
    let Some(translate) = translate_api() else {
        return;
    };
    let Ok(ctor) = Reflect::get(&translate, &JsValue::from_str("TranslateElement")) else {
        return;
    };
    let Some(ctor) = ctor.dyn_ref::<Function>() else {
        return;
    };

    let options = Object::new();
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("pageLanguage"),
        &JsValue::from_str(PAGE_LANGUAGE),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("includedLanguages"),
        &JsValue::from_str(INCLUDED_LANGUAGES),
    );
    let _ = Reflect::set(&options, &JsValue::from_str("autoDisplay"), &JsValue::FALSE);

    let args = Array::of2(&options, &JsValue::from_str(WIDGET_CONTAINER_ID));
    let _ = Reflect::construct(ctor, &args);

    if let Some(document) = document() {
        inject_stylesheet_once(&document, WIDGET_CHROME_STYLE_ID, WIDGET_CHROME_CSS);
    }
}

fn trigger_widget(lang: Lang) {
    let Some(document) = document() else {
        return;
    };

    if let Some(container) = document
        .get_element_by_id(WIDGET_CONTAINER_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let _ = container.style().set_property("display", "block");
    }

    Timeout::new(FRAME_POKE_DELAY_MS, move || click_menu_option(lang)).forget();
}

fn click_menu_option(lang: Lang) {
    let Some(document) = document() else {
        return;
    };
    let Some(frame) = document.query_selector(MENU_FRAME_SELECTOR).ok().flatten() else {
        return;
    };
    let Ok(frame) = frame.dyn_into::<HtmlIFrameElement>() else {
        return;
    };
    let Some(frame_document) = frame.content_window().and_then(|win| win.document()) else {
        return;
    };

    let selector = format!("[value=\"{}\"]", lang.code());
    let Some(option) = frame_document.query_selector(&selector).ok().flatten() else {
        return;
    };
    if let Ok(option) = option.dyn_into::<HtmlElement>() {
        option.click();
    }
}
