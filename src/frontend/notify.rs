use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlElement};

use super::{document, inject_stylesheet_once};
use crate::language::Lang;

const DISPLAY_MS: u32 = 3_000;
const EXIT_MS: u32 = 300;
const SUGGESTION_MS: u32 = 10_000;

const NOTIFICATION_STYLE_ID: &str = "notification-styles";
const NOTIFICATION_CSS: &str = "
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
@keyframes slideIn {
    from { transform: translateY(-10px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
";

#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum Notice {
    Success,
    Error,
}

impl Notice {
    fn background(self) -> &'static str {
        match self {
            Self::Success => "#4CAF50",
            Self::Error => "#f44336",
        }
    }
}

fn floating_div(document: &Document, css_text: &str) -> Option<HtmlElement> {
    let element = document.create_element("div").ok()?;
    let element: HtmlElement = element.dyn_into().ok()?;
    element.style().set_css_text(css_text);
    Some(element)
}

pub(super) fn show_notification(message: &str, notice: Notice) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    inject_stylesheet_once(&document, NOTIFICATION_STYLE_ID, NOTIFICATION_CSS);

    let css = format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 2rem; \
         border-radius: 5px; color: white; font-weight: 500; z-index: 10000; \
         animation: slideInRight 0.3s ease; background: {};",
        notice.background()
    );
    let Some(banner) = floating_div(&document, &css) else {
        return;
    };
    banner.set_text_content(Some(message));

    if body.append_child(&banner).is_err() {
        return;
    }

    Timeout::new(DISPLAY_MS, move || {
        let _ = banner
            .style()
            .set_property("animation", "slideOutRight 0.3s ease");
        Timeout::new(EXIT_MS, move || banner.remove()).forget();
    })
    .forget();
}

// Longer-lived than the transient notice, with a manual close affordance.
pub(super) fn show_language_suggestion(lang: Lang) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    inject_stylesheet_once(&document, NOTIFICATION_STYLE_ID, NOTIFICATION_CSS);

    let Some(banner) = floating_div(
        &document,
        "position: fixed; top: 100px; right: 20px; background: #0056b3; color: white; \
         padding: 15px 20px; border-radius: 8px; box-shadow: 0 5px 15px rgba(0,0,0,0.2); \
         z-index: 10000; display: flex; align-items: center; gap: 10px; \
         animation: slideIn 0.5s ease;",
    ) else {
        return;
    };

    let Ok(text) = document.create_element("div") else {
        return;
    };
    text.set_inner_html(&format!(
        "<strong>Website available in {}</strong>\
         <div style=\"font-size: 0.9em; opacity: 0.9;\">Click the language button to translate</div>",
        lang.native_name()
    ));

    let Some(close) = document
        .create_element("button")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    close.set_text_content(Some("✕"));
    close
        .style()
        .set_css_text("background: transparent; border: none; color: white; cursor: pointer; margin-left: 10px;");
    {
        let banner = banner.clone();
        let on_close = Closure::<dyn FnMut()>::new(move || banner.remove());
        let _ = close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
        on_close.forget();
    }

    let _ = banner.append_child(&text);
    let _ = banner.append_child(&close);
    if body.append_child(&banner).is_err() {
        return;
    }

    Timeout::new(SUGGESTION_MS, move || {
        if banner.parent_node().is_some() {
            banner.remove();
        }
    })
    .forget();
}
