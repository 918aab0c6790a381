use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

use super::{document, session_storage};

const INTRO_PLAYED_KEY: &str = "portfolio-intro-played";
const TYPE_INTERVAL_MS: u32 = 100;

const BOUNCE_SELECTOR: &str = ".skill";
const BOUNCE_THRESHOLD: f64 = 0.5;
const BOUNCE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const BOUNCE_CLEAR_MS: u32 = 1_000;

const FADE_SELECTOR: &str = ".card, .project-card, .testimonial-card";
const FADE_THRESHOLD: f64 = 0.1;

const PARALLAX_FACTOR: f64 = 0.5;
const PAGE_REVEAL_DELAY_MS: u32 = 100;

pub(super) const PROJECT_LIFT: &str = "translateY(-10px) scale(1.02)";
pub(super) const CARD_LIFT: &str = "translateY(-5px)";
const LIFT_REST: &str = "translateY(0) scale(1)";

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn for_each_element(document: &Document, selector: &str, mut apply: impl FnMut(HtmlElement)) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };

    for index in 0..list.length() {
        if let Some(element) = list
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            apply(element);
        }
    }
}

pub(super) fn reveal_page() {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };

    let _ = body.style().set_property("opacity", "0");
    let _ = body.style().set_property("transition", "opacity 0.5s ease");

    Timeout::new(PAGE_REVEAL_DELAY_MS, move || {
        let _ = body.style().set_property("opacity", "1");
    })
    .forget();
}

pub(super) fn start_typing_intro(hero_heading: &NodeRef) {
    let Some(heading) = hero_heading.cast::<HtmlElement>() else {
        return;
    };
    let Some(storage) = session_storage() else {
        return;
    };
    if matches!(storage.get_item(INTRO_PLAYED_KEY), Ok(Some(_))) {
        return;
    }

    if prefers_reduced_motion() {
        let _ = storage.set_item(INTRO_PLAYED_KEY, "true");
        return;
    }

    let full = heading.text_content().unwrap_or_default();
    if full.is_empty() {
        return;
    }

    heading.set_text_content(Some(""));
    type_next(heading, full, 0);
}

fn type_next(heading: HtmlElement, full: String, shown: usize) {
    let next = match full[shown..].chars().next() {
        Some(ch) => shown + ch.len_utf8(),
        None => {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(INTRO_PLAYED_KEY, "true");
            }
            return;
        }
    };

    heading.set_text_content(Some(&full[..next]));
    Timeout::new(TYPE_INTERVAL_MS, move || type_next(heading, full, next)).forget();
}

// Re-applies on every crossing; the clear timer lets the animation replay.
pub(super) fn start_bounce_watcher() {
    let Some(document) = document() else {
        return;
    };
    if prefers_reduced_motion() {
        return;
    }

    let on_cross = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                continue;
            };

            let _ = target.style().set_property("animation", "bounce 1s ease");
            Timeout::new(BOUNCE_CLEAR_MS, move || {
                let _ = target.style().remove_property("animation");
            })
            .forget();
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(BOUNCE_THRESHOLD));
    options.set_root_margin(BOUNCE_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_cross.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    on_cross.forget();

    for_each_element(&document, BOUNCE_SELECTOR, |element| {
        observer.observe(&element);
    });
}

// One-shot per element: unobserved after the first crossing.
pub(super) fn start_fade_watcher() {
    let Some(document) = document() else {
        return;
    };
    if prefers_reduced_motion() {
        return;
    }

    let on_cross = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };

                let _ = target
                    .style()
                    .set_property("animation", "fadeInUp 0.6s ease forwards");
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_THRESHOLD));

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_cross.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    on_cross.forget();

    for_each_element(&document, FADE_SELECTOR, |element| {
        let _ = element.style().set_property("opacity", "0");
        observer.observe(&element);
    });
}

pub(super) fn start_parallax(hero_section: &NodeRef) {
    let Some(section) = hero_section.cast::<HtmlElement>() else {
        return;
    };
    let Some(win) = window() else {
        return;
    };
    if prefers_reduced_motion() {
        return;
    }

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(win) = window() else {
            return;
        };
        let Ok(offset) = win.page_y_offset() else {
            return;
        };
        let shift = offset * PARALLAX_FACTOR;
        let _ = section
            .style()
            .set_property("transform", &format!("translateY({shift}px)"));
    });

    let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

pub(super) fn hover_lift(lift: &'static str) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let enter = Callback::from(move |event: MouseEvent| set_hover_transform(&event, lift));
    let leave = Callback::from(|event: MouseEvent| set_hover_transform(&event, LIFT_REST));
    (enter, leave)
}

fn set_hover_transform(event: &MouseEvent, value: &str) {
    let Some(target) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = target.style().set_property("transform", value);
}
