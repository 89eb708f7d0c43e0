use crate::core::constants::{
    REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION,
};
use crate::core::hero_parallax_offset;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_SECTIONS: &str = ".about-section, .services-section, .projects-section, .contact-section";

/// Fade content sections up into place the first time they scroll into view.
pub fn init_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all_html(document, REVEAL_SECTIONS);
    if sections.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                    dom::set_style(el, "opacity", "1");
                    dom::set_style(el, "transform", "translateY(0)");
                }
                // revealed sections stay revealed
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_err)?;
    callback.forget();

    let hidden_transform = format!("translateY({REVEAL_OFFSET_PX}px)");
    for section in &sections {
        dom::set_style(section, "opacity", "0");
        dom::set_style(section, "transform", &hidden_transform);
        dom::set_style(section, "transition", REVEAL_TRANSITION);
        observer.observe(section);
    }
    log::info!("[reveal] {} sections", sections.len());
    Ok(())
}

pub fn init_parallax(document: &web::Document) -> anyhow::Result<()> {
    let Some(hero) = dom::query_html(document, ".hero-content") else {
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    dom::add_passive_listener(&window, "scroll", move |_| {
        if let Some(offset) = hero_parallax_offset(dom::scroll_y(), dom::viewport_height()) {
            dom::set_style(&hero, "transform", &format!("translateY({offset}px)"));
        }
    });
    Ok(())
}
