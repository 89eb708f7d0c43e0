use crate::core::constants::{
    INITIAL_HASH_DELAY_MS, SECTION_OBSERVER_ROOT_MARGIN, SECTION_OBSERVER_THRESHOLDS,
    SMOOTH_SCROLL_DURATION_MS,
};
use crate::core::{
    ease_in_out_quad, indicator_offset, initial_active, nav_scroll_target, parse_fragment,
    MobileMenu, SectionRect, SectionVisibilityResolver,
};
use crate::dom;
use crate::events::sidebar;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const NAV_LINKS: &str = ".nav-menu a";

fn nav_link_for(document: &web::Document, id: &str) -> Option<web::Element> {
    dom::query(document, &format!(".nav-menu a[href=\"#{id}\"]"))
}

pub fn clear_active_nav(document: &web::Document) {
    for a in dom::query_all(document, NAV_LINKS) {
        _ = a.class_list().remove_1("active");
        if let Some(parent) = a.parent_element() {
            _ = parent.class_list().remove_1("active");
        }
    }
    if let Some(menu) = dom::query_html(document, ".nav-menu") {
        dom::set_style(&menu, "--knob-opacity", "0");
    }
}

/// Highlight the nav item for `id` and slide the knob to it; `None` clears.
pub fn set_active_nav(document: &web::Document, id: Option<&str>) {
    clear_active_nav(document);
    let Some(id) = id else { return };
    let Some(link) = nav_link_for(document, id) else {
        return;
    };
    _ = link.class_list().add_1("active");
    if let Some(parent) = link.parent_element() {
        _ = parent.class_list().add_1("active");
    }
    let item = link.closest("li").ok().flatten();
    if let (Some(item), Some(menu)) = (item, dom::query_html(document, ".nav-menu")) {
        let menu_rect = menu.get_bounding_client_rect();
        let item_rect = item.get_bounding_client_rect();
        let top = indicator_offset(menu_rect.top(), item_rect.top(), item_rect.bottom());
        dom::set_style(&menu, "--knob-top", &format!("{top}px"));
        dom::set_style(&menu, "--knob-opacity", "1");
    }
}

pub fn init_navigation(document: &web::Document, menu: Rc<RefCell<MobileMenu>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let smooth_supported = supports_smooth_scroll(document);

    for link in dom::query_all(document, NAV_LINKS) {
        let doc = document.clone();
        let menu = menu.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::add_listener(&link, "click", move |ev| {
            ev.prevent_default();
            let Some(id) = parse_fragment(&href) else {
                return;
            };
            let Some(target) = doc
                .get_element_by_id(id)
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let top = nav_scroll_target(target.offset_top() as f64);
            if smooth_supported {
                scroll_smooth(top);
            } else {
                animate_scroll(top, SMOOTH_SCROLL_DURATION_MS);
            }
            sidebar::close_mobile_menu(&doc, &menu);
            replace_hash(id);
        });
    }

    setup_section_observer(document)?;

    let initial_hash = window.location().hash().unwrap_or_default();
    if let Some(id) = parse_fragment(&initial_hash).map(str::to_owned) {
        let doc = document.clone();
        dom::set_timeout(INITIAL_HASH_DELAY_MS, move || {
            set_active_nav(&doc, Some(&id));
        });
    }

    let doc = document.clone();
    dom::add_listener(&window, "hashchange", move |_| {
        let hash = web::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        set_active_nav(&doc, parse_fragment(&hash));
    });
    Ok(())
}

fn setup_section_observer(document: &web::Document) -> anyhow::Result<()> {
    let sections: Vec<web::Element> = dom::query_all(document, "section[id]")
        .into_iter()
        .filter(|s| nav_link_for(document, &s.id()).is_some())
        .collect();
    if sections.is_empty() {
        log::info!("[nav] no navigable sections; section tracking disabled");
        return Ok(());
    }

    let resolver = Rc::new(RefCell::new(SectionVisibilityResolver::new(
        sections.iter().map(|s| s.id()),
    )));

    let doc = document.clone();
    let resolver_cb = resolver.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let mut resolver = resolver_cb.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                resolver.update_entry(
                    &entry.target().id(),
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
            }
            set_active_nav(&doc, resolver.resolve_active());
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(SECTION_OBSERVER_ROOT_MARGIN);
    let thresholds: js_sys::Array = SECTION_OBSERVER_THRESHOLDS
        .iter()
        .map(|t| JsValue::from_f64(*t))
        .collect();
    options.set_threshold(&thresholds);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_err)?;
    callback.forget();
    for s in &sections {
        observer.observe(s);
    }
    log::info!("[nav] observing {} sections", resolver.borrow().len());

    let vh = dom::viewport_height();
    let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
    let rects = sections.iter().zip(&ids).map(|(s, id)| {
        let r = s.get_bounding_client_rect();
        (
            id.as_str(),
            SectionRect {
                top: r.top(),
                bottom: r.bottom(),
            },
        )
    });
    if let Some(id) = initial_active(rects, vh) {
        set_active_nav(document, Some(id));
    }
    Ok(())
}

fn replace_hash(id: &str) {
    if let Some(history) = web::window().and_then(|w| w.history().ok()) {
        _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
    }
}

fn supports_smooth_scroll(document: &web::Document) -> bool {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| js_sys::Reflect::has(&el.style(), &JsValue::from_str("scrollBehavior")))
        .and_then(Result::ok)
        .unwrap_or(false)
}

fn scroll_smooth(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Eased scroll driven by animation frames, for browsers without CSS
/// `scroll-behavior`.
fn animate_scroll(target: f64, duration_ms: f64) {
    let start = dom::scroll_y();
    let delta = target - start;
    let start_time: Rc<RefCell<Option<f64>>> = Rc::new(RefCell::new(None));
    step_scroll(start, delta, duration_ms, start_time);
}

fn step_scroll(start: f64, delta: f64, duration_ms: f64, start_time: Rc<RefCell<Option<f64>>>) {
    dom::request_animation_frame(move |now| {
        let t0 = *start_time.borrow_mut().get_or_insert(now);
        let elapsed = now - t0;
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, ease_in_out_quad(elapsed, start, delta, duration_ms));
        }
        if elapsed < duration_ms {
            step_scroll(start, delta, duration_ms, start_time);
        }
    });
}
