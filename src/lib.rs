#![cfg(target_arch = "wasm32")]
use crate::core::MobileMenu;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod cards;
mod carousel;
mod contact;
pub mod core;
mod dom;
mod events;
mod nav;
mod reveal;

fn run_step(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[init] {name} failed: {:?}", e);
    }
}

fn init(document: &web::Document) {
    let menu = Rc::new(RefCell::new(MobileMenu::new()));

    run_step("navigation", nav::init_navigation(document, menu.clone()));
    run_step("scroll reveal", reveal::init_scroll_reveal(document));
    run_step("mobile menu", events::sidebar::init_mobile_menu(document, menu));
    let service_modal = cards::init_service_cards(document);
    run_step("parallax", reveal::init_parallax(document));
    run_step("sidebar", events::sidebar::init_auto_hide_sidebar(document));
    let project_cards = cards::init_project_cards(document);
    run_step("carousel", carousel::init_carousel(document));
    run_step("contact form", contact::init_contact_form(document));
    events::keyboard::wire_global_keydown(document, project_cards, service_modal);

    log::info!("celestia-web ready");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("celestia-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_| init(&doc));
    } else {
        init(&document);
    }
    Ok(())
}
