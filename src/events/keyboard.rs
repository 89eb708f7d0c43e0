use crate::cards::{ProjectCards, ServiceModal};
use crate::core::{card_key_action, CardKeyAction};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes any open project card and the service modal.
pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    project_cards: Option<&ProjectCards>,
    service_modal: &ServiceModal,
) {
    if card_key_action(&ev.key()) != Some(CardKeyAction::CloseAll) {
        return;
    }
    if let Some(cards) = project_cards {
        cards.close_all();
    }
    service_modal.close();
}

pub fn wire_global_keydown(
    document: &web::Document,
    project_cards: Option<ProjectCards>,
    service_modal: ServiceModal,
) {
    dom::add_listener(document, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(ev, project_cards.as_ref(), &service_modal);
        }
    });
}
