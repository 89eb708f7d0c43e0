//! Expandable project cards and the services modal viewer.
//!
//! Project cards open in place over a backdrop (one at a time, page scroll
//! locked) and lazily load their preview video. Service cards open a modal
//! that plays the card's video at native size.

use crate::core::{card_key_action, CardKeyAction, CardTransition, ExpandableCards};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const BACKDROP_FADE_MS: i32 = 400;

// ---------------- Lazy video helpers ----------------
fn load_and_play(video: &web::HtmlVideoElement) {
    let Some(src) = video.dataset().get("src") else {
        return;
    };
    if video.src().is_empty() {
        video.set_src(&src);
        video.load();
    }
    // autoplay may be blocked until a user gesture; nothing to do about it
    _ = video.play();
}

fn stop_and_unload(video: &web::HtmlVideoElement) {
    _ = video.pause();
    if !video.src().is_empty() {
        _ = video.remove_attribute("src");
        video.load();
    }
}

fn card_video(card: &web::Element, selector: &str) -> Option<web::HtmlVideoElement> {
    card.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|v| v.dyn_into::<web::HtmlVideoElement>().ok())
}

// ---------------- Project cards ----------------
struct ProjectCardsInner {
    document: web::Document,
    cards: Vec<web::HtmlElement>,
    state: ExpandableCards,
    backdrop: Option<web::HtmlElement>,
}

/// Shared handle to the project card state.
#[derive(Clone)]
pub struct ProjectCards {
    inner: Rc<RefCell<ProjectCardsInner>>,
}

impl ProjectCards {
    pub fn toggle(&self, index: usize) {
        let transition = self.inner.borrow_mut().state.toggle(index);
        self.apply(transition);
    }

    pub fn close_all(&self) {
        let transition = self.inner.borrow_mut().state.close_all();
        self.apply(transition);
    }

    fn apply(&self, transition: CardTransition) {
        if transition.is_noop() {
            return;
        }
        let (document, cards) = {
            let inner = self.inner.borrow();
            (inner.document.clone(), inner.cards.clone())
        };
        for &i in &transition.closed {
            let Some(card) = cards.get(i) else { continue };
            _ = card.class_list().remove_1("is-open");
            _ = card.set_attribute("aria-expanded", "false");
            if let Some(video) = card_video(card, ".project-video") {
                stop_and_unload(&video);
            }
        }
        if let Some(card) = transition.opened.and_then(|i| cards.get(i)) {
            _ = card.class_list().add_1("is-open");
            _ = card.set_attribute("aria-expanded", "true");
            if let Some(video) = card_video(card, ".project-video") {
                load_and_play(&video);
            }
            _ = card.focus();
        }
        if transition.overlay_active {
            self.show_backdrop(&document);
        } else {
            self.remove_backdrop();
        }
        if let Some(body) = document.body() {
            let overflow = if transition.overlay_active { "hidden" } else { "" };
            dom::set_style(&body, "overflow", overflow);
        }
    }

    fn show_backdrop(&self, document: &web::Document) {
        if self.inner.borrow().backdrop.is_some() {
            return;
        }
        let Some(backdrop) = document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        backdrop.set_class_name("project-backdrop");
        if let Some(body) = document.body() {
            _ = body.append_child(&backdrop);
        }
        let handle = self.clone();
        dom::add_listener(&backdrop, "click", move |_| handle.close_all());
        // force a reflow so the fade-in transition runs
        _ = backdrop.offset_height();
        _ = backdrop.class_list().add_1("active");
        self.inner.borrow_mut().backdrop = Some(backdrop);
    }

    fn remove_backdrop(&self) {
        let Some(backdrop) = self.inner.borrow_mut().backdrop.take() else {
            return;
        };
        _ = backdrop.class_list().remove_1("active");
        dom::set_timeout(BACKDROP_FADE_MS, move || backdrop.remove());
    }
}

pub fn init_project_cards(document: &web::Document) -> Option<ProjectCards> {
    let cards = dom::query_all_html(document, ".project-card");
    if cards.is_empty() {
        log::warn!("[cards] no project cards found");
        return None;
    }
    let handle = ProjectCards {
        inner: Rc::new(RefCell::new(ProjectCardsInner {
            document: document.clone(),
            state: ExpandableCards::new(cards.len()),
            cards: cards.clone(),
            backdrop: None,
        })),
    };

    for (index, card) in cards.iter().enumerate() {
        _ = card.set_attribute("tabindex", "0");
        _ = card.set_attribute("role", "button");
        _ = card.set_attribute("aria-expanded", "false");
        _ = card.dataset().set("index", &index.to_string());

        let h = handle.clone();
        dom::add_listener(card, "click", move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            h.toggle(index);
        });

        let h = handle.clone();
        dom::add_listener(card, "keydown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            match card_key_action(&ev.key()) {
                Some(CardKeyAction::Toggle) => {
                    ev.prevent_default();
                    h.toggle(index);
                }
                Some(CardKeyAction::CloseAll) => h.close_all(),
                None => {}
            }
        });
    }
    log::info!("[cards] {} project cards wired", cards.len());
    Some(handle)
}

// ---------------- Service modal ----------------
struct OpenModal {
    backdrop: web::Element,
    modal: web::Element,
    video: web::HtmlVideoElement,
}

/// The currently open service modal, if any.
#[derive(Clone, Default)]
pub struct ServiceModal {
    open: Rc<RefCell<Option<OpenModal>>>,
}

impl ServiceModal {
    pub fn close(&self) {
        if let Some(m) = self.open.borrow_mut().take() {
            _ = m.video.pause();
            m.backdrop.remove();
            m.modal.remove();
        }
    }

    fn open(&self, document: &web::Document, source: &web::HtmlVideoElement) -> anyhow::Result<()> {
        self.close();
        let src = if source.src().is_empty() {
            let Some(lazy) = source.dataset().get("src") else {
                return Ok(());
            };
            source.set_src(&lazy);
            source.load();
            lazy
        } else {
            source.src()
        };

        let backdrop = document.create_element("div").map_err(dom::js_err)?;
        backdrop.set_class_name("service-modal-backdrop");
        let modal = document.create_element("div").map_err(dom::js_err)?;
        modal.set_class_name("service-modal");
        let content = document.create_element("div").map_err(dom::js_err)?;
        content.set_class_name("service-modal__content");

        let video = document
            .create_element("video")
            .map_err(dom::js_err)?
            .dyn_into::<web::HtmlVideoElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        video.set_class_name("service-modal__video");
        video.set_controls(false);
        video.set_muted(true);
        video.set_autoplay(true);
        video.set_loop(false);
        _ = video.set_attribute("playsinline", "");
        _ = video.set_attribute("disablepictureinpicture", "");
        _ = video.set_attribute(
            "controlsList",
            "nodownload noplaybackrate noremoteplayback nofullscreen",
        );
        if let Some(poster) = source.get_attribute("poster") {
            _ = video.set_attribute("poster", &poster);
        }
        video.set_src(&src);

        content.append_child(&video).map_err(dom::js_err)?;
        modal.append_child(&content).map_err(dom::js_err)?;
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        body.append_child(&backdrop).map_err(dom::js_err)?;
        body.append_child(&modal).map_err(dom::js_err)?;

        let this = self.clone();
        dom::add_listener(&backdrop, "click", move |_| this.close());
        let this = self.clone();
        dom::add_listener(&modal, "click", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .map(|n| content.contains(Some(&n)))
                .unwrap_or(false);
            if !inside {
                this.close();
            }
        });

        _ = video.play();
        *self.open.borrow_mut() = Some(OpenModal {
            backdrop,
            modal,
            video,
        });
        Ok(())
    }
}

pub fn init_service_cards(document: &web::Document) -> ServiceModal {
    let modal = ServiceModal::default();
    for (i, card) in dom::query_all_html(document, ".service-card")
        .into_iter()
        .enumerate()
    {
        dom::set_style(&card, "animation-delay", &format!("{:.1}s", i as f64 * 0.1));
        let video = card_video(&card, ".service-video");

        let (doc, m, v) = (document.clone(), modal.clone(), video.clone());
        dom::add_listener(&card, "click", move |_| {
            if let Some(v) = &v {
                if let Err(e) = m.open(&doc, v) {
                    log::error!("[cards] service modal: {:?}", e);
                }
            }
        });

        let (doc, m, v) = (document.clone(), modal.clone(), video);
        dom::add_listener(&card, "keydown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if card_key_action(&ev.key()) == Some(CardKeyAction::Toggle) {
                ev.prevent_default();
                if let Some(v) = &v {
                    if let Err(e) = m.open(&doc, v) {
                        log::error!("[cards] service modal: {:?}", e);
                    }
                }
            }
        });
    }
    modal
}
