use crate::core::constants::RESIZE_DEBOUNCE_MS;
use crate::core::{
    compute_frame, initial_css_transform, progress_fill_percent, section_scroll_progress,
    CarouselGeometryConfig, CarouselTuning,
};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub struct CarouselView {
    section: web::Element,
    cards: Vec<web::HtmlElement>,
    fill: Option<web::HtmlElement>,
    config: CarouselGeometryConfig,
    tuning: CarouselTuning,
}

impl CarouselView {
    fn scroll_progress(&self) -> f64 {
        let rect = self.section.get_bounding_client_rect();
        section_scroll_progress(dom::viewport_height(), rect.top(), rect.height())
    }

    /// Recompute and apply one frame from the current scroll position.
    pub fn update(&self) {
        let progress = self.scroll_progress();
        if let Some(fill) = &self.fill {
            dom::set_style(fill, "height", &format!("{}%", progress_fill_percent(progress)));
        }
        let frame = compute_frame(progress, &self.config, &self.tuning);
        for (card, t) in self.cards.iter().zip(&frame) {
            dom::set_style(card, "transform", &t.css_transform());
            dom::set_style(card, "opacity", &t.css_opacity());
            dom::set_style(card, "filter", &t.css_filter());
            dom::set_style(card, "z-index", &t.stack_order.to_string());
            _ = card
                .class_list()
                .toggle_with_force("active", t.is_active);
        }
    }

    fn apply_initial(&self) {
        let transform = initial_css_transform(&self.config);
        let opacity = self.config.min_opacity().to_string();
        for card in &self.cards {
            dom::set_style(card, "transform", &transform);
            dom::set_style(card, "opacity", &opacity);
        }
    }
}

pub fn init_carousel(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all_html(document, ".project-card");
    let Some(section) = document.get_element_by_id("projects") else {
        log::warn!("[carousel] #projects section not found");
        return Ok(());
    };
    if cards.is_empty() {
        log::warn!("[carousel] no project cards found");
        return Ok(());
    }
    let config = CarouselGeometryConfig::with_card_count(cards.len())?;
    let view = Rc::new(CarouselView {
        section,
        cards,
        fill: dom::query_html(document, ".scroll-progress-fill"),
        config,
        tuning: CarouselTuning::default(),
    });
    view.apply_initial();

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    // at most one recompute per rendered frame
    let pending = Rc::new(Cell::new(false));
    let (v, p) = (view.clone(), pending.clone());
    dom::add_passive_listener(&window, "scroll", move |_| {
        if p.replace(true) {
            return;
        }
        let (v, p) = (v.clone(), p.clone());
        dom::request_animation_frame(move |_| {
            v.update();
            p.set(false);
        });
    });

    let resize_timer: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let (v, p) = (view.clone(), pending);
    dom::add_listener(&window, "resize", move |_| {
        if let Some(handle) = resize_timer.borrow_mut().take() {
            dom::clear_timeout(handle);
        }
        let (v, p, timer) = (v.clone(), p.clone(), resize_timer.clone());
        *resize_timer.borrow_mut() = dom::set_timeout(RESIZE_DEBOUNCE_MS, move || {
            timer.borrow_mut().take();
            if !p.get() {
                v.update();
            }
        });
    });

    view.update();
    log::info!(
        "[carousel] {} cards, step {:.1}deg",
        view.config.card_count(),
        view.config.angle_step()
    );
    Ok(())
}
