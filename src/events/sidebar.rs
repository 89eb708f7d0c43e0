use crate::core::{MenuChange, MobileMenu, SidebarAutoHide, SidebarChange};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const SIDEBAR: &str = ".sidebar-nav";
const TOGGLE: &str = ".mobile-menu-toggle";
const TOGGLE_STYLE: &str = "position: fixed; top: 20px; left: 20px; z-index:1001;";

fn apply_sidebar_change(sidebar: &web::Element, change: SidebarChange) {
    match change {
        SidebarChange::Hide => {
            _ = sidebar.class_list().add_1("hidden");
        }
        SidebarChange::Show => {
            _ = sidebar.class_list().remove_1("hidden");
        }
        SidebarChange::Unchanged => {}
    }
}

/// Hide the sidebar while scrolling down; bring it back at the top of the
/// page or when the pointer nears the left edge.
pub fn init_auto_hide_sidebar(document: &web::Document) -> anyhow::Result<()> {
    let Some(sidebar) = dom::query(document, SIDEBAR) else {
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let state = Rc::new(RefCell::new(SidebarAutoHide::new(dom::scroll_y())));

    let ticking = Rc::new(Cell::new(false));
    let (st, sb) = (state.clone(), sidebar.clone());
    dom::add_passive_listener(&window, "scroll", move |_| {
        let current = dom::scroll_y();
        if ticking.replace(true) {
            return;
        }
        let (st, sb, tk) = (st.clone(), sb.clone(), ticking.clone());
        dom::request_animation_frame(move |_| {
            let change = st.borrow_mut().on_scroll(current);
            apply_sidebar_change(&sb, change);
            tk.set(false);
        });
    });

    let (st, sb) = (state.clone(), sidebar.clone());
    dom::add_listener(document, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let change = st.borrow_mut().on_pointer(ev.client_x() as f64);
            apply_sidebar_change(&sb, change);
        }
    });

    dom::add_passive_listener(document, "touchstart", move |ev| {
        let touch = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0));
        if let Some(touch) = touch {
            let change = state.borrow_mut().on_pointer(touch.client_x() as f64);
            apply_sidebar_change(&sidebar, change);
        }
    });
    Ok(())
}

fn sync_toggle_glyph(document: &web::Document, menu: &MobileMenu) {
    if let Some(toggle) = dom::query_html(document, TOGGLE) {
        toggle.set_inner_text(menu.glyph());
    }
}

/// Close the mobile menu if it is open.
pub fn close_mobile_menu(document: &web::Document, menu: &Rc<RefCell<MobileMenu>>) {
    let was_open = menu.borrow_mut().close();
    if was_open {
        if let Some(sidebar) = dom::query(document, SIDEBAR) {
            _ = sidebar.class_list().remove_1("open");
        }
        sync_toggle_glyph(document, &menu.borrow());
    }
}

fn create_toggle(document: &web::Document, menu: &Rc<RefCell<MobileMenu>>) -> anyhow::Result<()> {
    let toggle = document
        .create_element("button")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    toggle.set_class_name("mobile-menu-toggle");
    toggle.set_text_content(Some(menu.borrow().glyph()));
    toggle.style().set_css_text(TOGGLE_STYLE);

    let (doc, menu) = (document.clone(), menu.clone());
    dom::add_listener(&toggle, "click", move |_| {
        let open = menu.borrow_mut().toggle();
        if let Some(sidebar) = dom::query(&doc, SIDEBAR) {
            _ = sidebar.class_list().toggle_with_force("open", open);
        }
        sync_toggle_glyph(&doc, &menu.borrow());
    });
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&toggle).map_err(dom::js_err)?;
    Ok(())
}

fn apply_menu_change(document: &web::Document, menu: &Rc<RefCell<MobileMenu>>, change: MenuChange) {
    match change {
        MenuChange::CreateToggle => {
            if let Err(e) = create_toggle(document, menu) {
                log::error!("[menu] toggle creation failed: {:?}", e);
            }
        }
        MenuChange::RemoveToggle => {
            if let Some(toggle) = dom::query(document, TOGGLE) {
                toggle.remove();
            }
            if let Some(sidebar) = dom::query(document, SIDEBAR) {
                _ = sidebar.class_list().remove_1("open");
            }
        }
        MenuChange::Unchanged => {}
    }
}

/// Show a floating menu toggle below the mobile breakpoint.
pub fn init_mobile_menu(document: &web::Document, menu: Rc<RefCell<MobileMenu>>) -> anyhow::Result<()> {
    let change = menu.borrow_mut().on_viewport_width(dom::viewport_width());
    apply_menu_change(document, &menu, change);

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let doc = document.clone();
    dom::add_listener(&window, "resize", move |_| {
        let change = menu.borrow_mut().on_viewport_width(dom::viewport_width());
        apply_menu_change(&doc, &menu, change);
    });
    Ok(())
}
