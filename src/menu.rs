//! Menu controller: a hamburger icon toggling a full-screen navigation
//! overlay. One [`MenuState`] boolean drives three class flags in lockstep:
//! `open` on the icon, `open` on the overlay, `no-scroll` on `<body>`.

use crate::constants::{BODY_NO_SCROLL_CLASS, HAMBURGER_ID, MENU_OPEN_CLASS, MENU_OVERLAY_ID};
use crate::core::MenuState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn sync_flags(
    hamburger: &web::Element,
    overlay: &web::Element,
    body: &web::Element,
    open: bool,
) {
    if open {
        dom::add_class(hamburger, MENU_OPEN_CLASS);
        dom::add_class(overlay, MENU_OPEN_CLASS);
        dom::add_class(body, BODY_NO_SCROLL_CLASS);
    } else {
        dom::remove_class(hamburger, MENU_OPEN_CLASS);
        dom::remove_class(overlay, MENU_OPEN_CLASS);
        dom::remove_class(body, BODY_NO_SCROLL_CLASS);
    }
}

/// Wire the toggle control and the overlay links. Missing markup is logged
/// and skipped; the rest of the page keeps working.
pub fn wire_menu(document: &web::Document) {
    let (Some(hamburger), Some(overlay), Some(body)) = (
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(MENU_OVERLAY_ID),
        document.body(),
    ) else {
        log::warn!("[menu] markup incomplete; menu controller not wired");
        return;
    };
    let body: web::Element = body.into();

    let state = Rc::new(RefCell::new(MenuState::default()));

    {
        let state = state.clone();
        let hamburger_t = hamburger.clone();
        let overlay_t = overlay.clone();
        let body_t = body.clone();
        dom::add_click_listener(&hamburger, move || {
            let open = state.borrow_mut().toggle();
            sync_flags(&hamburger_t, &overlay_t, &body_t, open);
        });
    }

    // Every overlay link force-closes the menu; default navigation is left
    // to the browser.
    let mut link_count = 0u32;
    if let Ok(links) = overlay.query_selector_all("a") {
        for i in 0..links.length() {
            let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let state = state.clone();
            let hamburger_t = hamburger.clone();
            let overlay_t = overlay.clone();
            let body_t = body.clone();
            dom::add_click_listener(&link, move || {
                state.borrow_mut().close();
                sync_flags(&hamburger_t, &overlay_t, &body_t, false);
            });
            link_count += 1;
        }
    }

    log::info!("[menu] wired; {link_count} overlay links");
}
