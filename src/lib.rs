#![cfg(target_arch = "wasm32")]
//! Browser-side UI behaviors for the marketing site, compiled to
//! WebAssembly: a hamburger-menu controller and a scroll-position-driven
//! visual-effects dispatcher. The page calls [`init`] once and keeps the
//! returned [`ScrollFx`] handle; there is no ambient global instance.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod menu;
mod registry;

use frame::FrameContext;
use registry::Registry;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollfx-web starting");
    Ok(())
}

/// Handle over the running dispatcher, returned by [`init`].
#[wasm_bindgen]
pub struct ScrollFx {
    ctx: Rc<RefCell<FrameContext>>,
}

#[wasm_bindgen]
impl ScrollFx {
    /// Re-discover animated elements, e.g. after inserting sections
    /// dynamically. Same path as the resize handler.
    pub fn refresh(&self) {
        if let Some(window) = web::window() {
            if let Some(document) = window.document() {
                let mut ctx = self.ctx.borrow_mut();
                ctx.rescan(&document);
                ctx.frame(&window, &document);
            }
        }
    }

    /// Enable or disable one registered animation by its registry key.
    /// Returns false when the key is unknown.
    pub fn set_enabled(&self, key: &str, enabled: bool) -> bool {
        self.ctx.borrow_mut().registry.set_enabled(key, enabled)
    }

    pub fn element_count(&self) -> u32 {
        self.ctx.borrow().registry.len() as u32
    }

    pub fn active_count(&self) -> u32 {
        self.ctx.borrow().active_count()
    }

    pub fn fps(&self) -> u32 {
        self.ctx.borrow().fps()
    }
}

/// Wire the menu controller and the scroll-effects dispatcher and return
/// the handle. When the document is still loading, the first scan and
/// update are deferred to `DOMContentLoaded`; the listeners are live either
/// way.
#[wasm_bindgen]
pub fn init() -> Result<ScrollFx, JsValue> {
    build().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn build() -> anyhow::Result<ScrollFx> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ctx = Rc::new(RefCell::new(FrameContext::new(Registry::default())));
    let ticking = Rc::new(Cell::new(false));
    let wiring = events::DispatcherWiring {
        ctx: ctx.clone(),
        ticking,
    };
    events::wire_scroll(&window, &document, &wiring);
    events::wire_resize(&window, &document, &wiring);

    if document.ready_state() == web::DocumentReadyState::Loading {
        let ctx_ready = ctx.clone();
        let window_ready = window.clone();
        let document_ready = document.clone();
        let ready_closure = Closure::wrap(Box::new(move || {
            start_page(&window_ready, &document_ready, &ctx_ready);
        }) as Box<dyn FnMut()>);
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            ready_closure.as_ref().unchecked_ref(),
        );
        ready_closure.forget();
    } else {
        start_page(&window, &document, &ctx);
    }

    Ok(ScrollFx { ctx })
}

fn start_page(window: &web::Window, document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    menu::wire_menu(document);
    let mut ctx = ctx.borrow_mut();
    ctx.rescan(document);
    ctx.frame(window, document);
    log::info!(
        "[scrollfx] initialized; {} elements registered",
        ctx.registry.len()
    );
}
