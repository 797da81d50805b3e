//! Event wiring for the dispatcher: scroll events are coalesced into at
//! most one pending animation frame; resize triggers an immediate full
//! rediscovery, independent of the coalescing flag.

use crate::dom;
use crate::frame::FrameContext;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DispatcherWiring {
    pub ctx: Rc<RefCell<FrameContext>>,
    pub ticking: Rc<Cell<bool>>,
}

pub fn wire_scroll(window: &web::Window, document: &web::Document, w: &DispatcherWiring) {
    // The recomputation closure is created once and re-scheduled for every
    // coalesced scroll burst.
    let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let ctx = w.ctx.clone();
        let ticking = w.ticking.clone();
        let window = window.clone();
        let document = document.clone();
        *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ctx.borrow_mut().frame(&window, &document);
            ticking.set(false);
        }) as Box<dyn FnMut()>));
    }

    let ticking = w.ticking.clone();
    let window_rq = window.clone();
    let scroll_closure = Closure::wrap(Box::new(move || {
        if ticking.get() {
            return;
        }
        ticking.set(true);
        if let Some(cb) = frame_cb.borrow().as_ref() {
            let _ = window_rq.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        scroll_closure.as_ref().unchecked_ref(),
        &opts,
    );
    scroll_closure.forget();
}

pub fn wire_resize(window: &web::Window, document: &web::Document, w: &DispatcherWiring) {
    let ctx = w.ctx.clone();
    let window_r = window.clone();
    let document_r = document.clone();
    dom::add_window_listener(window, "resize", move || {
        let mut ctx = ctx.borrow_mut();
        ctx.rescan(&document_r);
        ctx.frame(&window_r, &document_r);
    });
}
