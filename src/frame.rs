//! Per-frame update. Owns the registry between scans, prunes entries whose
//! wrapper left the document, evaluates each enabled behavior against its
//! fresh bounding rectangle, applies the resulting style directives, and
//! refreshes the optional HUD.

use crate::constants::{
    ACTIVE_ANIMATIONS_ID, ELEMENT_COUNT_ID, FPS_ID, PROGRESS_FILL_ID, REVEAL_CLASS,
    SCROLL_POSITION_ID,
};
use crate::core::{scroll_progress_percent, Directive, FpsCounter, Rect, StyleOp, Target};
use crate::dom;
use crate::registry::{Entry, Registry};
use instant::Instant;
use web_sys as web;

pub struct FrameContext {
    pub registry: Registry,
    fps: FpsCounter,
    epoch: Instant,
    last_active: u32,
}

impl FrameContext {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            fps: FpsCounter::new(0.0),
            epoch: Instant::now(),
            last_active: 0,
        }
    }

    /// Rebuild the registry wholesale (startup, resize, explicit refresh).
    pub fn rescan(&mut self, document: &web::Document) {
        self.registry = Registry::scan(document);
        log::info!("[scrollfx] registry rebuilt; {} elements", self.registry.len());
    }

    pub fn active_count(&self) -> u32 {
        self.last_active
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// One coalesced recomputation pass over every registered element.
    pub fn frame(&mut self, window: &web::Window, document: &web::Document) {
        let scroll_top = window.page_y_offset().unwrap_or(0.0);
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        self.registry.retain_attached(document);

        let mut active = 0u32;
        for entry in self.registry.values() {
            if !entry.enabled {
                continue;
            }
            let rect = bounding_rect(&entry.element);
            if !entry.behavior.is_active(rect, viewport_h as f32) {
                continue;
            }
            active += 1;
            let directives = entry
                .behavior
                .evaluate(rect, viewport_h as f32, scroll_top as f32);
            apply_directives(entry, &directives);
        }
        self.last_active = active;

        let doc_height = document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        dom::set_width_percent_by_id(
            document,
            PROGRESS_FILL_ID,
            scroll_progress_percent(scroll_top, doc_height, viewport_h),
        );

        let fps = self.fps.on_frame(self.epoch.elapsed().as_secs_f64());
        dom::set_text_by_id(document, ELEMENT_COUNT_ID, &self.registry.len().to_string());
        dom::set_text_by_id(document, ACTIVE_ANIMATIONS_ID, &active.to_string());
        dom::set_text_by_id(
            document,
            SCROLL_POSITION_ID,
            &(scroll_top.round() as i64).to_string(),
        );
        dom::set_text_by_id(document, FPS_ID, &fps.to_string());
    }
}

fn bounding_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        top: r.top() as f32,
        bottom: r.bottom() as f32,
        height: r.height() as f32,
    }
}

fn apply_directives(entry: &Entry, directives: &[Directive]) {
    for d in directives {
        match d.target {
            Target::Wrapper => apply_op(&entry.element, d.op),
            Target::Child(role) => {
                for child in entry.children.iter().filter(|c| c.role == role) {
                    apply_op(&child.element, d.op);
                }
            }
        }
    }
}

fn apply_op(el: &web::Element, op: StyleOp) {
    match op {
        StyleOp::RotateDeg(deg) => dom::set_transform(el, &format!("rotate({deg}deg)")),
        StyleOp::Scale(s) => dom::set_transform(el, &format!("scale({s})")),
        StyleOp::TranslateXVw(x) => dom::set_transform(el, &format!("translateX({x}vw)")),
        StyleOp::TranslateYPx(y) => dom::set_transform(el, &format!("translateY({y}px)")),
        StyleOp::Opacity(o) => dom::set_opacity(el, o),
        StyleOp::Reveal => dom::add_class(el, REVEAL_CLASS),
    }
}
