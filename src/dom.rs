use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_window_listener(window: &web::Window, event: &str, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Style writes go through the inline `style` declaration so the classes
/// driving layout stay untouched.
#[inline]
pub fn set_style_property(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(name, value);
    }
}

#[inline]
pub fn set_transform(el: &web::Element, value: &str) {
    set_style_property(el, "transform", value);
}

#[inline]
pub fn set_opacity(el: &web::Element, value: f32) {
    set_style_property(el, "opacity", &value.to_string());
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Presence-checked text write for the optional HUD counters.
#[inline]
pub fn set_text_by_id(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Presence-checked width write for the scroll progress fill.
#[inline]
pub fn set_width_percent_by_id(document: &web::Document, id: &str, percent: f64) {
    if let Some(el) = document.get_element_by_id(id) {
        set_style_property(&el, "width", &format!("{percent}%"));
    }
}
