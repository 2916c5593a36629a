use crate::core::{ElementStyle, SectionRect};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Monotonic-enough clock for the snap scheduler, in milliseconds.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn section_rect(element: &web::Element) -> SectionRect {
    let rect = element.get_bounding_client_rect();
    SectionRect {
        top: rect.top(),
        height: rect.height(),
    }
}

/// Write one style triple as inline `opacity`/`transform`.
pub fn apply_style(element: &web::HtmlElement, style: &ElementStyle) {
    let css = element.style();
    _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    let transform = match style.scale {
        Some(scale) => format!("translateY({:.2}px) scale({:.4})", style.translate_y, scale),
        None => format!("translateY({:.2}px)", style.translate_y),
    };
    _ = css.set_property("transform", &transform);
}

/// Smooth animated scroll to an absolute document offset. The browser gives
/// no completion callback for this.
pub fn scroll_to_smooth(window: &web::Window, top: f64) {
    let options = web::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
