use crate::constants::{HEADER_HIDDEN_CLASS, SITE_HEADER_ID};
use crate::core::navbar_visible;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll listener that hides the header while scrolling down. Dropping the
/// binding removes the listener.
pub struct NavbarBinding {
    window: web::Window,
    scroll: Closure<dyn FnMut()>,
}

impl Drop for NavbarBinding {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
    }
}

pub fn wire(window: &web::Window, document: &web::Document) -> Option<NavbarBinding> {
    let header = document.get_element_by_id(SITE_HEADER_ID)?;
    let last_scroll_y = Rc::new(RefCell::new(0.0_f64));

    let scroll = {
        let header = header.clone();
        Closure::wrap(Box::new(move || {
            let Some(window) = web::window() else { return };
            let scroll_y = dom::scroll_y(&window);
            let classes = header.class_list();
            if navbar_visible(scroll_y, *last_scroll_y.borrow()) {
                _ = classes.remove_1(HEADER_HIDDEN_CLASS);
            } else {
                _ = classes.add_1(HEADER_HIDDEN_CLASS);
            }
            *last_scroll_y.borrow_mut() = scroll_y;
        }) as Box<dyn FnMut()>)
    };
    _ = window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());

    Some(NavbarBinding {
        window: window.clone(),
        scroll,
    })
}
