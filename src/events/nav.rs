use crate::constants::{NAV_DOT_ACTIVE_CLASS, NAV_DOT_CLASS};
use crate::dom;
use crate::events::scroll::{issue_snap, take_snapshot, TimelineWiring};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Navigation dots in document order; index-aligned with the sections.
pub fn collect_dots(document: &web::Document) -> Vec<web::Element> {
    let mut dots = Vec::new();
    let Ok(nodes) = document.query_selector_all(&format!(".{NAV_DOT_CLASS}")) else {
        return dots;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            dots.push(el);
        }
    }
    dots
}

/// Click on dot `i` jumps to section `i`; the listener closures are returned
/// so the binding can remove them at teardown.
pub fn wire_dots(wiring: &TimelineWiring) -> Vec<(web::Element, Closure<dyn FnMut()>)> {
    wiring
        .dots
        .iter()
        .enumerate()
        .map(|(index, dot)| {
            let wiring = wiring.clone();
            let closure =
                Closure::wrap(Box::new(move || go_to(&wiring, index)) as Box<dyn FnMut()>);
            _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            (dot.clone(), closure)
        })
        .collect()
}

fn go_to(wiring: &TimelineWiring, index: usize) {
    let Some(window) = web::window() else { return };
    let snapshot = take_snapshot(wiring, &window);
    let request = wiring
        .state
        .borrow_mut()
        .go_to_section(index, dom::now_ms(), &snapshot);
    if request.is_some() {
        log::info!("[nav] jump to section {index}");
        highlight_dot(&wiring.dots, index);
    }
    issue_snap(&window, request);
}

pub fn highlight_dot(dots: &[web::Element], active: usize) {
    for (index, dot) in dots.iter().enumerate() {
        let classes = dot.class_list();
        if index == active {
            _ = classes.add_1(NAV_DOT_ACTIVE_CLASS);
        } else {
            _ = classes.remove_1(NAV_DOT_ACTIVE_CLASS);
        }
    }
}
