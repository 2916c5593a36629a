use crate::constants::{
    CONTENT_BLOCK_CLASS, PARALLAX_IMAGE_CLASS, TIMELINE_SECTION_CLASS, YEAR_BADGE_CLASS,
};
use crate::core::constants::SNAP_DEBOUNCE_MS;
use crate::core::{SnapRequest, TimelineState, ViewportSnapshot};
use crate::dom;
use crate::events::nav;
use crate::timer::DebounceTimer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles for one timeline section. Sub-elements are optional; a
/// section missing one simply skips that style write.
pub struct SectionElements {
    pub root: web::Element,
    pub badge: Option<web::HtmlElement>,
    pub image: Option<web::HtmlElement>,
    pub content: Option<web::HtmlElement>,
}

/// Shared handles cloned into each event closure.
#[derive(Clone)]
pub struct TimelineWiring {
    pub sections: Rc<Vec<SectionElements>>,
    pub dots: Rc<Vec<web::Element>>,
    pub state: Rc<RefCell<TimelineState>>,
    pub debounce: Rc<RefCell<DebounceTimer>>,
}

/// Keeps the timeline listeners alive. Dropping the binding removes every
/// listener and cancels the pending debounce, so no callback can reach a
/// torn down view.
pub struct TimelineBinding {
    window: web::Window,
    scroll: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
    dot_clicks: Vec<(web::Element, Closure<dyn FnMut()>)>,
    debounce: Rc<RefCell<DebounceTimer>>,
}

impl Drop for TimelineBinding {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        for (dot, closure) in &self.dot_clicks {
            _ = dot
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        self.debounce.borrow_mut().cancel();
    }
}

fn sub_element(root: &web::Element, class: &str) -> Option<web::HtmlElement> {
    root.query_selector(&format!(".{class}"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn collect_sections(document: &web::Document) -> Vec<SectionElements> {
    let mut sections = Vec::new();
    let Ok(nodes) = document.query_selector_all(&format!(".{TIMELINE_SECTION_CLASS}")) else {
        return sections;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(root) = node.dyn_into::<web::Element>() else {
            continue;
        };
        sections.push(SectionElements {
            badge: sub_element(&root, YEAR_BADGE_CLASS),
            image: sub_element(&root, PARALLAX_IMAGE_CLASS),
            content: sub_element(&root, CONTENT_BLOCK_CLASS),
            root,
        });
    }
    sections
}

/// Wire the parallax timeline on this page, if it has one.
pub fn wire(window: &web::Window, document: &web::Document) -> Option<TimelineBinding> {
    let sections = collect_sections(document);
    if sections.is_empty() {
        log::info!("[timeline] no sections on this page");
        return None;
    }
    log::info!("[timeline] wiring {} sections", sections.len());

    let wiring = TimelineWiring {
        state: Rc::new(RefCell::new(TimelineState::new(sections.len()))),
        sections: Rc::new(sections),
        dots: Rc::new(nav::collect_dots(document)),
        debounce: Rc::new(RefCell::new(DebounceTimer::new())),
    };

    // Initial sample so the first paint reflects the load-time scroll offset.
    apply_sample(&wiring);

    let scroll = {
        let wiring = wiring.clone();
        Closure::wrap(Box::new(move || on_scroll(&wiring)) as Box<dyn FnMut()>)
    };
    let resize = {
        let wiring = wiring.clone();
        Closure::wrap(Box::new(move || apply_sample(&wiring)) as Box<dyn FnMut()>)
    };
    _ = window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

    let dot_clicks = nav::wire_dots(&wiring);

    Some(TimelineBinding {
        window: window.clone(),
        scroll,
        resize,
        dot_clicks,
        debounce: wiring.debounce.clone(),
    })
}

/// Fresh geometry for every event; nothing is cached between samples.
pub(crate) fn take_snapshot(wiring: &TimelineWiring, window: &web::Window) -> ViewportSnapshot {
    ViewportSnapshot {
        scroll_y: dom::scroll_y(window),
        viewport_height: dom::viewport_height(window),
        rects: wiring
            .sections
            .iter()
            .map(|s| s.root.is_connected().then(|| dom::section_rect(&s.root)))
            .collect(),
    }
}

/// Sample the viewport, fold it into the state, and write the styles out.
fn apply_sample(wiring: &TimelineWiring) {
    let Some(window) = web::window() else { return };
    let snapshot = take_snapshot(wiring, &window);
    let updates = wiring.state.borrow_mut().on_sample(&snapshot);
    for update in &updates {
        let section = &wiring.sections[update.index];
        if let Some(el) = &section.badge {
            dom::apply_style(el, &update.styles.badge);
        }
        if let Some(el) = &section.image {
            dom::apply_style(el, &update.styles.image);
        }
        if let Some(el) = &section.content {
            dom::apply_style(el, &update.styles.content);
        }
    }
    if !updates.is_empty() {
        nav::highlight_dot(&wiring.dots, wiring.state.borrow().active_section());
    }
}

fn on_scroll(wiring: &TimelineWiring) {
    apply_sample(wiring);
    wiring.state.borrow_mut().note_scroll(dom::now_ms());

    // Re-arming cancels the pending callback, so only the last event in a
    // burst survives to fire.
    let fire = wiring.clone();
    wiring
        .debounce
        .borrow_mut()
        .schedule(SNAP_DEBOUNCE_MS as i32, move || on_quiesce(&fire));
}

fn on_quiesce(wiring: &TimelineWiring) {
    let Some(window) = web::window() else { return };
    let snapshot = take_snapshot(wiring, &window);
    let request = wiring.state.borrow_mut().on_quiesce(dom::now_ms(), &snapshot);
    issue_snap(&window, request);
}

pub(crate) fn issue_snap(window: &web::Window, request: Option<SnapRequest>) {
    if let Some(request) = request {
        log::debug!(
            "[snap] centering section {} at y={:.0}",
            request.section,
            request.target_y
        );
        dom::scroll_to_smooth(window, request.target_y);
    }
}
