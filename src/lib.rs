#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
pub mod core;
mod dom;
mod events;
mod navbar;
mod timer;

/// Listener bindings for the current page. Held for the page lifetime;
/// dropping them detaches every listener and pending timer.
struct PageBindings {
    _timeline: Option<events::TimelineBinding>,
    _navbar: Option<navbar::NavbarBinding>,
    _contact: Option<contact::ContactBinding>,
}

thread_local! {
    static BINDINGS: RefCell<Option<PageBindings>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("zlatarna-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let bindings = PageBindings {
        _timeline: events::scroll::wire(&window, &document),
        _navbar: navbar::wire(&window, &document),
        _contact: contact::wire(&document),
    };
    BINDINGS.with(|slot| *slot.borrow_mut() = Some(bindings));
    Ok(())
}
