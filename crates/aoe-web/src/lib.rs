#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod app;
mod constants;
mod controls;
mod dom;
mod drag;
mod format;
mod view;

use app::App;

thread_local! {
    // Keeps the mounted app alive between events; cleared by `teardown`.
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aoe-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = App::mount(&document)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Unmount: release the resize, gesture and control listeners.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.teardown();
    }
}

/// Current template centre as `[x, y]`, relative to the battlefield.
#[wasm_bindgen(js_name = templatePosition)]
pub fn template_position() -> Vec<f32> {
    APP.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|app| app.template_position().to_array().to_vec())
            .unwrap_or_default()
    })
}

/// `{ totals, partials }` for the current template position.
#[wasm_bindgen(js_name = impactSummary)]
pub fn impact_summary() -> JsValue {
    let summary = APP.with(|slot| {
        slot.borrow().as_ref().map(|app| {
            app.battlefield
                .borrow()
                .summary(app.template_position())
        })
    });
    let obj = js_sys::Object::new();
    let summary = summary.unwrap_or_default();
    _ = js_sys::Reflect::set(&obj, &"totals".into(), &(summary.totals as u32).into());
    _ = js_sys::Reflect::set(&obj, &"partials".into(), &(summary.partials as u32).into());
    obj.into()
}
