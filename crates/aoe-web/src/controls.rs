use crate::app::App;
use crate::constants::{SCALE_FIELD_ATTR, SCALE_INPUT_SELECTOR};
use crate::dom::EventListener;
use aoe_core::ScaleField;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bind every `input[data-scale-field]` to the scale model. Inputs are
/// seeded with the current values; edits re-lay the regiment out when the
/// field affects it and re-render.
pub fn wire_scale_inputs(app: &Rc<App>) -> anyhow::Result<()> {
    let nodes = app
        .view
        .document()
        .query_selector_all(SCALE_INPUT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("query scale inputs: {:?}", e))?;

    let mut mounted = app.mounted.borrow_mut();
    for i in 0..nodes.length() {
        let Some(input) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlInputElement>().ok())
        else {
            continue;
        };
        let name = input.get_attribute(SCALE_FIELD_ATTR).unwrap_or_default();
        let field = match name.parse::<ScaleField>() {
            Ok(f) => f,
            Err(e) => {
                log::warn!("[scale] skipping input: {}", e);
                continue;
            }
        };
        input.set_value(&app.battlefield.borrow().scale.get(field).to_string());

        let weak = Rc::downgrade(app);
        let source = input.clone();
        let listener = EventListener::new(&input, "input", move |_ev| {
            on_input(&weak, field, &source.value());
        })
        .map_err(|e| anyhow::anyhow!("listen for {} input: {:?}", field, e))?;
        mounted.push(listener);
    }
    Ok(())
}

fn on_input(app: &Weak<App>, field: ScaleField, text: &str) {
    let Some(app) = app.upgrade() else {
        return;
    };
    if let Err(e) = app.battlefield.borrow_mut().scale.set_from_str(field, text) {
        log::warn!("[scale] {}", e);
        return;
    }
    if field.affects_layout() {
        app.relayout();
    }
    app.render();
    log::debug!("[scale] {} = {}", field, text);
}
