//! Page bindings for the template drag: gesture-start listeners on the
//! template, drag-scoped move/end listeners on the window, and the
//! mount-scoped resize listener.

use crate::app::App;
use crate::dom::{bounding_rect, EventListener};
use aoe_core::{DragHost, Rect};
use glam::Vec2;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Move/end listeners for one gesture. Dropping it unregisters them.
pub struct DragListeners {
    _listeners: Vec<EventListener>,
}

impl DragHost for App {
    type Listeners = DragListeners;

    fn container_rect(&self) -> Option<Rect> {
        self.view
            .container
            .is_connected()
            .then(|| bounding_rect(&self.view.container))
    }

    fn refresh_geometry(&self) {
        self.refresh_bases();
    }

    fn acquire_listeners(&self) -> DragListeners {
        let Some(window) = web::window() else {
            return DragListeners {
                _listeners: Vec::new(),
            };
        };
        let mut listeners = Vec::with_capacity(5);
        for event in ["mousemove", "touchmove"] {
            let app = self.me.clone();
            match EventListener::new(&window, event, move |ev| on_move(&app, &ev)) {
                Ok(l) => listeners.push(l),
                Err(e) => log::error!("[drag] failed to listen for {}: {:?}", event, e),
            }
        }
        for event in ["mouseup", "touchend", "touchcancel"] {
            let app = self.me.clone();
            match EventListener::new(&window, event, move |_ev| on_end(&app)) {
                Ok(l) => listeners.push(l),
                Err(e) => log::error!("[drag] failed to listen for {}: {:?}", event, e),
            }
        }
        DragListeners {
            _listeners: listeners,
        }
    }
}

/// Viewport coordinates of a mouse event, or of the first touch point.
/// Other touch points are ignored.
fn client_point(ev: &web::Event) -> Option<Vec2> {
    if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
        return Some(Vec2::new(m.client_x() as f32, m.client_y() as f32));
    }
    let t = ev.dyn_ref::<web::TouchEvent>()?.touches().item(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn on_start(app: &Weak<App>, ev: &web::Event) {
    let (Some(app), Some(client)) = (app.upgrade(), client_point(ev)) else {
        return;
    };
    ev.prevent_default();
    app.tracker.borrow_mut().pointer_down(&*app, client);
    app.render();
}

fn on_move(app: &Weak<App>, ev: &web::Event) {
    let (Some(app), Some(client)) = (app.upgrade(), client_point(ev)) else {
        return;
    };
    let moved = app.tracker.borrow_mut().pointer_move(client);
    if moved {
        app.render();
    }
}

fn on_end(app: &Weak<App>) {
    if let Some(app) = app.upgrade() {
        app.tracker.borrow_mut().pointer_end();
    }
}

pub fn wire_gesture_start(app: &Rc<App>) -> anyhow::Result<()> {
    let target: &web::EventTarget = app.view.template.as_ref();
    let mut mounted = app.mounted.borrow_mut();
    for event in ["mousedown", "touchstart"] {
        let weak = Rc::downgrade(app);
        let listener = EventListener::new(target, event, move |ev| on_start(&weak, &ev))
            .map_err(|e| anyhow::anyhow!("listen for {}: {:?}", event, e))?;
        mounted.push(listener);
    }
    Ok(())
}

/// Keep the container box current while mounted. Base centres are measured
/// again too, since the regiment may move with the layout.
pub fn wire_resize(app: &Rc<App>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let weak = Rc::downgrade(app);
    let listener = EventListener::new(&window, "resize", move |_ev| {
        let Some(app) = weak.upgrade() else {
            return;
        };
        app.tracker.borrow_mut().update_rect(&*app);
        app.refresh_bases();
        app.render();
    })
    .map_err(|e| anyhow::anyhow!("listen for resize: {:?}", e))?;
    app.mounted.borrow_mut().push(listener);
    Ok(())
}
