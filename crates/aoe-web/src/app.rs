use crate::dom::EventListener;
use crate::drag::DragListeners;
use crate::view::View;
use aoe_core::{Battlefield, DragTracker, ScaleConfig, DEFAULT_TEMPLATE_POSITION};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Everything the page binds to. Listeners hold a `Weak` back-reference so
/// dropping the last `Rc` (see `teardown`) frees the whole graph.
pub struct App {
    pub me: Weak<App>,
    pub view: View,
    pub battlefield: RefCell<Battlefield>,
    pub tracker: RefCell<DragTracker<DragListeners>>,
    pub mounted: RefCell<Vec<EventListener>>,
}

impl App {
    pub fn mount(document: &web::Document) -> anyhow::Result<Rc<App>> {
        let view = View::from_document(document)?;
        let scale = ScaleConfig::default();
        view.size_regiment(&scale);
        let battlefield = Battlefield::new(scale, view.regiment_origin());

        let app = Rc::new_cyclic(|me| App {
            me: me.clone(),
            view,
            battlefield: RefCell::new(battlefield),
            tracker: RefCell::new(DragTracker::new(DEFAULT_TEMPLATE_POSITION)),
            mounted: RefCell::new(Vec::new()),
        });

        app.tracker.borrow_mut().update_rect(&*app);
        crate::drag::wire_gesture_start(&app)?;
        crate::drag::wire_resize(&app)?;
        crate::controls::wire_scale_inputs(&app)?;
        app.render();

        log::info!(
            "[app] mounted with {} bases, {} listeners",
            app.battlefield.borrow().bases().len(),
            app.mounted.borrow().len()
        );
        Ok(app)
    }

    pub fn template_position(&self) -> Vec2 {
        self.tracker.borrow().position()
    }

    /// Resize the regiment for the current scale and lay its bases out again.
    pub fn relayout(&self) {
        self.view.size_regiment(&self.battlefield.borrow().scale);
        let origin = self.view.regiment_origin();
        self.battlefield.borrow_mut().relayout(origin);
    }

    /// Replace laid-out base centres with the ones measured on the page.
    pub fn refresh_bases(&self) {
        if let Some(bases) = self.view.measure_bases() {
            self.battlefield.borrow_mut().set_bases(bases);
        }
    }

    pub fn render(&self) {
        let position = self.template_position();
        self.view.render(&self.battlefield.borrow(), position);
    }

    /// Release every listener, including any in-flight drag.
    pub fn teardown(&self) {
        self.tracker.borrow_mut().pointer_end();
        let released = self.mounted.borrow_mut().drain(..).count();
        log::info!("[app] torn down, released {} listeners", released);
    }
}
