//! DOM read-out of the battlefield: template circle, base markers and the
//! impact summary. Also measures rendered bases back from the page.

use crate::constants::{
    BASE_SELECTOR, BATTLEFIELD_ID, DERIVED_ID, REGIMENT_ID, SUMMARY_ID, TEMPLATE_ID,
};
use crate::dom::{bounding_rect, element_by_id, set_style};
use crate::format;
use aoe_core::{Base, Battlefield, ImpactedBase, ScaleConfig};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct View {
    document: web::Document,
    pub container: web::HtmlElement,
    pub template: web::HtmlElement,
    regiment: web::HtmlElement,
    summary: web::Element,
    derived: Option<web::Element>,
}

impl View {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            container: element_by_id(document, BATTLEFIELD_ID)?,
            template: element_by_id(document, TEMPLATE_ID)?,
            regiment: element_by_id(document, REGIMENT_ID)?,
            summary: element_by_id(document, SUMMARY_ID)?,
            derived: document.get_element_by_id(DERIVED_ID),
        })
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    /// Size the regiment block to the current scale so the page can place it.
    pub fn size_regiment(&self, scale: &ScaleConfig) {
        set_style(&self.regiment, "width", &format::px(scale.regiment_width_px()));
        set_style(&self.regiment, "height", &format::px(scale.regiment_height_px()));
    }

    /// Top-left of the regiment block relative to the container.
    pub fn regiment_origin(&self) -> Vec2 {
        let container = bounding_rect(&self.container);
        container.to_local(bounding_rect(&self.regiment).origin())
    }

    /// Centres of the rendered base markers relative to the container, in
    /// document order. `None` when no markers are on the page yet.
    pub fn measure_bases(&self) -> Option<Vec<Base>> {
        let nodes = self.regiment.query_selector_all(BASE_SELECTOR).ok()?;
        if nodes.length() == 0 {
            return None;
        }
        let container = bounding_rect(&self.container);
        let bases = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .enumerate()
            .map(|(id, el)| Base {
                id,
                center: container.to_local(bounding_rect(&el).center()),
            })
            .collect();
        Some(bases)
    }

    pub fn render(&self, battlefield: &Battlefield, template_center: Vec2) {
        let scale = &battlefield.scale;
        self.render_template(scale, template_center);

        let impacted = battlefield.impacted_bases(template_center);
        self.render_bases(scale, &impacted);

        let summary = aoe_core::summarize(&impacted);
        self.summary
            .set_text_content(Some(format::summary_text(&summary).as_str()));
        if let Some(el) = &self.derived {
            el.set_text_content(Some(format::derived_text(scale).as_str()));
        }
    }

    fn render_template(&self, scale: &ScaleConfig, center: Vec2) {
        let size = scale.template_size_px();
        let radius = scale.template_radius_px();
        set_style(&self.template, "width", &format::px(size));
        set_style(&self.template, "height", &format::px(size));
        set_style(&self.template, "left", &format::px(center.x - radius));
        set_style(&self.template, "top", &format::px(center.y - radius));
    }

    fn render_bases(&self, scale: &ScaleConfig, impacted: &[ImpactedBase]) {
        if self.regiment.child_element_count() as usize != impacted.len() {
            self.rebuild_markers(impacted.len());
        }

        let size = scale.base_size_px();
        let half = scale.half_base_px();
        let origin = self.regiment_origin();
        let children = self.regiment.children();
        for (i, b) in impacted.iter().enumerate() {
            let Some(el) = children
                .item(i as u32)
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            let local = b.base.center - origin;
            el.set_class_name(&format::base_class(b.impact));
            set_style(&el, "width", &format::px(size));
            set_style(&el, "height", &format::px(size));
            set_style(&el, "left", &format::px(local.x - half));
            set_style(&el, "top", &format::px(local.y - half));
        }
    }

    fn rebuild_markers(&self, count: usize) {
        self.regiment.set_inner_html("");
        for _ in 0..count {
            match self.document.create_element("div") {
                Ok(el) => {
                    _ = self.regiment.append_child(&el);
                }
                Err(e) => {
                    log::warn!("[view] failed to create base marker: {:?}", e);
                    return;
                }
            }
        }
        log::debug!("[view] rebuilt {} base markers", count);
    }
}
