use crate::impact::{classify, summarize, Base, ImpactSummary, ImpactedBase};
use crate::regiment::regiment_bases;
use crate::scale::ScaleConfig;
use glam::Vec2;

/// Scale inputs plus the current base centres. Classification results are
/// derived on every call; nothing here caches them.
#[derive(Clone, Debug)]
pub struct Battlefield {
    pub scale: ScaleConfig,
    bases: Vec<Base>,
}

impl Battlefield {
    pub fn new(scale: ScaleConfig, regiment_origin: Vec2) -> Self {
        let mut bf = Self {
            scale,
            bases: Vec::new(),
        };
        bf.relayout(regiment_origin);
        bf
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Replace the base centres, e.g. with positions measured from the page.
    pub fn set_bases(&mut self, bases: Vec<Base>) {
        self.bases = bases;
    }

    /// Rebuild the regiment grid from the current scale inputs.
    pub fn relayout(&mut self, regiment_origin: Vec2) {
        self.bases = regiment_bases(
            regiment_origin,
            self.scale.rows,
            self.scale.columns,
            self.scale.base_size_px(),
        );
        log::debug!(
            "[scale] relayout {}x{} bases of {:.1}px at ({:.1},{:.1})",
            self.scale.rows,
            self.scale.columns,
            self.scale.base_size_px(),
            regiment_origin.x,
            regiment_origin.y
        );
    }

    pub fn impacted_bases(&self, template_center: Vec2) -> Vec<ImpactedBase> {
        classify(
            &self.bases,
            template_center,
            self.scale.template_radius_px(),
            self.scale.half_base_px(),
        )
    }

    pub fn summary(&self, template_center: Vec2) -> ImpactSummary {
        summarize(&self.impacted_bases(template_center))
    }
}
