use crate::constants::{BASE_CLASS, IMPACT_CLASS_PREFIX};
use aoe_core::{ImpactSummary, ImpactType, ScaleConfig};

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

/// Class list for one base marker, e.g. `"base impact-partial"`.
#[inline]
pub fn base_class(impact: ImpactType) -> String {
    format!("{} {}{}", BASE_CLASS, IMPACT_CLASS_PREFIX, impact.as_str())
}

pub fn summary_text(summary: &ImpactSummary) -> String {
    format!("Total: {} • Partial: {}", summary.totals, summary.partials)
}

pub fn derived_text(scale: &ScaleConfig) -> String {
    format!(
        "Base: {:.0}px • Regiment: {:.0}×{:.0}px • Template: {:.0}px",
        scale.base_size_px(),
        scale.regiment_width_px(),
        scale.regiment_height_px(),
        scale.template_size_px()
    )
}
