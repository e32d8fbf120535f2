// Host-side tests for the DOM text/class formatting helpers.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod format {
    include!("../src/format.rs");
}

use aoe_core::{Battlefield, ImpactSummary, ImpactType, ScaleConfig, ScaleField};
use format::*;

#[test]
fn px_formats_whole_and_fractional_values() {
    assert_eq!(px(80.0), "80px");
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(-40.0), "-40px");
}

#[test]
fn base_class_carries_impact_suffix() {
    assert_eq!(base_class(ImpactType::None), "base impact-none");
    assert_eq!(base_class(ImpactType::Partial), "base impact-partial");
    assert_eq!(base_class(ImpactType::Total), "base impact-total");
}

#[test]
fn summary_text_shows_both_counts() {
    let s = ImpactSummary {
        totals: 5,
        partials: 16,
    };
    assert_eq!(summary_text(&s), "Total: 5 • Partial: 16");
    assert_eq!(summary_text(&ImpactSummary::default()), "Total: 0 • Partial: 0");
}

#[test]
fn derived_text_uses_current_scale() {
    let mut scale = ScaleConfig::default();
    assert_eq!(
        derived_text(&scale),
        "Base: 80px • Regiment: 400×400px • Template: 300px"
    );
    scale.set(ScaleField::Columns, 3.0);
    scale.set(ScaleField::ScaleFactor, 2.0);
    assert_eq!(
        derived_text(&scale),
        "Base: 40px • Regiment: 120×200px • Template: 150px"
    );
}

#[test]
fn rendered_summary_matches_battlefield() {
    let bf = Battlefield::new(ScaleConfig::default(), glam::Vec2::ZERO);
    let text = summary_text(&bf.summary(glam::Vec2::new(200.0, 200.0)));
    assert_eq!(text, "Total: 5 • Partial: 16");
}
