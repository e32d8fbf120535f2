//! Circle-vs-square overlap classification.
//!
//! Each base is sampled at its four corners: a corner counts as covered when
//! its distance to the template centre is at most the radius. This is an
//! approximation of true intersection; a circle that clips an edge without
//! reaching a corner leaves the base unaffected.

use crate::error::ParseError;
use crate::geometry::square_corners;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImpactType {
    #[default]
    None,
    Partial,
    Total,
}

impl ImpactType {
    /// Map a count of covered corners (0..=4) to an impact type.
    #[inline]
    pub fn from_corners_inside(count: usize) -> Self {
        match count {
            0 => ImpactType::None,
            4.. => ImpactType::Total,
            _ => ImpactType::Partial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactType::None => "none",
            ImpactType::Partial => "partial",
            ImpactType::Total => "total",
        }
    }
}

impl fmt::Display for ImpactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ImpactType::None),
            "partial" => Ok(ImpactType::Partial),
            "total" => Ok(ImpactType::Total),
            other => Err(ParseError::UnknownImpact(other.to_string())),
        }
    }
}

/// A unit base: fixed centre in container pixels. The square footprint's
/// side comes from the scale model, not from the base.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Base {
    pub id: usize,
    pub center: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactedBase {
    pub base: Base,
    pub impact: ImpactType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImpactSummary {
    pub totals: usize,
    pub partials: usize,
}

#[inline]
pub fn corners_inside(
    base_center: Vec2,
    half_base: f32,
    template_center: Vec2,
    radius: f32,
) -> usize {
    square_corners(base_center, half_base)
        .iter()
        .filter(|corner| corner.distance(template_center) <= radius)
        .count()
}

#[inline]
pub fn classify_base(
    base_center: Vec2,
    half_base: f32,
    template_center: Vec2,
    radius: f32,
) -> ImpactType {
    ImpactType::from_corners_inside(corners_inside(base_center, half_base, template_center, radius))
}

/// Classify every base against the template. Output order and length match
/// the input.
pub fn classify(
    bases: &[Base],
    template_center: Vec2,
    radius: f32,
    half_base: f32,
) -> Vec<ImpactedBase> {
    bases
        .iter()
        .map(|base| ImpactedBase {
            base: *base,
            impact: classify_base(base.center, half_base, template_center, radius),
        })
        .collect()
}

pub fn summarize(impacted: &[ImpactedBase]) -> ImpactSummary {
    impacted
        .iter()
        .fold(ImpactSummary::default(), |mut acc, b| {
            match b.impact {
                ImpactType::Total => acc.totals += 1,
                ImpactType::Partial => acc.partials += 1,
                ImpactType::None => {}
            }
            acc
        })
}
