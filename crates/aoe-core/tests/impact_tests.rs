// Host-side tests for circle-vs-square impact classification.

use aoe_core::*;
use glam::Vec2;

fn base(id: usize, x: f32, y: f32) -> Base {
    Base {
        id,
        center: Vec2::new(x, y),
    }
}

#[test]
fn one_corner_inside_is_partial() {
    // Corners at (110,110),(150,110),(110,150),(150,150);
    // distances ~14.1, 53.9, 53.9, 70.7 from (100,100).
    let t = Vec2::new(100.0, 100.0);
    assert_eq!(corners_inside(Vec2::new(130.0, 130.0), 20.0, t, 50.0), 1);
    assert_eq!(
        classify_base(Vec2::new(130.0, 130.0), 20.0, t, 50.0),
        ImpactType::Partial
    );
}

#[test]
fn base_under_template_centre_is_total() {
    let t = Vec2::new(100.0, 100.0);
    assert_eq!(corners_inside(t, 20.0, t, 50.0), 4);
    assert_eq!(classify_base(t, 20.0, t, 50.0), ImpactType::Total);
}

#[test]
fn distant_base_is_none() {
    let t = Vec2::new(100.0, 100.0);
    let far = Vec2::new(400.0, 100.0);
    assert_eq!(corners_inside(far, 20.0, t, 50.0), 0);
    assert_eq!(classify_base(far, 20.0, t, 50.0), ImpactType::None);
}

#[test]
fn corner_exactly_on_radius_counts_as_inside() {
    // Corner (3,4) is exactly 5 from the origin.
    let n = corners_inside(Vec2::new(4.0, 5.0), 1.0, Vec2::ZERO, 5.0);
    assert_eq!(n, 1);
}

#[test]
fn edge_clip_without_corner_is_none() {
    // Circle reaches x=10 which is past the base's left edge at x=9, but no
    // corner is within reach.
    let impact = classify_base(Vec2::new(15.0, 0.0), 6.0, Vec2::ZERO, 10.0);
    assert_eq!(impact, ImpactType::None);
}

#[test]
fn corner_counts_map_to_impact_types() {
    assert_eq!(ImpactType::from_corners_inside(0), ImpactType::None);
    for n in 1..=3 {
        assert_eq!(ImpactType::from_corners_inside(n), ImpactType::Partial);
    }
    assert_eq!(ImpactType::from_corners_inside(4), ImpactType::Total);
}

#[test]
fn classify_preserves_order_and_length() {
    let bases = vec![
        base(0, 400.0, 400.0),
        base(1, 100.0, 100.0),
        base(2, 130.0, 130.0),
    ];
    let out = classify(&bases, Vec2::new(100.0, 100.0), 50.0, 20.0);
    assert_eq!(out.len(), bases.len());
    let ids: Vec<usize> = out.iter().map(|b| b.base.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(out[0].impact, ImpactType::None);
    assert_eq!(out[1].impact, ImpactType::Total);
    assert_eq!(out[2].impact, ImpactType::Partial);
    // Input positions are carried through untouched.
    assert_eq!(out[2].base, bases[2]);
}

#[test]
fn classification_does_not_depend_on_input_order() {
    let t = Vec2::new(200.0, 200.0);
    let bases = regiment_bases(Vec2::ZERO, 5, 5, 80.0);
    let forward = classify(&bases, t, 150.0, 40.0);

    let mut reversed_input = bases.clone();
    reversed_input.reverse();
    let reversed = classify(&reversed_input, t, 150.0, 40.0);

    for b in &reversed {
        let same = forward.iter().find(|f| f.base.id == b.base.id).unwrap();
        assert_eq!(same.impact, b.impact, "base {} changed class", b.base.id);
    }
    assert_eq!(summarize(&forward), summarize(&reversed));
}

#[test]
fn summary_counts_totals_and_partials() {
    let bases = vec![
        base(0, 100.0, 100.0),
        base(1, 105.0, 95.0),
        base(2, 130.0, 130.0),
        base(3, 400.0, 400.0),
    ];
    let out = classify(&bases, Vec2::new(100.0, 100.0), 50.0, 20.0);
    assert_eq!(
        summarize(&out),
        ImpactSummary {
            totals: 2,
            partials: 1
        }
    );
    assert_eq!(summarize(&[]), ImpactSummary::default());
}

#[test]
fn impact_type_names_round_trip() {
    for t in [ImpactType::None, ImpactType::Partial, ImpactType::Total] {
        assert_eq!(t.to_string().parse::<ImpactType>(), Ok(t));
    }
    assert_eq!(
        "half".parse::<ImpactType>(),
        Err(ParseError::UnknownImpact("half".to_string()))
    );
}
