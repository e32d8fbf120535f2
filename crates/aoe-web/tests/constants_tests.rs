// Host-side checks that the page bindings stay consistent with each other
// and with the scale field names the core understands.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use aoe_core::ScaleField;
use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [BATTLEFIELD_ID, TEMPLATE_ID, REGIMENT_ID, SUMMARY_ID, DERIVED_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn selectors_match_their_names() {
    assert_eq!(BASE_SELECTOR, format!(".{}", BASE_CLASS));
    assert_eq!(SCALE_INPUT_SELECTOR, format!("input[{}]", SCALE_FIELD_ATTR));
}

#[test]
fn scale_field_names_are_valid_attribute_values() {
    for f in ScaleField::ALL {
        let name = f.as_str();
        assert!(!name.is_empty());
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
