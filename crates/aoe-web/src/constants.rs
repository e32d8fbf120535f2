// Page element ids and class names the front-end binds to.

// Mandatory elements
pub const BATTLEFIELD_ID: &str = "battlefield"; // drag container, origin of all positions
pub const TEMPLATE_ID: &str = "template";
pub const REGIMENT_ID: &str = "regiment";
pub const SUMMARY_ID: &str = "impact-summary";

// Optional read-out of the derived pixel sizes
pub const DERIVED_ID: &str = "scale-derived";

// Scale inputs carry the field name they edit, e.g. data-scale-field="baseSize"
pub const SCALE_FIELD_ATTR: &str = "data-scale-field";
pub const SCALE_INPUT_SELECTOR: &str = "input[data-scale-field]";

// Base markers
pub const BASE_CLASS: &str = "base";
pub const BASE_SELECTOR: &str = ".base";
pub const IMPACT_CLASS_PREFIX: &str = "impact-";
