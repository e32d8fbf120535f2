use glam::Vec2;

// Default scale inputs, in real-world millimetres unless noted.

pub const DEFAULT_BASE_SIZE_MM: f32 = 20.0; // side of one square base
pub const DEFAULT_ROWS: u32 = 5;
pub const DEFAULT_COLUMNS: u32 = 5;
pub const DEFAULT_TEMPLATE_SIZE_MM: f32 = 75.0; // template diameter
pub const DEFAULT_SCALE_FACTOR: f32 = 4.0; // pixels per millimetre

// Template centre before the first drag, relative to the container.
pub const DEFAULT_TEMPLATE_POSITION: Vec2 = Vec2::new(50.0, 50.0);
