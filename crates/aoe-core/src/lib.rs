pub mod battlefield;
pub mod constants;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod impact;
pub mod regiment;
pub mod scale;

pub use battlefield::*;
pub use constants::*;
pub use drag::*;
pub use error::*;
pub use geometry::*;
pub use impact::*;
pub use regiment::*;
pub use scale::*;
