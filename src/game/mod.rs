//! The side-scrolling game itself.
//!
//! The player falls under constant gravity and jumps on input while
//! full-height obstacles scroll in from the right. Touching the solid part of
//! an obstacle, or leaving the visible area vertically, ends the run.

pub mod geometry;
pub mod logic;
pub mod types;

pub use geometry::Bounds;
pub use logic::*;
pub use types::*;
