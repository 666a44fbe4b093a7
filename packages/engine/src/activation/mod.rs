//! Activation & resize driver
//!
//! Builds the world lazily when a section scrolls into view, rebuilds it
//! (debounced) when the viewport is resized, and turns host frames into
//! session ticks.

mod clock;
mod driver;
mod trigger;

pub use clock::FrameClock;
pub use driver::ActivationDriver;
pub use trigger::ViewportTrigger;
