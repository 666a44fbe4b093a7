//! Core - small utilities used by every other layer
//!
//! - utils/    - console logging macros (must be first for macro export!)
//! - math      - non-panicking clamp
//! - random    - xorshift32 spawn jitter
//! - debounce  - deadline-based debounce / one-shot timers

#[macro_use]
pub mod utils;
pub mod math;
pub mod random;
pub mod debounce;

pub use debounce::{Debounce, Deadline};
pub use math::clamp;
pub use random::Rng;
