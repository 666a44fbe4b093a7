//! Tumble Engine - DOM elements as rigid bodies, in WASM
//!
//! Elements marked `.object` inside an `.object-container` fall in from
//! above once their section scrolls into view, collide with each other and
//! the container edges, and can be dragged with the pointer. Each frame the
//! simulated pose of every body is written back to its element as a CSS
//! transform.
//!
//! Architecture:
//! - core/        - clamp, rng, debounce, logging macros
//! - domain/      - config, geometry snapshot, body registry, drag session
//! - dom/         - element access (web_sys on wasm32)
//! - systems/     - rigid-body world the elements live in
//! - simulation/  - session: build/destroy, drag, clamp & render passes
//! - activation/  - scroll triggers, frame clock, debounced resize
//! - api/         - Public JS API

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod dom;
pub mod systems;
pub mod simulation;
pub mod activation;
pub mod api;

// Compatibility re-exports (keeps short internal/external paths working)
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("🦀 Tumble WASM Engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use activation::ActivationDriver;
#[cfg(target_arch = "wasm32")]
pub use api::wasm::TumbleStage;
pub use domain::Config;
pub use simulation::SimulationSession;
