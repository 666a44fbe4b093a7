//! Public JS API

#[cfg(target_arch = "wasm32")]
pub mod wasm;
