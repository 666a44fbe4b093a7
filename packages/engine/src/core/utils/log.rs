//! Console logging
//!
//! On wasm32 these forward to `web_sys::console`. Native builds (tests,
//! tooling) evaluate the format arguments and drop them.
//!
//! Usage:
//! ```ignore
//! engine_log!("world built: {} bodies", count);
//! engine_warn!("no container for section {}", idx);
//! ```

macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
