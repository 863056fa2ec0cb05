//! WebAssembly bindings for Bitcoin address classification.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Classifying an address into type, network and encoding
//! - Validating an address, optionally against an expected network

use wasm_bindgen::prelude::*;

pub mod classifier;
pub mod state;

// Re-export main types for JS access
pub use classifier::AddressValidator;
pub use state::AddressInfo;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
