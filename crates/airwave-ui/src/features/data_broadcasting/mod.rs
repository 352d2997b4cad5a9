//! Data broadcasting settings feature wiring.
//!
//! # Design
//! - Keep receiver information editing contained in a single feature slice.
//! - Storage access goes through `airwave_nvram::KeyValueStore` so the form
//!   logic runs natively in tests and against `localStorage` in the browser.
//! - The enable toggle writes the shared settings store, never local state.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
