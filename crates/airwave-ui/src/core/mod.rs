//! Core, DOM-free primitives and helpers for the Web UI.
pub mod breakpoints;
pub mod store;
