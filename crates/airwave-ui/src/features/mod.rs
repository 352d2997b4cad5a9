//! Feature slices for the settings UI.
pub mod data_broadcasting;
