//! DaisyUI wrappers for the form controls used by the settings pages.

pub(crate) mod atoms;
pub(crate) mod foundations;

pub(crate) use atoms::*;
pub(crate) use foundations::*;
