//! Browser-facing adapters.
pub(crate) mod console;
pub(crate) mod storage;
