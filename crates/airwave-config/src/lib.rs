#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

//! Client-side settings shared across the Airwave viewer.
//!
//! Layout: `model.rs` (typed settings and enumerations), `validate.rs`
//! (range and pattern checks), `sync.rs` (device-independent subset exchanged
//! with the server), `defaults.rs` (default values).

pub mod defaults;
pub mod error;
pub mod model;
pub mod sync;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{
    CaptureCaptionMode, CaptureSaveMode, ClientSettings, HashtagPosition, KeywordMatch,
    MutedCommentKeyword, PanelDisplayState, StreamingQuality, TvPanelTab, TwitterTab,
    WatermarkPosition,
};
pub use sync::SyncableClientSettings;
