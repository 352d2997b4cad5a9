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

//! Receiver NVRAM emulation backing the data broadcasting settings panel.
//!
//! Layout: `store.rs` (key/value storage seam), `keys.rs` (persistent key
//! names), `postal.rs` (postal code validation and storage form),
//! `prefecture.rs` (region catalog and composite selection keys),
//! `receiver.rs` (`ReceiverInfo` load/persist/reset operations).

pub mod error;
pub mod keys;
pub mod postal;
pub mod prefecture;
pub mod receiver;
pub mod store;

pub use error::{NvramError, NvramResult};
pub use postal::{PostalCode, PostalCodeError, validate_postal_code};
pub use prefecture::{PREFECTURES, Prefecture, Selection, UNSET_SELECTION_KEY};
pub use receiver::{PostalCodeWrite, ReceiverInfo, RegionalSettings};
pub use store::{KeyValueStore, MemoryStore, StorageError};
