//! Persistent key names for the receiver NVRAM emulation.
//!
//! Every NVRAM entry lives under [`FEATURE_PREFIX`]. Receiver information
//! entries are addressed as `nvram_prefix=<url-encoded path>`, so
//! `receiverinfo/zipcode` becomes `nvram_prefix=receiverinfo%2Fzipcode`.

use urlencoding::encode;

/// Prefix shared by every persisted data broadcasting entry. Reset scope.
pub const FEATURE_PREFIX: &str = "nvram_";

/// NVRAM area holding receiver-wide information.
pub const RECEIVER_INFO_AREA: &str = "receiverinfo/";

/// Postal code entry name.
pub const ZIPCODE: &str = "zipcode";
/// Prefecture code entry name.
pub const PREFECTURE: &str = "prefecture";
/// Region mask entry name.
pub const REGIONCODE: &str = "regioncode";

/// Full storage key for an entry in the receiver information area.
#[must_use]
pub fn receiver_info_key(entry: &str) -> String {
    let path = format!("{RECEIVER_INFO_AREA}{entry}");
    format!("{FEATURE_PREFIX}prefix={}", encode(&path))
}

/// Whether a storage key belongs to the data broadcasting feature.
#[must_use]
pub fn is_feature_key(key: &str) -> bool {
    key.starts_with(FEATURE_PREFIX)
}
