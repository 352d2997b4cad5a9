//! Receiver information persistence: postal code, prefecture, region code.
//!
//! # Design
//! - Values are base64 byte strings so the broadcast engine can read them back
//!   as raw NVRAM bytes.
//! - `prefecture` and `regioncode` are written or cleared together.
//! - Loading never fails: unreadable entries are logged and treated as unset.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info, warn};

use crate::error::{NvramError, NvramResult};
use crate::keys::{PREFECTURE, REGIONCODE, ZIPCODE, is_feature_key, receiver_info_key};
use crate::postal::{PostalCode, validate_postal_code};
use crate::prefecture::{PREFECTURES, Prefecture, Selection, find_by_code, find_by_key};
use crate::store::KeyValueStore;

/// In-memory view of the regional settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalSettings {
    /// Postal code in display form; empty when unset.
    pub postal_code: String,
    /// Selected catalog entry; the sentinel when unset.
    pub prefecture: &'static Prefecture,
}

impl Default for RegionalSettings {
    fn default() -> Self {
        Self {
            postal_code: String::new(),
            prefecture: &PREFECTURES[0],
        }
    }
}

impl RegionalSettings {
    /// Composite key of the selected prefecture.
    #[must_use]
    pub const fn prefecture_key(&self) -> &'static str {
        self.prefecture.key()
    }
}

/// Outcome of persisting a postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeWrite {
    /// The code was stored.
    Stored(PostalCode),
    /// The entry was deleted because the input was empty.
    Cleared,
}

/// Receiver information area backed by a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct ReceiverInfo<S> {
    store: S,
}

impl<S: KeyValueStore> ReceiverInfo<S> {
    /// Wrap a storage backend.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Release the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the persisted regional settings, degrading to unset on decode failures.
    pub fn load(&self) -> RegionalSettings {
        let mut settings = RegionalSettings::default();
        match self.load_postal_code() {
            Ok(Some(code)) => settings.postal_code = code.to_string(),
            Ok(None) => {}
            Err(err) => debug!(error = %err, "ignoring unreadable postal code"),
        }
        match self.load_prefecture() {
            Ok(Some(prefecture)) => settings.prefecture = prefecture,
            Ok(None) => {}
            Err(err) => debug!(error = %err, "ignoring unreadable prefecture"),
        }
        settings
    }

    /// Read the persisted postal code.
    ///
    /// # Errors
    /// Returns [`NvramError::Decode`] when the entry is not base64 of seven ASCII
    /// digits, or [`NvramError::Storage`] when the backend cannot be read.
    pub fn load_postal_code(&self) -> NvramResult<Option<PostalCode>> {
        let key = receiver_info_key(ZIPCODE);
        let Some(bytes) = self.read_bytes(&key)? else {
            return Ok(None);
        };
        let digits = String::from_utf8(bytes).map_err(|err| NvramError::Decode {
            key: key.clone(),
            reason: err.to_string(),
        })?;
        PostalCode::from_digits(&digits)
            .map(Some)
            .map_err(|err| NvramError::Decode {
                key,
                reason: err.to_string(),
            })
    }

    /// Read the persisted prefecture and resolve it against the catalog.
    ///
    /// # Errors
    /// Returns [`NvramError::Decode`] when the entry is not a single byte or names
    /// a code missing from the catalog.
    pub fn load_prefecture(&self) -> NvramResult<Option<&'static Prefecture>> {
        let key = receiver_info_key(PREFECTURE);
        let Some(bytes) = self.read_bytes(&key)? else {
            return Ok(None);
        };
        let [code] = bytes.as_slice() else {
            return Err(NvramError::Decode {
                key,
                reason: format!("expected 1 byte, found {}", bytes.len()),
            });
        };
        find_by_code(*code)
            .map(Some)
            .ok_or_else(|| NvramError::Decode {
                key,
                reason: format!("unknown prefecture code {code}"),
            })
    }

    /// Read the persisted region mask.
    ///
    /// # Errors
    /// Returns [`NvramError::Decode`] when the entry is not exactly two bytes.
    pub fn load_region_mask(&self) -> NvramResult<Option<u16>> {
        let key = receiver_info_key(REGIONCODE);
        let Some(bytes) = self.read_bytes(&key)? else {
            return Ok(None);
        };
        let [high, low] = bytes.as_slice() else {
            return Err(NvramError::Decode {
                key,
                reason: format!("expected 2 bytes, found {}", bytes.len()),
            });
        };
        Ok(Some(u16::from_be_bytes([*high, *low])))
    }

    /// Validate and persist a postal code from form input.
    ///
    /// # Errors
    /// Returns [`NvramError::PostalCode`] without touching storage when the input
    /// is malformed, or [`NvramError::Storage`] when the write fails.
    pub fn persist_postal_code(&mut self, value: &str) -> NvramResult<PostalCodeWrite> {
        let key = receiver_info_key(ZIPCODE);
        match validate_postal_code(value)? {
            Some(code) => {
                self.store.set(&key, &STANDARD.encode(code.digits()))?;
                debug!(postal_code = %code, "postal code stored");
                Ok(PostalCodeWrite::Stored(code))
            }
            None => {
                self.store.remove(&key)?;
                debug!("postal code cleared");
                Ok(PostalCodeWrite::Cleared)
            }
        }
    }

    /// Persist a prefecture selection given its composite key.
    ///
    /// When a write fails part-way, both entries are put back to what they held
    /// before the call.
    ///
    /// # Errors
    /// Returns [`NvramError::InvalidSelection`] without touching storage when the
    /// key does not parse or is not a catalog entry, or [`NvramError::Storage`]
    /// when a write fails.
    pub fn persist_prefecture(&mut self, selection_key: &str) -> NvramResult<Selection> {
        let selection = Selection::parse(selection_key)?;
        if find_by_key(selection_key).is_none() {
            return Err(NvramError::InvalidSelection {
                key: selection_key.to_string(),
                reason: "not a catalog entry",
            });
        }
        let prefecture_key = receiver_info_key(PREFECTURE);
        let region_key = receiver_info_key(REGIONCODE);
        let prior_prefecture = self.store.get(&prefecture_key)?;
        let prior_region = self.store.get(&region_key)?;

        let written = match selection {
            Selection::Unset => self
                .store
                .remove(&prefecture_key)
                .and_then(|()| self.store.remove(&region_key)),
            Selection::Region { code, region_mask } => self
                .store
                .set(&prefecture_key, &STANDARD.encode([code]))
                .and_then(|()| {
                    self.store
                        .set(&region_key, &STANDARD.encode(region_mask.to_be_bytes()))
                }),
        };
        if let Err(err) = written {
            warn!(error = %err, "receiver region write failed; restoring previous entries");
            self.restore(&prefecture_key, prior_prefecture.as_deref());
            self.restore(&region_key, prior_region.as_deref());
            return Err(err.into());
        }
        match selection {
            Selection::Unset => info!("prefecture cleared"),
            Selection::Region { code, region_mask } => {
                info!(code, region_mask, "prefecture stored");
            }
        }
        Ok(selection)
    }

    /// Delete every data broadcasting entry and return how many were removed.
    ///
    /// # Errors
    /// Returns [`NvramError::Storage`] when the keys cannot be enumerated or an
    /// entry cannot be removed.
    pub fn reset(&mut self) -> NvramResult<usize> {
        let doomed: Vec<String> = self
            .store
            .keys()?
            .into_iter()
            .filter(|key| is_feature_key(key))
            .collect();
        for key in &doomed {
            self.store.remove(key)?;
        }
        info!(removed = doomed.len(), "data broadcasting nvram reset");
        Ok(doomed.len())
    }

    fn restore(&mut self, key: &str, value: Option<&str>) {
        if matches!(self.store.get(key), Ok(current) if current.as_deref() == value) {
            return;
        }
        let restored = match value {
            Some(value) => self.store.set(key, value),
            None => self.store.remove(key),
        };
        if let Err(err) = restored {
            warn!(key, error = %err, "failed to restore receiver entry");
        }
    }

    fn read_bytes(&self, key: &str) -> NvramResult<Option<Vec<u8>>> {
        let Some(encoded) = self.store.get(key)? else {
            return Ok(None);
        };
        STANDARD
            .decode(encoded.as_bytes())
            .map(Some)
            .map_err(|err| NvramError::Decode {
                key: key.to_string(),
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefecture::UNSET_SELECTION_KEY;
    use crate::store::{MemoryStore, StorageError};

    /// Store that rejects `set` on `reject` and `remove` on `reject_remove`.
    #[derive(Default)]
    struct FailingStore {
        inner: MemoryStore,
        reject: String,
        reject_remove: String,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.reject {
                return Err(StorageError::new("set", key, "quota exceeded"));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            if key == self.reject_remove {
                return Err(StorageError::new("remove", key, "storage locked"));
            }
            self.inner.remove(key)
        }

        fn keys(&self) -> Result<Vec<String>, StorageError> {
            self.inner.keys()
        }
    }

    #[test]
    fn postal_code_is_stored_as_base64_digits() {
        let mut info = ReceiverInfo::new(MemoryStore::new());
        let write = info.persist_postal_code("100-0001").unwrap();
        assert!(matches!(write, PostalCodeWrite::Stored(_)));
        assert_eq!(
            info.store().get(&receiver_info_key(ZIPCODE)).unwrap().as_deref(),
            Some("MTAwMDAwMQ==")
        );
    }

    #[test]
    fn prefecture_is_stored_as_code_byte_and_big_endian_mask() {
        let mut info = ReceiverInfo::new(MemoryStore::new());
        info.persist_prefecture("15-0b00101010101100").unwrap();
        let store = info.store();
        assert_eq!(
            store.get(&receiver_info_key(PREFECTURE)).unwrap().as_deref(),
            Some("Dw==")
        );
        assert_eq!(
            store.get(&receiver_info_key(REGIONCODE)).unwrap().as_deref(),
            Some("Cqw=")
        );
        assert_eq!(info.load_region_mask().unwrap(), Some(0x0AAC));
    }

    #[test]
    fn invalid_selection_writes_nothing() {
        let mut info = ReceiverInfo::new(MemoryStore::new());
        let err = info.persist_prefecture("tokyo").unwrap_err();
        assert!(matches!(err, NvramError::InvalidSelection { .. }));
        assert!(info.store().is_empty());
    }

    #[test]
    fn garbage_entries_load_as_unset() {
        let store: MemoryStore = [
            (receiver_info_key(ZIPCODE), "!!not base64!!".to_string()),
            (receiver_info_key(PREFECTURE), STANDARD.encode([1u8, 2u8])),
        ]
        .into_iter()
        .collect();
        let info = ReceiverInfo::new(store);
        assert!(matches!(
            info.load_postal_code(),
            Err(NvramError::Decode { .. })
        ));
        assert!(matches!(
            info.load_prefecture(),
            Err(NvramError::Decode { .. })
        ));
        assert_eq!(info.load(), RegionalSettings::default());
    }

    #[test]
    fn unknown_prefecture_code_loads_as_unset() {
        let store: MemoryStore = [(receiver_info_key(PREFECTURE), STANDARD.encode([200u8]))]
            .into_iter()
            .collect();
        let info = ReceiverInfo::new(store);
        assert!(info.load_prefecture().is_err());
        assert!(info.load().prefecture.is_unset());
    }

    #[test]
    fn non_digit_postal_payload_loads_as_unset() {
        let store: MemoryStore = [(receiver_info_key(ZIPCODE), STANDARD.encode("abcdefg"))]
            .into_iter()
            .collect();
        let info = ReceiverInfo::new(store);
        assert_eq!(info.load().postal_code, "");
    }

    #[test]
    fn failed_region_write_rolls_back_prefecture() {
        let store = FailingStore {
            reject: receiver_info_key(REGIONCODE),
            ..FailingStore::default()
        };
        let mut info = ReceiverInfo::new(store);
        let err = info.persist_prefecture("15-0b00101010101100").unwrap_err();
        assert!(matches!(err, NvramError::Storage(_)));
        assert!(info.store().inner.is_empty());
    }

    fn seeded_with_tokyo() -> MemoryStore {
        let mut info = ReceiverInfo::new(MemoryStore::new());
        info.persist_prefecture("15-0b00101010101100").unwrap();
        info.into_inner()
    }

    fn region_entries(store: &FailingStore) -> (Option<String>, Option<String>) {
        (
            store.get(&receiver_info_key(PREFECTURE)).unwrap(),
            store.get(&receiver_info_key(REGIONCODE)).unwrap(),
        )
    }

    #[test]
    fn failed_region_overwrite_restores_previous_selection() {
        let store = FailingStore {
            inner: seeded_with_tokyo(),
            reject: receiver_info_key(REGIONCODE),
            ..FailingStore::default()
        };
        let mut info = ReceiverInfo::new(store);
        let err = info.persist_prefecture("27-0b00110011100100").unwrap_err();
        assert!(matches!(err, NvramError::Storage(_)));
        assert_eq!(
            region_entries(info.store()),
            (Some("Dw==".to_string()), Some("Cqw=".to_string()))
        );
        assert_eq!(info.load().prefecture_key(), "15-0b00101010101100");
    }

    #[test]
    fn failed_clear_restores_previous_selection() {
        let store = FailingStore {
            inner: seeded_with_tokyo(),
            reject_remove: receiver_info_key(REGIONCODE),
            ..FailingStore::default()
        };
        let mut info = ReceiverInfo::new(store);
        let err = info.persist_prefecture(UNSET_SELECTION_KEY).unwrap_err();
        assert!(matches!(err, NvramError::Storage(_)));
        assert_eq!(
            region_entries(info.store()),
            (Some("Dw==".to_string()), Some("Cqw=".to_string()))
        );
    }

    #[test]
    fn failed_prefecture_write_keeps_store_empty() {
        let store = FailingStore {
            reject: receiver_info_key(PREFECTURE),
            ..FailingStore::default()
        };
        let mut info = ReceiverInfo::new(store);
        assert!(info.persist_prefecture("15-0b00101010101100").is_err());
        assert!(info.store().inner.is_empty());
    }

    #[test]
    fn well_formed_key_outside_catalog_is_rejected() {
        let mut store = seeded_with_tokyo();
        let err = ReceiverInfo::new(&mut store)
            .persist_prefecture("7-0b1")
            .unwrap_err();
        assert!(matches!(
            err,
            NvramError::InvalidSelection {
                reason: "not a catalog entry",
                ..
            }
        ));
        let info = ReceiverInfo::new(&mut store);
        assert_eq!(info.load().prefecture_key(), "15-0b00101010101100");
        assert_eq!(info.load_region_mask().unwrap(), Some(0x0AAC));
    }

    #[test]
    fn works_over_borrowed_store() {
        let mut store = MemoryStore::new();
        ReceiverInfo::new(&mut store)
            .persist_postal_code("060-0001")
            .unwrap();
        assert_eq!(ReceiverInfo::new(&mut store).load().postal_code, "060-0001");
    }
}
