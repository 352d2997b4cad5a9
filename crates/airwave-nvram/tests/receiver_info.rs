use airwave_nvram::keys::{PREFECTURE, REGIONCODE, ZIPCODE, receiver_info_key};
use airwave_nvram::{
    KeyValueStore, MemoryStore, NvramError, PREFECTURES, PostalCodeWrite, ReceiverInfo,
    RegionalSettings, UNSET_SELECTION_KEY,
};

fn seeded_store() -> MemoryStore {
    [
        ("nvram_prefix=receiverinfo%2Fzipcode", "MTAwMDAwMQ=="),
        ("nvram_prefix=receiverinfo%2Fprefecture", "Dw=="),
        ("nvram_prefix=receiverinfo%2Fregioncode", "Cqw="),
        ("nvram_prefix=~%2Fbookmark", "AAEC"),
        ("nvram_prefix=broadcast%2Fnhk%2Fgroup", "AA=="),
        ("airwave.settings", "{}"),
        ("airwave.locale", "\"ja\""),
    ]
    .into_iter()
    .collect()
}

#[test]
fn valid_postal_codes_round_trip() {
    for value in ["000-0000", "100-0001", "530-0001", "900-0014", "999-9999"] {
        let mut info = ReceiverInfo::new(MemoryStore::new());
        info.persist_postal_code(value).expect("valid postal code persists");
        assert_eq!(info.load().postal_code, value);
    }
}

#[test]
fn empty_postal_code_deletes_existing_entry() {
    let mut info = ReceiverInfo::new(MemoryStore::new());
    info.persist_postal_code("100-0001").unwrap();
    assert!(info.store().contains(&receiver_info_key(ZIPCODE)));

    let write = info.persist_postal_code("").unwrap();
    assert_eq!(write, PostalCodeWrite::Cleared);
    assert!(!info.store().contains(&receiver_info_key(ZIPCODE)));
    assert_eq!(info.load().postal_code, "");
}

#[test]
fn empty_postal_code_never_creates_entry() {
    let mut info = ReceiverInfo::new(MemoryStore::new());
    info.persist_postal_code("").unwrap();
    assert!(info.store().is_empty());
}

#[test]
fn invalid_postal_codes_are_never_written() {
    let mut info = ReceiverInfo::new(MemoryStore::new());
    info.persist_postal_code("100-0001").unwrap();
    for value in ["12345", "abc-defg", "1000001", "100-000"] {
        let err = info.persist_postal_code(value).unwrap_err();
        assert!(matches!(err, NvramError::PostalCode(_)), "{value}");
    }
    assert_eq!(info.load().postal_code, "100-0001");
    assert_eq!(info.store().len(), 1);
}

#[test]
fn every_catalog_entry_round_trips() {
    for entry in PREFECTURES.iter() {
        let mut info = ReceiverInfo::new(MemoryStore::new());
        info.persist_prefecture(entry.key()).expect("catalog key persists");
        let loaded = info.load();
        assert_eq!(loaded.prefecture_key(), entry.key());

        let prefecture = info.store().contains(&receiver_info_key(PREFECTURE));
        let region = info.store().contains(&receiver_info_key(REGIONCODE));
        assert_eq!(prefecture, region, "{} broke the pairing", entry.key());
        assert_eq!(prefecture, !entry.is_unset());
    }
}

#[test]
fn sentinel_clears_prefecture_and_region_together() {
    let mut info = ReceiverInfo::new(seeded_store());
    info.persist_prefecture(UNSET_SELECTION_KEY).unwrap();
    assert!(!info.store().contains(&receiver_info_key(PREFECTURE)));
    assert!(!info.store().contains(&receiver_info_key(REGIONCODE)));
    assert!(info.store().contains(&receiver_info_key(ZIPCODE)));
    assert!(info.load().prefecture.is_unset());
}

#[test]
fn seeded_entries_load_into_form_state() {
    let info = ReceiverInfo::new(seeded_store());
    let settings = info.load();
    assert_eq!(settings.postal_code, "100-0001");
    assert_eq!(settings.prefecture.name_en(), "Tokyo");
    assert_eq!(info.load_region_mask().unwrap(), Some(0x0AAC));
}

#[test]
fn reset_removes_only_feature_entries() {
    let mut info = ReceiverInfo::new(seeded_store());
    let removed = info.reset().unwrap();
    assert_eq!(removed, 5);

    let store = info.into_inner();
    assert_eq!(
        store.keys().unwrap(),
        vec!["airwave.locale".to_string(), "airwave.settings".to_string()]
    );
    assert_eq!(ReceiverInfo::new(store).load(), RegionalSettings::default());
}

#[test]
fn reset_on_empty_store_is_a_no_op() {
    let mut info = ReceiverInfo::new(MemoryStore::new());
    assert_eq!(info.reset().unwrap(), 0);
    assert_eq!(info.load(), RegionalSettings::default());
}

#[test]
fn keys_outside_catalog_are_never_written() {
    let mut info = ReceiverInfo::new(MemoryStore::new());
    for key in ["7-0b1", "49-0b00000000000001", "50-0b00101010101100"] {
        let err = info.persist_prefecture(key).unwrap_err();
        assert!(matches!(err, NvramError::InvalidSelection { .. }), "{key}");
    }
    assert!(info.store().is_empty());
}
