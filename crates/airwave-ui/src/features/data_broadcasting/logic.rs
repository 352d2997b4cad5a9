//! Data broadcasting form reducers.
//!
//! # Design
//! - Reducers take the storage backend by value; pass `&mut store` to keep it.
//! - Postal code format errors become form state, not reducer errors.
//! - The form only changes after storage accepted the write.

use airwave_nvram::{
    KeyValueStore, NvramError, NvramResult, PREFECTURES, PostalCodeWrite, ReceiverInfo, Selection,
};
use tracing::debug;

use crate::features::data_broadcasting::state::DataBroadcastingForm;
use crate::i18n::LocaleCode;

/// Translation key of the inline postal code message.
pub const POSTAL_CODE_INVALID_KEY: &str = "data_broadcasting.postal_code_invalid";

/// Result of editing the postal code input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostalCodeEdit {
    /// A valid code was written.
    Stored,
    /// The input was emptied and the entry deleted.
    Cleared,
    /// The input is malformed; storage was not touched.
    Rejected,
}

/// Populate the form from persisted receiver information.
pub fn load_form<S: KeyValueStore>(store: S) -> DataBroadcastingForm {
    ReceiverInfo::new(store).load().into()
}

/// Apply a postal code edit and persist it when valid.
///
/// # Errors
/// Returns [`NvramError::Storage`] when the backend rejects the write.
pub fn edit_postal_code<S: KeyValueStore>(
    store: S,
    form: &mut DataBroadcastingForm,
    value: &str,
) -> NvramResult<PostalCodeEdit> {
    form.postal_code = value.to_string();
    let outcome = ReceiverInfo::new(store).persist_postal_code(value);
    form.postal_code_invalid = matches!(outcome, Err(NvramError::PostalCode(_)));
    match outcome {
        Ok(PostalCodeWrite::Stored(_)) => Ok(PostalCodeEdit::Stored),
        Ok(PostalCodeWrite::Cleared) => Ok(PostalCodeEdit::Cleared),
        Err(NvramError::PostalCode(err)) => {
            debug!(error = %err, "postal code not persisted");
            Ok(PostalCodeEdit::Rejected)
        }
        Err(err) => Err(err),
    }
}

/// Persist a region selection and reflect it in the form.
///
/// # Errors
/// Returns [`NvramError::InvalidSelection`] for keys outside the catalog format,
/// or [`NvramError::Storage`] when a write fails.
pub fn select_prefecture<S: KeyValueStore>(
    store: S,
    form: &mut DataBroadcastingForm,
    key: &str,
) -> NvramResult<Selection> {
    let selection = ReceiverInfo::new(store).persist_prefecture(key)?;
    form.prefecture_key = key.to_string();
    Ok(selection)
}

/// Wipe all data broadcasting entries and clear the form.
///
/// # Errors
/// Returns [`NvramError::Storage`] when enumeration or deletion fails; the form
/// is left untouched in that case.
pub fn reset_form<S: KeyValueStore>(
    store: S,
    form: &mut DataBroadcastingForm,
) -> NvramResult<usize> {
    let removed = ReceiverInfo::new(store).reset()?;
    *form = DataBroadcastingForm::default();
    Ok(removed)
}

/// `(value, label)` pairs for the region select, in catalog order.
#[must_use]
pub fn prefecture_options(locale: LocaleCode) -> Vec<(&'static str, &'static str)> {
    PREFECTURES
        .iter()
        .map(|prefecture| {
            let label = match locale {
                LocaleCode::Ja => prefecture.name_ja(),
                LocaleCode::En => prefecture.name_en(),
            };
            (prefecture.key(), label)
        })
        .collect()
}
