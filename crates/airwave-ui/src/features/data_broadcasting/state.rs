//! Data broadcasting panel form state.
//!
//! # Design
//! - Keep the postal code as typed so invalid input stays editable.
//! - Track the region by composite key, matching the select control values.

use airwave_nvram::{RegionalSettings, UNSET_SELECTION_KEY};

/// Local state of the data broadcasting panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataBroadcastingForm {
    /// Postal code as shown in the input.
    pub postal_code: String,
    /// Composite key of the selected region.
    pub prefecture_key: String,
    /// Whether the current postal code input failed validation.
    pub postal_code_invalid: bool,
}

impl Default for DataBroadcastingForm {
    fn default() -> Self {
        Self {
            postal_code: String::new(),
            prefecture_key: UNSET_SELECTION_KEY.to_string(),
            postal_code_invalid: false,
        }
    }
}

impl From<RegionalSettings> for DataBroadcastingForm {
    fn from(settings: RegionalSettings) -> Self {
        Self {
            prefecture_key: settings.prefecture_key().to_string(),
            postal_code: settings.postal_code,
            postal_code_invalid: false,
        }
    }
}
