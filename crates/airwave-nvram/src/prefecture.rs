//! Prefecture catalog and composite selection keys.
//!
//! # Design
//! - Each entry is keyed by `"<code>-0b<mask>"`: the receiver prefecture code
//!   followed by the 14-bit region mask as a binary literal.
//! - Masks are the ARIB STD-B10 area codes; the four Hokkaido sub-regions share one.
//! - `"255-0b0"` is the unset sentinel and never reaches storage.

use crate::error::{NvramError, NvramResult};

/// Composite key of the unset sentinel.
pub const UNSET_SELECTION_KEY: &str = "255-0b0";

/// Number of meaningful bits in a region mask.
pub const REGION_MASK_BITS: usize = 14;

/// A selectable receiver region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefecture {
    key: &'static str,
    name_ja: &'static str,
    name_en: &'static str,
}

impl Prefecture {
    const fn new(key: &'static str, name_ja: &'static str, name_en: &'static str) -> Self {
        Self {
            key,
            name_ja,
            name_en,
        }
    }

    /// Composite selection key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Japanese display label.
    #[must_use]
    pub const fn name_ja(&self) -> &'static str {
        self.name_ja
    }

    /// English display label.
    #[must_use]
    pub const fn name_en(&self) -> &'static str {
        self.name_en
    }

    /// Decimal code portion of the key.
    #[must_use]
    pub fn code_prefix(&self) -> &'static str {
        self.key.split_once('-').map_or(self.key, |(code, _)| code)
    }

    /// Whether this entry is the unset sentinel.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.key == UNSET_SELECTION_KEY
    }

    /// Parsed selection for this entry.
    ///
    /// # Errors
    /// Returns [`NvramError::InvalidSelection`] if the catalog key is malformed.
    pub fn selection(&self) -> NvramResult<Selection> {
        Selection::parse(self.key)
    }
}

/// Parsed composite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No prefecture configured.
    Unset,
    /// A concrete region.
    Region {
        /// Prefecture code persisted as a single byte.
        code: u8,
        /// Region bitmask persisted as two big-endian bytes.
        region_mask: u16,
    },
}

impl Selection {
    /// Split a composite key into its code and region mask.
    ///
    /// # Errors
    /// Returns [`NvramError::InvalidSelection`] when the key has no `-0b`
    /// separator, the code is not a decimal byte, the code is the reserved
    /// sentinel value, or the mask is not a binary literal of at most 14 digits.
    pub fn parse(key: &str) -> NvramResult<Self> {
        if key == UNSET_SELECTION_KEY {
            return Ok(Self::Unset);
        }
        let invalid = |reason| NvramError::InvalidSelection {
            key: key.to_string(),
            reason,
        };
        let (code, mask) = key
            .split_once('-')
            .ok_or_else(|| invalid("missing '-' separator"))?;
        let code = code
            .parse::<u8>()
            .map_err(|_| invalid("code must be a decimal byte"))?;
        if code == u8::MAX {
            return Err(invalid("code 255 is reserved for the unset selection"));
        }
        let digits = mask
            .strip_prefix("0b")
            .ok_or_else(|| invalid("mask must start with 0b"))?;
        if digits.is_empty() || digits.len() > REGION_MASK_BITS {
            return Err(invalid("mask must have between 1 and 14 binary digits"));
        }
        let region_mask =
            u16::from_str_radix(digits, 2).map_err(|_| invalid("mask must be binary"))?;
        Ok(Self::Region { code, region_mask })
    }
}

/// The unset sentinel entry.
pub const UNSET: Prefecture = Prefecture::new(UNSET_SELECTION_KEY, "未設定", "Not set");

/// Every selectable entry, sentinel first.
pub static PREFECTURES: [Prefecture; 51] = [
    UNSET,
    Prefecture::new("0-0b00000101101011", "北海道 (道央)", "Hokkaido (Central)"),
    Prefecture::new("1-0b00000101101011", "北海道 (道南)", "Hokkaido (South)"),
    Prefecture::new("2-0b00000101101011", "北海道 (道北)", "Hokkaido (North)"),
    Prefecture::new("3-0b00000101101011", "北海道 (道東)", "Hokkaido (East)"),
    Prefecture::new("4-0b00010001100111", "青森県", "Aomori"),
    Prefecture::new("5-0b00010111010100", "岩手県", "Iwate"),
    Prefecture::new("6-0b00011101011000", "宮城県", "Miyagi"),
    Prefecture::new("7-0b00101011000110", "秋田県", "Akita"),
    Prefecture::new("8-0b00111001001100", "山形県", "Yamagata"),
    Prefecture::new("9-0b00000110101110", "福島県", "Fukushima"),
    Prefecture::new("10-0b00110001101001", "茨城県", "Ibaraki"),
    Prefecture::new("11-0b00111000111000", "栃木県", "Tochigi"),
    Prefecture::new("12-0b00100110001011", "群馬県", "Gunma"),
    Prefecture::new("13-0b00011001001011", "埼玉県", "Saitama"),
    Prefecture::new("14-0b00000111000111", "千葉県", "Chiba"),
    Prefecture::new("15-0b00101010101100", "東京都", "Tokyo"),
    Prefecture::new("16-0b00010101101100", "神奈川県", "Kanagawa"),
    Prefecture::new("17-0b00010011001110", "新潟県", "Niigata"),
    Prefecture::new("18-0b00010100111001", "富山県", "Toyama"),
    Prefecture::new("19-0b00101001101010", "石川県", "Ishikawa"),
    Prefecture::new("20-0b00100100101101", "福井県", "Fukui"),
    Prefecture::new("21-0b00110101001010", "山梨県", "Yamanashi"),
    Prefecture::new("22-0b00100111010010", "長野県", "Nagano"),
    Prefecture::new("23-0b00101001100101", "岐阜県", "Gifu"),
    Prefecture::new("24-0b00101001011010", "静岡県", "Shizuoka"),
    Prefecture::new("25-0b00100101100110", "愛知県", "Aichi"),
    Prefecture::new("26-0b00001011011100", "三重県", "Mie"),
    Prefecture::new("27-0b00110011100100", "滋賀県", "Shiga"),
    Prefecture::new("28-0b00010110011010", "京都府", "Kyoto"),
    Prefecture::new("29-0b00110010110010", "大阪府", "Osaka"),
    Prefecture::new("30-0b00011001110100", "兵庫県", "Hyogo"),
    Prefecture::new("31-0b00101010010011", "奈良県", "Nara"),
    Prefecture::new("32-0b00001110010110", "和歌山県", "Wakayama"),
    Prefecture::new("33-0b00110100100011", "鳥取県", "Tottori"),
    Prefecture::new("34-0b00001100011011", "島根県", "Shimane"),
    Prefecture::new("35-0b00001010110101", "岡山県", "Okayama"),
    Prefecture::new("36-0b00101100110001", "広島県", "Hiroshima"),
    Prefecture::new("37-0b00101110011000", "山口県", "Yamaguchi"),
    Prefecture::new("38-0b00111001100010", "徳島県", "Tokushima"),
    Prefecture::new("39-0b00100110110100", "香川県", "Kagawa"),
    Prefecture::new("40-0b00000110011101", "愛媛県", "Ehime"),
    Prefecture::new("41-0b00001011100011", "高知県", "Kochi"),
    Prefecture::new("42-0b00011000101101", "福岡県", "Fukuoka"),
    Prefecture::new("43-0b00100101011001", "佐賀県", "Saga"),
    Prefecture::new("44-0b00101000101011", "長崎県", "Nagasaki"),
    Prefecture::new("45-0b00100010100111", "熊本県", "Kumamoto"),
    Prefecture::new("46-0b00110010001101", "大分県", "Oita"),
    Prefecture::new("47-0b00110100011100", "宮崎県", "Miyazaki"),
    Prefecture::new("48-0b00110101000101", "鹿児島県", "Kagoshima"),
    Prefecture::new("49-0b00001101110010", "沖縄県", "Okinawa"),
];

/// Look up a catalog entry by its composite key.
#[must_use]
pub fn find_by_key(key: &str) -> Option<&'static Prefecture> {
    PREFECTURES.iter().find(|entry| entry.key == key)
}

/// Look up the catalog entry whose code prefix matches `code`.
#[must_use]
pub fn find_by_code(code: u8) -> Option<&'static Prefecture> {
    let code = code.to_string();
    PREFECTURES.iter().find(|entry| entry.code_prefix() == code)
}
