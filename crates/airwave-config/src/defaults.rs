//! Default values for client settings.
//!
//! # Design
//! - Keep non-trivial defaults in one place so `Default` and validation agree.

/// Caption font used when nothing has been chosen.
pub const CAPTION_FONT: &str = "Windows TV MaruGothic";
/// Caption opacity when opacity override is off.
pub const CAPTION_OPACITY: f64 = 1.0;
/// Comment scroll speed multiplier.
pub const COMMENT_SPEED_RATE: f64 = 1.0;
/// Comment font size in CSS pixels.
pub const COMMENT_FONT_SIZE: u32 = 34;
/// Upper bound accepted for comment font sizes.
pub const MAX_COMMENT_FONT_SIZE: u32 = 128;
