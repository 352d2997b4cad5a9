//! Typed client settings and their enumerations.
//!
//! # Design
//! - Pure data carriers; persistence lives with the UI, validation in `validate.rs`.
//! - `#[serde(default)]` so documents written by older clients still decode.
//! - Enum variants serialize with the exact strings the server expects.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};

/// How the side panel is shown when the player opens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PanelDisplayState {
    /// Restore whatever state the panel had last time.
    #[default]
    RestorePreviousState,
    /// Always open the panel.
    AlwaysDisplay,
    /// Always start folded.
    AlwaysFold,
}

/// Initially active tab of the live TV panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TvPanelTab {
    /// Program information.
    #[default]
    Program,
    /// Channel list.
    Channel,
    /// Live comments.
    Comment,
    /// Twitter integration.
    Twitter,
}

/// Streaming quality preset for live TV.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StreamingQuality {
    /// 1080p at 60 fps.
    #[serde(rename = "1080p-60fps")]
    P1080Hfr,
    /// 1080p.
    #[default]
    #[serde(rename = "1080p")]
    P1080,
    /// 810p.
    #[serde(rename = "810p")]
    P810,
    /// 720p.
    #[serde(rename = "720p")]
    P720,
    /// 540p.
    #[serde(rename = "540p")]
    P540,
    /// 480p.
    #[serde(rename = "480p")]
    P480,
    /// 360p.
    #[serde(rename = "360p")]
    P360,
    /// 240p.
    #[serde(rename = "240p")]
    P240,
}

/// Where captured frames are saved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CaptureSaveMode {
    /// Download through the browser.
    Browser,
    /// Upload to the server capture folder.
    #[default]
    UploadServer,
    /// Both of the above.
    Both,
}

/// Whether captures include rendered captions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CaptureCaptionMode {
    /// Video frame only.
    VideoOnly,
    /// Video frame with captions composited.
    CompositingCaption,
    /// Save both variants.
    #[default]
    Both,
}

/// Initially active tab of the Twitter panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TwitterTab {
    /// Search.
    Search,
    /// Home timeline.
    Timeline,
    /// Capture list.
    #[default]
    Capture,
}

/// Where hashtags are inserted in a tweet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HashtagPosition {
    /// Before the text.
    Prepend,
    /// After the text.
    #[default]
    Append,
    /// Before the text, followed by a line break.
    PrependWithLineBreak,
    /// After the text, preceded by a line break.
    AppendWithLineBreak,
}

/// Corner used for the capture watermark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WatermarkPosition {
    /// No watermark.
    #[default]
    None,
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
}

/// Matching strategy for a muted comment keyword.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMatch {
    /// Substring match.
    #[default]
    Partial,
    /// Prefix match.
    Forward,
    /// Suffix match.
    Backward,
    /// Whole-comment match.
    Exact,
    /// Regular expression.
    Regex,
}

/// A keyword whose matching comments are hidden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutedCommentKeyword {
    /// Matching strategy.
    #[serde(rename = "match")]
    pub match_type: KeywordMatch,
    /// Keyword or pattern.
    pub pattern: String,
}

/// Settings object shared by every view of the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClientSettings {
    /// Channels pinned to the top of the channel list.
    pub pinned_channel_ids: Vec<String>,
    /// Whether the panel was open when the player was last closed.
    pub showed_panel_last_time: bool,
    /// Twitter account used for posting.
    pub selected_twitter_account_id: Option<i64>,
    /// Hashtags remembered by the tweet form.
    pub saved_twitter_hashtags: Vec<String>,
    /// Live TV streaming quality.
    pub tv_streaming_quality: StreamingQuality,
    /// Prefer HEVC to save bandwidth.
    pub tv_data_saver_mode: bool,
    /// Trade buffering for lower latency.
    pub tv_low_latency_mode: bool,
    /// Panel visibility when the player opens.
    pub panel_display_state: PanelDisplayState,
    /// Panel tab shown when the player opens.
    pub tv_panel_active_tab: TvPanelTab,
    /// Require Alt for keyboard channel switching.
    pub tv_channel_selection_requires_alt_key: bool,
    /// Caption font family.
    pub caption_font: String,
    /// Always draw a border around caption text.
    pub always_border_caption_text: bool,
    /// Override caption background opacity.
    pub specify_caption_opacity: bool,
    /// Caption opacity in `[0, 1]`.
    pub caption_opacity: f64,
    /// Render superimposed text.
    pub tv_show_superimpose: bool,
    /// Render data broadcasting content alongside video.
    pub tv_show_data_broadcasting: bool,
    /// Copy captures to the clipboard.
    pub capture_copy_to_clipboard: bool,
    /// Capture destination.
    pub capture_save_mode: CaptureSaveMode,
    /// Capture caption compositing.
    pub capture_caption_mode: CaptureCaptionMode,
    /// Synchronize settings with the server.
    pub sync_settings: bool,
    /// Comment scroll speed multiplier.
    pub comment_speed_rate: f64,
    /// Comment font size in CSS pixels.
    pub comment_font_size: u32,
    /// Close the comment form after sending.
    pub close_comment_form_after_sending: bool,
    /// Muted keywords.
    pub muted_comment_keywords: Vec<MutedCommentKeyword>,
    /// Muted niconico user ids.
    pub muted_niconico_user_ids: Vec<String>,
    /// Hide vulgar comments.
    pub mute_vulgar_comments: bool,
    /// Hide abusive comments.
    pub mute_abusive_discriminatory_prejudiced_comments: bool,
    /// Hide big-size comments.
    pub mute_big_size_comments: bool,
    /// Hide fixed-position comments.
    pub mute_fixed_comments: bool,
    /// Hide colored comments.
    pub mute_colored_comments: bool,
    /// Hide comments repeating the same character.
    pub mute_consecutive_same_characters_comments: bool,
    /// Fold the panel after tweeting.
    pub fold_panel_after_sending_tweet: bool,
    /// Clear hashtags when the program changes.
    pub reset_hashtag_when_program_switches: bool,
    /// Add the channel hashtag automatically.
    pub auto_add_watching_channel_hashtag: bool,
    /// Twitter panel tab shown first.
    pub twitter_active_tab: TwitterTab,
    /// Hashtag placement in tweets.
    pub tweet_hashtag_position: HashtagPosition,
    /// Capture watermark placement.
    pub tweet_capture_watermark_position: WatermarkPosition,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            pinned_channel_ids: Vec::new(),
            showed_panel_last_time: true,
            selected_twitter_account_id: None,
            saved_twitter_hashtags: Vec::new(),
            tv_streaming_quality: StreamingQuality::default(),
            tv_data_saver_mode: false,
            tv_low_latency_mode: true,
            panel_display_state: PanelDisplayState::default(),
            tv_panel_active_tab: TvPanelTab::default(),
            tv_channel_selection_requires_alt_key: false,
            caption_font: defaults::CAPTION_FONT.to_string(),
            always_border_caption_text: true,
            specify_caption_opacity: false,
            caption_opacity: defaults::CAPTION_OPACITY,
            tv_show_superimpose: true,
            tv_show_data_broadcasting: true,
            capture_copy_to_clipboard: false,
            capture_save_mode: CaptureSaveMode::default(),
            capture_caption_mode: CaptureCaptionMode::default(),
            sync_settings: false,
            comment_speed_rate: defaults::COMMENT_SPEED_RATE,
            comment_font_size: defaults::COMMENT_FONT_SIZE,
            close_comment_form_after_sending: true,
            muted_comment_keywords: Vec::new(),
            muted_niconico_user_ids: Vec::new(),
            mute_vulgar_comments: true,
            mute_abusive_discriminatory_prejudiced_comments: true,
            mute_big_size_comments: true,
            mute_fixed_comments: false,
            mute_colored_comments: false,
            mute_consecutive_same_characters_comments: false,
            fold_panel_after_sending_tweet: false,
            reset_hashtag_when_program_switches: true,
            auto_add_watching_channel_hashtag: true,
            twitter_active_tab: TwitterTab::default(),
            tweet_hashtag_position: HashtagPosition::default(),
            tweet_capture_watermark_position: WatermarkPosition::default(),
        }
    }
}

impl ClientSettings {
    /// Decode and validate a settings document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::InvalidField`] when a value is out of range.
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let settings: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json { source })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Encode the settings document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string(self).map_err(|source| ConfigError::Json { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_enable_data_broadcasting() {
        let settings = ClientSettings::default();
        assert!(settings.tv_show_data_broadcasting);
        assert_eq!(settings.comment_font_size, 34);
        assert_eq!(settings.caption_font, "Windows TV MaruGothic");
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let settings =
            ClientSettings::from_json(r#"{"tv_show_data_broadcasting": false}"#).unwrap();
        assert!(!settings.tv_show_data_broadcasting);
        assert_eq!(settings.panel_display_state, PanelDisplayState::RestorePreviousState);
        assert!(settings.tv_low_latency_mode);
    }

    #[test]
    fn enums_use_wire_strings() {
        let mut settings = ClientSettings::default();
        settings.tv_streaming_quality = StreamingQuality::P1080Hfr;
        settings.muted_comment_keywords.push(MutedCommentKeyword {
            match_type: KeywordMatch::Regex,
            pattern: "^w+$".to_string(),
        });
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["tv_streaming_quality"], json!("1080p-60fps"));
        assert_eq!(value["capture_save_mode"], json!("UploadServer"));
        assert_eq!(value["tweet_capture_watermark_position"], json!("None"));
        assert_eq!(
            value["muted_comment_keywords"][0],
            json!({"match": "regex", "pattern": "^w+$"})
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ClientSettings::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        let err = ClientSettings::from_json(r#"{"panel_display_state": "Sometimes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn to_json_round_trips() {
        let mut settings = ClientSettings::default();
        settings.pinned_channel_ids = vec!["gr011".to_string()];
        settings.tv_show_data_broadcasting = false;
        let raw = settings.to_json().unwrap();
        assert_eq!(ClientSettings::from_json(&raw).unwrap(), settings);
    }
}
