//! Device-independent subset of [`ClientSettings`] exchanged with the server.
//!
//! Settings that would be awkward to share between devices (streaming quality,
//! data saver, the data broadcasting toggle, the sync flag itself, ...) are
//! left out and survive [`ClientSettings::apply_synced`] untouched.

use serde::{Deserialize, Serialize};

use crate::model::{
    CaptureCaptionMode, CaptureSaveMode, ClientSettings, HashtagPosition, MutedCommentKeyword,
    PanelDisplayState, TvPanelTab, TwitterTab, WatermarkPosition,
};

/// Settings payload synchronized across devices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[allow(clippy::struct_excessive_bools, missing_docs)]
pub struct SyncableClientSettings {
    pub pinned_channel_ids: Vec<String>,
    pub saved_twitter_hashtags: Vec<String>,
    pub panel_display_state: PanelDisplayState,
    pub tv_panel_active_tab: TvPanelTab,
    pub tv_channel_selection_requires_alt_key: bool,
    pub caption_font: String,
    pub always_border_caption_text: bool,
    pub specify_caption_opacity: bool,
    pub caption_opacity: f64,
    pub tv_show_superimpose: bool,
    pub capture_save_mode: CaptureSaveMode,
    pub capture_caption_mode: CaptureCaptionMode,
    pub comment_speed_rate: f64,
    pub comment_font_size: u32,
    pub close_comment_form_after_sending: bool,
    pub muted_comment_keywords: Vec<MutedCommentKeyword>,
    pub muted_niconico_user_ids: Vec<String>,
    pub mute_vulgar_comments: bool,
    pub mute_abusive_discriminatory_prejudiced_comments: bool,
    pub mute_big_size_comments: bool,
    pub mute_fixed_comments: bool,
    pub mute_colored_comments: bool,
    pub mute_consecutive_same_characters_comments: bool,
    pub fold_panel_after_sending_tweet: bool,
    pub reset_hashtag_when_program_switches: bool,
    pub auto_add_watching_channel_hashtag: bool,
    pub twitter_active_tab: TwitterTab,
    pub tweet_hashtag_position: HashtagPosition,
    pub tweet_capture_watermark_position: WatermarkPosition,
}

impl From<&ClientSettings> for SyncableClientSettings {
    fn from(settings: &ClientSettings) -> Self {
        Self {
            pinned_channel_ids: settings.pinned_channel_ids.clone(),
            saved_twitter_hashtags: settings.saved_twitter_hashtags.clone(),
            panel_display_state: settings.panel_display_state,
            tv_panel_active_tab: settings.tv_panel_active_tab,
            tv_channel_selection_requires_alt_key: settings.tv_channel_selection_requires_alt_key,
            caption_font: settings.caption_font.clone(),
            always_border_caption_text: settings.always_border_caption_text,
            specify_caption_opacity: settings.specify_caption_opacity,
            caption_opacity: settings.caption_opacity,
            tv_show_superimpose: settings.tv_show_superimpose,
            capture_save_mode: settings.capture_save_mode,
            capture_caption_mode: settings.capture_caption_mode,
            comment_speed_rate: settings.comment_speed_rate,
            comment_font_size: settings.comment_font_size,
            close_comment_form_after_sending: settings.close_comment_form_after_sending,
            muted_comment_keywords: settings.muted_comment_keywords.clone(),
            muted_niconico_user_ids: settings.muted_niconico_user_ids.clone(),
            mute_vulgar_comments: settings.mute_vulgar_comments,
            mute_abusive_discriminatory_prejudiced_comments: settings
                .mute_abusive_discriminatory_prejudiced_comments,
            mute_big_size_comments: settings.mute_big_size_comments,
            mute_fixed_comments: settings.mute_fixed_comments,
            mute_colored_comments: settings.mute_colored_comments,
            mute_consecutive_same_characters_comments: settings
                .mute_consecutive_same_characters_comments,
            fold_panel_after_sending_tweet: settings.fold_panel_after_sending_tweet,
            reset_hashtag_when_program_switches: settings.reset_hashtag_when_program_switches,
            auto_add_watching_channel_hashtag: settings.auto_add_watching_channel_hashtag,
            twitter_active_tab: settings.twitter_active_tab,
            tweet_hashtag_position: settings.tweet_hashtag_position,
            tweet_capture_watermark_position: settings.tweet_capture_watermark_position,
        }
    }
}

impl ClientSettings {
    /// Overwrite the synchronized fields, keeping device-local ones.
    pub fn apply_synced(&mut self, synced: SyncableClientSettings) {
        let SyncableClientSettings {
            pinned_channel_ids,
            saved_twitter_hashtags,
            panel_display_state,
            tv_panel_active_tab,
            tv_channel_selection_requires_alt_key,
            caption_font,
            always_border_caption_text,
            specify_caption_opacity,
            caption_opacity,
            tv_show_superimpose,
            capture_save_mode,
            capture_caption_mode,
            comment_speed_rate,
            comment_font_size,
            close_comment_form_after_sending,
            muted_comment_keywords,
            muted_niconico_user_ids,
            mute_vulgar_comments,
            mute_abusive_discriminatory_prejudiced_comments,
            mute_big_size_comments,
            mute_fixed_comments,
            mute_colored_comments,
            mute_consecutive_same_characters_comments,
            fold_panel_after_sending_tweet,
            reset_hashtag_when_program_switches,
            auto_add_watching_channel_hashtag,
            twitter_active_tab,
            tweet_hashtag_position,
            tweet_capture_watermark_position,
        } = synced;
        self.pinned_channel_ids = pinned_channel_ids;
        self.saved_twitter_hashtags = saved_twitter_hashtags;
        self.panel_display_state = panel_display_state;
        self.tv_panel_active_tab = tv_panel_active_tab;
        self.tv_channel_selection_requires_alt_key = tv_channel_selection_requires_alt_key;
        self.caption_font = caption_font;
        self.always_border_caption_text = always_border_caption_text;
        self.specify_caption_opacity = specify_caption_opacity;
        self.caption_opacity = caption_opacity;
        self.tv_show_superimpose = tv_show_superimpose;
        self.capture_save_mode = capture_save_mode;
        self.capture_caption_mode = capture_caption_mode;
        self.comment_speed_rate = comment_speed_rate;
        self.comment_font_size = comment_font_size;
        self.close_comment_form_after_sending = close_comment_form_after_sending;
        self.muted_comment_keywords = muted_comment_keywords;
        self.muted_niconico_user_ids = muted_niconico_user_ids;
        self.mute_vulgar_comments = mute_vulgar_comments;
        self.mute_abusive_discriminatory_prejudiced_comments =
            mute_abusive_discriminatory_prejudiced_comments;
        self.mute_big_size_comments = mute_big_size_comments;
        self.mute_fixed_comments = mute_fixed_comments;
        self.mute_colored_comments = mute_colored_comments;
        self.mute_consecutive_same_characters_comments = mute_consecutive_same_characters_comments;
        self.fold_panel_after_sending_tweet = fold_panel_after_sending_tweet;
        self.reset_hashtag_when_program_switches = reset_hashtag_when_program_switches;
        self.auto_add_watching_channel_hashtag = auto_add_watching_channel_hashtag;
        self.twitter_active_tab = twitter_active_tab;
        self.tweet_hashtag_position = tweet_hashtag_position;
        self.tweet_capture_watermark_position = tweet_capture_watermark_position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synced_payload_omits_device_local_fields() {
        let value = serde_json::to_value(SyncableClientSettings::from(&ClientSettings::default()))
            .unwrap();
        let object = value.as_object().unwrap();
        for local in [
            "tv_show_data_broadcasting",
            "tv_streaming_quality",
            "tv_data_saver_mode",
            "tv_low_latency_mode",
            "sync_settings",
            "showed_panel_last_time",
            "selected_twitter_account_id",
            "capture_copy_to_clipboard",
        ] {
            assert!(!object.contains_key(local), "{local} must stay on device");
        }
        assert!(object.contains_key("pinned_channel_ids"));
    }

    #[test]
    fn applying_synced_settings_keeps_data_broadcasting_flag() {
        let mut remote = ClientSettings::default();
        remote.comment_font_size = 40;
        remote.pinned_channel_ids = vec!["bs101".to_string()];

        let mut local = ClientSettings::default();
        local.tv_show_data_broadcasting = false;
        local.sync_settings = true;
        local.apply_synced(SyncableClientSettings::from(&remote));

        assert_eq!(local.comment_font_size, 40);
        assert_eq!(local.pinned_channel_ids, vec!["bs101".to_string()]);
        assert!(!local.tv_show_data_broadcasting);
        assert!(local.sync_settings);
    }
}
