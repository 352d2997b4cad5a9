use airwave_config::{
    ClientSettings, ConfigError, StreamingQuality, SyncableClientSettings, TvPanelTab,
};
use serde_json::json;

#[test]
fn stored_document_from_older_client_decodes() {
    let raw = json!({
        "pinned_channel_ids": ["gr011", "gr021"],
        "tv_streaming_quality": "720p",
        "tv_panel_active_tab": "Comment",
        "tv_show_data_broadcasting": false,
        "some_removed_setting": 42
    })
    .to_string();

    let settings = ClientSettings::from_json(&raw).expect("document decodes");
    assert_eq!(settings.pinned_channel_ids.len(), 2);
    assert_eq!(settings.tv_streaming_quality, StreamingQuality::P720);
    assert_eq!(settings.tv_panel_active_tab, TvPanelTab::Comment);
    assert!(!settings.tv_show_data_broadcasting);
    assert_eq!(settings.comment_font_size, 34);
}

#[test]
fn out_of_range_document_is_rejected() {
    let raw = json!({ "caption_opacity": -0.5 }).to_string();
    match ClientSettings::from_json(&raw) {
        Err(ConfigError::InvalidField { field, .. }) => assert_eq!(field, "caption_opacity"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn server_payload_merges_into_local_settings() {
    let payload = json!({
        "pinned_channel_ids": ["bs141"],
        "saved_twitter_hashtags": ["#anime"],
        "panel_display_state": "AlwaysFold",
        "tv_panel_active_tab": "Twitter",
        "tv_channel_selection_requires_alt_key": true,
        "caption_font": "Rounded M+ 1m for ARIB",
        "always_border_caption_text": false,
        "specify_caption_opacity": true,
        "caption_opacity": 0.5,
        "tv_show_superimpose": false,
        "capture_save_mode": "Both",
        "capture_caption_mode": "VideoOnly",
        "comment_speed_rate": 1.5,
        "comment_font_size": 28,
        "close_comment_form_after_sending": false,
        "muted_comment_keywords": [{"match": "forward", "pattern": "www"}],
        "muted_niconico_user_ids": ["123"],
        "mute_vulgar_comments": false,
        "mute_abusive_discriminatory_prejudiced_comments": false,
        "mute_big_size_comments": false,
        "mute_fixed_comments": true,
        "mute_colored_comments": true,
        "mute_consecutive_same_characters_comments": true,
        "fold_panel_after_sending_tweet": true,
        "reset_hashtag_when_program_switches": false,
        "auto_add_watching_channel_hashtag": false,
        "twitter_active_tab": "Timeline",
        "tweet_hashtag_position": "PrependWithLineBreak",
        "tweet_capture_watermark_position": "BottomRight"
    });
    let synced: SyncableClientSettings = serde_json::from_value(payload).expect("payload decodes");

    let mut local = ClientSettings::default();
    local.tv_show_data_broadcasting = false;
    local.tv_streaming_quality = StreamingQuality::P480;
    local.apply_synced(synced);

    local.validate().expect("merged settings stay valid");
    assert_eq!(local.pinned_channel_ids, vec!["bs141".to_string()]);
    assert_eq!(local.comment_font_size, 28);
    assert!(!local.tv_show_data_broadcasting);
    assert_eq!(local.tv_streaming_quality, StreamingQuality::P480);
}
