//! Range and pattern checks for client settings.

use regex::Regex;
use tracing::debug;

use crate::defaults::MAX_COMMENT_FONT_SIZE;
use crate::error::{ConfigError, ConfigResult};
use crate::model::{ClientSettings, KeywordMatch};

impl ClientSettings {
    /// Check every bounded field and compile regex keywords.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.caption_font.trim().is_empty() {
            return Err(ConfigError::invalid("caption_font", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.caption_opacity) {
            return Err(ConfigError::invalid(
                "caption_opacity",
                "must be between 0 and 1",
            ));
        }
        if !self.comment_speed_rate.is_finite() || self.comment_speed_rate <= 0.0 {
            return Err(ConfigError::invalid(
                "comment_speed_rate",
                "must be a positive number",
            ));
        }
        if !(1..=MAX_COMMENT_FONT_SIZE).contains(&self.comment_font_size) {
            return Err(ConfigError::invalid(
                "comment_font_size",
                format!("must be between 1 and {MAX_COMMENT_FONT_SIZE}"),
            ));
        }
        for (idx, keyword) in self.muted_comment_keywords.iter().enumerate() {
            let field = format!("muted_comment_keywords[{idx}].pattern");
            if keyword.pattern.is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
            if keyword.match_type == KeywordMatch::Regex {
                Regex::new(&keyword.pattern).map_err(|err| {
                    debug!(pattern = %keyword.pattern, error = %err, "rejecting muted keyword");
                    ConfigError::invalid(field, format!("invalid regular expression: {err}"))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::MutedCommentKeyword;
    use crate::{ClientSettings, ConfigError, KeywordMatch};

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::InvalidField { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        ClientSettings::default().validate().unwrap();
    }

    #[test]
    fn opacity_outside_unit_range_is_rejected() {
        let mut settings = ClientSettings::default();
        settings.caption_opacity = 1.5;
        assert_eq!(field_of(settings.validate().unwrap_err()), "caption_opacity");
        settings.caption_opacity = 0.0;
        settings.validate().unwrap();
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let mut settings = ClientSettings::default();
        settings.comment_speed_rate = 0.0;
        assert_eq!(field_of(settings.validate().unwrap_err()), "comment_speed_rate");
        settings.comment_speed_rate = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn font_size_is_bounded() {
        let mut settings = ClientSettings::default();
        settings.comment_font_size = 0;
        assert_eq!(field_of(settings.validate().unwrap_err()), "comment_font_size");
        settings.comment_font_size = 129;
        assert!(settings.validate().is_err());
        settings.comment_font_size = 128;
        settings.validate().unwrap();
    }

    #[test]
    fn regex_keywords_must_compile() {
        let mut settings = ClientSettings::default();
        settings.muted_comment_keywords = vec![
            MutedCommentKeyword {
                match_type: KeywordMatch::Partial,
                pattern: "(".to_string(),
            },
            MutedCommentKeyword {
                match_type: KeywordMatch::Regex,
                pattern: "(".to_string(),
            },
        ];
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "muted_comment_keywords[1].pattern"
        );
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let mut settings = ClientSettings::default();
        settings.muted_comment_keywords.push(MutedCommentKeyword {
            match_type: KeywordMatch::Exact,
            pattern: String::new(),
        });
        assert!(settings.validate().is_err());
    }
}
