/// DaisyUI color tokens used by the settings controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisyColor {
    Primary,
    Error,
}

impl DaisyColor {
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Error => "error",
        }
    }
}

/// Sizing tokens; settings pages switch to `Sm` on small screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisySize {
    Sm,
    #[default]
    Md,
}

impl DaisySize {
    #[must_use]
    pub(crate) const fn for_layout(small_screen: bool) -> Self {
        if small_screen { Self::Sm } else { Self::Md }
    }

    #[must_use]
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Sm => "sm",
            Self::Md => "md",
        };
        format!("{prefix}-{suffix}")
    }
}

/// Compose `{prefix}-{tone}` when a tone is set.
#[must_use]
pub(crate) fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}
