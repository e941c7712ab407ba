//! Theme preference and feedback color tokens for the Vesper page.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode, the fallback when no preference is known.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used for the persisted flag and the `data-theme`
    /// attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored flag; anything but the dark marker falls back to
    /// light.
    #[must_use]
    pub fn from_flag(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The mode a toggle activation switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon on the toggle button, advertising the mode a press switches to.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Accessible label paired with [`Self::toggle_icon`].
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// `aria-pressed` value for the toggle button; dark counts as pressed.
    #[must_use]
    pub const fn pressed(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }
}

/// Feedback tone shared by the counter milestones and the password
/// strength label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Positive feedback.
    Success,
    /// Mid-scale caution.
    Warning,
    /// Negative feedback.
    Danger,
}

impl Tone {
    /// Hex color applied via inline style.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "#38a169",
            Self::Warning => "#fbbf24",
            Self::Danger => "#e53e3e",
        }
    }
}
