//! Light/dark theme selection.

use serde::Deserialize;

/// Theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// DaisyUI theme name written to `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "scholarflow-light",
            Self::Dark => "scholarflow-dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Mode matching a `prefers-color-scheme: dark` query result.
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Mode from the `prefers-color-scheme` queries, or `fallback` when the browser
    /// matches neither `dark` nor `light`.
    #[must_use]
    pub const fn from_color_scheme(prefers_dark: bool, prefers_light: bool, fallback: Self) -> Self {
        if prefers_dark {
            Self::Dark
        } else if prefers_light {
            Self::Light
        } else {
            fallback
        }
    }

    /// True for [`ThemeMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn toggling_twice_returns_original() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn media_query_maps_to_mode() {
        assert!(ThemeMode::from_prefers_dark(true).is_dark());
        assert_eq!(ThemeMode::from_prefers_dark(false), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.as_str(), "scholarflow-dark");
    }

    #[test]
    fn configured_default_applies_without_a_scheme_preference() {
        let default = ThemeMode::Dark;
        assert_eq!(ThemeMode::from_color_scheme(false, false, default), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_color_scheme(false, true, default), ThemeMode::Light);
        assert_eq!(
            ThemeMode::from_color_scheme(true, false, ThemeMode::Light),
            ThemeMode::Dark
        );
    }
}
