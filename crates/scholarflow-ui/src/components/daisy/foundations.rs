use yew::prelude::*;

/// Shared DaisyUI color tokens used by multiple components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisyColor {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"primary"`) for the color.
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Common sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisySize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl DaisySize {
    /// Returns the suffix used by DaisyUI for the selected size.
    #[must_use]
    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Adds a prefix (e.g. `btn`) to the size suffix for class composition.
    #[must_use]
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

/// Variants used across button-like elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisyVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
    Soft,
}

impl DaisyVariant {
    /// Maps the variant to the DaisyUI class suffix.
    #[must_use]
    pub(crate) const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Outline => Some("outline"),
            Self::Ghost => Some("ghost"),
            Self::Soft => Some("soft"),
        }
    }

    /// Prefixed class, e.g. `btn-outline` or `badge-soft`.
    #[must_use]
    pub(crate) fn with_prefix(self, prefix: &str) -> Option<String> {
        self.suffix().map(|suffix| format!("{prefix}-{suffix}"))
    }
}

/// Convenience helper for composing class lists with an optional tone.
#[must_use]
pub(crate) fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}

/// Base class plus size, variant and tone modifiers.
#[must_use]
pub(crate) fn control_classes(
    base: &'static str,
    size: DaisySize,
    variant: DaisyVariant,
    tone: Option<DaisyColor>,
    extra: &Classes,
) -> Classes {
    classes!(
        base,
        size.with_prefix(base),
        variant.with_prefix(base),
        tone_class(base, tone),
        extra.clone()
    )
}
