// SPDX-License-Identifier: MPL-2.0
//! Notification kinds and their icon/style lookup.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Kind of a notification, driving its icon and accent styling.
///
/// The set of known kinds is closed, but callers may carry an arbitrary kind
/// string through [`Kind::Other`]. An unrecognized kind renders with the
/// `Info` icon and accent while [`Kind::class_name`] keeps the literal string,
/// so external stylesheets can still target it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    /// A kind string outside the known set, kept literally.
    Other(String),
}

impl Kind {
    /// Parses a kind string, keeping unrecognized values literally.
    pub fn parse(s: &str) -> Self {
        match s {
            "info" => Kind::Info,
            "success" => Kind::Success,
            "warning" => Kind::Warning,
            "error" => Kind::Error,
            other => Kind::Other(other.to_string()),
        }
    }

    /// The kind string as given, with no fallback for unknown kinds.
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Warning => "warning",
            Kind::Error => "error",
            Kind::Other(s) => s,
        }
    }

    /// Icon glyph for this kind. Unknown kinds fall back to the `Info` icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Kind::Info | Kind::Other(_) => "\u{1F4A1}", // 💡
            Kind::Success => "\u{2713}",                // ✓
            Kind::Warning => "\u{26A0}",                // ⚠
            Kind::Error => "\u{2715}",                  // ✕
        }
    }

    /// Style-class hook for external stylesheets.
    ///
    /// Always encodes the literal kind string, including for [`Kind::Other`] —
    /// only the icon falls back, never the class name.
    pub fn class_name(&self) -> String {
        format!("toast--{}", self.as_str())
    }

    /// Accent color for this kind. Unknown kinds use the `Info` accent.
    #[must_use]
    pub fn accent_color(&self) -> Color {
        match self {
            Kind::Info | Kind::Other(_) => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn icons_follow_the_fixed_mapping() {
        assert_eq!(Kind::Info.icon(), "💡");
        assert_eq!(Kind::Success.icon(), "✓");
        assert_eq!(Kind::Warning.icon(), "⚠");
        assert_eq!(Kind::Error.icon(), "✕");
    }

    #[test]
    fn unknown_kind_falls_back_to_info_icon_only() {
        let kind = Kind::parse("celebration");
        assert_eq!(kind.icon(), Kind::Info.icon());
        // The class name keeps the literal string.
        assert_eq!(kind.class_name(), "toast--celebration");
        assert_eq!(kind.accent_color(), Kind::Info.accent_color());
    }

    #[test]
    fn parse_recognizes_known_kinds() {
        assert_eq!(Kind::parse("info"), Kind::Info);
        assert_eq!(Kind::parse("success"), Kind::Success);
        assert_eq!(Kind::parse("warning"), Kind::Warning);
        assert_eq!(Kind::parse("error"), Kind::Error);
    }

    #[test]
    fn class_names_encode_the_kind() {
        assert_eq!(Kind::Success.class_name(), "toast--success");
        assert_eq!(Kind::Error.class_name(), "toast--error");
    }

    #[test]
    fn accent_colors_are_distinct_across_known_kinds() {
        let colors = [
            Kind::Info.accent_color(),
            Kind::Success.accent_color(),
            Kind::Warning.accent_color(),
            Kind::Error.accent_color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
