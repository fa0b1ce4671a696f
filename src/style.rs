//! Presentation style snapshot
//!
//! The theme used to be applied by overwriting a process-wide style
//! root. Here application is a pure function: a snapshot is an explicit
//! value, and applying a theme produces a new snapshot with the five
//! theme variables overwritten. Last write wins and repeated application
//! of the same theme is idempotent, which preserves the original
//! single-writer semantics without any shared mutable state.

use crate::color::theme::ThemeColors;
use crate::constants::style_vars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An immutable mapping of named style variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    vars: BTreeMap<String, String>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a new snapshot with the theme colors applied
    ///
    /// Variables not owned by the theme are carried over unchanged.
    pub fn apply_theme(&self, colors: &ThemeColors) -> StyleSnapshot {
        let mut vars = self.vars.clone();
        vars.insert(style_vars::PRIMARY.to_string(), colors.primary.clone());
        vars.insert(style_vars::SECONDARY.to_string(), colors.secondary.clone());
        vars.insert(style_vars::ACCENT.to_string(), colors.accent.clone());
        vars.insert(
            style_vars::BG_GRADIENT_START.to_string(),
            colors.bg_gradient_start.clone(),
        );
        vars.insert(
            style_vars::BG_GRADIENT_END.to_string(),
            colors.bg_gradient_end.clone(),
        );
        StyleSnapshot { vars }
    }

    /// Look up a style variable by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// All variables in the snapshot, sorted by name
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_theme_writes_all_five_vars() {
        let snapshot = StyleSnapshot::new().apply_theme(&ThemeColors::fallback());

        assert_eq!(snapshot.get(style_vars::PRIMARY), Some("#a78bfa"));
        assert_eq!(snapshot.get(style_vars::SECONDARY), Some("#818cf8"));
        assert_eq!(snapshot.get(style_vars::ACCENT), Some("#c084fc"));
        assert_eq!(snapshot.get(style_vars::BG_GRADIENT_START), Some("#1e1b4b"));
        assert_eq!(snapshot.get(style_vars::BG_GRADIENT_END), Some("#312e81"));
        assert_eq!(snapshot.vars().count(), 5);
    }

    #[test]
    fn test_apply_theme_is_pure() {
        let original = StyleSnapshot::new();
        let _applied = original.apply_theme(&ThemeColors::fallback());
        assert!(original.is_empty());
    }

    #[test]
    fn test_apply_theme_is_idempotent() {
        let theme = ThemeColors::fallback();
        let once = StyleSnapshot::new().apply_theme(&theme);
        let twice = once.apply_theme(&theme);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_write_wins() {
        let first = ThemeColors::fallback();
        let mut second = ThemeColors::fallback();
        second.primary = "#123456".to_string();

        let snapshot = StyleSnapshot::new().apply_theme(&first).apply_theme(&second);
        assert_eq!(snapshot.get(style_vars::PRIMARY), Some("#123456"));
    }

    #[test]
    fn test_foreign_vars_are_preserved() {
        let mut base = StyleSnapshot::new();
        base.vars
            .insert("--font-family".to_string(), "monospace".to_string());

        let applied = base.apply_theme(&ThemeColors::fallback());
        assert_eq!(applied.get("--font-family"), Some("monospace"));
        assert_eq!(applied.vars().count(), 6);
    }
}
