use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

use sharetree::domain::selection::Checkbox;

/// Design tokens for the sharetree UI.
///
/// All colors and icons must be sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Checkbox states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";
    pub const PRESENT: &str = "✓";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    // Key hints.
    pub const NAV_VERTICAL: &str = "↑↓";
    pub const NAV_HORIZONTAL: &str = "→←";

    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    // Checkbox states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";
    pub const PRESENT: &str = "[=]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    // Key hints.
    pub const NAV_VERTICAL: &str = "Up/Down";
    pub const NAV_HORIZONTAL: &str = "Right/Left";

    pub const SEPARATOR: &str = "-";
}

/// Glyph for a checkbox state
pub fn checkbox_icon(checkbox: Checkbox, unicode: bool) -> &'static str {
    match (checkbox, unicode) {
        (Checkbox::Checked, true) => icons::SELECTED,
        (Checkbox::Checked, false) => icons_ascii::SELECTED,
        (Checkbox::Unchecked, true) => icons::UNSELECTED,
        (Checkbox::Unchecked, false) => icons_ascii::UNSELECTED,
        (Checkbox::Indeterminate, true) => icons::PARTIAL,
        (Checkbox::Indeterminate, false) => icons_ascii::PARTIAL,
        (Checkbox::Present, true) => icons::PRESENT,
        (Checkbox::Present, false) => icons_ascii::PRESENT,
    }
}

/// Custom dialoguer theme for the confirmation prompt after browsing.
///
/// Wraps `ColorfulTheme`. The chosen answer is rendered with the success or
/// error icon (Unicode or ASCII).
pub struct ShareTreeTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl ShareTreeTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    fn answer_icon(&self, yes: bool) -> &'static str {
        match (yes, self.unicode) {
            (true, true) => icons::SUCCESS,
            (true, false) => icons_ascii::SUCCESS,
            (false, true) => icons::ERROR,
            (false, false) => icons_ascii::ERROR,
        }
    }
}

impl Theme for ShareTreeTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        match selection {
            Some(yes) => write!(
                f,
                "{} {} {}",
                self.answer_icon(yes),
                prompt,
                if yes { "yes" } else { "no" }
            ),
            None => self
                .inner
                .format_confirm_prompt_selection(f, prompt, selection),
        }
    }
}
