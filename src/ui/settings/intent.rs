use crate::theme::Theme;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Current theme, read on focus or after a successful toggle.
    ThemeChanged(Theme),
    ToggleFailed(String),
}

impl Intent for SettingsIntent {}
