use crate::theme::{Palette, Theme};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub theme: Theme,
    pub error: Option<String>,
}

impl UiState for SettingsState {}

impl SettingsState {
    /// Position of the "Enable Dark Mode" switch.
    pub fn dark_mode_enabled(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }
}
