use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::SettingsState;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::ThemeChanged(theme) => SettingsState { theme, error: None },
            SettingsIntent::ToggleFailed(reason) => SettingsState {
                error: Some(reason),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_theme_change_clears_error() {
        let state = SettingsReducer::reduce(
            SettingsState::default(),
            SettingsIntent::ToggleFailed("read-only".to_string()),
        );
        assert_eq!(state.theme, Theme::Light);
        assert!(state.error.is_some());

        let state = SettingsReducer::reduce(state, SettingsIntent::ThemeChanged(Theme::Dark));
        assert!(state.dark_mode_enabled());
        assert!(state.error.is_none());
        assert_eq!(state.palette(), Theme::Dark.palette());
    }
}
