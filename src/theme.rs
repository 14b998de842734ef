//! Process-wide light/dark setting.
//!
//! `ThemeContext` is passed to every screen that needs it rather than looked
//! up globally. When backed by storage the choice survives restarts.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#f2f2f2",
                card: "#ffffff",
                text: "#222222",
                secondary: "#555555",
                accent: "#4e94f3",
            },
            Theme::Dark => Palette {
                background: "#1a1a1a",
                card: "#2a2a2a",
                text: "#ffffff",
                secondary: "#bbbbbb",
                accent: "#ffd700",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Hex colors screens draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Shared theme flag. Clones observe the same setting.
#[derive(Clone)]
pub struct ThemeContext {
    current: Arc<RwLock<Theme>>,
    storage: Option<Arc<dyn KeyValueStorage>>,
    // Held across read-persist-flip so concurrent toggles each flip once.
    toggle_lock: Arc<Mutex<()>>,
}

impl ThemeContext {
    /// In-memory context, not persisted.
    pub fn new(theme: Theme) -> Self {
        Self {
            current: Arc::new(RwLock::new(theme)),
            storage: None,
            toggle_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the persisted theme, falling back to `fallback` when nothing
    /// usable is stored.
    pub async fn initialize(storage: Arc<dyn KeyValueStorage>, fallback: Theme) -> Self {
        let theme = match storage.get_item(THEME_KEY).await {
            Ok(Some(raw)) => serde_json::from_str::<Theme>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unreadable theme record");
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!(error = %e, "Theme storage unavailable");
                fallback
            }
        };

        Self {
            current: Arc::new(RwLock::new(theme)),
            storage: Some(storage),
            toggle_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn current(&self) -> Theme {
        *self.current.read()
    }

    pub fn is_dark(&self) -> bool {
        self.current() == Theme::Dark
    }

    pub fn palette(&self) -> Palette {
        self.current().palette()
    }

    /// Flip between light and dark.
    ///
    /// The new value is persisted first; if that fails the setting is
    /// left unchanged. Toggles are serialized, so two concurrent calls flip
    /// the theme twice.
    pub async fn toggle(&self) -> Result<Theme, StorageError> {
        let _guard = self.toggle_lock.lock().await;
        let next = self.current().toggled();
        if let Some(storage) = &self.storage {
            let encoded = format!("\"{}\"", next.as_str());
            storage.set_item(THEME_KEY, &encoded).await?;
        }
        *self.current.write() = next;
        tracing::info!(theme = %next, "Theme changed");
        Ok(next)
    }
}
