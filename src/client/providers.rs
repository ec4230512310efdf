// src/client/providers.rs

use crate::models::user::UserResponse;

/// An authenticated session: the bearer token plus the user it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserResponse,
}

/// Session context established once at the composition root.
///
/// Descendants only read it; the single fact consumed elsewhere is
/// whether a session is present.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub session: Option<Session>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Theme configuration for the application tree.
#[derive(Debug, Clone)]
pub struct ThemeOptions {
    pub default_theme: Theme,
    /// Follow the platform's light/dark preference when it is known.
    pub enable_system: bool,
    /// Keep the visual transition when the theme changes.
    pub transition_on_change: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            default_theme: Theme::Dark,
            enable_system: true,
            transition_on_change: true,
        }
    }
}

/// Theme context established once at the composition root.
///
/// Resolution order: explicit override, then system preference (when
/// enabled and known), then the configured default.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    pub options: ThemeOptions,
    pub override_theme: Option<Theme>,
    pub system_theme: Option<Theme>,
}

impl ThemeContext {
    pub fn new(options: ThemeOptions) -> Self {
        Self {
            options,
            override_theme: None,
            system_theme: None,
        }
    }

    /// Records the platform preference as reported by the host.
    pub fn set_system_theme(&mut self, theme: Option<Theme>) {
        self.system_theme = theme;
    }

    /// Pins the theme regardless of system preference.
    pub fn set_theme(&mut self, theme: Theme) {
        self.override_theme = Some(theme);
    }

    pub fn resolved(&self) -> Theme {
        if let Some(theme) = self.override_theme {
            return theme;
        }
        if self.options.enable_system {
            if let Some(theme) = self.system_theme {
                return theme;
            }
        }
        self.options.default_theme
    }
}

/// Composition root bundling the session and theme contexts for the
/// rendered tree. Carries no business logic.
#[derive(Debug, Clone, Default)]
pub struct Providers {
    pub session: SessionContext,
    pub theme: ThemeContext,
}

impl Providers {
    pub fn new(session: SessionContext, theme: ThemeContext) -> Self {
        Self { session, theme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_dark() {
        let theme = ThemeContext::default();
        assert_eq!(theme.resolved(), Theme::Dark);
        assert!(theme.options.enable_system);
        assert!(theme.options.transition_on_change);
    }

    #[test]
    fn test_system_preference_applies_when_enabled() {
        let mut theme = ThemeContext::default();
        theme.set_system_theme(Some(Theme::Light));
        assert_eq!(theme.resolved(), Theme::Light);
    }

    #[test]
    fn test_system_preference_ignored_when_disabled() {
        let mut theme = ThemeContext::new(ThemeOptions {
            enable_system: false,
            ..ThemeOptions::default()
        });
        theme.set_system_theme(Some(Theme::Light));
        assert_eq!(theme.resolved(), Theme::Dark);
    }

    #[test]
    fn test_override_wins_over_system() {
        let mut theme = ThemeContext::default();
        theme.set_system_theme(Some(Theme::Light));
        theme.set_theme(Theme::Dark);
        assert_eq!(theme.resolved(), Theme::Dark);
    }

    #[test]
    fn test_session_context_gates_on_presence() {
        let anonymous = SessionContext::anonymous();
        assert!(!anonymous.is_authenticated());
    }
}
