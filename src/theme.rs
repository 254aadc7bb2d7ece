use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Local storage key holding the persisted preference as a bare
/// "light"/"dark" string.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized theme `{0}`")]
pub struct ParseThemeError(String);

/// Light/dark preference. The `Display`/`FromStr` pair round-trips through
/// exactly the strings written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Fallback used when nothing is stored yet.
    pub fn for_system_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Class applied to the app shell; everything themed keys off of it.
    pub fn shell_class(self) -> &'static str {
        match self {
            Theme::Light => "app-shell theme-light",
            Theme::Dark => "app-shell theme-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_storage_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            let stored = theme.to_string();
            assert_eq!(stored.parse::<Theme>().unwrap(), theme);
        }
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_unrecognized_value_is_an_error() {
        assert!("solarized".parse::<Theme>().is_err());
        assert!("Light".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_system_preference_fallback() {
        assert_eq!(Theme::for_system_preference(true), Theme::Dark);
        assert_eq!(Theme::for_system_preference(false), Theme::Light);
    }
}
