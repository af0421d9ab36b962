use crate::error::FolioError;
use crate::surface::Rgb;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored attribute wins; otherwise follow the OS color-scheme preference.
    pub fn resolve(attribute: Option<&str>, prefers_light: bool) -> Self {
        match attribute.and_then(|a| a.parse().ok()) {
            Some(theme) => theme,
            None if prefers_light => Theme::Light,
            None => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Single color used for every particle and link under this theme.
    pub fn particle_rgb(self) -> Rgb {
        match self {
            Theme::Dark => Rgb::new(255, 255, 255),
            Theme::Light => Rgb::new(17, 17, 24),
        }
    }

    /// Value for `<meta name="theme-color">`.
    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Dark => "#000000",
            Theme::Light => "#faf8ff",
        }
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(FolioError::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
