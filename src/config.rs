use anyhow::{bail, Context, Result};

use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Environment variable overriding the initial window size, as `WIDTHxHEIGHT`.
pub const WINDOW_ENV: &str = "OVERTURE_WINDOW";

/// Startup settings resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
        }
    }
}

impl Settings {
    /// Resolves settings from the environment, falling back to defaults when
    /// nothing is set. A present-but-malformed override is an error rather
    /// than a silent default.
    pub fn from_env() -> Result<Self> {
        match std::env::var(WINDOW_ENV) {
            Ok(raw) => Self::parse_window(&raw)
                .with_context(|| format!("invalid {WINDOW_ENV}={raw:?}")),
            Err(_) => Ok(Self::default()),
        }
    }

    fn parse_window(raw: &str) -> Result<Self> {
        let (w, h) = raw
            .split_once(['x', 'X'])
            .context("expected WIDTHxHEIGHT, e.g. 1280x800")?;
        let window_width: f32 = w.trim().parse().context("width is not a number")?;
        let window_height: f32 = h.trim().parse().context("height is not a number")?;
        if !window_width.is_finite() || !window_height.is_finite() {
            bail!("window dimensions must be finite");
        }
        if window_width < 320.0 || window_height < 240.0 {
            bail!("window dimensions must be at least 320x240");
        }
        Ok(Self {
            window_width,
            window_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_accepts_both_separators() {
        let s = Settings::parse_window("1024x768").unwrap();
        assert_eq!(s.window_width, 1024.0);
        assert_eq!(s.window_height, 768.0);

        let s = Settings::parse_window("1920X1080").unwrap();
        assert_eq!(s.window_width, 1920.0);
        assert_eq!(s.window_height, 1080.0);
    }

    #[test]
    fn test_parse_window_trims_whitespace() {
        let s = Settings::parse_window(" 800 x 600 ").unwrap();
        assert_eq!(s.window_width, 800.0);
        assert_eq!(s.window_height, 600.0);
    }

    #[test]
    fn test_parse_window_rejects_garbage() {
        assert!(Settings::parse_window("").is_err());
        assert!(Settings::parse_window("1280").is_err());
        assert!(Settings::parse_window("widexhigh").is_err());
        assert!(Settings::parse_window("NaNxNaN").is_err());
        assert!(Settings::parse_window("10x10").is_err());
        assert!(Settings::parse_window("-1280x800").is_err());
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.window_width, WINDOW_WIDTH);
        assert_eq!(s.window_height, WINDOW_HEIGHT);
    }
}
