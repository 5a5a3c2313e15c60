use iced::{theme, Theme};

use super::palette::palette;

/// Creates the custom Overture theme.
pub fn app_theme() -> Theme {
    let p = palette();
    Theme::custom(
        "Overture".to_string(),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            warning: theme::Palette::DARK.warning,
            danger: p.danger,
        },
    )
}
