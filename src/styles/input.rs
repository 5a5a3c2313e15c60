use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

use crate::theme::PaletteColors;

/// Understated call-to-action input: translucent fill, hairline border that
/// warms to the accent color while focused.
pub fn cta_input_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + Clone {
    move |_, status| {
        let is_focused = matches!(
            status,
            text_input::Status::Focused { .. } | text_input::Status::Hovered
        );
        let border_color = if is_focused {
            Color { a: 0.5, ..palette.accent }
        } else {
            Color { a: 0.2, ..Color::WHITE }
        };
        text_input::Style {
            background: Background::Color(Color { a: 0.05, ..Color::WHITE }),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 2.0.into(),
            },
            icon: palette.muted,
            placeholder: palette.dim,
            value: palette.text,
            selection: Color { a: 0.3, ..palette.accent },
        }
    }
}
