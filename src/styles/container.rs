use iced::widget::container;
use iced::{Background, Border, Color, Theme};

use crate::theme::PaletteColors;

/// Glass card style for the process demo.
pub fn demo_card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.02, ..Color::WHITE })),
        text_color: Some(palette.text),
        border: Border {
            color: Color { a: 0.08, ..Color::WHITE },
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}
